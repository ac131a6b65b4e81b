#![no_std]

mod contracts;
mod testutils;
mod tests;
