use soroban_sdk::U256;

pub trait ExtraMath {
    fn sqrt(&self) -> Self;
}

impl ExtraMath for U256 {
    // floor(sqrt(n)) by Newton iteration
    fn sqrt(&self) -> U256 {
        let e = self.env();
        let one = U256::from_u32(e, 1);
        if *self <= one {
            return self.clone();
        }
        let two = U256::from_u32(e, 2);

        // (n + 1) / 2 without overflowing at the top of the range
        let mut z = self.sub(&one).div(&two).add(&one);
        let mut y = self.clone();

        while z < y {
            y = z.clone();
            z = self.div(&z).add(&z).div(&two);
        }

        y
    }
}
