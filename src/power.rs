use crate::num::One;

pub trait PowerU {
    /// Compute the power with an unsigned integer exponent.
    ///
    /// Runtime complexity: O(log n) calls of `mul`.
    fn powu(&self, n: u64) -> Self;
}

impl<T: Clone + One> PowerU for T {
    fn powu(&self, mut n: u64) -> Self {
        // right to left binary exponentiation
        let mut result = Self::one();
        let mut base = self.clone();
        while n != 0 {
            if n & 1 != 0 {
                result = result * base.clone();
            }
            n >>= 1;
            if n != 0 {
                base = base.clone() * base;
            }
        }
        result
    }
}
