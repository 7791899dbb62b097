//! Multiplication operator trait implementation
//!
//! The product is computed on the integer values of both operands and
//! expressed in the radix of the left-hand side.
//!

use crate::*;
use crate::stdlib::ops::{Mul, MulAssign};


impl Mul<&DigitList> for &DigitList {
    type Output = DigitList;

    #[inline]
    fn mul(self, rhs: &DigitList) -> DigitList {
        self.multiply(Some(rhs))
    }
}

forward_all_binop_to_ref_ref!(impl Mul for DigitList, mul);

impl Mul<DigitSlice<'_>> for &DigitList {
    type Output = DigitList;

    #[inline]
    fn mul(self, rhs: DigitSlice<'_>) -> DigitList {
        self.multiply(Some(&rhs))
    }
}

impl MulAssign<&DigitList> for DigitList {
    #[inline]
    fn mul_assign(&mut self, rhs: &DigitList) {
        let product = self.to_biguint() * rhs.to_biguint();
        self.populate_from_biguint(&product);
    }
}

impl MulAssign<DigitList> for DigitList {
    #[inline]
    fn mul_assign(&mut self, rhs: DigitList) {
        *self *= &rhs;
    }
}
