// \file src/macros.rs
//! macros for forwarding operator impls

// Implement owned/borrowed operand combinations of a binary operator by
// borrowing both sides and calling the ref-ref impl
macro_rules! forward_all_binop_to_ref_ref {
    (impl $imp:ident for $res:ty, $method:ident) => {
        forward_all_binop_to_ref_ref!(@impl $imp, $method, $res => $res, $res, |a, b| (&a, &b));
        forward_all_binop_to_ref_ref!(@impl $imp, $method, $res => $res, &$res, |a, b| (&a, b));
        forward_all_binop_to_ref_ref!(@impl $imp, $method, $res => &$res, $res, |a, b| (a, &b));
    };
    (@impl $imp:ident, $method:ident, $out:ty => $lhs:ty, $rhs:ty, |$a:ident, $b:ident| $borrow:expr) => {
        impl $imp<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn $method(self, other: $rhs) -> $out {
                let $a = self;
                let $b = other;
                let (lhs, rhs) = $borrow;
                $imp::$method(lhs, rhs)
            }
        }
    };
}
