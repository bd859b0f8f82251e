//! Capability traits for the two binary operations the catalogue demonstrates.
//!
//! Every demo unit pairs two values of one concrete type; these traits are
//! the bounds the generic template asks for. Both operands always share the
//! type; there is no cross-type operation anywhere in the catalogue.

use std::borrow::Cow;
use std::ffi::OsString;

/// The type-appropriate "sum": wrapping addition for fixed-width integers,
/// IEEE addition for floats, OR for `bool`, concatenation for text.
pub trait Combine {
    fn combine(self, other: Self) -> Self;
}

/// The type-appropriate product. Text types do not scale.
pub trait Scale {
    fn scale(self, other: Self) -> Self;
}

// Integer overflow wraps at the type's width, matching the fixed-width
// two's-complement behavior the demos rely on.
macro_rules! impl_wrapping_arith {
    ($($ty:ty),* $(,)?) => {$(
        impl Combine for $ty {
            fn combine(self, other: Self) -> Self {
                self.wrapping_add(other)
            }
        }

        impl Scale for $ty {
            fn scale(self, other: Self) -> Self {
                self.wrapping_mul(other)
            }
        }
    )*};
}

impl_wrapping_arith!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_arith {
    ($($ty:ty),* $(,)?) => {$(
        impl Combine for $ty {
            fn combine(self, other: Self) -> Self {
                self + other
            }
        }

        impl Scale for $ty {
            fn scale(self, other: Self) -> Self {
                self * other
            }
        }
    )*};
}

impl_float_arith!(f32, f64);

impl Combine for bool {
    fn combine(self, other: Self) -> Self {
        self | other
    }
}

impl Scale for bool {
    fn scale(self, other: Self) -> Self {
        self & other
    }
}

impl Combine for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl Combine for Cow<'static, str> {
    fn combine(self, other: Self) -> Self {
        // Concatenation always forces the owned side.
        Cow::Owned(self.into_owned() + other.as_ref())
    }
}

impl Combine for OsString {
    fn combine(mut self, other: Self) -> Self {
        self.push(&other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_combine_is_addition() {
        assert_eq!(0u8.combine(1), 1);
        assert_eq!(0i64.combine(1), 1);
        assert_eq!(40u32.combine(2), 42);
    }

    #[test]
    fn integer_combine_wraps_at_width() {
        assert_eq!(u8::MAX.combine(1), u8::MIN);
        assert_eq!(i8::MAX.combine(1), i8::MIN);
        assert_eq!(u128::MAX.combine(1), 0);
    }

    #[test]
    fn integer_scale_is_multiplication() {
        assert_eq!(6i32.scale(7), 42);
        assert_eq!(u16::MAX.scale(2), u16::MAX - 1);
    }

    #[test]
    fn combine_commutes_on_numbers() {
        for (a, b) in [(0u32, 1u32), (17, 25), (u32::MAX, 3)] {
            assert_eq!(a.combine(b), b.combine(a));
            assert_eq!(a.scale(b), b.scale(a));
        }
    }

    #[test]
    fn float_arithmetic() {
        assert_eq!(0.0f64.combine(1.0), 1.0);
        assert_eq!(1.5f32.scale(2.0), 3.0);
    }

    #[test]
    fn bool_or_and() {
        assert_eq!(false.combine(true), true);
        assert_eq!(false.combine(false), false);
        assert_eq!(true.scale(true), true);
        assert_eq!(true.scale(false), false);
    }

    #[test]
    fn string_combine_concatenates_in_order() {
        let joined = String::from("name").combine(String::from("route"));
        assert_eq!(joined, "nameroute");
    }

    #[test]
    fn string_combine_is_not_commutative() {
        let a = String::from("name");
        let b = String::from("route");
        assert_ne!(a.clone().combine(b.clone()), b.combine(a));
    }

    #[test]
    fn cow_combine_returns_owned() {
        let joined = Cow::Borrowed("nombre").combine(Cow::Borrowed("path"));
        assert_eq!(joined, "nombrepath");
        assert!(matches!(joined, Cow::Owned(_)));
    }

    #[test]
    fn os_string_combine_appends() {
        let joined = OsString::from("wname").combine(OsString::from("wtext"));
        assert_eq!(joined, OsString::from("wnamewtext"));
    }
}
