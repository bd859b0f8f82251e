//! Fundamental-type units: one per built-in scalar.
//!
//! Every numeric unit pairs 0 with 1 (`false` with `true` for `bool`), so
//! each printed line is the smallest interesting value the type can show.

use std::io;

use crate::pair::ValuePair;

// One unit = a pair constructor, a writer with the registry signature, and a
// stdout convenience. Generated per type rather than hand-copied per file.
macro_rules! scalar_unit {
    ($(#[$doc:meta])* $ty:ty => $pair:ident, $write:ident, $demo:ident, $base:expr, $step:expr) => {
        $(#[$doc])*
        pub fn $pair() -> ValuePair<$ty> {
            ValuePair::new($base, $step)
        }

        pub fn $write(out: &mut dyn io::Write) -> io::Result<()> {
            $pair().write_combined(out)
        }

        pub fn $demo() -> io::Result<()> {
            $pair().demo()
        }
    };
}

scalar_unit!(
    /// Flags start cleared; combining ORs the set flag in.
    bool => bool_pair, write_bool, demo_bool, false, true
);

scalar_unit!(i8 => i8_pair, write_i8, demo_i8, 0, 1);
scalar_unit!(i16 => i16_pair, write_i16, demo_i16, 0, 1);
scalar_unit!(i32 => i32_pair, write_i32, demo_i32, 0, 1);
scalar_unit!(i64 => i64_pair, write_i64, demo_i64, 0, 1);
scalar_unit!(i128 => i128_pair, write_i128, demo_i128, 0, 1);

scalar_unit!(
    /// Pointer-width signed offset.
    isize => isize_pair, write_isize, demo_isize, 0, 1
);

scalar_unit!(u8 => u8_pair, write_u8, demo_u8, 0, 1);

scalar_unit!(
    /// UTF-16 code units, the narrowest wide-character width.
    u16 => u16_pair, write_u16, demo_u16, 0, 1
);

scalar_unit!(
    /// Wide enough for any Unicode scalar value.
    u32 => u32_pair, write_u32, demo_u32, 0, 1
);

scalar_unit!(u64 => u64_pair, write_u64, demo_u64, 0, 1);
scalar_unit!(u128 => u128_pair, write_u128, demo_u128, 0, 1);

scalar_unit!(
    /// Collection sizes and indices.
    usize => usize_pair, write_usize, demo_usize, 0, 1
);

scalar_unit!(f32 => f32_pair, write_f32, demo_f32, 0.0, 1.0);
scalar_unit!(f64 => f64_pair, write_f64, demo_f64, 0.0, 1.0);
