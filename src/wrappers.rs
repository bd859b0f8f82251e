//! Compound-value units: a pair, an optional slot, and a two-variant enum.
//!
//! These print in `Debug` form; the shape of the wrapper is the point, not
//! the payload.

use std::io;

pub fn pair_unit() -> (i32, String) {
    (1, String::from("a"))
}

pub fn write_pair(out: &mut dyn io::Write) -> io::Result<()> {
    writeln!(out, "{:?}", pair_unit())
}

pub fn demo_pair() -> io::Result<()> {
    write_pair(&mut io::stdout().lock())
}

/// The slot starts empty and the demo drops 5 into it.
pub fn optional_unit() -> Option<i32> {
    let mut slot: Option<i32> = None;
    slot.replace(5);
    slot
}

pub fn write_optional(out: &mut dyn io::Write) -> io::Result<()> {
    writeln!(out, "{:?}", optional_unit())
}

pub fn demo_optional() -> io::Result<()> {
    write_optional(&mut io::stdout().lock())
}

/// Either a number or text, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(i32),
    Text(String),
}

impl Default for Value {
    fn default() -> Self {
        Value::Number(0)
    }
}

pub fn variant_unit() -> Value {
    Value::Number(10)
}

pub fn write_variant(out: &mut dyn io::Write) -> io::Result<()> {
    writeln!(out, "{:?}", variant_unit())
}

pub fn demo_variant() -> io::Result<()> {
    write_variant(&mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_unit_holds_number_and_text() {
        assert_eq!(pair_unit(), (1, String::from("a")));
    }

    #[test]
    fn optional_unit_is_filled() {
        assert_eq!(optional_unit(), Some(5));
    }

    #[test]
    fn variant_unit_holds_the_number_arm() {
        assert_eq!(variant_unit(), Value::Number(10));
        assert_ne!(variant_unit(), Value::Text(String::from("10")));
    }

    #[test]
    fn variant_defaults_to_zero_like_its_first_arm() {
        assert_eq!(Value::default(), Value::Number(0));
    }

    #[test]
    fn wrapper_units_print_debug_lines() {
        let mut buf = Vec::new();
        write_pair(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "(1, \"a\")\n");

        let mut buf = Vec::new();
        write_optional(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Some(5)\n");

        let mut buf = Vec::new();
        write_variant(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Number(10)\n");
    }
}
