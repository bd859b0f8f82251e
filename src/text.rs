//! String-like units: owned, clone-on-write, and platform-native text.
//!
//! Combining text is concatenation, so unlike the numeric units these are
//! order-sensitive.

use std::borrow::Cow;
use std::ffi::OsString;
use std::io;

use crate::pair::ValuePair;

pub fn string_pair() -> ValuePair<String> {
    ValuePair::new(String::from("name"), String::from("route"))
}

pub fn write_string(out: &mut dyn io::Write) -> io::Result<()> {
    string_pair().write_combined(out)
}

pub fn demo_string() -> io::Result<()> {
    string_pair().demo()
}

/// Both sides start borrowed from literals; combining forces one owned
/// allocation for the joined text.
pub fn cow_pair() -> ValuePair<Cow<'static, str>> {
    ValuePair::new(Cow::Borrowed("nombre"), Cow::Borrowed("path"))
}

pub fn write_cow(out: &mut dyn io::Write) -> io::Result<()> {
    cow_pair().write_combined(out)
}

pub fn demo_cow() -> io::Result<()> {
    cow_pair().demo()
}

/// Platform-native text, the std stand-in for a wide string.
pub fn os_string_pair() -> ValuePair<OsString> {
    ValuePair::new(OsString::from("wname"), OsString::from("wtext"))
}

// OsStr has no Display; the output line is the lossy UTF-8 form.
pub fn write_os_string(out: &mut dyn io::Write) -> io::Result<()> {
    writeln!(out, "{}", os_string_pair().combined().to_string_lossy())
}

pub fn demo_os_string() -> io::Result<()> {
    write_os_string(&mut io::stdout().lock())
}
