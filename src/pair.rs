//! The value holder behind every scalar and text unit.
//!
//! Each unit's two operands live in an explicit holder built fresh by the
//! unit's constructor, so nothing in the crate is process-global or shared.

use std::fmt::Display;
use std::io;

use crate::ops::{Combine, Scale};

/// Two fixed values of one concrete type: the seed, and the operand the demo
/// combines onto it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuePair<T> {
    pub base: T,
    pub step: T,
}

impl<T> ValuePair<T> {
    pub const fn new(base: T, step: T) -> Self {
        Self { base, step }
    }
}

impl<T: Combine + Clone> ValuePair<T> {
    /// `base` combined with `step`. Pure; the holder is untouched.
    pub fn combined(&self) -> T {
        self.base.clone().combine(self.step.clone())
    }
}

impl<T: Scale + Clone> ValuePair<T> {
    /// `base` scaled by `step`. Pure; the holder is untouched.
    pub fn scaled(&self) -> T {
        self.base.clone().scale(self.step.clone())
    }
}

impl<T: Combine + Clone + Display> ValuePair<T> {
    /// The demo template: seed a local from `base`, fold `step` in, write one
    /// line. The `io::Result` is the writer's, not a new failure mode.
    pub fn write_combined<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: io::Write + ?Sized,
    {
        let mut v = self.base.clone();
        v = v.combine(self.step.clone());
        writeln!(out, "{}", v)
    }

    /// `write_combined` to locked stdout.
    pub fn demo(&self) -> io::Result<()> {
        self.write_combined(&mut io::stdout().lock())
    }
}
