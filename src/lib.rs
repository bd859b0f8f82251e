//! Demo catalogue of Rust built-in types and standard collections.
//!
//! Each unit pairs two fixed values of one concrete type, combines them with
//! the type-appropriate binary operation (wrapping addition, concatenation,
//! or append), and prints exactly one line. Units are independent: no state
//! is shared between them, and the catalogue runs in any order.
//!
//! Run the whole catalogue with: cargo run --bin catalog

pub mod catalog;
pub mod keyed;
pub mod ops;
pub mod pair;
pub mod scalars;
pub mod sequences;
pub mod text;
pub mod wrappers;

pub use catalog::{DemoUnit, CATALOG};
pub use ops::{Combine, Scale};
pub use pair::ValuePair;
