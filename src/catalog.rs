//! The unit registry.
//!
//! Units share no state, so besides the sequential walk the catalogue can be
//! rendered in parallel with byte-identical output.

use std::io;

use rayon::prelude::*;

use crate::{keyed, scalars, sequences, text, wrappers};

pub type DemoFn = fn(&mut dyn io::Write) -> io::Result<()>;

/// One catalogue entry: the name of the type demonstrated and the routine
/// that writes its single output line.
pub struct DemoUnit {
    pub name: &'static str,
    pub run: DemoFn,
}

pub const CATALOG: &[DemoUnit] = &[
    DemoUnit { name: "bool", run: scalars::write_bool },
    DemoUnit { name: "i8", run: scalars::write_i8 },
    DemoUnit { name: "i16", run: scalars::write_i16 },
    DemoUnit { name: "i32", run: scalars::write_i32 },
    DemoUnit { name: "i64", run: scalars::write_i64 },
    DemoUnit { name: "i128", run: scalars::write_i128 },
    DemoUnit { name: "isize", run: scalars::write_isize },
    DemoUnit { name: "u8", run: scalars::write_u8 },
    DemoUnit { name: "u16", run: scalars::write_u16 },
    DemoUnit { name: "u32", run: scalars::write_u32 },
    DemoUnit { name: "u64", run: scalars::write_u64 },
    DemoUnit { name: "u128", run: scalars::write_u128 },
    DemoUnit { name: "usize", run: scalars::write_usize },
    DemoUnit { name: "f32", run: scalars::write_f32 },
    DemoUnit { name: "f64", run: scalars::write_f64 },
    DemoUnit { name: "String", run: text::write_string },
    DemoUnit { name: "Cow<str>", run: text::write_cow },
    DemoUnit { name: "OsString", run: text::write_os_string },
    DemoUnit { name: "Vec<i32>", run: sequences::write_vec },
    DemoUnit { name: "LinkedList<i32>", run: sequences::write_list },
    DemoUnit { name: "VecDeque<i32>", run: sequences::write_deque },
    DemoUnit { name: "BTreeSet<i32>", run: keyed::write_btree_set },
    DemoUnit { name: "HashSet<i32>", run: keyed::write_hash_set },
    DemoUnit { name: "BTreeMap<String, i32>", run: keyed::write_btree_map },
    DemoUnit { name: "HashMap<String, i32>", run: keyed::write_hash_map },
    DemoUnit { name: "(i32, String)", run: wrappers::write_pair },
    DemoUnit { name: "Option<i32>", run: wrappers::write_optional },
    DemoUnit { name: "Value", run: wrappers::write_variant },
];

/// Runs every unit in catalogue order against one writer.
pub fn run_all(out: &mut dyn io::Write) -> io::Result<()> {
    for unit in CATALOG {
        (unit.run)(out)?;
    }
    Ok(())
}

/// Renders every unit into its own buffer in parallel, returning the buffers
/// in catalogue order.
pub fn render_parallel() -> io::Result<Vec<Vec<u8>>> {
    CATALOG
        .par_iter()
        .map(|unit| {
            let mut buf = Vec::new();
            (unit.run)(&mut buf)?;
            Ok(buf)
        })
        .collect()
}
