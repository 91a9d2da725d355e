//! JDex resolution
//!
//! Three layouts are auto-detected:
//! - a single text file, one declaration per line
//! - a flat directory of notes (`11.11 Passport.md`)
//! - a nested directory mirroring the primary tree

mod grammar;
mod single_file;
mod tree;

pub mod resolver;

pub use grammar::{IdNote, JdexLine, NoteGrammar};
pub use resolver::{CanonicalTables, JdexLayout, JdexResolver, Resolution};
pub use single_file::parse_single_file;
