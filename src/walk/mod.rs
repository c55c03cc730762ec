//! Ancestor Directory Walk
//!
//! Produces the chain of directories from a starting directory up to the filesystem
//! root. Every directory is normalized first so that different spellings of the same
//! location collapse to one entry.

pub mod ancestors;
pub mod path;

pub use ancestors::{ancestors, Ancestors};
pub use path::{file_parent, normalize_dir, parent_dir};
