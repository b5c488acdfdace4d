//! Temp-folder and recycle-bin cleanup.
//!
//! The core is [`purge`], which empties a directory tree while tolerating
//! locked files; everything else is the orchestration around it.

pub mod attributes;
pub mod categories;
pub mod cleaner;
pub mod disk_info;
pub mod error;
pub mod output;
pub mod privilege;
pub mod purge;
pub mod utils;
