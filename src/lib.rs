//! Folder scaffolding for the web application layout.
//!
//! Each binary creates one fixed [`layout::Layout`] under the directory that
//! contains the executable.

pub mod base;
pub mod cli;
pub mod layout;
pub mod logging;
pub mod scaffold;
pub mod util;
