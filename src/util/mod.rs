//! Small presentation helpers.

pub mod format;
