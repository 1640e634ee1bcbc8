//! Shared client-side state.
//!
//! DESIGN
//! ======
//! State lives in plain structs wrapped in `RwSignal`s provided via context.
//! All mutation goes through methods on these structs so the interesting
//! logic (entry lifecycle, document assembly) is testable without a DOM.

pub mod entry;
pub mod fieldset;
pub mod report;
pub mod roster;
