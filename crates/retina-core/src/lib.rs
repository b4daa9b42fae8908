//! retina-core
//!
//! Pure domain types for the retina patient-education generator: the form
//! inputs, the generation metric, and the evaluator's scoring record.
//! No I/O. This is the shared vocabulary of the other crates.

pub mod error;
pub mod models;
pub mod time;
