//! Stream utilities

mod dissect;

pub use dissect::{Dissect, DissectExt};
