//! Domain layer - pure business types, no I/O.

pub mod foundation;
pub mod question;
