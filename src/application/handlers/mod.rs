//! Command and query handlers, grouped by module.

pub mod question;
