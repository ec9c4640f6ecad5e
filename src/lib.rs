//! Askbox - Anonymous Q&A for community experiences
//!
//! This crate implements an anonymous question box embedded in a host
//! community platform: users submit questions scoped to an experience,
//! experience admins review and answer them, and approved Q&As can be
//! published to the platform's forum.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
