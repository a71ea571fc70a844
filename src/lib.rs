//! Core domain library for the media catalog.
//!
//! This crate exposes the `Category` aggregate together with the identifier,
//! clock and validation types it is built from. Persistence and application
//! service layers consume it in-process.

pub mod domain;
