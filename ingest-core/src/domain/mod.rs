//! Core domain types
//!
//! This module contains the documents produced by the config generator.
//! They are written to disk by the CLI and only ever read by name from the
//! upload service.

pub mod mapping;
pub mod pipeline;
pub mod pipeline_type;
