//! Service Module
//!
//! Business logic for the upload service. Handlers in `api` stay thin and
//! delegate here.

pub mod command;
pub mod reply;
pub mod upload;

// Re-export for convenience
pub use upload as upload_service;
