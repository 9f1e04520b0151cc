//! Payload and entity models

pub mod dish;
pub mod order;

/// A form-encoded request body, in the key order the backend reads it.
pub type FormPairs = Vec<(&'static str, String)>;
