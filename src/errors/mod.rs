//! Error types and error handling for the tokenizer.
//!
//! This module defines the error types used throughout tokenization.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each way a statement can be rejected
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions
//!
//! Every error is terminal: the first invalid statement aborts the whole
//! tokenization call, and the offending fragment is carried verbatim.

pub mod errors;
