//! Shared CLI infrastructure.
//!
//! The binary lives in `main.rs`; the logging setup is exposed as a library
//! so it stays usable outside the argument-parsing path.

pub mod logging;
