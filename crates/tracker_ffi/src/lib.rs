//! FFI bridge crate for the activity tracker UI shell.

pub mod api;
