//! Domain types, validation rules, and error definitions shared by the
//! VeoFlow database and API crates. Nothing in here performs I/O.

pub mod collection;
pub mod error;
pub mod signup;
pub mod status;
pub mod types;
pub mod verification;
