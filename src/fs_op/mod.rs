//! Path operations.
//!
//! `posix` holds the lexical primitives; `path` builds the public helpers on
//! top of them.

pub mod error;
pub mod path;
pub mod posix;
