//! Query string module
//!
//! An insertion-ordered query mapping with a qs-compatible codec.
//!
//! # Overview
//!
//! Keys keep the position they first appeared in, so re-encoding a parsed
//! query after overriding `page` yields the same parameter order the client
//! sent. Values are either a single string or a list of strings; lists are
//! parsed from repeated keys (`a=1&a=2`), empty brackets (`a[]=1`) and
//! indices (`a[0]=1`), and are always encoded in indices form.

mod codec;
mod types;

pub use types::{Query, QueryValue};
