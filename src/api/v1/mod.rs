//! API v1 - stable re-export of the current command set

pub use super::commands::*;
