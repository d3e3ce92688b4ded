//! Domain value types
//!
//! - `build`: environment-derived build settings, version metadata and
//!   assembled configure plans
//! - `checkout`: pinned revisions, branch names and checkout requests

pub mod build;
pub mod checkout;
