//! User-facing command implementations
//!
//! Each command is an `impl` block on the coordinator that owns the state it
//! drives:
//!
//! - `checkout_repo`: pinned, depth-1 source checkouts (on `Checkout`)
//! - `build`: CMake configure/build plus install-tree staging (on `Distribution`)

pub mod build;
pub mod checkout_repo;
