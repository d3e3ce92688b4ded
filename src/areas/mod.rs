//! Core building blocks of the distribution pipeline
//!
//! This module contains the fundamental pieces every command is assembled from:
//!
//! - `checkout`: coordinator for materializing pinned source checkouts
//! - `cmake`: CMake invocation builder for the LLVM+MLIR tree
//! - `distribution`: coordinator for the configure/build/stage pipeline
//! - `exec`: external-tool execution with captured diagnostics
//! - `git`: git invocation builder bound to one working directory
//! - `staging`: install-tree to package-layout staging
//! - `toolchain`: build-tool discovery on PATH

pub mod checkout;
pub(crate) mod cmake;
pub mod distribution;
pub(crate) mod exec;
pub(crate) mod git;
pub(crate) mod staging;
pub(crate) mod toolchain;
