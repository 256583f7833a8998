//! Floe domain types
//!
//! This crate defines the pure data vocabulary of the Floe object protocol:
//! visibility tiers, per-level member declarations, factory identifiers, and
//! the error taxonomy. It carries no construction logic.
//!
//! # Key Concepts
//!
//! - **Tier**: one of private, protected, public. A tier decides which
//!   constructed views may read or write a member.
//! - **Level**: one step in a single-inheritance chain, corresponding to one
//!   class specification in a parent→child lineage.
//! - **Member declaration**: member names are declared ahead of assignment,
//!   per tier, and are unique within a level. Values are assigned exactly
//!   once during construction.
//!
//! The declaration types serialize cleanly for tooling that wants to store
//! or exchange class shapes.

#![deny(unsafe_code)]

mod decl;
mod errors;
mod ids;
mod tier;

pub use decl::*;
pub use errors::*;
pub use ids::*;
pub use tier::*;
