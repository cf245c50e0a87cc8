//! # kennywood-domain
//!
//! Pure domain model for the kennywood amusement-park API.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Park areas** (themed sections of the park)
//! - Contain all invariant enforcement (required fields)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod park_area;
