//! # kennywood-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for park areas (`/parkareas`, `/parkareas/{id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Serialize domain records into hyperlinked JSON representations
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `kennywood-app` (for port traits and services) and
//! `kennywood-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod serializer;
pub mod state;
