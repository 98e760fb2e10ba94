//! Shared domain model and view-state logic for the Ranchi crime-safety map.
//!
//! Everything in this crate is target independent: the browser frontend
//! renders what these types compute, and the unit tests run on the host.

pub mod domain;
pub mod projections;
pub mod shared;
pub mod usecases;
