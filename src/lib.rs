//! Employee analytics engine.
//!
//! This crate derives a performance tier and promotion eligibility for each
//! employee record, computes salary, performance, promotion and summary
//! aggregates over the dataset, and serves them over HTTP or as a one-shot
//! batch run.

#![warn(missing_docs)]

pub mod analytics;
pub mod api;
pub mod config;
pub mod derivation;
pub mod error;
pub mod ingest;
pub mod models;
pub mod observability;
pub mod store;
