//! # flux-core
//!
//! Domain types and the pure stock-change derivation pipeline for stockflux:
//! - Quantity events extracted from transaction lines
//! - The change-sequence fold (consecutive-duplicate compression per SKU)
//! - Volatility ranking and stability classification
//! - Stock-change aggregation formulas
//! - Report line types and their exact text renderings
//!
//! Everything here is storage-agnostic and synchronous; flux-db feeds the
//! fold from its sorted scan and flux-cli writes the rendered reports.

pub mod aggregate;
pub mod catalog;
pub mod event;
pub mod rank;
pub mod report;
pub mod sequence;
pub mod stability;
