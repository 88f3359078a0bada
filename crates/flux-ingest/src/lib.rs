//! # flux-ingest
//!
//! Parsing for stockflux inputs: the hybrid comma/JSON transaction log and
//! the tab-separated catalog seed file. Pure parsing functions plus a lazy
//! event iterator over any buffered reader; persistence and reporting live
//! elsewhere.
//!
//! Every parse failure aborts ingestion. There is no skip-and-continue mode.

pub mod catalog;
pub mod error;
pub mod transaction;
