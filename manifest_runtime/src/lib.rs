#![forbid(unsafe_code)]

//! Manifest Runtime v1
//!
//! Wraps the pure Manifest Engine with configuration, logging, report
//! assembly, a JSON report codec and sessions that write reports to disk.
//!
//! No derivation logic lives here; every number comes from the engine.

pub mod config;
pub mod logging;
pub mod report;
pub mod report_codec;
pub mod session;
