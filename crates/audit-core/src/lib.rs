//! audit-core
//!
//! Shared vocabulary of the infection-control audit system: raw form values,
//! audit-type and bundle tags, compliance results and levels, and the record
//! envelope handed to persistence. No I/O lives here.

pub mod error;
pub mod models;
