//! Domain layer for the fretamento request manager
//!
//! Models the transport-request record, the fixed field schema shared by
//! form, table, and exports, and the dashboard process rows, plus the pure
//! services that classify, parse, filter, and aggregate them.

pub mod model;
pub mod service;
