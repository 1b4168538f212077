//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     RouteConfig[] (or built-in catalog)
//!         → RouteTableBuilder::register (duplicate paths rejected)
//!         → Freeze as immutable RouteTable
//!
//! Per request:
//!     request path
//!         → table.rs (exact-match lookup)
//!         → Return: &ResourceId or None
//! ```
//!
//! # Design Decisions
//! - Table built once at startup, immutable at runtime (shared via Arc,
//!   no locking)
//! - Exact string match only: no variables, no wildcards, no case folding
//! - O(1) expected lookup via HashMap
//! - Explicit None rather than a fallback resource
//! - Duplicate registration aborts startup, never silently overwrites

pub mod catalog;
pub mod table;

pub use table::{ResourceId, RouteTable, RouteTableBuilder, TableError};
