//! Content subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     ContentConfig + RouteTable
//!         → store.rs (read <dir>/<ResourceId>.html per registered route)
//!         → missing document: fatal (strict) or stub page (lenient)
//!         → Freeze as immutable ContentStore
//!
//! Per request:
//!     &ResourceId (from route lookup)
//!         → store.rs (in-memory document fetch)
//!         → Return: HTML document
//! ```
//!
//! # Design Decisions
//! - Documents loaded once at startup, immutable at runtime
//! - Nothing is rendered per request; stub pages are pre-rendered at load
//! - Store resolves every registered resource, so a route hit can always
//!   be served

pub mod store;

pub use store::{ContentError, ContentStore};
