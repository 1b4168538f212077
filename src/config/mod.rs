//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → shared with all subsystems at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the route table it defines is fixed
//!   for the process lifetime, so there is no reload path
//! - All fields have defaults to allow minimal configs
//! - An empty route list selects the built-in catalog
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ServerConfig;
pub use schema::ContentConfig;
pub use schema::ListenerConfig;
pub use schema::RouteConfig;
