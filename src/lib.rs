//! Static Blog Content Server Library

pub mod config;
pub mod content;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::schema::ServerConfig;
pub use content::ContentStore;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{ResourceId, RouteTable};
