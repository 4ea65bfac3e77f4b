//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, admin path defaults)
//!     → validation.rs (semantic checks, warnings)
//!     → DutyConfig (validated, immutable)
//!     → compiled into the route table at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::DutyConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::ResponseConfig;
pub use schema::RouteConfig;
