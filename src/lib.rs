//! Duty: a configurable HTTP stub server.
//!
//! Answers requests to declared endpoints with canned responses. Each route
//! picks its reply with one of four strategies (static, ordinal, variable,
//! verb), and admin endpoints let a test suite rewind or steer that choice.
//!
//! ```text
//!     Client Request
//!     ─────────────▶ http::server ──▶ http::handler ──┬──▶ admin (status / reset / set)
//!                                                     │
//!                                                     └──▶ routing::RouteTable
//!                                                              → Route::select (cursor)
//!                                                              → PayloadResolver
//!     ◀───────────── status + body ◀──────────────────────────────┘
//! ```

pub mod admin;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::schema::DutyConfig;
pub use error::DispatchError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::RouteTable;
