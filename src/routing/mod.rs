//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (exact path lookup)
//!     → route.rs (select reply, advance cursor)
//!     → payload.rs (read body from its reference)
//!     → Return: reply with body, or a RouteError / PayloadError
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → Parse selection type once
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime apart from cursors
//! - Exact string matching only, no prefixes or wildcards
//! - Cursor updates are single atomic operations

pub mod cursor;
pub mod payload;
pub mod response;
pub mod route;
pub mod router;

pub use cursor::Cursor;
pub use payload::{PayloadError, PayloadResolver};
pub use response::StubResponse;
pub use route::{Route, RouteError, RouteKind, Selection};
pub use router::RouteTable;
