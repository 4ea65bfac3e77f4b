//! Administrative operations.
//!
//! Status, reset and set live on configurable paths that are checked before
//! any stubbed route.

pub mod handlers;

use crate::config::DutyConfig;

/// Which admin operation a path names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminOp {
    Status,
    Reset,
    Set,
}

impl AdminOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminOp::Status => "status",
            AdminOp::Reset => "reset",
            AdminOp::Set => "set",
        }
    }
}

/// Paths the admin operations answer on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPaths {
    pub status: String,
    pub reset: String,
    pub set: String,
}

impl AdminPaths {
    pub fn from_config(config: &DutyConfig) -> Self {
        Self {
            status: config.status.clone(),
            reset: config.reset.clone(),
            set: config.set.clone(),
        }
    }

    /// Exact match against the admin paths, in status, reset, set order.
    pub fn match_path(&self, path: &str) -> Option<AdminOp> {
        if path == self.status {
            Some(AdminOp::Status)
        } else if path == self.reset {
            Some(AdminOp::Reset)
        } else if path == self.set {
            Some(AdminOp::Set)
        } else {
            None
        }
    }
}

impl Default for AdminPaths {
    fn default() -> Self {
        Self::from_config(&DutyConfig::default())
    }
}
