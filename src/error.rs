//! Error handling for the navigation host
//!
//! Provides the error taxonomy for navigation failures. Nothing in this
//! crate is fatal: every error is absorbed at the host boundary, at most
//! producing a log line and a no-op.

use std::fmt;

use crate::stack::EntryId;

/// Result alias for fallible navigation operations.
pub type NavResult<T> = Result<T, NavError>;

/// Errors that can occur during navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// `navigate` or address decode referenced an unregistered path
    RouteNotFound { path: String },

    /// `pop_back_stack` called at depth 1 or on an already-exiting top
    RedundantPop,

    /// A deferred removal fired for an entry that is already gone
    StaleRemoval { id: EntryId },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::RouteNotFound { path } => {
                write!(f, "Route not found: {}", path)
            }
            NavError::RedundantPop => {
                write!(f, "Redundant pop ignored")
            }
            NavError::StaleRemoval { id } => {
                write!(f, "Stale removal for entry {}", id)
            }
        }
    }
}

impl std::error::Error for NavError {}

impl NavError {
    /// Check whether this is a route resolution failure
    pub fn is_route_not_found(&self) -> bool {
        matches!(self, NavError::RouteNotFound { .. })
    }

    /// Check whether this is an ignored pop
    pub fn is_redundant_pop(&self) -> bool {
        matches!(self, NavError::RedundantPop)
    }

    /// Check whether this is a stale deferred removal
    pub fn is_stale_removal(&self) -> bool {
        matches!(self, NavError::StaleRemoval { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
