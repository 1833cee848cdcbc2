//! Address encoding and history
//!
//! Primary destinations are mirrored into an address history of URL-shaped
//! strings (`/path?k=v`), the in-app analogue of a browser's location and
//! history list. This module owns the codec between (path, params) and
//! addresses, and the cursor-based history the host walks on back/forward.

use crate::params::NavParams;
use crate::registry::DestinationRegistry;
use crate::warn_log;

/// Encode a destination and its params into an address
///
/// The pathname is `/` + path; params are stringified into the query.
///
/// # Example
///
/// ```
/// use gpui_backstack::{address, NavParams};
///
/// assert_eq!(address::encode("home", &NavParams::new()), "/home");
/// assert_eq!(
///     address::encode("details", &NavParams::new().with("id", 42)),
///     "/details?id=42"
/// );
/// ```
pub fn encode(path: &str, params: &NavParams) -> String {
    if params.is_empty() {
        format!("/{}", path)
    } else {
        format!("/{}?{}", path, params.to_query_string())
    }
}

/// Split an address into its raw path and coerced params
///
/// Inverse of [`encode`]; does not consult the registry.
pub fn parse(address: &str) -> (String, NavParams) {
    let trimmed = address.strip_prefix('/').unwrap_or(address);
    match trimmed.split_once('?') {
        Some((path, query)) => (path.to_string(), NavParams::from_query_string(query)),
        None => (trimmed.to_string(), NavParams::new()),
    }
}

/// Decode an address, falling back to the start destination when the path
/// does not resolve
pub fn decode(
    address: &str,
    registry: &DestinationRegistry,
    start_destination: &str,
) -> (String, NavParams) {
    let (path, params) = parse(address);
    if registry.contains(&path) {
        (path, params)
    } else {
        warn_log!(
            "Address '{}' does not resolve, falling back to '{}'",
            address,
            start_destination
        );
        (start_destination.to_string(), NavParams::new())
    }
}

/// Cursor-based address history
///
/// Behaves like a browser history list: pushing truncates the forward tail,
/// back and forward move the cursor without mutating entries.
#[derive(Debug, Clone)]
pub struct AddressHistory {
    /// History list, oldest first
    entries: Vec<String>,
    /// Current position in history
    current: usize,
    /// Maximum history size (0 = unlimited)
    max_size: usize,
}

impl AddressHistory {
    /// Create a history positioned at an initial address
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            current: 0,
            max_size: 1000, // Default limit
        }
    }

    /// Create with a custom max size
    pub fn with_max_size(initial: impl Into<String>, max_size: usize) -> Self {
        Self {
            entries: vec![initial.into()],
            current: 0,
            max_size,
        }
    }

    /// The address under the cursor
    pub fn current(&self) -> &str {
        &self.entries[self.current]
    }

    /// Record a new address unless it equals the current one
    ///
    /// Pushing truncates any forward history. Returns false when the
    /// address was a duplicate and nothing was recorded.
    pub fn push_if_different(&mut self, address: impl Into<String>) -> bool {
        let address = address.into();
        if self.current() == address {
            return false;
        }

        self.entries.truncate(self.current + 1);
        self.entries.push(address);
        self.current += 1;
        self.enforce_size_limit();
        true
    }

    /// Move the cursor back, returning the new current address
    pub fn back(&mut self) -> Option<String> {
        if self.can_go_back() {
            self.current -= 1;
            Some(self.current().to_string())
        } else {
            None
        }
    }

    /// Move the cursor forward, returning the new current address
    pub fn forward(&mut self) -> Option<String> {
        if self.can_go_forward() {
            self.current += 1;
            Some(self.current().to_string())
        } else {
            None
        }
    }

    /// Check if back navigation is possible
    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    /// Check if forward navigation is possible
    pub fn can_go_forward(&self) -> bool {
        self.current < self.entries.len() - 1
    }

    /// Number of recorded addresses
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the history is empty (never true in practice)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All recorded addresses, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Current cursor position
    pub fn current_index(&self) -> usize {
        self.current
    }

    fn enforce_size_limit(&mut self) {
        if self.max_size > 0 && self.entries.len() > self.max_size {
            let excess = self.entries.len() - self.max_size;
            self.entries.drain(0..excess);
            self.current = self.current.saturating_sub(excess);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
