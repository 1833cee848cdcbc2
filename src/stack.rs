//! Back-stack state and visibility resolution
//!
//! The back-stack is the ordered sequence of live navigation entries,
//! bottom = root, top = most recent. It is owned exclusively by the
//! controller; everything else reads derived slices.

use std::fmt;

use crate::params::NavParams;
use crate::registry::DestinationRef;

/// Unique, order-stable identity of a navigation entry
///
/// Minted by the stack on every push; deferred removals target entries by
/// id so they degrade to no-ops when the entry is already gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(u64);

impl EntryId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A live instantiation of a destination on the back-stack
#[derive(Debug, Clone)]
pub struct NavEntry {
    /// Stable identity, unique per push
    pub id: EntryId,
    /// Destination path key
    pub path: String,
    /// Payload attached at navigation time
    pub params: NavParams,
    /// Descriptor snapshot resolved at push time
    pub destination: DestinationRef,
    /// Marked when the entry is mid-removal; exiting entries stay mounted
    /// until their deferred removal fires
    pub exiting: bool,
}

impl NavEntry {
    /// Whether this entry's destination owns an address history entry
    pub fn is_primary(&self) -> bool {
        self.destination.kind.is_primary()
    }

    /// Whether this entry represents the given decoded address
    pub fn matches_address(&self, path: &str, params: &NavParams) -> bool {
        self.path == path && self.params == *params
    }
}

/// Ordered stack of navigation entries
///
/// Never empty: it is constructed with its root entry and the root is never
/// removed. All mutation goes through the operations below.
#[derive(Debug, Clone)]
pub struct BackStack {
    entries: Vec<NavEntry>,
    next_id: u64,
}

impl BackStack {
    /// Create a stack holding only the root entry
    pub fn new(path: impl Into<String>, params: NavParams, destination: DestinationRef) -> Self {
        let mut stack = Self {
            entries: Vec::new(),
            next_id: 1,
        };
        let id = stack.mint_id();
        stack.entries.push(NavEntry {
            id,
            path: path.into(),
            params,
            destination,
            exiting: false,
        });
        stack
    }

    fn mint_id(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a new entry and return its id
    pub fn push(
        &mut self,
        path: impl Into<String>,
        params: NavParams,
        destination: DestinationRef,
    ) -> EntryId {
        let id = self.mint_id();
        self.entries.push(NavEntry {
            id,
            path: path.into(),
            params,
            destination,
            exiting: false,
        });
        id
    }

    /// Number of live entries, exiting ones included
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// All live entries, bottom first
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Entry at a stack position
    pub fn get(&self, index: usize) -> Option<&NavEntry> {
        self.entries.get(index)
    }

    /// The top entry
    pub fn top(&self) -> &NavEntry {
        self.entries.last().expect("back-stack is never empty")
    }

    /// Position of an entry by id
    pub fn position_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Mark an entry as exiting
    ///
    /// Returns false if the entry is gone or already exiting.
    pub fn request_exit(&mut self, id: EntryId) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) if !entry.exiting => {
                entry.exiting = true;
                true
            }
            _ => false,
        }
    }

    /// Remove an entry by identity
    ///
    /// Idempotent: returns false when the entry was already removed. The
    /// root entry is never removed.
    pub fn complete_exit(&mut self, id: EntryId) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        match self.position_of(id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drop every entry above the given position
    pub fn truncate_to(&mut self, index: usize) {
        self.entries.truncate(index + 1);
    }

    /// Find the position of a non-exiting entry representing an address
    ///
    /// Searches top-down so the most recent occurrence wins. Exiting
    /// entries are skipped; they are never re-entered.
    pub fn find_match(&self, path: &str, params: &NavParams) -> Option<usize> {
        self.entries
            .iter()
            .rposition(|entry| !entry.exiting && entry.matches_address(path, params))
    }

    /// The currently visible slice of the stack
    ///
    /// The scan picks the most recent non-exiting primary entry. When that
    /// entry is the top of the stack, the next primary below it is retained
    /// so an outgoing screen stays mounted during the transition. Overlay
    /// entries above the primary are always included. At most two primary
    /// entries are ever returned.
    pub fn visible_entries(&self) -> &[NavEntry] {
        let top = self.entries.len() - 1;
        let primary = self
            .entries
            .iter()
            .rposition(|entry| entry.is_primary() && !entry.exiting)
            .unwrap_or(0);

        let start = if primary == top {
            self.entries[..primary]
                .iter()
                .rposition(|entry| entry.is_primary())
                .unwrap_or(primary)
        } else {
            primary
        };

        &self.entries[start..]
    }
}

// ============================================================================
// Tests
// ============================================================================
