//! Navigation controller
//!
//! [`NavController`] owns the whole navigation core: the frozen registry,
//! the back-stack, and the address history. It is a pure state machine;
//! scheduling (the deferred removal timer) and rendering live in the host.
//!
//! Every mutation returns a [`NavOutcome`] telling the caller what to do
//! next. Failures never escape the absorbing entry points ([`navigate`],
//! [`pop_back_stack`]); the `try_` variants expose them for callers that
//! want to inspect the error.
//!
//! [`navigate`]: NavController::navigate
//! [`pop_back_stack`]: NavController::pop_back_stack

use crate::address::{self, AddressHistory};
use crate::error::{NavError, NavResult};
use crate::params::NavParams;
use crate::registry::{DestinationRegistry, RoutesBuilder};
use crate::stack::{BackStack, EntryId, NavEntry};
use crate::{debug_log, trace_log, warn_log};

/// What a navigation operation did to the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// A new entry was pushed
    Pushed(EntryId),
    /// The entry began exiting; the caller schedules its deferred removal
    ExitRequested(EntryId),
    /// The stack was truncated to an existing entry, no animation
    Truncated,
    /// Nothing changed
    Unchanged,
}

/// The navigation state machine
///
/// Owns the back-stack exclusively. Constructed once by the navigation
/// host and dropped with it.
#[derive(Debug, Clone)]
pub struct NavController {
    registry: DestinationRegistry,
    stack: BackStack,
    history: AddressHistory,
    start_destination: String,
}

impl NavController {
    /// Create a controller with a frozen registry and its root entry
    ///
    /// The registration callback runs exactly once; afterwards the set of
    /// destinations is fixed. When an initial address is given it is
    /// decoded into the root entry (deep link), falling back to the start
    /// destination if it does not resolve.
    ///
    /// # Panics
    ///
    /// Panics if the start destination itself is not registered.
    pub fn new(
        start_destination: impl Into<String>,
        initial_address: Option<&str>,
        configure: impl FnOnce(&mut RoutesBuilder),
    ) -> Self {
        let start_destination = start_destination.into();

        let mut builder = RoutesBuilder::new();
        configure(&mut builder);
        let registry = builder.build();

        let (root_path, root_params) = match initial_address {
            Some(initial) => address::decode(initial, &registry, &start_destination),
            None => (start_destination.clone(), NavParams::new()),
        };

        let destination = registry
            .resolve(&root_path)
            .unwrap_or_else(|| panic!("Start destination '{}' is not registered", root_path));

        let root_address = address::encode(&root_path, &root_params);
        let stack = BackStack::new(root_path, root_params, destination);

        Self {
            registry,
            stack,
            history: AddressHistory::new(root_address),
            start_destination,
        }
    }

    /// Push the destination registered at `path`
    ///
    /// Primary destinations also record an address history entry; secondary
    /// destinations are purely logical overlays. An unregistered path logs
    /// one warning and changes nothing.
    pub fn navigate(&mut self, path: &str, params: NavParams) -> NavOutcome {
        match self.try_navigate(path, params) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn_log!("{}", error);
                NavOutcome::Unchanged
            }
        }
    }

    /// [`navigate`](Self::navigate) preserving the failure
    pub fn try_navigate(&mut self, path: &str, params: NavParams) -> NavResult<NavOutcome> {
        let Some(destination) = self.registry.resolve(path) else {
            return Err(NavError::RouteNotFound {
                path: path.to_string(),
            });
        };

        if destination.kind.is_primary() {
            self.history
                .push_if_different(address::encode(path, &params));
        }

        debug_log!("Pushing {} '{}'", destination.kind, path);
        let id = self.stack.push(path, params, destination);
        Ok(NavOutcome::Pushed(id))
    }

    /// Pop the top entry
    ///
    /// A primary top delegates to address-history back navigation so the
    /// address stays in step; a secondary top starts its exit immediately.
    /// Popping the root or an already-exiting top is absorbed silently.
    pub fn pop_back_stack(&mut self) -> NavOutcome {
        self.try_pop_back_stack().unwrap_or(NavOutcome::Unchanged)
    }

    /// [`pop_back_stack`](Self::pop_back_stack) preserving the failure
    pub fn try_pop_back_stack(&mut self) -> NavResult<NavOutcome> {
        let top = self.stack.top();
        let (top_id, top_exiting, top_primary) = (top.id, top.exiting, top.is_primary());

        if self.stack.depth() <= 1 || top_exiting {
            trace_log!("Redundant pop ignored");
            return Err(NavError::RedundantPop);
        }

        if top_primary {
            return Ok(self.history_back());
        }

        self.stack.request_exit(top_id);
        debug_log!("Exit requested for entry {}", top_id);
        Ok(NavOutcome::ExitRequested(top_id))
    }

    /// Mark an entry as exiting without removing it
    ///
    /// Returns false if the entry is gone or already exiting.
    pub fn request_exit(&mut self, id: EntryId) -> bool {
        self.stack.request_exit(id)
    }

    /// Remove an exited entry by identity
    ///
    /// Safe to call for an entry another path already removed; that case
    /// reports [`NavError::StaleRemoval`] and changes nothing.
    pub fn complete_exit(&mut self, id: EntryId) -> NavResult<()> {
        if self.stack.complete_exit(id) {
            trace_log!("Removed entry {}", id);
            Ok(())
        } else {
            Err(NavError::StaleRemoval { id })
        }
    }

    /// Walk the address history back and reconcile the stack
    pub fn history_back(&mut self) -> NavOutcome {
        match self.history.back() {
            Some(current) => self.reconcile(&current),
            None => NavOutcome::Unchanged,
        }
    }

    /// Walk the address history forward and reconcile the stack
    pub fn history_forward(&mut self) -> NavOutcome {
        match self.history.forward() {
            Some(current) => self.reconcile(&current),
            None => NavOutcome::Unchanged,
        }
    }

    /// Re-derive the stack from an address the history cursor moved to
    ///
    /// Equal to the top entry: no-op. Matching an entry one below the top:
    /// the top exits with its animation. Matching deeper: the stack is
    /// truncated to the match, no animation. No match: the decoded
    /// destination is pushed fresh.
    fn reconcile(&mut self, current: &str) -> NavOutcome {
        let (path, params) = address::decode(current, &self.registry, &self.start_destination);

        let top = self.stack.top();
        if !top.exiting && top.matches_address(&path, &params) {
            return NavOutcome::Unchanged;
        }

        if let Some(position) = self.stack.find_match(&path, &params) {
            let top_index = self.stack.depth() - 1;
            if position + 1 == top_index {
                let top_id = self.stack.top().id;
                self.stack.request_exit(top_id);
                debug_log!("Exit requested for entry {}", top_id);
                return NavOutcome::ExitRequested(top_id);
            }

            debug_log!("Truncating stack to position {}", position);
            self.stack.truncate_to(position);
            return NavOutcome::Truncated;
        }

        // The address resolves but has no live entry, a fresh forward push
        let Some(destination) = self.registry.resolve(&path) else {
            return NavOutcome::Unchanged;
        };
        debug_log!("Pushing {} '{}' from address", destination.kind, path);
        let id = self.stack.push(path, params, destination);
        NavOutcome::Pushed(id)
    }

    /// Path of the top entry
    pub fn current_path(&self) -> &str {
        &self.stack.top().path
    }

    /// Address under the history cursor
    pub fn current_address(&self) -> &str {
        self.history.current()
    }

    /// The visible slice of the stack, bottom first
    pub fn visible_entries(&self) -> &[NavEntry] {
        self.stack.visible_entries()
    }

    /// The back-stack
    pub fn stack(&self) -> &BackStack {
        &self.stack
    }

    /// The address history
    pub fn history(&self) -> &AddressHistory {
        &self.history
    }

    /// The frozen registry
    pub fn registry(&self) -> &DestinationRegistry {
        &self.registry
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ListColumn, ListOptions, SheetOptions};
    use gpui::{div, ParentElement};

    fn controller() -> NavController {
        controller_at(None)
    }

    fn controller_at(initial_address: Option<&str>) -> NavController {
        NavController::new("home", initial_address, |routes| {
            routes.screen("home", |_cx, _params| div().child("Home"));
            routes.screen("details", |_cx, _params| div().child("Details"));
            routes.screen("profile", |_cx, _params| div().child("Profile"));
            routes.dialog("confirm-dialog", |_cx, _params| div().child("Confirm"));
            routes.bottom_sheet("options-sheet", |_cx, _params| div().child("Options"));
            routes.sheet(
                "settings-sheet",
                |_cx, _params| div().child("Settings"),
                SheetOptions::new().title("Settings"),
            );
            routes.list(
                "users",
                ListOptions::new("Users").column(ListColumn::new("name", "Name")),
            );
        })
    }

    fn stack_paths(controller: &NavController) -> Vec<&str> {
        controller
            .stack()
            .entries()
            .iter()
            .map(|entry| entry.path.as_str())
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let controller = controller();

        assert_eq!(controller.current_path(), "home");
        assert_eq!(controller.current_address(), "/home");
        assert_eq!(controller.stack().depth(), 1);
        assert_eq!(controller.history().len(), 1);
    }

    #[test]
    fn test_deep_link_init() {
        let controller = controller_at(Some("/details?id=42"));

        assert_eq!(controller.current_path(), "details");
        assert_eq!(controller.current_address(), "/details?id=42");
        assert_eq!(
            controller.stack().top().params.get_int("id"),
            Some(42)
        );
    }

    #[test]
    fn test_deep_link_falls_back_to_start() {
        let controller = controller_at(Some("/nowhere?x=1"));

        assert_eq!(controller.current_path(), "home");
        assert_eq!(controller.current_address(), "/home");
    }

    #[test]
    #[should_panic(expected = "is not registered")]
    fn test_unregistered_start_panics() {
        NavController::new("missing", None, |_routes| {});
    }

    #[test]
    fn test_navigate_primary_records_address() {
        let mut controller = controller();

        let outcome = controller.navigate("details", NavParams::new().with("id", 42));
        assert!(matches!(outcome, NavOutcome::Pushed(_)));
        assert_eq!(controller.current_address(), "/details?id=42");
        assert_eq!(controller.history().entries(), ["/home", "/details?id=42"]);
    }

    #[test]
    fn test_navigate_secondary_leaves_history_alone() {
        let mut controller = controller();
        controller.navigate("details", NavParams::new());

        controller.navigate("confirm-dialog", NavParams::new());
        controller.navigate("settings-sheet", NavParams::new());

        assert_eq!(controller.stack().depth(), 4);
        assert_eq!(controller.history().len(), 2);
        assert_eq!(controller.current_address(), "/details");
    }

    #[test]
    fn test_navigate_unknown_path_is_noop() {
        let mut controller = controller();

        let outcome = controller.navigate("unknown-path", NavParams::new());
        assert_eq!(outcome, NavOutcome::Unchanged);
        assert_eq!(controller.stack().depth(), 1);
        assert_eq!(controller.history().len(), 1);

        let error = controller
            .try_navigate("unknown-path", NavParams::new())
            .unwrap_err();
        assert!(error.is_route_not_found());
    }

    #[test]
    fn test_pop_root_is_redundant() {
        let mut controller = controller();

        assert_eq!(controller.pop_back_stack(), NavOutcome::Unchanged);
        let error = controller.try_pop_back_stack().unwrap_err();
        assert!(error.is_redundant_pop());
        assert_eq!(controller.stack().depth(), 1);
    }

    #[test]
    fn test_pop_secondary_two_phase() {
        let mut controller = controller();
        controller.navigate("confirm-dialog", NavParams::new());

        let outcome = controller.pop_back_stack();
        let NavOutcome::ExitRequested(id) = outcome else {
            panic!("expected exit request, got {:?}", outcome);
        };
        assert!(controller.stack().top().exiting);
        assert_eq!(controller.stack().depth(), 2);

        // The dialog is still present-but-exiting until the removal fires
        controller.complete_exit(id).unwrap();
        assert_eq!(controller.stack().depth(), 1);
        assert_eq!(controller.current_path(), "home");
    }

    #[test]
    fn test_pop_exiting_top_is_redundant() {
        let mut controller = controller();
        controller.navigate("confirm-dialog", NavParams::new());
        controller.pop_back_stack();

        // Second pop during the exit window
        assert_eq!(controller.pop_back_stack(), NavOutcome::Unchanged);
        let error = controller.try_pop_back_stack().unwrap_err();
        assert!(error.is_redundant_pop());
        assert_eq!(controller.stack().depth(), 2);
    }

    #[test]
    fn test_complete_exit_stale_is_noop() {
        let mut controller = controller();
        controller.navigate("confirm-dialog", NavParams::new());

        let NavOutcome::ExitRequested(id) = controller.pop_back_stack() else {
            panic!("expected exit request");
        };
        controller.complete_exit(id).unwrap();

        let error = controller.complete_exit(id).unwrap_err();
        assert!(error.is_stale_removal());
        assert_eq!(controller.stack().depth(), 1);
    }

    #[test]
    fn test_pop_primary_delegates_to_history() {
        let mut controller = controller();
        controller.navigate("details", NavParams::new());

        let outcome = controller.pop_back_stack();
        let NavOutcome::ExitRequested(id) = outcome else {
            panic!("expected exit request, got {:?}", outcome);
        };

        // Address already moved back, entry exits with its animation
        assert_eq!(controller.current_address(), "/home");
        assert!(controller.stack().top().exiting);

        controller.complete_exit(id).unwrap();
        assert_eq!(stack_paths(&controller), vec!["home"]);
    }

    #[test]
    fn test_forward_during_exit_window_pushes_fresh_entry() {
        let mut controller = controller();
        controller.navigate("details", NavParams::new());

        let NavOutcome::ExitRequested(old) = controller.history_back() else {
            panic!("expected exit request");
        };

        // Forward arrives before the removal fires; the exiting entry is
        // never re-entered, a fresh one goes on top of it
        let outcome = controller.history_forward();
        let NavOutcome::Pushed(fresh) = outcome else {
            panic!("expected push, got {:?}", outcome);
        };
        assert_ne!(old, fresh);
        assert_eq!(stack_paths(&controller), vec!["home", "details", "details"]);

        controller.complete_exit(old).unwrap();
        assert_eq!(stack_paths(&controller), vec!["home", "details"]);
        assert!(!controller.stack().top().exiting);
    }

    #[test]
    fn test_history_back_skips_secondaries_by_truncation() {
        let mut controller = controller();
        controller.navigate("details", NavParams::new());
        controller.navigate("confirm-dialog", NavParams::new());

        // The match sits two below the top, so everything above it goes at
        // once with no exit animation
        let outcome = controller.history_back();
        assert_eq!(outcome, NavOutcome::Truncated);
        assert_eq!(stack_paths(&controller), vec!["home"]);
    }

    #[test]
    fn test_history_forward_repushes_removed_entry() {
        let mut controller = controller();
        controller.navigate("details", NavParams::new().with("id", 7));

        let NavOutcome::ExitRequested(id) = controller.history_back() else {
            panic!("expected exit request");
        };
        controller.complete_exit(id).unwrap();
        assert_eq!(stack_paths(&controller), vec!["home"]);

        let outcome = controller.history_forward();
        assert!(matches!(outcome, NavOutcome::Pushed(_)));
        assert_eq!(controller.current_path(), "details");
        assert_eq!(controller.stack().top().params.get_int("id"), Some(7));
    }

    #[test]
    fn test_back_during_exit_window_truncates() {
        let mut controller = controller();
        controller.navigate("details", NavParams::new());
        controller.navigate("profile", NavParams::new());

        // First back marks profile exiting; the second arrives before the
        // deferred removal and matches deeper, so it truncates
        let NavOutcome::ExitRequested(profile) = controller.history_back() else {
            panic!("expected exit request");
        };
        assert_eq!(controller.history_back(), NavOutcome::Truncated);
        assert_eq!(stack_paths(&controller), vec!["home"]);

        // The pending removal fires into a stack that dropped the entry
        assert!(controller.complete_exit(profile).unwrap_err().is_stale_removal());
        assert_eq!(stack_paths(&controller), vec!["home"]);
    }

    #[test]
    fn test_list_destination_is_primary() {
        let mut controller = controller();

        controller.navigate("users", NavParams::new());
        assert_eq!(controller.current_address(), "/users");
        assert_eq!(controller.history().len(), 2);
    }

    #[test]
    fn test_stack_never_empties_and_root_is_start() {
        let mut controller = controller();

        controller.navigate("details", NavParams::new());
        controller.navigate("confirm-dialog", NavParams::new());
        controller.pop_back_stack();
        controller.pop_back_stack();
        controller.history_back();
        controller.history_back();
        controller.pop_back_stack();

        assert!(controller.stack().depth() >= 1);
        assert_eq!(controller.stack().get(0).unwrap().path, "home");
    }
}
