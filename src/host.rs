//! Navigation host integration for GPUI
//!
//! This module wires the navigation core into GPUI's context system. The
//! [`GlobalNavigation`] global owns the [`NavController`]; the [`Navigator`]
//! API exposes navigation operations from any component; deferred entry
//! removal runs on the app's background timer.

use std::time::Duration;

use crate::controller::{NavController, NavOutcome};
use crate::error::NavResult;
use crate::params::NavParams;
use crate::registry::RoutesBuilder;
use crate::stack::{EntryId, NavEntry};
use crate::trace_log;
use gpui::{App, BorrowAppContext, Global};

/// How long an exiting entry stays on the stack for its animation
pub const DEFAULT_EXIT_DURATION: Duration = Duration::from_millis(350);

// ============================================================================
// NavHostConfig
// ============================================================================

/// Host configuration
///
/// # Example
///
/// ```
/// use gpui_backstack::NavHostConfig;
///
/// let config = NavHostConfig::new("home")
///     .initial_address("/details?id=42");
/// assert_eq!(config.start_destination, "home");
/// ```
#[derive(Debug, Clone)]
pub struct NavHostConfig {
    /// Path of the destination the stack is rooted at
    pub start_destination: String,

    /// Optional deep-link address decoded into the root entry
    pub initial_address: Option<String>,

    /// Exit animation window before an exiting entry is removed
    pub exit_duration: Duration,
}

impl NavHostConfig {
    /// Create a configuration rooted at the given destination path
    pub fn new(start_destination: impl Into<String>) -> Self {
        Self {
            start_destination: start_destination.into(),
            initial_address: None,
            exit_duration: DEFAULT_EXIT_DURATION,
        }
    }

    /// Start from a deep-link address instead of the bare start destination
    pub fn initial_address(mut self, address: impl Into<String>) -> Self {
        self.initial_address = Some(address.into());
        self
    }

    /// Override the exit animation window
    pub fn exit_duration(mut self, duration: Duration) -> Self {
        self.exit_duration = duration;
        self
    }
}

// ============================================================================
// GlobalNavigation
// ============================================================================

/// Global navigation state accessible from any component
#[derive(Clone)]
pub struct GlobalNavigation {
    controller: NavController,
    exit_duration: Duration,
}

impl GlobalNavigation {
    /// Create the global state from a host configuration
    pub fn new(config: NavHostConfig, configure: impl FnOnce(&mut RoutesBuilder)) -> Self {
        Self {
            controller: NavController::new(
                config.start_destination,
                config.initial_address.as_deref(),
                configure,
            ),
            exit_duration: config.exit_duration,
        }
    }

    /// Push the destination registered at a path
    pub fn navigate(&mut self, path: &str, params: NavParams) -> NavOutcome {
        self.controller.navigate(path, params)
    }

    /// Pop the top entry
    pub fn pop_back_stack(&mut self) -> NavOutcome {
        self.controller.pop_back_stack()
    }

    /// Walk the address history back
    pub fn history_back(&mut self) -> NavOutcome {
        self.controller.history_back()
    }

    /// Walk the address history forward
    pub fn history_forward(&mut self) -> NavOutcome {
        self.controller.history_forward()
    }

    /// Remove an exited entry by identity
    pub fn complete_exit(&mut self, id: EntryId) -> NavResult<()> {
        self.controller.complete_exit(id)
    }

    /// Path of the top entry
    pub fn current_path(&self) -> &str {
        self.controller.current_path()
    }

    /// Address under the history cursor
    pub fn current_address(&self) -> &str {
        self.controller.current_address()
    }

    /// Whether a pop would change anything
    pub fn can_pop(&self) -> bool {
        self.controller.stack().depth() > 1 && !self.controller.stack().top().exiting
    }

    /// Whether the address history has a back entry
    pub fn can_go_back(&self) -> bool {
        self.controller.history().can_go_back()
    }

    /// Whether the address history has a forward entry
    pub fn can_go_forward(&self) -> bool {
        self.controller.history().can_go_forward()
    }

    /// The visible slice of the stack, bottom first
    pub fn visible_entries(&self) -> &[NavEntry] {
        self.controller.visible_entries()
    }

    /// The configured exit animation window
    pub fn exit_duration(&self) -> Duration {
        self.exit_duration
    }

    /// Get controller reference
    pub fn controller(&self) -> &NavController {
        &self.controller
    }

    /// Get mutable controller reference
    pub fn controller_mut(&mut self) -> &mut NavController {
        &mut self.controller
    }
}

impl Global for GlobalNavigation {}

/// Trait for accessing the global navigation state from context
pub trait UseNavigation {
    /// Get reference to global navigation state
    fn navigation(&self) -> &GlobalNavigation;

    /// Update global navigation state
    fn update_navigation<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut GlobalNavigation, &mut App) -> R;
}

impl UseNavigation for App {
    fn navigation(&self) -> &GlobalNavigation {
        self.global::<GlobalNavigation>()
    }

    fn update_navigation<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut GlobalNavigation, &mut App) -> R,
    {
        self.update_global(f)
    }
}

/// Initialize global navigation with registered destinations
///
/// # Example
///
/// ```ignore
/// use gpui_backstack::{init_navigation, NavHostConfig};
///
/// fn main() {
///     Application::new().run(|cx| {
///         init_navigation(cx, NavHostConfig::new("home"), |routes| {
///             routes.screen("home", |_cx, _params| gpui::div());
///             routes.screen("details", |_cx, _params| gpui::div());
///             routes.dialog("confirm-dialog", |_cx, _params| gpui::div());
///         });
///     });
/// }
/// ```
pub fn init_navigation(
    cx: &mut App,
    config: NavHostConfig,
    configure: impl FnOnce(&mut RoutesBuilder),
) {
    cx.set_global(GlobalNavigation::new(config, configure));
}

/// Navigate to a path using the global navigation state
///
/// # Example
///
/// ```ignore
/// use gpui_backstack::navigate;
///
/// // In any component with access to App
/// navigate(cx, "details");
/// ```
pub fn navigate(cx: &mut App, path: impl Into<String>) {
    Navigator::navigate(cx, path);
}

/// Get current path from the global navigation state
pub fn current_path(cx: &App) -> String {
    cx.navigation().current_path().to_string()
}

/// Act on what a navigation operation did
///
/// An exit request arms the deferred removal timer; everything else has
/// already taken effect.
fn handle_outcome(cx: &mut App, outcome: NavOutcome) {
    if let NavOutcome::ExitRequested(id) = outcome {
        schedule_exit_completion(cx, id);
    }
}

/// Remove an exiting entry once its animation window has passed
///
/// The removal is identity-based, so it lands as a no-op when the entry
/// already left the stack through truncation.
fn schedule_exit_completion(cx: &mut App, id: EntryId) {
    let delay = cx.navigation().exit_duration();
    cx.spawn(async move |cx| {
        cx.background_executor().timer(delay).await;
        cx.update(|cx| {
            cx.update_navigation(|navigation, _| {
                if let Err(error) = navigation.complete_exit(id) {
                    trace_log!("{}", error);
                }
            });
        })
        .ok();
    })
    .detach();
}

// ============================================================================
// Navigator
// ============================================================================

/// Handle for Navigator.of(context) pattern
///
/// Provides instance methods for chained navigation calls.
pub struct NavigatorHandle<'a> {
    cx: &'a mut App,
}

impl NavigatorHandle<'_> {
    /// Navigate to a path
    pub fn navigate(self, path: impl Into<String>) -> Self {
        Navigator::navigate(self.cx, path);
        self
    }

    /// Navigate to a path with parameters
    pub fn navigate_with(self, path: impl Into<String>, params: NavParams) -> Self {
        Navigator::navigate_with(self.cx, path, params);
        self
    }

    /// Pop the top entry
    pub fn pop(self) -> Self {
        Navigator::pop(self.cx);
        self
    }

    /// Go back in address history
    pub fn back(self) -> Self {
        Navigator::back(self.cx);
        self
    }

    /// Go forward in address history
    pub fn forward(self) -> Self {
        Navigator::forward(self.cx);
        self
    }
}

/// Navigation API for convenient back-stack operations
///
/// Provides static methods for navigation operations:
/// - `Navigator::navigate(cx, "details")` - Push a destination
/// - `Navigator::pop(cx)` - Pop the top entry
/// - `Navigator::back(cx)` / `Navigator::forward(cx)` - Walk address history
///
/// Works with any context that derefs to `App` (`Context<V>`, `App`, etc.)
///
/// # Example
///
/// ```ignore
/// use gpui_backstack::{NavParams, Navigator};
///
/// // Push a destination
/// Navigator::navigate(cx, "details");
///
/// // Push with parameters
/// Navigator::navigate_with(cx, "details", NavParams::new().with("id", 42));
///
/// // Pop back
/// Navigator::pop(cx);
/// ```
pub struct Navigator;

impl Navigator {
    /// Get a NavigatorHandle for the given context
    ///
    /// This allows chained navigation calls:
    /// ```ignore
    /// use gpui_backstack::Navigator;
    ///
    /// // Chained style
    /// Navigator::of(cx).navigate("details").pop();
    ///
    /// // Or direct style (also works)
    /// Navigator::navigate(cx, "details");
    /// Navigator::pop(cx);
    /// ```
    pub fn of(cx: &mut App) -> NavigatorHandle<'_> {
        NavigatorHandle { cx }
    }

    /// Push the destination registered at a path
    pub fn navigate(cx: &mut App, path: impl Into<String>) {
        Self::navigate_with(cx, path, NavParams::new());
    }

    /// Push the destination registered at a path, with parameters
    ///
    /// # Example
    ///
    /// ```ignore
    /// use gpui_backstack::{NavParams, Navigator};
    ///
    /// Navigator::navigate_with(cx, "details", NavParams::new().with("id", 42));
    /// ```
    pub fn navigate_with(cx: &mut App, path: impl Into<String>, params: NavParams) {
        let path = path.into();
        let outcome = cx.update_navigation(|navigation, _| navigation.navigate(&path, params));
        handle_outcome(cx, outcome);
    }

    /// Pop the top entry
    ///
    /// # Example
    ///
    /// ```ignore
    /// use gpui_backstack::Navigator;
    ///
    /// if Navigator::can_pop(cx) {
    ///     Navigator::pop(cx);
    /// }
    /// ```
    pub fn pop(cx: &mut App) {
        let outcome = cx.update_navigation(|navigation, _| navigation.pop_back_stack());
        handle_outcome(cx, outcome);
    }

    /// Go back in address history
    pub fn back(cx: &mut App) {
        let outcome = cx.update_navigation(|navigation, _| navigation.history_back());
        handle_outcome(cx, outcome);
    }

    /// Go forward in address history
    pub fn forward(cx: &mut App) {
        let outcome = cx.update_navigation(|navigation, _| navigation.history_forward());
        handle_outcome(cx, outcome);
    }

    /// Get current path
    ///
    /// Works with `Context<V>` since it derefs to App
    pub fn current_path(cx: &App) -> String {
        cx.navigation().current_path().to_string()
    }

    /// Get the address under the history cursor
    pub fn current_address(cx: &App) -> String {
        cx.navigation().current_address().to_string()
    }

    /// Check if a pop would change anything
    pub fn can_pop(cx: &App) -> bool {
        cx.navigation().can_pop()
    }

    /// Check if the address history has a back entry
    pub fn can_go_back(cx: &App) -> bool {
        cx.navigation().can_go_back()
    }

    /// Check if the address history has a forward entry
    pub fn can_go_forward(cx: &App) -> bool {
        cx.navigation().can_go_forward()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    fn init(cx: &mut TestAppContext) {
        cx.update(|cx| {
            init_navigation(cx, NavHostConfig::new("home"), |routes| {
                routes.screen("home", |_cx, _params| gpui::div());
                routes.screen("details", |_cx, _params| gpui::div());
                routes.screen("profile", |_cx, _params| gpui::div());
                routes.dialog("confirm-dialog", |_cx, _params| gpui::div());
                routes.bottom_sheet("options-sheet", |_cx, _params| gpui::div());
            });
        });
    }

    fn depth(cx: &TestAppContext) -> usize {
        cx.read(|cx| cx.navigation().controller().stack().depth())
    }

    #[gpui::test]
    fn test_navigate_updates_path_and_address(cx: &mut TestAppContext) {
        init(cx);

        assert_eq!(cx.read(Navigator::current_path), "home");
        assert_eq!(cx.read(Navigator::current_address), "/home");

        cx.update(|cx| {
            Navigator::navigate_with(cx, "details", NavParams::new().with("id", 42));
        });

        assert_eq!(cx.read(Navigator::current_path), "details");
        assert_eq!(cx.read(Navigator::current_address), "/details?id=42");
    }

    #[gpui::test]
    fn test_pop_removes_overlay_after_exit_window(cx: &mut TestAppContext) {
        init(cx);

        cx.update(|cx| {
            Navigator::navigate(cx, "confirm-dialog");
        });
        assert_eq!(depth(cx), 2);

        cx.update(|cx| {
            Navigator::pop(cx);
        });

        // Still present during the exit window, marked exiting
        assert_eq!(depth(cx), 2);
        assert!(cx.read(|cx| cx.navigation().controller().stack().top().exiting));

        cx.executor().advance_clock(Duration::from_millis(400));
        cx.run_until_parked();

        assert_eq!(depth(cx), 1);
        assert_eq!(cx.read(Navigator::current_path), "home");
    }

    #[gpui::test]
    fn test_pop_primary_runs_through_history(cx: &mut TestAppContext) {
        init(cx);

        cx.update(|cx| {
            Navigator::navigate(cx, "details");
        });
        cx.update(|cx| {
            Navigator::pop(cx);
        });

        // Address moved immediately, the entry leaves after its window
        assert_eq!(cx.read(Navigator::current_address), "/home");
        assert_eq!(depth(cx), 2);

        cx.executor().advance_clock(Duration::from_millis(400));
        cx.run_until_parked();

        assert_eq!(depth(cx), 1);
        assert_eq!(cx.read(Navigator::current_path), "home");
    }

    #[gpui::test]
    fn test_back_and_forward(cx: &mut TestAppContext) {
        init(cx);

        cx.update(|cx| {
            Navigator::navigate(cx, "details");
            Navigator::navigate(cx, "profile");
        });

        assert!(cx.read(Navigator::can_go_back));
        assert!(!cx.read(Navigator::can_go_forward));

        cx.update(|cx| {
            Navigator::back(cx);
        });
        cx.executor().advance_clock(Duration::from_millis(400));
        cx.run_until_parked();

        assert_eq!(cx.read(Navigator::current_path), "details");
        assert!(cx.read(Navigator::can_go_forward));

        cx.update(|cx| {
            Navigator::forward(cx);
        });

        assert_eq!(cx.read(Navigator::current_path), "profile");
        assert!(!cx.read(Navigator::can_go_forward));
    }

    #[gpui::test]
    fn test_pop_at_root_is_absorbed(cx: &mut TestAppContext) {
        init(cx);

        assert!(!cx.read(Navigator::can_pop));
        cx.update(|cx| {
            Navigator::pop(cx);
        });

        assert_eq!(depth(cx), 1);
        assert_eq!(cx.read(Navigator::current_path), "home");
    }

    #[gpui::test]
    fn test_double_pop_during_exit_window(cx: &mut TestAppContext) {
        init(cx);

        cx.update(|cx| {
            Navigator::navigate(cx, "confirm-dialog");
        });
        cx.update(|cx| {
            Navigator::pop(cx);
            // Redundant while the top is already exiting
            Navigator::pop(cx);
        });

        assert_eq!(depth(cx), 2);

        cx.executor().advance_clock(Duration::from_millis(400));
        cx.run_until_parked();

        // Exactly one removal fired
        assert_eq!(depth(cx), 1);
    }

    #[gpui::test]
    fn test_chained_navigator_style(cx: &mut TestAppContext) {
        init(cx);

        cx.update(|cx| {
            Navigator::of(cx).navigate("details").navigate("profile");
        });
        assert_eq!(cx.read(Navigator::current_path), "profile");

        cx.update(|cx| {
            Navigator::of(cx).pop();
        });
        cx.executor().advance_clock(Duration::from_millis(400));
        cx.run_until_parked();

        assert_eq!(cx.read(Navigator::current_path), "details");
    }

    #[gpui::test]
    fn test_deep_link_config(cx: &mut TestAppContext) {
        cx.update(|cx| {
            init_navigation(
                cx,
                NavHostConfig::new("home").initial_address("/details?id=7"),
                |routes| {
                    routes.screen("home", |_cx, _params| gpui::div());
                    routes.screen("details", |_cx, _params| gpui::div());
                },
            );
        });

        assert_eq!(cx.read(Navigator::current_path), "details");
        assert_eq!(cx.read(Navigator::current_address), "/details?id=7");
        assert_eq!(depth(cx), 1);
    }

    #[gpui::test]
    fn test_custom_exit_duration(cx: &mut TestAppContext) {
        cx.update(|cx| {
            init_navigation(
                cx,
                NavHostConfig::new("home").exit_duration(Duration::from_millis(100)),
                |routes| {
                    routes.screen("home", |_cx, _params| gpui::div());
                    routes.dialog("confirm-dialog", |_cx, _params| gpui::div());
                },
            );
        });

        cx.update(|cx| {
            Navigator::navigate(cx, "confirm-dialog");
        });
        cx.update(|cx| {
            Navigator::pop(cx);
        });

        cx.executor().advance_clock(Duration::from_millis(150));
        cx.run_until_parked();

        assert_eq!(depth(cx), 1);
    }
}
