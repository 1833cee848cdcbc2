//! # GPUI Backstack
//!
//! A back-stack navigation host for GPUI with support for:
//!
//! - **Destination Kinds** - Screens, dialogs, bottom sheets, side sheets, and list pages
//! - **Back-Stack Semantics** - Push and pop with an exit window for leave animations
//! - **Address Synchronization** - Every primary destination owns a `/path?key=value` address
//! - **History Traversal** - Back and forward reconcile the stack against the address history
//! - **Deep Links** - Root the host at any registered address
//! - **Typed Parameters** - Query values coerce to strings, integers, floats, and booleans
//! - **Error Handling** - Unknown paths and redundant pops are absorbed and logged
//!
//! # Quick Start
//!
//! ```ignore
//! use gpui::*;
//! use gpui_backstack::*;
//!
//! fn main() {
//!     Application::new().run(|cx| {
//!         init_navigation(cx, NavHostConfig::new("home"), |routes| {
//!             routes.screen("home", home_page);
//!             routes.screen("details", details_page);
//!             routes.dialog("confirm-dialog", confirm_dialog);
//!         });
//!
//!         cx.open_window(WindowOptions::default(), |_, cx| {
//!             cx.new(|cx| NavHost::new(cx))
//!         })
//!     });
//! }
//!
//! fn home_page(_cx: &mut App, _params: &NavParams) -> AnyElement {
//!     gpui::div().into_any_element()
//! }
//!
//! fn details_page(_cx: &mut App, params: &NavParams) -> AnyElement {
//!     gpui::div()
//!         .child(format!("item {}", params.get_int("id").unwrap_or(0)))
//!         .into_any_element()
//! }
//!
//! fn confirm_dialog(_cx: &mut App, _params: &NavParams) -> AnyElement {
//!     gpui::div().child("Are you sure?").into_any_element()
//! }
//! ```
//!
//! # Navigation
//!
//! The library provides a simple navigation API:
//!
//! ```ignore
//! use gpui_backstack::{NavParams, Navigator};
//!
//! // Push a destination
//! Navigator::navigate(cx, "details");
//!
//! // Push with parameters; primary destinations record "/details?id=42"
//! Navigator::navigate_with(cx, "details", NavParams::new().with("id", 42));
//!
//! // Pop the top entry (dialogs and sheets animate out first)
//! Navigator::pop(cx);
//!
//! // Walk the address history
//! Navigator::back(cx);
//! Navigator::forward(cx);
//! ```
//!
//! # Destinations
//!
//! Destinations are registered once at startup. Screens and lists are
//! primary (they own an address); dialogs and sheets are overlays above
//! the nearest primary entry:
//!
//! ```no_run
//! use gpui::{div, ParentElement};
//! use gpui_backstack::{ListColumn, ListOptions, RoutesBuilder, SheetOptions, SheetSide};
//!
//! let mut routes = RoutesBuilder::new();
//! routes.screen("home", |_cx, _params| div().child("Home"));
//! routes.dialog("confirm-dialog", |_cx, _params| div().child("Confirm?"));
//! routes.bottom_sheet("options-sheet", |_cx, _params| div().child("Options"));
//! routes.sheet(
//!     "filters",
//!     |_cx, _params| div().child("Filters"),
//!     SheetOptions::new().side(SheetSide::Left).title("Filters"),
//! );
//! routes.list(
//!     "users",
//!     ListOptions::new("Users")
//!         .column(ListColumn::new("name", "Name"))
//!         .row([("name", "Ada")]),
//! );
//! let registry = routes.build();
//! assert_eq!(registry.len(), 5);
//! ```
//!
//! # Feature Flags
//!
//! - `log` (default) - Uses the standard `log` crate for logging
//! - `tracing` - Uses the `tracing` crate for structured logging (mutually exclusive with `log`)

#![doc(html_root_url = "https://docs.rs/gpui-backstack/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]
// Lints are configured in Cargo.toml [lints] section

// Logging abstraction
pub mod logging;

// Core navigation modules
pub mod address;
pub mod params;
pub mod registry;
pub mod stack;

// Error handling
pub mod error;

// Navigation engine
pub mod controller;

// Rendering
pub mod presenter;

// Host module (GPUI context integration)
mod host;

// Re-export main types for convenient access
pub use address::AddressHistory;
pub use controller::{NavController, NavOutcome};
pub use error::{NavError, NavResult};
pub use host::{
    current_path, init_navigation, navigate, GlobalNavigation, NavHostConfig, Navigator,
    NavigatorHandle, UseNavigation, DEFAULT_EXIT_DURATION,
};
pub use params::{NavParams, ParamValue};
pub use presenter::NavHost;
pub use registry::{
    validate_destination_path, ColumnAlign, ContentBuilder, Destination, DestinationKind,
    DestinationRef, DestinationRegistry, ListColumn, ListOptions, ListRow, RoutesBuilder,
    SheetOptions, SheetSide,
};
pub use stack::{BackStack, EntryId, NavEntry};
