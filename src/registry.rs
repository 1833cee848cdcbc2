//! Destination definitions and registration
//!
//! Destinations are registered once through a [`RoutesBuilder`] callback when
//! the navigation host is constructed; afterwards the registry is frozen and
//! only resolves paths to their descriptors.

use crate::params::NavParams;
use crate::warn_log;
use gpui::{AnyElement, App, IntoElement};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Destination kinds
// ============================================================================

/// Side of the window a sheet slides in from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetSide {
    Top,
    Bottom,
    Left,
    #[default]
    Right,
}

/// Options for a sheet destination
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetOptions {
    /// Anchoring side, right if unset
    pub side: SheetSide,
    /// Header title
    pub title: Option<String>,
    /// Header description line under the title
    pub description: Option<String>,
}

impl SheetOptions {
    /// Create sheet options with the default side
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the anchoring side
    pub fn side(mut self, side: SheetSide) -> Self {
        self.side = side;
        self
    }

    /// Set the header title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the header description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Horizontal alignment for list columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A single column of a list destination
#[derive(Debug, Clone, PartialEq)]
pub struct ListColumn {
    /// Key into each row's cell map
    pub key: String,
    /// Header label
    pub header: String,
    /// Alignment applied to the header and every cell
    pub align: ColumnAlign,
}

impl ListColumn {
    /// Create a left-aligned column
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            align: ColumnAlign::Left,
        }
    }

    /// Set the column alignment
    pub fn align(mut self, align: ColumnAlign) -> Self {
        self.align = align;
        self
    }
}

/// One row of list data, keyed by column key
pub type ListRow = HashMap<String, String>;

/// Inline tabular content for a list destination
///
/// # Example
///
/// ```
/// use gpui_backstack::{ListColumn, ListOptions};
///
/// let options = ListOptions::new("Users")
///     .description("All registered users")
///     .column(ListColumn::new("name", "Name"))
///     .column(ListColumn::new("role", "Role"))
///     .row([("name", "Ada"), ("role", "Engineer")]);
///
/// assert_eq!(options.columns.len(), 2);
/// assert_eq!(options.rows.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListOptions {
    /// Title shown above the grid
    pub title: String,
    /// Optional subtitle
    pub description: Option<String>,
    /// Column definitions, in display order
    pub columns: Vec<ListColumn>,
    /// Materialized row data
    pub rows: Vec<ListRow>,
}

impl ListOptions {
    /// Create empty list options with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the subtitle
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a column
    pub fn column(mut self, column: ListColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Replace all columns
    pub fn columns(mut self, columns: Vec<ListColumn>) -> Self {
        self.columns = columns;
        self
    }

    /// Append a row from (column key, cell) pairs
    pub fn row<I, K, V>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.rows.push(
            cells
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }
}

/// Destination kind discriminator
///
/// Rendering strategy is selected by matching on this; `Sheet` and `List`
/// carry their per-kind options inline.
#[derive(Debug, Clone, PartialEq)]
pub enum DestinationKind {
    /// Full-bleed screen, owns an address history entry
    Screen,
    /// Centered modal overlay
    Dialog,
    /// Bottom-anchored overlay
    BottomSheet,
    /// Edge-anchored panel
    Sheet(SheetOptions),
    /// Full-bleed data grid, owns an address history entry
    List(ListOptions),
}

impl DestinationKind {
    /// Primary kinds own an address history entry; secondary kinds are
    /// logical overlays stacked above the current primary
    pub fn is_primary(&self) -> bool {
        matches!(self, DestinationKind::Screen | DestinationKind::List(_))
    }
}

impl fmt::Display for DestinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DestinationKind::Screen => "screen",
            DestinationKind::Dialog => "dialog",
            DestinationKind::BottomSheet => "bottom sheet",
            DestinationKind::Sheet(_) => "sheet",
            DestinationKind::List(_) => "list",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// Destination descriptor
// ============================================================================

/// Type for destination content builder functions
///
/// The builder receives the app context and the parameters attached at
/// navigation time, and returns the content element. When registering
/// through [`RoutesBuilder`], any return type implementing `IntoElement`
/// is wrapped automatically.
pub type ContentBuilder = Arc<dyn Fn(&mut App, &NavParams) -> AnyElement + Send + Sync>;

/// Shared destination handle
///
/// Descriptors are immutable after registration; entries on the back-stack
/// hold one of these as their snapshot.
pub type DestinationRef = Arc<Destination>;

/// An immutable, registered destination descriptor
#[derive(Clone)]
pub struct Destination {
    /// Unique path key
    pub path: String,
    /// Kind discriminator with per-kind options
    pub kind: DestinationKind,
    /// Content builder; `List` destinations have none and render their
    /// inline options instead
    pub content: Option<ContentBuilder>,
}

impl Destination {
    /// Build the content element for this destination
    pub fn build(&self, cx: &mut App, params: &NavParams) -> Option<AnyElement> {
        self.content.as_ref().map(|builder| builder(cx, params))
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destination")
            .field("path", &self.path)
            .field("kind", &self.kind)
            .field("content", &self.content.is_some())
            .finish()
    }
}

/// Validate a destination path key
///
/// Paths are plain keys like `home` or `confirm-dialog`; the leading slash
/// is added when the path is encoded into an address.
pub fn validate_destination_path(path: &str) -> Result<(), String> {
    if path.is_empty() {
        return Err("Destination path cannot be empty".to_string());
    }

    if let Some(bad) = path
        .chars()
        .find(|c| matches!(c, '/' | '?' | '#' | '&' | '=') || c.is_whitespace())
    {
        return Err(format!(
            "Destination path cannot contain '{}'",
            bad.escape_default()
        ));
    }

    Ok(())
}

// ============================================================================
// Registry
// ============================================================================

/// Frozen path-to-descriptor mapping
///
/// Produced by [`RoutesBuilder::build`]; has no mutating operations.
#[derive(Debug, Clone, Default)]
pub struct DestinationRegistry {
    destinations: HashMap<String, DestinationRef>,
}

impl DestinationRegistry {
    /// Resolve a path to its descriptor
    pub fn resolve(&self, path: &str) -> Option<DestinationRef> {
        self.destinations.get(path).cloned()
    }

    /// Check if a path is registered
    pub fn contains(&self, path: &str) -> bool {
        self.destinations.contains_key(path)
    }

    /// Number of registered destinations
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

/// One-shot registration builder
///
/// The navigation host passes one of these to the registration callback at
/// construction; every destination the application can navigate to is
/// declared here. Registration is append-only: a duplicate path or an
/// invalid path key logs a warning and is skipped.
///
/// # Example
///
/// ```no_run
/// use gpui_backstack::{ListColumn, ListOptions, RoutesBuilder, SheetOptions, SheetSide};
/// use gpui::{div, ParentElement};
///
/// fn register(routes: &mut RoutesBuilder) {
///     routes.screen("home", |_cx, _params| div().child("Home"));
///     routes.dialog("confirm", |_cx, _params| div().child("Are you sure?"));
///     routes.bottom_sheet("options", |_cx, _params| div().child("Options"));
///     routes.sheet(
///         "settings",
///         |_cx, _params| div().child("Settings"),
///         SheetOptions::new().side(SheetSide::Right).title("Settings"),
///     );
///     routes.list(
///         "users",
///         ListOptions::new("Users").column(ListColumn::new("name", "Name")),
///     );
/// }
/// ```
#[derive(Default)]
pub struct RoutesBuilder {
    destinations: HashMap<String, DestinationRef>,
}

impl RoutesBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a full-bleed screen destination
    pub fn screen<F, E>(&mut self, path: impl Into<String>, content: F)
    where
        E: IntoElement,
        F: Fn(&mut App, &NavParams) -> E + Send + Sync + 'static,
    {
        self.insert(path.into(), DestinationKind::Screen, Some(wrap(content)));
    }

    /// Register a centered dialog destination
    pub fn dialog<F, E>(&mut self, path: impl Into<String>, content: F)
    where
        E: IntoElement,
        F: Fn(&mut App, &NavParams) -> E + Send + Sync + 'static,
    {
        self.insert(path.into(), DestinationKind::Dialog, Some(wrap(content)));
    }

    /// Register a bottom sheet destination
    pub fn bottom_sheet<F, E>(&mut self, path: impl Into<String>, content: F)
    where
        E: IntoElement,
        F: Fn(&mut App, &NavParams) -> E + Send + Sync + 'static,
    {
        self.insert(
            path.into(),
            DestinationKind::BottomSheet,
            Some(wrap(content)),
        );
    }

    /// Register an edge-anchored sheet destination
    pub fn sheet<F, E>(&mut self, path: impl Into<String>, content: F, options: SheetOptions)
    where
        E: IntoElement,
        F: Fn(&mut App, &NavParams) -> E + Send + Sync + 'static,
    {
        self.insert(
            path.into(),
            DestinationKind::Sheet(options),
            Some(wrap(content)),
        );
    }

    /// Register a list destination rendering inline tabular data
    pub fn list(&mut self, path: impl Into<String>, options: ListOptions) {
        self.insert(path.into(), DestinationKind::List(options), None);
    }

    /// Freeze the builder into a read-only registry
    pub fn build(self) -> DestinationRegistry {
        DestinationRegistry {
            destinations: self.destinations,
        }
    }

    fn insert(&mut self, path: String, kind: DestinationKind, content: Option<ContentBuilder>) {
        if let Err(reason) = validate_destination_path(&path) {
            warn_log!("Skipping registration of '{}': {}", path, reason);
            return;
        }

        if self.destinations.contains_key(&path) {
            warn_log!("Destination '{}' already registered, keeping the first", path);
            return;
        }

        self.destinations
            .insert(path.clone(), Arc::new(Destination { path, kind, content }));
    }
}

fn wrap<F, E>(content: F) -> ContentBuilder
where
    E: IntoElement,
    F: Fn(&mut App, &NavParams) -> E + Send + Sync + 'static,
{
    Arc::new(move |cx, params| content(cx, params).into_any_element())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{div, ParentElement};

    fn sample_routes() -> DestinationRegistry {
        let mut routes = RoutesBuilder::new();
        routes.screen("home", |_cx, _params| div().child("Home"));
        routes.dialog("confirm", |_cx, _params| div().child("Confirm"));
        routes.sheet(
            "settings",
            |_cx, _params| div().child("Settings"),
            SheetOptions::new().side(SheetSide::Left).title("Settings"),
        );
        routes.list(
            "users",
            ListOptions::new("Users")
                .column(ListColumn::new("name", "Name"))
                .row([("name", "Ada")]),
        );
        routes.build()
    }

    #[test]
    fn test_register_and_resolve() {
        let registry = sample_routes();

        assert_eq!(registry.len(), 4);
        assert!(registry.contains("home"));

        let home = registry.resolve("home").unwrap();
        assert_eq!(home.path, "home");
        assert!(matches!(home.kind, DestinationKind::Screen));
        assert!(home.content.is_some());
    }

    #[test]
    fn test_resolve_unknown_path() {
        let registry = sample_routes();
        assert!(registry.resolve("missing").is_none());
        assert!(!registry.contains("missing"));
    }

    #[test]
    fn test_duplicate_registration_keeps_first() {
        let mut routes = RoutesBuilder::new();
        routes.screen("home", |_cx, _params| div().child("First"));
        routes.dialog("home", |_cx, _params| div().child("Second"));
        let registry = routes.build();

        assert_eq!(registry.len(), 1);
        let home = registry.resolve("home").unwrap();
        assert!(matches!(home.kind, DestinationKind::Screen));
    }

    #[test]
    fn test_primary_and_secondary_kinds() {
        assert!(DestinationKind::Screen.is_primary());
        assert!(DestinationKind::List(ListOptions::default()).is_primary());
        assert!(!DestinationKind::Dialog.is_primary());
        assert!(!DestinationKind::BottomSheet.is_primary());
        assert!(!DestinationKind::Sheet(SheetOptions::default()).is_primary());
    }

    #[test]
    fn test_sheet_defaults() {
        let options = SheetOptions::new();
        assert_eq!(options.side, SheetSide::Right);
        assert_eq!(options.title, None);

        let registry = sample_routes();
        let settings = registry.resolve("settings").unwrap();
        match &settings.kind {
            DestinationKind::Sheet(options) => {
                assert_eq!(options.side, SheetSide::Left);
                assert_eq!(options.title.as_deref(), Some("Settings"));
            }
            other => panic!("expected sheet, got {}", other),
        }
    }

    #[test]
    fn test_list_options() {
        let registry = sample_routes();
        let users = registry.resolve("users").unwrap();
        assert!(users.content.is_none());

        match &users.kind {
            DestinationKind::List(options) => {
                assert_eq!(options.title, "Users");
                assert_eq!(options.columns[0].key, "name");
                assert_eq!(options.columns[0].align, ColumnAlign::Left);
                assert_eq!(options.rows[0].get("name"), Some(&"Ada".to_string()));
            }
            other => panic!("expected list, got {}", other),
        }
    }

    #[test]
    fn test_path_validation() {
        assert!(validate_destination_path("home").is_ok());
        assert!(validate_destination_path("sheet-demo").is_ok());
        assert!(validate_destination_path("").is_err());
        assert!(validate_destination_path("a/b").is_err());
        assert!(validate_destination_path("a?b").is_err());
        assert!(validate_destination_path("a b").is_err());
    }

    #[test]
    fn test_invalid_path_skipped() {
        let mut routes = RoutesBuilder::new();
        routes.screen("a/b", |_cx, _params| div().child("Nope"));
        routes.screen("ok", |_cx, _params| div().child("Ok"));
        let registry = routes.build();

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("ok"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(DestinationKind::Screen.to_string(), "screen");
        assert_eq!(DestinationKind::BottomSheet.to_string(), "bottom sheet");
        assert_eq!(
            DestinationKind::Sheet(SheetOptions::default()).to_string(),
            "sheet"
        );
    }
}
