//! NavHost view for rendering the visible back-stack
//!
//! The `NavHost` paints every visible entry in stack order: primary
//! destinations as full panes, secondary destinations as overlays above
//! them. Entering and exiting entries animate over the configured exit
//! window; the root pane renders without an animation.

use crate::host::{GlobalNavigation, Navigator};
use crate::params::NavParams;
use crate::registry::{ColumnAlign, DestinationKind, ListOptions, ListRow, SheetOptions, SheetSide};
use crate::stack::NavEntry;
use crate::{error_log, trace_log};
use gpui::prelude::FluentBuilder;
use gpui::{
    div, px, relative, rgb, rgba, Animation, AnimationExt, AnyElement, Context, Div, FontWeight,
    InteractiveElement, IntoElement, MouseButton, ParentElement, Render, SharedString, Styled,
    Subscription, Window,
};
use std::time::Duration;

/// Fixed panel width for left and right sheets
const SHEET_WIDTH: f32 = 360.0;

/// Slide distance for top sheets, bottom sheets, and the bottom drawer
const VERTICAL_SLIDE: f32 = 480.0;

/// View that renders the visible slice of the back-stack
///
/// Re-renders whenever the global navigation state changes.
///
/// # Example
///
/// ```ignore
/// use gpui_backstack::NavHost;
///
/// cx.open_window(WindowOptions::default(), |_, cx| {
///     cx.new(|cx| NavHost::new(cx))
/// });
/// ```
pub struct NavHost {
    _subscription: Subscription,
}

impl NavHost {
    /// Create a host view subscribed to navigation changes
    pub fn new(cx: &mut Context<'_, Self>) -> Self {
        let subscription = cx.observe_global::<GlobalNavigation>(|_, cx| cx.notify());
        Self {
            _subscription: subscription,
        }
    }

    fn render_entry(
        &self,
        entry: &NavEntry,
        is_root: bool,
        duration: Duration,
        cx: &mut Context<'_, Self>,
    ) -> AnyElement {
        let content = match &entry.destination.kind {
            DestinationKind::List(options) => render_list(options).into_any_element(),
            _ => entry
                .destination
                .build(cx, &entry.params)
                .unwrap_or_else(|| div().into_any_element()),
        };

        // The root pane is already in place when the window opens
        let animate = !is_root || entry.exiting;
        let animation_id = SharedString::from(format!(
            "nav-entry-{}-{}",
            entry.id,
            if entry.exiting { "out" } else { "in" }
        ));

        match &entry.destination.kind {
            DestinationKind::Screen | DestinationKind::List(_) => {
                screen_pane(content, animation_id, duration, entry.exiting, animate)
            }
            DestinationKind::Dialog => dialog_overlay(
                content,
                animation_id,
                duration,
                entry.exiting,
                animate,
                cx,
            ),
            DestinationKind::BottomSheet => bottom_sheet_overlay(
                content,
                animation_id,
                duration,
                entry.exiting,
                animate,
                cx,
            ),
            DestinationKind::Sheet(options) => sheet_overlay(
                content,
                options,
                &entry.params,
                animation_id,
                duration,
                entry.exiting,
                animate,
                cx,
            ),
        }
    }
}

impl Render for NavHost {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        trace_log!("NavHost::render() called");

        let Some(navigation) = cx.try_global::<GlobalNavigation>() else {
            error_log!("No global navigation state found - call init_navigation() first");
            return div()
                .child("NavHost: no global navigation state. Call init_navigation() first.")
                .into_any_element();
        };

        let entries: Vec<NavEntry> = navigation.visible_entries().to_vec();
        let root_id = navigation.controller().stack().get(0).map(|entry| entry.id);
        let duration = navigation.exit_duration();

        let mut host = div()
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(rgb(0xffffff));

        // Stack order doubles as paint order; later entries draw above
        for entry in &entries {
            let is_root = Some(entry.id) == root_id;
            host = host.child(self.render_entry(entry, is_root, duration, cx));
        }

        host.into_any_element()
    }
}

// ============================================================================
// Per-kind chrome
// ============================================================================

/// Fade wrapper shared by panes and dialogs
fn fade(
    element: Div,
    animation_id: SharedString,
    duration: Duration,
    exiting: bool,
) -> AnyElement {
    element
        .with_animation(animation_id, Animation::new(duration), move |this, delta| {
            let delta = delta.clamp(0.0, 1.0);
            let progress = if exiting { 1.0 - delta } else { delta };
            trace_log!("Fade delta={:.3}, progress={:.3}", delta, progress);
            this.opacity(progress)
        })
        .into_any_element()
}

/// Full-bleed pane for screens and lists
fn screen_pane(
    content: AnyElement,
    animation_id: SharedString,
    duration: Duration,
    exiting: bool,
    animate: bool,
) -> AnyElement {
    let pane = div()
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .flex()
        .flex_col()
        .overflow_hidden()
        .bg(rgb(0xffffff))
        .child(content);

    if animate {
        fade(pane, animation_id, duration, exiting)
    } else {
        pane.into_any_element()
    }
}

/// Dimmed click-to-pop layer behind every overlay
fn backdrop(cx: &mut Context<'_, NavHost>) -> Div {
    div()
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .bg(rgba(0x00000073))
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(move |_view, _event, _window, cx| {
                Navigator::pop(cx);
            }),
        )
}

/// Centered modal panel over a backdrop
fn dialog_overlay(
    content: AnyElement,
    animation_id: SharedString,
    duration: Duration,
    exiting: bool,
    animate: bool,
    cx: &mut Context<'_, NavHost>,
) -> AnyElement {
    let overlay = div()
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .child(backdrop(cx))
        .child(
            div()
                .relative()
                .bg(rgb(0xffffff))
                .rounded_lg()
                .shadow_lg()
                .p_6()
                .min_w(px(320.0))
                .max_w(px(560.0))
                .child(content),
        );

    if animate {
        fade(overlay, animation_id, duration, exiting)
    } else {
        overlay.into_any_element()
    }
}

/// Slide wrapper for sheet panels
///
/// Uses pixel offsets against the panel's resting edge, so the slide
/// covers exactly the panel extent regardless of window size.
fn slide_panel(
    panel: Div,
    animation_id: SharedString,
    duration: Duration,
    exiting: bool,
    animate: bool,
    distance: f32,
    position_fn: impl Fn(Div, f32) -> Div + 'static,
) -> AnyElement {
    if !animate {
        return panel.into_any_element();
    }

    panel
        .with_animation(animation_id, Animation::new(duration), move |this, delta| {
            let delta = delta.clamp(0.0, 1.0);
            let progress = if exiting { 1.0 - delta } else { delta };
            position_fn(this, -distance * (1.0 - progress))
        })
        .into_any_element()
}

/// Drawer anchored to the bottom edge
fn bottom_sheet_overlay(
    content: AnyElement,
    animation_id: SharedString,
    duration: Duration,
    exiting: bool,
    animate: bool,
    cx: &mut Context<'_, NavHost>,
) -> AnyElement {
    let handle = div()
        .flex()
        .justify_center()
        .pb_3()
        .child(div().w_10().h(px(4.0)).rounded_full().bg(rgb(0xd0d0d0)));

    let panel = div()
        .absolute()
        .bottom_0()
        .left_0()
        .right_0()
        .bg(rgb(0xffffff))
        .rounded_t_lg()
        .shadow_lg()
        .p_4()
        .max_h(relative(0.66))
        .overflow_hidden()
        .child(handle)
        .child(content);

    div()
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .overflow_hidden()
        .child(backdrop(cx))
        .child(slide_panel(
            panel,
            animation_id,
            duration,
            exiting,
            animate,
            VERTICAL_SLIDE,
            |this, offset| this.bottom(px(offset)),
        ))
        .into_any_element()
}

/// Edge-anchored sheet with header chrome
///
/// `title` and `description` parameters on the entry override the
/// registered options.
#[allow(clippy::too_many_arguments)]
fn sheet_overlay(
    content: AnyElement,
    options: &SheetOptions,
    params: &NavParams,
    animation_id: SharedString,
    duration: Duration,
    exiting: bool,
    animate: bool,
    cx: &mut Context<'_, NavHost>,
) -> AnyElement {
    let title = params
        .get_str("title")
        .map(str::to_string)
        .or_else(|| options.title.clone());
    let description = params
        .get_str("description")
        .map(str::to_string)
        .or_else(|| options.description.clone());

    let mut panel = div()
        .absolute()
        .bg(rgb(0xffffff))
        .shadow_lg()
        .p_4()
        .flex()
        .flex_col()
        .gap_2()
        .overflow_hidden()
        .child(sheet_header(title, cx))
        .when_some(description, |this, description| {
            this.child(
                div()
                    .text_sm()
                    .text_color(rgb(0x555555))
                    .child(description),
            )
        })
        .child(div().flex_1().overflow_hidden().child(content));

    panel = match options.side {
        SheetSide::Left => panel.top_0().bottom_0().left_0().w(px(SHEET_WIDTH)),
        SheetSide::Right => panel.top_0().bottom_0().right_0().w(px(SHEET_WIDTH)),
        SheetSide::Top => panel.top_0().left_0().right_0().max_h(relative(0.66)),
        SheetSide::Bottom => panel.bottom_0().left_0().right_0().max_h(relative(0.66)),
    };

    let side = options.side;
    let distance = match side {
        SheetSide::Left | SheetSide::Right => SHEET_WIDTH,
        SheetSide::Top | SheetSide::Bottom => VERTICAL_SLIDE,
    };

    div()
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .overflow_hidden()
        .child(backdrop(cx))
        .child(slide_panel(
            panel,
            animation_id,
            duration,
            exiting,
            animate,
            distance,
            move |this, offset| match side {
                SheetSide::Left => this.left(px(offset)),
                SheetSide::Right => this.right(px(offset)),
                SheetSide::Top => this.top(px(offset)),
                SheetSide::Bottom => this.bottom(px(offset)),
            },
        ))
        .into_any_element()
}

/// Title row with a close button
fn sheet_header(title: Option<String>, cx: &mut Context<'_, NavHost>) -> Div {
    div()
        .flex()
        .items_center()
        .justify_between()
        .pb_2()
        .child(
            div()
                .text_lg()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(rgb(0x111111))
                .child(title.unwrap_or_default()),
        )
        .child(
            div()
                .cursor_pointer()
                .text_color(rgb(0x666666))
                .hover(|this| this.text_color(rgb(0x111111)))
                .child("✕")
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(move |_view, _event, _window, cx| {
                        Navigator::pop(cx);
                    }),
                ),
        )
}

// ============================================================================
// List rendering
// ============================================================================

/// Value shown in a list cell
fn cell_text(row: &ListRow, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}

fn list_cell(align: ColumnAlign, text: impl Into<String>) -> Div {
    let cell = div().flex_1().flex().px_2();
    let cell = match align {
        ColumnAlign::Left => cell.justify_start(),
        ColumnAlign::Center => cell.justify_center(),
        ColumnAlign::Right => cell.justify_end(),
    };
    cell.child(text.into())
}

/// Data grid built from registered list options
fn render_list(options: &ListOptions) -> Div {
    let header = div()
        .flex()
        .w_full()
        .py_2()
        .border_b_1()
        .border_color(rgb(0xd0d0d0))
        .font_weight(FontWeight::SEMIBOLD)
        .text_color(rgb(0x555555))
        .children(
            options
                .columns
                .iter()
                .map(|column| list_cell(column.align, column.header.clone())),
        );

    let rows = options.rows.iter().map(|row| {
        div()
            .flex()
            .w_full()
            .py_2()
            .border_b_1()
            .border_color(rgb(0xececec))
            .children(
                options
                    .columns
                    .iter()
                    .map(|column| list_cell(column.align, cell_text(row, &column.key))),
            )
    });

    div()
        .flex()
        .flex_col()
        .size_full()
        .p_6()
        .gap_2()
        .child(
            div()
                .text_2xl()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(rgb(0x111111))
                .child(options.title.clone()),
        )
        .when_some(options.description.clone(), |this, description| {
            this.child(div().text_sm().text_color(rgb(0x555555)).child(description))
        })
        .child(header)
        .children(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{init_navigation, NavHostConfig};
    use gpui::{AppContext, TestAppContext};

    #[test]
    fn test_cell_text_lookup() {
        let mut row = ListRow::new();
        row.insert("name".to_string(), "Ada".to_string());

        assert_eq!(cell_text(&row, "name"), "Ada");
        assert_eq!(cell_text(&row, "missing"), "");
    }

    #[gpui::test]
    fn test_host_view_tracks_navigation(cx: &mut TestAppContext) {
        cx.update(|cx| {
            init_navigation(cx, NavHostConfig::new("home"), |routes| {
                routes.screen("home", |_cx, _params| gpui::div());
                routes.screen("details", |_cx, _params| gpui::div());
            });
        });

        let _host = cx.update(|cx| cx.new(|cx| NavHost::new(cx)));

        cx.update(|cx| {
            Navigator::navigate(cx, "details");
        });
        cx.run_until_parked();

        assert_eq!(cx.read(Navigator::current_path), "details");
    }
}
