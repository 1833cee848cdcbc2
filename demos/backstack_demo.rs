//! Interactive demo of back-stack navigation with screens, dialogs, and sheets

use gpui::prelude::*;
use gpui::*;
use gpui_backstack::*;

fn main() {
    env_logger::init();
    info_log!("Starting backstack demo with logging enabled");

    Application::new().run(|cx: &mut App| {
        // Register every destination once, up front
        init_navigation(cx, NavHostConfig::new("home"), |routes| {
            routes.screen("home", |_, _| home_page());
            routes.screen("details", |_, params| details_page(params));
            routes.screen("profile", |_, _| profile_page());

            routes.dialog("confirm-dialog", |_, _| confirm_dialog());
            routes.bottom_sheet("options-sheet", |_, _| options_sheet());

            routes.sheet(
                "filters",
                |_, _| filters_sheet(),
                SheetOptions::new()
                    .side(SheetSide::Left)
                    .title("Filters")
                    .description("Narrow down what the list shows"),
            );
            routes.sheet(
                "inspector",
                |_, _| inspector_sheet(),
                SheetOptions::new().side(SheetSide::Right).title("Inspector"),
            );

            routes.list(
                "users",
                ListOptions::new("Users")
                    .description("Everyone with access to this workspace")
                    .column(ListColumn::new("name", "Name"))
                    .column(ListColumn::new("email", "Email"))
                    .column(ListColumn::new("role", "Role").align(ColumnAlign::Right))
                    .row([
                        ("name", "Ada Lovelace"),
                        ("email", "ada@example.com"),
                        ("role", "admin"),
                    ])
                    .row([
                        ("name", "Grace Hopper"),
                        ("email", "grace@example.com"),
                        ("role", "member"),
                    ])
                    .row([
                        ("name", "Alan Turing"),
                        ("email", "alan@example.com"),
                        ("role", "member"),
                    ]),
            );
        });

        // Create and open window
        let bounds = Bounds::centered(None, size(px(1000.), px(700.)), cx);
        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Back-Stack Navigation Demo".into()),
                    appears_transparent: false,
                    traffic_light_position: None,
                }),
                ..Default::default()
            },
            |_, cx| cx.new(BackstackDemoApp::new),
        )
        .unwrap();

        cx.activate(true);
    });
}

struct BackstackDemoApp {
    host: Entity<NavHost>,
}

impl BackstackDemoApp {
    fn new(cx: &mut Context<'_, Self>) -> Self {
        Self {
            host: cx.new(NavHost::new),
        }
    }
}

impl Render for BackstackDemoApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .size_full()
            .bg(rgb(0xf5f5f5))
            .child(header(cx))
            .child(
                div()
                    .flex()
                    .flex_1()
                    .overflow_hidden()
                    .child(sidebar(cx))
                    .child(div().flex_1().relative().child(self.host.clone())),
            )
    }
}

fn header(cx: &mut Context<'_, BackstackDemoApp>) -> impl IntoElement {
    let address = Navigator::current_address(cx);
    let can_back = Navigator::can_go_back(cx);
    let can_forward = Navigator::can_go_forward(cx);

    div()
        .flex()
        .items_center()
        .h_16()
        .px_4()
        .gap_3()
        .bg(rgb(0x2196f3))
        .child(history_button(cx, "back", "◀", can_back, |cx| {
            Navigator::back(cx);
        }))
        .child(history_button(cx, "forward", "▶", can_forward, |cx| {
            Navigator::forward(cx);
        }))
        .child(
            // Address bar mirrors what the history synchronizer records
            div()
                .flex_1()
                .px_4()
                .py_2()
                .rounded_md()
                .bg(rgb(0x1976d2))
                .text_color(rgb(0xffffff))
                .child(address),
        )
        .child(
            div()
                .text_xl()
                .font_weight(FontWeight::BOLD)
                .text_color(rgb(0xffffff))
                .child("Back-Stack Demo"),
        )
}

fn history_button(
    cx: &mut Context<'_, BackstackDemoApp>,
    id: &'static str,
    label: &'static str,
    enabled: bool,
    action: impl Fn(&mut App) + 'static,
) -> impl IntoElement {
    div()
        .id(id)
        .flex()
        .items_center()
        .justify_center()
        .w_10()
        .h_10()
        .rounded_md()
        .text_color(rgb(0xffffff))
        .when(enabled, |this| {
            this.cursor_pointer()
                .hover(|this| this.bg(rgb(0x1976d2)))
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(move |_view, _event, _window, cx| {
                        action(cx);
                    }),
                )
        })
        .when(!enabled, |this| this.opacity(0.4))
        .child(label)
}

fn sidebar(cx: &mut Context<'_, BackstackDemoApp>) -> impl IntoElement {
    let current_path = Navigator::current_path(cx);

    div()
        .flex()
        .flex_col()
        .w_64()
        .bg(rgb(0xffffff))
        .border_r_1()
        .border_color(rgb(0xe0e0e0))
        .p_4()
        .gap_2()
        .child(section_label("Screens"))
        .child(nav_button(cx, "Home", "home", NavParams::new(), &current_path))
        .child(nav_button(
            cx,
            "Details (id=42)",
            "details",
            NavParams::new().with("id", 42),
            &current_path,
        ))
        .child(nav_button(
            cx,
            "Profile",
            "profile",
            NavParams::new(),
            &current_path,
        ))
        .child(nav_button(
            cx,
            "Users List",
            "users",
            NavParams::new(),
            &current_path,
        ))
        .child(div().h_px().bg(rgb(0xe0e0e0)).my_4())
        .child(section_label("Overlays"))
        .child(nav_button(
            cx,
            "Confirm Dialog",
            "confirm-dialog",
            NavParams::new(),
            &current_path,
        ))
        .child(nav_button(
            cx,
            "Options Sheet",
            "options-sheet",
            NavParams::new(),
            &current_path,
        ))
        .child(nav_button(
            cx,
            "Filters (left)",
            "filters",
            NavParams::new(),
            &current_path,
        ))
        .child(nav_button(
            cx,
            "Inspector (right)",
            "inspector",
            NavParams::new().with("title", "Entry Inspector"),
            &current_path,
        ))
        .child(div().h_px().bg(rgb(0xe0e0e0)).my_4())
        .child(
            div()
                .text_sm()
                .text_color(rgb(0x666666))
                .child("Overlays keep the address bar unchanged"),
        )
}

fn section_label(label: &'static str) -> impl IntoElement {
    div()
        .text_sm()
        .font_weight(FontWeight::SEMIBOLD)
        .text_color(rgb(0x999999))
        .child(label)
}

fn nav_button(
    cx: &mut Context<'_, BackstackDemoApp>,
    label: &str,
    path: &str,
    params: NavParams,
    current_path: &str,
) -> impl IntoElement {
    let is_active = current_path == path;
    let path = path.to_string();
    let label_str = label.to_string();

    div()
        .id(SharedString::from(label_str.clone()))
        .flex()
        .items_center()
        .px_4()
        .py_3()
        .rounded_md()
        .cursor_pointer()
        .when(is_active, |this| {
            this.bg(rgb(0x2196f3)).text_color(rgb(0xffffff))
        })
        .when(!is_active, |this| {
            this.bg(rgb(0xf5f5f5))
                .text_color(rgb(0x333333))
                .hover(|this| this.bg(rgb(0xe3f2fd)))
        })
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(move |_view, _event, _window, cx| {
                Navigator::navigate_with(cx, path.clone(), params.clone());
            }),
        )
        .child(label_str)
}

fn home_page() -> impl IntoElement {
    page_container(
        "Home".to_string(),
        "The start destination. Popping here is absorbed; the stack never empties.".to_string(),
        rgb(0x2196f3),
        rgb(0xe3f2fd),
    )
}

fn details_page(params: &NavParams) -> impl IntoElement {
    let id = params.get_int("id").unwrap_or(0);
    page_container(
        format!("Details #{}", id),
        "A primary destination with typed parameters. The id above came from the address query."
            .to_string(),
        rgb(0x9c27b0),
        rgb(0xf3e5f5),
    )
}

fn profile_page() -> impl IntoElement {
    page_container(
        "Profile".to_string(),
        "Navigate between screens and watch the address bar follow along.".to_string(),
        rgb(0x4caf50),
        rgb(0xe8f5e9),
    )
}

fn confirm_dialog() -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .gap_4()
        .child(
            div()
                .text_lg()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(rgb(0x212121))
                .child("Discard changes?"),
        )
        .child(
            div()
                .text_color(rgb(0x666666))
                .child("This dialog sits above the screen that opened it."),
        )
        .child(
            div()
                .flex()
                .gap_2()
                .justify_end()
                .child(dialog_button("Cancel", rgb(0xf5f5f5), rgb(0x333333)))
                .child(dialog_button("Discard", rgb(0xf44336), rgb(0xffffff))),
        )
}

fn dialog_button(label: &'static str, bg_color: Rgba, fg: Rgba) -> impl IntoElement {
    div()
        .id(label)
        .px_4()
        .py_2()
        .rounded_md()
        .cursor_pointer()
        .bg(bg_color)
        .text_color(fg)
        .hover(|this| this.opacity(0.85))
        .on_mouse_down(MouseButton::Left, |_event, _window, cx| {
            Navigator::pop(cx);
        })
        .child(label)
}

fn options_sheet() -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .gap_3()
        .child(
            div()
                .text_lg()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(rgb(0x212121))
                .child("Options"),
        )
        .child(sheet_row("Duplicate"))
        .child(sheet_row("Move to..."))
        .child(sheet_row("Delete"))
}

fn sheet_row(label: &'static str) -> impl IntoElement {
    div()
        .id(label)
        .px_3()
        .py_2()
        .rounded_md()
        .cursor_pointer()
        .text_color(rgb(0x333333))
        .hover(|this| this.bg(rgb(0xf5f5f5)))
        .on_mouse_down(MouseButton::Left, |_event, _window, cx| {
            Navigator::pop(cx);
        })
        .child(label)
}

fn filters_sheet() -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .gap_2()
        .child(sheet_row("Active only"))
        .child(sheet_row("Admins only"))
        .child(sheet_row("Recently added"))
}

fn inspector_sheet() -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .gap_2()
        .text_color(rgb(0x333333))
        .child("Kind: sheet (right)")
        .child("The title above was overridden by a navigation parameter.")
}

fn page_container(
    title: String,
    description: String,
    color: Rgba,
    bg_color: Rgba,
) -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .size_full()
        .bg(bg_color)
        .p_8()
        .items_center()
        .justify_center()
        .gap_6()
        .child(
            div()
                .flex()
                .items_center()
                .justify_center()
                .w_24()
                .h_24()
                .rounded_lg()
                .bg(color)
                .shadow_lg(),
        )
        .child(
            div()
                .text_3xl()
                .font_weight(FontWeight::BOLD)
                .text_color(rgb(0x212121))
                .child(title),
        )
        .child(
            div()
                .max_w_96()
                .text_center()
                .text_color(rgb(0x666666))
                .line_height(relative(1.5))
                .child(description),
        )
        .child(
            div()
                .flex()
                .gap_2()
                .child(page_action("Open Dialog", "confirm-dialog"))
                .child(page_action("Open Bottom Sheet", "options-sheet")),
        )
}

fn page_action(label: &'static str, path: &'static str) -> impl IntoElement {
    div()
        .id(label)
        .px_4()
        .py_2()
        .rounded_md()
        .cursor_pointer()
        .bg(rgb(0xffffff))
        .border_1()
        .border_color(rgb(0xe0e0e0))
        .text_color(rgb(0x333333))
        .hover(|this| this.bg(rgb(0xf5f5f5)))
        .on_mouse_down(MouseButton::Left, move |_event, _window, cx| {
            Navigator::navigate(cx, path);
        })
        .child(label)
}
