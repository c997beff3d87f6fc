use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos::ev;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

pub const SECTIONS: [(&str, &str); 7] = [
    ("home", "Home"),
    ("about", "About"),
    ("experience", "Experience"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("awards", "Awards"),
    ("contact", "Contact"),
];

/// Viewport line (px from the top) a section must span to count as active.
const ACTIVE_LINE_PX: f64 = 100.0;
/// Scroll offset past which the bar gets its solid background.
const SCROLLED_AT_PX: f64 = 50.0;
/// Fixed-header allowance when scrolling a section into view.
const HEADER_OFFSET_PX: f64 = 80.0;

/// Smooth-scrolls the viewport so `id` sits just below the fixed bar.
pub fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        return;
    };
    let top = el.get_bounding_client_rect().top()
        + window().page_y_offset().unwrap_or_default()
        - HEADER_OFFSET_PX;
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Fixed navigation bar: highlights the section currently under the viewport
/// line, smooth-scrolls on link clicks, persists the dark-mode preference,
/// and forwards logo activations to the page controller (the logo doubles as
/// the admin unlock control).
#[component]
pub fn Navigation(#[prop(into)] on_logo: Callback<()>) -> impl IntoView {
    let (active_section, set_active_section) = signal("home");
    let (scrolled, set_scrolled) = signal(false);

    #[cfg(feature = "hydrate")]
    let (dark_mode, set_dark_mode, _) =
        use_local_storage::<bool, JsonSerdeWasmCodec>("dark_mode");
    #[cfg(not(feature = "hydrate"))]
    let (dark_mode, set_dark_mode) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            let handle = window_event_listener(ev::scroll, move |_| {
                set_scrolled(window().scroll_y().unwrap_or_default() > SCROLLED_AT_PX);
                let under_line = SECTIONS.into_iter().find(|(id, _)| {
                    document()
                        .get_element_by_id(id)
                        .map(|el| {
                            let rect = el.get_bounding_client_rect();
                            rect.top() <= ACTIVE_LINE_PX && rect.bottom() >= ACTIVE_LINE_PX
                        })
                        .unwrap_or(false)
                });
                if let Some((id, _)) = under_line {
                    set_active_section(id);
                }
            });
            on_cleanup(move || handle.remove());
        });

        // mirror the persisted preference onto the root element
        Effect::new(move |_| {
            if let Some(root) = document().document_element() {
                let _ = if dark_mode() {
                    root.class_list().add_1("dark")
                } else {
                    root.class_list().remove_1("dark")
                };
            }
        });
    }

    view! {
        <nav class=move || {
            if scrolled() {
                "fixed top-0 left-0 right-0 z-40 glass-card shadow-lg transition-all"
            } else {
                "fixed top-0 left-0 right-0 z-40 bg-transparent transition-all"
            }
        }>
            <div class="max-w-7xl mx-auto px-6 md:px-12">
                <div class="flex items-center justify-between h-20">
                    <button
                        class="text-2xl font-bold gradient-text cursor-pointer hover:opacity-80"
                        on:click=move |_| on_logo.run(())
                    >
                        "JD"
                    </button>

                    <div class="hidden md:flex items-center gap-8">
                        {SECTIONS
                            .into_iter()
                            .map(|(id, label)| {
                                view! {
                                    <button
                                        class=move || {
                                            if active_section() == id {
                                                "relative text-sm font-medium text-primary"
                                            } else {
                                                "relative text-sm font-medium text-muted hover:text-primary"
                                            }
                                        }
                                        on:click=move |_| scroll_to_section(id)
                                    >
                                        {label}
                                        {move || {
                                            (active_section() == id)
                                                .then(|| {
                                                    view! {
                                                        <div class="absolute -bottom-1 left-0 right-0 h-0.5 bg-primary"></div>
                                                    }
                                                })
                                        }}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button
                        class="rounded-full p-2 hover:bg-muted/30"
                        aria-label="Toggle theme"
                        on:click=move |_| set_dark_mode(!dark_mode.get_untracked())
                    >
                        {move || if dark_mode() { "🌙" } else { "☀️" }}
                    </button>
                </div>
            </div>
        </nav>
    }
}
