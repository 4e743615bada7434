use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::{Theme, ThemeContext};

const NAV_ITEMS: [(&str, &str); 8] = [
    ("Home", "#home"),
    ("About", "#about"),
    ("Projects", "#projects"),
    ("Experience", "#experience"),
    ("Education", "#education"),
    ("Certifications", "#certifications"),
    ("Blog", "#blog"),
    ("Contact", "#contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let ThemeContext { theme, set_theme } = expect_context::<ThemeContext>();
    let (menu_open, set_menu_open) = signal(false);
    let (_scroll_x, scroll_y) = use_window_scroll();

    // elevate the header once the page scrolls under it
    let header_class = move || {
        if scroll_y.get() > 50.0 {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 \
             bg-background/80 backdrop-blur-md shadow-lg border-b border-muted/30"
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
        }
    };

    view! {
        <header class=header_class>
            <div class="container mx-auto px-4 py-4">
                <div class="flex items-center justify-between">
                    <a href="#home" class="flex items-center gap-2 text-xl font-bold">
                        <span class="gradient-text">"Sai Vamsi"</span>
                    </a>
                    <nav class="hidden lg:flex items-center gap-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|(name, href)| {
                                view! {
                                    <a
                                        href=*href
                                        class="text-sm font-medium text-muted hover:text-primary transition-colors"
                                    >
                                        {*name}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <div class="flex items-center gap-4">
                        <button
                            class="p-2 rounded-md hover:bg-muted/30 transition-colors"
                            aria-label="Toggle theme"
                            on:click=move |_| set_theme.set(theme.get_untracked().toggled())
                        >
                            {move || if theme.get() == Theme::Light { "🌙" } else { "☀️" }}
                        </button>
                        <button
                            class="p-2 rounded-md lg:hidden hover:bg-muted/30 transition-colors"
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <nav class="lg:hidden pt-4 pb-2 space-y-2">
                        {NAV_ITEMS
                            .iter()
                            .map(|(name, href)| {
                                view! {
                                    <a
                                        href=*href
                                        class="block w-full p-3 rounded-lg hover:bg-muted/30 transition-colors"
                                        on:click=move |_| set_menu_open(false)
                                    >
                                        {*name}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </Show>
            </div>
        </header>
    }
}
