use leptos::prelude::*;

use crate::content;

const QUICK_LINKS: [(&str, &str); 7] = [
    ("About", "#about"),
    ("Projects", "#projects"),
    ("Experience", "#experience"),
    ("Education", "#education"),
    ("Certifications", "#certifications"),
    ("Blog", "#blog"),
    ("Contact", "#contact"),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-surface border-t border-muted/30">
            <div class="container mx-auto px-4 py-12">
                <div class="grid md:grid-cols-4 gap-8">
                    <div class="md:col-span-2 space-y-4">
                        <span class="text-xl font-bold gradient-text">"Sai Vamsi Cheekati"</span>
                        <p class="text-muted max-w-md">
                            "Full-Stack Developer bridging engineering with artificial intelligence and data science. Always open to interesting conversations and collaborations."
                        </p>
                        <div class="flex gap-4">
                            {content::social_links()
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=link.label
                                            class="text-xl text-muted hover:text-primary transition-colors"
                                        >
                                            <i class=link.icon></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {QUICK_LINKS
                                .iter()
                                .map(|(name, href)| {
                                    view! {
                                        <li>
                                            <a
                                                href=*href
                                                class="text-sm text-muted hover:text-primary transition-colors"
                                            >
                                                {*name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-4">"Get in Touch"</h4>
                        <ul class="space-y-2 text-sm text-muted">
                            {content::contact_details()
                                .into_iter()
                                .map(|detail| {
                                    view! {
                                        <li>
                                            <a
                                                href=detail.href
                                                class="hover:text-primary transition-colors"
                                            >
                                                {detail.value}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
                <div class="flex flex-col sm:flex-row items-center justify-between gap-4 mt-12 pt-6 border-t border-muted/30 text-sm text-muted">
                    <span>
                        "© 2025 Sai Vamsi Cheekati · v"
                        {env!("CARGO_PKG_VERSION")}
                        " · built "
                        {env!("BUILD_TIME")}
                    </span>
                    <a href="#home" class="hover:text-primary transition-colors">
                        "Back to top ↑"
                    </a>
                </div>
            </div>
        </footer>
    }
}
