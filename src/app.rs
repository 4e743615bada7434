mod about;
mod blog;
mod certifications;
mod contact;
mod education;
mod experience;
mod filter;
mod footer;
mod header;
mod hero;
mod projects;
mod reveal;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use about::About;
use blog::Blog;
use certifications::Certifications;
use contact::Contact;
use education::Education;
use experience::Experience;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn attr(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Theme preference, shared with the header toggle. Persisted to local
/// storage on the client; plain signal state on the server render.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    pub set_theme: WriteSignal<Theme>,
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (read, write) = signal(Theme::default());
        (Signal::from(read), write)
    };
    provide_context(ThemeContext { theme, set_theme });

    view! {
        // sets the document title
        <Title formatter=|title| format!("Sai Vamsi Cheekati - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole site is one scrollable page; the header navigates by anchor.
#[component]
fn HomePage() -> impl IntoView {
    let ThemeContext { theme, .. } = expect_context::<ThemeContext>();

    view! {
        <Title text="Portfolio" />
        <div
            class="min-h-screen bg-background text-foreground"
            data-theme=move || theme.get().attr()
        >
            <Header />
            <main>
                <Hero />
                <About />
                <Projects />
                <Experience />
                <Education />
                <Certifications />
                <Blog />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
