mod about;
mod boundary;
mod contact;
mod glass;
mod header;
mod hero;
mod homepage;
mod progress;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{config::SiteConfig, data::PROFILE, sections::Section};
use header::Header;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-mono bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

/// Navigation requests between the header prompt and the home page, which owns
/// the transition controller.
#[derive(Debug, Clone, Copy)]
pub struct SectionNav {
    /// Section currently shown, written by the home page.
    pub active: RwSignal<Section>,
    /// Jump requested from outside the home page, consumed by it.
    pub requested: RwSignal<Option<Section>>,
}

impl SectionNav {
    fn new() -> Self {
        Self {
            active: RwSignal::new(Section::Hero),
            requested: RwSignal::new(None),
        }
    }

    pub fn jump(&self, section: Section) {
        self.requested.set(Some(section));
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SiteConfig::default());
    provide_context(SectionNav::new());

    view! {
        <Title text=format!("{} | {}", PROFILE.name, PROFILE.title) />
        <Router>
            <Header />
            <main class="relative w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let build_time = env!("BUILD_TIME");
    let built = chrono::DateTime::parse_from_rfc3339(build_time)
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| build_time.to_string());
    view! {
        <footer class="relative z-30 py-6 text-center text-sm text-muted">
            <div class="flex justify-center gap-6 mb-2">
                <a href=PROFILE.github target="_blank" rel="noreferrer" class="hover:text-purple">
                    "GitHub"
                </a>
                <a href=PROFILE.linkedin target="_blank" rel="noreferrer" class="hover:text-purple">
                    "LinkedIn"
                </a>
                <a href=format!("mailto:{}", PROFILE.email) class="hover:text-purple">
                    "Email"
                </a>
            </div>
            <p>{format!("© {} · built {}", PROFILE.name, built)}</p>
        </footer>
    }
}
