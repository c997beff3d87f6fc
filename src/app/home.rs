use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{hooks::use_navigate, NavigateOptions};

use crate::content::{self, PortfolioDocument};
use crate::gesture::GestureDetector;

use super::nav::Navigation;
use super::sections::{
    AboutSection, AwardsSection, ContactSection, ExperienceSection, HomeSection, ProjectsSection,
    SkillsSection,
};

#[cfg(feature = "hydrate")]
const SPLASH_MS: u64 = 2000;

/// Landing page controller: resolves the document through the content store,
/// renders the section stack, and feeds logo activations through the gesture
/// detector to unlock the admin route.
#[component]
pub fn HomePage() -> impl IntoView {
    let (portfolio, set_portfolio) = signal(content::default_document());
    let (loading, set_loading) = signal(true);
    let detector = StoredValue::new(Arc::new(Mutex::new(GestureDetector::new())));

    // The server renders the bundled default; the persisted record only
    // exists in the browser.
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        if let Some(store) = crate::store::browser_store() {
            set_portfolio(store.load());
        }
        set_timeout(
            move || set_loading(false),
            std::time::Duration::from_millis(SPLASH_MS),
        );
    });

    let navigate = use_navigate();
    let on_logo = Callback::new(move |_: ()| {
        let unlocked = detector.with_value(|d| {
            d.lock()
                .expect("should be able to lock gesture detector")
                .activate(js_sys::Date::now())
        });
        if unlocked {
            navigate("/admin", NavigateOptions::default());
        }
    });

    view! {
        <Title text="Portfolio" />
        <Show when=move || !loading() fallback=LoadingScreen>
            {move || {
                let doc = portfolio();
                view! {
                    <Navigation on_logo=on_logo />
                    <PortfolioSections doc />
                }
            }}
        </Show>
    }
}

#[component]
fn PortfolioSections(doc: PortfolioDocument) -> impl IntoView {
    view! {
        <HomeSection data=doc.section("home") />
        <AboutSection data=doc.section("about") />
        <ExperienceSection data=doc.section("experience") />
        <SkillsSection data=doc.section("skills") />
        <ProjectsSection data=doc.section("projects") />
        <AwardsSection data=doc.section("awards") />
        <ContactSection data=doc.section("contact") />
        <Footer />
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-background">
            <div class="text-center">
                <div class="text-5xl font-bold gradient-text animate-pulse">"JD"</div>
                <p class="mt-4 text-sm text-muted">"Loading portfolio..."</p>
            </div>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 text-center text-xs text-muted">
            <p>
                "portfolio-site v" {env!("CARGO_PKG_VERSION")} " · built " {env!("BUILD_TIME")}
            </p>
        </footer>
    }
}
