use dioxus::prelude::*;
use portfolio_core::{Lightbox, Theme, ThemeStore};

use crate::context::{get_data_dir, ScrollSnapshot};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// The portfolio is a single page; everything lives under `/`.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, the theme/lightbox/scroll contexts, and
/// routing.
#[component]
pub fn App() -> Element {
    let mut theme: Signal<Theme> = use_signal(Theme::default);
    let lightbox: Signal<Lightbox> = use_signal(Lightbox::new);
    let scroll: Signal<ScrollSnapshot> = use_signal(ScrollSnapshot::default);

    use_context_provider(|| theme);
    use_context_provider(|| lightbox);
    use_context_provider(|| scroll);

    // Restore the persisted theme flag on mount
    use_effect(move || {
        let store = ThemeStore::new(&get_data_dir());
        match store.load() {
            Ok(Some(saved)) => {
                tracing::info!(theme = saved.as_str(), "restored theme preference");
                theme.set(saved);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!("failed to load theme preference: {}", e);
            }
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
