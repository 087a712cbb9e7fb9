use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

/// Placeholder detail page so match links resolve inside the app.
#[component]
pub fn PortfolioView(name: String) -> Element {
    rsx! {
        div { class: "page portfolio-page",
            h2 { class: "portfolio-title", "{name}" }
            p { class: "portfolio-note", "The full portfolio for this photographer is coming soon." }
            Link { class: "portfolio-back", to: Route::Quiz {}, "Back to your matches" }
        }
    }
}
