use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{PortfolioView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuizView)] Quiz {},
        #[route("/portfolio/:name", PortfolioView)] Portfolio { name: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header { class: "site-header",
            h1 { class: "site-title", "Pixel Perfection" }
            nav {
                Link { to: Route::Quiz {}, "Match DNA" }
            }
        }
    }
}
