use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::ReportsView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ReportsView)] Reports {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Status" }
            ul {
                li { Link { to: Route::Reports {}, "Weekly Report" } }
            }
        }
    }
}
