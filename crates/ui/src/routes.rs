use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::ProfileView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ProfileView)] Profile {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            nav { class: "navigation",
                h1 { class: "nav-brand", "🧋 Boba Social" }
                ul {
                    li { Link { to: Route::Profile {}, "Profile" } }
                }
            }
            main { class: "app-content",
                Outlet::<Route> {}
            }
        }
    }
}
