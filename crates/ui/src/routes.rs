use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::SurveyView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", SurveyView)] Survey {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "masthead",
                h1 { "Personal Impact Survey" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
