use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{PickerView, RunnerView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", PickerView)] Picker {},
        #[route("/lesson/:id/:stage", RunnerView)] Lesson { id: String, stage: usize },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
