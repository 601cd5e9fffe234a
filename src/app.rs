//! Root application component

use dioxus::prelude::*;

use crate::pages::Caller;
use crate::state::CallerProvider;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/main.css") }

        // Session context provider wraps the entire app
        CallerProvider {
            Caller {}
        }
    }
}
