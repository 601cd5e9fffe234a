//! Display for the number currently being called.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CurrentDrawProps {
    /// Most recently revealed number, if any.
    pub number: Option<u16>,
    /// A reveal is in flight; show the drumroll placeholder instead.
    pub revealing: bool,
}

/// Big center display: placeholder while the drumroll runs, otherwise the
/// latest revealed number.
#[component]
pub fn CurrentDraw(props: CurrentDrawProps) -> Element {
    rsx! {
        div {
            class: "current-draw",
            if props.revealing {
                span { class: "current-draw-pending", "?" }
            } else if let Some(number) = props.number {
                span { class: "current-draw-number", "{number}" }
            } else {
                span { class: "current-draw-empty", "-" }
            }
        }
    }
}
