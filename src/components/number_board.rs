//! Board of revealed numbers.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NumberBoardProps {
    /// Revealed numbers, oldest first.
    pub numbers: Vec<u16>,
}

/// Grid of every number revealed so far.
#[component]
pub fn NumberBoard(props: NumberBoardProps) -> Element {
    rsx! {
        div {
            class: "board-grid",
            for (index, number) in props.numbers.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "board-cell",
                    "{number}"
                }
            }
        }
    }
}
