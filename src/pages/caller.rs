//! The caller page: draw controls, reveal display, and the board.

use dioxus::prelude::*;

use crate::audio::CUES;
use crate::components::{CurrentDraw, NumberBoard};
use crate::machine::{DrawOutcome, DEFAULT_BOUND, MAX_BOUND, MIN_BOUND};
use crate::state::use_caller;

/// Single-page caller UI.
#[component]
pub fn Caller() -> Element {
    let mut ctx = use_caller();

    let session = ctx.session.read();
    let visible = session.visible().to_vec();
    let last_visible = session.last_visible();
    let revealing = session.is_reveal_pending();
    let exhausted = session.is_exhausted();
    let remaining = session.remaining();
    let bound = session.bound();
    let cue_selection = session.cue_selection();
    let bound_locked = !session.drawn().is_empty();
    drop(session);

    let on_draw = move |_| {
        if let DrawOutcome::Drawn { ticket, .. } = ctx.draw() {
            let delay = ctx.reveal_delay_ms();
            spawn(async move {
                #[cfg(feature = "web")]
                gloo_timers::future::TimeoutFuture::new(delay).await;
                #[cfg(not(feature = "web"))]
                let _ = delay;
                ctx.finish_reveal(ticket);
            });
        }
    };

    let on_bound_change = move |event: FormEvent| {
        let raw = event
            .value()
            .parse::<i64>()
            .unwrap_or(i64::from(DEFAULT_BOUND));
        ctx.set_bound(raw);
    };

    let on_cue_change = move |event: FormEvent| {
        if let Ok(index) = event.value().parse::<usize>() {
            ctx.set_cue_selection(index);
        }
    };

    let on_reset = move |_| ctx.reset();

    rsx! {
        div {
            class: "caller",

            h1 { class: "caller-title", "Bingo Caller" }

            div {
                class: "caller-settings",
                label {
                    "Highest number"
                    input {
                        r#type: "number",
                        min: "{MIN_BOUND}",
                        max: "{MAX_BOUND}",
                        value: "{bound}",
                        disabled: bound_locked,
                        oninput: on_bound_change,
                    }
                }
                label {
                    "Sound"
                    select {
                        value: "{cue_selection}",
                        onchange: on_cue_change,
                        option { value: "0", "Random" }
                        for (index, cue) in CUES.iter().enumerate() {
                            {
                                let selection = index + 1;
                                rsx! {
                                    option { key: "{cue.name}", value: "{selection}", "{cue.name}" }
                                }
                            }
                        }
                    }
                }
            }

            CurrentDraw { number: last_visible, revealing: revealing }

            div {
                class: "caller-actions",
                button {
                    class: "draw-button",
                    disabled: revealing || exhausted,
                    onclick: on_draw,
                    if exhausted { "All numbers drawn" } else { "Draw number" }
                }
                p { class: "caller-remaining", "{remaining} remaining" }
            }

            NumberBoard { numbers: visible }

            div {
                class: "caller-footer",
                button {
                    class: "reset-button",
                    onclick: on_reset,
                    "Reset"
                }
            }
        }
    }
}
