//! Bingo Caller - Dioxus web application
//!
//! Draws unique numbers from a bounded pool, one at a time, and reveals each
//! one after a drumroll delay. The drawn sequence persists in the browser
//! across reloads.
//!
//! The draw/reveal machine (`machine`), persistence (`storage`), and cue
//! selection (`audio`) build natively; the web shell sits behind the `web`
//! feature.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

pub mod app;
pub mod audio;
pub mod components;
pub mod machine;
pub mod pages;
pub mod state;
pub mod storage;
