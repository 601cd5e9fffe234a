//! Session context shared across the component tree.

use dioxus::prelude::*;

use crate::audio::CuePlayer;
use crate::machine::{CallerConfig, CallerSession, DrawOutcome, RevealTicket, DEFAULT_BOUND};
use crate::storage::HistoryStore;

#[cfg(not(feature = "web"))]
use crate::audio::SilentPlayer;
#[cfg(not(feature = "web"))]
use crate::storage::MemoryStore;

/// Caller context that provides the session to the entire app.
#[derive(Clone, Copy)]
pub struct CallerContext {
    pub session: Signal<CallerSession>,
}

impl CallerContext {
    /// Draw the next number; on success the caller schedules the reveal.
    pub fn draw(&mut self) -> DrawOutcome {
        self.session.write().draw()
    }

    pub fn finish_reveal(&mut self, ticket: RevealTicket) {
        self.session.write().finish_reveal(ticket);
    }

    /// Start over at the default bound, as the reset control always does.
    pub fn reset(&mut self) {
        self.session.write().reset(Some(i64::from(DEFAULT_BOUND)));
    }

    pub fn set_bound(&mut self, raw: i64) -> bool {
        self.session.write().set_bound(raw)
    }

    pub fn set_cue_selection(&mut self, index: usize) {
        self.session.write().set_cue_selection(index);
    }

    pub fn reveal_delay_ms(&self) -> u32 {
        self.session.read().reveal_delay_ms()
    }
}

fn default_store() -> Box<dyn HistoryStore> {
    #[cfg(feature = "web")]
    {
        Box::new(crate::storage::LocalStorageStore)
    }
    #[cfg(not(feature = "web"))]
    {
        Box::new(MemoryStore::default())
    }
}

fn default_player() -> Box<dyn CuePlayer> {
    #[cfg(feature = "web")]
    {
        Box::new(crate::audio::AudioElementPlayer)
    }
    #[cfg(not(feature = "web"))]
    {
        Box::new(SilentPlayer)
    }
}

/// Provider component that owns the session for the whole app.
#[component]
pub fn CallerProvider(children: Element) -> Element {
    let mut session = use_signal(|| {
        CallerSession::new(CallerConfig::default(), default_store(), default_player())
    });

    use_context_provider(|| CallerContext { session });

    // Storage is a browser API, so hydration waits for mount.
    use_effect(move || {
        session.write().hydrate();
    });

    children
}

/// Hook to access the caller context.
pub fn use_caller() -> CallerContext {
    use_context::<CallerContext>()
}
