//! One caller session: configuration, both machines, and the collaborators
//! they drive.

use crate::audio::{self, CuePlayer};
use crate::storage::{self, HistoryStore};

use super::pool::{clamp_bound, DrawPool};
use super::scheduler::{RevealScheduler, RevealTicket};

/// Pool bound used until the host configures another one.
pub const DEFAULT_BOUND: u16 = 75;

/// Reveal delay used until the host configures another one.
pub const DEFAULT_REVEAL_DELAY_MS: u32 = 3_000;

/// Tunable parameters of a session.
#[derive(Debug, Clone, Copy)]
pub struct CallerConfig {
    pub bound: u16,
    pub reveal_delay_ms: u32,
    pub cue_selection: usize,
}

impl Default for CallerConfig {
    fn default() -> Self {
        Self {
            bound: DEFAULT_BOUND,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            cue_selection: 0,
        }
    }
}

/// Result of a draw request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A number left the pool; reveal it after the configured delay.
    Drawn { number: u16, ticket: RevealTicket },
    /// A reveal is still pending; the request is dropped.
    Busy,
    /// The pool is empty.
    Exhausted,
}

/// The session object both halves of the pipeline hang off of.
///
/// Owns the pool, the scheduler, the configuration, and handles to the
/// storage and cue collaborators. Every failure mode here degrades
/// gracefully; nothing in the draw/reveal flow surfaces an error to the UI.
pub struct CallerSession {
    config: CallerConfig,
    pool: DrawPool,
    scheduler: RevealScheduler,
    rng: fastrand::Rng,
    store: Box<dyn HistoryStore>,
    cues: Box<dyn CuePlayer>,
}

impl CallerSession {
    pub fn new(config: CallerConfig, store: Box<dyn HistoryStore>, cues: Box<dyn CuePlayer>) -> Self {
        let mut config = config;
        config.bound = clamp_bound(i64::from(config.bound));
        Self {
            pool: DrawPool::clamped(i64::from(config.bound)),
            scheduler: RevealScheduler::new(),
            rng: fastrand::Rng::new(),
            config,
            store,
            cues,
        }
    }

    /// Restore the drawn sequence persisted by an earlier session, once at
    /// startup. A missing or invalid record means a fresh game.
    pub fn hydrate(&mut self) {
        let history = storage::load_history(self.store.as_ref(), self.config.bound);
        if history.is_empty() {
            return;
        }
        tracing::debug!(drawn = history.len(), "restoring persisted game");
        self.pool = DrawPool::resuming(i64::from(self.config.bound), &history);
        self.scheduler = RevealScheduler::hydrated(history);
    }

    /// Draw the next number and start its reveal.
    ///
    /// On success the drawn sequence is persisted and a cue is triggered;
    /// the host is expected to call [`finish_reveal`](Self::finish_reveal)
    /// with the returned ticket after the configured delay.
    pub fn draw(&mut self) -> DrawOutcome {
        if self.scheduler.is_reveal_pending() {
            return DrawOutcome::Busy;
        }
        let Some(number) = self.pool.draw() else {
            return DrawOutcome::Exhausted;
        };
        let Some(ticket) = self.scheduler.begin_reveal(number) else {
            return DrawOutcome::Busy;
        };

        match audio::select_cue(self.config.cue_selection, &mut self.rng) {
            Ok(cue) => self.cues.play(cue),
            Err(err) => tracing::warn!(%err, "reveal continues without audio"),
        }
        storage::save_history(self.store.as_ref(), self.scheduler.drawn());
        tracing::debug!(number, remaining = self.pool.remaining(), "number drawn");

        DrawOutcome::Drawn { number, ticket }
    }

    /// Timer callback: promote the pending number into visible history.
    pub fn finish_reveal(&mut self, ticket: RevealTicket) -> bool {
        self.scheduler.complete_reveal(ticket)
    }

    /// Clear the game and start over, optionally at a new bound.
    pub fn reset(&mut self, new_bound: Option<i64>) {
        if let Some(raw) = new_bound {
            self.config.bound = clamp_bound(raw);
        }
        self.scheduler.reset();
        self.pool = DrawPool::clamped(i64::from(self.config.bound));
        storage::save_history(self.store.as_ref(), &[]);
        tracing::debug!(bound = self.config.bound, "session reset");
    }

    /// Reconfigure the pool size. Allowed only before the first draw.
    pub fn set_bound(&mut self, raw: i64) -> bool {
        if !self.scheduler.drawn().is_empty() {
            return false;
        }
        self.config.bound = clamp_bound(raw);
        self.pool = DrawPool::clamped(raw);
        true
    }

    pub fn set_cue_selection(&mut self, index: usize) {
        self.config.cue_selection = index;
    }

    pub fn drawn(&self) -> &[u16] {
        self.scheduler.drawn()
    }

    pub fn visible(&self) -> &[u16] {
        self.scheduler.visible()
    }

    pub fn last_visible(&self) -> Option<u16> {
        self.scheduler.last_visible()
    }

    pub fn remaining(&self) -> usize {
        self.pool.remaining()
    }

    pub fn bound(&self) -> u16 {
        self.config.bound
    }

    pub fn is_reveal_pending(&self) -> bool {
        self.scheduler.is_reveal_pending()
    }

    pub fn is_exhausted(&self) -> bool {
        self.pool.is_exhausted()
    }

    pub fn reveal_delay_ms(&self) -> u32 {
        self.config.reveal_delay_ms
    }

    pub fn cue_selection(&self) -> usize {
        self.config.cue_selection
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::time::Duration;

    use crate::audio::SilentPlayer;
    use crate::storage::{MemoryStore, HISTORY_KEY};

    use super::*;

    fn session_at(bound: u16) -> (CallerSession, Rc<MemoryStore>) {
        let store = Rc::new(MemoryStore::default());
        let config = CallerConfig {
            bound,
            ..CallerConfig::default()
        };
        let session = CallerSession::new(config, Box::new(store.clone()), Box::new(SilentPlayer));
        (session, store)
    }

    fn drawn_ticket(outcome: DrawOutcome) -> RevealTicket {
        match outcome {
            DrawOutcome::Drawn { ticket, .. } => ticket,
            other => panic!("expected a draw, got {other:?}"),
        }
    }

    #[test]
    fn second_draw_is_rejected_until_the_reveal_finishes() {
        let (mut session, _) = session_at(75);

        let ticket = drawn_ticket(session.draw());
        assert!(session.is_reveal_pending());
        assert_eq!(session.draw(), DrawOutcome::Busy);
        assert_eq!(session.drawn().len(), 1);

        assert!(session.finish_reveal(ticket));
        assert!(!session.is_reveal_pending());
        drawn_ticket(session.draw());
        assert_eq!(session.drawn().len(), 2);
    }

    #[tokio::test]
    async fn reveal_completes_after_the_host_delay() {
        let (mut session, _) = session_at(75);
        let ticket = drawn_ticket(session.draw());
        assert_eq!(session.visible().len(), 0);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(session.finish_reveal(ticket));
        assert_eq!(session.visible(), session.drawn());
    }

    #[test]
    fn drawn_length_plus_remaining_is_the_bound() {
        let (mut session, _) = session_at(10);
        for _ in 0..10 {
            let ticket = drawn_ticket(session.draw());
            session.finish_reveal(ticket);
            assert_eq!(session.drawn().len() + session.remaining(), 10);
        }
        assert_eq!(session.draw(), DrawOutcome::Exhausted);
        assert!(session.is_exhausted());
    }

    #[test]
    fn every_draw_persists_the_full_sequence() {
        let (mut session, store) = session_at(75);
        let ticket = drawn_ticket(session.draw());
        session.finish_reveal(ticket);
        drawn_ticket(session.draw());

        let record = store.read(HISTORY_KEY).unwrap();
        let persisted: Vec<u16> = serde_json::from_str(&record).unwrap();
        assert_eq!(persisted, session.drawn());
        assert_eq!(persisted.len(), 2);
    }

    #[test]
    fn hydration_restores_history_without_pacing() {
        let store = Rc::new(MemoryStore::default());
        store.write(HISTORY_KEY, "[3, 17, 42]");
        let mut session = CallerSession::new(
            CallerConfig::default(),
            Box::new(store.clone()),
            Box::new(SilentPlayer),
        );
        session.hydrate();

        assert_eq!(session.drawn(), &[3, 17, 42]);
        assert_eq!(session.visible(), &[3, 17, 42]);
        assert!(!session.is_reveal_pending());
        assert_eq!(session.remaining(), 75 - 3);
    }

    #[test]
    fn hydration_never_rehands_out_restored_numbers() {
        let store = Rc::new(MemoryStore::default());
        store.write(HISTORY_KEY, "[1, 2, 3]");
        let mut session = CallerSession::new(
            CallerConfig {
                bound: 4,
                ..CallerConfig::default()
            },
            Box::new(store.clone()),
            Box::new(SilentPlayer),
        );
        session.hydrate();

        match session.draw() {
            DrawOutcome::Drawn { number, .. } => assert_eq!(number, 4),
            other => panic!("expected the last number, got {other:?}"),
        }
    }

    #[test]
    fn invalid_persisted_record_means_a_fresh_game() {
        let store = Rc::new(MemoryStore::default());
        store.write(HISTORY_KEY, "[900]");
        let mut session = CallerSession::new(
            CallerConfig::default(),
            Box::new(store.clone()),
            Box::new(SilentPlayer),
        );
        session.hydrate();

        assert_eq!(session.drawn(), &[] as &[u16]);
        assert_eq!(session.remaining(), 75);
    }

    #[test]
    fn reset_returns_to_the_initial_state() {
        let (mut session, store) = session_at(75);
        let ticket = drawn_ticket(session.draw());
        session.finish_reveal(ticket);
        drawn_ticket(session.draw());

        session.reset(None);
        assert_eq!(session.drawn(), &[] as &[u16]);
        assert_eq!(session.visible(), &[] as &[u16]);
        assert_eq!(session.remaining(), 75);
        assert!(!session.is_reveal_pending());
        assert_eq!(store.read(HISTORY_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn reset_can_change_the_bound() {
        let (mut session, _) = session_at(75);
        drawn_ticket(session.draw());

        session.reset(Some(30));
        assert_eq!(session.bound(), 30);
        assert_eq!(session.remaining(), 30);
    }

    #[test]
    fn stale_ticket_from_before_reset_cannot_promote() {
        let (mut session, _) = session_at(75);
        let stale = drawn_ticket(session.draw());

        session.reset(None);
        let fresh = drawn_ticket(session.draw());

        assert!(!session.finish_reveal(stale));
        assert_eq!(session.visible(), &[] as &[u16]);
        assert!(session.finish_reveal(fresh));
        assert_eq!(session.visible().len(), 1);
    }

    #[test]
    fn bound_is_locked_once_a_number_is_drawn() {
        let (mut session, _) = session_at(75);
        assert!(session.set_bound(90));
        assert_eq!(session.bound(), 90);
        assert_eq!(session.remaining(), 90);

        drawn_ticket(session.draw());
        assert!(!session.set_bound(50));
        assert_eq!(session.bound(), 90);
    }

    #[test]
    fn bounds_are_clamped_everywhere() {
        let (mut session, _) = session_at(75);
        assert!(session.set_bound(5000));
        assert_eq!(session.bound(), 999);

        session.reset(Some(-2));
        assert_eq!(session.bound(), 1);
        assert_eq!(session.remaining(), 1);
    }

    #[test]
    fn unknown_cue_never_blocks_the_draw() {
        let (mut session, store) = session_at(75);
        session.set_cue_selection(99);

        let outcome = session.draw();
        assert!(matches!(outcome, DrawOutcome::Drawn { .. }));
        assert_eq!(session.drawn().len(), 1);
        assert!(session.is_reveal_pending());
        assert!(store.read(HISTORY_KEY).is_some());
    }
}
