//! Presentation cues played while a reveal is pending.

use thiserror::Error;

/// One named audio cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cue {
    pub name: &'static str,
    pub file: &'static str,
}

/// Named cues, in picker order.
///
/// Selection index 0 means "random"; selection k >= 1 addresses `CUES[k-1]`.
pub const CUES: &[Cue] = &[
    Cue {
        name: "drumroll",
        file: "/assets/cues/drumroll_and_rollend.mp3",
    },
    Cue {
        name: "fanfare",
        file: "/assets/cues/fanfare.mp3",
    },
    Cue {
        name: "chime",
        file: "/assets/cues/chime.mp3",
    },
];

/// Selection index addresses no cue in the table.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no cue for selection index {0}")]
pub struct CueNotFound(pub usize);

/// Resolve a selection index to a concrete cue.
pub fn select_cue(selection: usize, rng: &mut fastrand::Rng) -> Result<&'static Cue, CueNotFound> {
    match selection {
        0 => Ok(&CUES[rng.usize(..CUES.len())]),
        k if k <= CUES.len() => Ok(&CUES[k - 1]),
        k => Err(CueNotFound(k)),
    }
}

/// Plays a cue. Playback is fire-and-forget and never awaited; the reveal
/// timer paces the presentation on its own.
pub trait CuePlayer {
    fn play(&self, cue: &Cue);
}

/// Browser playback through an `<audio>` element.
#[cfg(feature = "web")]
pub struct AudioElementPlayer;

#[cfg(feature = "web")]
impl CuePlayer for AudioElementPlayer {
    fn play(&self, cue: &Cue) {
        match web_sys::HtmlAudioElement::new_with_src(cue.file) {
            Ok(audio) => {
                if let Err(err) = audio.play() {
                    tracing::warn!(cue = cue.name, ?err, "cue playback refused");
                }
            }
            Err(err) => {
                tracing::warn!(cue = cue.name, ?err, "cue element creation failed");
            }
        }
    }
}

/// No-op player for native builds and tests.
#[derive(Default)]
pub struct SilentPlayer;

impl CuePlayer for SilentPlayer {
    fn play(&self, _cue: &Cue) {}
}
