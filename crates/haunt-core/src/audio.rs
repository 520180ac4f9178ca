//! Audio feedback decisions.
//!
//! The controller owns an explicit playback phase and turns (enabled, volume)
//! observations into the minimal command batch for the playback collaborator.
//! It never issues a redundant play or stop, which is what keeps the looped
//! footstep sample glitch-free across fix updates.

use smallvec::SmallVec;

/// Volumes at or below this are treated as silence and stop playback.
pub const NEAR_SILENCE_THRESHOLD: f64 = 0.01;

/// Commands issued to the external playback collaborator, in order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AudioCommand {
    Play,
    Stop,
    SetVolume(f64),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackPhase {
    #[default]
    Idle,
    Playing,
    /// Stop issued, collaborator has not yet confirmed.
    Stopping,
}

pub type CommandBatch = SmallVec<[AudioCommand; 2]>;

#[derive(Debug, Default)]
pub struct AudioFeedbackController {
    phase: PlaybackPhase,
}

impl AudioFeedbackController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    /// Decides what the collaborator should do for the current observation.
    ///
    /// Audible and not playing: `Play` then `SetVolume`. Audible and already
    /// playing: `SetVolume` only. Silent or disabled while playing: `Stop`.
    /// Silent while idle: nothing.
    pub fn update(&mut self, enabled: bool, volume: f64) -> CommandBatch {
        let mut commands = CommandBatch::new();
        let audible = enabled && volume > NEAR_SILENCE_THRESHOLD;
        match (self.phase, audible) {
            (PlaybackPhase::Playing, true) => {
                commands.push(AudioCommand::SetVolume(volume));
            }
            (PlaybackPhase::Playing, false) => {
                commands.push(AudioCommand::Stop);
                self.phase = PlaybackPhase::Stopping;
            }
            (PlaybackPhase::Idle | PlaybackPhase::Stopping, true) => {
                commands.push(AudioCommand::Play);
                commands.push(AudioCommand::SetVolume(volume));
                self.phase = PlaybackPhase::Playing;
            }
            (PlaybackPhase::Idle | PlaybackPhase::Stopping, false) => {}
        }
        commands
    }

    /// Collaborator acknowledgment that playback has actually halted.
    pub fn confirm_stopped(&mut self) {
        if self.phase == PlaybackPhase::Stopping {
            self.phase = PlaybackPhase::Idle;
        }
    }
}
