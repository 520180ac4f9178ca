// Host-side tests for the audio feedback decision table.

use haunt_core::{AudioCommand, AudioFeedbackController, PlaybackPhase, NEAR_SILENCE_THRESHOLD};

#[test]
fn idle_and_silent_issues_nothing() {
    let mut ctl = AudioFeedbackController::new();
    assert!(ctl.update(false, 0.8).is_empty());
    assert!(ctl.update(true, 0.0).is_empty());
    assert!(ctl.update(true, NEAR_SILENCE_THRESHOLD).is_empty());
    assert_eq!(ctl.phase(), PlaybackPhase::Idle);
}

#[test]
fn becoming_audible_plays_then_sets_volume() {
    let mut ctl = AudioFeedbackController::new();
    let commands = ctl.update(true, 0.6);
    assert_eq!(
        commands.as_slice(),
        &[AudioCommand::Play, AudioCommand::SetVolume(0.6)]
    );
    assert!(ctl.is_active());
}

#[test]
fn volume_changes_while_playing_never_replay() {
    let mut ctl = AudioFeedbackController::new();
    ctl.update(true, 0.6);
    for volume in [0.5, 0.4, 0.9, 0.02] {
        let commands = ctl.update(true, volume);
        assert_eq!(commands.as_slice(), &[AudioCommand::SetVolume(volume)]);
    }
    assert_eq!(ctl.phase(), PlaybackPhase::Playing);
}

#[test]
fn disabling_while_playing_stops_once() {
    let mut ctl = AudioFeedbackController::new();
    ctl.update(true, 0.6);
    let commands = ctl.update(false, 0.6);
    assert_eq!(commands.as_slice(), &[AudioCommand::Stop]);
    assert_eq!(ctl.phase(), PlaybackPhase::Stopping);

    // No second stop while the collaborator is still winding down.
    assert!(ctl.update(false, 0.6).is_empty());

    ctl.confirm_stopped();
    assert_eq!(ctl.phase(), PlaybackPhase::Idle);
}

#[test]
fn near_silence_stops_playback() {
    let mut ctl = AudioFeedbackController::new();
    ctl.update(true, 0.6);
    let commands = ctl.update(true, 0.005);
    assert_eq!(commands.as_slice(), &[AudioCommand::Stop]);
}

#[test]
fn restart_from_stopping_replays() {
    let mut ctl = AudioFeedbackController::new();
    ctl.update(true, 0.6);
    ctl.update(false, 0.6);
    assert_eq!(ctl.phase(), PlaybackPhase::Stopping);

    // Re-enabled before the stop was confirmed: a fresh play is required.
    let commands = ctl.update(true, 0.3);
    assert_eq!(
        commands.as_slice(),
        &[AudioCommand::Play, AudioCommand::SetVolume(0.3)]
    );
    assert!(ctl.is_active());
}

#[test]
fn confirm_stopped_is_ignored_outside_stopping() {
    let mut ctl = AudioFeedbackController::new();
    ctl.confirm_stopped();
    assert_eq!(ctl.phase(), PlaybackPhase::Idle);

    ctl.update(true, 0.6);
    ctl.confirm_stopped();
    assert_eq!(ctl.phase(), PlaybackPhase::Playing);
}
