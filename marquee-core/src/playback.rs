//! Playback lifecycle state machine
//!
//! One `PlaybackController` per mounted player. The controller reacts
//! to lifecycle events delivered by the external playback engine and
//! to explicit user actions; it never polls. Each load attempt carries
//! a generation tag, and events from superseded attempts are discarded,
//! which doubles as the cancellation mechanism for abandoned loads.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Media load failure kinds surfaced inline with a retry affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaLoadError {
    #[error("Network error while loading media")]
    Network,

    #[error("Media could not be decoded")]
    Decode,

    #[error("Media source is unavailable")]
    UnavailableSource,

    #[error("Unknown media load failure")]
    Unknown,
}

/// Playback session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackState {
    /// Constructed, no load issued yet
    Idle,
    /// A load attempt for the current generation is outstanding
    Loading,
    Playing,
    Paused,
    /// The current generation's load failed
    Error { error: MediaLoadError },
}

impl PlaybackState {
    pub fn is_idle(&self) -> bool {
        matches!(self, PlaybackState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PlaybackState::Loading)
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PlaybackState::Error { .. })
    }

    /// Failure kind if the session is in the error state.
    pub fn error(&self) -> Option<MediaLoadError> {
        match self {
            PlaybackState::Error { error } => Some(*error),
            _ => None,
        }
    }

    /// Stable name used in logs and the API.
    pub fn name(&self) -> &'static str {
        match self {
            PlaybackState::Idle => "idle",
            PlaybackState::Loading => "loading",
            PlaybackState::Playing => "playing",
            PlaybackState::Paused => "paused",
            PlaybackState::Error { .. } => "error",
        }
    }
}

/// Lifecycle notification from the playback engine, translated into a
/// closed event type so transition logic does not depend on the
/// engine's notification shape.
///
/// Every event carries the generation of the load attempt it belongs
/// to; the controller compares it against its own current generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// The media is ready and playback can start
    Ready { generation: u64 },
    /// The load attempt failed
    Failed {
        generation: u64,
        error: MediaLoadError,
    },
}

impl PlayerEvent {
    fn generation(&self) -> u64 {
        match self {
            PlayerEvent::Ready { generation } => *generation,
            PlayerEvent::Failed { generation, .. } => *generation,
        }
    }
}

/// Per-player playback lifecycle controller.
///
/// All transitions are synchronous mutations: the new state is visible
/// through `state()` as soon as the triggering call returns. Volume
/// and position are continuous attributes outside the discrete state
/// machine and never cause a transition.
#[derive(Debug)]
pub struct PlaybackController {
    media_url: String,
    state: PlaybackState,
    /// Monotonically increasing load attempt tag. Events whose tag is
    /// not the current value are discarded.
    generation: u64,
    volume: f32,
    position: Duration,
}

impl PlaybackController {
    /// Creates an idle controller for the given media location.
    pub fn new(media_url: impl Into<String>) -> Self {
        Self {
            media_url: media_url.into(),
            state: PlaybackState::Idle,
            generation: 0,
            volume: 1.0,
            position: Duration::ZERO,
        }
    }

    /// Creates a controller and immediately begins the first load, as
    /// happens when a player mounts.
    pub fn mount(media_url: impl Into<String>) -> Self {
        let mut controller = Self::new(media_url);
        controller.begin_load();
        controller
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn media_url(&self) -> &str {
        &self.media_url
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn position(&self) -> Duration {
        self.position
    }

    /// Starts a load attempt for the current media location.
    ///
    /// Bumps the generation so that any event still in flight from a
    /// previous attempt no longer matches, then enters `Loading`.
    /// Returns the new generation to tag the attempt with.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.state = PlaybackState::Loading;
        tracing::debug!(
            generation = self.generation,
            url = %self.media_url,
            "playback load started"
        );
        self.generation
    }

    /// Applies a lifecycle event from the playback engine.
    ///
    /// Returns `true` if the event caused a transition and `false` if
    /// it had no effect. Two kinds of events have no effect: events
    /// tagged with a non-current generation belong to a superseded
    /// load and are discarded, so a late-arriving event from a fast
    /// re-navigation or rapid retry cannot corrupt the current state;
    /// and a current-generation `Ready` outside `Loading` is a
    /// duplicate with nothing left to do.
    pub fn handle_event(&mut self, event: PlayerEvent) -> bool {
        if event.generation() != self.generation {
            tracing::debug!(
                event_generation = event.generation(),
                current_generation = self.generation,
                "discarding stale playback event"
            );
            return false;
        }

        match event {
            PlayerEvent::Ready { .. } => {
                // Ready only matters while the load is outstanding;
                // a duplicate ready during playback changes nothing.
                if self.state.is_loading() {
                    self.state = PlaybackState::Playing;
                    tracing::debug!(generation = self.generation, "playback ready, playing");
                    true
                } else {
                    false
                }
            }
            PlayerEvent::Failed { error, .. } => {
                self.state = PlaybackState::Error { error };
                tracing::warn!(
                    generation = self.generation,
                    %error,
                    "playback load failed"
                );
                true
            }
        }
    }

    /// User play action. Only meaningful from `Paused`.
    pub fn play(&mut self) -> bool {
        if self.state.is_paused() {
            self.state = PlaybackState::Playing;
            true
        } else {
            false
        }
    }

    /// User pause action. Only meaningful from `Playing`.
    pub fn pause(&mut self) -> bool {
        if self.state.is_playing() {
            self.state = PlaybackState::Paused;
            true
        } else {
            false
        }
    }

    /// User retry action after a failed load.
    ///
    /// Re-issues the load against the same media location, or against
    /// `fallback` when one is supplied. Returns the new generation, or
    /// `None` when the session is not in the error state.
    pub fn retry(&mut self, fallback: Option<String>) -> Option<u64> {
        if !self.state.is_error() {
            return None;
        }

        if let Some(url) = fallback {
            self.media_url = url;
        }
        Some(self.begin_load())
    }

    /// Adjusts volume without a state transition. Rejected in the
    /// error state.
    pub fn set_volume(&mut self, volume: f32) -> bool {
        if self.state.is_error() {
            return false;
        }
        self.volume = volume.clamp(0.0, 1.0);
        true
    }

    /// Moves the playback position without a state transition.
    /// Rejected in the error state.
    pub fn seek(&mut self, position: Duration) -> bool {
        if self.state.is_error() {
            return false;
        }
        self.position = position;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_enters_loading() {
        let controller = PlaybackController::mount("/media/movie1.mp4");

        assert!(controller.state().is_loading());
        assert_eq!(controller.generation(), 1);
    }

    #[test]
    fn test_ready_event_starts_playback() {
        let mut controller = PlaybackController::mount("/media/movie1.mp4");

        let applied = controller.handle_event(PlayerEvent::Ready { generation: 1 });
        assert!(applied);
        assert!(controller.state().is_playing());
    }

    #[test]
    fn test_failure_event_enters_error() {
        let mut controller = PlaybackController::mount("/media/movie1.mp4");

        let applied = controller.handle_event(PlayerEvent::Failed {
            generation: 1,
            error: MediaLoadError::Network,
        });
        assert!(applied);
        assert_eq!(controller.state().error(), Some(MediaLoadError::Network));
    }

    #[test]
    fn test_play_pause_round_trip() {
        let mut controller = PlaybackController::mount("/media/movie1.mp4");
        controller.handle_event(PlayerEvent::Ready { generation: 1 });

        assert!(controller.pause());
        assert!(controller.state().is_paused());
        assert!(controller.play());
        assert!(controller.state().is_playing());

        // Pause does not change the generation
        assert_eq!(controller.generation(), 1);
    }

    #[test]
    fn test_play_is_noop_outside_paused() {
        let mut controller = PlaybackController::mount("/media/movie1.mp4");

        assert!(!controller.play());
        assert!(controller.state().is_loading());
    }

    #[test]
    fn test_retry_reissues_load_and_recovers() {
        let mut controller = PlaybackController::mount("/media/movie1.mp4");
        controller.handle_event(PlayerEvent::Failed {
            generation: 1,
            error: MediaLoadError::UnavailableSource,
        });

        let generation = controller.retry(None).unwrap();
        assert_eq!(generation, 2);
        assert!(controller.state().is_loading());

        controller.handle_event(PlayerEvent::Ready { generation: 2 });
        assert!(controller.state().is_playing());
    }

    #[test]
    fn test_retry_with_fallback_swaps_location() {
        let mut controller = PlaybackController::mount("/media/movie1.mp4");
        controller.handle_event(PlayerEvent::Failed {
            generation: 1,
            error: MediaLoadError::Decode,
        });

        controller.retry(Some("/media/movie1-fallback.mp4".to_string()));
        assert_eq!(controller.media_url(), "/media/movie1-fallback.mp4");
    }

    #[test]
    fn test_retry_rejected_outside_error() {
        let mut controller = PlaybackController::mount("/media/movie1.mp4");

        assert!(controller.retry(None).is_none());
        assert_eq!(controller.generation(), 1);
    }

    #[test]
    fn test_stale_ready_event_is_discarded() {
        let mut controller = PlaybackController::mount("/media/movie1.mp4");

        // Load fails, retry bumps the generation to 2
        controller.handle_event(PlayerEvent::Failed {
            generation: 1,
            error: MediaLoadError::Network,
        });
        controller.retry(None);
        assert_eq!(controller.generation(), 2);

        // Generation 1's ready event arrives late and must not apply
        let applied = controller.handle_event(PlayerEvent::Ready { generation: 1 });
        assert!(!applied);
        assert!(controller.state().is_loading());
    }

    #[test]
    fn test_stale_failure_event_is_discarded() {
        let mut controller = PlaybackController::mount("/media/movie1.mp4");
        controller.handle_event(PlayerEvent::Ready { generation: 1 });

        let applied = controller.handle_event(PlayerEvent::Failed {
            generation: 0,
            error: MediaLoadError::Network,
        });
        assert!(!applied);
        assert!(controller.state().is_playing());
    }

    #[test]
    fn test_duplicate_ready_changes_nothing() {
        let mut controller = PlaybackController::mount("/media/movie1.mp4");
        controller.handle_event(PlayerEvent::Ready { generation: 1 });
        controller.pause();

        let applied = controller.handle_event(PlayerEvent::Ready { generation: 1 });
        assert!(!applied);
        assert!(controller.state().is_paused());
    }

    #[test]
    fn test_current_generation_failure_from_playing() {
        let mut controller = PlaybackController::mount("/media/movie1.mp4");
        controller.handle_event(PlayerEvent::Ready { generation: 1 });

        // A current-generation failure mid-playback still transitions
        let applied = controller.handle_event(PlayerEvent::Failed {
            generation: 1,
            error: MediaLoadError::Unknown,
        });
        assert!(applied);
        assert!(controller.state().is_error());
    }

    #[test]
    fn test_volume_and_seek_do_not_transition() {
        let mut controller = PlaybackController::mount("/media/movie1.mp4");
        controller.handle_event(PlayerEvent::Ready { generation: 1 });

        assert!(controller.set_volume(0.5));
        assert!(controller.seek(Duration::from_secs(90)));
        assert!(controller.state().is_playing());
        assert_eq!(controller.volume(), 0.5);
        assert_eq!(controller.position(), Duration::from_secs(90));

        // Volume is clamped to the valid range
        controller.set_volume(2.5);
        assert_eq!(controller.volume(), 1.0);
    }

    #[test]
    fn test_volume_and_seek_rejected_in_error() {
        let mut controller = PlaybackController::mount("/media/movie1.mp4");
        controller.handle_event(PlayerEvent::Failed {
            generation: 1,
            error: MediaLoadError::Network,
        });

        assert!(!controller.set_volume(0.2));
        assert!(!controller.seek(Duration::from_secs(5)));
    }
}
