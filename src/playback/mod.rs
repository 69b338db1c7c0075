//! Playback of a pre-computed [`Trace`]
//!
//! [`Player`] is a cooperative, single-threaded stepper. It never spawns a
//! timer: the caller polls [`Player::tick`] with the current instant and the
//! player advances at most one step per elapsed interval. Manual stepping in
//! either direction works whether or not playback is running.
//!
//! The cursor ranges over `0..=len`. Position `0` is the initial state before
//! any step; position `k` shows step `k - 1`.

use crate::step::{Step, Trace};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Navigation past either end of the trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("already at the first step")]
    AtStart,
    #[error("no more steps (playback finished)")]
    AtEnd,
}

/// Delay between automatic steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u64);

impl Speed {
    pub const MIN_MS: u64 = 100;
    pub const MAX_MS: u64 = 1000;
    pub const STEP_MS: u64 = 100;

    /// `None` unless `ms` is within range and a multiple of [`Speed::STEP_MS`]
    pub fn from_millis(ms: u64) -> Option<Self> {
        if (Self::MIN_MS..=Self::MAX_MS).contains(&ms) && ms % Self::STEP_MS == 0 {
            Some(Speed(ms))
        } else {
            None
        }
    }

    pub fn millis(self) -> u64 {
        self.0
    }

    pub fn interval(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Shorter delay, saturating at the minimum
    pub fn faster(self) -> Self {
        Speed(self.0.saturating_sub(Self::STEP_MS).max(Self::MIN_MS))
    }

    /// Longer delay, saturating at the maximum
    pub fn slower(self) -> Self {
        Speed((self.0 + Self::STEP_MS).min(Self::MAX_MS))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed(500)
    }
}

/// Everything a renderer needs for the current position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<'a> {
    pub values: &'a [i64],
    pub comparing: &'a [usize],
    pub swapping: &'a [usize],
    pub sorted: &'a [usize],
    pub found: Option<usize>,
    pub target: Option<i64>,
    pub message: Option<&'a str>,
}

/// Steps through one trace
#[derive(Debug)]
pub struct Player {
    trace: Trace,
    position: usize,
    speed: Speed,
    playing: bool,
    last_advance: Option<Instant>,
}

impl Player {
    pub fn new(trace: Trace, speed: Speed) -> Self {
        Player {
            trace,
            position: 0,
            speed,
            playing: false,
            last_advance: None,
        }
    }

    /// Number of steps applied so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of steps in the trace
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.trace.len()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Takes effect from the next tick
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    /// The step currently shown, `None` before the first step
    pub fn current(&self) -> Option<&Step> {
        self.position
            .checked_sub(1)
            .and_then(|index| self.trace.get(index))
    }

    /// Start automatic playback; a finished trace restarts from the beginning
    pub fn play(&mut self) {
        if self.is_finished() {
            self.position = 0;
        }
        self.playing = true;
        // First tick advances immediately
        self.last_advance = None;
        tracing::debug!(position = self.position, "playback started");
    }

    pub fn pause(&mut self) {
        self.playing = false;
        tracing::debug!(position = self.position, "playback paused");
    }

    /// Returns whether playback is running afterwards
    pub fn toggle(&mut self) -> bool {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
        self.playing
    }

    pub fn step_forward(&mut self) -> Result<(), PlaybackError> {
        if self.is_finished() {
            return Err(PlaybackError::AtEnd);
        }
        self.position += 1;
        Ok(())
    }

    pub fn step_backward(&mut self) -> Result<(), PlaybackError> {
        if self.position == 0 {
            return Err(PlaybackError::AtStart);
        }
        self.position -= 1;
        Ok(())
    }

    /// Step forward up to `n` times, returning how many steps were taken
    pub fn step_forward_by(&mut self, n: usize) -> usize {
        let taken = n.min(self.trace.len() - self.position);
        self.position += taken;
        taken
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.trace.len();
    }

    /// Advance one step if playing and the interval has elapsed since the last advance
    ///
    /// Returns whether a step was taken. Reaching the end stops playback.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.playing {
            return false;
        }

        let due = self
            .last_advance
            .map_or(true, |last| now.duration_since(last) >= self.speed.interval());
        if !due {
            return false;
        }

        self.last_advance = Some(now);
        let advanced = self.step_forward().is_ok();
        if self.is_finished() {
            self.playing = false;
            tracing::debug!(steps = self.trace.len(), "playback complete");
        }
        advanced
    }

    /// Render state at the current position
    pub fn view(&self) -> View<'_> {
        let mut view = View {
            values: self.trace.input(),
            comparing: &[],
            swapping: &[],
            sorted: &[],
            found: None,
            target: self.trace.target(),
            message: None,
        };

        let Some(step) = self.current() else {
            return view;
        };

        view.comparing = step.comparing_indices();
        view.message = Some(step.message());
        match step {
            Step::Search(step) => view.found = step.found_index,
            Step::Sort(step) => {
                view.values = step.array_snapshot.as_slice();
                view.swapping = step.swapping_indices.as_slice();
                view.sorted = step.sorted_indices.as_slice();
            }
        }

        view
    }
}
