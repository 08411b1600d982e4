// Copyright 2026 the Sortscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walking a trace at human speed.
//!
//! A [`Player`] holds a position into a recorded trace. In
//! [`Mode::SingleStep`] it only moves when [`Player::step_forward`] is
//! called; in [`Mode::Auto`] the host feeds it elapsed time through
//! [`Player::tick`] and it advances one step per
//! [`delay_ms`](PlaybackConfig::delay_ms). The player never sleeps or reads
//! a clock itself, so the host decides how frames are paced.

use std::time::Duration;

use sortscope_core::step::Step;

/// How the player advances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// One step per explicit request.
    #[default]
    SingleStep,
    /// One step per configured delay.
    Auto,
}

/// Playback settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Advance mode.
    pub mode: Mode,
    /// Time each step stays on screen in [`Mode::Auto`], in milliseconds.
    /// Always within [`MIN_DELAY_MS`](Self::MIN_DELAY_MS)..=[`MAX_DELAY_MS`](Self::MAX_DELAY_MS)
    /// once it reaches a [`Player`].
    pub delay_ms: u32,
}

impl PlaybackConfig {
    /// Shortest per-step delay.
    pub const MIN_DELAY_MS: u32 = 1;
    /// Longest per-step delay.
    pub const MAX_DELAY_MS: u32 = 1000;

    /// Single-step mode with a 400 ms auto delay.
    pub const DEFAULT: Self = Self {
        mode: Mode::SingleStep,
        delay_ms: 400,
    };

    /// Auto mode with the default delay.
    pub const AUTO: Self = Self {
        mode: Mode::Auto,
        delay_ms: Self::DEFAULT.delay_ms,
    };

    /// Clamps a delay into the supported range.
    #[must_use]
    pub const fn clamp_delay(delay_ms: u32) -> u32 {
        if delay_ms < Self::MIN_DELAY_MS {
            Self::MIN_DELAY_MS
        } else if delay_ms > Self::MAX_DELAY_MS {
            Self::MAX_DELAY_MS
        } else {
            delay_ms
        }
    }

    /// Returns a copy with the delay set (and clamped).
    #[must_use]
    pub const fn with_delay_ms(self, delay_ms: u32) -> Self {
        Self {
            mode: self.mode,
            delay_ms: Self::clamp_delay(delay_ms),
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A cursor into a trace.
#[derive(Debug)]
pub struct Player<'a, T = f64> {
    trace: &'a [Step<T>],
    position: usize,
    config: PlaybackConfig,
    /// Auto-mode time not yet spent on a step.
    pending: Duration,
}

impl<'a, T> Player<'a, T> {
    /// Creates a player positioned on the first step.
    #[must_use]
    pub fn new(trace: &'a [Step<T>], config: PlaybackConfig) -> Self {
        Self {
            trace,
            position: 0,
            config: config.with_delay_ms(config.delay_ms),
            pending: Duration::ZERO,
        }
    }

    /// Returns the step currently shown, or `None` for an empty trace.
    #[must_use]
    pub fn current(&self) -> Option<&'a Step<T>> {
        self.trace.get(self.position)
    }

    /// Returns the index of the current step.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of steps in the trace.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    /// Returns `true` if the trace has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// Returns `true` once the last step is shown.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.position + 1 >= self.trace.len()
    }

    /// Returns the active settings.
    #[must_use]
    pub fn config(&self) -> PlaybackConfig {
        self.config
    }

    /// Switches mode. Time accumulated in auto mode is discarded.
    pub fn set_mode(&mut self, mode: Mode) {
        self.config.mode = mode;
        self.pending = Duration::ZERO;
    }

    /// Changes the auto delay, clamping it into range.
    pub fn set_delay_ms(&mut self, delay_ms: u32) {
        self.config = self.config.with_delay_ms(delay_ms);
    }

    /// Moves to the next step and returns it, or returns `None` (and stays
    /// put) when already on the last step. Works in either mode.
    pub fn step_forward(&mut self) -> Option<&'a Step<T>> {
        if self.is_finished() {
            return None;
        }
        self.position += 1;
        self.current()
    }

    /// Feeds elapsed time in auto mode and returns how many steps were
    /// advanced. Single-step mode ignores time.
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        if self.config.mode != Mode::Auto || self.is_finished() {
            return 0;
        }
        let delay = self.delay();
        self.pending = self.pending.saturating_add(elapsed);
        let mut advanced = 0;
        while self.pending >= delay && !self.is_finished() {
            self.pending -= delay;
            self.position += 1;
            advanced += 1;
        }
        if self.is_finished() {
            self.pending = Duration::ZERO;
        }
        advanced
    }

    /// Returns how long auto mode takes to reach the last step from here.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        let steps = self.trace.len().saturating_sub(self.position + 1);
        let steps = u32::try_from(steps).unwrap_or(u32::MAX);
        self.delay()
            .checked_mul(steps)
            .unwrap_or(Duration::MAX)
            .saturating_sub(self.pending)
    }

    /// Rewinds to the first step.
    pub fn restart(&mut self) {
        self.position = 0;
        self.pending = Duration::ZERO;
    }

    fn delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.config.delay_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortscope_core::clock::FixedClock;
    use sortscope_core::engine::Algorithm;
    use sortscope_core::step::{Action, SortResult};
    use sortscope_core::trace::Tracer;

    fn bubble(input: &[f64]) -> SortResult {
        Algorithm::Bubble.run_with(input, &FixedClock::default(), &mut Tracer::none())
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn delay_is_clamped() {
        assert_eq!(PlaybackConfig::clamp_delay(0), 1);
        assert_eq!(PlaybackConfig::clamp_delay(400), 400);
        assert_eq!(PlaybackConfig::clamp_delay(5000), 1000);
        let result = bubble(&[2.0, 1.0]);
        let player = Player::new(&result.trace, PlaybackConfig { mode: Mode::Auto, delay_ms: 0 });
        assert_eq!(player.config().delay_ms, 1);
    }

    #[test]
    fn single_step_walks_to_the_end() {
        let result = bubble(&[2.0, 1.0]);
        let mut player = Player::new(&result.trace, PlaybackConfig::DEFAULT);
        assert_eq!(player.current().map(|s| s.action), Some(Action::Init));
        let mut seen = vec![Action::Init];
        while let Some(step) = player.step_forward() {
            seen.push(step.action);
        }
        assert_eq!(seen, result.actions().collect::<Vec<_>>());
        assert!(player.is_finished());
        assert_eq!(player.position(), result.len() - 1);
        assert!(player.step_forward().is_none());
        assert_eq!(player.position(), result.len() - 1);
    }

    #[test]
    fn single_step_ignores_time() {
        let result = bubble(&[3.0, 2.0, 1.0]);
        let mut player = Player::new(&result.trace, PlaybackConfig::DEFAULT);
        assert_eq!(player.tick(ms(10_000)), 0);
        assert_eq!(player.position(), 0);
    }

    #[test]
    fn auto_advances_one_step_per_delay() {
        let result = bubble(&[3.0, 2.0, 1.0]);
        let mut player = Player::new(&result.trace, PlaybackConfig::AUTO.with_delay_ms(100));
        assert_eq!(player.tick(ms(99)), 0);
        assert_eq!(player.tick(ms(1)), 1);
        assert_eq!(player.tick(ms(250)), 2);
        assert_eq!(player.position(), 3);
        // 50 ms carried over from the last tick.
        assert_eq!(player.tick(ms(50)), 1);
    }

    #[test]
    fn auto_stops_on_the_last_step() {
        let result = bubble(&[3.0, 2.0, 1.0]);
        let mut player = Player::new(&result.trace, PlaybackConfig::AUTO.with_delay_ms(10));
        let advanced = player.tick(ms(1_000_000));
        assert_eq!(advanced, result.len() - 1);
        assert!(player.is_finished());
        assert_eq!(player.current().map(|s| s.action), Some(Action::Complete));
        assert_eq!(player.tick(ms(10)), 0);
        assert_eq!(player.remaining(), Duration::ZERO);
    }

    #[test]
    fn huge_elapsed_time_runs_to_the_end() {
        let result = bubble(&[3.0, 2.0, 1.0]);
        let mut player = Player::new(&result.trace, PlaybackConfig::AUTO);
        assert_eq!(player.tick(ms(150)), 0);
        assert_eq!(player.tick(Duration::MAX), result.len() - 1);
        assert!(player.is_finished());
        assert_eq!(player.remaining(), Duration::ZERO);
    }

    #[test]
    fn remaining_accounts_for_pending_time() {
        let result = bubble(&[2.0, 1.0]);
        let mut player = Player::new(&result.trace, PlaybackConfig::AUTO);
        assert_eq!(player.remaining(), ms(400 * (result.len() as u64 - 1)));
        player.tick(ms(150));
        assert_eq!(player.remaining(), ms(400 * (result.len() as u64 - 1) - 150));
    }

    #[test]
    fn restart_rewinds() {
        let result = bubble(&[2.0, 1.0]);
        let mut player = Player::new(&result.trace, PlaybackConfig::AUTO);
        player.tick(ms(1000));
        assert!(player.position() > 0);
        player.restart();
        assert_eq!(player.position(), 0);
        assert_eq!(player.current().map(|s| s.action), Some(Action::Init));
    }

    #[test]
    fn switching_mode_drops_pending_time() {
        let result = bubble(&[3.0, 2.0, 1.0]);
        let mut player = Player::new(&result.trace, PlaybackConfig::AUTO);
        player.tick(ms(399));
        player.set_mode(Mode::SingleStep);
        player.set_mode(Mode::Auto);
        assert_eq!(player.tick(ms(1)), 0);
    }

    #[test]
    fn empty_trace() {
        let trace: Vec<Step> = Vec::new();
        let mut player = Player::new(&trace, PlaybackConfig::AUTO);
        assert!(player.is_empty());
        assert!(player.is_finished());
        assert!(player.current().is_none());
        assert!(player.step_forward().is_none());
        assert_eq!(player.tick(ms(1000)), 0);
    }
}
