//! Loading screen animation state

use std::time::{Duration, Instant};

/// Animation phase for the loading screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Logo held in place with the pulsing dots
    Display,
    /// Logo easing off the top of the screen
    ScrollUp,
    /// Animation finished
    Complete,
}

#[derive(Debug)]
pub struct SplashState {
    pub start_time: Instant,
    pub phase: SplashPhase,
    /// Current vertical offset (for scroll animation)
    pub scroll_offset: f32,
}

impl SplashState {
    const DISPLAY_DURATION: Duration = Duration::from_millis(1200);
    const ANIMATION_DURATION: Duration = Duration::from_millis(700);
    /// One full cycle of the loading dots
    const DOT_PERIOD: Duration = Duration::from_millis(900);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: SplashPhase::Display,
            scroll_offset: 0.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self, terminal_height: u16) {
        self.advance(self.start_time.elapsed(), terminal_height);
    }

    fn advance(&mut self, elapsed: Duration, terminal_height: u16) {
        if self.phase == SplashPhase::Complete {
            return;
        }
        if elapsed < Self::DISPLAY_DURATION {
            self.phase = SplashPhase::Display;
            self.scroll_offset = 0.0;
        } else if elapsed < Self::DISPLAY_DURATION + Self::ANIMATION_DURATION {
            self.phase = SplashPhase::ScrollUp;
            let animation_elapsed = elapsed - Self::DISPLAY_DURATION;
            let progress = animation_elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
            let eased = simple_easing::cubic_out(progress);
            self.scroll_offset = eased * (terminal_height as f32);
        } else {
            self.phase = SplashPhase::Complete;
        }
    }

    /// Number of loading dots to show (0..=3)
    pub fn dots(&self) -> usize {
        let period = Self::DOT_PERIOD.as_millis();
        let phase = self.start_time.elapsed().as_millis() % period;
        (phase * 4 / period) as usize
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_in_display_phase() {
        let state = SplashState::new();
        assert_eq!(state.phase, SplashPhase::Display);
        assert_eq!(state.scroll_offset, 0.0);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_skip_immediately_completes() {
        let mut state = SplashState::new();
        state.skip();
        assert!(state.is_complete());
        state.skip();
        assert!(state.is_complete());
    }

    #[test]
    fn test_advance_through_phases() {
        let mut state = SplashState::new();

        state.advance(Duration::from_millis(100), 40);
        assert_eq!(state.phase, SplashPhase::Display);
        assert_eq!(state.scroll_offset, 0.0);

        state.advance(Duration::from_millis(1550), 40);
        assert_eq!(state.phase, SplashPhase::ScrollUp);
        assert!(state.scroll_offset > 0.0 && state.scroll_offset <= 40.0);

        state.advance(Duration::from_millis(5000), 40);
        assert!(state.is_complete());
    }

    #[test]
    fn test_complete_is_sticky() {
        let mut state = SplashState::new();
        state.skip();
        state.advance(Duration::from_millis(0), 40);
        assert!(state.is_complete());
    }

    #[test]
    fn test_dots_in_range() {
        let state = SplashState::new();
        assert!(state.dots() <= 3);
    }
}
