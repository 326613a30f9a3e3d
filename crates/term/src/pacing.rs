//! Fixed-rate frame pacing.

use std::time::{Duration, Instant};

/// Time left to wait so that a frame started at `last_frame` lasts
/// `frame_budget`.
///
/// Returns zero when the frame already overran its budget; pacing degrades
/// gracefully instead of trying to catch up.
pub fn frame_wait(frame_budget: Duration, last_frame: Instant, now: Instant) -> Duration {
    (last_frame + frame_budget).saturating_duration_since(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_for_the_rest_of_the_budget() {
        let start = Instant::now();
        let budget = Duration::from_millis(100);
        let now = start + Duration::from_millis(30);
        assert_eq!(frame_wait(budget, start, now), Duration::from_millis(70));
    }

    #[test]
    fn overrun_frames_do_not_wait() {
        let start = Instant::now();
        let budget = Duration::from_millis(50);
        assert_eq!(
            frame_wait(budget, start, start + Duration::from_millis(80)),
            Duration::ZERO
        );
        assert_eq!(
            frame_wait(budget, start, start + budget),
            Duration::ZERO
        );
    }
}
