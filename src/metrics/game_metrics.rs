use std::time::{Duration, Instant};

/// Wall-clock statistics for the running game, shown in the header
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    /// Set once the game has ended; the clock stops there
    pub final_score: Option<usize>,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            final_score: None,
        }
    }

    /// Refresh the clock; frozen after game over
    pub fn update(&mut self) {
        if self.final_score.is_none() {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_over(&mut self, final_score: usize) {
        if self.final_score.is_none() {
            self.elapsed_time = self.start_time.elapsed();
            self.final_score = Some(final_score);
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_update_tracks_elapsed_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert!(metrics.elapsed_time >= Duration::from_millis(20));
    }

    #[test]
    fn test_clock_freezes_after_game_over() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_over(4);
        let frozen = metrics.elapsed_time;

        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        metrics.on_game_over(9);

        assert_eq!(metrics.elapsed_time, frozen);
        assert_eq!(metrics.final_score, Some(4));
    }
}
