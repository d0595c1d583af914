use std::time::Duration;

/// Tunables for the monitor loop and the log-browser card grid.
///
/// The grid metrics mirror the rendered layout: cards have a fixed minimum
/// width and a fixed gap, and the column count is derived from whatever
/// container width the frontend reports.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Milliseconds between poll ticks.
    pub poll_interval_ms: u64,
    /// Minimum rendered width of one execution card, in pixels.
    pub min_card_width: u32,
    /// Gap between cards, in pixels.
    pub card_gap: u32,
    /// How long the closing animation of an expanded detail card runs
    /// before the card is removed. Purely cosmetic.
    pub close_animation_ms: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
            min_card_width: 280,
            card_gap: 16,
            close_animation_ms: 300,
        }
    }
}

impl MonitorConfig {
    pub fn with_poll_interval_ms(mut self, ms: u64) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn close_animation(&self) -> Duration {
        Duration::from_millis(self.close_animation_ms)
    }
}
