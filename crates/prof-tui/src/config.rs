//! Display settings for the terminal UI.

use std::time::Duration;

/// Terminal UI settings.
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Delay between revealed narrative characters.
    pub char_delay: Duration,
    /// How long the event loop waits for input before redrawing.
    pub tick_rate: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            char_delay: Duration::from_millis(15),
            tick_rate: Duration::from_millis(15),
        }
    }
}

impl UiConfig {
    /// Set the typewriter delay in milliseconds. Zero disables the effect.
    pub fn with_char_delay_ms(mut self, ms: u64) -> Self {
        self.char_delay = Duration::from_millis(ms);
        self
    }

    /// Set the redraw tick in milliseconds (at least 1).
    pub fn with_tick_rate_ms(mut self, ms: u64) -> Self {
        self.tick_rate = Duration::from_millis(ms.max(1));
        self
    }
}
