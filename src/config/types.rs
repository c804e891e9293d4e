use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub presenter: PresenterConfig,
}

/// Settings for the terminal presenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenterConfig {
    /// How long the input thread waits for a key before polling again (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Steps moved by Shift+arrow (default: 5).
    #[serde(default = "default_big_step")]
    pub big_step: usize,
    /// Draw the header and footer around the deck (default: true).
    #[serde(default = "default_show_chrome")]
    pub show_chrome: bool,
    /// Refuse to advance past the last step of the deck (default: false).
    #[serde(default)]
    pub clamp_to_end: bool,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_big_step() -> usize {
    5
}

fn default_show_chrome() -> bool {
    true
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            big_step: default_big_step(),
            show_chrome: default_show_chrome(),
            clamp_to_end: false,
        }
    }
}
