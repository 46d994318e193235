use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_BAND_PADDING, Orientation, View};
use crate::error::{TimelineError, TimelineResult};
use crate::store::{DEFAULT_REPLAY_BUFFER_SIZE, StoreConfig};

/// Setup of one timeline widget.
///
/// Serializable so hosts can persist and reload their timeline setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default)]
    pub view: View,
    #[serde(default)]
    pub time_orientation: Orientation,
    #[serde(default = "default_band_padding")]
    pub band_padding: f64,
    #[serde(default = "default_replay_buffer_size")]
    pub replay_buffer_size: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            view: View::default(),
            time_orientation: Orientation::Horizontal,
            band_padding: DEFAULT_BAND_PADDING,
            replay_buffer_size: DEFAULT_REPLAY_BUFFER_SIZE,
        }
    }
}

impl TimelineConfig {
    #[must_use]
    pub fn new(view: View) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_time_orientation(mut self, orientation: Orientation) -> Self {
        self.time_orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_band_padding(mut self, padding: f64) -> Self {
        self.band_padding = padding;
        self
    }

    #[must_use]
    pub fn with_replay_buffer_size(mut self, size: usize) -> Self {
        self.replay_buffer_size = size;
        self
    }

    #[must_use]
    pub fn store_config(self) -> StoreConfig {
        StoreConfig {
            replay_buffer_size: self.replay_buffer_size,
            band_padding: self.band_padding,
        }
    }

    pub fn validate(self) -> TimelineResult<Self> {
        self.view.validate()?;
        self.store_config().validate()?;
        Ok(self)
    }

    pub fn to_json_pretty(self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| TimelineError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}

fn default_band_padding() -> f64 {
    DEFAULT_BAND_PADDING
}

fn default_replay_buffer_size() -> usize {
    DEFAULT_REPLAY_BUFFER_SIZE
}
