use relight_core::Color;
use serde::{Deserialize, Serialize};
use web_time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("highlight decay window must be longer than zero")]
    EmptyDecayWindow,
    #[error("max highlight intensity must be in (0, 1], got {0}")]
    MaxIntensityOutOfRange(f32),
    #[error("stroke width must not be negative, got {0}")]
    NegativeStrokeWidth(f32),
    #[error("stroke width range is inverted: min {min} > max {max}")]
    InvertedStrokeWidth { min: f32, max: f32 },
    #[error("failed to parse devtools config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything the instruments need to know up front.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevtoolsConfig {
    pub counter: CounterConfig,
    pub highlighter: HighlighterConfig,
    pub hud: HudConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub enabled: bool,
    pub badge_color: Color,
    pub font_size: f32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            badge_color: Color::from_hex("#AAAAAA"),
            font_size: 12.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlighterConfig {
    pub enabled: bool,
    /// Time for a highlight to fade from full to transparent.
    pub decay_window_ms: u64,
    pub max_intensity: f32,
    pub min_width: f32,
    pub max_width: f32,
    /// Border color for the first rebuild of a burst.
    pub first_color: Color,
    /// Border color for the second rebuild of a burst.
    pub second_color: Color,
    /// Hot nodes interpolate from `hot_start_color` to `hot_end_color`.
    pub hot_start_color: Color,
    pub hot_end_color: Color,
    /// Burst length at which the hot color and stroke width saturate.
    pub saturation_burst: u32,
}

impl Default for HighlighterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            decay_window_ms: 3000,
            max_intensity: 1.0,
            min_width: 0.5,
            max_width: 10.0,
            first_color: Color::BLUE,
            second_color: Color::GREEN,
            hot_start_color: Color::YELLOW.with_alpha(204),
            hot_end_color: Color::RED.with_alpha(128),
            saturation_burst: 100,
        }
    }
}

impl HighlighterConfig {
    pub fn decay_window(&self) -> Duration {
        Duration::from_millis(self.decay_window_ms)
    }

    pub fn with_decay_window(mut self, window: Duration) -> Self {
        self.decay_window_ms = window.as_millis() as u64;
        self
    }

    pub fn with_max_intensity(mut self, max: f32) -> Self {
        self.max_intensity = max;
        self
    }

    pub fn with_stroke_widths(mut self, min: f32, max: f32) -> Self {
        self.min_width = min;
        self.max_width = max;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decay_window_ms == 0 {
            return Err(ConfigError::EmptyDecayWindow);
        }
        if !(self.max_intensity > 0.0 && self.max_intensity <= 1.0) {
            return Err(ConfigError::MaxIntensityOutOfRange(self.max_intensity));
        }
        if self.min_width < 0.0 {
            return Err(ConfigError::NegativeStrokeWidth(self.min_width));
        }
        if self.min_width > self.max_width {
            return Err(ConfigError::InvertedStrokeWidth {
                min: self.min_width,
                max: self.max_width,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub enabled: bool,
    /// How many of the most rebuilt nodes the HUD lists.
    pub top_nodes: usize,
    pub text_color: Color,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            top_nodes: 3,
            text_color: Color::from_hex("#AAAAAA"),
        }
    }
}

impl DevtoolsConfig {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: DevtoolsConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_highlighter(mut self, highlighter: HighlighterConfig) -> Self {
        self.highlighter = highlighter;
        self
    }

    pub fn with_counter_enabled(mut self, enabled: bool) -> Self {
        self.counter.enabled = enabled;
        self
    }

    pub fn with_highlighter_enabled(mut self, enabled: bool) -> Self {
        self.highlighter.enabled = enabled;
        self
    }

    pub fn with_hud(mut self, enabled: bool) -> Self {
        self.hud.enabled = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.highlighter.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = DevtoolsConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.highlighter.decay_window(), Duration::from_secs(3));
        assert!(c.counter.enabled);
        assert!(!c.hud.enabled);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = DevtoolsConfig::from_json(r#"{ "highlighter": { "decay_window_ms": 500 } }"#)
            .unwrap();
        assert_eq!(c.highlighter.decay_window(), Duration::from_millis(500));
        assert_eq!(c.highlighter.max_intensity, 1.0);
        assert_eq!(c.counter, CounterConfig::default());
    }

    #[test]
    fn colors_deserialize_as_channel_arrays() {
        let c = DevtoolsConfig::from_json(r#"{ "hud": { "text_color": [1, 2, 3, 4] } }"#).unwrap();
        assert_eq!(c.hud.text_color, Color(1, 2, 3, 4));
    }

    #[test]
    fn rejects_bad_values() {
        let zero = HighlighterConfig::default().with_decay_window(Duration::ZERO);
        assert!(matches!(zero.validate(), Err(ConfigError::EmptyDecayWindow)));

        let dim = HighlighterConfig::default().with_max_intensity(0.0);
        assert!(matches!(
            dim.validate(),
            Err(ConfigError::MaxIntensityOutOfRange(_))
        ));

        let bright = HighlighterConfig::default().with_max_intensity(1.5);
        assert!(matches!(
            bright.validate(),
            Err(ConfigError::MaxIntensityOutOfRange(_))
        ));

        let negative = HighlighterConfig::default().with_stroke_widths(-1.0, 2.0);
        assert!(matches!(
            negative.validate(),
            Err(ConfigError::NegativeStrokeWidth(_))
        ));

        let inverted = HighlighterConfig::default().with_stroke_widths(4.0, 2.0);
        assert!(matches!(
            inverted.validate(),
            Err(ConfigError::InvertedStrokeWidth { .. })
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            DevtoolsConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            DevtoolsConfig::from_json(r#"{ "highlighter": { "decay_window_ms": 0 } }"#),
            Err(ConfigError::EmptyDecayWindow)
        ));
    }
}
