//! # Hero Configuration
//!
//! Every duration, delay and size the choreography uses, loaded once at
//! startup. Defaults reproduce the shipped sequence; hosts may override
//! individual values from a TOML file.

use serde::{Deserialize, Serialize};

use crate::error::HeroError;

/// Viewport dimensions the stage is laid out against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

/// Loading counter settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Wall-clock duration of the 1 → target count, in seconds.
    pub duration: f32,
    /// Final displayed value.
    pub target: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration: 3.0,
            target: 100,
        }
    }
}

/// Orbiting loader dot settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Seconds per full revolution.
    pub period: f32,
    /// Orbit radius around the loader center, in pixels.
    pub radius: f32,
    /// Dot diameter in pixels.
    pub dot_size: f32,
    /// Loader circle diameter in pixels.
    pub loader_size: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            period: 3.0,
            radius: 100.0,
            dot_size: 15.0,
            loader_size: 150.0,
        }
    }
}

/// Primary timeline step durations, in seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Delay before the loader fade begins.
    pub start_delay: f32,
    /// Loader fade-out duration.
    pub loader_fade: f32,
    /// Point-to-triangle reveal duration.
    pub triangle: f32,
    /// Dramatic beat between triangle and morph.
    pub hold: f32,
    /// Triangle-to-fullscreen morph duration.
    pub square_morph: f32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            start_delay: 2.0,
            loader_fade: 2.0,
            triangle: 0.5,
            hold: 0.6,
            square_morph: 0.6,
        }
    }
}

/// Text and panel reveal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Per-glyph animation duration, in seconds.
    pub glyph_duration: f32,
    /// Incremental delay between consecutive glyphs, in seconds.
    pub stagger: f32,
    /// Menu and logo slide-in duration, in seconds.
    pub panel_duration: f32,
    /// Video panel slide-in duration, in seconds.
    pub video_duration: f32,
    /// Headline words, revealed one glyph at a time.
    pub words: Vec<String>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            glyph_duration: 0.6,
            stagger: 0.05,
            panel_duration: 0.3,
            video_duration: 1.0,
            words: vec!["Meet".to_owned(), "Pebble".to_owned()],
        }
    }
}

/// Menu hover toggle settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Container widen duration, in seconds.
    pub expand: f32,
    /// Nav list fade/slide duration, in seconds.
    pub nav_reveal: f32,
    /// Delay before the container shrinks on pointer leave, in seconds.
    pub collapse_delay: f32,
    /// Container shrink duration, in seconds.
    pub collapse: f32,
    /// Hamburger line restore duration, in seconds.
    pub line_restore: f32,
    /// Collapsed container width in pixels.
    pub collapsed_width: f32,
    /// Expanded container width in pixels.
    pub expanded_width: f32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            expand: 0.4,
            nav_reveal: 0.3,
            collapse_delay: 0.2,
            collapse: 0.4,
            line_restore: 0.2,
            collapsed_width: 64.0,
            expanded_width: 320.0,
        }
    }
}

/// Video preview toggle settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    /// Expand animation duration, in seconds.
    pub expand: f32,
    /// Collapse animation duration, in seconds.
    pub collapse: f32,
    /// Close control reveal/hide duration, in seconds.
    pub close_fade: f32,
    /// Collapsed panel width in pixels (20rem).
    pub collapsed_width: f32,
    /// Collapsed panel height in pixels (15rem).
    pub collapsed_height: f32,
    /// Margin from the bottom-right viewport corner, in pixels.
    pub margin: f32,
    /// Expanded size as a fraction of the viewport.
    pub expanded_fraction: f32,
    /// Stacking order while expanded.
    pub raised_z: i32,
    /// Stacking order at rest.
    pub resting_z: i32,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            expand: 0.6,
            collapse: 0.6,
            close_fade: 0.2,
            collapsed_width: 320.0,
            collapsed_height: 240.0,
            margin: 40.0,
            expanded_fraction: 0.95,
            raised_z: 100,
            resting_z: 1,
        }
    }
}

/// Complete hero configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Viewport dimensions.
    pub viewport: ViewportConfig,
    /// Loading counter.
    pub counter: CounterConfig,
    /// Orbiting loader dots.
    pub orbit: OrbitConfig,
    /// Primary timeline steps.
    pub timeline: TimelineConfig,
    /// Text and panel reveals.
    pub reveal: RevealConfig,
    /// Menu hover toggle.
    pub menu: MenuConfig,
    /// Video preview toggle.
    pub video: VideoConfig,
}

impl HeroConfig {
    /// Parses a configuration from a TOML string and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`HeroError::ConfigParse`] on malformed TOML and
    /// [`HeroError::InvalidConfig`] when values fail validation.
    pub fn from_toml_str(source: &str) -> Result<Self, HeroError> {
        let config: Self =
            toml::from_str(source).map_err(|err| HeroError::ConfigParse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HeroError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> Result<(), HeroError> {
        let positive = [
            ("viewport.width", self.viewport.width),
            ("viewport.height", self.viewport.height),
            ("counter.duration", self.counter.duration),
            ("orbit.period", self.orbit.period),
            ("orbit.radius", self.orbit.radius),
            ("timeline.loader_fade", self.timeline.loader_fade),
            ("timeline.triangle", self.timeline.triangle),
            ("timeline.square_morph", self.timeline.square_morph),
            ("reveal.glyph_duration", self.reveal.glyph_duration),
            ("menu.expand", self.menu.expand),
            ("menu.collapse", self.menu.collapse),
            ("video.expand", self.video.expand),
            ("video.collapse", self.video.collapse),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(HeroError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("timeline.start_delay", self.timeline.start_delay),
            ("timeline.hold", self.timeline.hold),
            ("reveal.stagger", self.reveal.stagger),
            ("menu.collapse_delay", self.menu.collapse_delay),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(HeroError::InvalidConfig(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }

        if self.counter.target < 1 {
            return Err(HeroError::InvalidConfig(
                "counter.target must be at least 1".to_owned(),
            ));
        }
        if self.reveal.words.is_empty() {
            return Err(HeroError::InvalidConfig(
                "reveal.words must contain at least one word".to_owned(),
            ));
        }
        if self.reveal.words.iter().any(String::is_empty) {
            return Err(HeroError::InvalidConfig(
                "reveal.words must not contain empty words".to_owned(),
            ));
        }
        if !(0.0..=1.0).contains(&self.video.expanded_fraction) {
            return Err(HeroError::InvalidConfig(format!(
                "video.expanded_fraction must be in 0..=1, got {}",
                self.video.expanded_fraction
            )));
        }
        if self.menu.expanded_width <= self.menu.collapsed_width {
            return Err(HeroError::InvalidConfig(
                "menu.expanded_width must exceed menu.collapsed_width".to_owned(),
            ));
        }

        Ok(())
    }

    /// Total number of headline glyphs across all words.
    #[must_use]
    pub fn glyph_count(&self) -> usize {
        self.reveal.words.iter().map(|w| w.chars().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(HeroConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_matches_shipped_sequence() {
        let config = HeroConfig::default();
        assert!((config.counter.duration - 3.0).abs() < f32::EPSILON);
        assert_eq!(config.counter.target, 100);
        assert!((config.timeline.start_delay - 2.0).abs() < f32::EPSILON);
        assert!((config.timeline.square_morph - 0.6).abs() < f32::EPSILON);
        assert_eq!(config.reveal.words, vec!["Meet", "Pebble"]);
        assert_eq!(config.glyph_count(), 10);
    }

    #[test]
    fn test_partial_toml_overrides_defaults() {
        let config = HeroConfig::from_toml_str(
            r#"
            [counter]
            duration = 1.5

            [reveal]
            words = ["Hello"]
            "#,
        )
        .unwrap();

        assert!((config.counter.duration - 1.5).abs() < f32::EPSILON);
        assert_eq!(config.reveal.words, vec!["Hello"]);
        // Untouched sections keep defaults
        assert!((config.timeline.hold - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = HeroConfig::from_toml_str("counter = [").unwrap_err();
        assert!(matches!(err, HeroError::ConfigParse(_)));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let err = HeroConfig::from_toml_str(
            r#"
            [timeline]
            loader_fade = -1.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, HeroError::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_words_rejected() {
        let err = HeroConfig::from_toml_str(
            r#"
            [reveal]
            words = []
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, HeroError::InvalidConfig(_)));
    }
}
