//! # Reveals
//!
//! The fan-out that follows the square morph: the headline split into
//! individual glyphs rising into view with a per-glyph stagger, and the
//! panels (menu, logo, video preview) fading and sliding into place.
//! All reveals start together and run independently; there is no
//! ordering guarantee between them.

use pebble_motion::Easing;

use crate::config::RevealConfig;
use crate::stage::{Stage, TargetId};

/// Per-glyph staggered headline reveal.
///
/// The configured words are split into characters at construction, one
/// stage target per glyph. Glyph `i` starts `i * stagger` seconds after
/// [`TextReveal::start`]; each glyph animates from 100% below its
/// baseline at opacity 0 into place over the glyph duration.
pub struct TextReveal {
    /// Flat glyph list: (stage target, character, start delay).
    glyphs: Vec<(TargetId, char, f32)>,
    /// Per-glyph animation duration.
    duration: f32,
    /// Seconds since `start`, or `None` while not started.
    elapsed: Option<f32>,
}

impl TextReveal {
    /// Builds the glyph list from the configured words.
    #[must_use]
    pub fn new(config: &RevealConfig) -> Self {
        let mut glyphs = Vec::new();
        let mut index: u8 = 0;
        'words: for word in &config.words {
            for character in word.chars() {
                let delay = f32::from(index) * config.stagger;
                glyphs.push((TargetId::Glyph(index), character, delay));
                if index == u8::MAX {
                    break 'words;
                }
                index += 1;
            }
        }
        Self {
            glyphs,
            duration: config.glyph_duration,
            elapsed: None,
        }
    }

    /// Number of glyphs across all words.
    #[must_use]
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// The characters in reveal order.
    #[must_use]
    pub fn characters(&self) -> String {
        self.glyphs.iter().map(|(_, c, _)| *c).collect()
    }

    /// Start delay of the glyph at `index`, if it exists.
    #[must_use]
    pub fn delay_of(&self, index: usize) -> Option<f32> {
        self.glyphs.get(index).map(|(_, _, delay)| *delay)
    }

    /// Begins the reveal. Subsequent calls are ignored.
    pub fn start(&mut self) {
        if self.elapsed.is_none() {
            self.elapsed = Some(0.0);
        }
    }

    /// Returns true once `start` has been called.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Returns true when every glyph has settled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        match (self.elapsed, self.glyphs.last()) {
            (Some(elapsed), Some((_, _, last_delay))) => elapsed >= last_delay + self.duration,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    /// Advances the reveal and writes glyph states to the stage.
    pub fn update(&mut self, dt: f32, stage: &mut Stage) {
        if self.is_finished() {
            return;
        }
        let Some(elapsed) = self.elapsed.as_mut() else {
            return;
        };
        *elapsed += dt;
        let elapsed = *elapsed;

        for (id, _, delay) in &self.glyphs {
            let local = elapsed - delay;
            if local < 0.0 {
                continue;
            }
            let progress = (local / self.duration).min(1.0);
            let eased = Easing::CubicOut.apply(progress);
            if let Some(visual) = stage.get_mut(*id) {
                visual.visible = true;
                visual.opacity = eased;
                visual.y_offset = 100.0 * (1.0 - eased);
            }
        }
    }
}

/// A single panel fading and sliding into place.
pub struct PanelReveal {
    /// Target the reveal drives.
    target: TargetId,
    /// Slide duration.
    duration: f32,
    /// Seconds since `start`, or `None` while not started.
    elapsed: Option<f32>,
}

impl PanelReveal {
    /// Creates a reveal for the given target.
    #[must_use]
    pub fn new(target: TargetId, duration: f32) -> Self {
        Self {
            target,
            duration,
            elapsed: None,
        }
    }

    /// The target this reveal drives.
    #[must_use]
    pub fn target(&self) -> TargetId {
        self.target
    }

    /// Begins the reveal. Subsequent calls are ignored.
    pub fn start(&mut self) {
        if self.elapsed.is_none() {
            self.elapsed = Some(0.0);
        }
    }

    /// Returns true once the panel has settled in place.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed.is_some_and(|e| e >= self.duration)
    }

    /// Advances the reveal and writes the panel state to the stage.
    pub fn update(&mut self, dt: f32, stage: &mut Stage) {
        if self.is_finished() {
            return;
        }
        let Some(elapsed) = self.elapsed.as_mut() else {
            return;
        };
        *elapsed += dt;
        let progress = (*elapsed / self.duration).min(1.0);
        let eased = Easing::CubicOut.apply(progress);

        if let Some(visual) = stage.get_mut(self.target) {
            visual.visible = true;
            visual.opacity = eased;
            visual.y_offset = 100.0 * (1.0 - eased);
        }
    }
}
