// config.rs - Runtime settings, loaded from JSON and overridden by CLI flags
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::camera::{BASE_EYE_Z, BASE_FOV};
use crate::cli::Cli;
use crate::nav::InputSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dark_mode: bool,
    /// Slower wave and camera easing
    pub smooth_transition: bool,
    pub show_stats: bool,
    pub window: WindowSettings,
    pub animation: AnimationSettings,
    pub navigation: NavigationSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            smooth_transition: true,
            show_stats: false,
            window: WindowSettings::default(),
            animation: AnimationSettings::default(),
            navigation: NavigationSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "wavefolio".to_string(),
            width: 1280,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub cols: usize,
    pub rows: usize,
    pub spacing: f32,
    pub base_fov: f32,
    pub base_eye_z: f32,
    pub wave_speed: f32,
    pub smooth_wave_speed: f32,
    pub transition_speed: f32,
    pub smooth_transition_speed: f32,
    /// Canvas opacity over the theme background
    pub opacity: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            cols: 200,
            rows: 60,
            spacing: 50.0,
            base_fov: BASE_FOV,
            base_eye_z: BASE_EYE_Z,
            wave_speed: 0.01,
            smooth_wave_speed: 0.007,
            transition_speed: 0.03,
            smooth_transition_speed: 0.02,
            opacity: 0.9,
        }
    }
}

impl AnimationSettings {
    /// Time advance per frame before the section time scale
    pub fn wave_speed(&self, smooth: bool) -> f32 {
        if smooth {
            self.smooth_wave_speed
        } else {
            self.wave_speed
        }
    }

    /// Camera easing fraction per frame
    pub fn transition_speed(&self, smooth: bool) -> f32 {
        if smooth {
            self.smooth_transition_speed
        } else {
            self.transition_speed
        }
    }
}

/// Navigator thresholds and delays; all durations in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    pub wheel_cooldown: f32,
    pub touch_cooldown: f32,
    pub key_cooldown: f32,
    pub pointer_cooldown: f32,
    /// Transition start to index commit
    pub commit_delay: f32,
    /// Commit to transition end
    pub finish_delay: f32,
    /// Transition end to animations complete
    pub settle_delay: f32,
    /// Wheel deltas are clamped to this magnitude
    pub wheel_clamp: f32,
    /// Minimum swipe distance in pixels
    pub touch_threshold: f32,
    /// Pixels per wheel line step
    pub line_height: f32,
    pub scroll_delay: f32,
    pub last_scroll_delay: f32,
    pub last_scroll_duration: f32,
    pub loading_duration: f32,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            wheel_cooldown: 1.2,
            touch_cooldown: 1.2,
            key_cooldown: 1.0,
            pointer_cooldown: 1.0,
            commit_delay: 0.2,
            finish_delay: 0.5,
            settle_delay: 0.8,
            wheel_clamp: 100.0,
            touch_threshold: 50.0,
            line_height: 40.0,
            scroll_delay: 0.05,
            last_scroll_delay: 0.1,
            last_scroll_duration: 0.7,
            loading_duration: 1.0,
        }
    }
}

impl NavigationSettings {
    pub fn cooldown_for(&self, source: InputSource) -> f32 {
        match source {
            InputSource::Wheel => self.wheel_cooldown,
            InputSource::Touch => self.touch_cooldown,
            InputSource::Keyboard => self.key_cooldown,
            InputSource::Pointer => self.pointer_cooldown,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse settings in {}", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// File settings (or defaults) with command-line flags applied on top
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if cli.dark {
            settings.dark_mode = true;
        }
        if cli.snappy {
            settings.smooth_transition = false;
        }
        if cli.stats {
            settings.show_stats = true;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        let anim = &self.animation;
        ensure!(self.window.width > 0 && self.window.height > 0, "window size must be non-zero");
        ensure!(anim.cols >= 2 && anim.rows >= 2, "grid needs at least 2x2 vertices");
        ensure!(anim.spacing > 0.0, "grid spacing must be positive");
        ensure!(anim.base_fov > 0.0, "base_fov must be positive");
        for (name, rate) in [
            ("transition_speed", anim.transition_speed),
            ("smooth_transition_speed", anim.smooth_transition_speed),
        ] {
            ensure!(rate > 0.0 && rate <= 1.0, "{name} must be in (0, 1], got {rate}");
        }
        ensure!(
            anim.wave_speed >= 0.0 && anim.smooth_wave_speed >= 0.0,
            "wave speeds must not be negative"
        );
        ensure!((0.0..=1.0).contains(&anim.opacity), "opacity must be in [0, 1]");

        let nav = &self.navigation;
        for (name, value) in [
            ("wheel_cooldown", nav.wheel_cooldown),
            ("touch_cooldown", nav.touch_cooldown),
            ("key_cooldown", nav.key_cooldown),
            ("pointer_cooldown", nav.pointer_cooldown),
            ("commit_delay", nav.commit_delay),
            ("finish_delay", nav.finish_delay),
            ("settle_delay", nav.settle_delay),
            ("scroll_delay", nav.scroll_delay),
            ("last_scroll_delay", nav.last_scroll_delay),
            ("last_scroll_duration", nav.last_scroll_duration),
            ("loading_duration", nav.loading_duration),
        ] {
            ensure!(value.is_finite() && value >= 0.0, "{name} must be a non-negative duration");
        }
        ensure!(nav.wheel_clamp > 0.0, "wheel_clamp must be positive");
        ensure!(nav.touch_threshold > 0.0, "touch_threshold must be positive");
        ensure!(nav.line_height > 0.0, "line_height must be positive");
        Ok(())
    }
}
