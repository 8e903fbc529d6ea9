use crate::CONFY_APP_NAME;

use serde::{Deserialize, Serialize};

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
            title: "3D view demo".to_string(),
            width: 800,
            height: 600,
        }
    }
}

impl WindowSettings {
    pub fn load() -> Self {
        load_or_default("window")
    }
}

/// Drag multipliers: degrees per pixel for orbit, world units per pixel for
/// pan and zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    pub orbit: f32,
    pub pan: f32,
    pub zoom: f32,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            orbit: 0.5,
            pan: 0.01,
            zoom: 0.1,
        }
    }
}

impl ControlSettings {
    pub fn load() -> Self {
        load_or_default("controls")
    }
}

fn load_or_default<T>(name: &str) -> T
where
    T: Default + Serialize + for<'de> Deserialize<'de>,
{
    match confy::load(CONFY_APP_NAME, name) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Using default {name} settings: {e}");
            T::default()
        }
    }
}

// Aggregate struct for convenience
pub struct Settings {
    pub window: WindowSettings,
    pub controls: ControlSettings,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            window: WindowSettings::load(),
            controls: ControlSettings::load(),
        }
    }
}
