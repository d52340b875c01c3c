//! Configuration loading for plotting.
//!
//! All plot settings can be loaded from a TOML configuration file; every
//! field has a default so partial files are fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use plotters::style::RGBColor;
use traj_data::{DEFAULT_ENTITY_PATTERN, DEFAULT_TIME_COLUMN};

/// Complete plot configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Input file and column naming
    #[serde(default)]
    pub data: DataConfig,
    /// Playback and output files
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Image size and camera angle
    #[serde(default)]
    pub canvas: CanvasConfig,
    /// Colors, markers and text
    #[serde(default)]
    pub style: StyleConfig,
}

impl PlotConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Delay between frames of a saved animation, in milliseconds.
    pub fn frame_delay_ms(&self) -> u32 {
        1000 / self.animation.save_fps.max(1)
    }
}

/// Input file and column naming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Results CSV to read
    pub input: PathBuf,
    /// Substring identifying entity columns
    pub entity_pattern: String,
    /// Name of the time column
    pub time_column: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("../my_scenario_results.csv"),
            entity_pattern: DEFAULT_ENTITY_PATTERN.to_string(),
            time_column: DEFAULT_TIME_COLUMN.to_string(),
        }
    }
}

/// Playback and output files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Frame rate of a saved animation
    pub save_fps: u32,
    /// Saved animation path
    pub output: PathBuf,
    /// Still preview path, written when the animation is not saved
    pub preview_output: PathBuf,
    /// Log progress every this many frames
    pub progress_every: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            save_fps: 30,
            output: PathBuf::from("trajectory_animation.gif"),
            preview_output: PathBuf::from("trajectory_preview.png"),
            progress_every: 100,
        }
    }
}

/// Image size and camera angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Rotation around the vertical axis, radians
    pub yaw: f64,
    /// Elevation of the camera, radians
    pub pitch: f64,
    /// Zoom of the projected cube
    pub scale: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            yaw: 0.5,
            pitch: 0.3,
            scale: 0.8,
        }
    }
}

/// Colors, markers and text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Entity marker and trail color (RGB)
    pub color: [u8; 3],
    /// Initial state marker color (RGB)
    pub initial_color: [u8; 3],
    /// Marker radius in pixels
    pub marker_size: u32,
    /// Draw axes, grid and axis labels
    pub show_axes: bool,
    /// Show the simulation time of each frame
    pub show_time: bool,
    /// Fixed chart caption
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl StyleConfig {
    pub fn entity_color(&self) -> RGBColor {
        let [r, g, b] = self.color;
        RGBColor(r, g, b)
    }

    pub fn initial_marker_color(&self) -> RGBColor {
        let [r, g, b] = self.initial_color;
        RGBColor(r, g, b)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color: [0, 0, 255],
            initial_color: [0, 0, 0],
            marker_size: 5,
            show_axes: true,
            show_time: true,
            caption: None,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing TOML config
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// Error serializing TOML config
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Trajectory plot configuration

[data]
input = "../my_scenario_results.csv"
entity_pattern = "Entity"
time_column = "Time"

[animation]
save_fps = 30
output = "trajectory_animation.gif"
preview_output = "trajectory_preview.png"
progress_every = 100

[canvas]
width = 640
height = 480
yaw = 0.5
pitch = 0.3
scale = 0.8

[style]
color = [0, 0, 255]
initial_color = [0, 0, 0]
marker_size = 5
show_axes = true
show_time = true
"#
    .to_string()
}
