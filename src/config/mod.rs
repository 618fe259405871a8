//!
//! Demo configuration, loaded from JSON with every field defaulting to the built-in demo
//!

pub mod error;

use error::ConfigError;
use image::Rgb;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::{DEMO_POINTS, Polyline, Vertex};

/// The environment variable holding the optional configuration file path.
pub const CONFIG_ENV_VAR: &str = "POLYVIEW_CONFIG";

///
/// The size of the raster buffer, in pixels.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, getset::Getters)]
#[get = "pub"]
#[serde(default)]
pub struct CanvasConfig {
    width: u32,
    height: u32,
}

impl CanvasConfig {
    pub fn new(width: u32, height: u32) -> CanvasConfig {
        CanvasConfig { width, height }
    }
}

impl Default for CanvasConfig {
    fn default() -> CanvasConfig {
        CanvasConfig { width: 1024, height: 768 }
    }
}

///
/// Everything the demo run can be told to do differently. The defaults reproduce the plain demo:
/// a closed white quadrilateral on a 1024x768 black canvas, shown in a window titled "example".
///
/// # Fields:
/// - `window_title`: The title of the display window
/// - `canvas`: The raster buffer dimensions
/// - `stroke`: The RGB stroke colour of the polyline
/// - `closed`: Whether the polyline is joined back to its first vertex
/// - `points`: The polyline vertices, as `[x, y]` pairs
/// - `show_window`: Whether to open a window at all, headless runs set this to false
/// - `snapshot`: An optional path to save the drawn canvas to, as PNG
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, getset::Getters)]
#[get = "pub"]
#[serde(default)]
pub struct DemoConfig {
    window_title: String,
    canvas: CanvasConfig,
    stroke: [u8; 3],
    closed: bool,
    points: Vec<Vertex>,
    show_window: bool,
    snapshot: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> DemoConfig {
        DemoConfig {
            window_title: "example".to_owned(),
            canvas: CanvasConfig::default(),
            stroke: [255, 255, 255],
            closed: true,
            points: DEMO_POINTS.iter().copied().map(Vertex::from).collect(),
            show_window: true,
            snapshot: None,
        }
    }
}

impl DemoConfig {
    ///
    /// Loads a configuration from a JSON file. Fields missing from the file keep their defaults.
    ///
    /// # Parameters:
    /// - `path`: The path of the JSON file
    ///
    /// # Returns:
    /// - The loaded `DemoConfig`
    /// - A `ConfigError` if the file could not be read or parsed
    ///
    pub fn load(path: &str) -> Result<DemoConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|err| ConfigError::Unreadable { path: path.to_owned(), err })?;

        DemoConfig::parse(&contents)
            .map_err(|err| ConfigError::Malformed { path: path.to_owned(), err })
    }

    pub fn parse(json: &str) -> Result<DemoConfig, serde_json::Error> {
        serde_json::from_str(json)
    }

    ///
    /// Loads the configuration named by `POLYVIEW_CONFIG`, or the defaults if it is unset.
    ///
    pub fn from_env() -> Result<DemoConfig, ConfigError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.is_empty() => {
                debug!("Loading configuration from {}", path);
                DemoConfig::load(&path)
            }
            _ => {
                debug!("{} unset, using the built-in demo", CONFIG_ENV_VAR);
                Ok(DemoConfig::default())
            }
        }
    }

    pub fn polyline(&self) -> Polyline {
        Polyline::new(self.points.iter().copied(), self.closed)
    }

    pub fn stroke_colour(&self) -> Rgb<u8> {
        Rgb(self.stroke)
    }

    ///
    /// Disables the display window, for runs without a display.
    ///
    pub fn headless(mut self) -> DemoConfig {
        self.show_window = false;
        self
    }

    pub fn with_snapshot(mut self, path: &str) -> DemoConfig {
        self.snapshot = Some(path.to_owned());
        self
    }
}
