//! Simulator settings file
//!
//! ```toml
//! [window]
//! width = 320
//! height = 240
//! scale = 2
//!
//! [chart.labelling]
//! mode = "fixed_step"
//! step = 2.0
//!
//! [chart.metrics]
//! y_label_max_width = 48
//! ```

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use linechart::ChartConfig;

/// Default simulated display width in pixels
const DEFAULT_WIDTH_PX: u32 = 320;

/// Default simulated display height in pixels
const DEFAULT_HEIGHT_PX: u32 = 240;

/// Default pixel scale factor for the simulator window
const DEFAULT_WINDOW_SCALE: u32 = 2;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH_PX,
            height: DEFAULT_HEIGHT_PX,
            scale: DEFAULT_WINDOW_SCALE,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct SimulatorConfig {
    pub window: WindowConfig,
    pub chart: ChartConfig,
}

pub fn parse_config(text: &str) -> Result<SimulatorConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Load settings from `path`, falling back to defaults when absent or invalid.
pub fn load_config(path: Option<&Path>) -> SimulatorConfig {
    let Some(path) = path else {
        return SimulatorConfig::default();
    };

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("Cannot read {}: {}, using defaults", path.display(), e);
            return SimulatorConfig::default();
        }
    };

    match parse_config(&text) {
        Ok(config) => {
            info!("Loaded settings from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Invalid settings in {}: {}, using defaults", path.display(), e);
            SimulatorConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linechart::ui::TextSize;
    use linechart::ui::components::line_chart::LabellingMode;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            [window]
            scale = 3

            [chart.labelling]
            mode = "fixed_step"
            step = 2.5

            [chart.metrics]
            y_label_max_width = 48
            x_label_size = "small"
            "#,
        )
        .unwrap();

        assert_eq!(config.window.scale, 3);
        assert_eq!(config.window.width, DEFAULT_WIDTH_PX);
        assert_eq!(
            config.chart.labelling,
            LabellingMode::FixedStep { step: 2.5 }
        );
        assert_eq!(config.chart.metrics.y_label_max_width, 48);
        assert_eq!(config.chart.metrics.y_label_right_margin, 8);
        assert_eq!(config.chart.metrics.x_label_size, TextSize::Small);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_config("").unwrap(), SimulatorConfig::default());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(parse_config("[chart.labelling]\nmode = \"log\"\n").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = load_config(Some(Path::new("/nonexistent/linechart.toml")));
        assert_eq!(config, SimulatorConfig::default());
    }
}
