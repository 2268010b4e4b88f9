use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::haptics::HapticsMode;
use crate::interaction::DEFAULT_THRESHOLD;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub interaction: InteractionConfig,
    #[serde(default)]
    pub transition: TransitionConfig,
    #[serde(default)]
    pub haptics: HapticsConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Offset distance that turns a pull into a release
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

/// Easing curve for animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end
    None,
    Linear,
    /// 1 - (1-t)³
    Cubic,
    /// 1 - (1-t)⁵
    Quintic,
    /// 1 - 2^(-10t)
    EaseOut,
    /// Damped oscillation that overshoots and settles
    #[default]
    Bouncy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Easing of the content swap
    #[serde(default)]
    pub easing: EasingType,
    /// Duration of the content swap in milliseconds
    #[serde(default = "default_transition_duration")]
    pub duration_ms: u64,
    /// Duration of the offset spring-back after a drag ends
    #[serde(default = "default_spring_back")]
    pub spring_back_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            easing: EasingType::default(),
            duration_ms: default_transition_duration(),
            spring_back_ms: default_spring_back(),
        }
    }
}

impl TransitionConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn spring_back_duration(&self) -> Duration {
        Duration::from_millis(self.spring_back_ms)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HapticsConfig {
    /// "auto", "bell" or "off"
    #[serde(default)]
    pub mode: HapticsMode,
}

/// One of the two swappable pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Text shown in the middle of the page
    pub title: String,
    /// Indicator label ("Pull to <label>")
    pub label: String,
    /// Background colour as hex ("#RRGGBB" or "#RGB")
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Shown first, pulled up to leave
    #[serde(default = "default_first_page")]
    pub first: PageConfig,
    /// Shown after the first swap, pulled down to leave
    #[serde(default = "default_second_page")]
    pub second: PageConfig,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            first: default_first_page(),
            second: default_second_page(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Offset units per terminal row
    #[serde(default = "default_units_per_row")]
    pub units_per_row: f64,
    /// Offset units per mouse wheel tick
    #[serde(default = "default_wheel_step")]
    pub wheel_step: f64,
    /// Idle time after the last wheel tick before the gesture settles
    #[serde(default = "default_settle")]
    pub settle_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            units_per_row: default_units_per_row(),
            wheel_step: default_wheel_step(),
            settle_ms: default_settle(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sticky-transition")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_transition_duration() -> u64 {
    700
}

fn default_spring_back() -> u64 {
    250
}

fn default_first_page() -> PageConfig {
    PageConfig {
        title: "View 1".to_string(),
        label: "Open".to_string(),
        color: "#c0392b".to_string(),
    }
}

fn default_second_page() -> PageConfig {
    PageConfig {
        title: "View 2".to_string(),
        label: "Back".to_string(),
        color: "#2e5aac".to_string(),
    }
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_units_per_row() -> f64 {
    10.0
}

fn default_wheel_step() -> f64 {
    20.0
}

fn default_settle() -> u64 {
    180
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default location or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults when absent
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let path = expand_tilde(path);
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        let path = expand_tilde(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Reject values the interaction cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        if !self.interaction.threshold.is_finite() || self.interaction.threshold <= 0.0 {
            return Err(crate::Error::Config(format!(
                "interaction.threshold must be a positive number, got {}",
                self.interaction.threshold
            )));
        }
        if !self.ui.units_per_row.is_finite() || self.ui.units_per_row <= 0.0 {
            return Err(crate::Error::Config(format!(
                "ui.units_per_row must be a positive number, got {}",
                self.ui.units_per_row
            )));
        }
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/sticky-transition/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("sticky-transition")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path used while the terminal UI owns the screen
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("sticky.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.interaction.threshold, 130.0);
        assert_eq!(config.transition.easing, EasingType::Bouncy);
        assert_eq!(config.transition.duration(), Duration::from_millis(700));
        assert_eq!(config.haptics.mode, HapticsMode::Auto);
        assert_eq!(config.content.first.label, "Open");
        assert_eq!(config.content.second.label, "Back");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r##"
            [interaction]
            threshold = 90.0

            [transition]
            easing = "cubic"

            [haptics]
            mode = "off"

            [content.first]
            title = "Inbox"
            label = "Archive"
            color = "#123"
            "##,
        )
        .unwrap();

        assert_eq!(config.interaction.threshold, 90.0);
        assert_eq!(config.transition.easing, EasingType::Cubic);
        assert_eq!(config.transition.duration_ms, 700);
        assert_eq!(config.haptics.mode, HapticsMode::Off);
        assert_eq!(config.content.first.title, "Inbox");
        assert_eq!(config.content.second.title, "View 2");
        assert_eq!(config.ui.wheel_step, 20.0);
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let mut config = AppConfig::default();
        config.interaction.threshold = 0.0;
        assert!(matches!(config.validate(), Err(crate::Error::Config(_))));

        config.interaction.threshold = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = std::env::temp_dir().join(format!("sticky-config-test-{}", std::process::id()));
        let path = dir.join("config.toml");

        let mut config = AppConfig::default();
        config.transition.duration_ms = 420;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.transition.duration_ms, 420);
        assert_eq!(loaded.content.first, config.content.first);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("sticky-definitely-missing").join("config.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.interaction.threshold, 130.0);
    }
}
