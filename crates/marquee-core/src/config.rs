use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub rotator: RotatorConfig,
    #[serde(default)]
    pub observers: ObserverConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Slack (in pixels/cells) absorbed when detecting the ends of the track
    /// and when fitting cards into the viewport
    #[serde(default = "default_wrap_tolerance")]
    pub wrap_tolerance_px: f64,
    /// Single-card step used when the track has no cards to measure
    #[serde(default = "default_fallback_step")]
    pub fallback_step_px: f64,
    /// Gap between adjacent cards (terminal cells)
    #[serde(default = "default_card_gap")]
    pub gap: u16,
    /// Left padding of the track (terminal cells)
    #[serde(default = "default_track_padding")]
    pub padding: u16,
    /// Animate page changes instead of jumping
    #[serde(default = "default_true")]
    pub smooth: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            wrap_tolerance_px: default_wrap_tolerance(),
            fallback_step_px: default_fallback_step(),
            gap: default_card_gap(),
            padding: default_track_padding(),
            smooth: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotatorConfig {
    /// Delay between automatic slide advances in milliseconds
    #[serde(default = "default_auto_delay")]
    pub auto_delay_ms: u64,
    /// Advance slides automatically while nobody is interacting
    #[serde(default = "default_true")]
    pub autoplay: bool,
}

impl RotatorConfig {
    /// Auto-advance delay as a Duration
    pub fn auto_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.auto_delay_ms)
    }
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self {
            auto_delay_ms: default_auto_delay(),
            autoplay: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObserverConfig {
    /// Extra distance past the navbar height before scrolling down hides it
    #[serde(default = "default_navbar_hide_margin")]
    pub navbar_hide_margin: f64,
    /// Horizontal parallax strength
    #[serde(default = "default_parallax_strength_x")]
    pub parallax_strength_x: f64,
    /// Vertical parallax strength
    #[serde(default)]
    pub parallax_strength_y: f64,
    /// "horizontal", "vertical" or "both"
    #[serde(default = "default_parallax_mode")]
    pub parallax_mode: String,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            navbar_hide_margin: default_navbar_hide_margin(),
            parallax_strength_x: default_parallax_strength_x(),
            parallax_strength_y: 0.0,
            parallax_mode: default_parallax_mode(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Smooth scrolling of the card track
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Theme color overrides
    #[serde(default)]
    pub theme: ThemeColorOverrides,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            scroll: ScrollConfig::default(),
            theme: ThemeColorOverrides::default(),
        }
    }
}

/// Easing curve applied to scroll animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    None,
    Linear,
    Cubic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default = "default_easing")]
    pub easing: EasingType,
    /// Frames per second while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: default_easing(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    pub bg: Option<String>,
    pub fg: Option<String>,
    pub accent: Option<String>,
    pub muted: Option<String>,
    pub card: Option<String>,
    pub active: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "l", "<C-n>" (Ctrl+n), "<S-Tab>", "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,
    #[serde(default = "default_key_next_page")]
    pub next_page: String,
    #[serde(default = "default_key_prev_page")]
    pub prev_page: String,
    #[serde(default = "default_key_next_card")]
    pub next_card: String,
    #[serde(default = "default_key_prev_card")]
    pub prev_card: String,
    #[serde(default = "default_key_next_slide")]
    pub next_slide: String,
    #[serde(default = "default_key_prev_slide")]
    pub prev_slide: String,
    #[serde(default = "default_key_toggle_focus")]
    pub toggle_focus: String,
    /// Scroll the page down (drives navbar and parallax)
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next_page: default_key_next_page(),
            prev_page: default_key_prev_page(),
            next_card: default_key_next_card(),
            prev_card: default_key_prev_card(),
            next_slide: default_key_next_slide(),
            prev_slide: default_key_prev_slide(),
            toggle_focus: default_key_toggle_focus(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_next_page() -> String { "l".to_string() }
fn default_key_prev_page() -> String { "h".to_string() }
fn default_key_next_card() -> String { "L".to_string() }
fn default_key_prev_card() -> String { "H".to_string() }
fn default_key_next_slide() -> String { "n".to_string() }
fn default_key_prev_slide() -> String { "p".to_string() }
fn default_key_toggle_focus() -> String { "<Tab>".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }

/// A card shown in the carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSpec {
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Card width in terminal cells
    #[serde(default = "default_card_width")]
    pub width: u16,
}

/// A full-width slide shown in the jumbotron
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideSpec {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default = "default_cards")]
    pub cards: Vec<CardSpec>,
    #[serde(default = "default_slides")]
    pub slides: Vec<SlideSpec>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            cards: default_cards(),
            slides: default_slides(),
        }
    }
}

fn default_cards() -> Vec<CardSpec> {
    [
        ("Harbor", "Morning light over the docks", 24),
        ("Summit", "Ridge line at dawn", 24),
        ("Market", "Stalls and spices", 30),
        ("Orchard", "Rows of late apples", 24),
        ("Lighthouse", "Beam across the bay", 28),
        ("Canyon", "Red walls, narrow trail", 24),
        ("Glacier", "Blue ice, slow river", 32),
        ("Station", "Last train out", 24),
    ]
    .into_iter()
    .map(|(title, body, width)| CardSpec {
        title: title.to_string(),
        body: body.to_string(),
        width,
    })
    .collect()
}

fn default_slides() -> Vec<SlideSpec> {
    [
        ("Welcome", "Page through the collection below"),
        ("New arrivals", "Fresh cards every week"),
        ("Featured", "Hand-picked by the editors"),
    ]
    .into_iter()
    .map(|(title, body)| SlideSpec {
        title: title.to_string(),
        body: body.to_string(),
    })
    .collect()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_wrap_tolerance() -> f64 {
    1.0
}

fn default_fallback_step() -> f64 {
    300.0
}

fn default_card_gap() -> u16 {
    2
}

fn default_track_padding() -> u16 {
    1
}

fn default_card_width() -> u16 {
    24
}

fn default_auto_delay() -> u64 {
    5000
}

fn default_navbar_hide_margin() -> f64 {
    10.0
}

fn default_parallax_strength_x() -> f64 {
    0.6
}

fn default_parallax_mode() -> String {
    "horizontal".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_duration() -> u64 {
    150
}

fn default_easing() -> EasingType {
    EasingType::Cubic
}

fn default_animation_fps() -> u32 {
    60
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml_str(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml_string()?)?;

        Ok(())
    }

    pub fn to_toml_string(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/marquee/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("marquee")
            .join("config.toml")
    }
}
