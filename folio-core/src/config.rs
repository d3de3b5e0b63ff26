//! Site configuration.
//!
//! Every element id, timing and particle parameter the behaviour layer relies on
//! lives in [`SiteConfig`]. The defaults match the shipped `index.html`; a page can
//! override any subset by embedding a JSON document (see [`SiteConfig::from_json`]).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default number of particles in the header background.
pub const PARTICLE_COUNT_DEFAULT: usize = 100;

/// Default distance under which two particles are linked.
pub const LINK_DISTANCE_DEFAULT: f64 = 150.0;

/// Default time the copy confirmation stays visible.
pub const COPY_FLASH_MS_DEFAULT: u32 = 2000;

/// Default delay between un-hiding a modal and applying its centering class.
pub const MODAL_REVEAL_DELAY_MS_DEFAULT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Maximum log level: "error", "warn", "info", "debug" or "trace"
    pub log_level: String,
    pub router: RouterConfig,
    pub email_modal: ModalConfig,
    pub call_modal: ModalConfig,
    pub background: BackgroundConfig,
}

/// DOM contract of the page router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub nav_link_selector: String,
    pub section_selector: String,
    pub header_id: String,
    pub footer_id: String,
    pub mobile_menu_id: String,
    pub mobile_menu_button_id: String,
    pub skills_id: String,
    /// Attribute carrying the progress percentage on each skills bar
    pub progress_attribute: String,
    /// Attribute on nav links naming the page they point to
    pub target_attribute: String,
}

/// DOM contract and timings of one modal dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub open_button_id: String,
    pub modal_id: String,
    pub close_button_id: String,
    pub copy_button_id: String,
    pub text_id: String,
    pub message_id: String,
    pub reveal_delay_ms: u32,
    pub copy_flash_ms: u32,
}

/// Canvas id and particle parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub canvas_id: String,
    /// Element whose rendered size the canvas follows
    pub container_id: String,
    pub particle_count: usize,
    pub link_distance: f64,
    /// Velocity per axis is drawn from [-max_speed, max_speed]
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_alpha: f64,
    /// Base colour as "r, g, b"
    pub rgb: String,
    pub line_width: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            router: RouterConfig::default(),
            email_modal: ModalConfig::named("email"),
            call_modal: ModalConfig::named("call"),
            background: BackgroundConfig::default(),
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            nav_link_selector: ".nav-link".to_string(),
            section_selector: "main section".to_string(),
            header_id: "header".to_string(),
            footer_id: "main-footer".to_string(),
            mobile_menu_id: "mobile-menu".to_string(),
            mobile_menu_button_id: "mobile-menu-button".to_string(),
            skills_id: "skills".to_string(),
            progress_attribute: "data-progress".to_string(),
            target_attribute: "data-target".to_string(),
        }
    }
}

impl ModalConfig {
    /// Ids following the `<name>-button`, `<name>-modal`, ... convention of the page.
    pub fn named(name: &str) -> Self {
        Self {
            open_button_id: format!("{name}-button"),
            modal_id: format!("{name}-modal"),
            close_button_id: format!("close-{name}-modal-button"),
            copy_button_id: format!("copy-{name}-button"),
            text_id: format!("{name}-text"),
            message_id: format!("copy-{name}-message"),
            reveal_delay_ms: MODAL_REVEAL_DELAY_MS_DEFAULT,
            copy_flash_ms: COPY_FLASH_MS_DEFAULT,
        }
    }
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self::named("email")
    }
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            canvas_id: "electron-canvas".to_string(),
            container_id: "header".to_string(),
            particle_count: PARTICLE_COUNT_DEFAULT,
            link_distance: LINK_DISTANCE_DEFAULT,
            max_speed: 0.25,
            min_radius: 1.0,
            max_radius: 3.0,
            min_alpha: 0.5,
            rgb: "88, 166, 255".to_string(),
            line_width: 0.5,
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override. Missing fields keep their defaults.
    ///
    /// The override is merged over [`SiteConfig::default`] key by key, so a partial
    /// `call_modal` keeps the call modal's ids rather than the generic modal defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let overrides: Value = serde_json::from_str(json)?;
        anyhow::ensure!(overrides.is_object(), "site config must be a JSON object");
        let mut merged = serde_json::to_value(SiteConfig::default())?;
        merge(&mut merged, overrides);
        let config: SiteConfig = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configured log level, falling back to `Info` for unknown names.
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let bg = &self.background;
        anyhow::ensure!(
            bg.link_distance > 0.0,
            "background.link_distance must be positive (got {})",
            bg.link_distance
        );
        anyhow::ensure!(
            bg.min_radius <= bg.max_radius,
            "background.min_radius ({}) exceeds max_radius ({})",
            bg.min_radius,
            bg.max_radius
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&bg.min_alpha),
            "background.min_alpha must be within [0, 1] (got {})",
            bg.min_alpha
        );
        anyhow::ensure!(
            bg.max_speed >= 0.0,
            "background.max_speed must not be negative (got {})",
            bg.max_speed
        );
        Ok(())
    }
}

/// Recursively overlay `overrides` onto `base`. Objects merge per key; any other
/// value replaces what was there.
fn merge(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
