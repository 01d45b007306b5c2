// Settings module
// Application settings: built-in defaults overlaid with values from a config store

use crate::color::Color;
use crate::config::{Store, ValueKind};
use crate::keys::KeyName;
use log::warn;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Keys understood by [`Settings::from_store`]
pub const KNOWN_KEYS: &[&str] = &[
    "window_width",
    "window_height",
    "window_title",
    "framerate",
    "scale_factor",
    "min_scale",
    "message_font_size",
    "bg_color",
    "message_color",
    "message_err_color",
    "next_image",
    "prev_image",
    "rotate_left",
    "rotate_right",
    "reset_view",
    "custom_font",
];

/// Resolved viewer settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub window_width: u32,
    pub window_height: u32,
    pub window_title: String,
    /// Target frames per second
    pub framerate: u32,
    /// Zoom change per scroll-wheel step
    pub scale_factor: f32,
    /// Lower bound for the zoom level
    pub min_scale: f32,
    pub message_font_size: u32,
    pub bg_color: Color,
    pub message_color: Color,
    pub message_err_color: Color,
    pub next_image: KeyName,
    pub prev_image: KeyName,
    pub rotate_left: KeyName,
    pub rotate_right: KeyName,
    pub reset_view: KeyName,
    /// TTF font used for the status line instead of the built-in one
    pub custom_font: Option<PathBuf>,
}

impl Settings {
    /// The built-in defaults, used for every key a config does not set
    pub fn defaults() -> Self {
        Settings {
            window_width: 1000,
            window_height: 700,
            window_title: "Chaksu Image Viewer".to_string(),
            framerate: 60,
            scale_factor: 0.3,
            min_scale: 0.1,
            message_font_size: 20,
            bg_color: Color::rgba(0x28, 0x28, 0x28, 0xff),
            message_color: Color::rgba(0xff, 0xff, 0xff, 0xff),
            message_err_color: Color::rgba(0xff, 0x00, 0x00, 0xff),
            next_image: KeyName::Space,
            prev_image: KeyName::Backspace,
            rotate_left: KeyName::Letter('A'),
            rotate_right: KeyName::Letter('S'),
            reset_view: KeyName::Digit(0),
            custom_font: None,
        }
    }

    /// Overlay the defaults with every valid value in `store`.
    ///
    /// Values of the wrong type or outside their valid range are reported
    /// and ignored, keeping the default.
    pub fn from_store(store: &Store) -> Self {
        for entry in store.records() {
            if !KNOWN_KEYS.contains(&entry.key) {
                warn!("Config: unknown key '{}' ignored", entry.key);
            }
        }

        let defaults = Settings::defaults();
        Settings {
            window_width: int_setting(store, "window_width", defaults.window_width, 1),
            window_height: int_setting(store, "window_height", defaults.window_height, 1),
            window_title: store
                .get_string("window_title")
                .map(str::to_string)
                .unwrap_or_else(|| {
                    expect_kind(store, "window_title", ValueKind::String);
                    defaults.window_title
                }),
            framerate: int_setting(store, "framerate", defaults.framerate, 1),
            scale_factor: float_setting(store, "scale_factor", defaults.scale_factor),
            min_scale: float_setting(store, "min_scale", defaults.min_scale),
            message_font_size: int_setting(
                store,
                "message_font_size",
                defaults.message_font_size,
                1,
            ),
            bg_color: parsed_setting(store, "bg_color", defaults.bg_color),
            message_color: parsed_setting(store, "message_color", defaults.message_color),
            message_err_color: parsed_setting(
                store,
                "message_err_color",
                defaults.message_err_color,
            ),
            next_image: parsed_setting(store, "next_image", defaults.next_image),
            prev_image: parsed_setting(store, "prev_image", defaults.prev_image),
            rotate_left: parsed_setting(store, "rotate_left", defaults.rotate_left),
            rotate_right: parsed_setting(store, "rotate_right", defaults.rotate_right),
            reset_view: parsed_setting(store, "reset_view", defaults.reset_view),
            custom_font: match store.get_string("custom_font") {
                Some("") => None,
                Some(path) => Some(PathBuf::from(path)),
                None => {
                    expect_kind(store, "custom_font", ValueKind::String);
                    defaults.custom_font
                }
            },
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::defaults()
    }
}

/// Renders the settings in config file syntax
impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "window_width = {}", self.window_width)?;
        writeln!(f, "window_height = {}", self.window_height)?;
        writeln!(f, "window_title = \"{}\"", self.window_title)?;
        writeln!(f, "framerate = {}", self.framerate)?;
        writeln!(f, "scale_factor = {:?}", self.scale_factor)?;
        writeln!(f, "min_scale = {:?}", self.min_scale)?;
        writeln!(f, "message_font_size = {}", self.message_font_size)?;
        writeln!(f, "bg_color = \"{}\"", self.bg_color)?;
        writeln!(f, "message_color = \"{}\"", self.message_color)?;
        writeln!(f, "message_err_color = \"{}\"", self.message_err_color)?;
        writeln!(f, "next_image = \"{}\"", self.next_image)?;
        writeln!(f, "prev_image = \"{}\"", self.prev_image)?;
        writeln!(f, "rotate_left = \"{}\"", self.rotate_left)?;
        writeln!(f, "rotate_right = \"{}\"", self.rotate_right)?;
        writeln!(f, "reset_view = \"{}\"", self.reset_view)?;
        match &self.custom_font {
            Some(path) => writeln!(f, "custom_font = \"{}\"", path.display()),
            None => writeln!(f, "# custom_font = \"/path/to/font.ttf\""),
        }
    }
}

/// Warn when `key` is set, but only with a kind other than `expected`
fn expect_kind(store: &Store, key: &str, expected: ValueKind) {
    if store.records().any(|entry| entry.key == key) {
        warn!("Config: '{}' must be a {} value, ignored", key, expected);
    }
}

fn int_setting(store: &Store, key: &str, default: u32, min: u32) -> u32 {
    let Some(value) = store.get_int(key) else {
        expect_kind(store, key, ValueKind::Int);
        return default;
    };

    match u32::try_from(value) {
        Ok(n) if n >= min => n,
        _ => {
            warn!(
                "Config: {} = {} is out of range (minimum {}), using {}",
                key, value, min, default
            );
            default
        }
    }
}

/// Decimal setting; a whole number is accepted too. Must be positive.
fn float_setting(store: &Store, key: &str, default: f32) -> f32 {
    let value = store
        .get_float(key)
        .or_else(|| store.get_int(key).map(|n| n as f64));
    let Some(value) = value else {
        expect_kind(store, key, ValueKind::Float);
        return default;
    };

    let value = value as f32;
    if value.is_finite() && value > 0.0 {
        value
    } else {
        warn!("Config: {} = {} must be positive, using {}", key, value, default);
        default
    }
}

/// String setting validated through `FromStr`
fn parsed_setting<T>(store: &Store, key: &str, default: T) -> T
where
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    let Some(text) = store.get_string(key) else {
        expect_kind(store, key, ValueKind::String);
        return default;
    };

    match text.parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("Config: {}: {}, using {}", key, e, default);
            default
        }
    }
}
