use std::fmt;
use std::str::FromStr;

use hex_color::HexColor;
use tracing::debug;

use crate::error::{ColorError, Result};
use crate::resolver::resolve;
use crate::service::TableSource;

pub const HEX_COLOR_LENGTH: usize = 7;
/// Field of a service record that holds the hex key.
pub const HEX_KEY_FIELD: &str = "hex";

const RED_WEIGHT: f64 = 0.241;
const GREEN_WEIGHT: f64 = 0.691;
const BLUE_WEIGHT: f64 = 0.068;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// A validated `#RRGGBB` color with lazily computed brightness and name.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorValue {
    raw: String,
    cached_brightness: Option<f64>,
    cached_name: Option<String>,
}

fn validate(raw: &str) -> Result<()> {
    let len = raw.chars().count();
    if len != HEX_COLOR_LENGTH {
        return Err(ColorError::Length { len });
    }
    let Some(digits) = raw.strip_prefix('#') else {
        return Err(ColorError::Format);
    };
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::HexDigit);
    }
    Ok(())
}

impl ColorValue {
    pub fn new(raw: &str) -> Result<Self> {
        validate(raw)?;
        Ok(ColorValue {
            raw: raw.to_string(),
            cached_brightness: None,
            cached_name: None,
        })
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.raw
    }

    /// Replaces the color. Both caches are dropped, so neither brightness nor
    /// name can outlive the value they were computed for.
    pub fn set_value(&mut self, raw: &str) -> Result<()> {
        validate(raw)?;
        self.raw = raw.to_string();
        self.cached_brightness = None;
        self.cached_name = None;
        Ok(())
    }

    pub fn to_rgb(&self) -> Result<Rgb> {
        let parsed = HexColor::parse(&self.raw).map_err(ColorError::Conversion)?;
        Ok(Rgb {
            red: parsed.r,
            green: parsed.g,
            blue: parsed.b,
        })
    }

    pub fn brightness(&mut self) -> Result<f64> {
        if let Some(brightness) = self.cached_brightness {
            return Ok(brightness);
        }
        let Rgb { red, green, blue } = self.to_rgb()?;
        let (r, g, b) = (f64::from(red), f64::from(green), f64::from(blue));
        let score = (RED_WEIGHT * r * r + GREEN_WEIGHT * g * g + BLUE_WEIGHT * b * b).sqrt();
        let brightness = (score * 100.0).round() / 100.0;
        self.cached_brightness = Some(brightness);
        Ok(brightness)
    }

    /// Lowercase hex digits without the leading `#`.
    #[must_use]
    pub fn lookup_key(&self) -> String {
        self.raw[1..].to_ascii_lowercase()
    }

    /// Looks the color up in a table fetched from `source`.
    ///
    /// An unknown color yields an empty string and leaves the name unresolved,
    /// so a later call will fetch again.
    pub fn resolve_name<S: TableSource + ?Sized>(&mut self, source: &S) -> Result<String> {
        if let Some(name) = self.cached_name.as_deref().filter(|n| !n.is_empty()) {
            return Ok(name.to_string());
        }
        let table = source.fetch_table()?;
        let key = self.lookup_key();
        match resolve(&key, HEX_KEY_FIELD, &table) {
            Ok(name) => {
                debug!(color = %self.raw, %name, "resolved color name");
                self.cached_name = Some(name.clone());
                Ok(name)
            }
            Err(ColorError::NotFound(_)) => {
                debug!(color = %self.raw, records = table.len(), "color name not found");
                Ok(String::new())
            }
            Err(e) => Err(e),
        }
    }
}

impl FromStr for ColorValue {
    type Err = ColorError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ColorValue::new(s)
    }
}

impl TryFrom<&str> for ColorValue {
    type Error = ColorError;
    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        ColorValue::new(s)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
