use hex_color::ParseHexColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("wrong color length: expected 7 characters, got {len}")]
    Length { len: usize },

    #[error("wrong color format: value must start with '#'")]
    Format,

    #[error("wrong color hex digits")]
    HexDigit,

    #[error("conversion to RGB failed")]
    Conversion(#[source] ParseHexColorError),

    #[error("could not connect to color service")]
    ServiceConnection(#[source] reqwest::Error),

    #[error("unexpected color service response")]
    ServiceFormat(#[from] serde_json::Error),

    #[error("no color named for key {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, ColorError>;
