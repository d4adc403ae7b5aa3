pub mod colors;
pub mod config;
pub mod error;
pub mod factory;
pub mod resolver;
pub mod service;

pub use colors::{ColorValue, Rgb};
pub use config::ServiceConfig;
pub use error::{ColorError, Result};
pub use factory::{create_many, create_one};
pub use resolver::{NameLookupTable, NameRecord, resolve};
pub use service::{ServiceClient, TableSource, parse_table};

/// Colors compared when no arguments are given.
pub const DEFAULT_COLORS: [&str; 2] = ["#000000", "#FFFFFF"];
