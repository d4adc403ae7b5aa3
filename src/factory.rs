use crate::colors::ColorValue;
use crate::error::Result;

pub fn create_one(raw: &str) -> Result<ColorValue> {
    ColorValue::new(raw)
}

/// Builds a color for every input, in order. Stops at the first invalid one.
pub fn create_many<I>(raws: I) -> Result<Vec<ColorValue>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    raws.into_iter().map(|raw| create_one(raw.as_ref())).collect()
}
