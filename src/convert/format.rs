//! Source format identification

use std::fmt;
use std::str::FromStr;

use super::errors::{ConvertError, ConvertResult};

/// Identifier for the textual encodings a coordinate can arrive in
///
/// Dispatch on this enum is exhaustive by construction, so adding a new
/// format forces every conversion site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Degrees/minutes/seconds text, e.g. `40°44'54.4"N 73°59'8.4"W`
    Degrees,
    /// Space-separated decimal pair, e.g. `40.748333 -73.985278`
    Decimal,
    /// Military Grid Reference System string, e.g. `18TWL8359907350`
    Mgrs,
    /// UTM/UPS string, e.g. `18N 583599 4507350`
    Utm,
}

impl SourceFormat {
    /// Name used for this format in user-facing text
    pub fn name(&self) -> &'static str {
        match self {
            SourceFormat::Degrees => "degrees",
            SourceFormat::Decimal => "decimal",
            SourceFormat::Mgrs => "mgrs",
            SourceFormat::Utm => "utm",
        }
    }

    /// Parse a format name, treating the empty string as "no format"
    ///
    /// An empty name means the caller already holds canonical data and
    /// wants passthrough behavior, so it is not an error here.
    pub fn parse_name(name: &str) -> ConvertResult<Option<SourceFormat>> {
        if name.is_empty() {
            return Ok(None);
        }
        name.parse().map(Some)
    }
}

impl FromStr for SourceFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> ConvertResult<Self> {
        match s {
            "degrees" => Ok(SourceFormat::Degrees),
            "decimal" => Ok(SourceFormat::Decimal),
            "mgrs" => Ok(SourceFormat::Mgrs),
            "utm" => Ok(SourceFormat::Utm),
            other => Err(ConvertError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
