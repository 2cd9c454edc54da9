use core::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(EnumIter, PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum LengthUnit {
    Px,
    Rem,
    Em,
    Percent,
    Vw,
    Vh,
}

impl LengthUnit {
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Rem => "rem",
            LengthUnit::Em => "em",
            LengthUnit::Percent => "%",
            LengthUnit::Vw => "vw",
            LengthUnit::Vh => "vh",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        LengthUnit::iter().find(|unit| unit.suffix() == suffix)
    }
}

/// A CSS length as the layout code passes it around: a number and its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    value: f32,
    unit: LengthUnit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthParseError {
    Empty,
    InvalidNumber(String),
    UnknownUnit(String),
    NotFinite(String),
}

impl fmt::Display for LengthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthParseError::Empty => write!(f, "length is empty"),
            LengthParseError::InvalidNumber(s) => write!(f, "invalid number in length '{s}'"),
            LengthParseError::UnknownUnit(s) => write!(f, "unknown length unit '{s}'"),
            LengthParseError::NotFinite(s) => write!(f, "length '{s}' is not finite"),
        }
    }
}

impl std::error::Error for LengthParseError {}

impl Length {
    pub const ZERO: Length = Length {
        value: 0.0,
        unit: LengthUnit::Px,
    };

    #[must_use]
    pub const fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    #[must_use]
    pub const fn px(value: f32) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    #[must_use]
    pub const fn rem(value: f32) -> Self {
        Self::new(value, LengthUnit::Rem)
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[must_use]
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.abs() < f32::EPSILON
    }

    /// Zero fits any unit, otherwise the units have to match.
    #[must_use]
    pub fn is_compatible(&self, other: &Length) -> bool {
        self.unit == other.unit || self.is_zero() || other.is_zero()
    }

    /// Linear interpolation between two lengths, `t` in `[0, 1]`.
    ///
    /// Lengths in different units cannot be blended without a layout pass, so
    /// they step to `to` once the transition completes.
    #[must_use]
    pub fn lerp(from: Length, to: Length, t: f32) -> Length {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return to;
        }
        if !from.is_compatible(&to) {
            tracing::warn!("Cannot interpolate between {from} and {to}, stepping");
            return from;
        }
        let unit = if from.is_zero() { to.unit } else { from.unit };
        Length::new(from.value + (to.value - from.value) * t, unit)
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::ZERO
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl FromStr for Length {
    type Err = LengthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LengthParseError::Empty);
        }

        let (number, suffix) = trimmed.split_at(number_len(trimmed));

        let value: f32 = number
            .parse()
            .map_err(|_| LengthParseError::InvalidNumber(trimmed.to_string()))?;
        if !value.is_finite() {
            return Err(LengthParseError::NotFinite(trimmed.to_string()));
        }

        let unit = if suffix.is_empty() {
            LengthUnit::Px
        } else {
            LengthUnit::from_suffix(suffix)
                .ok_or_else(|| LengthParseError::UnknownUnit(suffix.to_string()))?
        };

        Ok(Length::new(value, unit))
    }
}

// Length of the leading number, with an optional exponent (`1e3px`). An `e`
// not followed by digits starts the unit instead (`1em`).
fn number_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = bytes
        .iter()
        .position(|b| !(b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+')))
        .unwrap_or(bytes.len());

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'-' | b'+')) {
            exp += 1;
        }
        let digits = bytes[exp..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 {
            end = exp + digits;
        }
    }
    end
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_px() {
        let len: Length = "320px".parse().unwrap();
        assert_eq!(len, Length::px(320.0));
    }

    #[test]
    fn test_parse_other_units() {
        assert_eq!("20rem".parse::<Length>().unwrap(), Length::rem(20.0));
        assert_eq!(
            "1.5em".parse::<Length>().unwrap(),
            Length::new(1.5, LengthUnit::Em)
        );
        assert_eq!(
            "30%".parse::<Length>().unwrap(),
            Length::new(30.0, LengthUnit::Percent)
        );
        assert_eq!(
            " 10vw ".parse::<Length>().unwrap(),
            Length::new(10.0, LengthUnit::Vw)
        );
        assert_eq!(
            "10vh".parse::<Length>().unwrap(),
            Length::new(10.0, LengthUnit::Vh)
        );
    }

    #[test]
    fn test_parse_bare_number_is_px() {
        assert_eq!("64".parse::<Length>().unwrap(), Length::px(64.0));
        assert!("0".parse::<Length>().unwrap().is_zero());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Length>(), Err(LengthParseError::Empty));
        assert_eq!("   ".parse::<Length>(), Err(LengthParseError::Empty));
        assert!(matches!(
            "px".parse::<Length>(),
            Err(LengthParseError::InvalidNumber(_))
        ));
        assert!(matches!(
            "12parsecs".parse::<Length>(),
            Err(LengthParseError::UnknownUnit(_))
        ));
        assert!(matches!(
            "1.2.3px".parse::<Length>(),
            Err(LengthParseError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!("1e3px".parse::<Length>().unwrap(), Length::px(1000.0));
        assert_eq!("2.5E-1rem".parse::<Length>().unwrap(), Length::rem(0.25));
        assert_eq!("1e+2".parse::<Length>().unwrap(), Length::px(100.0));
        // `e` without digits belongs to the unit
        assert_eq!(
            "1em".parse::<Length>().unwrap(),
            Length::new(1.0, LengthUnit::Em)
        );
        assert!(matches!(
            "1e".parse::<Length>(),
            Err(LengthParseError::UnknownUnit(_))
        ));
        assert!(matches!(
            "1e99px".parse::<Length>(),
            Err(LengthParseError::NotFinite(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Length::px(320.0).to_string(), "320px");
        assert_eq!(Length::rem(1.5).to_string(), "1.5rem");
        assert_eq!(Length::new(30.0, LengthUnit::Percent).to_string(), "30%");
        assert_eq!(Length::ZERO.to_string(), "0");
        assert_eq!(Length::rem(0.0).to_string(), "0");
    }

    #[test]
    fn test_every_unit_displays_and_parses_back() {
        for unit in LengthUnit::iter() {
            let len = Length::new(12.5, unit);
            assert_eq!(len.to_string().parse::<Length>().unwrap(), len);
        }
    }

    #[test]
    fn test_lerp_same_unit() {
        let mid = Length::lerp(Length::px(0.0), Length::px(320.0), 0.5);
        assert_relative_eq!(mid.value(), 160.0);
        assert_eq!(mid.unit(), LengthUnit::Px);
    }

    #[test]
    fn test_lerp_zero_adopts_other_unit() {
        let mid = Length::lerp(Length::ZERO, Length::rem(20.0), 0.25);
        assert_relative_eq!(mid.value(), 5.0);
        assert_eq!(mid.unit(), LengthUnit::Rem);

        let back = Length::lerp(Length::rem(20.0), Length::ZERO, 0.5);
        assert_relative_eq!(back.value(), 10.0);
        assert_eq!(back.unit(), LengthUnit::Rem);
    }

    #[test]
    fn test_lerp_clamps_and_ends_exactly() {
        let to = Length::px(320.0);
        assert_eq!(Length::lerp(Length::ZERO, to, 1.0), to);
        assert_eq!(Length::lerp(Length::ZERO, to, 7.0), to);
        assert_eq!(Length::lerp(Length::px(10.0), to, -1.0), Length::px(10.0));
    }

    #[test]
    fn test_lerp_incompatible_units_steps() {
        let from = Length::px(100.0);
        let to = Length::rem(10.0);
        assert_eq!(Length::lerp(from, to, 0.9), from);
        assert_eq!(Length::lerp(from, to, 1.0), to);
    }

    #[test]
    fn test_serde_as_css_string() {
        let json = serde_json::to_string(&Length::px(320.0)).unwrap();
        assert_eq!(json, "\"320px\"");
        let back: Length = serde_json::from_str("\"20rem\"").unwrap();
        assert_eq!(back, Length::rem(20.0));
        assert!(serde_json::from_str::<Length>("\"wide\"").is_err());
    }
}
