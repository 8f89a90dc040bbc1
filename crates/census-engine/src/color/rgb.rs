//! 8-bit RGB color type
//!
//! [`Rgb`] is the value type shared by every stage of the census: it is the
//! distinct-color key of a [`RawCensus`](crate::RawCensus), the color of a
//! palette entry and the representative color of an aggregated entry.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color as three 8-bit channels.
///
/// Equality, ordering and hashing are componentwise, so two pixels with the
/// same channel values always collapse onto the same census key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    ///
    /// # Example
    /// ```
    /// use census_engine::Rgb;
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(red.to_bytes(), [255, 0, 0]);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Euclidean (L2) distance to `other` over the three channels.
    ///
    /// Computed in `f64` so that the integer inputs are represented exactly
    /// and equal sums of squares always produce bit-identical distances.
    ///
    /// # Example
    /// ```
    /// use census_engine::Rgb;
    /// let d = Rgb::new(0, 0, 0).distance(Rgb::new(3, 4, 0));
    /// assert_eq!(d, 5.0);
    /// ```
    #[inline]
    pub fn distance(self, other: Rgb) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Channels scaled to `0.0..=1.0` by dividing by 255.
    #[inline]
    pub fn to_normalized(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_bytes()
    }
}

/// Formats as three space-separated decimal channels, e.g. `"255 0 0"`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from text.
    ///
    /// Supported formats:
    /// - `#RRGGBB` / `RRGGBB` - 6-digit hex
    /// - `#RGB` / `RGB` - shorthand hex (each digit doubled)
    /// - `R G B` / `R,G,B` - three decimal channels separated by whitespace
    ///   or commas (the same text [`Display`](fmt::Display) produces)
    ///
    /// Leading and trailing whitespace is trimmed. Hex is case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use census_engine::Rgb;
    ///
    /// assert_eq!("#F00".parse::<Rgb>().unwrap(), Rgb::new(255, 0, 0));
    /// assert_eq!("0 128 255".parse::<Rgb>().unwrap(), Rgb::new(0, 128, 255));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.contains(|c: char| c.is_whitespace() || c == ',') {
            let parts: Vec<&str> = s
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|p| !p.is_empty())
                .collect();
            if parts.len() != 3 {
                return Err(ParseColorError::ComponentCount(parts.len()));
            }
            let r = parts[0].parse::<u8>().map_err(ParseColorError::InvalidChannel)?;
            let g = parts[1].parse::<u8>().map_err(ParseColorError::InvalidChannel)?;
            let b = parts[2].parse::<u8>().map_err(ParseColorError::InvalidChannel)?;
            return Ok(Self::new(r, g, b));
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16)? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16)? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16)?;
                let g = u8::from_str_radix(&hex[2..4], 16)?;
                let b = u8::from_str_radix(&hex[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_space_separated_decimal() {
        assert_eq!(Rgb::new(255, 0, 0).to_string(), "255 0 0");
        assert_eq!(Rgb::new(0, 128, 7).to_string(), "0 128 7");
    }

    #[test]
    fn test_display_parses_back() {
        let color = Rgb::new(12, 200, 99);
        assert_eq!(color.to_string().parse::<Rgb>().unwrap(), color);
    }

    #[test]
    fn test_distance_exact_values() {
        let black = Rgb::new(0, 0, 0);
        assert_eq!(black.distance(black), 0.0);
        assert_eq!(black.distance(Rgb::new(3, 4, 0)), 5.0);
        assert_eq!(black.distance(Rgb::new(0, 0, 255)), 255.0);
    }

    #[test]
    fn test_distance_is_symmetric_and_tie_exact() {
        let green = Rgb::new(0, 255, 0);
        let red = Rgb::new(255, 0, 0);
        let blue = Rgb::new(0, 0, 255);
        assert_eq!(green.distance(red), red.distance(green));
        // Both sums of squares are 2 * 255^2, so the distances are identical
        assert_eq!(green.distance(red), green.distance(blue));
    }

    #[test]
    fn test_normalized() {
        assert_eq!(Rgb::new(255, 0, 255).to_normalized(), [1.0, 0.0, 1.0]);
        let mid = Rgb::new(51, 102, 204).to_normalized();
        assert!((mid[0] - 0.2).abs() < 1e-6);
        assert!((mid[1] - 0.4).abs() < 1e-6);
        assert!((mid[2] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#FFFFFF".parse::<Rgb>().unwrap(), Rgb::new(255, 255, 255));
        assert_eq!("00ff80".parse::<Rgb>().unwrap(), Rgb::new(0, 255, 128));
        assert_eq!("#abc".parse::<Rgb>().unwrap(), Rgb::new(0xAA, 0xBB, 0xCC));
        assert_eq!("  #000000 ".parse::<Rgb>().unwrap(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!("255 0 0".parse::<Rgb>().unwrap(), Rgb::new(255, 0, 0));
        assert_eq!("1,2,3".parse::<Rgb>().unwrap(), Rgb::new(1, 2, 3));
        assert_eq!("1, 2,  3".parse::<Rgb>().unwrap(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "#GGG".parse::<Rgb>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert!(matches!(
            "#FFFF".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength)
        ));
        assert!(matches!("".parse::<Rgb>(), Err(ParseColorError::InvalidLength)));
        assert!(matches!(
            "1 2".parse::<Rgb>(),
            Err(ParseColorError::ComponentCount(2))
        ));
        assert!(matches!(
            "1 2 256".parse::<Rgb>(),
            Err(ParseColorError::InvalidChannel(_))
        ));
        assert!(matches!(
            "ÄÄÄ".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength)
        ));
    }

    #[test]
    fn test_conversions() {
        let color = Rgb::from((1, 2, 3));
        assert_eq!(color, Rgb::from([1, 2, 3]));
        let bytes: [u8; 3] = color.into();
        assert_eq!(bytes, [1, 2, 3]);
    }
}
