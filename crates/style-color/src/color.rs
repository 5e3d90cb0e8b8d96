use crate::ColorError;
use std::fmt;
use std::str::FromStr;

/// Formats a packed ARGB color as `rgba(r,g,b,a)`.
///
/// The alpha channel is scaled to `0..=1` and printed with at most three
/// fractional digits, trailing zeros removed.
///
/// ```
/// use style_color::color_to_rgba_string;
///
/// assert_eq!(color_to_rgba_string(0xffff_0000), "rgba(255,0,0,1)");
/// assert_eq!(color_to_rgba_string(0x8000_00ff), "rgba(0,0,255,0.502)");
/// assert_eq!(color_to_rgba_string(0x0000_0000), "rgba(0,0,0,0)");
/// ```
pub fn color_to_rgba_string(argb: u32) -> String {
    let color = Color::from_argb(argb);
    format!(
        "rgba({},{},{},{})",
        color.red(),
        color.green(),
        color.blue(),
        format_alpha(color.alpha())
    )
}

fn format_alpha(alpha: u8) -> String {
    // Thousandths, rounded to nearest.
    let milli = (u32::from(alpha) * 1000 + 127) / 255;
    if milli % 1000 == 0 {
        return (milli / 1000).to_string();
    }
    let fraction = format!("{:03}", milli % 1000);
    format!("0.{}", fraction.trim_end_matches('0'))
}

/// A color packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u32);

impl Color {
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    pub const BLACK: Self = Self(0xff00_0000);
    pub const WHITE: Self = Self(0xffff_ffff);

    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    pub const fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self((alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// Opaque color from red, green and blue channels.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba(red, green, blue, 0xff)
    }

    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`. The leading `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.is_empty() {
            return Err(ColorError::Empty);
        }

        let digits = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(ColorError::InvalidDigit(c)))
            .collect::<Result<Vec<u8>, ColorError>>()?;

        match *digits.as_slice() {
            [r, g, b] => Ok(Self::from_rgb(r * 17, g * 17, b * 17)),
            [r, g, b, a] => Ok(Self::from_rgba(r * 17, g * 17, b * 17, a * 17)),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::from_rgb(
                r1 << 4 | r0,
                g1 << 4 | g0,
                b1 << 4 | b0,
            )),
            [r1, r0, g1, g0, b1, b0, a1, a0] => Ok(Self::from_rgba(
                r1 << 4 | r0,
                g1 << 4 | g0,
                b1 << 4 | b0,
                a1 << 4 | a0,
            )),
            _ => Err(ColorError::InvalidLength(digits.len())),
        }
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&color_to_rgba_string(self.0))
    }
}
