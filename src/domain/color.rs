// SPDX-License-Identifier: MIT OR Apache-2.0

//! Color values parsed from configuration strings.
//!
//! Colors use the platform color syntax: `#RRGGBB`, `#AARRGGBB`, or one of a small
//! set of case-insensitive color names.

use crate::domain::errors::VariablesError;
use std::fmt;
use std::str::FromStr;

/// A 32-bit ARGB color.
///
/// # Examples
///
/// ```
/// use feature_variables::domain::Color;
///
/// let red: Color = "red".parse().unwrap();
/// assert_eq!(red, Color::RED);
///
/// let translucent: Color = "#80FF0000".parse().unwrap();
/// assert_eq!(translucent.alpha(), 0x80);
/// assert_eq!(translucent.red(), 0xFF);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color(0xFF00_0000);
    /// Dark gray.
    pub const DKGRAY: Color = Color(0xFF44_4444);
    /// Gray.
    pub const GRAY: Color = Color(0xFF88_8888);
    /// Light gray.
    pub const LTGRAY: Color = Color(0xFFCC_CCCC);
    /// Opaque white.
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    /// Opaque red.
    pub const RED: Color = Color(0xFFFF_0000);
    /// Opaque green.
    pub const GREEN: Color = Color(0xFF00_FF00);
    /// Opaque blue.
    pub const BLUE: Color = Color(0xFF00_00FF);
    /// Opaque yellow.
    pub const YELLOW: Color = Color(0xFFFF_FF00);
    /// Opaque cyan.
    pub const CYAN: Color = Color(0xFF00_FFFF);
    /// Opaque magenta.
    pub const MAGENTA: Color = Color(0xFFFF_00FF);
    /// Fully transparent.
    pub const TRANSPARENT: Color = Color(0);

    /// Creates a color from a packed ARGB value.
    pub const fn from_argb(argb: u32) -> Self {
        Color(argb)
    }

    /// Creates an opaque color from its red, green and blue components.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color(0xFF00_0000 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// Returns the packed ARGB value.
    pub const fn argb(self) -> u32 {
        self.0
    }

    /// Returns the alpha component.
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Returns the red component.
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Returns the green component.
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Returns the blue component.
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    fn named(name: &str) -> Option<Self> {
        let color = match name {
            "black" => Color::BLACK,
            "darkgray" | "darkgrey" => Color::DKGRAY,
            "gray" | "grey" => Color::GRAY,
            "lightgray" | "lightgrey" => Color::LTGRAY,
            "white" => Color::WHITE,
            "red" => Color::RED,
            "green" | "lime" => Color::GREEN,
            "blue" => Color::BLUE,
            "yellow" => Color::YELLOW,
            "cyan" | "aqua" => Color::CYAN,
            "magenta" | "fuchsia" => Color::MAGENTA,
            "maroon" => Color(0xFF80_0000),
            "navy" => Color(0xFF00_0080),
            "olive" => Color(0xFF80_8000),
            "purple" => Color(0xFF80_0080),
            "silver" => Color(0xFFC0_C0C0),
            "teal" => Color(0xFF00_8080),
            _ => return None,
        };
        Some(color)
    }
}

impl FromStr for Color {
    type Err = VariablesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || VariablesError::ColorParseError {
            input: s.to_string(),
        };

        if let Some(hex) = s.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(err());
            }
            let value = u32::from_str_radix(hex, 16).map_err(|_| err())?;
            return match hex.len() {
                6 => Ok(Color(0xFF00_0000 | value)),
                8 => Ok(Color(value)),
                _ => Err(err()),
            };
        }

        Color::named(&s.to_ascii_lowercase()).ok_or_else(err)
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}
