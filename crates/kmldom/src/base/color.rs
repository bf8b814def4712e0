//! 32-bit KML color packed as AABBGGRR

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Color with alpha, blue, green and red channels, packed high to low.
///
/// Ordering and equality compare the packed integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color32(u32);

impl Default for Color32 {
    /// Fully opaque white
    fn default() -> Self {
        Self(0xffff_ffff)
    }
}

impl Color32 {
    pub const fn new(abgr: u32) -> Self {
        Self(abgr)
    }

    pub const fn from_abgr(alpha: u8, blue: u8, green: u8, red: u8) -> Self {
        Self(u32::from_be_bytes([alpha, blue, green, red]))
    }

    /// Packed AABBGGRR value
    pub const fn abgr(self) -> u32 {
        self.0
    }

    /// Packed AARRGGBB value
    pub const fn argb(self) -> u32 {
        let [alpha, blue, green, red] = self.0.to_be_bytes();
        u32::from_be_bytes([alpha, red, green, blue])
    }

    pub const fn alpha(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    pub const fn blue(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    pub const fn green(self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    pub const fn red(self) -> u8 {
        self.0.to_be_bytes()[3]
    }

    pub fn set_alpha(&mut self, value: u8) {
        *self = Self::from_abgr(value, self.blue(), self.green(), self.red());
    }

    pub fn set_blue(&mut self, value: u8) {
        *self = Self::from_abgr(self.alpha(), value, self.green(), self.red());
    }

    pub fn set_green(&mut self, value: u8) {
        *self = Self::from_abgr(self.alpha(), self.blue(), value, self.red());
    }

    pub fn set_red(&mut self, value: u8) {
        *self = Self::from_abgr(self.alpha(), self.blue(), self.green(), value);
    }

    /// Lowercase AARRGGBB hex
    pub fn to_string_argb(self) -> String {
        format!("{:08x}", self.argb())
    }
}

impl From<u32> for Color32 {
    fn from(abgr: u32) -> Self {
        Self(abgr)
    }
}

impl From<Color32> for u32 {
    fn from(color: Color32) -> Self {
        color.0
    }
}

impl FromStr for Color32 {
    type Err = Error;

    /// Exactly eight hex digits in AABBGGRR order, any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        if hex.len() != 8 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::invalid_value("color", s));
        }
        u32::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|_| Error::invalid_value("color", s))
    }
}

impl fmt::Display for Color32 {
    /// Lowercase AABBGGRR hex
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}
