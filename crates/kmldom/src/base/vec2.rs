//! Unit-tagged 2D vector carried in attributes

use crate::base::Units;

/// `x`/`y` pair with per-axis units, as in `<hotSpot x="0.5" y="1" .../>`.
///
/// Each component is optional; absent ones are not written.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub xunits: Option<Units>,
    pub yunits: Option<Units>,
}

impl Vec2 {
    /// Both axes in the same unit
    pub const fn new(x: f64, y: f64, units: Units) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            xunits: Some(units),
            yunits: Some(units),
        }
    }

    pub fn x(&self) -> f64 {
        self.x.unwrap_or_default()
    }

    pub fn y(&self) -> f64 {
        self.y.unwrap_or_default()
    }

    pub fn xunits(&self) -> Units {
        self.xunits.unwrap_or_default()
    }

    pub fn yunits(&self) -> Units {
        self.yunits.unwrap_or_default()
    }

    /// True if no component is set
    pub const fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.xunits.is_none() && self.yunits.is_none()
    }
}
