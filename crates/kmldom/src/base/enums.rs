//! Enumerated field values

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Defines a field enumeration whose text form is its schema spelling
macro_rules! kml_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
        default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every value, in schema order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Schema spelling
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $( $text => Ok(Self::$variant), )+
                    _ => Err(Error::invalid_value($field, s)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

kml_enum! {
    /// How altitude values are interpreted
    AltitudeMode as "altitudeMode" {
        ClampToGround => "clampToGround",
        RelativeToGround => "relativeToGround",
        Absolute => "absolute",
    }
    default ClampToGround
}

kml_enum! {
    ColorMode as "colorMode" {
        Normal => "normal",
        Random => "random",
    }
    default Normal
}

kml_enum! {
    /// Balloon visibility
    DisplayMode as "displayMode" {
        Default => "default",
        Hide => "hide",
    }
    default Default
}

kml_enum! {
    /// Time-based refresh policy of a link
    RefreshMode as "refreshMode" {
        OnChange => "onChange",
        OnInterval => "onInterval",
        OnExpire => "onExpire",
    }
    default OnChange
}

kml_enum! {
    /// View-based refresh policy of a link
    ViewRefreshMode as "viewRefreshMode" {
        Never => "never",
        OnStop => "onStop",
        OnRequest => "onRequest",
        OnRegion => "onRegion",
    }
    default Never
}

kml_enum! {
    /// `<key>` of a StyleMap pair
    StyleState as "key" {
        Normal => "normal",
        Highlight => "highlight",
    }
    default Normal
}

kml_enum! {
    /// Unit of a `Vec2` component
    Units as "units" {
        Fraction => "fraction",
        Pixels => "pixels",
        InsetPixels => "insetPixels",
    }
    default Fraction
}

kml_enum! {
    /// How a ListStyle presents a container's children
    ListItemType as "listItemType" {
        Check => "check",
        CheckOffOnly => "checkOffOnly",
        CheckHideChildren => "checkHideChildren",
        RadioFolder => "radioFolder",
    }
    default Check
}

kml_enum! {
    /// One word of an ItemIcon `state` list
    ItemIconState as "state" {
        Open => "open",
        Closed => "closed",
        Error => "error",
        Fetching0 => "fetching0",
        Fetching1 => "fetching1",
        Fetching2 => "fetching2",
    }
    default Open
}

kml_enum! {
    /// Projection of a PhotoOverlay image
    Shape as "shape" {
        Rectangle => "rectangle",
        Cylinder => "cylinder",
        Sphere => "sphere",
    }
    default Rectangle
}

kml_enum! {
    /// Where row 0 of an ImagePyramid starts
    GridOrigin as "gridOrigin" {
        LowerLeft => "lowerLeft",
        UpperLeft => "upperLeft",
    }
    default LowerLeft
}
