//! Background presets
//!
//! A preset names a scene the composed image should be staged in. Each known
//! preset resolves to a fixed natural-language directive; input that names
//! no known preset resolves to an empty directive rather than an error.
//! That leniency is deliberate: a stale or misspelled preset should degrade
//! the scene, not fail the render.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named scene/background directive for the composed image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundPreset {
    /// Keep the subject photo's own background and lighting
    #[default]
    Original,
    /// High-fashion runway with dramatic spotlighting
    Runway,
    /// Minimalist photography studio with soft-box lighting
    Studio,
    /// Urban street setting with natural daylight
    Urban,
    /// Luxury boutique or penthouse interior
    Luxury,
    /// Unrecognized preset; contributes no scene directive
    Unspecified,
}

impl BackgroundPreset {
    /// Resolve the preset to its scene directive
    ///
    /// `Unspecified` resolves to an empty directive by policy.
    #[must_use]
    pub fn scene_directive(self) -> &'static str {
        match self {
            Self::Original => {
                "Keep the background and lighting of the person's original image exactly the same."
            }
            Self::Runway => {
                "Place the person on a professional high-fashion runway with dramatic spotlighting."
            }
            Self::Studio => {
                "Place the person in a minimalist, professional photography studio with soft-box \
                 lighting and a clean neutral backdrop."
            }
            Self::Urban => {
                "Place the person in a trendy urban city street setting with natural daylight and \
                 realistic depth of field."
            }
            Self::Luxury => {
                "Place the person in a high-end luxury boutique or penthouse interior with elegant \
                 warm lighting."
            }
            Self::Unspecified => "",
        }
    }

    /// All known presets, in display order
    #[must_use]
    pub fn known() -> &'static [Self] {
        &[
            Self::Original,
            Self::Runway,
            Self::Studio,
            Self::Urban,
            Self::Luxury,
        ]
    }
}

impl FromStr for BackgroundPreset {
    type Err = std::convert::Infallible;

    /// Total parse: unknown names map to `Unspecified`, never an error
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "original" => Self::Original,
            "runway" => Self::Runway,
            "studio" => Self::Studio,
            "urban" => Self::Urban,
            "luxury" => Self::Luxury,
            _ => Self::Unspecified,
        })
    }
}

impl fmt::Display for BackgroundPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Original => "original",
            Self::Runway => "runway",
            Self::Studio => "studio",
            Self::Urban => "urban",
            Self::Luxury => "luxury",
            Self::Unspecified => "unspecified",
        };
        write!(f, "{name}")
    }
}
