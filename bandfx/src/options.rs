use serde::{Deserialize, Serialize};

use crate::Point;

/// Describes the shape of a gradient and the bands it is divided into.
///
/// The first band is the one nearest to the start (or center) of the
/// gradient, the last one is nearest to, or beyond, its end (or radius).
/// Options are not validated until a [`crate::Gradient`] is built from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GradientOptions {
    Linear {
        start: Point,
        end: Point,
        bands: Vec<String>,
    },
    Radial {
        center: Point,
        radius: i32,
        bands: Vec<String>,
    },
}

impl GradientOptions {
    pub fn linear<I, S>(start: Point, end: Point, bands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Linear {
            start,
            end,
            bands: bands.into_iter().map(Into::into).collect(),
        }
    }

    pub fn radial<I, S>(center: Point, radius: i32, bands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Radial {
            center,
            radius,
            bands: bands.into_iter().map(Into::into).collect(),
        }
    }

    pub fn bands(&self) -> &[String] {
        match self {
            Self::Linear { bands, .. } | Self::Radial { bands, .. } => bands,
        }
    }

    pub fn into_bands(self) -> Vec<String> {
        match self {
            Self::Linear { bands, .. } | Self::Radial { bands, .. } => bands,
        }
    }
}
