use log::debug;

use crate::strategy::{BandingStrategy, LinearBanding, RadialBanding};
use crate::{GradientError, GradientOptions, Point};

/// A validated gradient, ready to be queried for the band of any point.
///
/// Queries do not mutate the gradient, so a single instance can be shared
/// between threads.
#[derive(Debug)]
pub struct Gradient {
    bands: Vec<String>,
    strategy: Box<dyn BandingStrategy + Send + Sync>,
}

impl Gradient {
    pub fn new(options: GradientOptions) -> Result<Self, GradientError> {
        let band_count = options.bands().len();
        let strategy: Box<dyn BandingStrategy + Send + Sync> = match &options {
            GradientOptions::Linear { start, end, .. } => {
                Box::new(LinearBanding::new(*start, *end, band_count)?)
            }
            GradientOptions::Radial { center, radius, .. } => {
                Box::new(RadialBanding::new(*center, *radius, band_count)?)
            }
        };
        let bands = options.into_bands();
        debug!("Built gradient with {} bands: {:?}", bands.len(), strategy);

        Ok(Self { bands, strategy })
    }

    /// Returns the label of the band the point `(x, y)` falls into.
    pub fn get_band(&self, x: i32, y: i32) -> &str {
        &self.bands[self.band_index(x, y)]
    }

    /// Returns the index of the band the point `(x, y)` falls into. The index
    /// is always a valid index into [`Gradient::bands`].
    pub fn band_index(&self, x: i32, y: i32) -> usize {
        self.strategy.band_index(Point::new(x, y))
    }

    pub fn bands(&self) -> &[String] {
        &self.bands
    }
}

impl TryFrom<GradientOptions> for Gradient {
    type Error = GradientError;

    fn try_from(options: GradientOptions) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}
