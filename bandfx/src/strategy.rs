use std::fmt::Debug;

use nalgebra::Vector2;

use crate::{GradientError, Point};

/// Maps points onto the index of the band they fall into.
///
/// Implementations validate their geometry on construction, after which
/// `band_index` is total: it returns a value in `0..band_count` for every
/// point.
pub trait BandingStrategy: Debug {
    fn band_index(&self, point: Point) -> usize;
}

/// Splits the segment from `start` to `end` into equally long bands,
/// measured along the segment's axis. Points projecting before `start`
/// fall into the first band, points projecting past `end` into the last.
#[derive(Debug, Clone)]
pub struct LinearBanding {
    start: Point,
    axis: Vector2<i128>,
    axis_length_squared: i128,
    band_count: usize,
}

impl LinearBanding {
    pub fn new(start: Point, end: Point, band_count: usize) -> Result<Self, GradientError> {
        check_enough_bands(band_count)?;
        check_bands_fit(band_count, start.distance(end))?;

        let axis = end.translate_to(start);
        Ok(Self {
            start,
            axis,
            axis_length_squared: axis.dot(&axis),
            band_count,
        })
    }
}

impl BandingStrategy for LinearBanding {
    fn band_index(&self, point: Point) -> usize {
        let projection = point.translate_to(self.start).dot(&self.axis);
        band_index(
            projection as f64 / self.axis_length_squared as f64,
            self.band_count,
        )
    }
}

/// Splits the disc around `center` into rings of equal width. Points outside
/// of `radius` fall into the last band.
#[derive(Debug, Clone)]
pub struct RadialBanding {
    center: Point,
    radius: i32,
    band_count: usize,
}

impl RadialBanding {
    pub fn new(center: Point, radius: i32, band_count: usize) -> Result<Self, GradientError> {
        check_enough_bands(band_count)?;
        check_bands_fit(band_count, radius as i64)?;

        Ok(Self {
            center,
            radius,
            band_count,
        })
    }
}

impl BandingStrategy for RadialBanding {
    fn band_index(&self, point: Point) -> usize {
        let distance = self.center.distance(point);
        band_index(distance as f64 / self.radius as f64, self.band_count)
    }
}

/// Turns a fractional position along a gradient into a band index.
///
/// `multiplier` is 0.0 at the start of the gradient and 1.0 at its end, but
/// may lie anywhere on the real line. The result is
/// `floor(multiplier * band_count)` clamped to `0..band_count`.
pub fn band_index(multiplier: f64, band_count: usize) -> usize {
    let last = band_count.saturating_sub(1);
    let index = (multiplier * band_count as f64).floor();
    if index <= 0.0 {
        0
    } else if index >= last as f64 {
        last
    } else {
        index as usize
    }
}

fn check_enough_bands(band_count: usize) -> Result<(), GradientError> {
    if band_count < 2 {
        return Err(GradientError::InsufficientBands { count: band_count });
    }
    Ok(())
}

fn check_bands_fit(band_count: usize, extent: i64) -> Result<(), GradientError> {
    if band_count as i64 > extent {
        return Err(GradientError::TooManyBands {
            count: band_count,
            extent,
        });
    }
    Ok(())
}
