use std::error::Error;

use crate::core::data::point::Point;

/// Per-pixel computation run by the frame generators.
///
/// `compute` takes `&self` and must not depend on any other pixel's result, which
/// is what lets the generators evaluate pixels in any order and on any thread.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
