use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

/// Evaluates every pixel on rayon's work-stealing pool, one task per row.
///
/// Results come back in row-major order, identical to
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
/// The first failing pixel aborts the whole frame.
pub fn generate_fractal_parallel_rayon<Alg>(
    resolution: Resolution,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let width = resolution.width() as i32;
    let height = resolution.height() as i32;

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| algorithm.compute(Point { x, y }))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
