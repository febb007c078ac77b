use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

/// Evaluates every pixel on the calling thread, in row-major order.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    resolution: Resolution,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let width = resolution.width() as i32;
    let height = resolution.height() as i32;

    (0..height)
        .flat_map(|y| (0..width).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    struct IndexAlgorithm {
        width: i32,
    }

    impl FractalAlgorithm for IndexAlgorithm {
        type Success = i32;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok(pixel.y * self.width + pixel.x)
        }
    }

    struct FailOnPixel {
        pixel: Point,
    }

    impl FractalAlgorithm for FailOnPixel {
        type Success = ();
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if pixel == self.pixel {
                return Err(StubError {});
            }
            Ok(())
        }
    }

    #[test]
    fn test_serial_results_are_row_major() {
        let resolution = Resolution::new(5, 3).unwrap();

        let results = generate_fractal_serial(resolution, &IndexAlgorithm { width: 5 }).unwrap();

        assert_eq!(results, (0..15).collect::<Vec<_>>());
    }

    #[test]
    fn test_serial_covers_last_row_and_column() {
        let resolution = Resolution::new(1, 1).unwrap();

        let results = generate_fractal_serial(resolution, &IndexAlgorithm { width: 1 }).unwrap();

        assert_eq!(results, vec![0]);
    }

    #[test]
    fn test_serial_propagates_algorithm_failure() {
        let resolution = Resolution::new(4, 4).unwrap();
        let algorithm = FailOnPixel {
            pixel: Point { x: 3, y: 3 },
        };

        assert_eq!(
            generate_fractal_serial(resolution, &algorithm),
            Err(StubError {})
        );
    }
}
