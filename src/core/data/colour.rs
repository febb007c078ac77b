/// Normalised RGBA colour with each channel in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Colour {
    #[must_use]
    pub fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Quantises to 8 bits per channel, clamping out-of-range values.
    #[must_use]
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }
}

fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_sets_full_alpha() {
        let colour = Colour::opaque(0.1, 0.2, 0.3);
        assert_eq!(colour.a, 1.0);
    }

    #[test]
    fn test_to_rgba8_known_values() {
        assert_eq!(Colour::opaque(0.0, 0.0, 0.0).to_rgba8(), [0, 0, 0, 255]);
        assert_eq!(Colour::opaque(1.0, 1.0, 0.5).to_rgba8(), [255, 255, 128, 255]);
    }

    #[test]
    fn test_to_rgba8_clamps_out_of_range_channels() {
        let colour = Colour {
            r: -0.5,
            g: 1.5,
            b: f32::NAN,
            a: 2.0,
        };
        // NaN saturates to zero on the float to int cast
        assert_eq!(colour.to_rgba8(), [0, 255, 0, 255]);
    }
}
