//! Paint style bag and bitmap shaders.

use crate::bitmap::Bitmap;
use crate::color::Color;

/// How a shader samples outside `[0, extent)` along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileMode {
    /// Repeat the edge pixel.
    #[default]
    Clamp,
    /// Wrap around.
    Repeat,
    /// Reflect at each edge.
    Mirror,
}

impl TileMode {
    /// Map an integer texel coordinate into `[0, extent)`.
    pub fn apply(self, coord: i64, extent: u32) -> u32 {
        let n = i64::from(extent.max(1));
        let mapped = match self {
            TileMode::Clamp => coord.clamp(0, n - 1),
            TileMode::Repeat => coord.rem_euclid(n),
            TileMode::Mirror => {
                let period = coord.rem_euclid(2 * n);
                if period < n { period } else { 2 * n - 1 - period }
            }
        };
        mapped as u32
    }
}

/// Source of color for mesh rasterization.
#[derive(Debug, Clone)]
pub enum Shader {
    /// Sample a bitmap in its own pixel space (texture coordinates are
    /// bitmap pixels, not normalized).
    Bitmap {
        bitmap: Bitmap,
        tile_x: TileMode,
        tile_y: TileMode,
    },
}

impl Shader {
    /// A bitmap shader clamped on both axes.
    pub fn clamped_bitmap(bitmap: &Bitmap) -> Self {
        Shader::Bitmap {
            bitmap: bitmap.clone(),
            tile_x: TileMode::Clamp,
            tile_y: TileMode::Clamp,
        }
    }
}

/// Opaque style bag accompanying every draw call.
#[derive(Debug, Clone)]
pub struct Paint {
    /// Base color; its alpha modulates bitmap draws.
    pub color: Color,
    /// Filtering hint for bitmap sampling. Backends may ignore it.
    pub filter: bool,
    pub shader: Option<Shader>,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            filter: false,
            shader: None,
        }
    }
}

impl Paint {
    pub fn alpha(&self) -> u8 {
        self.color.a
    }

    /// Copy of this paint with its shader replaced.
    pub fn with_shader(&self, shader: Shader) -> Self {
        Self {
            shader: Some(shader),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pins_to_edges() {
        assert_eq!(TileMode::Clamp.apply(-5, 10), 0);
        assert_eq!(TileMode::Clamp.apply(4, 10), 4);
        assert_eq!(TileMode::Clamp.apply(42, 10), 9);
    }

    #[test]
    fn repeat_wraps() {
        assert_eq!(TileMode::Repeat.apply(-1, 10), 9);
        assert_eq!(TileMode::Repeat.apply(23, 10), 3);
    }

    #[test]
    fn mirror_reflects() {
        assert_eq!(TileMode::Mirror.apply(10, 10), 9);
        assert_eq!(TileMode::Mirror.apply(11, 10), 8);
        assert_eq!(TileMode::Mirror.apply(-1, 10), 0);
        assert_eq!(TileMode::Mirror.apply(20, 10), 0);
    }

    #[test]
    fn with_shader_keeps_style() {
        let paint = Paint {
            color: Color::rgba(1, 2, 3, 128),
            filter: true,
            shader: None,
        };
        let bm = Bitmap::solid(2, 2, Color::WHITE);
        let shaded = paint.with_shader(Shader::clamped_bitmap(&bm));
        assert_eq!(shaded.color, paint.color);
        assert!(shaded.filter);
        assert!(paint.shader.is_none());
        match shaded.shader {
            Some(Shader::Bitmap { tile_x, tile_y, .. }) => {
                assert_eq!(tile_x, TileMode::Clamp);
                assert_eq!(tile_y, TileMode::Clamp);
            }
            None => panic!("expected bitmap shader"),
        }
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn arb_mode() -> impl Strategy<Value = TileMode> {
            prop_oneof![
                Just(TileMode::Clamp),
                Just(TileMode::Repeat),
                Just(TileMode::Mirror),
            ]
        }

        proptest! {
            #[test]
            fn apply_stays_inside_extent(
                mode in arb_mode(),
                coord in -100_000i64..100_000,
                extent in 1u32..5000,
            ) {
                prop_assert!(mode.apply(coord, extent) < extent);
            }

            #[test]
            fn apply_is_identity_inside_extent(
                mode in arb_mode(),
                (extent, coord) in (1u32..5000).prop_flat_map(|e| (Just(e), 0..i64::from(e))),
            ) {
                prop_assert_eq!(i64::from(mode.apply(coord, extent)), coord);
            }
        }
    }
}
