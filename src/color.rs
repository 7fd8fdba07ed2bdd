//! Maps an escape count onto an RGB triple.  The palette is three
//! independent nonlinear rescales of the same scalar, one per channel,
//! kept bit-for-bit compatible with the renderer this one replaces.
use planes::map_to_range;

/// Given the iteration count of one pixel and the render's iteration
/// cap, produce its color.  The count is first rescaled onto 0..255;
/// interior points (count == cap) and faint near-boundary points
/// (rescaled value below 20) are both forced to black, which marks the
/// set itself and suppresses low-contrast speckle around it.  Red rises
/// quadratically, green linearly, blue with the square root, so the
/// three channels peak at different speeds.  Channels truncate to u8.
pub fn color_of(iters: usize, limit: usize) -> [u8; 3] {
    let mut col = map_to_range(iters as f64, 0.0, limit as f64, 0.0, 255.0);
    if iters == limit || col < 20.0 {
        col = 0.0;
    }
    let red = map_to_range(col * col, 0.0, 255.0 * 255.0, 0.0, 255.0);
    let green = map_to_range(col / 2.0, 0.0, 127.5, 0.0, 255.0);
    let blue = map_to_range(col.sqrt(), 0.0, (255.0_f64).sqrt(), 0.0, 255.0);
    [red as u8, green as u8, blue as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_points_are_black() {
        assert_eq!(color_of(200, 200), [0, 0, 0]);
        assert_eq!(color_of(500, 500), [0, 0, 0]);
    }

    #[test]
    fn faint_points_are_suppressed_to_black() {
        // With a cap of 200 a count of 15 rescales to 19.125, just
        // under the threshold; 16 rescales to 20.4, just over it.
        assert_eq!(color_of(0, 200), [0, 0, 0]);
        assert_eq!(color_of(15, 200), [0, 0, 0]);
        assert_ne!(color_of(16, 200), [0, 0, 0]);
    }

    #[test]
    fn channels_follow_their_own_curves() {
        // A cap of 255 makes the rescale an identity, so a count of 100
        // gives col = 100: red 100²/255 = 39.2, green exactly 100, blue
        // √100·√255 = 159.7.
        assert_eq!(color_of(100, 255), [39, 100, 159]);
    }

    #[test]
    fn just_above_the_suppression_threshold() {
        // col = 20.4: red truncates to 1, green to 20, blue to 72.
        assert_eq!(color_of(16, 200), [1, 20, 72]);
    }
}
