//! Zoom factor policy.

use panegrid_common::Size;

pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 3.0;
/// Changes at or below this are not sent to the surface.
pub const ZOOM_EPSILON: f64 = 0.01;

const NORMAL_MODE_SCALE: f64 = 0.8;
const FULLSCREEN_LOCAL_WEIGHT: f64 = 0.3;
const FULLSCREEN_SCREEN_WEIGHT: f64 = 0.7;

fn fit_ratio(size: Size, reference: Size) -> f64 {
    (size.width / reference.width).min(size.height / reference.height)
}

/// Zoom factor for a pane of `size` against `reference`.
///
/// Fullscreen blends the local ratio with the physical screen's ratio
/// when the screen size is known; normal mode scales down by 0.8. An
/// empty pane or reference yields 1.0.
pub fn optimal_zoom_factor(
    size: Size,
    reference: Size,
    fullscreen: bool,
    screen: Option<Size>,
) -> f64 {
    if size.is_empty() || reference.is_empty() {
        return 1.0;
    }
    let mut factor = fit_ratio(size, reference);
    if fullscreen {
        if let Some(screen) = screen.filter(|s| !s.is_empty()) {
            factor = factor * FULLSCREEN_LOCAL_WEIGHT
                + fit_ratio(screen, reference) * FULLSCREEN_SCREEN_WEIGHT;
        }
    } else {
        factor *= NORMAL_MODE_SCALE;
    }
    factor.clamp(MIN_ZOOM, MAX_ZOOM)
}

pub fn differs_noticeably(current: f64, next: f64) -> bool {
    (next - current).abs() > ZOOM_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: Size = Size {
        width: 1920.0,
        height: 1080.0,
    };

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn normal_mode_uses_min_ratio_scaled_down() {
        // 500x300: width ratio 0.2604, height ratio 0.2777 -> 0.2604 * 0.8 -> clamped
        let z = optimal_zoom_factor(Size::new(500.0, 300.0), REFERENCE, false, None);
        assert!(close(z, MIN_ZOOM));

        let z = optimal_zoom_factor(Size::new(1920.0, 1080.0), REFERENCE, false, None);
        assert!(close(z, 0.8));
    }

    #[test]
    fn fullscreen_blends_with_screen_ratio() {
        let screen = Size::new(3840.0, 2160.0);
        let z = optimal_zoom_factor(Size::new(1920.0, 1080.0), REFERENCE, true, Some(screen));
        assert!(close(z, 1.0 * 0.3 + 2.0 * 0.7));
    }

    #[test]
    fn fullscreen_without_screen_uses_local_ratio() {
        let z = optimal_zoom_factor(Size::new(960.0, 1080.0), REFERENCE, true, None);
        assert!(close(z, 0.5));
    }

    #[test]
    fn result_is_clamped() {
        let huge = Size::new(20_000.0, 20_000.0);
        assert!(close(optimal_zoom_factor(huge, REFERENCE, true, Some(huge)), MAX_ZOOM));
    }

    #[test]
    fn empty_size_is_identity() {
        assert!(close(optimal_zoom_factor(Size::default(), REFERENCE, false, None), 1.0));
    }

    #[test]
    fn epsilon_suppresses_tiny_changes() {
        assert!(!differs_noticeably(0.8, 0.805));
        assert!(differs_noticeably(0.8, 0.82));
    }
}
