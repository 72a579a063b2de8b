//! Coordinate conversion between grid rects and wry rects.

use panegrid_common::Rect;

// =============================================================================
// COORDINATE CONVERSION
// =============================================================================

/// Convert a grid `Rect` (f64 logical coords) to a wry `Rect`.
pub fn grid_rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(
            rect.width.max(0.0),
            rect.height.max(0.0),
        )),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_rect_converts_to_wry_rect() {
        let wry_rect = grid_rect_to_wry(&Rect::new(100.0, 50.0, 500.0, 300.0));

        match wry_rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.x - 100.0).abs() < f64::EPSILON);
                assert!((pos.y - 50.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }

        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 500.0).abs() < f64::EPSILON);
                assert!((size.height - 300.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }

    #[test]
    fn negative_sizes_clamp_to_zero() {
        let wry_rect = grid_rect_to_wry(&Rect::new(0.0, 0.0, -10.0, -1.0));
        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert_eq!(size.width, 0.0);
                assert_eq!(size.height, 0.0);
            }
            _ => panic!("Expected logical size"),
        }
    }
}
