//! Blob membrane outline
//!
//! The deformable shape that visually tethers the drag bubble to its anchor
//! while the two are connected: two tangent points on each circle, joined by
//! quadratic curves that share a single control point at the midpoint of the
//! center line. The waist narrows as the circles separate and as the anchor
//! shrinks, pinching off toward two disjoint contours as the anchor radius
//! approaches zero.

use crate::path::{Path, PathBuilder};
use crate::primitives::Circle;

/// Build the closed membrane outline between the anchor and drag circles.
///
/// Returns `None` when the two centers coincide: the tangent direction is
/// undefined there, and the right rendering is just the circles themselves.
pub fn membrane_path(anchor: Circle, drag: Circle) -> Option<Path> {
    let dist = anchor.center.distance_to(drag.center);
    if dist < f32::EPSILON {
        tracing::trace!("coincident centers, no membrane");
        return None;
    }

    // Unit direction of the center line.
    let cos_theta = (drag.center.x - anchor.center.x) / dist;
    let sin_theta = (drag.center.y - anchor.center.y) / dist;

    // Both curves bend through the midpoint of the center line.
    let control = anchor.center.midpoint(drag.center);

    // Tangent points, offset perpendicular to the center line by each
    // circle's radius: A/D on the anchor, B/C on the drag bubble.
    let ax = anchor.center.x - anchor.radius * sin_theta;
    let ay = anchor.center.y + anchor.radius * cos_theta;
    let bx = drag.center.x - drag.radius * sin_theta;
    let by = drag.center.y + drag.radius * cos_theta;
    let cx = drag.center.x + drag.radius * sin_theta;
    let cy = drag.center.y - drag.radius * cos_theta;
    let dx = anchor.center.x + anchor.radius * sin_theta;
    let dy = anchor.center.y - anchor.radius * cos_theta;

    let path = PathBuilder::new()
        .move_to(ax, ay)
        .quad_to(control.x, control.y, bx, by)
        .line_to(cx, cy)
        .quad_to(control.x, control.y, dx, dy)
        .close()
        .build();

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{PathCommand, Point};

    #[test]
    fn test_horizontal_membrane_tangent_points() {
        let anchor = Circle::new(Point::new(0.0, 0.0), 10.0);
        let drag = Circle::new(Point::new(100.0, 0.0), 10.0);

        let path = membrane_path(anchor, drag).unwrap();
        let commands = path.commands();
        assert_eq!(commands.len(), 5);

        // cos = 1, sin = 0: tangent points sit straight above/below centers
        assert_eq!(commands[0], PathCommand::MoveTo(Point::new(0.0, 10.0)));
        assert_eq!(
            commands[1],
            PathCommand::QuadTo {
                control: Point::new(50.0, 0.0),
                end: Point::new(100.0, 10.0),
            }
        );
        assert_eq!(commands[2], PathCommand::LineTo(Point::new(100.0, -10.0)));
        assert_eq!(
            commands[3],
            PathCommand::QuadTo {
                control: Point::new(50.0, 0.0),
                end: Point::new(0.0, -10.0),
            }
        );
        assert_eq!(commands[4], PathCommand::Close);
    }

    #[test]
    fn test_control_point_is_midpoint_for_any_direction() {
        let anchor = Circle::new(Point::new(10.0, 20.0), 8.0);
        let drag = Circle::new(Point::new(70.0, 100.0), 8.0);

        let path = membrane_path(anchor, drag).unwrap();
        let mid = Point::new(40.0, 60.0);

        for command in path.commands() {
            if let PathCommand::QuadTo { control, .. } = command {
                assert_eq!(*control, mid);
            }
        }
    }

    #[test]
    fn test_zero_anchor_radius_pinches_to_center() {
        let anchor = Circle::new(Point::new(0.0, 0.0), 0.0);
        let drag = Circle::new(Point::new(50.0, 0.0), 10.0);

        let path = membrane_path(anchor, drag).unwrap();
        let commands = path.commands();

        // Both anchor-side tangent points collapse onto the anchor center,
        // so the outline degenerates without self-intersecting.
        assert_eq!(commands[0], PathCommand::MoveTo(Point::ZERO));
        assert!(matches!(
            commands[3],
            PathCommand::QuadTo { end, .. } if end == Point::ZERO
        ));
    }

    #[test]
    fn test_coincident_centers_yield_no_membrane() {
        let center = Point::new(5.0, 5.0);
        let anchor = Circle::new(center, 10.0);
        let drag = Circle::new(center, 10.0);

        assert!(membrane_path(anchor, drag).is_none());
    }
}
