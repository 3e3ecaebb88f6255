use crate::transform::Transform;
use druid::Data;

/// Axis-aligned rectangle in either model or world space
#[derive(Clone, Copy, PartialEq, Debug, Data)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Rect {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Visible world rectangle for an orthographic view:
    /// X in [-aspect, +aspect], Y in [-1, +1].
    pub fn view_bounds(aspect: f64) -> Self {
        Rect::new(-aspect, -1.0, aspect, 1.0)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// The four corners, counterclockwise from the minimum corner
    pub fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.min_x, self.min_y),
            (self.max_x, self.min_y),
            (self.max_x, self.max_y),
            (self.min_x, self.max_y),
        ]
    }
}

/// Transforms the corners of `model_box` and returns the axis-aligned
/// box over the results. For a rotated box this is the conservative
/// enclosing AABB, not a tight rotated rectangle.
pub fn compute_world_aabb(model_box: Rect, t: Transform) -> Rect {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for (x, y) in model_box.corners() {
        let (xw, yw) = t.apply(x, y);
        min_x = min_x.min(xw);
        max_x = max_x.max(xw);
        min_y = min_y.min(yw);
        max_y = max_y.max(yw);
    }

    Rect::new(min_x, min_y, max_x, max_y)
}

/// Adjusts the translation so the transformed box sits inside `view`.
/// Scale and rotation are left untouched; re-clamping a transform that
/// already fits is a no-op.
///
/// When the box spans both edges of an axis, both corrections apply
/// and their sum can overcorrect in the narrow direction; a box wider
/// than the view is not guaranteed to end up inside it.
pub fn clamp_translation(model_box: Rect, t: Transform, view: Rect) -> Transform {
    let world = compute_world_aabb(model_box, t);

    let mut dx = 0.0;
    let mut dy = 0.0;

    if world.min_x < view.min_x {
        dx += view.min_x - world.min_x;
    }
    if world.max_x > view.max_x {
        dx += view.max_x - world.max_x;
    }
    if world.min_y < view.min_y {
        dy += view.min_y - world.min_y;
    }
    if world.max_y > view.max_y {
        dy += view.max_y - world.max_y;
    }

    Transform {
        tx: t.tx + dx,
        ty: t.ty + dy,
        ..t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_rect_eq(a: Rect, b: Rect) {
        assert!((a.min_x - b.min_x).abs() < EPS, "{:?} != {:?}", a, b);
        assert!((a.min_y - b.min_y).abs() < EPS, "{:?} != {:?}", a, b);
        assert!((a.max_x - b.max_x).abs() < EPS, "{:?} != {:?}", a, b);
        assert!((a.max_y - b.max_y).abs() < EPS, "{:?} != {:?}", a, b);
    }

    fn identity() -> Transform {
        Transform {
            scale: 1.0,
            angle_deg: 0.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    #[test]
    fn identity_transform_returns_model_box() {
        let model = Rect::new(-0.5, 0.0, 1.5, 1.0);
        assert_rect_eq(compute_world_aabb(model, identity()), model);
    }

    #[test]
    fn rotate_there_and_back_recovers_box() {
        let model = Rect::new(0.0, 0.0, 2.0, 1.0);
        for step in 0..72 {
            let angle = step as f64 * 5.0;
            let fwd = Transform {
                angle_deg: angle,
                ..identity()
            };
            let back = Transform {
                angle_deg: -angle,
                ..identity()
            };
            // composing the rotation with its inverse on each corner
            // is the identity, so the AABB matches the input box
            let mut min_x = f64::INFINITY;
            let mut min_y = f64::INFINITY;
            let mut max_x = f64::NEG_INFINITY;
            let mut max_y = f64::NEG_INFINITY;
            for (x, y) in model.corners() {
                let (xr, yr) = fwd.apply(x, y);
                let (xb, yb) = back.apply(xr, yr);
                min_x = min_x.min(xb);
                max_x = max_x.max(xb);
                min_y = min_y.min(yb);
                max_y = max_y.max(yb);
            }
            assert_rect_eq(Rect::new(min_x, min_y, max_x, max_y), model);
        }
    }

    #[test]
    fn rotated_box_aabb_is_conservative() {
        // unit square rotated 45 degrees has an AABB sqrt(2) wide
        let model = Rect::new(-0.5, -0.5, 0.5, 0.5);
        let t = Transform {
            angle_deg: 45.0,
            ..identity()
        };
        let world = compute_world_aabb(model, t);
        let half = std::f64::consts::SQRT_2 / 2.0;
        assert_rect_eq(world, Rect::new(-half, -half, half, half));
    }

    #[test]
    fn clamp_keeps_fitting_boxes_inside_view() {
        let model = Rect::new(0.0, 0.0, 2.0, 1.0);
        let view = Rect::view_bounds(1.5);
        for step in 0..24 {
            let t = Transform {
                scale: 0.5,
                angle_deg: step as f64 * 15.0,
                tx: 5.0,
                ty: -5.0,
            };
            let clamped = clamp_translation(model, t, view);
            let world = compute_world_aabb(model, clamped);
            // the scaled box fits the view at every angle, so full
            // containment must be reachable
            assert!(world.width() <= view.width() + EPS);
            assert!(world.height() <= view.height() + EPS);
            assert!(world.min_x >= view.min_x - EPS);
            assert!(world.max_x <= view.max_x + EPS);
            assert!(world.min_y >= view.min_y - EPS);
            assert!(world.max_y <= view.max_y + EPS);
        }
    }

    #[test]
    fn clamp_is_idempotent_for_fitting_boxes() {
        let model = Rect::new(0.0, 0.0, 2.0, 1.0);
        let view = Rect::view_bounds(1.5);
        let t = Transform {
            scale: 0.5,
            angle_deg: 30.0,
            tx: -4.0,
            ty: 2.5,
        };
        let once = clamp_translation(model, t, view);
        let twice = clamp_translation(model, once, view);
        assert!((once.tx - twice.tx).abs() < EPS);
        assert!((once.ty - twice.ty).abs() < EPS);
    }

    #[test]
    fn clamp_leaves_scale_and_rotation_alone() {
        let model = Rect::new(0.0, 0.0, 2.0, 1.0);
        let view = Rect::view_bounds(1.0);
        let t = Transform {
            scale: 0.5,
            angle_deg: 80.0,
            tx: 9.0,
            ty: -9.0,
        };
        let clamped = clamp_translation(model, t, view);
        assert_eq!(clamped.scale, t.scale);
        assert_eq!(clamped.angle_deg, t.angle_deg);
    }

    #[test]
    fn exact_fit_box_shifts_to_view_edge() {
        // model {0,0,2,1} in view {-1,-1,1,1}: only the right edge is
        // out (max_x 2 > 1), so the correction is -1 and the box ends
        // up spanning the view exactly
        let model = Rect::new(0.0, 0.0, 2.0, 1.0);
        let view = Rect::new(-1.0, -1.0, 1.0, 1.0);
        let clamped = clamp_translation(model, identity(), view);
        assert!((clamped.tx + 1.0).abs() < EPS);
        assert!(clamped.ty.abs() < EPS);

        let world = compute_world_aabb(model, clamped);
        assert_rect_eq(world, Rect::new(-1.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn oversized_box_gets_both_corrections_summed() {
        // Known behavior, preserved on purpose: a box violating both
        // edges of an axis sums both corrections. A symmetric
        // oversized box therefore nets zero and stays out of bounds.
        let model = Rect::new(-3.0, 0.0, 3.0, 1.0);
        let view = Rect::new(-1.0, -1.0, 1.0, 1.0);
        let clamped = clamp_translation(model, identity(), view);
        // dx = (view.min - world.min) + (view.max - world.max) = 2 + (-2) = 0
        assert!(clamped.tx.abs() < EPS);

        // an off-center oversized box collects the net of the two
        let model = Rect::new(-2.0, 0.0, 4.0, 1.0);
        let clamped = clamp_translation(model, identity(), view);
        // dx = (-1 - -2) + (1 - 4) = 1 - 3 = -2
        assert!((clamped.tx + 2.0).abs() < EPS);
    }
}
