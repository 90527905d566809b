use crate::core::{Normal3D, Point3D, Vector, Vector3D};
use crate::surface::SurfaceHit;

/// denominators at or below this are treated as zero
pub(super) const EPSILON: f64 = f64::MIN_POSITIVE;

/// Smallest non-negative root of `at² + bt + c = 0` whose intersection point satisfies
/// `constraint`, together with that point.
///
/// Only one root is ever tested against the constraint: the near root if it is non-negative,
/// otherwise the far root. A near root whose point fails the constraint is a miss even when the
/// far root's point would pass.
pub(super) fn quadratic(
    a: f64,
    b: f64,
    c: f64,
    eye: Point3D,
    direction: Vector3D,
    constraint: impl Fn(Point3D) -> bool,
) -> Option<(f64, Point3D)> {
    if a.abs() <= EPSILON {
        return None;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let smaller = (-b - discriminant.sqrt()) / (2.0 * a);
    let larger = (-b + discriminant.sqrt()) / (2.0 * a);

    let root = if smaller >= 0.0 {
        smaller
    } else if larger >= 0.0 {
        larger
    } else {
        return None;
    };

    let position = eye + direction * root;
    constraint(position).then(|| (root, position))
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(super) enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn component(&self, x: f64, y: f64, z: f64) -> f64 {
        match self {
            Axis::X => x,
            Axis::Y => y,
            Axis::Z => z,
        }
    }

    /// the two in-plane coordinates, in axis order
    fn others(&self, position: Point3D) -> (f64, f64) {
        match self {
            Axis::X => (position.y(), position.z()),
            Axis::Y => (position.x(), position.z()),
            Axis::Z => (position.x(), position.y()),
        }
    }

    fn outward_normal(&self, plane: f64) -> Normal3D {
        match (self, plane >= 0.0) {
            (Axis::X, true) => Normal3D::POSITIVE_X,
            (Axis::X, false) => Normal3D::NEGATIVE_X,
            (Axis::Y, true) => Normal3D::POSITIVE_Y,
            (Axis::Y, false) => Normal3D::NEGATIVE_Y,
            (Axis::Z, true) => Normal3D::POSITIVE_Z,
            (Axis::Z, false) => Normal3D::NEGATIVE_Z,
        }
    }
}

/// Intersection with the plane `axis = plane`, constrained to the 2D region `constraint`
/// (evaluated on the in-plane coordinates in axis order). Rays parallel to the plane and
/// intersections behind the eye are misses.
pub(super) fn planar(
    axis: Axis,
    plane: f64,
    eye: Point3D,
    direction: Vector3D,
    constraint: impl Fn(f64, f64) -> bool,
) -> Option<SurfaceHit> {
    let denominator = axis.component(direction.x(), direction.y(), direction.z());
    if denominator.abs() <= EPSILON {
        return None;
    }

    let t = (plane - axis.component(eye.x(), eye.y(), eye.z())) / denominator;
    if t < 0.0 {
        return None;
    }

    let position = eye + direction * t;
    let (u, v) = axis.others(position);

    constraint(u, v).then(|| SurfaceHit::new(t, axis.outward_normal(plane)))
}

pub(super) fn bounded_square(u: f64, v: f64) -> bool {
    (-0.5..=0.5).contains(&u) && (-0.5..=0.5).contains(&v)
}

pub(super) fn circular(u: f64, v: f64) -> bool {
    u * u + v * v <= 0.25
}

pub(super) fn bounded_height(position: Point3D) -> bool {
    (-0.5..=0.5).contains(&position.y())
}
