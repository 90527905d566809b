use crate::core::{Point3D, Vector, Vector3D};
use crate::surface::solvers::{self, Axis};
use crate::surface::SurfaceHit;

/// The standard object-space primitives: unit-sized, centred on the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    /// radius 0.5
    Sphere,
    /// axis-aligned, spanning [-0.5, 0.5] on every axis
    Cube,
    /// radius 0.5, height 1, centred on the y axis, capped at y = ±0.5
    Cylinder,
    /// apex at y = 0.5, base of radius 0.5 at y = -0.5, centred on the y axis
    Cone,
}

impl Primitive {
    pub(super) fn hit(&self, eye: Point3D, direction: Vector3D) -> Option<SurfaceHit> {
        match self {
            Primitive::Sphere => sphere(eye, direction),
            Primitive::Cube => cube(eye, direction),
            Primitive::Cylinder => cylinder(eye, direction),
            Primitive::Cone => cone(eye, direction),
        }
    }
}

fn sphere(eye: Point3D, direction: Vector3D) -> Option<SurfaceHit> {
    let centre_to_eye = eye - Point3D::ORIGIN;

    let a = direction.dot(direction);
    let b = 2.0 * direction.dot(centre_to_eye);
    let c = centre_to_eye.dot(centre_to_eye) - 0.25;

    solvers::quadratic(a, b, c, eye, direction, |_| true)
        .map(|(t, position)| SurfaceHit::new(t, (position - Point3D::ORIGIN).normalised()))
}

fn cube(eye: Point3D, direction: Vector3D) -> Option<SurfaceHit> {
    let face = |axis, plane| solvers::planar(axis, plane, eye, direction, solvers::bounded_square);

    [
        face(Axis::X, -0.5),
        face(Axis::X, 0.5),
        face(Axis::Y, 0.5),
        face(Axis::Y, -0.5),
        face(Axis::Z, 0.5),
        face(Axis::Z, -0.5),
    ]
    .into_iter()
    .fold(None, SurfaceHit::nearer)
}

fn cylinder(eye: Point3D, direction: Vector3D) -> Option<SurfaceHit> {
    let a = direction.x().powi(2) + direction.z().powi(2);
    let b = 2.0 * (direction.x() * eye.x() + direction.z() * eye.z());
    let c = eye.x().powi(2) + eye.z().powi(2) - 0.25;

    let side = solvers::quadratic(a, b, c, eye, direction, solvers::bounded_height).map(
        |(t, position)| {
            SurfaceHit::new(
                t,
                Vector3D::new(position.x(), 0.0, position.z()).normalised(),
            )
        },
    );

    let cap = |plane| solvers::planar(Axis::Y, plane, eye, direction, solvers::circular);

    SurfaceHit::nearer(SurfaceHit::nearer(side, cap(0.5)), cap(-0.5))
}

fn cone(eye: Point3D, direction: Vector3D) -> Option<SurfaceHit> {
    let a = direction.x().powi(2) + direction.z().powi(2) - 0.25 * direction.y().powi(2);
    let b = 2.0 * (direction.x() * eye.x() + direction.z() * eye.z())
        - 0.5 * direction.y() * eye.y()
        + 0.25 * direction.y();
    let c = eye.x().powi(2) + eye.z().powi(2) - 0.25 * eye.y().powi(2) + 0.25 * eye.y() - 0.0625;

    let side = solvers::quadratic(a, b, c, eye, direction, solvers::bounded_height).map(
        |(t, position)| {
            SurfaceHit::new(
                t,
                Vector3D::new(2.0 * position.x(), 0.25 - 0.5 * position.y(), 2.0 * position.z())
                    .normalised(),
            )
        },
    );

    let base = solvers::planar(Axis::Y, -0.5, eye, direction, solvers::circular);

    SurfaceHit::nearer(side, base)
}
