use crate::core::{Matrix4D, Normal3D, Point3D, Vector, Vector3D};

mod solvers;

mod primitives;
pub use primitives::Primitive;

#[cfg(test)]
mod tests {
    mod algebra_tests;
    mod primitive_tests;
    mod solver_tests;
}

/// A world-space surface, represented as a map from a ray to its nearest intersection.
///
/// Surfaces form a small algebra: primitives can be wrapped in an affine transform, and any two
/// surfaces can be unioned into a surface that reports whichever intersection is nearer. The scene
/// adapter builds every object as `transform(ctm, primitive)`.
#[derive(Clone, Debug, PartialEq)]
pub enum ImplicitSurface {
    Primitive(Primitive),
    Transformed {
        matrix: Matrix4D,
        /// `None` when `matrix` is singular; such a surface cannot be intersected
        inverse: Option<Matrix4D>,
        inner: Box<ImplicitSurface>,
    },
    Union(Box<ImplicitSurface>, Box<ImplicitSurface>),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceHit {
    /// distance along the ray direction; always finite and non-negative
    pub t: f64,
    /// unit outward surface normal, in the same space as the query ray
    pub normal: Normal3D,
}

impl SurfaceHit {
    pub(crate) fn new(t: f64, normal: Normal3D) -> Self {
        SurfaceHit { t, normal }
    }

    /// the nearer of two candidate intersections; ties resolve to the first
    pub(crate) fn nearer(lhs: Option<SurfaceHit>, rhs: Option<SurfaceHit>) -> Option<SurfaceHit> {
        match (lhs, rhs) {
            (Some(near), Some(far)) => Some(if far.t < near.t { far } else { near }),
            (hit, None) => hit,
            (None, hit) => hit,
        }
    }
}

impl ImplicitSurface {
    pub fn sphere() -> Self {
        ImplicitSurface::Primitive(Primitive::Sphere)
    }

    pub fn cube() -> Self {
        ImplicitSurface::Primitive(Primitive::Cube)
    }

    pub fn cylinder() -> Self {
        ImplicitSurface::Primitive(Primitive::Cylinder)
    }

    pub fn cone() -> Self {
        ImplicitSurface::Primitive(Primitive::Cone)
    }

    pub fn union(self, other: ImplicitSurface) -> Self {
        ImplicitSurface::Union(Box::new(self), Box::new(other))
    }

    /// Wraps the surface in an affine transform. Rays are pulled back into the inner space by the
    /// inverse; normals are pushed forward by the inverse transpose and renormalised.
    ///
    /// Transforming an already-transformed surface folds both into a single node.
    pub fn transformed(self, matrix: Matrix4D) -> Self {
        match self {
            ImplicitSurface::Transformed {
                matrix: inner_matrix,
                inner,
                ..
            } => (*inner).transformed(matrix * inner_matrix),
            inner => ImplicitSurface::Transformed {
                matrix,
                inverse: matrix.inverse(),
                inner: Box::new(inner),
            },
        }
    }

    /// The nearest intersection of the ray `(eye, direction)` with this surface, or `None` if the
    /// ray misses. `direction` need not be normalised; `t` is in units of its length.
    pub fn hit(&self, eye: Point3D, direction: Vector3D) -> Option<SurfaceHit> {
        match self {
            ImplicitSurface::Primitive(primitive) => primitive.hit(eye, direction),
            ImplicitSurface::Transformed { inverse, inner, .. } => {
                let inverse = inverse.as_ref()?;

                let (x, y, z, _) = inverse * eye;
                let inner_eye = Point3D::new(x, y, z);

                let (x, y, z, _) = inverse * direction;
                let inner_direction = Vector3D::new(x, y, z);

                let hit = inner.hit(inner_eye, inner_direction)?;

                let (x, y, z, _) = &inverse.transpose() * Vector3D::from(hit.normal);
                Some(SurfaceHit::new(hit.t, Vector3D::new(x, y, z).normalised()))
            }
            ImplicitSurface::Union(lhs, rhs) => SurfaceHit::nearer(
                lhs.hit(eye, direction),
                rhs.hit(eye, direction),
            ),
        }
    }
}
