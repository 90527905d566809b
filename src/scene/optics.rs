//! Directions and weights at a surface interface: mirror reflection, Snell refraction, and the
//! Fresnel equations deciding how much radiance each branch carries.

use crate::core::{Normal3D, Vector};

/// Secondary-ray origins are displaced this far along their direction to avoid re-intersecting
/// the surface they originate from.
pub const SELF_INTERSECT_DISPLACEMENT: f64 = 1e-3;

/// Mirror reflection of `incoming` about `normal`.
pub fn reflect(incoming: Normal3D, normal: Normal3D) -> Normal3D {
    (incoming + normal * (2.0 * normal.dot(-incoming))).normalised()
}

/// Refraction of `incoming` through an interface with normal `normal` and refractive-index ratio
/// `eta`, or `None` under total internal reflection.
///
/// `normal` must oppose `incoming` (the caller flips it when the ray exits the medium).
pub fn refract(incoming: Normal3D, normal: Normal3D, eta: f64) -> Option<Normal3D> {
    let cos_theta1 = -normal.dot(incoming);
    let discriminant = 1.0 - eta * eta * (1.0 - cos_theta1 * cos_theta1);

    if discriminant < 0.0 {
        return None;
    }

    Some(
        (incoming * eta + normal * (eta * cos_theta1 - discriminant.sqrt())).normalised(),
    )
}

/// Fraction of incident radiance reflected at a dielectric interface, by the full (unpolarised)
/// Fresnel equations. Returns 1 under total internal reflection.
pub fn fresnel_reflectance(incoming: Normal3D, normal: Normal3D, ior: f64) -> f64 {
    let cos_i = incoming.dot(normal);

    let (eta1, eta2) = if cos_i > 0.0 { (1.0, ior) } else { (ior, 1.0) };

    let sin_t = eta2 / eta1 * (1.0 - cos_i * cos_i).max(0.0).sqrt();
    if sin_t >= 1.0 {
        return 1.0;
    }

    let cos_t = (1.0 - sin_t * sin_t).max(0.0).sqrt();
    let r_s = (eta1 * cos_i.abs() - eta2 * cos_t) / (eta1 * cos_i.abs() + eta2 * cos_t);
    let r_p = (eta2 * cos_i.abs() - eta1 * cos_t) / (eta2 * cos_i.abs() + eta1 * cos_t);

    (r_s * r_s + r_p * r_p) / 2.0
}
