use crate::core::{Colour, Normal3D, Point3D, Vector};

/// A light source, queryable from any surface position.
#[derive(Clone, Debug, PartialEq)]
pub enum Light {
    Point {
        position: Point3D,
        colour: Colour,
        /// constant, linear, and quadratic attenuation coefficients
        attenuation: [f64; 3],
    },
    Directional {
        direction: Normal3D,
        colour: Colour,
    },
    Spot {
        position: Point3D,
        axis: Normal3D,
        /// full cone angle, in radians
        angle: f64,
        /// width of the falloff band inside `angle`, in radians; 0 ≤ penumbra ≤ angle
        penumbra: f64,
        colour: Colour,
        attenuation: [f64; 3],
    },
}

/// What a surface position sees of a light: how far away it is, the unit direction light travels
/// to reach the position, and the colour after attenuation and falloff.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightSample {
    pub distance: f64,
    pub direction: Normal3D,
    pub colour: Colour,
}

impl Light {
    pub fn point(position: Point3D, colour: Colour, attenuation: [f64; 3]) -> Self {
        Light::Point {
            position,
            colour,
            attenuation,
        }
    }

    pub fn directional(direction: Normal3D, colour: Colour) -> Self {
        Light::Directional { direction, colour }
    }

    pub fn spot(
        position: Point3D,
        axis: Normal3D,
        angle: f64,
        penumbra: f64,
        colour: Colour,
        attenuation: [f64; 3],
    ) -> Self {
        Light::Spot {
            position,
            axis,
            angle,
            penumbra,
            colour,
            attenuation,
        }
    }

    pub fn sample_at(&self, surface: Point3D) -> LightSample {
        match self {
            Light::Point {
                position,
                colour,
                attenuation,
            } => {
                let displacement = surface - *position;
                let distance = displacement.magnitude();

                LightSample {
                    distance,
                    direction: displacement.normalised(),
                    colour: *colour * attenuate(*attenuation, distance),
                }
            }
            Light::Directional { direction, colour } => LightSample {
                distance: f64::INFINITY,
                direction: *direction,
                colour: *colour,
            },
            Light::Spot {
                position,
                axis,
                angle,
                penumbra,
                colour,
                attenuation,
            } => {
                let displacement = surface - *position;
                let distance = displacement.magnitude();
                let direction = displacement.normalised();

                let phi = direction.dot(*axis).clamp(-1.0, 1.0).acos();
                let umbra = angle - penumbra;

                let colour = if phi > *angle {
                    Colour::BLACK
                } else {
                    let attenuated = *colour * attenuate(*attenuation, distance);

                    if phi <= umbra {
                        attenuated
                    } else {
                        let alpha = (phi - umbra) / penumbra;
                        let falloff = -2.0 * alpha.powi(3) + 3.0 * alpha.powi(2);
                        attenuated * (1.0 - falloff)
                    }
                };

                LightSample {
                    distance,
                    direction,
                    colour,
                }
            }
        }
    }
}

fn attenuate(coefficients: [f64; 3], distance: f64) -> f64 {
    let [constant, linear, quadratic] = coefficients;

    (1.0 / (constant + linear * distance + quadratic * distance * distance)).min(1.0)
}
