use crate::core::{Colour, Normal3D, Point3D, Vector, Vector3D};
use crate::scene::optics::{self, SELF_INTERSECT_DISPLACEMENT};
use crate::scene::{Light, LightSample, Material};
use crate::surface::{ImplicitSurface, SurfaceHit};

/// A renderable surface paired with its material.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    pub surface: ImplicitSurface,
    pub material: Material,
}

impl Object {
    pub fn new(surface: ImplicitSurface, material: Material) -> Self {
        Object { surface, material }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorldSettings {
    /// Max number of rays traced along any reflection/refraction chain, counting the primary ray.
    /// Higher values produce more accurate results, but increase rendering time
    pub recursion_depth: u8,
    /// global ambient coefficient
    pub ka: f64,
    /// global diffuse coefficient
    pub kd: f64,
    /// global specular coefficient; also scales reflected contributions
    pub ks: f64,
    /// global transparency coefficient; scales refracted contributions
    pub kt: f64,
}

impl Default for WorldSettings {
    fn default() -> Self {
        WorldSettings {
            recursion_depth: 6,
            ka: 1.0,
            kd: 1.0,
            ks: 1.0,
            kt: 1.0,
        }
    }
}

#[derive(Debug)]
pub struct World {
    pub objects: Vec<Object>,
    pub lights: Vec<Light>,
    /// surfaces shadow rays test against; empty when shadows are disabled
    pub obstructions: Vec<ImplicitSurface>,
    pub settings: WorldSettings,
}

impl World {
    pub fn empty() -> Self {
        World {
            objects: Vec::new(),
            lights: Vec::new(),
            obstructions: Vec::new(),
            settings: Default::default(),
        }
    }

    /// The colour a primary ray from `eye` along `direction` observes.
    pub fn colour_at(&self, eye: Point3D, direction: Normal3D) -> Colour {
        self.trace(eye, direction, 1)
    }

    fn trace(&self, eye: Point3D, direction: Normal3D, depth: u8) -> Colour {
        if depth >= self.settings.recursion_depth {
            return Colour::BLACK;
        }

        let Some((hit, material)) = self.nearest_hit(eye, direction) else {
            return Colour::BLACK;
        };

        let position = eye + direction * hit.t;
        let normal = hit.normal;

        let (reflectance, reflected, refracted) =
            if material.is_reflective && material.is_transparent {
                (
                    optics::fresnel_reflectance(direction, normal, material.ior),
                    self.reflected_intensity(position, direction, normal, depth),
                    self.refracted_intensity(position, direction, normal, material.ior, depth),
                )
            } else if material.is_reflective {
                (
                    1.0,
                    self.reflected_intensity(position, direction, normal, depth),
                    Colour::BLACK,
                )
            } else if material.is_transparent {
                (
                    0.0,
                    Colour::BLACK,
                    self.refracted_intensity(position, direction, normal, material.ior, depth),
                )
            } else {
                (0.0, Colour::BLACK, Colour::BLACK)
            };

        self.shade(
            material,
            position,
            normal,
            eye,
            reflected * reflectance,
            refracted * (1.0 - reflectance),
        )
    }

    fn reflected_intensity(
        &self,
        position: Point3D,
        direction: Normal3D,
        normal: Normal3D,
        depth: u8,
    ) -> Colour {
        let reflected = optics::reflect(direction, normal);

        self.trace(
            position + reflected * SELF_INTERSECT_DISPLACEMENT,
            reflected,
            depth + 1,
        )
    }

    fn refracted_intensity(
        &self,
        position: Point3D,
        direction: Normal3D,
        normal: Normal3D,
        ior: f64,
        depth: u8,
    ) -> Colour {
        let leaving = direction.dot(normal) > 0.0;
        let (refraction_normal, eta) = if leaving {
            (-normal, ior)
        } else {
            (normal, 1.0 / ior)
        };

        match optics::refract(direction, refraction_normal, eta) {
            Some(refracted) => self.trace(
                position + refracted * SELF_INTERSECT_DISPLACEMENT,
                refracted,
                depth + 1,
            ),
            // total internal reflection contributes nothing to the refracted term
            None => Colour::BLACK,
        }
    }

    fn nearest_hit(&self, eye: Point3D, direction: Normal3D) -> Option<(SurfaceHit, &Material)> {
        let direction = Vector3D::from(direction);

        self.objects
            .iter()
            .filter_map(|object| {
                object
                    .surface
                    .hit(eye, direction)
                    .map(|hit| (hit, &object.material))
            })
            .min_by(|(lhs, _), (rhs, _)| lhs.t.total_cmp(&rhs.t))
    }

    /// Whether anything in the obstruction list blocks the segment from `position` towards the
    /// light, closer than `distance_limit`. The ray origin is displaced along `towards_light`
    /// before testing.
    fn occluded(&self, position: Point3D, towards_light: Normal3D, distance_limit: f64) -> bool {
        let origin = position + towards_light * SELF_INTERSECT_DISPLACEMENT;
        let direction = Vector3D::from(towards_light);

        self.obstructions.iter().any(|surface| {
            matches!(surface.hit(origin, direction), Some(hit) if hit.t < distance_limit)
        })
    }

    /// Whitted illumination: ambient, plus diffuse and specular per unoccluded light, plus the
    /// pre-weighted reflected and refracted contributions.
    fn shade(
        &self,
        material: &Material,
        position: Point3D,
        normal: Normal3D,
        eye: Point3D,
        reflected: Colour,
        refracted: Colour,
    ) -> Colour {
        let settings = &self.settings;
        let mut intensity = material.ambient * settings.ka;

        for light in &self.lights {
            let LightSample {
                distance,
                direction: light_direction,
                colour: light_colour,
            } = light.sample_at(position);

            if self.occluded(position, -light_direction, distance) {
                continue;
            }

            let diffuse = normal.dot(-light_direction).max(0.0);
            intensity += material.diffuse * light_colour * (settings.kd * diffuse);

            let eye_direction = (eye - position).normalised();
            let specular = optics::reflect(light_direction, normal)
                .dot(eye_direction)
                .max(0.0)
                .powf(material.shininess);
            intensity += material.specular * light_colour * (settings.ks * specular);
        }

        intensity + material.reflective * reflected * settings.ks
            + material.transparent * refracted * settings.kt
    }
}
