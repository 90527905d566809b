//! Flattens a parsed [`SceneGraph`] into the immutable arrays the engine renders from.

use crate::config::Features;
use crate::core::{Matrix4D, Vector};
use crate::renderer::Camera;
use crate::scene::{Light, Material, Object, World, WorldSettings};
use crate::scene_file::{
    CameraDescription, LightDescription, NodeId, PrimitiveDescription, PrimitiveKind, SceneGraph,
};
use crate::surface::ImplicitSurface;
use anyhow::{bail, Result};
use std::num::NonZeroU32;

/// Focal length of the pinhole camera. The scene file's `focallength` element belongs to the
/// depth-of-field feature, which is not implemented.
pub const FOCAL_LENGTH: f64 = 0.1;

pub fn build_world(scene: &SceneGraph, features: &Features) -> Result<World> {
    let mut flattened = Vec::new();
    if let Some(root) = scene.root {
        flatten(scene, root, Matrix4D::identity(), &mut flattened);
    }

    let objects = flattened
        .iter()
        .map(|(description, ctm)| build_object(description, *ctm, features))
        .collect::<Result<Vec<_>>>()?;

    let lights = scene
        .lights
        .iter()
        .map(build_light)
        .collect::<Result<Vec<_>>>()?;

    let obstructions = if features.shadows {
        objects.iter().map(|object| object.surface.clone()).collect()
    } else {
        Vec::new()
    };

    Ok(World {
        objects,
        lights,
        obstructions,
        settings: WorldSettings {
            ka: scene.globals.ka,
            kd: scene.globals.kd,
            ks: scene.globals.ks,
            kt: scene.globals.kt,
            ..Default::default()
        },
    })
}

pub fn build_camera(
    description: &CameraDescription,
    width: NonZeroU32,
    height: NonZeroU32,
) -> Camera {
    Camera::new(
        width,
        height,
        description.position,
        description.look.normalised(),
        description.up.normalised(),
        description.height_angle.to_radians(),
        FOCAL_LENGTH,
    )
}

/// Depth-first traversal accumulating the cumulative transformation matrix: each node's local
/// transforms multiply onto its parent's CTM left to right, in declaration order.
fn flatten<'scene>(
    scene: &'scene SceneGraph,
    node: NodeId,
    parent_ctm: Matrix4D,
    out: &mut Vec<(&'scene PrimitiveDescription, Matrix4D)>,
) {
    let node = &scene.nodes[node];

    let ctm = node
        .transformations
        .iter()
        .fold(parent_ctm, |ctm, transformation| {
            ctm * transformation.to_matrix()
        });

    for primitive in &node.primitives {
        out.push((primitive, ctm));
    }

    for &child in &node.children {
        flatten(scene, child, ctm, out);
    }
}

fn build_object(
    description: &PrimitiveDescription,
    ctm: Matrix4D,
    features: &Features,
) -> Result<Object> {
    let surface = match &description.kind {
        PrimitiveKind::Cube => ImplicitSurface::cube(),
        PrimitiveKind::Sphere => ImplicitSurface::sphere(),
        PrimitiveKind::Cylinder => ImplicitSurface::cylinder(),
        PrimitiveKind::Cone => ImplicitSurface::cone(),
        PrimitiveKind::Torus | PrimitiveKind::Mesh { .. } => {
            bail!("unrecognized primitive type in scene")
        }
    }
    .transformed(ctm);

    let source = &description.material;
    let material = Material {
        ambient: source.ambient,
        diffuse: source.diffuse,
        specular: source.specular,
        reflective: source.reflective,
        transparent: source.transparent,
        shininess: source.shininess,
        ior: source.ior,
        is_reflective: false,
        is_transparent: false,
    }
    .with_features(features.reflect, features.refract);

    Ok(Object::new(surface, material))
}

fn build_light(description: &LightDescription) -> Result<Light> {
    Ok(match description {
        LightDescription::Point {
            position,
            colour,
            attenuation,
        } => Light::point(*position, *colour, *attenuation),
        LightDescription::Directional { direction, colour } => {
            Light::directional(direction.normalised(), *colour)
        }
        LightDescription::Spot {
            position,
            axis,
            angle,
            penumbra,
            colour,
            attenuation,
        } => Light::spot(
            *position,
            axis.normalised(),
            angle.to_radians(),
            penumbra.to_radians(),
            *colour,
            *attenuation,
        ),
        LightDescription::Area => bail!("unrecognized light type in scene"),
    })
}
