//! Parser for the XML scene-file format.
//!
//! A scene file is a `<scenefile>` element containing `<globaldata>`, `<cameradata>`,
//! `<lightdata>`, and named `<object type="tree">` elements. Trees nest `<transblock>` elements,
//! each holding a transform list followed by primitive, inline-tree, or master-reference objects;
//! the renderable scene is the tree named `root`. Angles are written in degrees; rotation angles
//! are converted to radians here, camera and spot-light angles by the adapter.

use crate::core::{Colour, Matrix4D, Point3D, Vector3D};
use anyhow::{anyhow, bail, ensure, Context, Result};
use std::collections::HashMap;
use xmltree::{Element, XMLNode};

mod model;
pub use model::{
    CameraDescription, GlobalCoefficients, LightDescription, MaterialDescription, NodeId,
    PrimitiveDescription, PrimitiveKind, SceneGraph, SceneNode, TextureMap, Transformation,
};

pub mod adapter;


pub fn parse(input: &str) -> Result<SceneGraph> {
    let document = Element::parse(input.as_bytes()).context("malformed scene XML")?;
    ensure!(document.name == "scenefile", "missing <scenefile>");

    let mut trees = TreeParser {
        nodes: Vec::new(),
        named: HashMap::new(),
    };
    let mut globals = GlobalCoefficients::default();
    let mut camera = CameraDescription::default();
    let mut lights = Vec::new();

    for element in child_elements(&document) {
        match element.name.as_str() {
            "globaldata" => globals = parse_globals(element)?,
            "lightdata" => lights.push(parse_light(element)?),
            "cameradata" => camera = parse_camera(element)?,
            "object" => trees.parse_tree_object(element)?,
            other => bail!("unsupported element <{other}>"),
        }
    }

    let root = trees.named.get("root").copied();

    Ok(SceneGraph {
        globals,
        camera,
        lights,
        nodes: trees.nodes,
        root,
    })
}

fn parse_globals(element: &Element) -> Result<GlobalCoefficients> {
    let mut globals = GlobalCoefficients::default();

    for child in child_elements(element) {
        match child.name.as_str() {
            "ambientcoeff" => globals.ka = number(child, "v")?,
            "diffusecoeff" => globals.kd = number(child, "v")?,
            "specularcoeff" => globals.ks = number(child, "v")?,
            "transparentcoeff" => globals.kt = number(child, "v")?,
            _ => (),
        }
    }

    Ok(globals)
}

fn parse_camera(element: &Element) -> Result<CameraDescription> {
    let mut camera = CameraDescription::default();
    let mut look_found = false;
    let mut focus_found = false;

    for child in child_elements(element) {
        match child.name.as_str() {
            "pos" => camera.position = point(child)?,
            "look" => {
                camera.look = vector(child)?;
                look_found = true;
            }
            "focus" => {
                // a focus point is resolved into a look vector once the whole element is parsed,
                // as the position may be declared after it
                camera.look = vector(child)?;
                focus_found = true;
            }
            "up" => camera.up = vector(child)?,
            "heightangle" => camera.height_angle = number(child, "v")?,
            // remnants of the depth-of-field configuration; validated but unused
            "aspectratio" | "aperture" | "focallength" => {
                number(child, "v")?;
            }
            other => bail!("unsupported element <{other}>"),
        }
    }

    ensure!(
        !(look_found && focus_found),
        "camera can not have both look and focus"
    );

    if focus_found {
        camera.look = camera.look - (camera.position - Point3D::ORIGIN);
    }

    Ok(camera)
}

#[derive(Copy, Clone, PartialEq)]
enum LightKind {
    Point,
    Directional,
    Spot,
    Area,
}

fn parse_light(element: &Element) -> Result<LightDescription> {
    let mut kind = LightKind::Point;
    let mut position = Point3D::new(3.0, 3.0, 3.0);
    let mut direction = Vector3D::new(0.0, 0.0, 0.0);
    let mut colour = Colour::WHITE;
    let mut attenuation = [1.0, 0.0, 0.0];
    let mut angle = 0.0;
    let mut penumbra = 0.0;

    for child in child_elements(element) {
        match child.name.as_str() {
            "id" => {
                number(child, "v")?;
            }
            "type" => {
                kind = match attribute(child, "v")? {
                    "point" => LightKind::Point,
                    "directional" => LightKind::Directional,
                    "spot" => LightKind::Spot,
                    "area" => LightKind::Area,
                    other => bail!("unknown light type {other}"),
                }
            }
            "color" => colour = parse_colour(child)?,
            "function" => {
                attenuation = tuple(
                    child,
                    &[["a", "b", "c"], ["x", "y", "z"], ["v1", "v2", "v3"]],
                )?
            }
            "position" => {
                ensure!(
                    kind != LightKind::Directional,
                    "position is not applicable to directional lights"
                );
                position = point(child)?;
            }
            "direction" => {
                ensure!(
                    kind != LightKind::Point,
                    "direction is not applicable to point lights"
                );
                direction = vector(child)?;
            }
            "penumbra" => {
                ensure!(
                    kind == LightKind::Spot,
                    "penumbra is only applicable to spot lights"
                );
                penumbra = number(child, "v")?;
            }
            "angle" => {
                ensure!(
                    kind == LightKind::Spot,
                    "angle is only applicable to spot lights"
                );
                angle = number(child, "v")?;
            }
            "width" | "height" => {
                ensure!(
                    kind == LightKind::Area,
                    "width and height are only applicable to area lights"
                );
                number(child, "v")?;
            }
            other => bail!("unsupported element <{other}>"),
        }
    }

    Ok(match kind {
        LightKind::Point => LightDescription::Point {
            position,
            colour,
            attenuation,
        },
        LightKind::Directional => LightDescription::Directional { direction, colour },
        LightKind::Spot => LightDescription::Spot {
            position,
            axis: direction,
            angle,
            penumbra,
            colour,
            attenuation,
        },
        LightKind::Area => LightDescription::Area,
    })
}

struct TreeParser {
    nodes: Vec<SceneNode>,
    named: HashMap<String, NodeId>,
}

impl TreeParser {
    fn parse_tree_object(&mut self, element: &Element) -> Result<()> {
        let name = attribute(element, "name")?;
        ensure!(
            element.attributes.get("type").map(String::as_str) == Some("tree"),
            "top-level <object> elements must be of type tree"
        );
        ensure!(
            !self.named.contains_key(name),
            "two objects with the same name: {name}"
        );

        // registered before its children parse, so transblocks can master-reference it
        let id = self.nodes.len();
        self.nodes.push(SceneNode::default());
        self.named.insert(name.to_owned(), id);

        let mut children = Vec::new();
        for child in child_elements(element) {
            match child.name.as_str() {
                "transblock" => children.push(self.parse_transblock(child)?),
                other => bail!("unsupported element <{other}>"),
            }
        }
        self.nodes[id].children = children;

        Ok(())
    }

    fn parse_transblock(&mut self, element: &Element) -> Result<NodeId> {
        let mut node = SceneNode::default();

        for child in child_elements(element) {
            match child.name.as_str() {
                "translate" => {
                    let [x, y, z] = tuple(child, &[["x", "y", "z"]])?;
                    node.transformations
                        .push(Transformation::Translate(Vector3D::new(x, y, z)));
                }
                "rotate" => {
                    let [x, y, z, angle] = tuple(child, &[["x", "y", "z", "angle"]])?;
                    node.transformations.push(Transformation::Rotate {
                        axis: Vector3D::new(x, y, z),
                        angle: angle.to_radians(),
                    });
                }
                "scale" => {
                    let [x, y, z] = tuple(child, &[["x", "y", "z"]])?;
                    node.transformations
                        .push(Transformation::Scale(Vector3D::new(x, y, z)));
                }
                "matrix" => node
                    .transformations
                    .push(Transformation::Matrix(parse_matrix(child)?)),
                "object" => self.parse_inner_object(child, &mut node)?,
                other => bail!("unsupported element <{other}>"),
            }
        }

        let id = self.nodes.len();
        self.nodes.push(node);
        Ok(id)
    }

    fn parse_inner_object(&mut self, element: &Element, node: &mut SceneNode) -> Result<()> {
        match attribute(element, "type")? {
            "master" => {
                let name = attribute(element, "name")?;
                let id = self
                    .named
                    .get(name)
                    .with_context(|| format!("invalid master object reference: {name}"))?;
                node.children.push(*id);
            }
            "tree" => {
                for child in child_elements(element) {
                    match child.name.as_str() {
                        "transblock" => node.children.push(self.parse_transblock(child)?),
                        other => bail!("unsupported element <{other}>"),
                    }
                }
            }
            "primitive" => node.primitives.push(parse_primitive(element)?),
            other => bail!("invalid object type: {other}"),
        }

        Ok(())
    }
}

fn parse_primitive(element: &Element) -> Result<PrimitiveDescription> {
    let kind = match attribute(element, "name")? {
        "sphere" => PrimitiveKind::Sphere,
        "cylinder" => PrimitiveKind::Cylinder,
        "cone" => PrimitiveKind::Cone,
        "torus" => PrimitiveKind::Torus,
        "mesh" => {
            let file = element
                .attributes
                .get("meshfile")
                .or_else(|| element.attributes.get("filename"))
                .context("mesh object must specify filename")?;
            PrimitiveKind::Mesh { file: file.clone() }
        }
        // unrecognised primitive names fall back to a cube
        _ => PrimitiveKind::Cube,
    };

    let mut material = MaterialDescription::default();
    for child in child_elements(element) {
        match child.name.as_str() {
            "diffuse" => material.diffuse = parse_colour(child)?,
            "ambient" => material.ambient = parse_colour(child)?,
            "specular" => material.specular = parse_colour(child)?,
            "reflective" => material.reflective = parse_colour(child)?,
            "transparent" => material.transparent = parse_colour(child)?,
            "emissive" => material.emissive = parse_colour(child)?,
            "shininess" => material.shininess = number(child, "v")?,
            "ior" => material.ior = number(child, "v")?,
            "blend" => material.blend = number(child, "v")?,
            "texture" => material.texture = Some(parse_map(child)?),
            "bumpmap" => material.bump = Some(parse_map(child)?),
            other => bail!("unsupported element <{other}>"),
        }
    }

    Ok(PrimitiveDescription { kind, material })
}

fn parse_map(element: &Element) -> Result<TextureMap> {
    let file = attribute(element, "file")?.to_owned();
    let repeat = |name| match element.attributes.get(name) {
        Some(value) => value
            .parse()
            .map_err(|_| anyhow!("could not parse <{}>", element.name)),
        None => Ok(1.0),
    };

    Ok(TextureMap {
        file,
        repeat_u: repeat("u")?,
        repeat_v: repeat("v")?,
    })
}

/// Rows are written `<row a b c d/>` (or `v1`–`v4`), top to bottom.
fn parse_matrix(element: &Element) -> Result<Matrix4D> {
    let mut rows = [[0.0; 4]; 4];
    let mut count = 0;

    for child in child_elements(element) {
        if count == 4 {
            break;
        }
        rows[count] = tuple(child, &[["a", "b", "c", "d"], ["v1", "v2", "v3", "v4"]])?;
        count += 1;
    }

    ensure!(count == 4, "could not parse <{}>", element.name);
    Ok(Matrix4D::new(rows[0], rows[1], rows[2], rows[3]))
}

/// Colours are written with `r g b` and an optional `a` (or `x y z` / `w`); the alpha channel is
/// accepted and discarded.
fn parse_colour(element: &Element) -> Result<Colour> {
    for names in [["r", "g", "b", "a"], ["x", "y", "z", "w"]] {
        if names.iter().all(|name| element.attributes.contains_key(*name)) {
            let [red, green, blue, _] = numbers(element, names)?;
            return Ok(Colour::new(red, green, blue));
        }
    }

    let [red, green, blue] = tuple(element, &[["r", "g", "b"], ["x", "y", "z"]])?;
    Ok(Colour::new(red, green, blue))
}

fn point(element: &Element) -> Result<Point3D> {
    let [x, y, z] = tuple(element, &[["x", "y", "z"]])?;
    Ok(Point3D::new(x, y, z))
}

fn vector(element: &Element) -> Result<Vector3D> {
    let [x, y, z] = tuple(element, &[["x", "y", "z"]])?;
    Ok(Vector3D::new(x, y, z))
}

fn child_elements(element: &Element) -> impl Iterator<Item = &Element> {
    element.children.iter().filter_map(XMLNode::as_element)
}

fn attribute<'element>(element: &'element Element, name: &str) -> Result<&'element str> {
    element
        .attributes
        .get(name)
        .map(String::as_str)
        .with_context(|| format!("could not parse <{}>", element.name))
}

fn number(element: &Element, name: &str) -> Result<f64> {
    attribute(element, name)?
        .parse()
        .map_err(|_| anyhow!("could not parse <{}>", element.name))
}

/// The first alternative attribute set that is fully present, parsed in order.
fn tuple<const N: usize>(element: &Element, alternatives: &[[&str; N]]) -> Result<[f64; N]> {
    for names in alternatives {
        if names.iter().all(|name| element.attributes.contains_key(*name)) {
            return numbers(element, *names);
        }
    }

    bail!("could not parse <{}>", element.name)
}

fn numbers<const N: usize>(element: &Element, names: [&str; N]) -> Result<[f64; N]> {
    let mut values = [0.0; N];
    for (value, name) in values.iter_mut().zip(names) {
        *value = number(element, name)?;
    }
    Ok(values)
}
