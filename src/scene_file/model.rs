use crate::core::{Colour, Matrix4D, Point3D, Vector, Vector3D};

/// Index of a [`SceneNode`] in the graph's node arena. Master references make the graph a DAG, so
/// nodes are shared by index rather than owned by their parents.
pub type NodeId = usize;

#[derive(Clone, Debug, PartialEq)]
pub struct SceneGraph {
    pub globals: GlobalCoefficients,
    pub camera: CameraDescription,
    pub lights: Vec<LightDescription>,
    pub nodes: Vec<SceneNode>,
    /// the top-level tree named `root`, if the scene declared one
    pub root: Option<NodeId>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GlobalCoefficients {
    pub ka: f64,
    pub kd: f64,
    pub ks: f64,
    pub kt: f64,
}

impl Default for GlobalCoefficients {
    fn default() -> Self {
        GlobalCoefficients {
            ka: 0.5,
            kd: 0.5,
            ks: 0.5,
            kt: 0.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraDescription {
    pub position: Point3D,
    pub look: Vector3D,
    pub up: Vector3D,
    /// degrees, as written in the scene file
    pub height_angle: f64,
}

impl Default for CameraDescription {
    fn default() -> Self {
        CameraDescription {
            position: Point3D::new(5.0, 5.0, 5.0),
            look: Vector3D::new(-1.0, -1.0, -1.0),
            up: Vector3D::new(0.0, 1.0, 0.0),
            height_angle: 45.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LightDescription {
    Point {
        position: Point3D,
        colour: Colour,
        attenuation: [f64; 3],
    },
    Directional {
        direction: Vector3D,
        colour: Colour,
    },
    Spot {
        position: Point3D,
        axis: Vector3D,
        /// degrees, as written in the scene file
        angle: f64,
        /// degrees, as written in the scene file
        penumbra: f64,
        colour: Colour,
        attenuation: [f64; 3],
    },
    /// parseable, but the engine does not implement area lights
    Area,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneNode {
    pub transformations: Vec<Transformation>,
    pub primitives: Vec<PrimitiveDescription>,
    pub children: Vec<NodeId>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Transformation {
    Translate(Vector3D),
    Scale(Vector3D),
    Rotate {
        axis: Vector3D,
        /// radians; converted from degrees at parse time
        angle: f64,
    },
    Matrix(Matrix4D),
}

impl Transformation {
    pub fn to_matrix(&self) -> Matrix4D {
        match self {
            Transformation::Translate(by) => Matrix4D::translation(by.x(), by.y(), by.z()),
            Transformation::Scale(by) => Matrix4D::scaling(by.x(), by.y(), by.z()),
            Transformation::Rotate { axis, angle } => Matrix4D::rotation(*axis, *angle),
            Transformation::Matrix(matrix) => *matrix,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrimitiveDescription {
    pub kind: PrimitiveKind,
    pub material: MaterialDescription,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PrimitiveKind {
    Sphere,
    Cube,
    Cylinder,
    Cone,
    /// parseable, but the engine does not implement tori
    Torus,
    /// parseable, but the engine does not implement meshes
    Mesh { file: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct MaterialDescription {
    pub ambient: Colour,
    pub diffuse: Colour,
    pub specular: Colour,
    pub reflective: Colour,
    pub transparent: Colour,
    pub emissive: Colour,
    pub shininess: f64,
    pub ior: f64,
    pub blend: f64,
    pub texture: Option<TextureMap>,
    pub bump: Option<TextureMap>,
}

impl Default for MaterialDescription {
    fn default() -> Self {
        MaterialDescription {
            ambient: Colour::BLACK,
            diffuse: Colour::WHITE,
            specular: Colour::BLACK,
            reflective: Colour::BLACK,
            transparent: Colour::BLACK,
            emissive: Colour::BLACK,
            shininess: 0.0,
            ior: 0.0,
            blend: 0.0,
            texture: None,
            bump: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextureMap {
    pub file: String,
    pub repeat_u: f64,
    pub repeat_v: f64,
}
