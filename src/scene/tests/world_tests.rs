use crate::core::{Colour, Matrix4D, Normal3D, Point3D, Vector, Vector3D};
use crate::scene::{Light, Material, Object, World};
use crate::surface::ImplicitSurface;
use approx::assert_abs_diff_eq;

fn matte(diffuse: Colour, ambient: Colour) -> Material {
    Material {
        diffuse,
        ambient,
        ..Default::default()
    }
}

fn mirror() -> Material {
    Material {
        diffuse: Colour::BLACK,
        reflective: Colour::WHITE,
        is_reflective: true,
        ..Default::default()
    }
}

fn glass(ior: f64) -> Material {
    Material {
        diffuse: Colour::BLACK,
        transparent: Colour::WHITE,
        ior,
        is_transparent: true,
        ..Default::default()
    }
}

#[test]
fn an_empty_world_should_be_black_in_every_direction() {
    let world = World::empty();

    assert_eq!(
        world.colour_at(Point3D::ORIGIN, Normal3D::NEGATIVE_Z),
        Colour::BLACK
    );
    assert_eq!(
        world.colour_at(Point3D::new(1.0, 2.0, 3.0), Normal3D::POSITIVE_Y),
        Colour::BLACK
    );
}

#[test]
fn a_lit_surface_should_combine_ambient_and_diffuse_terms() {
    let mut world = World::empty();
    world.objects.push(Object::new(
        ImplicitSurface::sphere(),
        matte(Colour::greyscale(0.8), Colour::greyscale(0.1)),
    ));
    world
        .lights
        .push(Light::directional(Normal3D::NEGATIVE_Y, Colour::WHITE));

    // the top of the sphere faces the light head-on
    let colour = world.colour_at(Point3D::new(0.0, 5.0, 0.0), Normal3D::NEGATIVE_Y);
    assert_abs_diff_eq!(colour, Colour::greyscale(0.9), epsilon = 1e-9);

    // the front of the sphere faces the light edge-on and only receives ambient
    let colour = world.colour_at(Point3D::new(0.0, 0.0, 5.0), Normal3D::NEGATIVE_Z);
    assert_abs_diff_eq!(colour, Colour::greyscale(0.1), epsilon = 1e-9);

    // a miss stays black
    let colour = world.colour_at(Point3D::new(2.0, 0.0, 5.0), Normal3D::NEGATIVE_Z);
    assert_eq!(colour, Colour::BLACK);
}

#[test]
fn the_global_coefficients_should_scale_each_term() {
    let mut world = World::empty();
    world.objects.push(Object::new(
        ImplicitSurface::sphere(),
        matte(Colour::greyscale(0.8), Colour::greyscale(0.1)),
    ));
    world
        .lights
        .push(Light::directional(Normal3D::NEGATIVE_Y, Colour::WHITE));
    world.settings.ka = 2.0;
    world.settings.kd = 0.5;

    let colour = world.colour_at(Point3D::new(0.0, 5.0, 0.0), Normal3D::NEGATIVE_Y);

    assert_abs_diff_eq!(colour, Colour::greyscale(0.2 + 0.4), epsilon = 1e-9);
}

#[test]
fn the_specular_highlight_should_peak_along_the_mirror_direction() {
    let mut world = World::empty();
    world.objects.push(Object::new(
        ImplicitSurface::sphere(),
        Material {
            diffuse: Colour::BLACK,
            specular: Colour::WHITE,
            shininess: 10.0,
            ..Default::default()
        },
    ));
    world
        .lights
        .push(Light::directional(Normal3D::NEGATIVE_Z, Colour::WHITE));

    // looking straight down the light direction, the highlight is at full strength
    let head_on = world.colour_at(Point3D::new(0.0, 0.0, 5.0), Normal3D::NEGATIVE_Z);
    assert_abs_diff_eq!(head_on, Colour::WHITE, epsilon = 1e-6);

    // slightly off-centre the highlight decays
    let off_centre = world.colour_at(
        Point3D::new(0.2, 0.0, 5.0),
        Vector3D::new(-0.01, 0.0, -1.0).normalised(),
    );
    assert!(off_centre.red() < 1.0);
}

#[test]
fn an_occluded_light_should_contribute_no_diffuse_or_specular() {
    let floor = ImplicitSurface::cube()
        .transformed(Matrix4D::translation(0.0, -0.5, 0.0) * Matrix4D::scaling(10.0, 1.0, 10.0));
    let blocker =
        ImplicitSurface::cube().transformed(Matrix4D::translation(0.0, 1.2, 0.0) * Matrix4D::scaling(0.5, 0.5, 0.5));

    let mut world = World::empty();
    world.objects.push(Object::new(
        floor.clone(),
        matte(Colour::greyscale(0.8), Colour::greyscale(0.1)),
    ));
    world
        .objects
        .push(Object::new(blocker.clone(), matte(Colour::WHITE, Colour::BLACK)));
    world
        .lights
        .push(Light::directional(Normal3D::NEGATIVE_Y, Colour::WHITE));
    world.obstructions = vec![floor, blocker];

    // a ray landing under the blocker is shadowed: ambient only
    let eye = Point3D::new(0.0, 2.0, 2.0);
    let towards_floor_centre = (Point3D::ORIGIN - eye).normalised();
    let shadowed = world.colour_at(eye, towards_floor_centre);
    assert_abs_diff_eq!(shadowed, Colour::greyscale(0.1), epsilon = 1e-9);

    // the same ray with shadows disabled picks up the diffuse term
    world.obstructions = Vec::new();
    let lit = world.colour_at(eye, towards_floor_centre);
    assert_abs_diff_eq!(lit, Colour::greyscale(0.9), epsilon = 1e-9);

    assert!(lit.red() > shadowed.red());
    assert!(lit.green() > shadowed.green());
    assert!(lit.blue() > shadowed.blue());
}

#[test]
fn shadow_rays_should_ignore_obstructions_beyond_the_light() {
    let floor = ImplicitSurface::cube()
        .transformed(Matrix4D::translation(0.0, -0.5, 0.0) * Matrix4D::scaling(10.0, 1.0, 10.0));
    let blocker = ImplicitSurface::cube()
        .transformed(Matrix4D::translation(0.0, 2.5, 0.0) * Matrix4D::scaling(0.5, 0.5, 0.5));

    let mut world = World::empty();
    world.objects.push(Object::new(
        floor.clone(),
        matte(Colour::greyscale(0.8), Colour::greyscale(0.1)),
    ));
    world
        .objects
        .push(Object::new(blocker.clone(), matte(Colour::WHITE, Colour::BLACK)));
    world.obstructions = vec![floor, blocker];

    let eye = Point3D::new(0.0, 2.0, 2.0);
    let towards_floor_centre = (Point3D::ORIGIN - eye).normalised();

    // the point light sits between the floor and the blocker, so the surface is lit
    world.lights = vec![Light::point(
        Point3D::new(0.0, 1.0, 0.0),
        Colour::WHITE,
        [1.0, 0.0, 0.0],
    )];
    let lit = world.colour_at(eye, towards_floor_centre);
    assert_abs_diff_eq!(lit, Colour::greyscale(0.9), epsilon = 1e-9);

    // moving the light above the blocker shadows the same point
    world.lights = vec![Light::point(
        Point3D::new(0.0, 4.0, 0.0),
        Colour::WHITE,
        [1.0, 0.0, 0.0],
    )];
    let shadowed = world.colour_at(eye, towards_floor_centre);
    assert_abs_diff_eq!(shadowed, Colour::greyscale(0.1), epsilon = 1e-9);
}

#[test]
fn a_mirror_should_pick_up_the_colour_of_what_it_faces() {
    let mut world = World::empty();
    world
        .objects
        .push(Object::new(ImplicitSurface::sphere(), mirror()));
    world.objects.push(Object::new(
        ImplicitSurface::sphere().transformed(Matrix4D::translation(0.0, 0.0, 6.0)),
        matte(Colour::RED, Colour::new(0.2, 0.0, 0.0)),
    ));
    world
        .lights
        .push(Light::directional(Normal3D::POSITIVE_Z, Colour::WHITE));

    // the primary ray hits the mirror; its reflection flies back to the red sphere
    let colour = world.colour_at(Point3D::new(0.0, 0.0, 3.0), Normal3D::NEGATIVE_Z);

    assert!(colour.red() > 0.5, "{colour:?}");
    assert!(colour.red() > colour.green());
    assert!(colour.red() > colour.blue());
}

#[test]
fn a_ray_through_the_centre_of_a_glass_sphere_should_continue_undeflected() {
    let mut world = World::empty();
    world
        .objects
        .push(Object::new(ImplicitSurface::sphere(), glass(1.5)));
    world.objects.push(Object::new(
        ImplicitSurface::cube()
            .transformed(Matrix4D::translation(0.0, 0.0, -3.0) * Matrix4D::scaling(4.0, 4.0, 1.0)),
        matte(Colour::RED, Colour::new(0.2, 0.0, 0.0)),
    ));
    world
        .lights
        .push(Light::directional(Normal3D::NEGATIVE_Z, Colour::WHITE));

    // entry and exit are both at normal incidence, so the backdrop stays centred behind the
    // sphere
    let through_glass = world.colour_at(Point3D::new(0.0, 0.0, 3.0), Normal3D::NEGATIVE_Z);

    assert!(through_glass.red() > 0.1, "{through_glass:?}");
    assert!(through_glass.red() > through_glass.green());
}

#[test]
fn recursion_should_terminate_between_facing_mirrors() {
    let mut world = World::empty();
    world
        .objects
        .push(Object::new(ImplicitSurface::sphere(), mirror()));
    world.objects.push(Object::new(
        ImplicitSurface::sphere().transformed(Matrix4D::translation(0.0, 0.0, 3.0)),
        mirror(),
    ));

    let colour = world.colour_at(Point3D::new(0.0, 0.0, 1.5), Normal3D::NEGATIVE_Z);

    assert!(colour.red().is_finite());
    assert!(colour.red() >= 0.0);
}

#[test]
fn traced_colours_should_always_be_finite_and_non_negative() {
    let mut world = World::empty();
    world
        .objects
        .push(Object::new(ImplicitSurface::sphere(), mirror()));
    world.objects.push(Object::new(
        ImplicitSurface::sphere().transformed(Matrix4D::translation(0.5, 0.0, 6.0)),
        glass(1.5),
    ));
    world.objects.push(Object::new(
        ImplicitSurface::cube()
            .transformed(Matrix4D::translation(0.0, -2.0, 0.0) * Matrix4D::scaling(20.0, 1.0, 20.0)),
        matte(Colour::new(0.8, 0.7, 0.6), Colour::greyscale(0.1)),
    ));
    world.lights.push(Light::point(
        Point3D::new(5.0, 5.0, 5.0),
        Colour::WHITE,
        [1.0, 0.1, 0.01],
    ));

    let eye = Point3D::new(0.0, 1.0, 4.0);
    for x in -5..=5 {
        for y in -5..=5 {
            let direction =
                Vector3D::new(x as f64 / 5.0, y as f64 / 5.0, -1.0).normalised();
            let colour = world.colour_at(eye, direction);

            for channel in [colour.red(), colour.green(), colour.blue()] {
                assert!(channel.is_finite(), "({x}, {y}) produced {colour:?}");
                assert!(channel >= 0.0, "({x}, {y}) produced {colour:?}");
            }
        }
    }
}
