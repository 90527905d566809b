use criterion::{criterion_group, Criterion};
use nonzero_ext::nonzero;
use std::f64::consts::FRAC_PI_2;
use std::num::NonZeroU32;
use whitted::core::{Colour, Normal3D, Point3D};
use whitted::renderer::{self, Camera};
use whitted::scene::{Light, Material, Object, World};
use whitted::surface::ImplicitSurface;

criterion_group! {
    benches,
    empty_scene_full_render,
    single_sphere_single_ray,
    single_sphere_full_render,
    supersampled_render,
}

fn single_light_world() -> World {
    let mut world = World::empty();
    world.lights.push(Light::point(
        Point3D::new(-10.0, 10.0, 10.0),
        Colour::WHITE,
        [1.0, 0.0, 0.0],
    ));
    world
}

fn camera(width: NonZeroU32, height: NonZeroU32) -> Camera {
    Camera::new(
        width,
        height,
        Point3D::new(0.0, 0.0, 5.0),
        Normal3D::NEGATIVE_Z,
        Normal3D::POSITIVE_Y,
        FRAC_PI_2,
        0.1,
    )
}

// test loop overhead
fn empty_scene_full_render(c: &mut Criterion) {
    c.bench_function("render empty scene at 640x480", |b| {
        let world = World::empty();
        let camera = camera(nonzero!(640u32), nonzero!(480u32));

        b.iter(|| renderer::render(&world, &camera, 0, false))
    });
}

fn single_sphere_single_ray(c: &mut Criterion) {
    let mut world = single_light_world();
    world.objects.push(Object::new(
        ImplicitSurface::sphere(),
        Material::default(),
    ));

    c.bench_function("cast single ray at single sphere", |b| {
        b.iter(|| world.colour_at(Point3D::new(0.0, 0.0, 5.0), Normal3D::NEGATIVE_Z))
    });
}

fn single_sphere_full_render(c: &mut Criterion) {
    let mut world = single_light_world();
    world.objects.push(Object::new(
        ImplicitSurface::sphere(),
        Material::default(),
    ));

    c.bench_function("render single sphere at 320x240", |b| {
        let camera = camera(nonzero!(320u32), nonzero!(240u32));

        b.iter(|| renderer::render(&world, &camera, 0, false))
    });
}

fn supersampled_render(c: &mut Criterion) {
    let mut world = single_light_world();
    world.objects.push(Object::new(
        ImplicitSurface::sphere(),
        Material::default(),
    ));

    c.bench_function("render single sphere at 80x60 with 2x supersampling", |b| {
        let camera = camera(nonzero!(320u32), nonzero!(240u32));

        b.iter(|| renderer::render(&world, &camera, 2, false))
    });
}
