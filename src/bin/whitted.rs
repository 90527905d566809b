use anyhow::{Context, Result};
use clap::Parser;
use image::ImageFormat;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Instant;
use whitted::config::Config;
use whitted::renderer;
use whitted::scene_file::{self, adapter};

/// exponent applied to both canvas dimensions when supersampling is enabled
const SUPERSAMPLE_EXPONENT: u32 = 2;

/// Whitted-style ray tracer: renders an XML scene described by an INI config file
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path of the config file
    config: PathBuf,
}

fn main() {
    if let Err(error) = run(Cli::parse()) {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;

    let source = std::fs::read_to_string(&config.scene)
        .with_context(|| format!("error loading scene: {}", config.scene.display()))?;
    let scene = scene_file::parse(&source)
        .with_context(|| format!("error loading scene: {}", config.scene.display()))?;

    let world = adapter::build_world(&scene, &config.features)?;

    let exponent = if config.features.super_sample {
        SUPERSAMPLE_EXPONENT
    } else {
        0
    };
    let camera = adapter::build_camera(
        &scene.camera,
        supersampled(config.width.get(), exponent),
        supersampled(config.height.get(), exponent),
    );

    let timer = Instant::now();
    let frame = renderer::render(&world, &camera, exponent, true);
    println!("Rendered in {:.2?}", timer.elapsed());

    let image = renderer::write_image(&frame);
    if image.save(&config.output).is_err() {
        // the extension may not name a supported format; retry as PNG before giving up
        image
            .save_with_format(&config.output, ImageFormat::Png)
            .with_context(|| format!("failed to save image to {}", config.output.display()))?;
    }
    println!("Saved rendered image to {}", config.output.display());

    Ok(())
}

fn supersampled(pixels: u16, exponent: u32) -> NonZeroU32 {
    NonZeroU32::new(u32::from(pixels) << exponent).expect("canvas dimensions are non-zero")
}
