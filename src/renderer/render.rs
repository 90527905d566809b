use crate::renderer::{bilinear_downsample, Camera, Frame};
use crate::scene::World;
use image::{ImageBuffer, Rgba, RgbaImage};

/// Traces one primary ray per camera pixel, then downsamples `supersample_exponent` times.
///
/// The camera's dimensions are the *supersampled* dimensions: callers render at
/// `canvas × 2^exponent` and receive a canvas-sized frame back.
pub fn render(
    world: &World,
    camera: &Camera,
    supersample_exponent: u32,
    show_progress: bool,
) -> Frame {
    let mut frame = Frame::new(
        camera.height().get() as usize,
        camera.width().get() as usize,
        3,
    );

    frame.draw(show_progress, |x, y| {
        let (origin, direction) = camera.primary_ray(x as u32, y as u32);
        world.colour_at(origin, direction)
    });

    let mut rendered = frame;
    for _ in 0..supersample_exponent {
        rendered = bilinear_downsample(&rendered);
    }

    rendered
}

/// Quantizes a rendered frame to an 8-bit RGB image with an opaque alpha channel.
pub fn write_image(frame: &Frame) -> RgbaImage {
    ImageBuffer::from_fn(frame.width() as u32, frame.height() as u32, |x, y| {
        let colour = frame.pixel(y as usize, x as usize);

        Rgba([
            quantize(colour.red()),
            quantize(colour.green()),
            quantize(colour.blue()),
            u8::MAX,
        ])
    })
}

fn quantize(channel: f64) -> u8 {
    if channel <= 0.0 {
        0
    } else if channel >= 1.0 {
        u8::MAX
    } else {
        (255.0 * channel).round() as _
    }
}
