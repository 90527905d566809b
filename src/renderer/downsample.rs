use crate::renderer::{Frame, View};
use itertools::Itertools;

/// Halves both frame dimensions (by integer division): a separable horizontal-then-vertical
/// [¼, ½, ¼] blur over bordered views, followed by per-channel 2×2 box averaging.
pub fn bilinear_downsample(frame: &Frame) -> Frame {
    let resampled = convolve(&convolve(frame, horizontal_kernel), vertical_kernel);

    let mut downsampled = Frame::new(frame.height() / 2, frame.width() / 2, frame.plane_count());

    for channel in 0..downsampled.plane_count() {
        let source = resampled.plane(channel);

        for (y, x) in (0..downsampled.height()).cartesian_product(0..downsampled.width()) {
            let average = (source.at(2 * y, 2 * x)
                + source.at(2 * y + 1, 2 * x)
                + source.at(2 * y, 2 * x + 1)
                + source.at(2 * y + 1, 2 * x + 1))
                / 4.0;

            downsampled.plane_mut(channel).set(y, x, average);
        }
    }

    downsampled
}

fn horizontal_kernel(centre: &View) -> f64 {
    0.25 * centre.at(0, -1) + 0.5 * centre.at(0, 0) + 0.25 * centre.at(0, 1)
}

fn vertical_kernel(centre: &View) -> f64 {
    0.25 * centre.at(-1, 0) + 0.5 * centre.at(0, 0) + 0.25 * centre.at(1, 0)
}

fn convolve(frame: &Frame, kernel: fn(&View) -> f64) -> Frame {
    let mut processed = Frame::new(frame.height(), frame.width(), frame.plane_count());

    for channel in 0..frame.plane_count() {
        for (y, x) in (0..frame.height()).cartesian_product(0..frame.width()) {
            let value = kernel(&frame.plane(channel).view(y as i64, x as i64));
            processed.plane_mut(channel).set(y, x, value);
        }
    }

    processed
}
