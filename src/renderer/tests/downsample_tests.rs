use crate::renderer::{bilinear_downsample, Frame};
use crate::util::SceneScalar;
use approx::assert_abs_diff_eq;
use quickcheck_macros::quickcheck;

#[test]
fn downsampling_should_halve_both_dimensions() {
    let frame = Frame::new(8, 6, 3);
    let downsampled = bilinear_downsample(&frame);

    assert_eq!(downsampled.height(), 4);
    assert_eq!(downsampled.width(), 3);
    assert_eq!(downsampled.plane_count(), 3);
}

#[test]
fn odd_dimensions_should_round_down() {
    let frame = Frame::new(5, 5, 1);
    let downsampled = bilinear_downsample(&frame);

    assert_eq!(downsampled.height(), 2);
    assert_eq!(downsampled.width(), 2);
}

#[quickcheck]
fn a_constant_image_should_stay_constant(value: SceneScalar) -> bool {
    let mut frame = Frame::new(7, 5, 2);
    for channel in 0..2 {
        for y in 0..7 {
            for x in 0..5 {
                frame.plane_mut(channel).set(y, x, value.0);
            }
        }
    }

    let downsampled = bilinear_downsample(&frame);

    (0..downsampled.plane_count()).all(|channel| {
        (0..downsampled.height()).all(|y| {
            (0..downsampled.width())
                .all(|x| (downsampled.plane(channel).at(y, x) - value.0).abs() < 1e-12 * (1.0 + value.0.abs()))
        })
    })
}

#[test]
fn a_hard_edge_should_blur_into_intermediate_values() {
    let mut frame = Frame::new(4, 8, 1);
    for y in 0..4 {
        for x in 4..8 {
            frame.plane_mut(0).set(y, x, 1.0);
        }
    }

    let downsampled = bilinear_downsample(&frame);

    for y in 0..2 {
        assert_abs_diff_eq!(downsampled.plane(0).at(y, 0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(downsampled.plane(0).at(y, 1), 0.125, epsilon = 1e-12);
        assert_abs_diff_eq!(downsampled.plane(0).at(y, 2), 0.875, epsilon = 1e-12);
        assert_abs_diff_eq!(downsampled.plane(0).at(y, 3), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn planes_should_be_filtered_independently() {
    let mut frame = Frame::new(4, 4, 2);
    for y in 0..4 {
        for x in 0..4 {
            frame.plane_mut(0).set(y, x, 0.25);
            frame.plane_mut(1).set(y, x, 0.75);
        }
    }

    let downsampled = bilinear_downsample(&frame);

    assert_abs_diff_eq!(downsampled.plane(0).at(1, 1), 0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(downsampled.plane(1).at(1, 1), 0.75, epsilon = 1e-12);
}
