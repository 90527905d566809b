use crate::core::Colour;
use approx::assert_abs_diff_eq;

#[test]
fn adding_colours_should_add_channels() {
    let sum = Colour::new(0.9, 0.6, 0.75) + Colour::new(0.7, 0.1, 0.25);

    assert_eq!(sum, Colour::new(1.6, 0.7, 1.0));
}

#[test]
fn multiplying_colours_should_multiply_channelwise() {
    let product = Colour::new(1.0, 0.2, 0.4) * Colour::new(0.9, 1.0, 0.1);

    assert_abs_diff_eq!(product, Colour::new(0.9, 0.2, 0.04), epsilon = 1e-9);
}

#[test]
fn scaling_a_colour_should_scale_every_channel() {
    assert_eq!(Colour::new(0.2, 0.3, 0.4) * 2.0, Colour::new(0.4, 0.6, 0.8));
}

#[test]
fn add_assign_should_accumulate() {
    let mut accumulated = Colour::BLACK;
    accumulated += Colour::new(0.1, 0.2, 0.3);
    accumulated += Colour::new(0.4, 0.0, 0.1);

    assert_eq!(accumulated, Colour::new(0.5, 0.2, 0.4));
}

#[test]
fn l1_norm_should_sum_absolute_channel_values() {
    assert_eq!(Colour::new(-0.5, 0.25, 0.125).l1_norm(), 0.875);
    assert_eq!(Colour::BLACK.l1_norm(), 0.0);
}

#[test]
fn greyscale_should_set_all_channels() {
    assert_eq!(Colour::greyscale(0.4), Colour::new(0.4, 0.4, 0.4));
}
