use cursor_circle::model::Rgba;
use cursor_circle::{clamp, color_to_hex};

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(10.0, 0.0, 20.0), 10.0);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
}

#[test]
fn color_to_hex_without_alpha_when_opaque() {
    let hex = color_to_hex(1.0, 0.0, 0.5, 1.0);
    assert_eq!(hex, "#FF0080");
}

#[test]
fn color_to_hex_with_alpha_when_not_opaque() {
    let hex = color_to_hex(0.2, 0.4, 0.6, 0.5);
    assert_eq!(hex, "#33669980");
}

#[test]
fn color_to_hex_clamps_input() {
    let hex = color_to_hex(-0.1, 1.2, 0.501, 1.0);
    assert_eq!(hex, "#00FF80");
}

#[test]
fn rgba_hex_matches_free_function() {
    let glow = Rgba::new(1.0, 1.0, 0.0, 0.2);
    assert_eq!(glow.to_hex(), "#FFFF0033");
    assert_eq!(Rgba::new(1.0, 1.0, 1.0, 1.0).to_hex(), "#FFFFFF");
}

#[test]
fn rgba_with_alpha_keeps_rgb() {
    let c = Rgba::new(0.1, 0.2, 0.3, 0.9).with_alpha(0.4);
    assert_eq!(c, Rgba::new(0.1, 0.2, 0.3, 0.4));
}

#[test]
fn rgba_clamped_limits_every_channel() {
    let c = Rgba::new(-1.0, 2.0, 0.5, 7.0).clamped();
    assert_eq!(c, Rgba::new(0.0, 1.0, 0.5, 1.0));
}
