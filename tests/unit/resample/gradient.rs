use super::*;

#[test]
fn gradient_length_matches_request() {
    for n in 0..=100 {
        assert_eq!(make_gradient(n).len(), n);
    }
}

#[test]
fn gradient_endpoints_are_exact() {
    let g = Gradient::default();
    assert_eq!(g.sample(1), vec![Rgb8::RED]);
    assert_eq!(g.sample(2), vec![Rgb8::RED, Rgb8::PURPLE]);

    let long = g.sample(17);
    assert_eq!(long[0], Rgb8::RED);
    assert_eq!(long[16], Rgb8::PURPLE);
}

#[test]
fn gradient_has_no_blanks() {
    assert!(make_gradient(50).iter().all(|c| !c.is_blank()));
}

#[test]
fn default_ramp_sweeps_hue_through_green() {
    // Red (0 deg) to purple (300 deg) reaches 120 deg at the 40% mark.
    let samples = Gradient::default().sample(101);
    let greenish = samples[40];
    assert!(greenish.g > greenish.r && greenish.g > greenish.b, "{greenish}");
}

#[test]
fn custom_endpoints() {
    let g = Gradient::new(Rgb8::BLACK, Rgb8::WHITE);
    let s = g.sample(3);
    assert_eq!(s[0], Rgb8::BLACK);
    assert_eq!(s[2], Rgb8::WHITE);
    assert_eq!(s[1].r, s[1].g);
    assert_eq!(s[1].g, s[1].b);
}
