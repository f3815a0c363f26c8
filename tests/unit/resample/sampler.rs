use super::*;
use crate::foundation::color::Rgb8;

fn cells(n: u8) -> Vec<Cell> {
    (0..n).map(|i| Cell::Color(Rgb8::new(i, 0, 0))).collect()
}

#[test]
fn output_length_matches_target() {
    for n0 in 1..=12u8 {
        let src = cells(n0);
        for n1 in 0..=40usize {
            assert_eq!(resample(&src, n1).len(), n1, "n0={n0} n1={n1}");
        }
    }
}

#[test]
fn same_length_is_identity() {
    for n in 1..=30u8 {
        let src = cells(n);
        assert_eq!(resample(&src, src.len()), src);
    }
}

#[test]
fn two_cells_at_two_keep_both() {
    let a = Cell::Color(Rgb8::RED);
    let b = Cell::Color(Rgb8::PURPLE);
    assert_eq!(resample(&[a, b], 2), vec![a, b]);
}

#[test]
fn four_to_two_lands_on_boundaries() {
    let src = cells(4);
    assert_eq!(resample(&src, 2), vec![Cell::Blank, Cell::Blank]);
}

#[test]
fn three_to_two_picks_cells_containing_centers() {
    // Centers at 0.75 and 2.25.
    let src = cells(3);
    assert_eq!(resample(&src, 2), vec![src[0], src[2]]);
}

#[test]
fn upsampling_repeats_cells_and_blanks_shared_edges() {
    // 2 -> 4: centers at 0.25, 0.75, 1.25, 1.75.
    let src = cells(2);
    assert_eq!(resample(&src, 4), vec![src[0], src[0], src[1], src[1]]);

    // 1 -> 3: centers at 1/6, 1/2, 5/6, none on an edge.
    let src = cells(1);
    assert_eq!(resample(&src, 3), vec![src[0]; 3]);

    // 2 -> 1: center at 1.0, the shared edge.
    let src = cells(2);
    assert_eq!(resample(&src, 1), vec![Cell::Blank]);
}

#[test]
fn zero_target_and_empty_source() {
    assert!(resample(&cells(5), 0).is_empty());
    assert_eq!(resample(&[], 3), vec![Cell::Blank; 3]);
}

#[test]
fn exact_test_agrees_with_float_formula_for_small_lengths() {
    for n0 in 1..=60usize {
        for n1 in 1..=60usize {
            for k in 0..n1 {
                let pos = n0 as f64 * (k as f64 + 0.5) / n1 as f64;
                let expected = if pos.fract() == 0.0 {
                    SamplePoint::Boundary
                } else {
                    SamplePoint::Inside(pos.floor() as usize)
                };
                assert_eq!(sample_point(n0, n1, k), expected, "n0={n0} n1={n1} k={k}");
            }
        }
    }
}

#[test]
fn huge_lengths_do_not_overflow() {
    let n = usize::MAX / 2;
    assert_eq!(sample_point(n, n, n - 1), SamplePoint::Inside(n - 1));
    assert_eq!(sample_point(usize::MAX, 1, 0), SamplePoint::Inside(usize::MAX / 2));
}
