// File: crates/chart-core/tests/layout.rs
// Purpose: Geometry without a canvas: coordinate mapping, axis cutoff, pegs, and label anchors.

use chart_core::{AxisLayout, CoordinateMapper, DataPoint, LabelPlacer, PixelPoint, Rect};

const SQUARE: Rect = Rect::from_size(500, 500);

#[test]
fn mapper_shifts_by_margin_and_flips_y() {
    let m = CoordinateMapper::new(30);
    assert_eq!(m.map(DataPoint::new(0, 0), SQUARE), PixelPoint::new(30, 470));
    assert_eq!(m.map(DataPoint::new(40, 400), SQUARE), PixelPoint::new(70, 70));
    assert_eq!(m.map(DataPoint::new(250, 200), SQUARE), PixelPoint::new(280, 270));
    // Identical inputs give identical outputs.
    assert_eq!(m.map(DataPoint::new(3, 9), SQUARE), m.map(DataPoint::new(3, 9), SQUARE));
}

#[test]
fn mapped_y_strictly_decreases_as_data_y_grows() {
    let m = CoordinateMapper::new(12);
    let bounds = Rect::from_size(64, 80);
    let ys: Vec<i32> = (-20..100).map(|y| m.map(DataPoint::new(5, y), bounds).y).collect();
    assert!(ys.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn mapper_does_not_clamp() {
    let m = CoordinateMapper::new(30);
    assert_eq!(m.map(DataPoint::new(-100, 900), SQUARE), PixelPoint::new(-70, -430));
}

#[test]
fn mapper_saturates_at_the_i32_limits() {
    let m = CoordinateMapper::new(30);
    assert_eq!(m.map(DataPoint::new(i32::MAX, 0), SQUARE), PixelPoint::new(i32::MAX, 470));
    assert_eq!(m.map(DataPoint::new(i32::MAX - 10, 0), SQUARE), PixelPoint::new(i32::MAX, 470));
    assert_eq!(m.map(DataPoint::new(i32::MIN, 0), SQUARE), PixelPoint::new(i32::MIN + 30, 470));
    assert_eq!(m.map(DataPoint::new(0, i32::MIN), SQUARE), PixelPoint::new(30, i32::MAX));
    assert_eq!(m.map(DataPoint::new(0, i32::MAX), SQUARE), PixelPoint::new(30, 470 - i32::MAX));
}

#[test]
fn cutoff_for_default_canvas() {
    let axes = AxisLayout::new(30, 30);
    assert_eq!(axes.cutoff(500), 20);
    assert_eq!(axes.cutoff(30), 0);
    assert_eq!(axes.cutoff(59), 29);
    assert_eq!(axes.cutoff(60), 0);
}

#[test]
fn cutoff_is_in_range_and_aligns_pegs() {
    for &(margin, sf) in &[(30, 30), (0, 7), (12, 5), (40, 1), (3, 64)] {
        let axes = AxisLayout::new(margin, sf);
        for side in 0..400 {
            let c = axes.cutoff(side);
            assert!((0..sf).contains(&c), "cutoff {c} out of range for side {side}, sf {sf}");
            assert_eq!((side - margin - c).rem_euclid(sf), 0, "misaligned for side {side}, sf {sf}");
        }
    }
}

#[test]
fn cutoff_handles_extreme_sides() {
    let axes = AxisLayout::new(30, 30);
    for side in [i32::MIN, i32::MIN + 1, -1, i32::MAX - 1, i32::MAX] {
        let c = axes.cutoff(side);
        assert!((0..30).contains(&c), "cutoff {c} out of range for side {side}");
        assert_eq!((i64::from(side) - 30 - i64::from(c)).rem_euclid(30), 0);
    }
    assert_eq!(AxisLayout::new(0, i32::MAX).cutoff(i32::MAX), 0);
    let far = i64::from(i32::MIN) - i64::from(i32::MAX);
    assert_eq!(AxisLayout::new(i32::MAX, 7).cutoff(i32::MIN), far.rem_euclid(7) as i32);
}

#[test]
fn huge_steps_and_bounds_end_the_peg_walk() {
    let axes = AxisLayout::new(500, i32::MAX);
    assert_eq!(axes.vertical_pegs(SQUARE).count(), 0);
    assert_eq!(axes.horizontal_pegs(SQUARE).count(), 0);

    let huge = Rect::new(0, 0, i32::MAX, i32::MAX);
    let axes = AxisLayout::new(30, 1 << 30);
    assert_eq!(axes.vertical_pegs(huge).collect::<Vec<_>>(), vec![i32::MAX - 30 - (1 << 30)]);
    // The next column would be past i32::MAX.
    assert_eq!(axes.horizontal_pegs(huge).collect::<Vec<_>>(), vec![30 + (1 << 30)]);
    assert_eq!(axes.horizontal_peg_pixels(huge).count(), 4);

    let axes = AxisLayout::new(i32::MAX, 1);
    assert_eq!(axes.vertical_peg_pixels(SQUARE).count(), 0);
    assert_eq!(axes.horizontal_pegs(SQUARE).count(), 0);
}

#[test]
fn axis_lines_span_origin_to_cutoff() {
    let axes = AxisLayout::new(30, 30);
    let v: Vec<PixelPoint> = axes.vertical_axis(SQUARE).collect();
    assert_eq!(v.first(), Some(&PixelPoint::new(30, 470)));
    assert_eq!(v.last(), Some(&PixelPoint::new(30, 20)));
    assert_eq!(v.len(), 451);
    assert!(v.iter().all(|p| p.x == 30));

    let h: Vec<PixelPoint> = axes.horizontal_axis(SQUARE).collect();
    assert_eq!(h.first(), Some(&PixelPoint::new(30, 470)));
    assert_eq!(h.last(), Some(&PixelPoint::new(480, 470)));
    assert_eq!(h.len(), 451);
    assert!(h.iter().all(|p| p.y == 470));
}

#[test]
fn pegs_form_arithmetic_progressions() {
    let axes = AxisLayout::new(30, 30);
    let v: Vec<i32> = axes.vertical_pegs(SQUARE).collect();
    let want_v: Vec<i32> = (1..).map(|k| 470 - k * 30).take_while(|&y| y > 0).collect();
    assert_eq!(v, want_v);
    assert_eq!(v.first(), Some(&440));
    assert_eq!(v.last(), Some(&20));

    let h: Vec<i32> = axes.horizontal_pegs(SQUARE).collect();
    let want_h: Vec<i32> = (1..).map(|k| 30 + k * 30).take_while(|&x| x < 500).collect();
    assert_eq!(h, want_h);
    assert_eq!(h.last(), Some(&480));
}

#[test]
fn pegs_at_another_scale() {
    let axes = AxisLayout::new(10, 25);
    let bounds = Rect::from_size(100, 120);
    assert_eq!(axes.vertical_pegs(bounds).collect::<Vec<_>>(), vec![85, 60, 35, 10]);
    assert_eq!(axes.horizontal_pegs(bounds).collect::<Vec<_>>(), vec![35, 60, 85]);
}

#[test]
fn peg_strokes_straddle_the_axis() {
    let axes = AxisLayout::new(30, 30);
    let first: Vec<PixelPoint> = axes.vertical_peg_pixels(SQUARE).take(4).collect();
    assert_eq!(
        first,
        vec![
            PixelPoint::new(28, 440),
            PixelPoint::new(29, 440),
            PixelPoint::new(31, 440),
            PixelPoint::new(32, 440),
        ]
    );
    let first: Vec<PixelPoint> = axes.horizontal_peg_pixels(SQUARE).take(4).collect();
    assert_eq!(
        first,
        vec![
            PixelPoint::new(60, 468),
            PixelPoint::new(60, 469),
            PixelPoint::new(60, 471),
            PixelPoint::new(60, 472),
        ]
    );
    assert_eq!(axes.vertical_peg_pixels(SQUARE).count(), 15 * 4);
    assert_eq!(axes.horizontal_peg_pixels(SQUARE).count(), 15 * 4);
}

#[test]
fn label_anchors() {
    let placer = LabelPlacer::new(30, 30, 5, 10);
    assert_eq!(placer.vertical_anchor(440, 14), PixelPoint::new(11, 445));
    assert_eq!(placer.horizontal_anchor(60, SQUARE), PixelPoint::new(55, 485));
    assert_eq!(placer.title_anchor(SQUARE, 56), PixelPoint::new(222, 10));
}

#[test]
fn label_anchors_saturate() {
    let placer = LabelPlacer::new(i32::MIN, 30, i32::MAX, i32::MAX);
    assert_eq!(placer.vertical_anchor(i32::MAX, 10), PixelPoint::new(i32::MIN, i32::MAX));
    assert_eq!(
        placer.horizontal_anchor(i32::MIN, Rect::new(0, 0, 10, i32::MAX)),
        PixelPoint::new(i32::MIN, i32::MAX)
    );
    assert_eq!(placer.title_anchor(Rect::new(0, i32::MAX - 5, 10, i32::MAX), i32::MAX).y, i32::MAX);
}

#[test]
fn label_values_follow_peg_order() {
    let axes = AxisLayout::new(30, 30);
    let placer = LabelPlacer::new(30, 30, 5, 10);

    let vertical = placer.vertical_labels(&axes, SQUARE, |s| s.len() as i32 * 7);
    let pegs: Vec<i32> = axes.vertical_pegs(SQUARE).collect();
    assert_eq!(vertical.len(), pegs.len());
    for (k, (label, y)) in vertical.iter().zip(&pegs).enumerate() {
        assert_eq!(label.text, ((k as i32 + 1) * 30).to_string());
        let width = label.text.len() as i32 * 7;
        // Right edge of the text sits `padding` pixels left of the axis.
        assert_eq!(label.anchor.x + width, 30 - 5);
        assert_eq!(label.anchor.y, y + 5);
    }
    assert_eq!(vertical.last().map(|l| l.text.as_str()), Some("450"));

    let horizontal = placer.horizontal_labels(&axes, SQUARE);
    assert_eq!(horizontal.first().map(|l| (l.text.as_str(), l.anchor)), Some(("30", PixelPoint::new(55, 485))));
    assert_eq!(horizontal.last().map(|l| (l.text.as_str(), l.anchor)), Some(("450", PixelPoint::new(475, 485))));
}
