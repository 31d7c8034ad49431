use super::*;
use crate::animation::ease::Easing;

fn fields(line: &str) -> usize {
    line.split(',').count()
}

#[test]
fn end_time_is_empty_when_missing_or_equal() {
    assert_eq!(fade(&Timing::at(100), 0.5, None).unwrap(), "F,0,100,,0.5");
    assert_eq!(
        fade(&Timing::span(100, 100), 0.5, None).unwrap(),
        "F,0,100,,0.5"
    );
    assert_eq!(
        fade(&Timing::span(100, 200), 0.5, None).unwrap(),
        "F,0,100,200,0.5"
    );
}

#[test]
fn end_value_is_omitted_when_equal() {
    let t = Timing::span(0, 1000).with_easing(Easing::QuadOut);
    assert_eq!(fade(&t, 1.0, Some(1.0)).unwrap(), "F,4,0,1000,1");
    assert_eq!(fade(&t, 1.0, Some(0.0)).unwrap(), "F,4,0,1000,1,0");
    let nearly = 0.5 + 1e-10;
    assert_eq!(rotate(&t, 0.5, Some(nearly)).unwrap(), "R,4,0,1000,0.5");
    assert_eq!(move_y(&t, 240.0, Some(240.0)).unwrap(), "MY,4,0,1000,240");
}

#[test]
fn fade_rejects_out_of_range_opacity() {
    assert!(matches!(
        fade(&Timing::at(0), 1.5, None),
        Err(OsbError::InvalidValue(_))
    ));
    assert!(fade(&Timing::at(0), 0.0, Some(-0.1)).is_err());
}

#[test]
fn move_field_counts() {
    let t = Timing::span(0, 500);
    let still = move_to(&t, Vector2::new(320.0, 240.0), None).unwrap();
    assert_eq!(still, "M,0,0,500,320,240");
    assert_eq!(fields(&still), 6);

    let moving = move_to(
        &t,
        Vector2::new(320.0, 240.0),
        Some(Vector2::new(0.0, 480.5)),
    )
    .unwrap();
    assert_eq!(moving, "M,0,0,500,320,240,0,480.5");
    assert_eq!(fields(&moving), 8);
}

#[test]
fn move_x_encodes_end_only_when_changed() {
    let t = Timing::span(0, 500);
    assert_eq!(move_x(&t, 10.0, Some(20.0)).unwrap(), "MX,0,0,500,10,20");
    assert_eq!(move_x(&t, 10.0, None).unwrap(), "MX,0,0,500,10");
    assert!(move_x(&t, f64::NAN, None).is_err());
}

#[test]
fn scale_uniform_and_vector_forms() {
    let t = Timing::span(0, 1000);
    let (one, two) = (ScaleValue::Uniform(1.0), ScaleValue::Uniform(2.0));
    assert_eq!(scale(&t, one, Some(two)).unwrap(), "S,0,0,1000,1,2");

    let v = scale(
        &t,
        ScaleValue::from([1.0, 1.0]),
        Some(ScaleValue::from([0.5, 0.2])),
    )
    .unwrap();
    assert_eq!(v, "V,0,0,1000,1,1,0.5,0.2");
    assert_eq!(fields(&v), 8);

    let same = ScaleValue::from([2.0, 2.0]);
    assert_eq!(scale(&t, same, Some(same)).unwrap(), "V,0,0,1000,2,2");
}

#[test]
fn scale_rejects_mixed_kinds() {
    let t = Timing::at(0);
    let uniform = ScaleValue::Uniform(2.0);
    let vector = ScaleValue::from([1.0, 1.0]);
    let err = scale(&t, uniform, Some(vector)).unwrap_err();
    assert!(matches!(err, OsbError::InvalidValue(_)));
    assert!(scale(&t, vector, Some(uniform)).is_err());
}

#[test]
fn color_from_array_renders_literal() {
    let c = Color::try_from([255i64, 255, 0]).unwrap();
    assert_eq!(color(&Timing::at(0), c, None).unwrap(), "C,0,0,,255,255,0");
    assert_eq!(
        color(&Timing::at(0), c, Some(c)).unwrap(),
        "C,0,0,,255,255,0"
    );

    let tinted = color(&Timing::span(0, 10), c, Some(Color::WHITE)).unwrap();
    assert_eq!(tinted, "C,0,0,10,255,255,0,255,255,255");
    assert_eq!(fields(&tinted), 10);
}

#[test]
fn flip_requires_exactly_one_direction() {
    assert_eq!(flip(0, 1000, Flip::horizontal()).unwrap(), "P,0,1000,H");
    assert_eq!(flip(0, 1000, Flip::vertical()).unwrap(), "P,0,1000,V");
    assert_eq!(flip(500, 500, Flip::default()).unwrap(), "P,500,,H");

    let both = Flip {
        horizontally: true,
        vertically: true,
    };
    let neither = Flip {
        horizontally: false,
        vertically: false,
    };
    assert!(matches!(
        flip(0, 1000, both),
        Err(OsbError::InvalidValue(_))
    ));
    assert!(matches!(
        flip(0, 1000, neither),
        Err(OsbError::InvalidValue(_))
    ));
}

#[test]
fn additive_and_trigger_markers() {
    assert_eq!(additive_color_blending(0, 2000), "P,0,2000,A");
    assert_eq!(trigger(TriggerCondition::Passing, 0, 0), "T,Passing,0,0");
}
