use super::*;

#[test]
fn all_is_indexed_by_code() {
    for (i, ease) in Easing::ALL.into_iter().enumerate() {
        assert_eq!(usize::from(ease.code()), i);
        assert_eq!(Easing::from_code(i as i64).unwrap(), ease);
    }
}

#[test]
fn unknown_codes_are_rejected() {
    assert!(matches!(
        Easing::from_code(35),
        Err(OsbError::InvalidValue(_))
    ));
    assert!(Easing::from_code(-1).is_err());
}

#[test]
fn names_parse_and_display_renders_code() {
    assert_eq!("SineInOut".parse::<Easing>().unwrap(), Easing::SineInOut);
    assert!("sineinout".parse::<Easing>().is_err());
    assert_eq!(Easing::BounceInOut.to_string(), "34");
    assert_eq!(Easing::default(), Easing::Linear);
}
