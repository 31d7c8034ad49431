use super::*;

#[test]
fn layers_parse_and_index_in_document_order() {
    for (i, layer) in Layer::ALL.into_iter().enumerate() {
        assert_eq!(layer.index(), i);
        assert_eq!(layer.as_str().parse::<Layer>().unwrap(), layer);
    }
    let err = "Middle".parse::<Layer>().unwrap_err();
    assert!(matches!(err, OsbError::InvalidValue(_)));
    assert!(
        err.to_string()
            .contains("Background or Fail or Pass or Foreground or Overlay")
    );
}

#[test]
fn sample_index_skips_overlay() {
    assert_eq!(Layer::Background.sample_index().unwrap(), 0);
    assert_eq!(Layer::Foreground.sample_index().unwrap(), 1);
    assert_eq!(Layer::Fail.sample_index().unwrap(), 2);
    assert_eq!(Layer::Pass.sample_index().unwrap(), 3);
    assert!(matches!(
        Layer::Overlay.sample_index(),
        Err(OsbError::InvalidValue(_))
    ));
}

#[test]
fn origin_spelling_aliases_collapse() {
    assert_eq!("Center".parse::<Origin>().unwrap(), Origin::Centre);
    assert_eq!("Centre".parse::<Origin>().unwrap(), Origin::Centre);
    assert_eq!(
        "BottomCenter".parse::<Origin>().unwrap(),
        Origin::BottomCentre
    );
    assert_eq!(Origin::TopCentre.to_string(), "TopCentre");
    assert!("Middle".parse::<Origin>().is_err());

    let o: Origin = serde_json::from_str("\"CenterRight\"").unwrap();
    assert_eq!(o, Origin::CentreRight);
}

#[test]
fn loop_and_trigger_names() {
    assert_eq!("LoopOnce".parse::<LoopType>().unwrap(), LoopType::LoopOnce);
    assert!("Loop".parse::<LoopType>().is_err());
    assert_eq!(
        "Failing".parse::<TriggerCondition>().unwrap(),
        TriggerCondition::Failing
    );
    let err = "HitSound".parse::<TriggerCondition>().unwrap_err();
    assert!(
        err.to_string()
            .contains("Parameter on expects Passing or Failing")
    );
}
