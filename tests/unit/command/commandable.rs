use super::*;
use crate::{command::list::TriggerState, foundation::error::OsbError};

#[test]
fn operations_append_in_declaration_order() {
    let mut list = CommandList::new();
    list.fade(Timing::span(0, 500), 0.0, Some(1.0))
        .unwrap()
        .move_to(Timing::at(0), [320.0, 240.0], None)
        .unwrap()
        .scale(Timing::at(0), 0.5, None)
        .unwrap()
        .additive_color_blending(0, 1000)
        .unwrap();

    assert_eq!(
        list.lines(),
        [
            " F,0,0,500,0,1",
            " M,0,0,,320,240",
            " S,0,0,,0.5",
            " P,0,1000,A",
        ]
    );
}

#[test]
fn color_accepts_channel_arrays() {
    let mut list = CommandList::new();
    list.color(Timing::at(0), [255, 255, 0], None).unwrap();
    assert_eq!(list.lines(), [" C,0,0,,255,255,0"]);

    let yellow = Color::try_from([255i64, 255, 0]).unwrap();
    list.color(Timing::at(10), yellow, Some(Color::WHITE))
        .unwrap();
    assert_eq!(list.lines()[1], " C,0,10,,255,255,0,255,255,255");
}

#[test]
fn invalid_input_leaves_list_untouched() {
    let mut list = CommandList::new();
    list.fade(Timing::at(0), 1.0, None).unwrap();

    let mixed = list.scale(Timing::at(0), 2.0, Some([1.0, 1.0].into()));
    assert!(mixed.is_err());
    let neither = Flip {
        horizontally: false,
        vertically: false,
    };
    assert!(list.flip(0, 10, neither).is_err());
    assert!(list.fade(Timing::at(0), 2.0, None).is_err());
    assert_eq!(list.len(), 1);
}

#[test]
fn trigger_body_is_nested_and_seals_the_object() {
    let mut list = CommandList::new();
    list.trigger(TriggerCondition::Passing, 0, 1000, |body| {
        body.fade(Timing::span(0, 100), 0.0, Some(1.0))?;
        body.rotate(Timing::at(0), 0.25, None)?;
        Ok(())
    })
    .unwrap();

    assert_eq!(
        list.lines(),
        [" T,Passing,0,1000", "  F,0,0,100,0,1", "  R,0,0,,0.25"]
    );
    assert_eq!(list.trigger_state(), TriggerState::Finalized);

    let err = list.fade(Timing::at(0), 1.0, None).unwrap_err();
    assert!(matches!(err, OsbError::State(_)));
    assert!(
        err.to_string()
            .contains("after a trigger block has been finalized")
    );
    assert_eq!(list.len(), 3);
}

#[test]
fn trigger_after_commands_is_a_state_error() {
    let mut list = CommandList::new();
    list.move_x(Timing::at(0), 1.0, None).unwrap();
    let err = list
        .trigger(TriggerCondition::Failing, 0, 10, |b| {
            b.fade(Timing::at(0), 1.0, None)?;
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(err, OsbError::State(_)));
    assert_eq!(list.lines(), [" MX,0,0,,1"]);
}

#[test]
fn empty_trigger_is_invalid_and_not_finalized() {
    let mut list = CommandList::new();
    let err = list
        .trigger(TriggerCondition::Passing, 0, 10, |_| Ok(()))
        .unwrap_err();
    assert!(matches!(err, OsbError::InvalidValue(_)));
    assert!(!list.is_trigger_finalized());
    assert!(list.is_empty());

    // Still usable afterwards.
    list.fade(Timing::at(0), 1.0, None).unwrap();
    assert_eq!(list.lines(), [" F,0,0,,1"]);
}

#[test]
fn nested_trigger_fails_and_rolls_back() {
    let mut list = CommandList::new();
    let err = list
        .trigger(TriggerCondition::Passing, 0, 10, |outer| {
            outer.fade(Timing::at(0), 1.0, None)?;
            outer.trigger(TriggerCondition::Failing, 0, 5, |inner| {
                inner.fade(Timing::at(0), 0.0, None)?;
                Ok(())
            })?;
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(err, OsbError::State(_)));
    assert!(list.is_empty());
    assert_eq!(list.trigger_state(), TriggerState::Idle);
}
