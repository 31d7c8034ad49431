use super::*;
use crate::{
    command::{args::Timing, commandable::Commandable},
    object::{
        event::{Background, Sample},
        kinds::Origin,
        visual::Sprite,
    },
};

const EMPTY: &str = "[Events]\n\
//Background and Video events\n\
//Storyboard Layer 0 (Background)\n\
//Storyboard Layer 1 (Fail)\n\
//Storyboard Layer 2 (Pass)\n\
//Storyboard Layer 3 (Foreground)\n\
//Storyboard Layer 4 (Overlay)\n\
//Storyboard Sound Samples\n";

#[test]
fn empty_storyboard_writes_every_header() {
    assert_eq!(Storyboard::new().to_text(), EMPTY);
}

#[test]
fn objects_are_written_under_their_sections() {
    let mut s = Sprite::new(Layer::Foreground, Origin::Centre, "sb/dot.png", None).unwrap();
    s.fade(Timing::span(0, 1000), 0.0, Some(1.0)).unwrap();

    let mut sb = Storyboard::new();
    sb.add(s)
        .add(Background::new("bg.jpg").unwrap())
        .add(Sample::new(100, Layer::Pass, "hit.wav", 80).unwrap());

    let expected = [
        "[Events]",
        "//Background and Video events",
        "0,0,\"bg.jpg\"",
        "//Storyboard Layer 0 (Background)",
        "//Storyboard Layer 1 (Fail)",
        "//Storyboard Layer 2 (Pass)",
        "//Storyboard Layer 3 (Foreground)",
        "Sprite,Foreground,Centre,\"sb/dot.png\"",
        " F,0,0,1000,0,1",
        "//Storyboard Layer 4 (Overlay)",
        "//Storyboard Sound Samples",
        "Sample,100,3,\"hit.wav\",80",
        "",
    ]
    .join("\n");
    assert_eq!(sb.to_text(), expected);
    assert_eq!(sb.to_string(), expected);
}

#[test]
fn crlf_terminates_every_line() {
    let text = Storyboard::new().to_text_with(&RenderOptions::crlf());
    assert_eq!(text, EMPTY.replace('\n', "\r\n"));
    assert!(text.ends_with("\r\n"));
}

#[test]
fn shl_builds_a_storyboard() {
    let sb = Storyboard::new()
        << Sprite::new(Layer::Overlay, Origin::TopLeft, "a.png", None).unwrap();
    assert_eq!(sb.buckets().layer(Layer::Overlay).len(), 1);
}

#[test]
fn layer_header_format() {
    assert_eq!(layer_header(Layer::Pass), "//Storyboard Layer 2 (Pass)");
}
