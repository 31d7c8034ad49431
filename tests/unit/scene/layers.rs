use super::*;
use crate::object::{
    event::{Background, Video},
    kinds::Origin,
    visual::Sprite,
};

fn sprite(layer: Layer, path: &str) -> VisualObject {
    VisualObject::from(Sprite::new(layer, Origin::Centre, path, None).unwrap())
}

#[test]
fn visuals_land_in_their_layer() {
    let mut b = LayerBuckets::new();
    b.push_visual(sprite(Layer::Pass, "a.png"));
    b.push_visual(sprite(Layer::Overlay, "b.png"));
    b.push_visual(sprite(Layer::Pass, "c.png"));

    let pass: Vec<_> = b.layer(Layer::Pass).iter().map(|o| o.header()).collect();
    assert_eq!(
        pass,
        [
            "Sprite,Pass,Centre,\"a.png\"",
            "Sprite,Pass,Centre,\"c.png\"",
        ]
    );
    assert_eq!(b.layer(Layer::Overlay).len(), 1);
    assert!(b.layer(Layer::Background).is_empty());
    assert_eq!(b.len(), 3);
}

#[test]
fn merge_appends_each_bucket_after_existing_entries() {
    let mut a = LayerBuckets::new();
    a.push_visual(sprite(Layer::Foreground, "first.png"));
    let bg = Background::new("bg.jpg").unwrap();
    a.push_background(BackgroundEvent::Background(bg));

    let mut b = LayerBuckets::new();
    b.push_visual(sprite(Layer::Foreground, "second.png"));
    b.push_visual(sprite(Layer::Foreground, "third.png"));
    b.push_background(BackgroundEvent::Video(Video::new("v.mp4", 0).unwrap()));
    b.push_sample(Sample::new(0, Layer::Pass, "s.wav", 100).unwrap());

    a.merge(b);
    let fg: Vec<_> = a
        .layer(Layer::Foreground)
        .iter()
        .map(|o| o.header())
        .collect();
    assert_eq!(
        fg,
        [
            "Sprite,Foreground,Centre,\"first.png\"",
            "Sprite,Foreground,Centre,\"second.png\"",
            "Sprite,Foreground,Centre,\"third.png\"",
        ]
    );
    let lines: Vec<_> = a.background_and_video().iter().map(|e| e.line()).collect();
    assert_eq!(lines, ["0,0,\"bg.jpg\"", "1,0,\"v.mp4\""]);
    assert_eq!(a.samples().len(), 1);
}

#[test]
fn empty_by_default() {
    assert!(LayerBuckets::default().is_empty());
}
