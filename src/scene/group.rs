use crate::{
    object::{
        event::{Background, BackgroundEvent, Sample, Video},
        visual::{Animation, Sprite, VisualObject},
    },
    scene::layers::LayerBuckets,
};

/// Anything that can be added to a [`Group`] or [`crate::Storyboard`].
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Still image.
    Sprite(Sprite),
    /// Frame sequence.
    Animation(Animation),
    /// Background video.
    Video(Video),
    /// Background image.
    Background(Background),
    /// Audio cue.
    Sample(Sample),
    /// Nested group, flattened into the receiver.
    Group(Group),
}

impl From<Sprite> for Node {
    fn from(v: Sprite) -> Self {
        Self::Sprite(v)
    }
}

impl From<Animation> for Node {
    fn from(v: Animation) -> Self {
        Self::Animation(v)
    }
}

impl From<Video> for Node {
    fn from(v: Video) -> Self {
        Self::Video(v)
    }
}

impl From<Background> for Node {
    fn from(v: Background) -> Self {
        Self::Background(v)
    }
}

impl From<Sample> for Node {
    fn from(v: Sample) -> Self {
        Self::Sample(v)
    }
}

impl From<Group> for Node {
    fn from(v: Group) -> Self {
        Self::Group(v)
    }
}

impl From<VisualObject> for Node {
    fn from(v: VisualObject) -> Self {
        match v {
            VisualObject::Sprite(s) => Self::Sprite(s),
            VisualObject::Animation(a) => Self::Animation(a),
        }
    }
}

/// An authoring-time container of objects and nested groups.
///
/// Groups carry no output of their own: adding a group to another container
/// appends its buckets to the container's, so a group's objects stay together
/// within each layer.
///
/// ```
/// use osb::{Group, Layer, Origin, Sprite};
///
/// let back = Sprite::new(Layer::Background, Origin::Centre, "back.png", None)?;
/// let front = Sprite::new(Layer::Foreground, Origin::Centre, "front.png", None)?;
/// let scene = Group::new() << back << front;
/// assert_eq!(scene.buckets().layer(Layer::Foreground).len(), 1);
/// # Ok::<(), osb::OsbError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    buckets: LayerBuckets,
}

impl Group {
    /// An empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object or nested group, returning `self` for chaining.
    pub fn add(&mut self, node: impl Into<Node>) -> &mut Self {
        let buckets = &mut self.buckets;
        match node.into() {
            Node::Sprite(s) => buckets.push_visual(VisualObject::Sprite(s)),
            Node::Animation(a) => buckets.push_visual(VisualObject::Animation(a)),
            Node::Video(v) => buckets.push_background(BackgroundEvent::Video(v)),
            Node::Background(b) => buckets.push_background(BackgroundEvent::Background(b)),
            Node::Sample(s) => buckets.push_sample(s),
            Node::Group(g) => {
                tracing::trace!(entries = g.buckets.len(), "merging group");
                buckets.merge(g.buckets);
            }
        }
        self
    }

    /// The group's objects, sorted by section.
    pub fn buckets(&self) -> &LayerBuckets {
        &self.buckets
    }

    /// Consume the group, keeping its buckets.
    pub fn into_buckets(self) -> LayerBuckets {
        self.buckets
    }

    /// Return `true` when nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl<T: Into<Node>> std::ops::Shl<T> for Group {
    type Output = Group;

    fn shl(mut self, rhs: T) -> Group {
        self.add(rhs);
        self
    }
}

impl<T: Into<Node>> std::ops::ShlAssign<T> for Group {
    fn shl_assign(&mut self, rhs: T) {
        self.add(rhs);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/group.rs"]
mod tests;
