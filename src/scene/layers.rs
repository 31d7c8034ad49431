use crate::object::{
    event::{BackgroundEvent, Sample},
    kinds::Layer,
    visual::VisualObject,
};

/// Objects sorted into the document's sections.
///
/// Five layer buckets hold visual objects; two special buckets hold the
/// background/video lines and the audio samples. Every bucket keeps insertion
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerBuckets {
    layers: [Vec<VisualObject>; 5],
    background_and_video: Vec<BackgroundEvent>,
    samples: Vec<Sample>,
}

impl LayerBuckets {
    /// Empty buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a visual object to its layer's bucket.
    pub fn push_visual(&mut self, object: VisualObject) {
        self.layers[object.layer().index()].push(object);
    }

    /// Append a background or video line.
    pub fn push_background(&mut self, event: BackgroundEvent) {
        self.background_and_video.push(event);
    }

    /// Append an audio sample.
    pub fn push_sample(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Append every bucket of `other` onto the matching bucket of `self`.
    ///
    /// Each of `other`'s buckets lands as one contiguous run after the
    /// existing entries, in its own order.
    pub fn merge(&mut self, other: LayerBuckets) {
        let LayerBuckets {
            layers,
            background_and_video,
            samples,
        } = other;
        for (mine, theirs) in self.layers.iter_mut().zip(layers) {
            mine.extend(theirs);
        }
        self.background_and_video.extend(background_and_video);
        self.samples.extend(samples);
    }

    /// Visual objects on `layer`, in insertion order.
    pub fn layer(&self, layer: Layer) -> &[VisualObject] {
        &self.layers[layer.index()]
    }

    /// Background and video entries.
    pub fn background_and_video(&self) -> &[BackgroundEvent] {
        &self.background_and_video
    }

    /// Audio samples.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Total number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.layers.iter().map(Vec::len).sum::<usize>()
            + self.background_and_video.len()
            + self.samples.len()
    }

    /// Return `true` when every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layers.rs"]
mod tests;
