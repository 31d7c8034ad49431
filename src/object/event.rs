use crate::{
    foundation::{
        error::OsbResult,
        validate::{assert_file_extension, assert_in_range},
    },
    object::{kinds::Layer, visual::IMAGE_EXTENSIONS},
};

/// Accepted extensions for background videos.
pub const VIDEO_EXTENSIONS: [&str; 8] = ["mp4", "avi", "flv", "m4v", "mkv", "mpg", "mpeg", "wmv"];

/// Accepted extensions for audio samples.
pub const AUDIO_EXTENSIONS: [&str; 3] = ["mp3", "ogg", "wav"];

/// The beatmap's background image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Background {
    file_path: String,
}

impl Background {
    /// Declare the background image.
    pub fn new(file_path: impl Into<String>) -> OsbResult<Self> {
        let file_path = file_path.into();
        assert_file_extension(&file_path, &IMAGE_EXTENSIONS, "file_path")?;
        Ok(Self { file_path })
    }

    /// Image path.
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// `0,0,"<path>"`
    pub fn line(&self) -> String {
        format!("0,0,\"{}\"", self.file_path)
    }
}

/// A background video.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Video {
    file_path: String,
    start_time: i32,
}

impl Video {
    /// Declare a video starting at `start_time` milliseconds.
    pub fn new(file_path: impl Into<String>, start_time: i32) -> OsbResult<Self> {
        let file_path = file_path.into();
        assert_file_extension(&file_path, &VIDEO_EXTENSIONS, "file_path")?;
        Ok(Self {
            file_path,
            start_time,
        })
    }

    /// Video path.
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// When playback starts.
    pub fn start_time(&self) -> i32 {
        self.start_time
    }

    /// `1,<start>,"<path>"`
    pub fn line(&self) -> String {
        format!("1,{},\"{}\"", self.start_time, self.file_path)
    }
}

/// An audio cue played once at a given time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    time: i32,
    layer: Layer,
    layer_index: u8,
    file_path: String,
    volume: u8,
}

impl Sample {
    /// Default volume, in percent.
    pub const DEFAULT_VOLUME: i64 = 100;

    /// Declare a sample at `time` milliseconds.
    ///
    /// `layer` controls when the sample plays (`Fail`/`Pass` only in that
    /// state) and cannot be `Overlay`. `volume` is a percentage in `[0, 100]`.
    pub fn new(
        time: i32,
        layer: Layer,
        file_path: impl Into<String>,
        volume: i64,
    ) -> OsbResult<Self> {
        let file_path = file_path.into();
        let layer_index = layer.sample_index()?;
        assert_file_extension(&file_path, &AUDIO_EXTENSIONS, "file_path")?;
        assert_in_range(volume, 0..=100, "volume")?;
        Ok(Self {
            time,
            layer,
            layer_index,
            file_path,
            // In range, so the narrowing is lossless.
            volume: volume as u8,
        })
    }

    /// When the sample plays.
    pub fn time(&self) -> i32 {
        self.time
    }

    /// Layer the sample belongs to.
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Audio path.
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Volume percentage.
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// `Sample,<time>,<layer index>,"<path>",<volume>`
    pub fn line(&self) -> String {
        format!(
            "Sample,{},{},\"{}\",{}",
            self.time, self.layer_index, self.file_path, self.volume
        )
    }
}

/// Entry of the background-and-video section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackgroundEvent {
    /// Background image.
    Background(Background),
    /// Background video.
    Video(Video),
}

impl BackgroundEvent {
    /// Encoded line.
    pub fn line(&self) -> String {
        match self {
            Self::Background(b) => b.line(),
            Self::Video(v) => v.line(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/object/event.rs"]
mod tests;
