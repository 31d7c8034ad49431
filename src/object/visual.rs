use crate::{
    command::{commandable::Commandable, list::CommandList},
    foundation::{
        core::Vector2,
        error::OsbResult,
        validate::{assert_file_extension, assert_finite, assert_in_range},
    },
    object::kinds::{Layer, LoopType, Origin},
};

/// Accepted extensions for sprite, animation and background images.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

fn check_position(position: Option<Vector2>) -> OsbResult<()> {
    if let Some(p) = position {
        assert_finite(p.x, "initial_position")?;
        assert_finite(p.y, "initial_position")?;
    }
    Ok(())
}

/// A still image.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    layer: Layer,
    origin: Origin,
    file_path: String,
    initial_position: Option<Vector2>,
    commands: CommandList,
}

impl Sprite {
    /// Declare a sprite on `layer`, anchored at `origin`.
    ///
    /// `file_path` is relative to the beatmap directory and must name a
    /// `.png`, `.jpg` or `.jpeg` file.
    pub fn new(
        layer: Layer,
        origin: Origin,
        file_path: impl Into<String>,
        initial_position: Option<Vector2>,
    ) -> OsbResult<Self> {
        let file_path = file_path.into();
        assert_file_extension(&file_path, &IMAGE_EXTENSIONS, "file_path")?;
        check_position(initial_position)?;
        Ok(Self {
            layer,
            origin,
            file_path,
            initial_position,
            commands: CommandList::new(),
        })
    }

    /// Layer the sprite is drawn on.
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Anchor point.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Image path.
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Position before any move command applies.
    pub fn initial_position(&self) -> Option<Vector2> {
        self.initial_position
    }

    /// `Sprite,<layer>,<origin>,"<path>"[,<x>,<y>]`
    pub fn header(&self) -> String {
        let mut line = format!(
            "Sprite,{},{},\"{}\"",
            self.layer, self.origin, self.file_path
        );
        if let Some(p) = self.initial_position {
            line.push_str(&format!(",{p}"));
        }
        line
    }
}

impl Commandable for Sprite {
    fn commands(&self) -> &CommandList {
        &self.commands
    }

    fn commands_mut(&mut self) -> &mut CommandList {
        &mut self.commands
    }
}

/// A frame-sequence image.
///
/// Frames are read from `<stem>0.<ext>`, `<stem>1.<ext>`, ... by the client;
/// `file_path` names the sequence without the frame number.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    layer: Layer,
    origin: Origin,
    file_path: String,
    initial_position: Option<Vector2>,
    frame_count: u32,
    frame_delay: u32,
    loop_type: LoopType,
    commands: CommandList,
}

impl Animation {
    /// Declare an animation of `frame_count` frames shown `frame_delay`
    /// milliseconds each.
    pub fn new(
        layer: Layer,
        origin: Origin,
        file_path: impl Into<String>,
        initial_position: Option<Vector2>,
        frame_count: u32,
        frame_delay: u32,
        loop_type: LoopType,
    ) -> OsbResult<Self> {
        let file_path = file_path.into();
        assert_file_extension(&file_path, &IMAGE_EXTENSIONS, "file_path")?;
        check_position(initial_position)?;
        assert_in_range(frame_count, 1..=u32::MAX, "frame_count")?;
        assert_in_range(frame_delay, 1..=u32::MAX, "frame_delay")?;
        Ok(Self {
            layer,
            origin,
            file_path,
            initial_position,
            frame_count,
            frame_delay,
            loop_type,
            commands: CommandList::new(),
        })
    }

    /// Layer the animation is drawn on.
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Anchor point.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Frame sequence path.
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Number of frames.
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Milliseconds per frame.
    pub fn frame_delay(&self) -> u32 {
        self.frame_delay
    }

    /// Playback mode.
    pub fn loop_type(&self) -> LoopType {
        self.loop_type
    }

    /// `Animation,<layer>,<origin>,"<path>",<x>,<y>,<frames>,<delay>,<loop>`
    ///
    /// The fields are positional, so a missing position is written as `0,0`.
    pub fn header(&self) -> String {
        format!(
            "Animation,{},{},\"{}\",{},{},{},{}",
            self.layer,
            self.origin,
            self.file_path,
            self.initial_position.unwrap_or(Vector2::ZERO),
            self.frame_count,
            self.frame_delay,
            self.loop_type
        )
    }
}

impl Commandable for Animation {
    fn commands(&self) -> &CommandList {
        &self.commands
    }

    fn commands_mut(&mut self) -> &mut CommandList {
        &mut self.commands
    }
}

/// An object with a command list, placed into one of the five layers.
#[derive(Clone, Debug, PartialEq)]
pub enum VisualObject {
    /// A still image.
    Sprite(Sprite),
    /// A frame sequence.
    Animation(Animation),
}

impl VisualObject {
    /// Layer bucket the object belongs to.
    pub fn layer(&self) -> Layer {
        match self {
            Self::Sprite(s) => s.layer(),
            Self::Animation(a) => a.layer(),
        }
    }

    /// Declaration line.
    pub fn header(&self) -> String {
        match self {
            Self::Sprite(s) => s.header(),
            Self::Animation(a) => a.header(),
        }
    }

    /// Encoded command lines.
    pub fn command_lines(&self) -> &[String] {
        match self {
            Self::Sprite(s) => s.commands().lines(),
            Self::Animation(a) => a.commands().lines(),
        }
    }
}

impl From<Sprite> for VisualObject {
    fn from(s: Sprite) -> Self {
        Self::Sprite(s)
    }
}

impl From<Animation> for VisualObject {
    fn from(a: Animation) -> Self {
        Self::Animation(a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/object/visual.rs"]
mod tests;
