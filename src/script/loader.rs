use std::path::Path;

use serde_json::{Map, Value};

use crate::{
    animation::ease::Easing,
    command::{
        args::{Flip, ScaleValue, Timing},
        commandable::Commandable,
    },
    foundation::{
        core::{Color, Vector2},
        error::{OsbError, OsbResult},
        validate::{Kind, assert_type, not_one_of},
    },
    object::{
        event::{Background, Sample, Video},
        kinds::{LoopType, TriggerCondition},
        visual::{Animation, Sprite},
    },
    scene::{group::Group, storyboard::Storyboard},
};

const NUMBERS: Kind = Kind::ArrayOf(&Kind::Number);
const INTEGERS: Kind = Kind::ArrayOf(&Kind::Integer);
const OBJECTS: Kind = Kind::ArrayOf(&Kind::Object);

static NULL: Value = Value::Null;

const OBJECT_TYPES: [&str; 6] = [
    "background",
    "video",
    "sample",
    "sprite",
    "animation",
    "group",
];

const COMMAND_KEYS: [&str; 10] = [
    "fade",
    "move",
    "move_x",
    "move_y",
    "scale",
    "rotate",
    "color",
    "flip",
    "additive_color_blending",
    "trigger",
];

/// Read and build a storyboard script from disk.
pub fn load_script(path: impl AsRef<Path>) -> OsbResult<Storyboard> {
    let text = std::fs::read_to_string(path.as_ref())?;
    parse_script(&text)
}

/// Build a storyboard from script text.
pub fn parse_script(text: &str) -> OsbResult<Storyboard> {
    let value: Value = serde_json::from_str(text).map_err(|e| OsbError::script(e.to_string()))?;
    build_storyboard(&value)
}

/// Build a storyboard from an already parsed script.
///
/// Errors carry the JSON path of the node that failed, e.g.
/// `objects[2].commands[0]: ...`.
#[tracing::instrument(skip_all)]
pub fn build_storyboard(script: &Value) -> OsbResult<Storyboard> {
    assert_type(script, &[Kind::Object], "script")?;
    let fields = Fields::new(script);
    let objects = fields.array_of_objects("objects")?;

    let mut root = Group::new();
    add_objects(&mut root, objects, "objects")?;

    let mut storyboard = Storyboard::new();
    storyboard.add(root);
    tracing::debug!(
        entries = storyboard.buckets().len(),
        "built storyboard from script"
    );
    Ok(storyboard)
}

fn add_objects(target: &mut Group, objects: &[Value], path: &str) -> OsbResult<()> {
    for (i, object) in objects.iter().enumerate() {
        add_object(target, object, &format!("{path}[{i}]"))?;
    }
    Ok(())
}

fn add_object(target: &mut Group, value: &Value, path: &str) -> OsbResult<()> {
    let f = Fields::new(value);
    let at = |e: OsbError| e.at(path);
    match f.string("type").map_err(at)? {
        "background" => {
            let file_path = f.string("file_path").map_err(at)?;
            target.add(Background::new(file_path).map_err(at)?);
        }
        "video" => {
            target.add(video(&f).map_err(at)?);
        }
        "sample" => {
            target.add(sample(&f).map_err(at)?);
        }
        "sprite" => {
            let mut sprite = sprite(&f).map_err(at)?;
            apply_object_commands(&mut sprite, &f, path)?;
            target.add(sprite);
        }
        "animation" => {
            let mut animation = animation(&f).map_err(at)?;
            apply_object_commands(&mut animation, &f, path)?;
            target.add(animation);
        }
        "group" => {
            let objects = f.array_of_objects("objects").map_err(at)?;
            let mut group = Group::new();
            add_objects(&mut group, objects, &format!("{path}.objects"))?;
            target.add(group);
        }
        other => return Err(at(not_one_of(&other, &OBJECT_TYPES, "type"))),
    }
    Ok(())
}

fn video(f: &Fields<'_>) -> OsbResult<Video> {
    Video::new(f.string("file_path")?, f.i32_or("start_time", 0)?)
}

fn sample(f: &Fields<'_>) -> OsbResult<Sample> {
    Sample::new(
        f.i32("time")?,
        f.parsed("layer")?,
        f.string("file_path")?,
        f.opt_i64("volume")?.unwrap_or(Sample::DEFAULT_VOLUME),
    )
}

fn sprite(f: &Fields<'_>) -> OsbResult<Sprite> {
    Sprite::new(
        f.parsed("layer")?,
        f.parsed("origin")?,
        f.string("file_path")?,
        f.opt_vector("initial_position")?,
    )
}

fn animation(f: &Fields<'_>) -> OsbResult<Animation> {
    Animation::new(
        f.parsed("layer")?,
        f.parsed("origin")?,
        f.string("file_path")?,
        f.opt_vector("initial_position")?,
        f.u32("frame_count")?,
        f.u32("frame_delay")?,
        f.opt_parsed::<LoopType>("loop_type")?.unwrap_or_default(),
    )
}

fn apply_object_commands<C: Commandable>(
    target: &mut C,
    f: &Fields<'_>,
    path: &str,
) -> OsbResult<()> {
    match f.opt_array_of_objects("commands").map_err(|e| e.at(path))? {
        Some(commands) => apply_commands(target, commands, &format!("{path}.commands")),
        None => Ok(()),
    }
}

fn apply_commands<C: Commandable>(target: &mut C, list: &[Value], path: &str) -> OsbResult<()> {
    for (i, command) in list.iter().enumerate() {
        apply_command(target, command, &format!("{path}[{i}]"))?;
    }
    Ok(())
}

fn apply_command<C: Commandable>(target: &mut C, value: &Value, path: &str) -> OsbResult<()> {
    let at = |e: OsbError| e.at(path);
    let (key, args) = single_entry(value).map_err(at)?;
    assert_type(args, &[Kind::Object], key).map_err(at)?;
    let f = Fields::new(args);
    match key {
        "trigger" => apply_trigger(target, &f, path),
        _ => apply_timed(target, key, &f).map_err(at),
    }
}

fn apply_timed<C: Commandable>(target: &mut C, key: &str, f: &Fields<'_>) -> OsbResult<()> {
    match key {
        "fade" => {
            target.fade(
                f.timing()?,
                f.f64("start_opacity")?,
                f.opt_f64("end_opacity")?,
            )?;
        }
        "move" => {
            target.move_to(
                f.timing()?,
                f.vector("start_position")?,
                f.opt_vector("end_position")?,
            )?;
        }
        "move_x" => {
            target.move_x(f.timing()?, f.f64("start_x")?, f.opt_f64("end_x")?)?;
        }
        "move_y" => {
            target.move_y(f.timing()?, f.f64("start_y")?, f.opt_f64("end_y")?)?;
        }
        "scale" => {
            target.scale(
                f.timing()?,
                f.scale("start_scale")?,
                f.opt_scale("end_scale")?,
            )?;
        }
        "rotate" => {
            target.rotate(f.timing()?, f.f64("start_angle")?, f.opt_f64("end_angle")?)?;
        }
        "color" => {
            target.color(
                f.timing()?,
                f.color("start_color")?,
                f.opt_color("end_color")?,
            )?;
        }
        "flip" => {
            target.flip(f.i32("start_time")?, f.i32("end_time")?, f.flip()?)?;
        }
        "additive_color_blending" => {
            target.additive_color_blending(f.i32("start_time")?, f.i32("end_time")?)?;
        }
        other => return Err(not_one_of(&other, &COMMAND_KEYS, "command")),
    }
    Ok(())
}

fn apply_trigger<C: Commandable>(target: &mut C, f: &Fields<'_>, path: &str) -> OsbResult<()> {
    let at = |e: OsbError| e.at(path);
    let on: TriggerCondition = f.parsed("on").map_err(at)?;
    let start = f.i32("start_time").map_err(at)?;
    let end = f.i32("end_time").map_err(at)?;
    let commands = f.array_of_objects("commands").map_err(at)?;

    // Body errors already carry their own path.
    let body_path = format!("{path}.commands");
    let mut body_failed = false;
    let result = target.trigger(on, start, end, |t| {
        let outcome = apply_commands(t, commands, &body_path);
        body_failed = outcome.is_err();
        outcome
    });
    match result {
        Ok(_) => Ok(()),
        Err(e) if body_failed => Err(e),
        Err(e) => Err(at(e)),
    }
}

fn single_entry(value: &Value) -> OsbResult<(&str, &Value)> {
    assert_type(value, &[Kind::Object], "command")?;
    match value.as_object().map(|m| (m.len(), m.iter().next())) {
        Some((1, Some((key, args)))) => Ok((key.as_str(), args)),
        _ => Err(OsbError::type_error(
            "Parameter command expects an object with exactly one key.",
        )),
    }
}

/// Typed field access on one JSON object.
struct Fields<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Fields<'a> {
    fn new(value: &'a Value) -> Self {
        Self {
            map: value.as_object(),
        }
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        self.map.and_then(|m| m.get(name)).filter(|v| !v.is_null())
    }

    fn required(&self, name: &str, kinds: &[Kind]) -> OsbResult<&'a Value> {
        let value = self.get(name).unwrap_or(&NULL);
        assert_type(value, kinds, name)?;
        Ok(value)
    }

    fn optional(&self, name: &str, kinds: &[Kind]) -> OsbResult<Option<&'a Value>> {
        match self.get(name) {
            Some(value) => {
                assert_type(value, kinds, name)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn string(&self, name: &str) -> OsbResult<&'a str> {
        Ok(self
            .required(name, &[Kind::String])?
            .as_str()
            .unwrap_or_default())
    }

    fn parsed<T: std::str::FromStr<Err = OsbError>>(&self, name: &str) -> OsbResult<T> {
        self.string(name)?.parse()
    }

    fn opt_parsed<T: std::str::FromStr<Err = OsbError>>(&self, name: &str) -> OsbResult<Option<T>> {
        self.optional(name, &[Kind::String])?
            .and_then(Value::as_str)
            .map(str::parse)
            .transpose()
    }

    fn i64(&self, name: &str) -> OsbResult<i64> {
        integer(self.required(name, &[Kind::Integer])?, name)
    }

    fn opt_i64(&self, name: &str) -> OsbResult<Option<i64>> {
        self.optional(name, &[Kind::Integer])?
            .map(|v| integer(v, name))
            .transpose()
    }

    fn i32(&self, name: &str) -> OsbResult<i32> {
        narrow(self.i64(name)?, name)
    }

    fn i32_or(&self, name: &str, default: i32) -> OsbResult<i32> {
        match self.opt_i64(name)? {
            Some(v) => narrow(v, name),
            None => Ok(default),
        }
    }

    fn u32(&self, name: &str) -> OsbResult<u32> {
        narrow(self.i64(name)?, name)
    }

    fn f64(&self, name: &str) -> OsbResult<f64> {
        Ok(self
            .required(name, &[Kind::Number])?
            .as_f64()
            .unwrap_or(f64::NAN))
    }

    fn opt_f64(&self, name: &str) -> OsbResult<Option<f64>> {
        Ok(self
            .optional(name, &[Kind::Number])?
            .map(|v| v.as_f64().unwrap_or(f64::NAN)))
    }

    fn vector(&self, name: &str) -> OsbResult<Vector2> {
        vector(self.required(name, &[NUMBERS])?)
    }

    fn opt_vector(&self, name: &str) -> OsbResult<Option<Vector2>> {
        self.optional(name, &[NUMBERS])?.map(vector).transpose()
    }

    fn scale(&self, name: &str) -> OsbResult<ScaleValue> {
        scale(self.required(name, &[Kind::Number, NUMBERS])?)
    }

    fn opt_scale(&self, name: &str) -> OsbResult<Option<ScaleValue>> {
        self.optional(name, &[Kind::Number, NUMBERS])?
            .map(scale)
            .transpose()
    }

    fn color(&self, name: &str) -> OsbResult<Color> {
        color(self.required(name, &[INTEGERS, Kind::String])?)
    }

    fn opt_color(&self, name: &str) -> OsbResult<Option<Color>> {
        self.optional(name, &[INTEGERS, Kind::String])?
            .map(color)
            .transpose()
    }

    fn array_of_objects(&self, name: &str) -> OsbResult<&'a [Value]> {
        Ok(self
            .required(name, &[OBJECTS])?
            .as_array()
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    fn opt_array_of_objects(&self, name: &str) -> OsbResult<Option<&'a [Value]>> {
        Ok(self
            .optional(name, &[OBJECTS])?
            .and_then(Value::as_array)
            .map(Vec::as_slice))
    }

    fn easing(&self) -> OsbResult<Easing> {
        match self.optional("easing", &[Kind::Integer, Kind::String])? {
            Some(Value::String(name)) => name.parse(),
            Some(code) => Easing::from_code(integer(code, "easing")?),
            None => Ok(Easing::default()),
        }
    }

    fn timing(&self) -> OsbResult<Timing> {
        Ok(Timing {
            start: self.i32("start_time")?,
            end: self
                .opt_i64("end_time")?
                .map(|v| narrow(v, "end_time"))
                .transpose()?,
            easing: self.easing()?,
        })
    }

    fn flip(&self) -> OsbResult<Flip> {
        let horizontally = self.optional("horizontally", &[Kind::Bool])?;
        let vertically = self.optional("vertically", &[Kind::Bool])?;
        if horizontally.is_none() && vertically.is_none() {
            return Ok(Flip::default());
        }
        Ok(Flip {
            horizontally: horizontally.and_then(Value::as_bool).unwrap_or(false),
            vertically: vertically.and_then(Value::as_bool).unwrap_or(false),
        })
    }
}

fn integer(value: &Value, name: &str) -> OsbResult<i64> {
    value.as_i64().ok_or_else(|| {
        OsbError::invalid_value(format!(
            "Parameter {name} expects a 64-bit integer, got {value} instead."
        ))
    })
}

fn narrow<T: TryFrom<i64>>(value: i64, name: &str) -> OsbResult<T> {
    T::try_from(value).map_err(|_| {
        OsbError::invalid_value(format!(
            "Parameter {name} is out of range, got {value} instead."
        ))
    })
}

fn numbers(value: &Value) -> Vec<f64> {
    value
        .as_array()
        .map(|items| items.iter().filter_map(Value::as_f64).collect())
        .unwrap_or_default()
}

fn vector(value: &Value) -> OsbResult<Vector2> {
    Vector2::from_slice(&numbers(value))
}

fn scale(value: &Value) -> OsbResult<ScaleValue> {
    match value.as_f64() {
        Some(factor) => Ok(ScaleValue::Uniform(factor)),
        None => vector(value).map(ScaleValue::Vector),
    }
}

fn color(value: &Value) -> OsbResult<Color> {
    if let Value::String(hex) = value {
        return Color::from_hex(hex);
    }
    let channels = match value.as_array() {
        Some(items) => items
            .iter()
            .map(|v| integer(v, "color"))
            .collect::<OsbResult<Vec<_>>>()?,
        None => Vec::new(),
    };
    Color::from_slice(&channels)
}

#[cfg(test)]
#[path = "../../tests/unit/script/loader.rs"]
mod tests;
