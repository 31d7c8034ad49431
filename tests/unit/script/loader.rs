use super::*;
use crate::object::kinds::Layer;

fn text(script: &str) -> String {
    parse_script(script).unwrap().to_text()
}

#[test]
fn builds_sprite_with_commands() {
    let out = text(
        r#"{"objects": [{
            "type": "sprite", "layer": "Foreground", "origin": "Centre",
            "file_path": "sb/dot.png", "initial_position": [320, 240],
            "commands": [
                {"fade": {"start_time": 0, "end_time": 500, "start_opacity": 0, "end_opacity": 1}},
                {"move": {"start_time": 0, "end_time": 1000, "easing": "SineOut",
                          "start_position": [0, 0], "end_position": [100, 50.5]}},
                {"color": {"start_time": 0, "start_color": [255, 255, 0]}},
                {"scale": {"start_time": 0, "end_time": 100, "start_scale": [1, 2]}},
                {"flip": {"start_time": 0, "end_time": 100, "vertically": true}}
            ]
        }]}"#,
    );
    let expected = [
        "Sprite,Foreground,Centre,\"sb/dot.png\",320,240",
        " F,0,0,500,0,1",
        " M,16,0,1000,0,0,100,50.5",
        " C,0,0,,255,255,0",
        " V,0,0,100,1,2",
        " P,0,100,V",
    ]
    .join("\n");
    assert!(out.contains(&format!("{expected}\n")));
}

#[test]
fn easing_accepts_code_or_name() {
    for easing in ["3", "\"QuadIn\""] {
        let script = format!(
            r#"{{"objects": [{{"type": "sprite", "layer": "Pass", "origin": "TopLeft",
                "file_path": "a.png",
                "commands": [{{"rotate": {{"start_time": 0, "end_time": 10, "easing": {easing},
                                          "start_angle": 0, "end_angle": 1}}}}]}}]}}"#
        );
        assert!(text(&script).contains(" R,3,0,10,0,1\n"));
    }
}

#[test]
fn trigger_body_is_nested() {
    let out = text(
        r#"{"objects": [{
            "type": "sprite", "layer": "Foreground", "origin": "Centre", "file_path": "a.png",
            "commands": [{"trigger": {"on": "Passing", "start_time": 0, "end_time": 9000,
                "commands": [{"fade": {"start_time": 0, "end_time": 200,
                                       "start_opacity": 1, "end_opacity": 0}}]}}]
        }]}"#,
    );
    assert!(out.contains(" T,Passing,0,9000\n  F,0,0,200,1,0\n"));
}

#[test]
fn groups_and_single_line_objects() {
    let sb = parse_script(
        r#"{"objects": [
            {"type": "background", "file_path": "bg.jpg"},
            {"type": "video", "file_path": "v.mp4", "start_time": 250},
            {"type": "sample", "time": 10, "layer": "Fail", "file_path": "s.ogg"},
            {"type": "group", "objects": [
                {"type": "animation", "layer": "Overlay", "origin": "Centre",
                 "file_path": "f.png", "frame_count": 4, "frame_delay": 50}
            ]}
        ]}"#,
    )
    .unwrap();
    let out = sb.to_text();
    assert!(out.contains("0,0,\"bg.jpg\"\n1,250,\"v.mp4\"\n"));
    assert!(out.contains("Sample,10,2,\"s.ogg\",100\n"));
    let header = "Animation,Overlay,Centre,\"f.png\",0,0,4,50,LoopForever\n";
    assert!(out.contains(header));
    assert_eq!(sb.buckets().layer(Layer::Overlay).len(), 1);
}

#[test]
fn shape_errors_are_type_errors_with_path() {
    let err = parse_script(
        r#"{"objects": [
            {"type": "background", "file_path": "bg.jpg"},
            {"type": "sprite", "layer": "Pass", "origin": "Centre", "file_path": "a.png",
             "commands": [{"fade": {"start_time": "soon", "start_opacity": 1}}]}
        ]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, OsbError::Type(_)));
    let expected = concat!(
        "type error: objects[1].commands[0]: ",
        "Parameter start_time expects type Integer, got type String instead."
    );
    assert_eq!(err.to_string(), expected);
}

#[test]
fn missing_fields_report_null() {
    let err = parse_script(r#"{"objects": [{"type": "background"}]}"#).unwrap_err();
    assert!(matches!(err, OsbError::Type(_)));
    let message = err.to_string();
    assert!(message.contains("objects[0]: Parameter file_path"));
    assert!(message.contains("got type Null"));
}

#[test]
fn bad_values_are_invalid_value_errors() {
    let err = parse_script(
        r#"{"objects": [{"type": "group", "objects": [{"type": "sprite", "layer": "Middle",
            "origin": "Centre", "file_path": "a.png"}]}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, OsbError::InvalidValue(_)));
    let message = err.to_string();
    assert!(message.contains("objects[0].objects[0]: Parameter layer"));

    let err = parse_script(r#"{"objects": [{"type": "planet"}]}"#).unwrap_err();
    assert!(matches!(err, OsbError::InvalidValue(_)));
}

#[test]
fn state_errors_surface_from_the_builder() {
    let err = parse_script(
        r#"{"objects": [{"type": "sprite", "layer": "Pass", "origin": "Centre",
            "file_path": "a.png",
            "commands": [
                {"fade": {"start_time": 0, "start_opacity": 1}},
                {"trigger": {"on": "Failing", "start_time": 0, "end_time": 10,
                    "commands": [{"fade": {"start_time": 0, "start_opacity": 0}}]}}
            ]}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, OsbError::State(_)));
    assert!(err.to_string().contains("objects[0].commands[1]: "));
}

#[test]
fn trigger_body_errors_keep_the_inner_path() {
    let err = parse_script(
        r#"{"objects": [{"type": "sprite", "layer": "Pass", "origin": "Centre",
            "file_path": "a.png",
            "commands": [{"trigger": {"on": "Failing", "start_time": 0, "end_time": 10,
                "commands": [{"fade": {"start_time": 0, "start_opacity": 2}}]}}]}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, OsbError::InvalidValue(_)));
    assert!(
        err.to_string()
            .starts_with("invalid value: objects[0].commands[0].commands[0]: ")
    );

    let err = parse_script(
        r#"{"objects": [{"type": "sprite", "layer": "Pass", "origin": "Centre",
            "file_path": "a.png",
            "commands": [{"trigger": {"on": "Failing", "start_time": 0, "end_time": 10,
                "commands": []}}]}]}"#,
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid value: objects[0].commands[0]: empty trigger body is invalid"
    );
}

#[test]
fn commands_need_exactly_one_key() {
    let err = parse_script(
        r#"{"objects": [{"type": "sprite", "layer": "Pass", "origin": "Centre",
            "file_path": "a.png",
            "commands": [{"fade": {}, "rotate": {}}]}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, OsbError::Type(_)));
}

#[test]
fn json_syntax_errors_are_script_errors() {
    let err = parse_script("{objects").unwrap_err();
    assert!(matches!(err, OsbError::Script(_)));
    assert!(matches!(parse_script("[]"), Err(OsbError::Type(_))));
}
