use std::path::Path;

use crate::{
    foundation::error::{OsbError, OsbResult},
    scene::storyboard::{EVENTS_HEADER, RenderOptions, Storyboard},
};

fn is_section_header(line: &str) -> bool {
    let t = line.trim();
    t.len() > 2 && t.starts_with('[') && t.ends_with(']')
}

/// Replace the `[Events]` section of a beatmap with `document`.
///
/// Lines before the `[Events]` line and every section after it are kept; the
/// old section body is dropped. A beatmap without `[Events]` gets the document
/// appended after a blank line. All lines are re-terminated with the chosen
/// line ending.
pub fn splice_into_osu(existing: &str, document: &str, opts: &RenderOptions) -> String {
    let eol = opts.line_ending.as_str();
    let lines: Vec<&str> = existing.lines().collect();
    let doc_lines = document.lines();

    let mut out = String::with_capacity(existing.len() + document.len());
    let mut push = |line: &str| {
        out.push_str(line);
        out.push_str(eol);
    };

    match lines.iter().position(|l| l.trim() == EVENTS_HEADER) {
        Some(start) => {
            let end = lines[start + 1..]
                .iter()
                .position(|l| is_section_header(l))
                .map_or(lines.len(), |i| start + 1 + i);

            lines[..start].iter().copied().for_each(&mut push);
            doc_lines.for_each(&mut push);
            if end < lines.len() {
                push("");
                lines[end..].iter().copied().for_each(&mut push);
            }
        }
        None => {
            tracing::debug!("beatmap has no [Events] section; appending");
            lines.iter().copied().for_each(&mut push);
            if !lines.is_empty() {
                push("");
            }
            doc_lines.for_each(&mut push);
        }
    }
    out
}

/// Write `storyboard` next to a beatmap.
///
/// `.osb` targets receive the whole document; parent directories are created.
/// `.osu` targets must already exist and have their `[Events]` section
/// replaced through [`splice_into_osu`].
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn write_storyboard(
    storyboard: &Storyboard,
    path: impl AsRef<Path>,
    opts: &RenderOptions,
) -> OsbResult<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let document = storyboard.to_text_with(opts);

    match ext.as_deref() {
        Some("osb") => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, document)?;
        }
        Some("osu") => {
            if !path.is_file() {
                return Err(OsbError::invalid_value(format!(
                    "cannot find osu file '{}'",
                    path.display()
                )));
            }
            let existing = std::fs::read_to_string(path)?;
            std::fs::write(path, splice_into_osu(&existing, &document, opts))?;
        }
        _ => {
            return Err(OsbError::invalid_value(format!(
                "Parameter path expects a .osb or .osu file, got '{}' instead.",
                path.display()
            )));
        }
    }
    tracing::info!("wrote storyboard");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/output/placement.rs"]
mod tests;
