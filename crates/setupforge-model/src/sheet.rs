//! Plain-text setup sheet export

use crate::classes::{TrackType, VehicleClass};
use crate::inputs::{SessionType, Style};
use crate::types::Setup;

const SECTIONS: [(&str, &str); 8] = [
    ("suspension", "Suspension"),
    ("aerodynamics", "Aerodynamics"),
    ("differential", "Differential"),
    ("brakes", "Brakes"),
    ("tires", "Tires"),
    ("gearing", "Gearing"),
    ("fuel", "Fuel"),
    ("chassis", "Chassis"),
];

/// Heading printed above the setup values.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetHeader {
    pub title: String,
    pub vehicle_class: VehicleClass,
    pub track_type: TrackType,
    pub style: Style,
    pub session: SessionType,
}

/// Render a setup as a plain-text sheet, one section per populated
/// subsystem. Values print at their field's precision.
pub fn render_sheet(setup: &Setup, header: &SheetHeader) -> String {
    let mut lines: Vec<(&'static str, String)> = Vec::new();
    setup.visit_numeric(|path, kind, value| {
        let (section, rest) = split_path(path);
        let unit = kind.unit();
        let value = kind.precision().format(value);
        let line = if unit.is_empty() {
            format!("  {}: {value}", label(rest))
        } else {
            format!("  {}: {value} {unit}", label(rest))
        };
        lines.push((section, line));
    });
    for (path, value) in setup.tag_fields() {
        let (section, rest) = split_path(path);
        lines.push((section, format!("  {}: {value}", label(rest))));
    }

    let mut out = vec![
        header.title.clone(),
        format!("Class: {}", header.vehicle_class),
        format!("Track type: {}", header.track_type),
        format!("Style: {}", header.style),
        format!("Session: {}", header.session),
    ];

    for (key, title) in SECTIONS {
        let mut section_lines = lines.iter().filter(|(section, _)| *section == key).peekable();
        if section_lines.peek().is_none() {
            continue;
        }
        out.push(String::new());
        out.push(format!("[{title}]"));
        out.extend(section_lines.map(|(_, line)| line.clone()));
    }

    let mut sheet = out.join("\n");
    sheet.push('\n');
    sheet
}

fn split_path(path: &str) -> (&'static str, &str) {
    let (head, rest) = path.split_once('.').unwrap_or((path, ""));
    let section = SECTIONS
        .iter()
        .map(|(key, _)| *key)
        .find(|key| *key == head)
        .unwrap_or("chassis");
    (section, rest)
}

/// `front.antiRollBar` becomes `Front anti roll bar`, `ratios.3` becomes
/// `Gear 3`, corner keys print upper case.
fn label(rest: &str) -> String {
    if let Some(gear) = rest.strip_prefix("ratios.") {
        return format!("Gear {gear}");
    }

    let mut words = Vec::new();
    for segment in rest.split('.') {
        if matches!(segment, "fl" | "fr" | "rl" | "rr") {
            words.push(segment.to_ascii_uppercase());
            continue;
        }
        let mut word = String::new();
        for ch in segment.chars() {
            if ch.is_ascii_uppercase() {
                words.push(std::mem::take(&mut word));
            }
            word.push(ch.to_ascii_lowercase());
        }
        words.push(word);
    }

    let joined = words.join(" ");
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => joined,
    }
}
