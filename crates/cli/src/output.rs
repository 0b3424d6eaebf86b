//! Output formatting for CLI responses

use std::path::Path;

use anyhow::Error;
use colored::*;
use serde_json::json;
use setupforge_catalog::{Car, Track};
use setupforge_errors::ErrorSeverity;
use setupforge_model::Setup;
use setupforge_pipeline::{GeneratedSetup, TemplateEntry};

use crate::error::{CliError, setupforge_error};

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error),
            "severity": error_severity(error).as_str()
        }
    });
    print_json(&error_json, "error");
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    let label = match error_severity(error) {
        ErrorSeverity::Critical => "Fatal:",
        ErrorSeverity::Error => "Error:",
    };
    eprintln!("{} {}", label.red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

fn error_type_name(error: &Error) -> &'static str {
    match error.downcast_ref::<CliError>() {
        Some(e) => e.type_name(),
        None => setupforge_error(error).map_or("other", |e| e.category().as_str()),
    }
}

fn error_severity(error: &Error) -> ErrorSeverity {
    match error.downcast_ref::<CliError>() {
        Some(e) => e.severity(),
        None => setupforge_error(error).map_or(ErrorSeverity::Error, |e| e.severity()),
    }
}

fn print_json(value: &serde_json::Value, what: &str) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format {what} as JSON: {e}"),
    }
}

/// Print a generated setup: the sheet followed by adaptations, confidence
/// and advice, or a single JSON document.
pub fn print_generated(
    generated: &GeneratedSetup,
    sheet: &str,
    sheet_path: Option<&Path>,
    json: bool,
) {
    let meta = &generated.metadata;
    if json {
        let output = json!({
            "success": true,
            "setup": generated.setup,
            "metadata": meta,
            "sheet": sheet_path.map(|p| p.display().to_string()),
        });
        print_json(&output, "setup");
        return;
    }

    print!("{sheet}");
    println!();
    println!("{} {}", "Template:".bold(), meta.template);
    if let Some(reason) = &meta.template_fallback {
        println!("  {} {}", "⚠ fell back:".yellow(), reason);
    }

    if meta.adaptations_applied.is_empty() {
        println!("{} {}", "Adaptations:".bold(), "none".dimmed());
    } else {
        println!("{}", "Adaptations:".bold());
        for adaptation in &meta.adaptations_applied {
            println!("  {} {}", "•".cyan(), adaptation);
        }
    }

    println!(
        "{} {}",
        "Confidence:".bold(),
        confidence_colored(meta.confidence_score)
    );

    println!("{}", "Recommendations:".bold());
    for advice in &meta.recommendations {
        println!("  {} {}", "•".cyan(), advice);
    }

    if let Some(path) = sheet_path {
        println!("{} Setup sheet written to {}", "✓".green(), path.display());
    }
}

fn confidence_colored(score: f64) -> ColoredString {
    let text = format!("{score:.2}");
    if score >= 0.9 {
        text.green()
    } else if score >= 0.8 {
        text.yellow()
    } else {
        text.red()
    }
}

/// Print a normalized setup as JSON or YAML.
pub fn print_setup(setup: &Setup, json: bool) -> Result<(), CliError> {
    if json {
        let output = json!({
            "success": true,
            "setup": setup
        });
        print_json(&output, "setup");
    } else {
        print!("{}", serde_yaml::to_string(setup)?);
    }
    Ok(())
}

/// Print car list in specified format
pub fn print_car_list(cars: &[&Car], json: bool) {
    if json {
        let output = json!({
            "success": true,
            "cars": cars
        });
        print_json(&output, "car list");
        return;
    }

    if cars.is_empty() {
        println!("{}", "No cars found".yellow());
        return;
    }

    println!("{}", "Cars:".bold());
    for car in cars {
        let class = car
            .vehicle_class()
            .map_or_else(|| "no template".dimmed(), |c| c.as_str().green());
        println!(
            "  {:>3} {} ({}, {})",
            car.id.to_string().dimmed(),
            car.name.bold(),
            car.category,
            class
        );
    }
}

/// Print track list in specified format
pub fn print_track_list(tracks: &[&Track], json: bool) {
    if json {
        let output = json!({
            "success": true,
            "tracks": tracks
        });
        print_json(&output, "track list");
        return;
    }

    if tracks.is_empty() {
        println!("{}", "No tracks found".yellow());
        return;
    }

    println!("{}", "Tracks:".bold());
    for track in tracks {
        let marker = if track.characteristics.is_some() {
            "●".green()
        } else {
            "○".dimmed()
        };
        println!(
            "  {:>3} {} {} ({}, {})",
            track.id.to_string().dimmed(),
            marker,
            track.name.bold(),
            track.track_type,
            track.country
        );
    }
}

/// Print template list in specified format
pub fn print_template_list(entries: &[TemplateEntry], json: bool) {
    if json {
        let templates: Vec<_> = entries
            .iter()
            .map(|e| {
                json!({
                    "key": e.key().to_string(),
                    "vehicleClass": e.vehicle_class,
                    "trackType": e.track_type,
                    "name": e.name,
                    "description": e.description,
                })
            })
            .collect();
        let output = json!({
            "success": true,
            "templates": templates
        });
        print_json(&output, "template list");
        return;
    }

    println!("{}", "Templates:".bold());
    for entry in entries {
        println!("  {} {}", entry.key().to_string().cyan(), entry.name.bold());
        if !entry.description.is_empty() {
            println!("      {}", entry.description.dimmed());
        }
    }
}

/// Print success message
pub fn print_success(message: &str, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "message": message
        });
        print_json(&output, "success message");
    } else {
        println!("{} {}", "✓".green(), message);
    }
}
