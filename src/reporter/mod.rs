mod json;
mod markdown;
mod text;

pub use json::*;
pub use markdown::*;
pub use text::*;

use crate::error::Result;
use crate::scheduler::DomainSnapshot;
use crate::types::{FacultyId, GenerationResult};
use crate::validator::ValidationReport;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Text,
}

/// Writes every requested report format to `output_dir`.
pub fn generate_reports(
    snapshot: &DomainSnapshot,
    result: &GenerationResult,
    validation: &ValidationReport,
    output_dir: &Path,
    formats: &[OutputFormat],
) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    for format in formats {
        match format {
            OutputFormat::Json => {
                let json = generate_json_report(result)?;
                fs::write(output_dir.join("timetable.json"), json)?;
            }
            OutputFormat::Markdown => {
                let md = generate_markdown_report(snapshot, result, validation);
                fs::write(output_dir.join("timetable.md"), md)?;
            }
            OutputFormat::Text => {
                let txt = generate_text_report(snapshot, result, validation);
                fs::write(output_dir.join("timetable.txt"), txt)?;
            }
        }
    }

    Ok(())
}

/// Extracts one class section's own weekly grid from a generation result.
pub fn generate_class_schedule(snapshot: &DomainSnapshot, result: &GenerationResult, class_name: &str) -> Option<String> {
    let entries = result.timetables_by_class.get(class_name)?;
    let mut lines = vec![format!("# Schedule for {}", class_name), String::new()];
    lines.push(render_grid(snapshot, entries));
    Some(lines.join("\n"))
}

/// Extracts one faculty member's own weekly load across every class in the
/// result.
pub fn generate_faculty_schedule(snapshot: &DomainSnapshot, result: &GenerationResult, faculty_id: &FacultyId) -> Option<String> {
    let faculty = snapshot.faculty.iter().find(|f| &f.id == faculty_id)?;

    let mut lines = vec![format!("# Schedule for {} ({})", faculty.name, faculty.id), String::new()];

    let mut assignments: Vec<_> = result
        .timetables_by_class
        .iter()
        .flat_map(|(class_name, entries)| {
            entries
                .iter()
                .filter(|e| &e.faculty_id == faculty_id || e.assistant_faculty_id.as_ref() == Some(faculty_id))
                .map(move |e| (class_name.clone(), e))
        })
        .collect();

    if assignments.is_empty() {
        lines.push("No assignments.".to_string());
        return Some(lines.join("\n"));
    }

    assignments.sort_by(|a, b| a.1.time_slot_id.to_string().cmp(&b.1.time_slot_id.to_string()));

    lines.push(format!("## Teaching {} periods\n", assignments.len()));
    for (class_name, entry) in assignments {
        let subject = snapshot
            .subjects_by_semester
            .values()
            .flatten()
            .find(|s| s.id == entry.subject_id)
            .map(|s| s.short_code.as_str())
            .unwrap_or("?");
        let role = if &entry.faculty_id == faculty_id { "main" } else { "assistant" };
        lines.push(format!("- {} | {} | {} ({})", entry.time_slot_id, class_name, subject, role));
    }

    Some(lines.join("\n"))
}
