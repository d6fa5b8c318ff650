use crate::scheduler::DomainSnapshot;
use crate::types::{Day, GenerationResult, TimetableEntry};
use crate::validator::ValidationReport;
use std::collections::HashMap;

const GRID_PERIODS: [u8; 7] = [1, 2, 3, 4, 5, 6, 7];

/// A full Markdown report: summary table, validation status, soft scores,
/// and one weekly grid per class section.
pub fn generate_markdown_report(
    snapshot: &DomainSnapshot,
    result: &GenerationResult,
    validation: &ValidationReport,
) -> String {
    let mut lines = vec!["# Timetable Report".to_string(), String::new()];

    lines.push("## Summary\n".to_string());
    lines.push("| Metric | Value |".to_string());
    lines.push("|--------|-------|".to_string());
    if let Some(counts) = &result.counts {
        lines.push(format!("| Classes | {} |", counts.classes));
        lines.push(format!("| Subjects | {} |", counts.subjects));
        lines.push(format!("| Genes | {} |", counts.genes));
    }
    if let Some(fitness) = result.final_fitness {
        lines.push(format!("| Final Fitness | {:.1} |", fitness));
    }
    if let Some(generations) = result.generations_run {
        lines.push(format!("| Generations Run | {} |", generations));
    }
    lines.push(format!("| Overall Score | {:.1}/100 |", validation.total_score));
    lines.push(String::new());

    if validation.is_valid {
        lines.push("## Validation: PASSED\n".to_string());
    } else {
        lines.push("## Validation: FAILED\n".to_string());
        for violation in &validation.hard_violations {
            lines.push(format!("- **{}**: {}", violation.constraint, violation.message));
        }
        lines.push(String::new());
    }

    lines.push("## Soft Constraint Scores\n".to_string());
    for score in &validation.soft_scores {
        let pct = if score.max_score > 0.0 { (score.score / score.max_score) * 100.0 } else { 100.0 };
        lines.push(format!("- **{}**: {:.1}% ({})", score.constraint, pct, score.details));
    }
    lines.push(String::new());

    lines.push("## Class Timetables\n".to_string());
    for (class_name, entries) in &result.timetables_by_class {
        lines.push(format!("### {}\n", class_name));
        lines.push(render_grid(snapshot, entries));
        lines.push(String::new());
    }

    lines.join("\n")
}

pub(crate) fn render_grid(snapshot: &DomainSnapshot, entries: &[TimetableEntry]) -> String {
    let mut cell: HashMap<(Day, u8), String> = HashMap::new();
    for entry in entries {
        if let Some(slot) = snapshot.time_slots.iter().find(|t| t.id == entry.time_slot_id) {
            cell.insert((slot.day, slot.period), describe(snapshot, entry));
        }
    }

    let mut lines = vec![
        "| Period | Mon | Tue | Wed | Thu | Fri |".to_string(),
        "|--------|-----|-----|-----|-----|-----|".to_string(),
    ];
    for period in GRID_PERIODS {
        let row: Vec<String> = Day::ALL
            .iter()
            .map(|&day| cell.get(&(day, period)).cloned().unwrap_or_else(|| "-".to_string()))
            .collect();
        lines.push(format!("| {} | {} |", period, row.join(" | ")));
    }
    lines.join("\n")
}

fn describe(snapshot: &DomainSnapshot, entry: &TimetableEntry) -> String {
    let subject = snapshot
        .subjects_by_semester
        .values()
        .flatten()
        .find(|s| s.id == entry.subject_id)
        .map(|s| s.short_code.as_str())
        .unwrap_or("?");
    let faculty = snapshot
        .faculty
        .iter()
        .find(|f| f.id == entry.faculty_id)
        .map(|f| f.name.as_str())
        .unwrap_or("?");
    format!("{} ({})", subject, faculty)
}
