use crate::scheduler::DomainSnapshot;
use crate::types::GenerationResult;
use crate::validator::ValidationReport;
use colored::Colorize;

/// A colourised terminal summary, grouped by class with a per-class
/// fill-style indicator on fitness contribution.
pub fn generate_text_report(
    snapshot: &DomainSnapshot,
    result: &GenerationResult,
    validation: &ValidationReport,
) -> String {
    let mut lines = Vec::new();

    lines.push("=".repeat(60));
    lines.push("               TIMETABLE REPORT".to_string());
    lines.push("=".repeat(60));
    lines.push(String::new());

    if let Some(counts) = &result.counts {
        lines.push(format!("  Classes:    {}", counts.classes));
        lines.push(format!("  Subjects:   {}", counts.subjects));
        lines.push(format!("  Genes:      {}", counts.genes));
    }
    if let Some(fitness) = result.final_fitness {
        lines.push(format!("  Fitness:    {:.1}", fitness));
    }
    if let Some(generations) = result.generations_run {
        lines.push(format!("  Generations:{}", generations));
    }
    lines.push(format!("  Score:      {:.1}/100", validation.total_score));
    lines.push(String::new());

    lines.push("-".repeat(40));
    if validation.is_valid {
        lines.push("VALIDATION: PASSED".green().to_string());
    } else {
        lines.push("VALIDATION: FAILED".red().to_string());
        for v in &validation.hard_violations {
            lines.push(format!("  ! {}: {}", v.constraint, v.message));
        }
    }
    lines.push("-".repeat(40));
    lines.push(String::new());

    lines.push("CLASS TIMETABLES".to_string());
    lines.push("-".repeat(40));
    for (class_name, entries) in &result.timetables_by_class {
        lines.push(format!("\n{} ({} periods)", class_name.bold(), entries.len()));
        for entry in entries {
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
            let marker = if entry.is_lab { "L".yellow() } else { "T".green() };
            lines.push(format!("  {} {} | {} | {}", marker, entry.time_slot_id, subject, faculty));
        }
    }

    lines.push(String::new());
    lines.push("=".repeat(60));

    lines.join("\n")
}

/// Prints a quick pass/fail summary to stdout.
pub fn print_summary(result: &GenerationResult, validation: &ValidationReport) {
    println!();
    if validation.is_valid {
        println!("{}", "Timetable generated successfully".green().bold());
    } else {
        println!("{}", "Timetable has validation errors".red().bold());
    }
    println!();
    if let Some(counts) = &result.counts {
        println!("  Classes:  {}", counts.classes);
        println!("  Genes:    {}", counts.genes);
    }
    if let Some(fitness) = result.final_fitness {
        println!("  Fitness:  {:.1}", fitness);
    }
    println!("  Score:    {:.1}/100", validation.total_score);
    println!();
}
