use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use schedule_ga::parser::{load_input_from_dir, validate_input};
use schedule_ga::reporter::{
    generate_class_schedule, generate_faculty_schedule, generate_reports, print_summary,
    OutputFormat,
};
use schedule_ga::scheduler::{build_snapshot, evolve, persist};
use schedule_ga::types::{
    ClassSection, Department, DepartmentId, Designation, DomainInput, Faculty, FacultyId, Gene,
    GenerationResult, ScheduleConfig, Semester, SemesterParity, Subject, SubjectId, SubjectKind,
    TimeSlot, TimeSlotId, TimetableEntry,
};
use schedule_ga::validator::validate_chromosome;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "schedule-ga")]
#[command(about = "Genetic-algorithm timetable scheduler for engineering college departments")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a small bundled synthetic department end to end
    Demo {
        /// Suppress the generation progress bar
        #[arg(long)]
        quiet: bool,
    },

    /// Generate a department's timetable from input data
    Generate {
        /// Directory containing input JSON files
        #[arg(short, long)]
        data: PathBuf,

        /// Output directory for timetable files
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Department ID to generate for (defaults to the input's only department)
        #[arg(long)]
        department: Option<String>,

        /// Output format(s): json, markdown, text, or all
        #[arg(short, long, default_value = "all")]
        format: String,

        /// Override the configured RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Override the configured generation budget
        #[arg(long)]
        generations: Option<usize>,

        /// Suppress progress output, print a JSON summary only
        #[arg(short, long)]
        quiet: bool,
    },

    /// Independently re-check a generated timetable
    Validate {
        /// Path to a timetable.json file
        #[arg(short, long)]
        timetable: PathBuf,

        /// Directory containing input data the timetable was generated from
        #[arg(short, long)]
        data: PathBuf,

        /// Department ID the timetable belongs to (defaults to the input's only department)
        #[arg(long)]
        department: Option<String>,

        /// Show per-constraint soft scores
        #[arg(short, long)]
        verbose: bool,
    },

    /// Render a whole-department report, or a single class/faculty extract
    Report {
        /// Path to a timetable.json file
        #[arg(short, long)]
        timetable: PathBuf,

        /// Directory containing input data
        #[arg(short, long)]
        data: PathBuf,

        /// Department ID the timetable belongs to (defaults to the input's only department)
        #[arg(long)]
        department: Option<String>,

        /// Render a single class section's weekly grid
        #[arg(long)]
        class: Option<String>,

        /// Render a single faculty member's weekly load
        #[arg(long)]
        faculty: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { quiet } => run_demo(quiet),
        Commands::Generate {
            data,
            output,
            department,
            format,
            seed,
            generations,
            quiet,
        } => run_generate(&data, &output, department, &format, seed, generations, quiet),
        Commands::Validate {
            timetable,
            data,
            department,
            verbose,
        } => run_validate(&timetable, &data, department, verbose),
        Commands::Report {
            timetable,
            data,
            department,
            class,
            faculty,
        } => run_report(&timetable, &data, department, class, faculty),
    }
}

fn run_demo(quiet: bool) -> Result<()> {
    println!("{}", "Timetable Scheduler Demo".bold().cyan());
    println!("{}", "─".repeat(40));

    let demo_path = PathBuf::from("data/demo");
    let output_path = PathBuf::from("output");

    if !demo_path.join("departments.json").exists() {
        println!("{}", "Demo data not found. Creating sample data...".yellow());
        create_demo_data(&demo_path)?;
    }

    println!("Loading demo data from: {}", demo_path.display());
    let input = load_input_from_dir(&demo_path).context("Failed to load demo data")?;

    let validation_result = validate_input(&input)?;
    for warning in &validation_result.warnings {
        println!("{} {}", "Warning:".yellow(), warning);
    }

    println!(
        "Loaded {} departments, {} classes, {} subjects, {} faculty",
        input.departments.len(),
        input.classes.len(),
        input.subjects.len(),
        input.faculty.len()
    );

    let department_id = DepartmentId::from("cse");
    println!("\nGenerating timetable...\n");

    let snapshot = build_snapshot(&input, &department_id, &input.config.term_label())?;
    let outcome = evolve(&snapshot, quiet);
    let result = persist(&output_path, &snapshot, &outcome)?;
    let validation = validate_chromosome(&snapshot, &outcome.best);

    print_summary(&result, &validation);
    generate_reports(
        &snapshot,
        &result,
        &validation,
        &output_path,
        &[OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text],
    )?;
    println!("Reports written to: {}", output_path.display().to_string().green());

    Ok(())
}

fn run_generate(
    data: &PathBuf,
    output: &PathBuf,
    department: Option<String>,
    format: &str,
    seed: Option<u64>,
    generations: Option<usize>,
    quiet: bool,
) -> Result<()> {
    let mut input = load_input_from_dir(data).context("Failed to load input data")?;
    let validation_result = validate_input(&input)?;
    if !quiet {
        for warning in &validation_result.warnings {
            println!("{} {}", "Warning:".yellow(), warning);
        }
    }

    if let Some(seed) = seed {
        input.config.ga.rng_seed = seed;
    }
    if let Some(generations) = generations {
        input.config.ga.generations = generations;
    }

    let department_id = resolve_department(&input, department)?;

    if !quiet {
        println!(
            "Loaded {} classes, {} subjects, {} faculty for department '{}'",
            input.classes.len(),
            input.subjects.len(),
            input.faculty.len(),
            department_id
        );
        println!("\nGenerating timetable...\n");
    }

    let snapshot = build_snapshot(&input, &department_id, &input.config.term_label())?;
    let outcome = evolve(&snapshot, quiet);
    let result = persist(output, &snapshot, &outcome)?;
    let validation = validate_chromosome(&snapshot, &outcome.best);

    let formats = parse_formats(format);
    generate_reports(&snapshot, &result, &validation, output, &formats)?;

    if quiet {
        let summary = schedule_ga::reporter::generate_json_summary(&result)?;
        println!("{}", summary);
    } else {
        print_summary(&result, &validation);
        println!("Reports written to: {}", output.display().to_string().green());
    }

    Ok(())
}

fn run_validate(timetable_path: &PathBuf, data: &PathBuf, department: Option<String>, verbose: bool) -> Result<()> {
    let input = load_input_from_dir(data)?;
    let department_id = resolve_department(&input, department)?;
    let snapshot = build_snapshot(&input, &department_id, &input.config.term_label())?;

    let result = load_timetable(timetable_path)?;
    let chromosome = chromosome_from_result(&result);
    let validation = validate_chromosome(&snapshot, &chromosome);

    if validation.is_valid {
        println!("{}", "✓ Timetable is valid".green().bold());
    } else {
        println!("{}", "✗ Timetable has violations".red().bold());
        for v in &validation.hard_violations {
            println!("  - {}: {}", v.constraint.red(), v.message);
        }
    }

    if verbose {
        println!("\n{}", "Soft Constraint Scores:".bold());
        for score in &validation.soft_scores {
            let pct = if score.max_score > 0.0 { (score.score / score.max_score) * 100.0 } else { 100.0 };
            println!("  {}: {:.1}% ({})", score.constraint, pct, score.details);
        }
    }

    println!("\nOverall Score: {:.1}/100", validation.total_score);

    Ok(())
}

fn run_report(
    timetable_path: &PathBuf,
    data: &PathBuf,
    department: Option<String>,
    class: Option<String>,
    faculty: Option<String>,
) -> Result<()> {
    let input = load_input_from_dir(data)?;
    let department_id = resolve_department(&input, department)?;
    let snapshot = build_snapshot(&input, &department_id, &input.config.term_label())?;

    let result = load_timetable(timetable_path)?;

    if let Some(class_name) = class {
        match generate_class_schedule(&snapshot, &result, &class_name) {
            Some(report) => println!("{}", report),
            None => println!("Class not found in this timetable"),
        }
    } else if let Some(faculty_id) = faculty {
        match generate_faculty_schedule(&snapshot, &result, &FacultyId::from(faculty_id.as_str())) {
            Some(report) => println!("{}", report),
            None => println!("Faculty not found in this department"),
        }
    } else {
        let chromosome = chromosome_from_result(&result);
        let validation = validate_chromosome(&snapshot, &chromosome);
        print_summary(&result, &validation);
        println!("{}", schedule_ga::reporter::generate_markdown_report(&snapshot, &result, &validation));
    }

    Ok(())
}

fn load_timetable(path: &PathBuf) -> Result<GenerationResult> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Rebuilds the chromosome the validator and reporter operate on from a
/// persisted timetable's flat gene list.
fn chromosome_from_result(result: &GenerationResult) -> schedule_ga::types::Chromosome {
    let genes: Vec<Gene> = result
        .timetables_by_class
        .values()
        .flatten()
        .map(|entry: &TimetableEntry| Gene {
            class_id: entry.class_id.clone(),
            subject_id: entry.subject_id.clone(),
            faculty_id: entry.faculty_id.clone(),
            time_slot_id: entry.time_slot_id.clone(),
            is_lab: entry.is_lab,
            assistant_faculty_id: entry.assistant_faculty_id.clone(),
        })
        .collect();
    schedule_ga::types::Chromosome::new(genes)
}

fn resolve_department(input: &DomainInput, explicit: Option<String>) -> Result<DepartmentId> {
    if let Some(id) = explicit {
        return Ok(DepartmentId::from(id.as_str()));
    }
    match input.departments.as_slice() {
        [only] => Ok(only.id.clone()),
        [] => bail!("No departments found in input data"),
        _ => bail!("Input data has multiple departments; pass --department to pick one"),
    }
}

fn parse_formats(format: &str) -> Vec<OutputFormat> {
    if format == "all" {
        return vec![OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text];
    }

    format
        .split(',')
        .filter_map(|f| match f.trim().to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            "text" | "txt" => Some(OutputFormat::Text),
            _ => None,
        })
        .collect()
}

fn create_demo_data(path: &PathBuf) -> Result<()> {
    std::fs::create_dir_all(path)?;

    let departments = vec![Department {
        id: DepartmentId::from("cse"),
        code: "CSE".to_string(),
        name: "Computer Science & Engineering".to_string(),
        active: true,
    }];
    std::fs::write(path.join("departments.json"), serde_json::to_string_pretty(&departments)?)?;

    let semesters = vec![Semester {
        id: schedule_ga::types::SemesterId::from("cse-sem3"),
        department_id: DepartmentId::from("cse"),
        number: 3,
    }];
    std::fs::write(path.join("semesters.json"), serde_json::to_string_pretty(&semesters)?)?;

    let classes = vec![
        ClassSection {
            id: schedule_ga::types::ClassId::from("cse-3a"),
            semester_id: schedule_ga::types::SemesterId::from("cse-sem3"),
            name: "CSE-3A".to_string(),
            capacity: 60,
        },
        ClassSection {
            id: schedule_ga::types::ClassId::from("cse-3b"),
            semester_id: schedule_ga::types::SemesterId::from("cse-sem3"),
            name: "CSE-3B".to_string(),
            capacity: 60,
        },
    ];
    std::fs::write(path.join("classes.json"), serde_json::to_string_pretty(&classes)?)?;

    let subjects = vec![
        Subject {
            id: SubjectId::from("cs301"),
            code: "CS301".to_string(),
            short_code: "DSA".to_string(),
            department_id: DepartmentId::from("cse"),
            semester_id: schedule_ga::types::SemesterId::from("cse-sem3"),
            credits: 4,
            kind: SubjectKind::Theory { lecture_hours: 4, tutorial_hours: 1 },
        },
        Subject {
            id: SubjectId::from("cs302"),
            code: "CS302".to_string(),
            short_code: "OS".to_string(),
            department_id: DepartmentId::from("cse"),
            semester_id: schedule_ga::types::SemesterId::from("cse-sem3"),
            credits: 4,
            kind: SubjectKind::Theory { lecture_hours: 4, tutorial_hours: 0 },
        },
        Subject {
            id: SubjectId::from("cs303"),
            code: "CS303".to_string(),
            short_code: "DBMS".to_string(),
            department_id: DepartmentId::from("cse"),
            semester_id: schedule_ga::types::SemesterId::from("cse-sem3"),
            credits: 3,
            kind: SubjectKind::Theory { lecture_hours: 3, tutorial_hours: 0 },
        },
        Subject {
            id: SubjectId::from("cs304"),
            code: "CS304".to_string(),
            short_code: "DSL".to_string(),
            department_id: DepartmentId::from("cse"),
            semester_id: schedule_ga::types::SemesterId::from("cse-sem3"),
            credits: 2,
            kind: SubjectKind::Lab { practical_hours: 3, blocks: 2 },
        },
        Subject {
            id: SubjectId::from("hs301"),
            code: "HS301".to_string(),
            short_code: "ENV".to_string(),
            department_id: DepartmentId::from("cse"),
            semester_id: schedule_ga::types::SemesterId::from("cse-sem3"),
            credits: 2,
            kind: SubjectKind::Elective { lecture_hours: 2 },
        },
    ];
    std::fs::write(path.join("subjects.json"), serde_json::to_string_pretty(&subjects)?)?;

    let faculty = vec![
        Faculty {
            id: FacultyId::from("f001"),
            name: "Dr. Rao".to_string(),
            designation: Designation::Professor,
            department_id: Some(DepartmentId::from("cse")),
            preferences: "CS301".to_string(),
            max_hours: None,
            is_active: true,
        },
        Faculty {
            id: FacultyId::from("f002"),
            name: "Dr. Iyer".to_string(),
            designation: Designation::AssociateProfessor,
            department_id: Some(DepartmentId::from("cse")),
            preferences: "CS302,CS304".to_string(),
            max_hours: None,
            is_active: true,
        },
        Faculty {
            id: FacultyId::from("f003"),
            name: "Ms. Nair".to_string(),
            designation: Designation::AssistantProfessor,
            department_id: Some(DepartmentId::from("cse")),
            preferences: "CS303,CS304".to_string(),
            max_hours: None,
            is_active: true,
        },
        Faculty {
            id: FacultyId::from("f004"),
            name: "Mr. Menon".to_string(),
            designation: Designation::AssistantProfessor,
            department_id: Some(DepartmentId::from("cse")),
            preferences: "HS301".to_string(),
            max_hours: None,
            is_active: true,
        },
    ];
    std::fs::write(path.join("faculty.json"), serde_json::to_string_pretty(&faculty)?)?;

    let mut time_slots = Vec::new();
    for day in schedule_ga::types::Day::ALL {
        for period in [1u8, 2, 3, 4, 5, 6, 7] {
            time_slots.push(TimeSlot {
                id: TimeSlotId::from(format!("{day}-{period}").as_str()),
                day,
                period,
                is_locked: false,
            });
        }
    }
    std::fs::write(path.join("time_slots.json"), serde_json::to_string_pretty(&time_slots)?)?;

    let config = ScheduleConfig {
        active_semester_type: SemesterParity::Odd,
        academic_year: "2024-25".to_string(),
        ga: Default::default(),
    };
    std::fs::write(path.join("config.toml"), toml::to_string_pretty(&config)?)?;

    println!("{}", "Demo data created successfully!".green());
    Ok(())
}
