use crate::error::{Result, SchedulerError};
use crate::scheduler::domain::DomainSnapshot;
use crate::scheduler::evolver::{build_generation_result, EvolutionOutcome};
use crate::types::{FacultySubjectAssignment, GenerationResult};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// An advisory exclusive lock on one (department, term) pair, realised as a
/// sentinel file in the output directory. Held for the duration of a
/// write-back; released on drop. Stands in for the single-writer
/// serialisation a real database would enforce with a row lock.
pub struct TermLock {
    path: PathBuf,
}

impl TermLock {
    pub fn acquire(output_dir: &Path, term_label: &str) -> Result<Self> {
        fs::create_dir_all(output_dir)?;
        let path = output_dir.join(format!(".{}.lock", sanitize(term_label)));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => Ok(TermLock { path }),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(SchedulerError::LockHeld {
                term_label: term_label.to_string(),
                reason: "another run is writing this term".to_string(),
            }
            .into()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Drop for TermLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

fn sanitize(term_label: &str) -> String {
    term_label.chars().map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' }).collect()
}

/// Atomically replaces the previous best timetable for (department, term)
/// and appends faculty-subject assignment records for the new run. Stands
/// in for the schema's "delete existing entries, insert new ones" procedure
/// via a temp-file-then-rename write, so a failure partway through never
/// leaves a half-written `timetable.json`.
pub fn persist(output_dir: &Path, snapshot: &DomainSnapshot, outcome: &EvolutionOutcome) -> Result<GenerationResult> {
    let _lock = TermLock::acquire(output_dir, &snapshot.term_label)?;

    let result = build_generation_result(snapshot, outcome);
    write_atomic(&output_dir.join("timetable.json"), &serde_json::to_string_pretty(&result)?)?;

    append_assignments(output_dir, snapshot, outcome)?;

    Ok(result)
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content).map_err(|e| SchedulerError::PersistenceFailed(e.to_string()))?;
    fs::rename(&tmp, path).map_err(|e| SchedulerError::PersistenceFailed(e.to_string()))?;
    Ok(())
}

fn append_assignments(output_dir: &Path, snapshot: &DomainSnapshot, outcome: &EvolutionOutcome) -> Result<()> {
    let path = output_dir.join("assignments.json");
    let mut ledger: Vec<FacultySubjectAssignment> = if path.exists() {
        let raw = fs::read_to_string(&path)?;
        serde_json::from_str(&raw).unwrap_or_default()
    } else {
        Vec::new()
    };

    ledger.retain(|a| a.term_label != snapshot.term_label);

    for gene in &outcome.best.genes {
        ledger.push(FacultySubjectAssignment {
            faculty_id: gene.faculty_id.clone(),
            subject_id: gene.subject_id.clone(),
            class_id: gene.class_id.clone(),
            term_label: snapshot.term_label.clone(),
            is_main: true,
        });
        if let Some(assistant) = &gene.assistant_faculty_id {
            ledger.push(FacultySubjectAssignment {
                faculty_id: assistant.clone(),
                subject_id: gene.subject_id.clone(),
                class_id: gene.class_id.clone(),
                term_label: snapshot.term_label.clone(),
                is_main: false,
            });
        }
    }

    write_atomic(&path, &serde_json::to_string_pretty(&ledger)?)
}
