mod candidate;
mod constructor;
pub(crate) mod domain;
mod evolver;
mod fitness;
mod operators;
mod persistence;
mod repair;

pub use candidate::*;
pub use constructor::*;
pub use domain::*;
pub use evolver::*;
pub use fitness::*;
pub use operators::*;
pub use persistence::*;
pub use repair::*;

use crate::error::SchedulerError;
use crate::types::{DepartmentId, DomainInput, GenerationResult, SemesterId};

/// Runs one full generation cycle for a single department and term: builds
/// the domain snapshot, evolves a population, and shapes the best
/// chromosome into the response the CLI and reporter consume. Never writes
/// to disk; pair with [`persistence::persist`] for a durable run.
pub fn generate_department_timetable(
    input: &DomainInput,
    department_id: &DepartmentId,
    quiet: bool,
) -> GenerationResult {
    let term_label = input.config.term_label();
    let snapshot = match domain::build_snapshot(input, department_id, &term_label) {
        Ok(s) => s,
        Err(e) => return GenerationResult::failure(e.to_string()),
    };

    let outcome = evolver::evolve(&snapshot, quiet);
    evolver::build_generation_result(&snapshot, &outcome)
}

/// Runs one full generation cycle scoped to a single semester: restricts
/// the input to that semester's own classes and subjects (plus faculty from
/// the same department) before delegating to
/// [`generate_department_timetable`].
pub fn generate_class_timetable(
    input: &DomainInput,
    semester_id: &SemesterId,
    quiet: bool,
) -> GenerationResult {
    let Some(semester) = input.semesters.iter().find(|s| &s.id == semester_id) else {
        return GenerationResult::failure(
            SchedulerError::UnknownSemester(semester_id.to_string()).to_string(),
        );
    };
    let department_id = semester.department_id.clone();

    let scoped = DomainInput {
        departments: input.departments.clone(),
        semesters: input.semesters.iter().filter(|s| s.id == *semester_id).cloned().collect(),
        classes: input.classes.iter().filter(|c| &c.semester_id == semester_id).cloned().collect(),
        subjects: input.subjects.iter().filter(|s| &s.semester_id == semester_id).cloned().collect(),
        faculty: input.faculty.clone(),
        time_slots: input.time_slots.clone(),
        prior_assignments: input.prior_assignments.clone(),
        pre_booked: input.pre_booked.clone(),
        config: input.config.clone(),
    };

    generate_department_timetable(&scoped, &department_id, quiet)
}
