//! Academic timetable scheduler - genetic-algorithm based weekly timetable
//! generator for an engineering college's departments.
//!
//! # Algorithm Overview
//!
//! One run targets a single department and term. The pipeline:
//! 1. **Domain Snapshot**: load and filter departments, semesters, classes,
//!    subjects, faculty, and the 35 weekly teaching slots into an immutable
//!    view of the problem.
//! 2. **Constructor**: seed a population of chromosomes, each a full gene
//!    set placing every class's subjects onto the grid.
//! 3. **Evolver**: repeatedly select, cross over, mutate, repair lab
//!    contiguity, and evaluate fitness until a generation budget is spent or
//!    a non-negative fitness is reached.
//! 4. **Validator**: independently re-check the winning chromosome against
//!    every hard and soft constraint.
//! 5. **Persistence/Reporter**: write the result back and render it as
//!    JSON, Markdown, or a colourised terminal summary.
//!
//! # Example
//!
//! ```no_run
//! use schedule_ga::parser::load_input_from_dir;
//! use schedule_ga::scheduler::generate_department_timetable;
//! use schedule_ga::types::DepartmentId;
//! use std::path::Path;
//!
//! let input = load_input_from_dir(Path::new("./data/demo")).unwrap();
//! let result = generate_department_timetable(&input, &DepartmentId::from("cse"), false);
//! println!("Fitness: {:.1}", result.final_fitness.unwrap_or(0.0));
//! ```

pub mod error;
pub mod parser;
pub mod reporter;
pub mod scheduler;
pub mod types;
pub mod validator;

pub use error::{Result, SchedulerError};
