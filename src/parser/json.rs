use crate::error::{Result, SchedulerError};
use crate::types::{
    ClassSection, Department, DomainInput, Faculty, FacultySubjectAssignment, ScheduleConfig,
    Semester, Subject, TimeSlot,
};
use std::fs;
use std::path::Path;

/// Loads a full [`DomainInput`] from a directory of JSON files plus an
/// optional `config.toml`, generalising the teacher's flat
/// course/teacher/room/student files to this domain's entities.
pub fn load_input_from_dir(dir: &Path) -> Result<DomainInput> {
    let departments = load_departments(&dir.join("departments.json"))?;
    let semesters = load_semesters(&dir.join("semesters.json"))?;
    let classes = load_classes(&dir.join("classes.json"))?;
    let subjects = load_subjects(&dir.join("subjects.json"))?;
    let faculty = load_faculty(&dir.join("faculty.json"))?;
    let time_slots = load_time_slots(&dir.join("time_slots.json"))?;
    let prior_assignments = load_optional(&dir.join("prior_assignments.json"))?;
    let pre_booked = load_optional(&dir.join("pre_booked.json"))?;
    let config = load_config_or_default(&dir.join("config.toml"));

    Ok(DomainInput {
        departments,
        semesters,
        classes,
        subjects,
        faculty,
        time_slots,
        prior_assignments,
        pre_booked,
        config,
    })
}

pub fn load_departments(path: &Path) -> Result<Vec<Department>> {
    load_json_file(path)
}

pub fn load_semesters(path: &Path) -> Result<Vec<Semester>> {
    load_json_file(path)
}

pub fn load_classes(path: &Path) -> Result<Vec<ClassSection>> {
    load_json_file(path)
}

pub fn load_subjects(path: &Path) -> Result<Vec<Subject>> {
    load_json_file(path)
}

pub fn load_faculty(path: &Path) -> Result<Vec<Faculty>> {
    load_json_file(path)
}

pub fn load_time_slots(path: &Path) -> Result<Vec<TimeSlot>> {
    load_json_file(path)
}

/// Loads prior-term records or pre-booked entries, defaulting to an empty
/// list when the optional file doesn't exist.
fn load_optional<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if path.exists() {
        load_json_file(path)
    } else {
        Ok(Vec::new())
    }
}

pub fn load_config_or_default(path: &Path) -> ScheduleConfig {
    if path.exists() {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => ScheduleConfig::default(),
        }
    } else {
        ScheduleConfig::default()
    }
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| SchedulerError::FileRead {
        path: path_str.clone(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| {
        SchedulerError::JsonParse {
            file: path_str,
            message: e.to_string(),
        }
        .into()
    })
}
