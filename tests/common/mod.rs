use schedule_ga::scheduler::build_snapshot;
use schedule_ga::types::{
    ClassId, ClassSection, Day, Department, DepartmentId, Designation, DomainInput, Faculty,
    FacultyId, GaConfig, PreBookedEntry, ScheduleConfig, Semester, SemesterId, SemesterParity,
    Subject, SubjectId, SubjectKind, TimeSlot, TimeSlotId,
};

pub fn all_slots() -> Vec<TimeSlot> {
    let mut time_slots = Vec::new();
    for day in Day::ALL {
        for period in [1u8, 2, 3, 4, 5, 6, 7] {
            time_slots.push(TimeSlot {
                id: TimeSlotId::from(format!("{day}-{period}").as_str()),
                day,
                period,
                is_locked: false,
            });
        }
    }
    time_slots
}

pub fn department(code: &str) -> Department {
    Department {
        id: DepartmentId::from(code),
        code: code.to_uppercase(),
        name: format!("{} Department", code.to_uppercase()),
        active: true,
    }
}

pub fn semester(id: &str, dept: &DepartmentId, number: u8) -> Semester {
    Semester {
        id: SemesterId::from(id),
        department_id: dept.clone(),
        number,
    }
}

pub fn class(id: &str, sem: &SemesterId, name: &str) -> ClassSection {
    ClassSection {
        id: ClassId::from(id),
        semester_id: sem.clone(),
        name: name.to_string(),
        capacity: 60,
    }
}

pub fn theory(id: &str, code: &str, dept: &DepartmentId, sem: &SemesterId, hours: u8) -> Subject {
    Subject {
        id: SubjectId::from(id),
        code: code.to_string(),
        short_code: code.to_string(),
        department_id: dept.clone(),
        semester_id: sem.clone(),
        credits: 3,
        kind: SubjectKind::Theory { lecture_hours: hours, tutorial_hours: 0 },
    }
}

pub fn lab(id: &str, code: &str, dept: &DepartmentId, sem: &SemesterId, blocks: u8) -> Subject {
    Subject {
        id: SubjectId::from(id),
        code: code.to_string(),
        short_code: code.to_string(),
        department_id: dept.clone(),
        semester_id: sem.clone(),
        credits: 2,
        kind: SubjectKind::Lab { practical_hours: 3, blocks },
    }
}

pub fn faculty(id: &str, name: &str, dept: &DepartmentId, preferences: &str) -> Faculty {
    Faculty {
        id: FacultyId::from(id),
        name: name.to_string(),
        designation: Designation::AssociateProfessor,
        department_id: Some(dept.clone()),
        preferences: preferences.to_string(),
        max_hours: None,
        is_active: true,
    }
}

pub fn faculty_capped(id: &str, name: &str, dept: &DepartmentId, preferences: &str, max_hours: u8) -> Faculty {
    Faculty {
        id: FacultyId::from(id),
        name: name.to_string(),
        designation: Designation::Professor,
        department_id: Some(dept.clone()),
        preferences: preferences.to_string(),
        max_hours: Some(max_hours),
        is_active: true,
    }
}

pub fn config(seed: u64, population_size: usize, generations: usize) -> ScheduleConfig {
    ScheduleConfig {
        active_semester_type: SemesterParity::Odd,
        academic_year: "2024-25".to_string(),
        ga: GaConfig {
            population_size,
            generations,
            rng_seed: seed,
            ..Default::default()
        },
    }
}

/// S1 — minimal feasible: 1 class, 2 theory subjects (3 h each), 1 lab
/// subject (practical_hours = 3), 3 faculty (one preferring each subject).
pub fn minimal_feasible_input(seed: u64) -> DomainInput {
    let dept = department("cse");
    let sem = semester("sem3", &dept.id, 3);
    let class_a = class("cse3a", &sem.id, "CSE-3A");

    let theory_a = theory("cs301", "CS301", &dept.id, &sem.id, 3);
    let theory_b = theory("cs302", "CS302", &dept.id, &sem.id, 3);
    let lab_a = lab("cs303", "CS303", &dept.id, &sem.id, 1);

    let faculty_list = vec![
        faculty("f1", "Dr. Rao", &dept.id, "CS301"),
        faculty("f2", "Dr. Iyer", &dept.id, "CS302"),
        faculty("f3", "Dr. Nair", &dept.id, "CS303"),
    ];

    DomainInput {
        departments: vec![dept],
        semesters: vec![sem],
        classes: vec![class_a],
        subjects: vec![theory_a, theory_b, lab_a],
        faculty: faculty_list,
        time_slots: all_slots(),
        prior_assignments: vec![],
        pre_booked: vec![],
        config: config(seed, 30, 50),
    }
}

pub fn snapshot_for(input: &DomainInput, dept_id: &str) -> schedule_ga::scheduler::DomainSnapshot {
    build_snapshot(input, &DepartmentId::from(dept_id), &input.config.term_label()).unwrap()
}

/// S2 fixture components — two departments sharing faculty F.
pub fn shared_faculty_two_departments() -> (DomainInput, DomainInput) {
    let dept_a = department("cse");
    let dept_b = department("ece");
    let sem_a = semester("cse-sem3", &dept_a.id, 3);
    let sem_b = semester("ece-sem3", &dept_b.id, 3);
    let class_a = class("cse3a", &sem_a.id, "CSE-3A");
    let class_b = class("ece3a", &sem_b.id, "ECE-3A");

    let subject_a = theory("cs301", "CS301", &dept_a.id, &sem_a.id, 2);
    let subject_b = theory("ec301", "EC301", &dept_b.id, &sem_b.id, 2);

    let shared = faculty("fshared", "Dr. Common", &dept_a.id, "CS301,EC301");
    let other_a = faculty("fa2", "Dr. A2", &dept_a.id, "CS301");
    let other_b = faculty("fb2", "Dr. B2", &dept_b.id, "EC301");

    let input_a = DomainInput {
        departments: vec![dept_a.clone()],
        semesters: vec![sem_a],
        classes: vec![class_a],
        subjects: vec![subject_a],
        faculty: vec![shared.clone(), other_a],
        time_slots: all_slots(),
        prior_assignments: vec![],
        pre_booked: vec![],
        config: config(1, 20, 40),
    };

    let input_b = DomainInput {
        departments: vec![dept_b.clone()],
        semesters: vec![sem_b],
        classes: vec![class_b],
        subjects: vec![subject_b],
        faculty: vec![shared, other_b],
        time_slots: all_slots(),
        prior_assignments: vec![],
        pre_booked: vec![
            PreBookedEntry {
                faculty_id: FacultyId::from("fshared"),
                time_slot_id: TimeSlotId::from("MON-1"),
                term_label: "2024-25-ODD".to_string(),
            },
            PreBookedEntry {
                faculty_id: FacultyId::from("fshared"),
                time_slot_id: TimeSlotId::from("MON-2"),
                term_label: "2024-25-ODD".to_string(),
            },
        ],
        config: config(2, 20, 40),
    };

    (input_a, input_b)
}

/// S3 — 3 classes, one capped professor as the only eligible faculty for
/// all lab subjects (6h of labs total: 2 classes' worth of 2-block labs plus
/// one more), plus a fallback faculty with no preference listed.
pub fn workload_cap_input() -> DomainInput {
    let dept = department("cse");
    let sem = semester("sem3", &dept.id, 3);
    let classes = vec![
        class("c1", &sem.id, "CSE-3A"),
        class("c2", &sem.id, "CSE-3B"),
        class("c3", &sem.id, "CSE-3C"),
    ];
    let labs = vec![
        lab("lab1", "CS310", &dept.id, &sem.id, 1),
        lab("lab2", "CS311", &dept.id, &sem.id, 1),
        lab("lab3", "CS312", &dept.id, &sem.id, 1),
    ];
    let capped = faculty_capped("fcap", "Dr. Capped", &dept.id, "CS310,CS311,CS312", 6);
    let fallback = faculty("ffallback", "Dr. Fallback", &dept.id, "");

    DomainInput {
        departments: vec![dept],
        semesters: vec![sem],
        classes,
        subjects: labs,
        faculty: vec![capped, fallback],
        time_slots: all_slots(),
        prior_assignments: vec![],
        pre_booked: vec![],
        config: config(7, 40, 150),
    }
}

/// S4 — 4 classes each with two labs, 5 teaching days.
pub fn lab_distribution_input() -> DomainInput {
    let dept = department("cse");
    let sem = semester("sem3", &dept.id, 3);
    let classes = vec![
        class("c1", &sem.id, "CSE-3A"),
        class("c2", &sem.id, "CSE-3B"),
        class("c3", &sem.id, "CSE-3C"),
        class("c4", &sem.id, "CSE-3D"),
    ];
    let subjects = vec![
        lab("lab1", "CS310", &dept.id, &sem.id, 2),
        lab("lab2", "CS311", &dept.id, &sem.id, 2),
    ];
    let faculty_list = vec![
        faculty("f1", "Dr. A", &dept.id, "CS310"),
        faculty("f2", "Dr. B", &dept.id, "CS311"),
    ];

    DomainInput {
        departments: vec![dept],
        semesters: vec![sem],
        classes,
        subjects,
        faculty: faculty_list,
        time_slots: all_slots(),
        prior_assignments: vec![],
        pre_booked: vec![],
        config: config(11, 40, 80),
    }
}

/// S5 — 2 classes share one lab subject.
pub fn shared_lab_subject_input() -> DomainInput {
    let dept = department("cse");
    let sem = semester("sem3", &dept.id, 3);
    let classes = vec![class("c1", &sem.id, "CSE-3A"), class("c2", &sem.id, "CSE-3B")];
    let subjects = vec![lab("lab1", "CS310", &dept.id, &sem.id, 1)];
    let faculty_list = vec![
        faculty("f1", "Dr. A", &dept.id, "CS310"),
        faculty("f2", "Dr. B", &dept.id, "CS310"),
    ];

    DomainInput {
        departments: vec![dept],
        semesters: vec![sem],
        classes,
        subjects,
        faculty: faculty_list,
        time_slots: all_slots(),
        prior_assignments: vec![],
        pre_booked: vec![],
        config: config(13, 30, 60),
    }
}
