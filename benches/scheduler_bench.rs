use criterion::{criterion_group, criterion_main, Criterion};
use schedule_ga::scheduler::{build_snapshot, evolve};
use schedule_ga::types::{
    ClassId, ClassSection, Day, Department, DepartmentId, Designation, DomainInput, Faculty,
    FacultyId, GaConfig, ScheduleConfig, Semester, SemesterId, SemesterParity, Subject, SubjectId,
    SubjectKind, TimeSlot, TimeSlotId,
};

fn small_department() -> DomainInput {
    let dept_id = DepartmentId::from("cse");
    let sem_id = SemesterId::from("sem3");

    let dept = Department {
        id: dept_id.clone(),
        code: "CSE".to_string(),
        name: "Computer Science".to_string(),
        active: true,
    };
    let sem = Semester {
        id: sem_id.clone(),
        department_id: dept_id.clone(),
        number: 3,
    };
    let classes = vec![
        ClassSection { id: ClassId::from("cse3a"), semester_id: sem_id.clone(), name: "CSE-3A".to_string(), capacity: 60 },
        ClassSection { id: ClassId::from("cse3b"), semester_id: sem_id.clone(), name: "CSE-3B".to_string(), capacity: 60 },
    ];
    let subjects = vec![
        Subject {
            id: SubjectId::from("cs301"),
            code: "CS301".to_string(),
            short_code: "DSA".to_string(),
            department_id: dept_id.clone(),
            semester_id: sem_id.clone(),
            credits: 4,
            kind: SubjectKind::Theory { lecture_hours: 4, tutorial_hours: 1 },
        },
        Subject {
            id: SubjectId::from("cs302"),
            code: "CS302".to_string(),
            short_code: "OS".to_string(),
            department_id: dept_id.clone(),
            semester_id: sem_id.clone(),
            credits: 4,
            kind: SubjectKind::Theory { lecture_hours: 13, tutorial_hours: 0 },
        },
        Subject {
            id: SubjectId::from("cs303"),
            code: "CS303".to_string(),
            short_code: "DSL".to_string(),
            department_id: dept_id.clone(),
            semester_id: sem_id.clone(),
            credits: 2,
            kind: SubjectKind::Lab { practical_hours: 3, blocks: 2 },
        },
    ];
    let faculty = vec![
        Faculty {
            id: FacultyId::from("f1"),
            name: "Dr. Rao".to_string(),
            designation: Designation::Professor,
            department_id: Some(dept_id.clone()),
            preferences: "CS301,CS303".to_string(),
            max_hours: None,
            is_active: true,
        },
        Faculty {
            id: FacultyId::from("f2"),
            name: "Dr. Iyer".to_string(),
            designation: Designation::AssociateProfessor,
            department_id: Some(dept_id.clone()),
            preferences: "CS302,CS303".to_string(),
            max_hours: None,
            is_active: true,
        },
    ];
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

    DomainInput {
        departments: vec![dept],
        semesters: vec![sem],
        classes,
        subjects,
        faculty,
        time_slots,
        prior_assignments: vec![],
        pre_booked: vec![],
        config: ScheduleConfig {
            active_semester_type: SemesterParity::Odd,
            ga: GaConfig {
                population_size: 40,
                generations: 100,
                ..Default::default()
            },
            ..Default::default()
        },
    }
}

fn bench_evolve_one_department(c: &mut Criterion) {
    let input = small_department();
    let department_id = DepartmentId::from("cse");
    let snapshot = build_snapshot(&input, &department_id, &input.config.term_label()).unwrap();

    c.bench_function("evolve_small_department", |b| {
        b.iter(|| evolve(&snapshot, true));
    });
}

criterion_group!(benches, bench_evolve_one_department);
criterion_main!(benches);
