use crate::scheduler::constructor::construct_chromosome;
use crate::scheduler::domain::DomainSnapshot;
use crate::scheduler::fitness::evaluate;
use crate::scheduler::operators::{crossover, mutate, tournament_select};
use crate::scheduler::repair::repair_labs;
use crate::types::{Chromosome, GenerationCounts, GenerationResult, TimetableEntry};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;

/// Result of one full evolver run: the best-ever chromosome, the best-ever
/// fitness after each completed generation, and how many generations ran
/// before early termination or budget exhaustion.
pub struct EvolutionOutcome {
    pub best: Chromosome,
    pub fitness_history: Vec<f64>,
    pub generations_run: usize,
}

/// Drives the elitist generational loop: initialise, then repeatedly select,
/// cross over, mutate, repair, and evaluate until the population exhausts
/// its generation budget or the current best reaches a non-negative
/// fitness (no hard constraint violations remain).
pub fn evolve(snapshot: &DomainSnapshot, quiet: bool) -> EvolutionOutcome {
    let config = snapshot.config.clone();
    let mut rng = StdRng::seed_from_u64(config.rng_seed);

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(config.generations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] gen {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb
    };

    let mut population: Vec<Chromosome> = (0..config.population_size.max(1))
        .map(|_| {
            let mut c = construct_chromosome(snapshot, &mut rng);
            c.fitness = evaluate(snapshot, &c);
            c
        })
        .collect();

    let mut best = population
        .iter()
        .cloned()
        .max_by(|a, b| a.fitness.partial_cmp(&b.fitness).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or_else(|| Chromosome::new(Vec::new()));

    let mut history = Vec::new();
    let mut generations_run = 0usize;

    for generation in 0..config.generations.max(1) {
        population.sort_by(|a, b| b.fitness.partial_cmp(&a.fitness).unwrap_or(std::cmp::Ordering::Equal));
        if population[0].fitness > best.fitness {
            best = population[0].clone();
        }
        history.push(best.fitness);
        generations_run = generation + 1;

        progress.set_position(generation as u64);
        progress.set_message(format!("best fitness {:.1}", best.fitness));

        if best.fitness >= 0.0 {
            break;
        }

        let mut next_gen: Vec<Chromosome> =
            population.iter().take(config.elite_count).cloned().collect();

        while next_gen.len() < config.population_size {
            let parent_a = tournament_select(&population, &config, &mut rng).clone();
            let parent_b = tournament_select(&population, &config, &mut rng).clone();
            let (mut child_a, mut child_b) = crossover(&parent_a, &parent_b, &config, &mut rng);

            mutate(&mut child_a, snapshot, &config, &mut rng);
            repair_labs(&mut child_a, snapshot, &mut rng);
            child_a.fitness = evaluate(snapshot, &child_a);
            next_gen.push(child_a);

            if next_gen.len() < config.population_size {
                mutate(&mut child_b, snapshot, &config, &mut rng);
                repair_labs(&mut child_b, snapshot, &mut rng);
                child_b.fitness = evaluate(snapshot, &child_b);
                next_gen.push(child_b);
            }
        }

        population = next_gen;
    }

    progress.finish_with_message(format!("best fitness {:.1}", best.fitness));

    EvolutionOutcome {
        best,
        fitness_history: history,
        generations_run,
    }
}

/// Shapes an [`EvolutionOutcome`] into the response format both
/// `generate_department_timetable` and `generate_class_timetable` return,
/// grouping entries by class name.
pub fn build_generation_result(snapshot: &DomainSnapshot, outcome: &EvolutionOutcome) -> GenerationResult {
    let mut by_class: BTreeMap<String, Vec<TimetableEntry>> = BTreeMap::new();

    for gene in &outcome.best.genes {
        let class_name = snapshot
            .classes
            .iter()
            .find(|c| c.id == gene.class_id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| gene.class_id.to_string());

        by_class.entry(class_name).or_default().push(TimetableEntry {
            class_id: gene.class_id.clone(),
            subject_id: gene.subject_id.clone(),
            faculty_id: gene.faculty_id.clone(),
            assistant_faculty_id: gene.assistant_faculty_id.clone(),
            time_slot_id: gene.time_slot_id.clone(),
            term_label: snapshot.term_label.clone(),
            is_lab: gene.is_lab,
        });
    }

    let subject_count = outcome
        .best
        .genes
        .iter()
        .map(|g| &g.subject_id)
        .collect::<std::collections::HashSet<_>>()
        .len();

    GenerationResult {
        success: true,
        timetables_by_class: by_class,
        counts: Some(GenerationCounts {
            classes: snapshot.classes.len(),
            subjects: subject_count,
            genes: outcome.best.genes.len(),
        }),
        final_fitness: Some(outcome.best.fitness),
        generations_run: Some(outcome.generations_run),
        fitness_history: outcome.fitness_history.clone(),
        error: None,
    }
}
