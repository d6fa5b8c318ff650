use crate::scheduler::domain::DomainSnapshot;
use crate::types::{Chromosome, ClassId, GaConfig};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Samples `tournament_size` individuals without replacement and returns a
/// clone of the fittest.
pub fn tournament_select<'a>(
    population: &'a [Chromosome],
    config: &GaConfig,
    rng: &mut StdRng,
) -> &'a Chromosome {
    let size = config.tournament_size.min(population.len()).max(1);
    let mut indices: Vec<usize> = (0..population.len()).collect();
    indices.shuffle(rng);
    indices
        .into_iter()
        .take(size)
        .map(|i| &population[i])
        .max_by(|a, b| a.fitness.partial_cmp(&b.fitness).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or(&population[0])
}

/// Class-partitioned crossover: partition each parent's genes by class, pick
/// a random half of the class IDs to swap between parents. Preserves each
/// class's internal structure (including lab triples) while mixing classes.
pub fn crossover(
    parent_a: &Chromosome,
    parent_b: &Chromosome,
    config: &GaConfig,
    rng: &mut StdRng,
) -> (Chromosome, Chromosome) {
    if !rng.gen_bool(config.crossover_rate) {
        return (parent_a.clone(), parent_b.clone());
    }

    let by_class_a = parent_a.by_class();
    let by_class_b = parent_b.by_class();

    let mut class_ids: Vec<ClassId> = by_class_a.keys().cloned().collect();
    class_ids.sort_by(|a, b| a.0.cmp(&b.0));
    class_ids.shuffle(rng);
    let swap_count = class_ids.len() / 2;
    let swap_set: HashSet<ClassId> = class_ids.into_iter().take(swap_count).collect();

    let mut child_a_genes = Vec::new();
    let mut child_b_genes = Vec::new();

    for (class_id, genes) in &by_class_a {
        if swap_set.contains(class_id) {
            if let Some(from_b) = by_class_b.get(class_id) {
                child_a_genes.extend(from_b.iter().map(|g| (*g).clone()));
            } else {
                child_a_genes.extend(genes.iter().map(|g| (*g).clone()));
            }
        } else {
            child_a_genes.extend(genes.iter().map(|g| (*g).clone()));
        }
    }

    for (class_id, genes) in &by_class_b {
        if swap_set.contains(class_id) {
            if let Some(from_a) = by_class_a.get(class_id) {
                child_b_genes.extend(from_a.iter().map(|g| (*g).clone()));
            } else {
                child_b_genes.extend(genes.iter().map(|g| (*g).clone()));
            }
        } else {
            child_b_genes.extend(genes.iter().map(|g| (*g).clone()));
        }
    }

    (Chromosome::new(child_a_genes), Chromosome::new(child_b_genes))
}

#[derive(Debug, Clone, Copy)]
enum MutationVariant {
    SwapSlotWithinClass,
    ChangeFaculty,
    SwapFacultyAcrossClasses,
}

/// Applies, with probability `config.mutation_rate`, one of three mutation
/// variants to the chromosome in place.
pub fn mutate(chromosome: &mut Chromosome, snapshot: &DomainSnapshot, config: &GaConfig, rng: &mut StdRng) {
    if !rng.gen_bool(config.mutation_rate) {
        return;
    }

    let variant = match rng.gen_range(0..3) {
        0 => MutationVariant::SwapSlotWithinClass,
        1 => MutationVariant::ChangeFaculty,
        _ => MutationVariant::SwapFacultyAcrossClasses,
    };

    match variant {
        MutationVariant::SwapSlotWithinClass => swap_slot_within_class(chromosome, rng),
        MutationVariant::ChangeFaculty => change_faculty(chromosome, snapshot, rng),
        MutationVariant::SwapFacultyAcrossClasses => swap_faculty_across_classes(chromosome, rng),
    }
}

fn swap_slot_within_class(chromosome: &mut Chromosome, rng: &mut StdRng) {
    let mut by_class: std::collections::HashMap<ClassId, Vec<usize>> = std::collections::HashMap::new();
    for (i, gene) in chromosome.genes.iter().enumerate() {
        if !gene.is_lab {
            by_class.entry(gene.class_id.clone()).or_default().push(i);
        }
    }
    let eligible: Vec<&Vec<usize>> = by_class.values().filter(|v| v.len() >= 2).collect();
    let Some(indices) = eligible.choose(rng) else { return };
    let mut pair: Vec<usize> = (*indices).clone();
    pair.shuffle(rng);
    let (i, j) = (pair[0], pair[1]);
    let tmp = chromosome.genes[i].time_slot_id.clone();
    chromosome.genes[i].time_slot_id = chromosome.genes[j].time_slot_id.clone();
    chromosome.genes[j].time_slot_id = tmp;
}

fn change_faculty(chromosome: &mut Chromosome, snapshot: &DomainSnapshot, rng: &mut StdRng) {
    if chromosome.genes.is_empty() {
        return;
    }
    let idx = rng.gen_range(0..chromosome.genes.len());
    let subject_id = chromosome.genes[idx].subject_id.clone();
    let Some(subject) = snapshot
        .subjects_by_semester
        .values()
        .flatten()
        .find(|s| s.id == subject_id)
    else {
        return;
    };
    let eligible = snapshot.eligible_faculty(&subject.code);
    if let Some(new_faculty) = eligible.choose(rng) {
        chromosome.genes[idx].faculty_id = new_faculty.clone();
    }
}

fn swap_faculty_across_classes(chromosome: &mut Chromosome, rng: &mut StdRng) {
    let mut by_slot: std::collections::HashMap<crate::types::TimeSlotId, Vec<usize>> =
        std::collections::HashMap::new();
    for (i, gene) in chromosome.genes.iter().enumerate() {
        by_slot.entry(gene.time_slot_id.clone()).or_default().push(i);
    }
    let candidates: Vec<(usize, usize)> = by_slot
        .values()
        .filter(|v| v.len() >= 2)
        .filter_map(|v| {
            for a in 0..v.len() {
                for b in (a + 1)..v.len() {
                    if chromosome.genes[v[a]].class_id != chromosome.genes[v[b]].class_id {
                        return Some((v[a], v[b]));
                    }
                }
            }
            None
        })
        .collect();
    let Some(&(i, j)) = candidates.choose(rng) else { return };
    let tmp = chromosome.genes[i].faculty_id.clone();
    chromosome.genes[i].faculty_id = chromosome.genes[j].faculty_id.clone();
    chromosome.genes[j].faculty_id = tmp;
}
