use crate::types::{ClassId, Gene, SubjectId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A complete candidate weekly timetable for a department: an unordered
/// collection of genes plus the fitness last computed for it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Chromosome {
    pub genes: Vec<Gene>,
    #[serde(default)]
    pub fitness: f64,
}

impl Chromosome {
    pub fn new(genes: Vec<Gene>) -> Self {
        Chromosome { genes, fitness: 0.0 }
    }

    pub fn genes_for_class(&self, class_id: &ClassId) -> impl Iterator<Item = &Gene> {
        self.genes.iter().filter(move |g| &g.class_id == class_id)
    }

    /// Groups this chromosome's genes by class, preserving first-seen order
    /// of class IDs for deterministic iteration.
    pub fn by_class(&self) -> HashMap<ClassId, Vec<&Gene>> {
        let mut map: HashMap<ClassId, Vec<&Gene>> = HashMap::new();
        for gene in &self.genes {
            map.entry(gene.class_id.clone()).or_default().push(gene);
        }
        map
    }

    /// Lab genes of one class grouped by subject; used by fitness and repair
    /// to find each lab's (ideally three-gene) block.
    pub fn lab_groups_for_class(&self, class_id: &ClassId) -> HashMap<SubjectId, Vec<&Gene>> {
        let mut map: HashMap<SubjectId, Vec<&Gene>> = HashMap::new();
        for gene in self.genes_for_class(class_id).filter(|g| g.is_lab) {
            map.entry(gene.subject_id.clone()).or_default().push(gene);
        }
        map
    }
}
