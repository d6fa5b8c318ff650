use serde::{Deserialize, Serialize};

/// Genetic algorithm tuning knobs, overridable from `config.toml` or CLI
/// flags; defaults match the values the weighted-constraint search was
/// tuned against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    pub population_size: usize,
    pub generations: usize,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
    pub elite_count: usize,
    pub tournament_size: usize,
    /// Explicit seed for the evolver's RNG; every draw of randomness inside
    /// the core consumes this one generator, never a thread-local or
    /// time-seeded source, so a run is reproducible given the same inputs.
    pub rng_seed: u64,
}

impl Default for GaConfig {
    fn default() -> Self {
        GaConfig {
            population_size: 100,
            generations: 500,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            elite_count: 5,
            tournament_size: 5,
            rng_seed: 42,
        }
    }
}

/// Time grid configuration: which semester parity is currently active and
/// the academic year label used to build term labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub active_semester_type: crate::types::SemesterParity,
    pub academic_year: String,
    pub ga: GaConfig,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            active_semester_type: crate::types::SemesterParity::Odd,
            academic_year: "2024-25".to_string(),
            ga: GaConfig::default(),
        }
    }
}

impl ScheduleConfig {
    /// The opaque term label threaded through persistence and pre-booked
    /// slot lookups.
    pub fn term_label(&self) -> String {
        format!("{}-{}", self.academic_year, self.active_semester_type)
    }
}
