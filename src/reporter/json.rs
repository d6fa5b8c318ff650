use crate::error::Result;
use crate::types::GenerationResult;

/// The full generation result, machine-readable.
pub fn generate_json_report(result: &GenerationResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[derive(serde::Serialize)]
pub struct JsonSummary {
    pub success: bool,
    pub classes: usize,
    pub subjects: usize,
    pub genes: usize,
    pub final_fitness: Option<f64>,
    pub generations_run: Option<usize>,
}

pub fn generate_json_summary(result: &GenerationResult) -> Result<String> {
    let summary = JsonSummary {
        success: result.success,
        classes: result.counts.as_ref().map(|c| c.classes).unwrap_or(0),
        subjects: result.counts.as_ref().map(|c| c.subjects).unwrap_or(0),
        genes: result.counts.as_ref().map(|c| c.genes).unwrap_or(0),
        final_fitness: result.final_fitness,
        generations_run: result.generations_run,
    };

    Ok(serde_json::to_string_pretty(&summary)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GenerationCounts, GenerationResult};
    use std::collections::BTreeMap;

    #[test]
    fn report_round_trips_through_json() {
        let result = GenerationResult {
            success: true,
            timetables_by_class: BTreeMap::new(),
            counts: Some(GenerationCounts { classes: 1, subjects: 2, genes: 35 }),
            final_fitness: Some(0.0),
            generations_run: Some(10),
            fitness_history: vec![-100.0, 0.0],
            error: None,
        };
        let json = generate_json_report(&result).unwrap();
        assert!(json.contains("\"genes\": 35"));
    }
}
