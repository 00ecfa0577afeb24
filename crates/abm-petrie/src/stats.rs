//! Per-step reporting for the population model.

use abm_core::{StatsRecord, Step};

use crate::Actor;

/// Share of one cohort in each interaction category.
///
/// Every fraction is `0.0` for an empty cohort.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CohortStats {
    pub size:        usize,
    /// Fraction that has made at least one hostile comment.
    pub emitting:    f64,
    /// Fraction that has received at least one hostile comment.
    pub received:    f64,
    pub dropped_out: f64,
}

impl CohortStats {
    pub fn of(cohort: &[Actor]) -> Self {
        let size = cohort.len();
        if size == 0 {
            return Self::default();
        }
        let frac = |pred: fn(&Actor) -> bool| {
            cohort.iter().filter(|a| pred(a)).count() as f64 / size as f64
        };
        Self {
            size,
            emitting:    frac(|a| a.emitted() > 0),
            received:    frac(|a| a.received() > 0),
            dropped_out: frac(|a| a.dropped_out()),
        }
    }
}

/// Statistics reported after each step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PetrieStats {
    pub step:            Step,
    /// Comments made during this step.
    pub exchanges:       u64,
    /// Comments made since seeding.
    pub total_exchanges: u64,
    pub men:             CohortStats,
    pub women:           CohortStats,
}

impl StatsRecord for PetrieStats {
    const HEADER: &'static [&'static str] = &[
        "step",
        "exchanges",
        "total_exchanges",
        "men",
        "men_emitting",
        "men_received",
        "men_dropped_out",
        "women",
        "women_emitting",
        "women_received",
        "women_dropped_out",
    ];

    fn fields(&self) -> Vec<String> {
        let mut out = vec![
            self.step.0.to_string(),
            self.exchanges.to_string(),
            self.total_exchanges.to_string(),
        ];
        for c in [&self.men, &self.women] {
            out.push(c.size.to_string());
            out.push(format!("{:.6}", c.emitting));
            out.push(format!("{:.6}", c.received));
            out.push(format!("{:.6}", c.dropped_out));
        }
        out
    }
}
