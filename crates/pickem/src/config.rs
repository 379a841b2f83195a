use crate::models::ScoringPolicy;

#[derive(Debug, Clone, Copy, Default)]
pub struct PickemConfig {
    pub scoring_policy: ScoringPolicy,
}

impl PickemConfig {
    pub fn new(scoring_policy: ScoringPolicy) -> Self {
        Self { scoring_policy }
    }
}
