use super::constants::GROWTH_COST_EXPONENT;

/// Marginal cost of growing past segment index `segment` (0-based).
///
/// Flattens at `max_segments - 1`, so segment counts at or past the cap keep
/// paying the last in-range cost.
pub fn marginal_cost(segment: usize, max_segments: usize) -> f64 {
    let cap = max_segments.max(1);
    let clamped = segment.min(cap - 1);
    (1.0 - clamped as f64 / cap as f64).powf(GROWTH_COST_EXPONENT)
}

/// `sum(1 / marginal_cost(i - 1))` for `i` in `1..=segment_count`.
pub fn cumulative_inverse_cost(segment_count: usize, max_segments: usize) -> f64 {
    (1..=segment_count)
        .map(|i| 1.0 / marginal_cost(i - 1, max_segments))
        .sum()
}

/// Score for a creature with `segment_count` whole segments and `mass`
/// fractional progress toward the next one.
pub fn score_for(cumulative: f64, marginal: f64, mass: f64) -> i64 {
    (15.0 * (cumulative + mass / marginal - 1.0) - 5.0).floor() as i64
}

/// Precomputed growth curve for one segment cap.
#[derive(Debug, Clone)]
pub struct GrowthCurve {
    max_segments: usize,
    marginal: Vec<f64>,
    cumulative: Vec<f64>,
}

impl GrowthCurve {
    pub fn new(max_segments: usize) -> Self {
        let max_segments = max_segments.max(1);
        let marginal: Vec<f64> = (0..=max_segments)
            .map(|segment| marginal_cost(segment, max_segments))
            .collect();
        let mut cumulative = Vec::with_capacity(max_segments + 1);
        let mut sum = 0.0;
        cumulative.push(sum);
        for cost in marginal.iter().take(max_segments) {
            sum += 1.0 / cost;
            cumulative.push(sum);
        }
        Self {
            max_segments,
            marginal,
            cumulative,
        }
    }

    pub fn max_segments(&self) -> usize {
        self.max_segments
    }

    pub fn marginal_cost(&self, segment: usize) -> f64 {
        self.marginal[segment.min(self.max_segments)]
    }

    pub fn cumulative_inverse_cost(&self, segment_count: usize) -> f64 {
        if segment_count <= self.max_segments {
            return self.cumulative[segment_count];
        }
        let overflow = (segment_count - self.max_segments) as f64;
        self.cumulative[self.max_segments] + overflow / self.marginal_cost(self.max_segments)
    }

    pub fn score(&self, segment_count: usize, mass: f64) -> i64 {
        score_for(
            self.cumulative_inverse_cost(segment_count),
            self.marginal_cost(segment_count),
            mass,
        )
    }
}
