/// Fixed weights applied to each component when computing the overall score.
pub const SCORE_WEIGHTS: ScoreWeights = ScoreWeights {
    attitude: 0.2,
    relocation: 0.2,
    skill: 0.3,
    experience: 0.3,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub attitude: f64,
    pub relocation: f64,
    pub skill: f64,
    pub experience: f64,
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.attitude + self.relocation + self.skill + self.experience
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((SCORE_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }
}
