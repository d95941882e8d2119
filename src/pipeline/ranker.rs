use crate::emotion::EmotionScore;

/// Orders scores from highest to lowest. The sort is stable, so tied scores keep the
/// classifier's order; `f32::total_cmp` gives a total order even for NaN.
pub fn rank(mut scores: Vec<EmotionScore>) -> Vec<EmotionScore> {
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<EmotionScore> {
        vec![
            EmotionScore::new("joy", 0.10),
            EmotionScore::new("sadness", 0.70),
            EmotionScore::new("anger", 0.05),
            EmotionScore::new("fear", 0.05),
            EmotionScore::new("surprise", 0.03),
            EmotionScore::new("disgust", 0.02),
            EmotionScore::new("neutral", 0.05),
        ]
    }

    fn labels(scores: &[EmotionScore]) -> Vec<&str> {
        scores.iter().map(|s| s.label.as_str()).collect()
    }

    #[test]
    fn output_is_non_increasing() {
        let ranked = rank(sample());
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(ranked[0].label.as_str(), "sadness");
    }

    #[test]
    fn ties_keep_classifier_order() {
        let ranked = rank(sample());
        assert_eq!(
            labels(&ranked),
            vec!["sadness", "joy", "anger", "fear", "neutral", "surprise", "disgust"]
        );
    }

    #[test]
    fn ranking_is_idempotent() {
        let once = rank(sample());
        let twice = rank(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_ranks_to_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
