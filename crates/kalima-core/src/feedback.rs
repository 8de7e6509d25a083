use kalima_config::feedback::FeedbackConfig;

/// Feedback band shown for a pronunciation score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FeedbackTier {
    NeedsPractice,
    Intermediate,
    Favorable,
}

impl FeedbackTier {
    pub fn from_score(score: u8, thresholds: &FeedbackConfig) -> Self {
        if score >= thresholds.favorable {
            FeedbackTier::Favorable
        } else if score >= thresholds.intermediate {
            FeedbackTier::Intermediate
        } else {
            FeedbackTier::NeedsPractice
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackTier::Favorable => "Excellent",
            FeedbackTier::Intermediate => "Good try",
            FeedbackTier::NeedsPractice => "Needs practice",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            FeedbackTier::Favorable => "green",
            FeedbackTier::Intermediate => "yellow",
            FeedbackTier::NeedsPractice => "red",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bands() {
        let thresholds = FeedbackConfig::default();

        assert_eq!(FeedbackTier::from_score(100, &thresholds), FeedbackTier::Favorable);
        assert_eq!(FeedbackTier::from_score(75, &thresholds), FeedbackTier::Favorable);
        assert_eq!(FeedbackTier::from_score(74, &thresholds), FeedbackTier::Intermediate);
        assert_eq!(FeedbackTier::from_score(50, &thresholds), FeedbackTier::Intermediate);
        assert_eq!(FeedbackTier::from_score(49, &thresholds), FeedbackTier::NeedsPractice);
        assert_eq!(FeedbackTier::from_score(0, &thresholds), FeedbackTier::NeedsPractice);
    }

    #[test]
    fn test_custom_bands() {
        let thresholds = FeedbackConfig {
            favorable: 90,
            intermediate: 90,
        };

        assert_eq!(FeedbackTier::from_score(89, &thresholds), FeedbackTier::NeedsPractice);
        assert_eq!(FeedbackTier::from_score(90, &thresholds).color(), "green");
    }
}
