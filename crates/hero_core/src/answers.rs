//! Quiz answer record collected by an external UI collaborator.

use serde::{Deserialize, Serialize};

use crate::scoring::Question;

/// One submitted quiz session. Every field is a single-choice token from a
/// small closed set; unanswered questions stay `None` and contribute
/// nothing to scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswers {
    #[serde(default)]
    pub saving_style: Option<String>,
    #[serde(default)]
    pub risk_approach: Option<String>,
    #[serde(default)]
    pub financial_goal: Option<String>,
    #[serde(default)]
    pub financial_strength: Option<String>,
    #[serde(default)]
    pub tracking_style: Option<String>,
    /// "hero" or "villain"; absent means hero.
    #[serde(default)]
    pub alignment: Option<String>,
    /// Only consulted when `alignment` is "villain".
    #[serde(default)]
    pub villain_type: Option<String>,
}

impl QuizAnswers {
    /// Token chosen for a scored question, if any.
    pub fn token(&self, question: Question) -> Option<&str> {
        match question {
            Question::SavingStyle => self.saving_style.as_deref(),
            Question::RiskApproach => self.risk_approach.as_deref(),
            Question::FinancialGoal => self.financial_goal.as_deref(),
            Question::FinancialStrength => self.financial_strength.as_deref(),
            Question::TrackingStyle => self.tracking_style.as_deref(),
        }
    }

    pub fn is_villain_alignment(&self) -> bool {
        self.alignment.as_deref() == Some("villain")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_unanswered() {
        let a = QuizAnswers::default();
        assert!(a.saving_style.is_none());
        assert!(!a.is_villain_alignment());
        assert!(a.token(Question::TrackingStyle).is_none());
    }

    #[test]
    fn partial_json_deserializes() {
        let a: QuizAnswers = serde_json::from_str(r#"{"saving_style":"crypto"}"#).expect("json");
        assert_eq!(a.saving_style.as_deref(), Some("crypto"));
        assert!(a.risk_approach.is_none());
    }
}
