use serde::{Deserialize, Serialize};

/// One scenario-based multiple-choice item. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    /// The social situation the user must read.
    pub scenario: String,
    /// Answer options, nominally 4.
    pub options: Vec<String>,
    /// Index into `options` of the best answer.
    pub correct_option_index: usize,
    /// Why that answer works psychologically.
    pub explanation: String,
}

impl Question {
    /// A question is scorable only when the correct index points at a
    /// real option and there is an actual choice to make.
    pub fn is_well_formed(&self) -> bool {
        self.options.len() >= 2 && self.correct_option_index < self.options.len()
    }
}

/// Final verdict for one quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub score: u32,
    pub total_questions: u32,
    /// Narrative feedback from the mentor persona.
    pub feedback: String,
    /// Short personality label, e.g. "Charisma Master".
    pub archetype: String,
}

impl QuizResult {
    /// Score as a whole percentage, rounded.
    pub fn percentage(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        ((self.score as f64 / self.total_questions as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(score: u32, total: u32) -> QuizResult {
        QuizResult {
            score,
            total_questions: total,
            feedback: String::new(),
            archetype: String::new(),
        }
    }

    #[test]
    fn percentage_rounds() {
        assert_eq!(result(3, 5).percentage(), 60);
        assert_eq!(result(1, 3).percentage(), 33);
        assert_eq!(result(2, 3).percentage(), 67);
        assert_eq!(result(0, 5).percentage(), 0);
        assert_eq!(result(5, 5).percentage(), 100);
    }

    #[test]
    fn well_formed_rejects_out_of_bounds_index() {
        let q = Question {
            id: 1,
            scenario: "s".into(),
            options: vec!["a".into(), "b".into()],
            correct_option_index: 2,
            explanation: "e".into(),
        };
        assert!(!q.is_well_formed());
    }

    #[test]
    fn well_formed_rejects_single_option() {
        let q = Question {
            id: 1,
            scenario: "s".into(),
            options: vec!["a".into()],
            correct_option_index: 0,
            explanation: "e".into(),
        };
        assert!(!q.is_well_formed());
    }
}
