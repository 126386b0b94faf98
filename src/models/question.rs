use serde::{Deserialize, Serialize};

/// A single multiple-choice quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    pub correct_answer: usize,
    pub explanation: String,
}

impl Question {
    /// Returns true if `correct_answer` points at one of the options.
    pub fn is_well_formed(&self) -> bool {
        self.correct_answer < self.options.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct_answer: usize) -> Question {
        Question {
            id: 7,
            question: "2 + 2?".to_string(),
            options: vec!["3".to_string(), "4".to_string()],
            correct_answer,
            explanation: "Arithmetic.".to_string(),
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&question(1)).unwrap();
        assert!(json.contains("\"correctAnswer\":1"));
        assert!(!json.contains("correct_answer"));
    }

    #[test]
    fn test_well_formed() {
        assert!(question(0).is_well_formed());
        assert!(question(1).is_well_formed());
        assert!(!question(2).is_well_formed());
    }
}
