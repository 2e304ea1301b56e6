use serde::{Deserialize, Serialize};

/// Fewest options a question may offer.
pub const MIN_OPTIONS: usize = 2;
/// Most options a question may offer.
pub const MAX_OPTIONS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Question {
    pub fn new<T, O, A>(text: T, options: O, correct_answer: A) -> Self
    where
        T: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
        A: Into<String>,
    {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer: correct_answer.into(),
            explanation: None,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn has_option(&self, answer: &str) -> bool {
        self.options.iter().any(|option| option == answer)
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }

    /// Checks the option count and that the correct answer is one of the options.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.text.trim().is_empty() {
            return Err("question text is empty");
        }
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&self.options.len()) {
            return Err("a question needs between 2 and 6 options");
        }
        if !self.has_option(&self.correct_answer) {
            return Err("correct answer is not one of the options");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let question = Question::new("2 + 2?", ["3", "4"], "4");
        assert!(question.validate().is_ok());

        let missing = Question::new("2 + 2?", ["3", "5"], "4");
        assert!(missing.validate().is_err());

        let too_few = Question::new("2 + 2?", ["4"], "4");
        assert!(too_few.validate().is_err());

        let too_many = Question::new("2 + 2?", ["1", "2", "3", "4", "5", "6", "7"], "4");
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_deserialize_without_explanation() {
        let json = r#"{"text":"Q","options":["a","b"],"correct_answer":"a"}"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.explanation, None);
        assert!(question.is_correct("a"));
        assert!(!question.is_correct("b"));
    }
}
