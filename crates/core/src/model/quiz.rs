use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every question offers exactly this many options.
pub const OPTION_COUNT: usize = 3;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz prompt cannot be empty")]
    EmptyPrompt,

    #[error("quiz option {position} cannot be empty")]
    EmptyOption { position: usize },

    #[error("quiz option must be between 1 and 3, got {provided}")]
    ChoiceOutOfRange { provided: u8 },
}

//
// ─── CHOICE ────────────────────────────────────────────────────────────────────
//

/// A 1-based quiz option index, always in `1..=3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct QuizChoice(u8);

impl QuizChoice {
    pub const FIRST: Self = Self(1);
    pub const SECOND: Self = Self(2);
    pub const THIRD: Self = Self(3);

    /// All choices in display order.
    pub const ALL: [Self; OPTION_COUNT] = [Self::FIRST, Self::SECOND, Self::THIRD];

    /// # Errors
    ///
    /// Returns `QuizError::ChoiceOutOfRange` unless `value` is 1, 2 or 3.
    pub fn new(value: u8) -> Result<Self, QuizError> {
        if (1..=3).contains(&value) {
            Ok(Self(value))
        } else {
            Err(QuizError::ChoiceOutOfRange { provided: value })
        }
    }

    /// The 1-based number shown to the user.
    #[must_use]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based position into the option list.
    #[must_use]
    pub fn position(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for QuizChoice {
    type Error = QuizError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuizChoice> for u8 {
    fn from(choice: QuizChoice) -> Self {
        choice.0
    }
}

//
// ─── OUTCOME ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Correct,
    Incorrect { correct: QuizChoice },
}

impl QuizOutcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One multiple-choice question attached to a landmark.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestion {
    prompt: String,
    options: [String; OPTION_COUNT],
    correct: QuizChoice,
}

impl QuizQuestion {
    /// # Errors
    ///
    /// Returns `QuizError` if the prompt or an option is blank, or `correct` is not in `1..=3`.
    pub fn new(
        prompt: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct: u8,
    ) -> Result<Self, QuizError> {
        let prompt = prompt.into().trim().to_string();
        if prompt.is_empty() {
            return Err(QuizError::EmptyPrompt);
        }
        let options = options.map(|option| option.trim().to_string());
        if let Some(position) = options.iter().position(String::is_empty) {
            return Err(QuizError::EmptyOption {
                position: position + 1,
            });
        }
        let correct = QuizChoice::new(correct)?;

        Ok(Self {
            prompt,
            options,
            correct,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, choice: QuizChoice) -> &str {
        &self.options[choice.position()]
    }

    #[must_use]
    pub fn correct(&self) -> QuizChoice {
        self.correct
    }

    #[must_use]
    pub fn grade(&self, choice: QuizChoice) -> QuizOutcome {
        if choice == self.correct {
            QuizOutcome::Correct
        } else {
            QuizOutcome::Incorrect {
                correct: self.correct,
            }
        }
    }

    /// Text shown under the quiz once it has been answered.
    #[must_use]
    pub fn outcome_message(&self, outcome: QuizOutcome) -> String {
        match outcome {
            QuizOutcome::Correct => "Correct! Well done.".to_string(),
            QuizOutcome::Incorrect { correct } => {
                format!("Incorrect. Correct answer: {}", self.option(correct))
            }
        }
    }
}

/// Unvalidated question as it appears in catalog files.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuizQuestionDraft {
    pub prompt: String,
    pub options: [String; OPTION_COUNT],
    pub correct: u8,
}

impl QuizQuestionDraft {
    /// # Errors
    ///
    /// Returns `QuizError` if the draft does not form a valid question.
    pub fn validate(self) -> Result<QuizQuestion, QuizError> {
        QuizQuestion::new(self.prompt, self.options, self.correct)
    }
}

impl From<&QuizQuestion> for QuizQuestionDraft {
    fn from(question: &QuizQuestion) -> Self {
        Self {
            prompt: question.prompt.clone(),
            options: question.options.clone(),
            correct: question.correct.number(),
        }
    }
}
