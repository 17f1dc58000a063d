use crate::models::NewQuestion;

pub const MAX_QUESTION_TEXT_LENGTH: usize = 200;
pub const MAX_CHOICE_TEXT_LENGTH: usize = 200;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Question text is empty")]
    EmptyQuestionText,
    #[error("Question text exceeds maximum length of {MAX_QUESTION_TEXT_LENGTH}")]
    QuestionTextTooLong,
    #[error("Empty choice text")]
    EmptyChoiceText,
    #[error("Choice text exceeds maximum length of {MAX_CHOICE_TEXT_LENGTH}")]
    ChoiceTextTooLong,
    #[error("Invalid vote count: {0} (must not be negative)")]
    NegativeVotes(i32),
}

pub fn validate_new_question(question: &NewQuestion) -> Result<(), ValidationError> {
    let text = question.question_text.trim();
    if text.is_empty() { return Err(ValidationError::EmptyQuestionText); }
    if text.chars().count() > MAX_QUESTION_TEXT_LENGTH { return Err(ValidationError::QuestionTextTooLong); }

    for choice in &question.choices {
        let text = choice.choice_text.trim();
        if text.is_empty() { return Err(ValidationError::EmptyChoiceText); }
        if text.chars().count() > MAX_CHOICE_TEXT_LENGTH { return Err(ValidationError::ChoiceTextTooLong); }
        if choice.votes < 0 { return Err(ValidationError::NegativeVotes(choice.votes)); }
    }

    Ok(())
}
