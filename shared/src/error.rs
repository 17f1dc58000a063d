use thiserror::Error;

/// Shown on the detail page whenever a vote submission does not name one of the question's choices.
pub const NO_CHOICE_SELECTED: &str = "You didn't select a choice.";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No choice submitted")]
    Missing,
    #[error("Choice id is not a number: {0:?}")]
    Malformed(String),
    #[error("Choice {choice_id} does not belong to question {question_id}")]
    UnknownChoice { question_id: i64, choice_id: i64 },
}

impl SelectionError {
    pub fn user_message(&self) -> &'static str {
        NO_CHOICE_SELECTED
    }
}

/// Parses the raw `choice` form value into a choice id.
pub fn parse_selection(submitted: Option<&str>) -> Result<i64, SelectionError> {
    let raw = match submitted.map(str::trim) {
        None | Some("") => return Err(SelectionError::Missing),
        Some(raw) => raw,
    };

    raw.parse::<i64>()
        .map_err(|_| SelectionError::Malformed(raw.to_string()))
}
