use serde::{Serialize, Deserialize};
use crate::models::Choice;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallyEntry {
    pub choice_id: i64,
    pub choice_text: String,
    pub votes: i32,
    /// Percentage of all votes cast on the question, 0.0 when nobody has voted.
    pub share: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tally {
    pub total_votes: i64,
    pub entries: Vec<TallyEntry>,
}

impl Tally {
    /// One entry per choice, in the order given.
    pub fn from_choices(choices: &[Choice]) -> Self {
        let total_votes: i64 = choices.iter().map(|c| i64::from(c.votes)).sum();

        let entries = choices.iter()
            .map(|c| TallyEntry {
                choice_id: c.id,
                choice_text: c.choice_text.clone(),
                votes: c.votes,
                share: match total_votes {
                    0 => 0.0,
                    total => f64::from(c.votes) * 100.0 / total as f64,
                },
            })
            .collect();

        Self { total_votes, entries }
    }
}
