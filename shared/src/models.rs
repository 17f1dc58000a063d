use serde::{Serialize, Deserialize};
use time::{Duration, OffsetDateTime};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
pub struct Question {
    pub id: i64,
    pub question_text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub pub_date: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
pub struct Choice {
    pub id: i64,
    pub question_id: i64,
    pub choice_text: String,
    pub votes: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewQuestion {
    pub question_text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub pub_date: OffsetDateTime,
    pub choices: Vec<NewChoice>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewChoice {
    pub choice_text: String,
    #[serde(default)]
    pub votes: i32,
}

impl Question {
    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(OffsetDateTime::now_utc())
    }

    /// True when `pub_date` falls within the day before `now`. Future dates are not recent.
    pub fn was_published_recently_at(&self, now: OffsetDateTime) -> bool {
        now - Duration::days(1) <= self.pub_date && self.pub_date <= now
    }
}

impl NewQuestion {
    pub fn new(question_text: impl Into<String>, pub_date: OffsetDateTime) -> Self {
        Self {
            question_text: question_text.into(),
            pub_date,
            choices: Vec::new(),
        }
    }

    pub fn with_choice(self, choice_text: impl Into<String>) -> Self {
        self.with_tallied_choice(choice_text, 0)
    }

    pub fn with_tallied_choice(mut self, choice_text: impl Into<String>, votes: i32) -> Self {
        self.choices.push(NewChoice {
            choice_text: choice_text.into(),
            votes,
        });
        self
    }
}
