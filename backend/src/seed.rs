use time::OffsetDateTime;
use tracing::info;
use shared::models::NewQuestion;
use crate::store::{PollStore, StoreError};

pub fn demo_question(pub_date: OffsetDateTime) -> NewQuestion {
    NewQuestion::new("What's new?", pub_date)
        .with_choice("Not much")
        .with_choice("The sky")
}

/// Inserts the demo question when the store has no questions yet. Returns whether it did.
pub async fn seed_demo(polls: &dyn PollStore) -> Result<bool, StoreError> {
    if polls.count_questions().await? > 0 {
        info!("Store already has questions, skipping demo seed");
        return Ok(false);
    }

    let question = polls.create_question(&demo_question(OffsetDateTime::now_utc())).await?;
    info!("🌱 Seeded demo question {}", question.id);
    Ok(true)
}
