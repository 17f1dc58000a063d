use std::sync::Arc;
use rocket::{State, FromForm, Responder, get, post};
use rocket::form::Form;
use rocket::response::Redirect;
use rocket_dyn_templates::{Template, context};
use sqlx::PgPool;
use tracing::{debug, info, instrument};
use shared::{models::*, parse_selection, SelectionError, Tally};
use crate::{
    error::ApiError,
    queries::PgPollStore,
    store::PollStore,
};

pub const LATEST_QUESTIONS_LIMIT: i64 = 5;

/// Raw `<question_id>` segment; anything that is not an `i64` is treated as a missing question.
pub type QuestionId<'r> = Result<i64, &'r str>;

pub struct AppState {
    pub polls: Arc<dyn PollStore>,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self::with_store(Arc::new(PgPollStore::new(pool)))
    }

    pub fn with_store(polls: Arc<dyn PollStore>) -> Self {
        Self { polls }
    }
}

#[derive(Debug, FromForm)]
pub struct VoteForm<'r> {
    /// Every submitted `choice` value; the last one wins.
    choice: Vec<&'r str>,
}

#[derive(Responder)]
pub enum VoteResponse {
    Recorded(Redirect),
    Rejected(Template),
}

pub async fn get_question_or_404(polls: &dyn PollStore, id: QuestionId<'_>) -> Result<Question, ApiError> {
    let id = id.map_err(|_| ApiError::NotFound)?;
    polls.question(id).await?.ok_or(ApiError::NotFound)
}

fn render_detail(question: &Question, choices: &[Choice], error_message: Option<&str>) -> Template {
    Template::render("polls/detail", context! {
        question,
        choices,
        error_message,
    })
}

#[instrument(skip(state))]
#[get("/")]
pub async fn index(state: &State<AppState>) -> Result<Template, ApiError> {
    let latest_question_list = state.polls.latest_questions(LATEST_QUESTIONS_LIMIT).await?;
    let recent_ids: Vec<i64> = latest_question_list.iter()
        .filter(|q| q.was_published_recently())
        .map(|q| q.id)
        .collect();

    Ok(Template::render("polls/index", context! {
        latest_question_list,
        recent_ids,
    }))
}

#[instrument(skip(state))]
#[get("/<question_id>")]
pub async fn detail(state: &State<AppState>, question_id: QuestionId<'_>) -> Result<Template, ApiError> {
    let question = get_question_or_404(state.polls.as_ref(), question_id).await?;
    let choices = state.polls.choices(question.id).await?;

    Ok(render_detail(&question, &choices, None))
}

#[instrument(skip(state))]
#[get("/<question_id>/results")]
pub async fn results(state: &State<AppState>, question_id: QuestionId<'_>) -> Result<Template, ApiError> {
    let question = get_question_or_404(state.polls.as_ref(), question_id).await?;
    let choices = state.polls.choices(question.id).await?;
    let tally = Tally::from_choices(&choices);

    Ok(Template::render("polls/results", context! {
        question,
        tally,
    }))
}

/// A body that is not a form (wrong or missing content type) counts as no selection.
#[instrument(skip(state, form))]
#[post("/<question_id>/vote", data = "<form>")]
pub async fn vote(
    state: &State<AppState>,
    question_id: QuestionId<'_>,
    form: Option<Form<VoteForm<'_>>>,
) -> Result<VoteResponse, ApiError> {
    let question = get_question_or_404(state.polls.as_ref(), question_id).await?;
    let submitted = form.as_ref().and_then(|f| f.choice.last().copied());

    let outcome = match parse_selection(submitted) {
        Ok(choice_id) => state.polls.record_vote(question.id, choice_id).await?
            .ok_or(SelectionError::UnknownChoice { question_id: question.id, choice_id }),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(choice) => {
            info!(choice_id = choice.id, votes = choice.votes, "Vote recorded");
            Ok(VoteResponse::Recorded(Redirect::found(format!("/polls/{}/results", question.id))))
        }
        Err(e) => {
            debug!("Rejected vote: {}", e);
            let choices = state.polls.choices(question.id).await?;
            Ok(VoteResponse::Rejected(render_detail(&question, &choices, Some(e.user_message()))))
        }
    }
}
