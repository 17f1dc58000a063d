use backend::{
    config::Settings,
    routes::AppState,
    seed::seed_demo,
    server::build_rocket,
};
use shuttle_runtime::CustomError;
use sqlx::PgPool;
use tracing::info;
use include_dir::{include_dir, Dir};
use uuid::Uuid;

static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting polls server");

    let settings = Settings::from_lookup(|key| secret_store.get(key));

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(CustomError::new)?;

    info!("📋 Migrations complete");

    let app_state = AppState::new(pool);

    if settings.seed_demo {
        seed_demo(app_state.polls.as_ref())
            .await
            .map_err(CustomError::new)?;
    }

    let template_dir = std::env::temp_dir().join(format!("polls_templates_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&template_dir).map_err(CustomError::new)?;
    TEMPLATES_DIR.extract(&template_dir).map_err(CustomError::new)?;

    Ok(build_rocket(app_state, &template_dir).into())
}
