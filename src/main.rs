//! Command-line driver: runs one paginated member search and prints it as JSON.
//!
//! The first argument is a query string such as
//! `teamName=teamB&ageGoe=35&ageLoe=40&sort=age,desc&page=0&size=10`.

use std::env;

use config::Config;
use dotenvy::dotenv;

use member_search::db::{establish_connection_pool, run_migrations};
use member_search::forms::member::MemberSearchForm;
use member_search::models::config::AppConfig;
use member_search::repository::DieselRepository;
use member_search::services::{member::search_members_response, seed::seed_demo_data};

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    let app_config = match settings.try_deserialize::<AppConfig>() {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading app config: {}", err);
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&app_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&pool) {
        log::error!("Failed to run migrations: {e}");
        std::process::exit(1);
    }

    let repo = DieselRepository::new(pool);

    if app_config.seed_demo_data
        && let Err(e) = seed_demo_data(&repo)
    {
        log::error!("Failed to seed demo data: {e}");
        std::process::exit(1);
    }

    let query = env::args().nth(1).unwrap_or_default();
    let form = match MemberSearchForm::from_query_string(&query) {
        Ok(form) => form,
        Err(e) => {
            log::error!("Invalid search query {query:?}: {e}");
            std::process::exit(2);
        }
    };

    let response = match search_members_response(&repo, &form, app_config.page_size) {
        Ok(response) => response,
        Err(e) => {
            log::error!("Member search failed: {e}");
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to serialize search result: {e}");
            std::process::exit(1);
        }
    }
}
