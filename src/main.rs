/// liftlog: personal workout tracker
///
/// Main entry point. Loads configuration from the environment and starts
/// the HTTP server.

use liftlog::{config::Config, server::start_server};

/// Application entry point
///
/// The server provides:
/// - Workout in progress at / , /add-exercise, /set_workout_name, /clear-drafts
/// - Saved workouts at /save-workout, /workout_list, /workout/{id}, /delete-workout/{id}
/// - Health check at /healthz
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to 0.0.0.0:5001 and sqlite://gym.db
    let config = Config::default();

    start_server(config).await?;

    Ok(())
}
