use lifedash_core::config::Config;
use lifedash_core::insights::{InsightClient, Persona};
use lifedash_core::metrics;
use lifedash_core::storage::FileBackend;
use lifedash_core::store::{HabitCatalog, LogStore, ProfileStore};

/// Bootstrap entrypoint: wires the stores to a file backend and logs a
/// dashboard snapshot. The real presentation layer sits on top of the
/// library; this exists so a session can be exercised end to end.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lifedash_core=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env();
    let backend = FileBackend::new(&config.data_dir)?;

    let profile = ProfileStore::new(backend.clone()).get()?;
    let habits = HabitCatalog::new(backend.clone()).list()?;
    let logs = LogStore::new(backend).list()?;

    let today = chrono::Utc::now().date_naive();
    let summary = metrics::dashboard_summary(&logs, today);
    tracing::info!(
        user = %profile.name,
        records = logs.len(),
        avg_mood_7d = summary.avg_mood,
        avg_sleep_7d = summary.avg_sleep_hours,
        spent_7d = summary.total_spent,
        logged_today = summary.logged_today,
        "dashboard snapshot"
    );

    for cell in metrics::habit_heatmap(&logs, 14, habits.len()) {
        tracing::debug!(date = %cell.date, ratio = cell.ratio, intensity = ?cell.intensity, "heatmap cell");
    }

    if config.gemini_api_key.is_empty() {
        tracing::info!("GEMINI_API_KEY not set; skipping insight generation");
        return Ok(());
    }

    let client = InsightClient::new(&config)?;
    match client.generate(&logs, Persona::Professional).await {
        Ok(report) => {
            tracing::info!(summary = %report.summary, insights = report.insights.len(), "insights generated");
        }
        Err(e) => {
            tracing::warn!(error = %e, "insight generation failed");
        }
    }

    Ok(())
}
