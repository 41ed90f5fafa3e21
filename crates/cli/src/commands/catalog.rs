use anyhow::Result;
use ipl_stats_core::{AppConfig, ModelChoice};
use ipl_stats_storage::PgDatabase;

/// One line per model: id, provider and whether its API key is set.
/// The default model is marked with `*`.
pub(crate) fn run_models() {
    let default = ModelChoice::default();
    for model in ModelChoice::ALL {
        let provider = model.provider();
        let key_var = provider.api_key_var();
        let status = if std::env::var(key_var).is_ok_and(|k| !k.trim().is_empty()) {
            "configured".to_owned()
        } else {
            format!("missing {key_var}")
        };
        let marker = if *model == default { "*" } else { " " };
        println!("{marker} {model}\t{provider}\t{status}");
    }
}

pub(crate) async fn run_schema() -> Result<()> {
    let config = AppConfig::from_env()?;
    let db = PgDatabase::connect(&config.database_url).await?;
    println!("{}", db.table_info().await?);
    Ok(())
}
