// Environment-sourced service configuration
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub debug: bool,
    pub base_path: String,
    pub environment: String,
    pub hostname: String,
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub aws_access_key_id: Option<String>,
    pub aws_secret_access_key: Option<String>,
    pub aws_default_region: String,
    /// Required for any QuickSight call; validated at startup.
    pub aws_account_id: Option<String>,
    pub quicksight_namespace: String,
    /// Comma-separated embed-domain allow-list, forwarded on embed calls.
    pub allowed_embed_domains: Option<String>,
}

/// Load settings from the process environment (DEBUG, HOST, PORT,
/// AWS_ACCOUNT_ID, ...), falling back to defaults.
pub fn load_settings() -> anyhow::Result<Settings> {
    load_from(config::Environment::default())
}

fn load_from(env: config::Environment) -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .set_default("debug", false)?
        .set_default("base_path", "/")?
        .set_default("environment", "dev")?
        .set_default("hostname", "localhost")?
        .set_default("host", "0.0.0.0")?
        .set_default("port", 8000_i64)?
        .set_default("workers", 1_i64)?
        .set_default("aws_default_region", "us-east-1")?
        .set_default("quicksight_namespace", "default")?
        .add_source(env)
        .build()?;

    Ok(settings.try_deserialize()?)
}
