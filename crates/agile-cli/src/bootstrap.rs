use anyhow::Context;
use agile_config::AgileConfig;

/// Load `.env` from the working directory, then the layered config.
pub fn load_config() -> anyhow::Result<AgileConfig> {
    AgileConfig::load_with_dotenv().context("failed to load agile configuration")
}
