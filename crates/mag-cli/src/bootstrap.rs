use mag_config::MagConfig;

/// Load layered configuration, including `.env` from the workspace root.
///
/// Startup configuration problems surface here, before any store or mail
/// operation is attempted.
pub fn load_config() -> anyhow::Result<MagConfig> {
    MagConfig::load_with_dotenv().map_err(anyhow::Error::from)
}
