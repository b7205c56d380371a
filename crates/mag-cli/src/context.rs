//! Application context: the process-scoped store service plus loaded config.

use mag_config::MagConfig;
use mag_db::service::MagService;

/// Everything a command handler needs: one store service for the process
/// lifetime and the resolved configuration.
pub struct AppContext {
    pub service: MagService,
    pub config: MagConfig,
}

impl AppContext {
    /// Validate the store configuration and open the store connection.
    ///
    /// This is the startup gate: a missing store configuration fails here
    /// with an explicit error rather than mid-operation.
    ///
    /// # Errors
    ///
    /// Returns an error when the store section is unconfigured or the
    /// database cannot be opened.
    pub async fn init(config: MagConfig) -> anyhow::Result<Self> {
        config.store.require_configured()?;

        let service = if config.store.has_local_path() {
            MagService::new_local(&config.store.local_path).await?
        } else {
            MagService::new_remote(&config.store.url, &config.store.auth_token).await?
        };

        Ok(Self { service, config })
    }
}

/// Emit warnings for likely mistyped env var keys that silently fell back to
/// defaults.
pub fn warn_unconfigured(config: &MagConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &MagConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.store.is_configured()
        && !config.store.has_local_path()
        && has_env_prefix(&env_keys, "MAGAZYN_STORE")
    {
        warnings.push(
            "Store config appears default while MAGAZYN_STORE* env vars exist. Use double underscores (example: MAGAZYN_STORE__URL)."
                .to_string(),
        );
    }

    if !config.mail.is_configured() && has_env_prefix(&env_keys, "MAGAZYN_MAIL") {
        warnings.push(
            "Mail config appears default while MAGAZYN_MAIL* env vars exist. Use double underscores (example: MAGAZYN_MAIL__SENDER)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use mag_config::{MagConfig, MailConfig, StoreConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_unconfigured_sections_with_env_prefixes() {
        let config = MagConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("MAGAZYN_STORE_URL".to_string(), "libsql://demo".to_string()),
                (
                    "MAGAZYN_MAIL_SENDER".to_string(),
                    "magazyn@example.com".to_string(),
                ),
            ],
        );

        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn does_not_warn_when_sections_are_configured() {
        let config = MagConfig {
            store: StoreConfig {
                url: "libsql://demo".to_string(),
                auth_token: "token".to_string(),
                ..Default::default()
            },
            mail: MailConfig {
                smtp_host: "smtp.example.com".to_string(),
                sender: "magazyn@example.com".to_string(),
                password: "secret".to_string(),
                recipient: "ops@example.com".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("MAGAZYN_STORE__URL".to_string(), "libsql://demo".to_string()),
                (
                    "MAGAZYN_MAIL__SENDER".to_string(),
                    "magazyn@example.com".to_string(),
                ),
            ],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn local_path_counts_as_configured_store() {
        let config = MagConfig {
            store: StoreConfig {
                local_path: "./magazyn.db".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![(
                "MAGAZYN_STORE__LOCAL_PATH".to_string(),
                "./magazyn.db".to_string(),
            )],
        );

        assert!(warnings.is_empty());
    }
}
