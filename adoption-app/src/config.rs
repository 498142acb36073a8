//! Configuration loading from environment.

use std::env;

use adoption_hex::inbound::CorsPolicy;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub cors: CorsPolicy,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `CORS_ALLOWED_ORIGINS` unset or `*` selects the permissive policy;
    /// a comma-separated origin list selects the credentialed allowlist.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let cors = cors_policy(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref());

        Ok(Self {
            port,
            database_url,
            cors,
        })
    }
}

fn cors_policy(raw: Option<&str>) -> CorsPolicy {
    match raw {
        None => CorsPolicy::Permissive,
        Some(raw) if raw.trim() == "*" || raw.trim().is_empty() => CorsPolicy::Permissive,
        Some(raw) => CorsPolicy::AllowList(
            raw.split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_and_wildcard_are_permissive() {
        assert_eq!(cors_policy(None), CorsPolicy::Permissive);
        assert_eq!(cors_policy(Some("*")), CorsPolicy::Permissive);
        assert_eq!(cors_policy(Some("  ")), CorsPolicy::Permissive);
    }

    #[test]
    fn test_origin_list_becomes_allowlist() {
        let policy = cors_policy(Some("http://localhost:3000, https://app.example.com"));
        assert_eq!(
            policy,
            CorsPolicy::AllowList(vec![
                "http://localhost:3000".into(),
                "https://app.example.com".into()
            ])
        );
    }
}
