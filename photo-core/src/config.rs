use crate::error::ConfigError;

pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Account credentials for the Cloudinary API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Process-wide Cloudinary settings, read once at startup.
///
/// Missing credentials are kept as `None` rather than failing startup, so
/// every request can report the misconfiguration on its own.
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub api_base: String,
}

impl CloudinaryConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    ///
    /// `CLOUDINARY_`-prefixed names win over the bare ones. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(&format!("CLOUDINARY_{name}"))
                .filter(|v| !v.is_empty())
                .or_else(|| lookup(name).filter(|v| !v.is_empty()))
        };

        Self {
            cloud_name: read("CLOUD_NAME"),
            api_key: read("API_KEY"),
            api_secret: read("API_SECRET"),
            api_base: read("API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        }
    }

    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        match (&self.cloud_name, &self.api_key, &self.api_secret) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Ok(Credentials {
                cloud_name: cloud_name.clone(),
                api_key: api_key.clone(),
                api_secret: api_secret.clone(),
            }),
            _ => {
                let missing = [
                    ("CLOUD_NAME", self.cloud_name.is_none()),
                    ("API_KEY", self.api_key.is_none()),
                    ("API_SECRET", self.api_secret.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();

                Err(ConfigError::MissingCredentials(missing))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn reads_bare_names() {
        let config = CloudinaryConfig::from_lookup(lookup(&[
            ("CLOUD_NAME", "demo"),
            ("API_KEY", "key"),
            ("API_SECRET", "secret"),
        ]));

        let credentials = config.credentials().unwrap();
        assert_eq!(credentials.cloud_name, "demo");
        assert_eq!(credentials.api_key, "key");
        assert_eq!(credentials.api_secret, "secret");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn prefixed_names_take_precedence() {
        let config = CloudinaryConfig::from_lookup(lookup(&[
            ("CLOUD_NAME", "bare"),
            ("CLOUDINARY_CLOUD_NAME", "prefixed"),
            ("CLOUDINARY_API_KEY", "key"),
            ("CLOUDINARY_API_SECRET", "secret"),
            ("CLOUDINARY_API_BASE", "http://localhost:9000"),
        ]));

        assert_eq!(config.cloud_name.as_deref(), Some("prefixed"));
        assert_eq!(config.api_base, "http://localhost:9000");
    }

    #[test]
    fn empty_values_count_as_missing() {
        let config = CloudinaryConfig::from_lookup(lookup(&[
            ("CLOUD_NAME", "demo"),
            ("API_KEY", ""),
            ("API_SECRET", "secret"),
        ]));

        match config.credentials() {
            Err(ConfigError::MissingCredentials(missing)) => assert_eq!(missing, vec!["API_KEY"]),
            other => panic!("expected missing credentials, got {other:?}"),
        }
    }

    #[test]
    fn debug_output_hides_secret() {
        let credentials = Credentials {
            cloud_name: "demo".into(),
            api_key: "key".into(),
            api_secret: "hunter2".into(),
        };

        assert!(!format!("{credentials:?}").contains("hunter2"));
    }
}
