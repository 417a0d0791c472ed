//! Vectara account credentials.

use super::Settings;
use crate::error::{Result, TubeTalkError};

/// The three identifiers every Vectara call needs.
#[derive(Clone)]
pub struct Credentials {
    pub customer_id: String,
    pub corpus_id: String,
    pub api_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("customer_id", &self.customer_id)
            .field("corpus_id", &self.corpus_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct CredentialOverrides {
    pub customer_id: Option<String>,
    pub corpus_id: Option<String>,
    pub api_key: Option<String>,
}

impl Credentials {
    /// Resolve credentials, preferring overrides over the config file.
    ///
    /// Empty strings count as missing. The error names every missing variable.
    pub fn resolve(overrides: &CredentialOverrides, settings: &Settings) -> Result<Self> {
        let present = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let pick = |over: &Option<String>, file: &Option<String>| {
            present(over).or_else(|| present(file))
        };

        let customer_id = pick(&overrides.customer_id, &settings.vectara.customer_id);
        let corpus_id = pick(&overrides.corpus_id, &settings.vectara.corpus_id);
        let api_key = pick(&overrides.api_key, &settings.vectara.api_key);

        match (customer_id, corpus_id, api_key) {
            (Some(customer_id), Some(corpus_id), Some(api_key)) => Ok(Self {
                customer_id,
                corpus_id,
                api_key,
            }),
            (customer_id, corpus_id, api_key) => {
                let missing: Vec<&str> = [
                    ("CUSTOMER_ID", customer_id.is_none()),
                    ("CORPUS_ID", corpus_id.is_none()),
                    ("API_KEY", api_key.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();

                Err(TubeTalkError::ConfigurationMissing(missing.join(", ")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(customer: Option<&str>, corpus: Option<&str>, key: Option<&str>) -> CredentialOverrides {
        CredentialOverrides {
            customer_id: customer.map(String::from),
            corpus_id: corpus.map(String::from),
            api_key: key.map(String::from),
        }
    }

    #[test]
    fn test_resolve_from_overrides() {
        let creds = Credentials::resolve(
            &overrides(Some("123"), Some("4"), Some("zqt_key")),
            &Settings::default(),
        )
        .unwrap();

        assert_eq!(creds.customer_id, "123");
        assert_eq!(creds.corpus_id, "4");
        assert_eq!(creds.api_key, "zqt_key");
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut settings = Settings::default();
        settings.vectara.customer_id = Some("file-customer".into());
        settings.vectara.corpus_id = Some("file-corpus".into());
        settings.vectara.api_key = Some("file-key".into());

        let creds = Credentials::resolve(&overrides(None, Some("9"), None), &settings).unwrap();
        assert_eq!(creds.customer_id, "file-customer");
        assert_eq!(creds.corpus_id, "9");
        assert_eq!(creds.api_key, "file-key");
    }

    #[test]
    fn test_blank_override_falls_back_to_file() {
        let mut settings = Settings::default();
        settings.vectara.customer_id = Some("file-customer".into());
        settings.vectara.corpus_id = Some("file-corpus".into());
        settings.vectara.api_key = Some("file-key".into());

        let creds = Credentials::resolve(&overrides(Some(""), None, Some(" ")), &settings).unwrap();
        assert_eq!(creds.customer_id, "file-customer");
        assert_eq!(creds.api_key, "file-key");
    }

    #[test]
    fn test_missing_values_are_all_named() {
        let err = Credentials::resolve(&overrides(Some("1"), None, Some("  ")), &Settings::default())
            .unwrap_err();

        match err {
            TubeTalkError::ConfigurationMissing(names) => assert_eq!(names, "CORPUS_ID, API_KEY"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_debug_redacts_key() {
        let creds = Credentials::resolve(
            &overrides(Some("1"), Some("2"), Some("secret")),
            &Settings::default(),
        )
        .unwrap();
        assert!(!format!("{:?}", creds).contains("secret"));
    }
}
