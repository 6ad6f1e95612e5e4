//! Mandrill configuration

use clap::Parser;

/// Mandrill configuration, read from flags or the environment
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
pub struct MandrillConfig {
    /// The Mandrill API key
    #[arg(long, env = "MANDRILL_API_KEY")]
    pub api_key: String,

    /// Ask Mandrill to process sends in the background
    #[arg(
        id = "async",
        long = "async",
        env = "MANDRILL_ASYNC",
        default_value = "false",
        action = clap::ArgAction::Set
    )]
    pub async_send: bool,

    /// Subaccount used when a mail does not name one
    #[arg(long, env = "MANDRILL_SUBACCOUNT")]
    pub subaccount: Option<String>,
}

impl MandrillConfig {
    /// Creates a configuration for `api_key` with synchronous sends and no
    /// default subaccount
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            async_send: false,
            subaccount: None,
        }
    }

    /// Loads the configuration from the environment, after applying a `.env`
    /// file if one exists.
    pub fn from_env() -> Result<Self, clap::Error> {
        dotenvy::dotenv().ok();

        Self::try_parse_from(["mandrill"])
    }

    /// Sets the async flag
    pub fn with_async(mut self, async_send: bool) -> Self {
        self.async_send = async_send;
        self
    }

    /// Sets the default subaccount
    pub fn with_subaccount(mut self, subaccount: impl Into<String>) -> Self {
        self.subaccount = Some(subaccount.into());
        self
    }

    /// The API key clients are created with
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Whether sends are requested to be processed asynchronously
    pub fn async_send(&self) -> bool {
        self.async_send
    }

    /// The default subaccount
    pub fn subaccount(&self) -> Option<&str> {
        self.subaccount.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use std::{env, sync::Mutex};

    use testresult::TestResult;

    use super::*;

    const VARS: [&str; 3] = ["MANDRILL_API_KEY", "MANDRILL_ASYNC", "MANDRILL_SUBACCOUNT"];

    /// Serializes tests that read or write the process environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_new_config_defaults() {
        let config = MandrillConfig::new("1234567890");

        assert_eq!(config.api_key(), "1234567890");
        assert!(!config.async_send());
        assert_eq!(config.subaccount(), None);
    }

    #[test]
    fn test_builder_methods() {
        let config = MandrillConfig::new("1234567890")
            .with_async(true)
            .with_subaccount("marketing");

        assert!(config.async_send());
        assert_eq!(config.subaccount(), Some("marketing"));
    }

    #[test]
    fn test_parse_from_flags() -> TestResult {
        let config = MandrillConfig::try_parse_from([
            "mandrill",
            "--api-key",
            "abc",
            "--async",
            "true",
            "--subaccount",
            "transactional",
        ])?;

        assert_eq!(
            config,
            MandrillConfig::new("abc")
                .with_async(true)
                .with_subaccount("transactional")
        );

        Ok(())
    }

    #[test]
    fn test_async_defaults_to_false() -> TestResult {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let config = MandrillConfig::try_parse_from(["mandrill", "--api-key", "abc"])?;

        assert!(!config.async_send());
        assert_eq!(config.subaccount(), None);

        Ok(())
    }

    #[test]
    fn test_from_env() -> TestResult {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("MANDRILL_API_KEY", "envkey");
        env::set_var("MANDRILL_ASYNC", "true");
        env::set_var("MANDRILL_SUBACCOUNT", "billing");

        let config = MandrillConfig::from_env();
        clear_env();

        assert_eq!(
            config?,
            MandrillConfig::new("envkey")
                .with_async(true)
                .with_subaccount("billing")
        );

        Ok(())
    }
}
