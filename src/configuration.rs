use std::env;
use std::env::current_dir;
use std::fmt::Display;
use std::time::Duration;

use config::Config;
use config::ConfigError;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::waitlist_client::WaitlistClient;

/// Global configuration, loaded from `configuration/*.yaml` (and `APP_*` env
/// vars). See `get_configuration`.
#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub waitlist_api: WaitlistApiSettings,
    pub modal: ModalSettings,
}

/// Server configuration
#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    /// Should be localhost on dev machine, 0.0.0.0 on prod
    pub host: String,

    /// 0 lets the OS pick a free port (tests do this)
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

/// Where the waitlist lives. We only ever talk to it, we don't own it.
#[derive(Deserialize, Clone, Debug)]
pub struct WaitlistApiSettings {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl WaitlistApiSettings {
    pub fn timeout(&self) -> Duration { Duration::from_millis(self.timeout_milliseconds) }

    pub fn client(&self) -> Result<WaitlistClient, reqwest::Error> {
        WaitlistClient::new(self.base_url.clone(), self.timeout())
    }
}

/// How long the modal's transient messages stay up.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ModalSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub success_dismiss_milliseconds: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub toast_dismiss_milliseconds: u64,
}

impl Default for ModalSettings {
    fn default() -> Self {
        Self {
            success_dismiss_milliseconds: 3000,
            toast_dismiss_milliseconds: 5000,
        }
    }
}

impl ModalSettings {
    pub fn success_dismiss(&self) -> Duration {
        Duration::from_millis(self.success_dismiss_milliseconds)
    }

    pub fn toast_dismiss(&self) -> Duration { Duration::from_millis(self.toast_dismiss_milliseconds) }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Display for Environment {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let env = match self {
            Environment::Local => "local",
            Environment::Production => "production",
        };
        write!(f, "{env}")
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            e => Err(format!(
                "{e} is not a supported environment; use either `local` or `production`"
            )),
        }
    }
}

/// Load yaml configuration files at `<project_root>/configuration`:
/// `base.yaml`, then `{APP_ENVIRONMENT}.yaml` (default: `local`), then env
/// vars.
///
/// All fields must be present in these files, otherwise initialisation will
/// fail immediately, and the server will not start.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let cfg_dir = current_dir()
        .map_err(|e| ConfigError::Message(format!("could not get current dir: {e}")))?
        .join("configuration");

    let env: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".to_string())
        .try_into()
        .map_err(ConfigError::Message)?;

    let settings = Config::builder()
        .add_source(config::File::from(cfg_dir.join("base.yaml")))
        .add_source(config::File::from(cfg_dir.join(format!("{env}.yaml"))))
        .add_source(
            // env vars are -always- parsed as String, hence `serde-aux` for the
            // numeric fields.
            //
            // `APP_WAITLIST_API__BASE_URL=http://..` -> `Settings.waitlist_api.base_url`
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
