use anyhow::Result;
use config::{Config, ConfigBuilder, FileFormat, builder::DefaultState};
use serde::Deserialize;

use crate::constants::{FOLD_SPACE, FOLD_TAB};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub serializer: SerializerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SerializerConfig {
    /// Whether content lines longer than 75 octets are folded.
    pub fold: bool,
    pub fold_style: FoldStyle,
}

/// Continuation character inserted after the CRLF of a folded line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoldStyle {
    /// CRLF + SPACE
    #[default]
    Space,
    /// CRLF + TAB
    Tab,
}

impl FoldStyle {
    /// Returns the full fold sequence (line break plus continuation character).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Space => FOLD_SPACE,
            Self::Tab => FOLD_TAB,
        }
    }
}

impl Settings {
    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("serializer.fold", true)?
            .set_default("serializer.fold_style", "space")?)
    }

    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    /// Environment variables use the `CARDWIRE_` prefix and `__` between
    /// sections, e.g. `CARDWIRE_SERIALIZER__FOLD_STYLE=tab`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::defaults()?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env overrides file
            .add_source(
                config::Environment::with_prefix("CARDWIRE")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Builds settings from TOML text layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the text is not valid TOML or does not match `Settings`.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(Self::defaults()?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(settings = ?settings, "Configuration loaded");
    Ok(settings)
}
