use std::path::Path;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use crate::error::InspectError;

#[derive(Parser)]
#[command(name = "connect-inspect", about = "Просмотр моделей данных contact-center API")]
pub struct Cli {
    /// Путь к TOML конфиг файлу (необязателен)
    #[arg(long, global = true, env = "CONNECT_INSPECT_CONFIG")]
    pub config: Option<String>,

    /// Формат вывода; перекрывает `format` из конфига
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Список моделей или полей одной модели
    Shapes(ShapesArgs),
    /// Операции сервиса и их request/result модели
    Operations,
    /// Загрузить JSON в модель и показать рендер, hash и поля
    Show(ShowArgs),
}

#[derive(Args, Clone, Debug)]
pub struct ShapesArgs {
    /// Имя модели, напр. CreateQueueRequest
    pub shape: Option<String>,
}

#[derive(Args, Clone, Debug)]
pub struct ShowArgs {
    /// Имя модели, напр. CreateQueueRequest
    pub shape: String,

    /// JSON файл; `-` или без указания: stdin
    pub input: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// ---- TOML Config ----

#[derive(Debug, Deserialize)]
pub struct InspectConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Показывать hash code в `show`.
    #[serde(default = "default_true")]
    pub show_hash: bool,
    /// Показывать списки присутствующих/отсутствующих полей в `show`.
    #[serde(default = "default_true")]
    pub show_fields: bool,
}

fn default_true() -> bool {
    true
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_hash: default_true(),
            show_fields: default_true(),
        }
    }
}

impl InspectConfig {
    pub fn load(path: &str) -> Result<Self, InspectError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| InspectError::Config { context: "read", detail: format!("'{path}': {e}") })?;
        Self::parse(&content)
            .map_err(|e| InspectError::Config { context: "parse", detail: format!("'{path}': {e}") })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Итоговая конфигурация: config.toml < CLI.
    ///
    /// An explicitly given path that does not exist is an error; without a
    /// path the defaults apply.
    pub fn resolve(path: Option<&str>, format: Option<OutputFormat>) -> Result<Self, InspectError> {
        let mut config = match path {
            Some(path) if Path::new(path).exists() => Self::load(path)?,
            Some(path) => {
                return Err(InspectError::Config {
                    context: "read",
                    detail: format!("'{path}': no such file"),
                });
            }
            None => Self::default(),
        };
        if let Some(format) = format {
            config.format = format;
        }
        Ok(config)
    }
}
