use listkit_shared::DEFAULT_PREFIX_CLS;
use std::env;
use std::path::PathBuf;

use crate::error::PreviewError;

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub prefix_cls: String,
    pub strict_grid: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, PreviewError> {
        Ok(Self {
            input: env::var("LISTKIT_INPUT")
                .map(PathBuf::from)
                .map_err(|_| PreviewError::MissingVar("LISTKIT_INPUT"))?,
            output: env::var("LISTKIT_OUTPUT").ok().map(PathBuf::from),
            prefix_cls: env::var("LISTKIT_PREFIX_CLS")
                .unwrap_or_else(|_| DEFAULT_PREFIX_CLS.to_string()),
            strict_grid: match env::var("LISTKIT_STRICT_GRID") {
                Ok(value) => parse_bool("LISTKIT_STRICT_GRID", &value)?,
                Err(_) => false,
            },
        })
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, PreviewError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(PreviewError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}
