use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

/// How the PDF body is written to the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Whole document as a single body.
    Buffered,
    /// Chunked stream, optionally led by a UTF-8 BOM chunk.
    Streamed,
}

impl FromStr for ResponseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buffered" => Ok(Self::Buffered),
            "streamed" => Ok(Self::Streamed),
            other => Err(format!("expected `buffered` or `streamed`, got `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(format!("expected `json` or `pretty`, got `{other}`")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Directory of `<locale>.json` translation files.
    pub languages_dir: PathBuf,
    pub templates_dir: PathBuf,
    /// Template rendered by `GET /generate-pdf`.
    pub template: String,
    pub response_mode: ResponseMode,
    /// Only honoured in [`ResponseMode::Streamed`].
    pub bom: bool,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            bind: parse("POLYPDF_BIND", &get("POLYPDF_BIND", "0.0.0.0:8000"))?,
            languages_dir: PathBuf::from(get("POLYPDF_LANGUAGES_DIR", "languages")),
            templates_dir: PathBuf::from(get("POLYPDF_TEMPLATES_DIR", "templates")),
            template: get("POLYPDF_TEMPLATE", "pdf_template.html"),
            response_mode: parse(
                "POLYPDF_RESPONSE_MODE",
                &get("POLYPDF_RESPONSE_MODE", "streamed"),
            )?,
            bom: parse_bool("POLYPDF_BOM", &get("POLYPDF_BOM", "true"))?,
            log_format: parse("POLYPDF_LOG_FORMAT", &get("POLYPDF_LOG_FORMAT", "json"))?,
        })
    }
}

fn parse<T>(key: &str, value: &str) -> eyre::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| eyre::eyre!("invalid value for {key}: {e}"))
}

fn parse_bool(key: &str, value: &str) -> eyre::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(eyre::eyre!("invalid value for {key}: expected a boolean, got `{other}`")),
    }
}
