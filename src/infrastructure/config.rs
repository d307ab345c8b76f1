use crate::domain::chart::DEFAULT_PALETTE;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub datasets: DatasetSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen: String,
    /// Directory served at the root for the host page and raw datasets.
    #[serde(default)]
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    pub source: DatasetSource,
    /// Directory for `file` sources, base URL for `http` sources.
    pub root: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatasetSource {
    File,
    Http,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartsConfig {
    #[serde(default)]
    pub style: ChartStyle,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChartStyle {
    pub line_color: String,
    pub line_fill: String,
    pub bar_color: String,
    pub bar_border: String,
    pub palette: Vec<String>,
    /// Minimum fraction digits on the millions y-axis ("Rp N Jt") labels.
    pub tick_decimals: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_color: "#16a34a".to_string(),
            line_fill: "rgba(22, 163, 74, 0.1)".to_string(),
            bar_color: "rgba(37, 99, 235, 0.7)".to_string(),
            bar_border: "#2563eb".to_string(),
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            tick_decimals: 0,
        }
    }
}

pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_charts_config() -> anyhow::Result<ChartsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/charts").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_deserializes_dataset_source() {
        let raw = r#"
            [server]
            listen = "127.0.0.1:8080"

            [datasets]
            source = "http"
            root = "http://localhost:9000/data"
        "#;
        let cfg: ServerConfig = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.datasets.source, DatasetSource::Http);
        assert!(cfg.server.static_dir.is_none());
    }

    #[test]
    fn test_default_chart_style_has_a_full_palette() {
        let style = ChartStyle::default();
        assert_eq!(style.palette.len(), DEFAULT_PALETTE.len());
        assert_eq!(style.tick_decimals, 0);
    }
}
