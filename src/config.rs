use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".nx-affected.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 每行一个应用名
    Lines,
    /// JSON 数组
    Json,
    /// 空格分隔的单行
    Space,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 相对项目根目录的 package.json 路径
    pub manifest: PathBuf,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("package.json"),
            output: OutputFormat::Lines,
        }
    }
}

impl Config {
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE);

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            log::debug!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn render(&self, apps: &[String]) -> Result<String> {
        Ok(match self.output {
            OutputFormat::Lines => apps.join("\n"),
            OutputFormat::Json => serde_json::to_string(apps)?,
            OutputFormat::Space => apps.join(" "),
        })
    }
}
