//! package.json 读取与 nx 脚本检查

use crate::error::NxError;
use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// package.json 中我们关心的部分
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// 保留原始 JSON 值：scripts 不是对象、或脚本不是字符串时都视为未声明
    #[serde(default)]
    pub scripts: Option<serde_json::Value>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let manifest: Manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    /// 获取字符串类型的脚本
    pub fn script(&self, name: &str) -> Option<&str> {
        self.scripts.as_ref()?.get(name)?.as_str()
    }
}

/// 确认 package.json 声明了 `nx` 脚本。
///
/// 读取/解析失败统一报告为 [`NxError::ManifestLoad`]，缺少脚本报告为
/// [`NxError::MissingNxScript`]。
pub fn assert_has_nx_script(path: &Path) -> Result<()> {
    let manifest = Manifest::load(path).map_err(|source| NxError::ManifestLoad { source })?;

    log::info!("Found package.json file");

    if manifest.script("nx").is_none() {
        return Err(NxError::MissingNxScript.into());
    }

    log::info!("Found 'nx' script inside package.json file");

    Ok(())
}
