//! 通过 nx 获取受影响的应用列表

use crate::package_manager::{parse_affected_apps, NxRunner};
use anyhow::Result;

/// 构造 `nx affected:apps` 参数；base 为空时比较全部应用
pub fn affected_apps_args(base: &str) -> Vec<String> {
    let mut args = vec!["affected:apps".to_string(), "--plain".to_string()];
    if !base.is_empty() {
        args.push(format!("--base={}", base));
        args.push("--head=HEAD".to_string());
    } else {
        args.push("--all".to_string());
    }
    args
}

/// 运行 nx 并解析出受影响的应用名。命令执行失败时原样返回错误。
pub fn get_affected_apps(base: &str, nx: &impl NxRunner) -> Result<Vec<String>> {
    let output = nx.run(&affected_apps_args(base))?;
    log::debug!("CONTENT>>{}<<", output.join("\n"));
    Ok(parse_affected_apps(&output))
}
