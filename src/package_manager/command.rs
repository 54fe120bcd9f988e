//! 阻塞式命令执行：等待子进程结束后返回完整的 stdout

use anyhow::Result;
use std::path::Path;

/// 执行 `program args...` 并按行返回 stdout。
///
/// stderr 直接透传到当前进程，便于在 CI 日志中查看。程序无法启动或退出码非零时返回错误，
/// 错误原样向上传播。
pub fn run_captured(program: &str, args: &[String], dir: Option<&Path>) -> Result<Vec<String>> {
    let mut expr = duct::cmd(program, args).stdout_capture();
    if let Some(dir) = dir {
        expr = expr.dir(dir);
    }
    let output = expr.run()?;
    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|s| s.to_string())
        .collect())
}
