//! 命令封装相关类型定义

use super::command::run_captured;
use anyhow::{anyhow, Result};
use std::fmt;
use std::path::PathBuf;

/// 可执行 nx 的对象：追加参数后运行，返回按行拆分的 stdout
pub trait NxRunner {
    fn run(&self, args: &[String]) -> Result<Vec<String>>;
}

/// 绑定了程序名和固定前缀参数的命令，构造后不可修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandWrapper {
    program: String,
    args: Vec<String>,
    dir: Option<PathBuf>,
}

impl CommandWrapper {
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// 固定参数 + 追加参数
    pub fn full_args(&self, extra: &[String]) -> Vec<String> {
        let mut args = self.args.clone();
        args.extend(extra.iter().cloned());
        args
    }
}

impl NxRunner for CommandWrapper {
    fn run(&self, args: &[String]) -> Result<Vec<String>> {
        let args = self.full_args(args);
        log::debug!("Running {} {}", self.program, args.join(" "));
        run_captured(&self.program, &args, self.dir.as_deref())
    }
}

impl fmt::Display for CommandWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())?;
        for arg in self.args() {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommandBuilder {
    program: Option<String>,
    args: Vec<String>,
    dir: Option<PathBuf>,
}

impl CommandBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_command(mut self, program: &str) -> Self {
        self.program = Some(program.to_string());
        self
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn build(self) -> Result<CommandWrapper> {
        let program = self
            .program
            .ok_or_else(|| anyhow!("no command given to CommandBuilder"))?;
        Ok(CommandWrapper {
            program,
            args: self.args,
            dir: self.dir,
        })
    }
}
