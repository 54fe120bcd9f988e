//! 包管理器模块 — 对 npm / yarn / pnpm 运行 nx 的封装

pub mod command;
pub mod parser;
pub mod types;

pub use parser::parse_affected_apps;
pub use types::{CommandBuilder, CommandWrapper, NxRunner};

use crate::error::NxError;
use crate::manifest::assert_has_nx_script;
use anyhow::Result;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManagerKind {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManagerKind {
    /// 检测顺序，先匹配者优先
    pub const ALL: [PackageManagerKind; 3] = [
        PackageManagerKind::Npm,
        PackageManagerKind::Yarn,
        PackageManagerKind::Pnpm,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PackageManagerKind::Npm => "npm",
            PackageManagerKind::Yarn => "yarn",
            PackageManagerKind::Pnpm => "pnpm",
        }
    }

    pub fn lock_file(&self) -> &'static str {
        match self {
            PackageManagerKind::Npm => "package-lock.json",
            PackageManagerKind::Yarn => "yarn.lock",
            PackageManagerKind::Pnpm => "pnpm-lock.yaml",
        }
    }

    /// 在项目根目录下构造运行 nx 的命令
    pub fn nx_command(&self, root: &Path) -> Result<CommandWrapper> {
        let builder = CommandBuilder::new().with_command(self.name());
        let builder = match self {
            PackageManagerKind::Npm | PackageManagerKind::Pnpm => {
                builder.with_args(["run", "nx", "--"])
            }
            PackageManagerKind::Yarn => builder.with_args(["nx"]),
        };
        builder.with_dir(root).build()
    }

    /// 依次探测锁文件，返回第一个存在的。
    ///
    /// 任何 stat 错误（包括权限问题）都视为该包管理器不存在。
    pub fn detect(root: &Path) -> Option<PackageManagerKind> {
        Self::ALL.into_iter().find(|pm| {
            let found = fs::metadata(root.join(pm.lock_file())).is_ok();
            log::debug!("Probing {}: {}", pm.lock_file(), found);
            found
        })
    }
}

/// 检查 package.json 后定位包管理器，返回可运行 nx 的命令。
pub fn locate_nx(root: &Path, manifest: &Path) -> Result<CommandWrapper> {
    assert_has_nx_script(&root.join(manifest))?;

    let pm = PackageManagerKind::detect(root).ok_or(NxError::PackageManagerNotFound)?;
    log::info!("Using {} as package manager", pm.name());
    pm.nx_command(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{"name": "workspace", "scripts": {"nx": "nx"}}"#;

    fn project(lock_files: &[&str]) -> tempfile::TempDir {
        let td = tempfile::tempdir().unwrap();
        fs::write(td.path().join("package.json"), MANIFEST).unwrap();
        for lock in lock_files {
            fs::write(td.path().join(lock), "").unwrap();
        }
        td
    }

    #[test]
    fn test_npm_wins_when_all_present() {
        let td = project(&["package-lock.json", "yarn.lock", "pnpm-lock.yaml"]);
        let nx = locate_nx(td.path(), Path::new("package.json")).unwrap();
        assert_eq!(nx.to_string(), "npm run nx --");
    }

    #[test]
    fn test_yarn_before_pnpm() {
        let td = project(&["yarn.lock", "pnpm-lock.yaml"]);
        let nx = locate_nx(td.path(), Path::new("package.json")).unwrap();
        assert_eq!(nx.to_string(), "yarn nx");
    }

    #[test]
    fn test_pnpm_only() {
        let td = project(&["pnpm-lock.yaml"]);
        assert_eq!(
            PackageManagerKind::detect(td.path()),
            Some(PackageManagerKind::Pnpm)
        );
        let nx = locate_nx(td.path(), Path::new("package.json")).unwrap();
        assert_eq!(nx.program(), "pnpm");
        assert_eq!(nx.args(), ["run", "nx", "--"]);
    }

    #[test]
    fn test_no_lock_file() {
        let td = project(&[]);
        let err = locate_nx(td.path(), Path::new("package.json")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NxError>(),
            Some(NxError::PackageManagerNotFound)
        ));
        assert_eq!(
            err.to_string(),
            "Failed to detect your package manager, are you using npm or yarn?"
        );
    }

    #[test]
    fn test_lock_file_directory_counts_as_present() {
        let td = project(&[]);
        fs::create_dir(td.path().join("yarn.lock")).unwrap();
        assert_eq!(
            PackageManagerKind::detect(td.path()),
            Some(PackageManagerKind::Yarn)
        );
    }

    #[test]
    fn test_missing_script_fails_before_probing() {
        let td = tempfile::tempdir().unwrap();
        fs::write(td.path().join("package.json"), r#"{"scripts": {}}"#).unwrap();
        fs::write(td.path().join("package-lock.json"), "").unwrap();
        let err = locate_nx(td.path(), Path::new("package.json")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NxError>(),
            Some(NxError::MissingNxScript)
        ));
    }

    #[test]
    fn test_missing_manifest_fails_before_probing() {
        let td = tempfile::tempdir().unwrap();
        let err = locate_nx(td.path(), Path::new("package.json")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NxError>(),
            Some(NxError::ManifestLoad { .. })
        ));
    }

    #[test]
    fn test_custom_manifest_path() {
        let td = project(&["yarn.lock"]);
        fs::remove_file(td.path().join("package.json")).unwrap();
        fs::create_dir(td.path().join("web")).unwrap();
        fs::write(td.path().join("web/package.json"), MANIFEST).unwrap();
        let nx = locate_nx(td.path(), Path::new("web/package.json")).unwrap();
        assert_eq!(nx.program(), "yarn");
    }
}
