//! 错误类型定义

use thiserror::Error;

/// 定位 nx 过程中可能出现的错误。
///
/// 子进程执行失败不在此列，直接以原始错误向上传播。
#[derive(Debug, Error)]
pub enum NxError {
    /// package.json 读取或解析失败；原始错误保留为 source，消息保持通用
    #[error("Failed to load the 'package.json' file, did you setup your project correctly?")]
    ManifestLoad {
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to locate the 'nx' script in package.json, did you setup your project with Nx's CLI?")]
    MissingNxScript,

    // 消息只提到 npm / yarn，但 pnpm 同样受支持（兼容旧消息文本）
    #[error("Failed to detect your package manager, are you using npm or yarn?")]
    PackageManagerNotFound,
}
