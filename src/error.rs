//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 库层的 `SafeAreaError` 只描述图片流水线本身；命令行层额外会碰到
//! 文件 metadata 读取、JSON 报告序列化等失败，统一收敛到 `AppError`，
//! 并由它决定进程退出码。
//!
//! | 错误 | 退出码 |
//! |------|--------|
//! | `InvalidArgument` | 2 |
//! | `FileNotFound` | 3 |
//! | `Io` / 文件系统 | 4 |
//! | `ResourceLimit` | 5 |
//! | 报告序列化 | 1 |

use crate::safe_area::SafeAreaError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 留白流水线错误（校验 / 解码 / 写出）
    #[error("{0}")]
    SafeArea(#[from] SafeAreaError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 处理报告序列化失败
    #[error("序列化报告失败: {0}")]
    Report(#[from] serde_json::Error),
}

impl AppError {
    /// 进程退出码，成功以外一律非零。
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::SafeArea(SafeAreaError::InvalidArgument(_)) => 2,
            Self::SafeArea(SafeAreaError::FileNotFound(_)) => 3,
            Self::SafeArea(SafeAreaError::Io(_)) | Self::Io(_) => 4,
            Self::SafeArea(SafeAreaError::ResourceLimit(_)) => 5,
            Self::Report(_) => 1,
        }
    }
}
