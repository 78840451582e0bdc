//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 单一错误枚举承载留白流水线的全部失败来源，调用侧可按分支匹配，
//! 命令行入口再据此映射退出码。
//!
//! - `FileNotFound`：源文件不存在
//! - `InvalidArgument`：画布尺寸 / 缩放比例等参数非法
//! - `Io`：解码、编码、写盘失败
//! - `ResourceLimit`：超出显式设置的体积、像素或画布上限，或画布大到无法寻址

/// 留白处理统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum SafeAreaError {
    #[error("文件不存在：{0}")]
    FileNotFound(String),

    #[error("参数错误：{0}")]
    InvalidArgument(String),

    #[error("读写错误：{0}")]
    Io(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),
}

