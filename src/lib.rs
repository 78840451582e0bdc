//! # 图标留白工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs   日志初始化 + 参数解析 + 退出码                  │
//! │     ↓                                                    │
//! │  cli ────── Cli → SafeAreaConfig，报告渲染                 │
//! │     ├─ freshness   输出是否已是最新                        │
//! │     ↓                                                    │
//! │  safe_area ─ 读取 → 解码 → 缩放 → 贴图 → 写出 PNG           │
//! │     ↓                                                    │
//! │  error ──── AppError（统一错误 + 退出码）                   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError` 与退出码映射 |
//! | [`cli`] | 命令行参数、运行入口、报告输出 |
//! | [`freshness`] | 源文件与输出文件的修改时间比较 |
//! | [`safe_area`] | 留白处理流水线 |

pub mod cli;
pub mod error;
pub mod freshness;
pub mod safe_area;
