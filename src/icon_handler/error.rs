//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图标流水线（加载 → 裁边 → 补方 → 缩放 → 编码）中的所有错误来源，
//! 避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。

/// 图标处理统一错误类型。
///
/// 该类型会在 CLI 层被上转为 `AppError`，最终决定进程退出码。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("文件不存在：{0}")]
    FileNotFound(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("配置错误：{0}")]
    InvalidConfig(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),
}

