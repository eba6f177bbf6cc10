//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，命令行入口只处理这一种错误类型，
//! 并由它决定进程退出码。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `IconError` 提供 `From` 转换，无需手动 map。
//! - 用法错误退出码为 2（与 clap 一致），其余致命错误为 1。

use std::path::PathBuf;

use crate::icon_handler::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 命令行参数错误（缺少或多余的位置参数）
    #[error("{0}")]
    Usage(String),

    /// 输入图片路径不存在
    #[error("文件不存在: {}", .0.display())]
    InputNotFound(PathBuf),

    /// 图标处理流水线错误（加载 / 解码 / 缩放 / 编码）
    #[error("{0}")]
    Icon(#[from] IconError),

    /// 输出目录不可用
    #[error("输出目录不可用: {0}")]
    Storage(String),
}

impl AppError {
    /// 进程退出码：用法错误为 2，其余为 1。
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            _ => 1,
        }
    }
}
