//! # 应用图标裁剪工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs ── env_logger 初始化 + clap 参数 + 退出码        │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ Result<IconSet, AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  ┌─ cli ──────── 固定三步：主图标 / 前景 / 通知图标       │
//! │  │                                                       │
//! │  ├─ error ────── AppError (统一错误类型 + 退出码)          │
//! │  │                                                       │
//! │  ├─ storage ──── 输出目录 assets/images（自动创建）        │
//! │  │                                                       │
//! │  └─ icon_handler 加载·裁白边·补方·Lanczos3 缩放·PNG 编码  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，决定进程退出码 |
//! | [`cli`] | 参数解析与三步生成编排、控制台进度输出 |
//! | [`storage`] | 输出目录的创建与已生成文件信息 |
//! | [`icon_handler`] | 图标处理流水线（裁边、补方、缩放、编码） |

pub mod error;
pub mod cli;
pub mod icon_handler;
pub mod storage;
