//! # 图标处理模块（icon_handler）
//!
//! ## 设计思路
//!
//! 该模块将“加载校验 → 裁白边 → 补方 → 缩放 → 编码写盘”按职责拆分为多个子模块，
//! 避免单文件膨胀与耦合。
//!
//! - `handler`：编排整条处理流水线（完整链路 + 通知图标简化链路）
//! - `loader`：负责文件加载、签名与像素上限校验
//! - `trimmer`：负责白边检测与裁剪
//! - `square`：负责居中补齐为正方形透明画布
//! - `pipeline`：负责缩放与 PNG 编码
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 新同事快速上手
//!
//! ```text
//! cli.rs（固定三步生成）
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（存在性 + 体积 + 签名 + 像素限制 + 解码）
//!    ├─ trimmer.rs（白底合成 + 包围盒扫描 + 留白裁剪）
//!    ├─ square.rs（正方形画布 + 居中粘贴）
//!    └─ pipeline.rs（Lanczos3 缩放 + PNG 编码写盘）
//!    ↓
//! 返回 IconError，由 CLI 上转为 AppError
//! ```

mod config;
mod error;
mod handler;
mod loader;
mod pipeline;
mod source;
mod square;
mod trimmer;

pub use config::{
    APP_ICON_SIZE, DEFAULT_PADDING_RATIO, DEFAULT_TOLERANCE, IconConfig, IconTarget,
    NOTIFICATION_ICON_SIZE, RenderKind,
};
pub use error::IconError;
pub use handler::{IconHandler, RenderReport};
pub use source::{BoundingBox, LoadedImage, SquareCanvas, TrimOutcome};
