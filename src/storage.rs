//! 输出目录管理模块
//!
//! # 设计思路
//!
//! 统一管理图标文件的输出路径，并在目录不存在时自动创建。
//!
//! # 实现思路
//!
//! - 默认输出到工作目录下的 `assets/images`。
//! - 目录不存在时自动 `create_dir_all`，已存在时幂等返回。
//! - 路径被普通文件占用时返回 `AppError::Storage`，不使用 `expect()` / `unwrap()`。

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::icon_handler::IconTarget;

/// 固定的相对输出目录。
pub const OUTPUT_DIR: &str = "assets/images";

/// 已生成文件信息（路径 + 大小）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFileInfo {
    pub path: PathBuf,
    pub size: u64,
}

/// 确保输出目录存在
///
/// # 返回
/// - `Ok(PathBuf)` — 可用的输出目录
/// - `Err(AppError::Storage)` — 路径被文件占用或无法创建
pub fn ensure_output_dir(dir: &Path) -> Result<PathBuf, AppError> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(AppError::Storage(format!(
                "'{}' 已存在且不是目录",
                dir.display()
            )));
        }
        return Ok(dir.to_path_buf());
    }

    fs::create_dir_all(dir).map_err(|e| {
        AppError::Storage(format!("创建输出目录 '{}' 失败: {}", dir.display(), e))
    })?;
    log::info!("📁 已创建输出目录: {}", dir.display());
    Ok(dir.to_path_buf())
}

/// 收集目标文件的大小信息，不存在的文件跳过。
pub fn collect_output_info(dir: &Path, targets: &[IconTarget]) -> Vec<OutputFileInfo> {
    targets
        .iter()
        .map(|target| dir.join(target.file_name))
        .filter_map(|path| {
            let metadata = fs::metadata(&path).ok()?;
            metadata.is_file().then(|| OutputFileInfo {
                size: metadata.len(),
                path,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    fn unique_temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("app-icon-storage-test-{nanos}"));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn ensure_output_dir_creates_nested_and_is_idempotent() {
        let root = unique_temp_dir();
        let nested = root.join("assets").join("images");

        let first = ensure_output_dir(&nested).expect("create nested");
        let second = ensure_output_dir(&nested).expect("second call");

        assert!(nested.is_dir());
        assert_eq!(first, second);
        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn ensure_output_dir_rejects_file_path() {
        let root = unique_temp_dir();
        let file = root.join("images");
        std::fs::write(&file, b"x").expect("write file");

        assert!(matches!(ensure_output_dir(&file), Err(AppError::Storage(_))));
        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn collect_output_info_skips_missing_files() {
        let root = unique_temp_dir();
        std::fs::write(root.join(IconTarget::APP_ICON.file_name), vec![1_u8; 17])
            .expect("write file");

        let info = collect_output_info(&root, &IconTarget::ALL);

        assert_eq!(info.len(), 1);
        assert_eq!(info[0].size, 17);
        assert!(info[0].path.ends_with("app_icon.png"));
        let _ = std::fs::remove_dir_all(root);
    }
}
