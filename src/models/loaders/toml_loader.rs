use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

use crate::models::course::CourseCatalog;

/// 从 TOML 文件加载课程目录
///
/// 只负责读取和解析，校验由调用方（启动阶段）执行
pub async fn load_catalog(catalog_path: &str) -> Result<CourseCatalog> {
    let path = Path::new(catalog_path);

    if !path.exists() {
        anyhow::bail!("课程目录文件不存在: {}", catalog_path);
    }

    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取课程目录文件: {}", catalog_path))?;

    let catalog: CourseCatalog = toml::from_str(&content)
        .with_context(|| format!("无法解析课程目录文件: {}", catalog_path))?;

    tracing::info!(
        "✓ 课程目录加载完成: {} 个课程, 兜底条目: {}",
        catalog.len(),
        catalog.fallback
    );

    Ok(catalog)
}
