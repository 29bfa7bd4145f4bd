//! 文件存储 - 基础设施层
//!
//! 持有课程目录资源，只暴露"列举 / 读取 / 原子写入"能力

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

/// 文件存储
///
/// 职责：
/// - 持有课程目录路径
/// - 暴露文件级读写能力
/// - 不认识课程标识和页面结构
/// - 不处理业务流程
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// 创建新的文件存储
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 列举待处理的课程文件名（按文件名排序）
    ///
    /// # 参数
    /// - `suffix`: 文件名后缀过滤
    /// - `excluded`: 排除的文件名列表
    pub async fn list_course_files(
        &self,
        suffix: &str,
        excluded: &[String],
    ) -> Result<Vec<String>> {
        if !self.root.exists() {
            anyhow::bail!("课程目录不存在: {}", self.root.display());
        }

        let mut file_names = Vec::new();
        let mut entries = fs::read_dir(&self.root)
            .await
            .with_context(|| format!("无法读取课程目录: {}", self.root.display()))?;

        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name().to_string_lossy().to_string();
            if !file_name.ends_with(suffix) {
                continue;
            }
            if excluded.iter().any(|e| e == &file_name) {
                tracing::info!("⏭️ 跳过排除文件: {}", file_name);
                continue;
            }
            file_names.push(file_name);
        }

        file_names.sort();
        Ok(file_names)
    }

    /// 读取文件内容
    pub async fn read(&self, file_name: &str) -> Result<String> {
        let path = self.root.join(file_name);
        fs::read_to_string(&path)
            .await
            .with_context(|| format!("无法读取文件: {}", path.display()))
    }

    /// 原子写入：先写临时文件，再重命名覆盖
    ///
    /// 中途崩溃不会留下截断的页面
    pub async fn write_atomic(&self, file_name: &str, content: &str) -> Result<()> {
        let path = self.root.join(file_name);
        let tmp_path = self.root.join(format!("{}.tmp", file_name));

        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("无法写入临时文件: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &path)
            .await
            .with_context(|| format!("无法重命名 {} -> {}", tmp_path.display(), path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_root(tag: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("file_store_test_{}_{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&root).await;
        fs::create_dir_all(&root).await.unwrap();
        root
    }

    #[tokio::test]
    async fn test_list_filters_suffix_and_excluded() {
        let root = temp_root("list").await;
        for name in [
            "balance-gait-001-progressive.html",
            "pt-msk-001-progressive.html",
            "notes.txt",
        ] {
            fs::write(root.join(name), "x").await.unwrap();
        }

        let store = FileStore::new(&root);
        let files = store
            .list_course_files(
                "-progressive.html",
                &["pt-msk-001-progressive.html".to_string()],
            )
            .await
            .unwrap();

        assert_eq!(files, vec!["balance-gait-001-progressive.html"]);

        let _ = fs::remove_dir_all(&root).await;
    }

    #[tokio::test]
    async fn test_write_atomic_replaces_content_without_tmp_leftover() {
        let root = temp_root("atomic").await;
        let store = FileStore::new(&root);

        fs::write(root.join("a-progressive.html"), "old").await.unwrap();
        store.write_atomic("a-progressive.html", "new").await.unwrap();

        assert_eq!(store.read("a-progressive.html").await.unwrap(), "new");
        assert!(!root.join("a-progressive.html.tmp").exists());

        let _ = fs::remove_dir_all(&root).await;
    }
}
