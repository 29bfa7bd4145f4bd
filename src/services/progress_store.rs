//! 课程进度存储 - 业务能力层
//!
//! 只负责"读写进度记录"能力：一个 JSON 文件，course_id → CourseProgress。
//! 原页面把标志散落在浏览器 localStorage 里，这里收敛成显式的
//! load / save 接口，避免字符串键漂移。

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

use crate::models::CourseProgress;

/// 进度存储
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取全部进度记录，文件不存在时返回空表
    pub async fn load_all(&self) -> Result<HashMap<String, CourseProgress>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("无法读取进度文件: {}", self.path.display()))?;

        let records = serde_json::from_str(&content)
            .with_context(|| format!("无法解析进度文件: {}", self.path.display()))?;

        Ok(records)
    }

    /// 读取单个课程的进度，没有记录时返回默认值
    pub async fn load(&self, course_id: &str) -> Result<CourseProgress> {
        let records = self.load_all().await?;
        Ok(records.get(course_id).copied().unwrap_or_default())
    }

    /// 写入单个课程的进度
    pub async fn save(&self, course_id: &str, progress: CourseProgress) -> Result<()> {
        let mut records = self.load_all().await?;
        records.insert(course_id.to_string(), progress);
        self.write_all(&records).await
    }

    /// 标记反馈已提交
    pub async fn mark_feedback_submitted(&self, course_id: &str) -> Result<()> {
        let mut progress = self.load(course_id).await?;
        progress.feedback_submitted = true;
        self.save(course_id, progress).await
    }

    /// 标记课程完成
    pub async fn mark_completed(&self, course_id: &str) -> Result<()> {
        let mut progress = self.load(course_id).await?;
        progress.completed = true;
        self.save(course_id, progress).await
    }

    /// 清除单个课程的进度（管理面板的重置操作）
    pub async fn reset(&self, course_id: &str) -> Result<()> {
        let mut records = self.load_all().await?;
        records.remove(course_id);
        self.write_all(&records).await
    }

    async fn write_all(&self, records: &HashMap<String, CourseProgress>) -> Result<()> {
        let content = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, content)
            .await
            .with_context(|| format!("无法写入进度文件: {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> ProgressStore {
        let path = std::env::temp_dir().join(format!(
            "progress_store_test_{}_{}.json",
            tag,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        ProgressStore::with_path(path)
    }

    #[tokio::test]
    async fn test_load_missing_file_returns_default() {
        let store = temp_store("missing");
        let progress = store.load("balance-gait-001").await.unwrap();
        assert_eq!(progress, CourseProgress::default());
    }

    #[tokio::test]
    async fn test_mark_and_load_round_trip() {
        let store = temp_store("round_trip");

        store.mark_feedback_submitted("stroke-rehab-001").await.unwrap();
        let progress = store.load("stroke-rehab-001").await.unwrap();
        assert!(progress.feedback_submitted);
        assert!(!progress.completed);

        store.mark_completed("stroke-rehab-001").await.unwrap();
        let progress = store.load("stroke-rehab-001").await.unwrap();
        assert!(progress.feedback_submitted);
        assert!(progress.completed);

        // 其他课程不受影响
        let other = store.load("vestibular-001").await.unwrap();
        assert_eq!(other, CourseProgress::default());

        let _ = std::fs::remove_file(store.path());
    }

    #[tokio::test]
    async fn test_reset_clears_single_course() {
        let store = temp_store("reset");

        store.mark_completed("neuro-gait-001").await.unwrap();
        store.mark_completed("ortho-sports-001").await.unwrap();

        store.reset("neuro-gait-001").await.unwrap();

        assert!(!store.load("neuro-gait-001").await.unwrap().completed);
        assert!(store.load("ortho-sports-001").await.unwrap().completed);

        let _ = std::fs::remove_file(store.path());
    }
}
