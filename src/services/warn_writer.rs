//! 警告写入服务 - 业务能力层
//!
//! 只负责"写 warn.txt"能力，不关心流程

use std::fs::OpenOptions;
use std::io::Write;

use anyhow::Result;
use tracing::debug;

/// 警告写入服务
///
/// 职责：
/// - 将可报告的注入警告（锚点缺失、兜底命中）追加到 warn.txt
/// - 只处理单条警告
/// - 不关心流程顺序
pub struct WarnWriter {
    warn_file_path: String,
}

impl WarnWriter {
    /// 使用指定文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    /// 写入一条警告
    ///
    /// # 参数
    /// - `file_name`: 课程文件名
    /// - `course_id`: 课程标识
    /// - `reason`: 警告内容
    pub async fn write(&self, file_name: &str, course_id: &str, reason: &str) -> Result<()> {
        debug!("写入警告: {} | {} | {}", file_name, course_id, reason);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)?;

        let warn_msg = format!("文件 {} | 课程 {} | {}\n", file_name, course_id, reason);
        file.write_all(warn_msg.as_bytes())?;

        Ok(())
    }
}

impl Default for WarnWriter {
    fn default() -> Self {
        Self::with_path("warn.txt")
    }
}
