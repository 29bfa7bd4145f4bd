//! 课程进度记录
//!
//! 原页面用散落的字符串键（`-feedback` / `-completed`）保存进度，
//! 这里收敛成一个显式的类型化记录，配合 `ProgressStore` 显式读写。

use serde::{Deserialize, Serialize};

/// 单个课程的进度标志
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgress {
    /// 已提交课程反馈（解锁期末考试的前置条件）
    pub feedback_submitted: bool,
    /// 已通过期末考试、课程完成
    pub completed: bool,
}

impl CourseProgress {
    /// 反馈已提交，期末考试可见
    pub fn exam_unlocked(&self) -> bool {
        self.feedback_submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_keys_are_camel_case() {
        let progress = CourseProgress {
            feedback_submitted: true,
            completed: false,
        };

        let json = serde_json::to_string(&progress).unwrap();
        assert_eq!(json, r#"{"feedbackSubmitted":true,"completed":false}"#);
    }

    #[test]
    fn test_default_is_all_unset() {
        let progress = CourseProgress::default();
        assert!(!progress.feedback_submitted);
        assert!(!progress.completed);
        assert!(!progress.exam_unlocked());
    }
}
