//! 考试网关 - 流程层
//!
//! 核心职责：定义"一个学员在一个课程里"的反馈 → 考试 → 完成流程
//!
//! 流程顺序：
//! 1. submit_feedback → 进度记录标记反馈已提交，期末考试解锁
//! 2. start_exam → 创建考试会话（未解锁时拒绝）
//! 3. submit_exam → 判分；通过时标记课程完成（证书解锁）
//! 4. retake → 未通过时清空作答重考

use anyhow::Result;
use tracing::info;

use crate::exam::{ExamResult, ExamSession};
use crate::models::{CourseProgress, ExamQuestion};
use crate::services::ProgressStore;

/// 考试网关
///
/// - 持有进度存储和课程标识
/// - 不认识页面和注入流程
/// - 状态机本体在 `exam::ExamSession`，这里只做门控和进度记录
pub struct ExamGate {
    store: ProgressStore,
    course_id: String,
}

impl ExamGate {
    pub fn new(store: ProgressStore, course_id: impl Into<String>) -> Self {
        Self {
            store,
            course_id: course_id.into(),
        }
    }

    /// 当前课程的进度记录
    pub async fn progress(&self) -> Result<CourseProgress> {
        self.store.load(&self.course_id).await
    }

    /// 提交课程反馈，解锁期末考试
    pub async fn submit_feedback(&self) -> Result<()> {
        self.store.mark_feedback_submitted(&self.course_id).await?;
        info!("[{}] ✓ 反馈已提交，期末考试解锁", self.course_id);
        Ok(())
    }

    /// 期末考试是否已解锁
    pub async fn exam_unlocked(&self) -> Result<bool> {
        Ok(self.progress().await?.exam_unlocked())
    }

    /// 创建考试会话，要求反馈已提交
    pub async fn start_exam(&self, questions: Vec<ExamQuestion>) -> Result<ExamSession> {
        if !self.exam_unlocked().await? {
            anyhow::bail!("课程 {} 的反馈尚未提交，期末考试未解锁", self.course_id);
        }
        Ok(ExamSession::new(questions))
    }

    /// 提交考试并记录结果
    ///
    /// 通过时标记课程完成；已提交的会话重复调用返回 None
    pub async fn submit_exam(&self, session: &mut ExamSession) -> Result<Option<ExamResult>> {
        let Some(result) = session.submit() else {
            return Ok(None);
        };

        if result.passed {
            self.store.mark_completed(&self.course_id).await?;
            info!(
                "[{}] ✅ 考试通过: {}/{} ({}%)，课程完成",
                self.course_id, result.correct_count, result.total, result.percentage
            );
        } else {
            info!(
                "[{}] ❌ 考试未通过: {}/{} ({}%)",
                self.course_id, result.correct_count, result.total, result.percentage
            );
        }

        Ok(Some(result))
    }

    /// 重考：清空作答回到作答状态，不触碰进度记录
    pub fn retake(&self, session: &mut ExamSession) {
        session.retake();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_gate(tag: &str) -> ExamGate {
        let path = std::env::temp_dir().join(format!(
            "exam_gate_test_{}_{}.json",
            tag,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        ExamGate::new(ProgressStore::with_path(path), "balance-gait-001")
    }

    fn two_questions() -> Vec<ExamQuestion> {
        vec![
            ExamQuestion {
                prompt: "Q1".to_string(),
                options: vec!["A".to_string(), "B".to_string()],
                correct: 0,
            },
            ExamQuestion {
                prompt: "Q2".to_string(),
                options: vec!["A".to_string(), "B".to_string()],
                correct: 1,
            },
        ]
    }

    #[tokio::test]
    async fn test_exam_locked_before_feedback() {
        let gate = temp_gate("locked");
        assert!(!gate.exam_unlocked().await.unwrap());
        assert!(gate.start_exam(two_questions()).await.is_err());
    }

    #[tokio::test]
    async fn test_feedback_then_fail_then_retake_then_pass() {
        let gate = temp_gate("full_flow");

        gate.submit_feedback().await.unwrap();
        assert!(gate.exam_unlocked().await.unwrap());

        let mut session = gate.start_exam(two_questions()).await.unwrap();

        // 第一次：全错，未通过，课程未完成
        session.select_answer(0, 1);
        session.select_answer(1, 0);
        let result = gate.submit_exam(&mut session).await.unwrap().unwrap();
        assert!(!result.passed);
        assert!(!gate.progress().await.unwrap().completed);

        // 重复提交无效
        assert!(gate.submit_exam(&mut session).await.unwrap().is_none());

        // 重考：全对，通过，课程完成
        gate.retake(&mut session);
        session.select_answer(0, 0);
        session.select_answer(1, 1);
        let result = gate.submit_exam(&mut session).await.unwrap().unwrap();
        assert!(result.passed);
        assert_eq!(result.percentage, 100);
        assert!(gate.progress().await.unwrap().completed);

        let _ = std::fs::remove_file(gate.store.path());
    }
}
