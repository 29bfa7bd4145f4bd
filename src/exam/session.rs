//! 期末考试会话状态机
//!
//! 状态：`InProgress` ⇄ `Submitted`
//!
//! - `submit()` 是 `InProgress` → `Submitted` 的唯一入口
//! - `retake()` 是 `Submitted` → `InProgress` 的唯一入口，清空全部作答
//! - 越界输入一律静默忽略（no-op）——这是展示层逻辑，没有外部后果，
//!   整个状态机统一采用这一策略

use crate::models::ExamQuestion;

/// 及格线（百分比）
pub const PASS_THRESHOLD_PERCENT: u32 = 70;

/// 判分结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamResult {
    pub correct_count: usize,
    pub total: usize,
    pub percentage: u32,
    pub passed: bool,
}

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// 作答中
    InProgress,
    /// 已提交
    Submitted(ExamResult),
}

/// 考试会话
///
/// 题目列表在创建时固定；答案映射每题一个槽位（可能未作答）；
/// 任意时刻恰好有一道"当前题目"
#[derive(Debug, Clone)]
pub struct ExamSession {
    questions: Vec<ExamQuestion>,
    answers: Vec<Option<usize>>,
    cursor: usize,
    state: SessionState,
}

impl ExamSession {
    /// 创建新会话：光标在第 0 题，所有答案未设置
    pub fn new(questions: Vec<ExamQuestion>) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            questions,
            answers,
            cursor: 0,
            state: SessionState::InProgress,
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[ExamQuestion] {
        &self.questions
    }

    /// 当前题目索引
    pub fn current_question(&self) -> usize {
        self.cursor
    }

    /// 指定题目的已选选项
    pub fn answer(&self, question_index: usize) -> Option<usize> {
        self.answers.get(question_index).copied().flatten()
    }

    /// 已作答题目数量
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.state, SessionState::Submitted(_))
    }

    /// 判分结果，未提交时为 None
    pub fn result(&self) -> Option<ExamResult> {
        match self.state {
            SessionState::Submitted(result) => Some(result),
            SessionState::InProgress => None,
        }
    }

    /// 记录作答，覆盖该题之前的选择
    ///
    /// 仅在 `InProgress` 有效；题目或选项索引越界时不做任何事
    pub fn select_answer(&mut self, question_index: usize, option_index: usize) {
        if self.is_submitted() {
            return;
        }
        let Some(question) = self.questions.get(question_index) else {
            return;
        };
        if option_index >= question.options.len() {
            return;
        }
        self.answers[question_index] = Some(option_index);
    }

    /// 移动光标到指定题目
    ///
    /// 仅在 `InProgress` 有效；越界时不移动；不改变任何作答
    pub fn go_to(&mut self, index: usize) {
        if self.is_submitted() || index >= self.questions.len() {
            return;
        }
        self.cursor = index;
    }

    /// 提交并判分
    ///
    /// 未作答按错误计；允许带着未作答题目提交（保留源站策略）。
    /// 已提交状态下重复调用返回 None
    pub fn submit(&mut self) -> Option<ExamResult> {
        if self.is_submitted() {
            return None;
        }

        let result = self.grade();
        self.state = SessionState::Submitted(result);
        Some(result)
    }

    /// 重考：清空全部作答，光标回到第 0 题
    ///
    /// 仅在 `Submitted` 有效
    pub fn retake(&mut self) {
        if !self.is_submitted() {
            return;
        }
        self.answers = vec![None; self.questions.len()];
        self.cursor = 0;
        self.state = SessionState::InProgress;
    }

    /// 判分：correct == 记录的答案等于正确选项索引的题目数
    fn grade(&self) -> ExamResult {
        let total = self.questions.len();
        let correct_count = self
            .questions
            .iter()
            .zip(self.answers.iter())
            .filter(|(question, answer)| **answer == Some(question.correct))
            .count();

        let percentage = if total == 0 {
            0
        } else {
            ((correct_count * 100) as f64 / total as f64).round() as u32
        };

        ExamResult {
            correct_count,
            total,
            percentage,
            passed: percentage >= PASS_THRESHOLD_PERCENT,
        }
    }
}
