//! 考试会话（领域层）
//!
//! 页面里嵌入的考试脚本是这个状态机的 JS 渲染（见 `services::exam_script`）；
//! 这里是同一套状态转换的本体实现，供校验和网关流程使用。

pub mod session;

pub use session::{ExamResult, ExamSession, SessionState, PASS_THRESHOLD_PERCENT};
