//! 流程层（Workflow Layer）
//!
//! ## 职责
//!
//! 定义两条完整流程，不持有资源、不做编排：
//!
//! ### `inject_flow` - 页面注入流程
//! - 完成标记检查（幂等短路）
//! - 锚点优先级解析与片段拼接
//! - 锚点缺失警告收集
//!
//! ### `exam_gate` - 考试网关流程
//! - 反馈提交解锁期末考试
//! - 会话创建 / 判分 / 重考
//! - 通过时写入完成标志
//!
//! ### `course_ctx` - 课程上下文
//! - 文件名 / 课程标识 / 批次序号的封装

pub mod course_ctx;
pub mod exam_gate;
pub mod inject_flow;

pub use course_ctx::CourseCtx;
pub use exam_gate::ExamGate;
pub use inject_flow::{InjectFlow, InjectOutcome, InjectWarning, SCRIPT_MARKER, STRUCTURE_MARKER};
