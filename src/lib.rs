//! # Add Course Structure
//!
//! 一个用于向静态课程页面批量注入完整课程结构的 Rust 应用程序：
//! 管理面板、反馈表单、期末考试、结业证书，以及页面内嵌的考试脚本。
//!
//! ## 架构设计
//!
//! 本系统采用严格的分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有课程目录资源，只暴露能力
//! - `FileStore` - 唯一的文件 owner，提供列举 / 读取 / 原子写入能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个片段或记录
//! - `fragments` - HTML 片段渲染能力
//! - `exam_script` - 页面考试脚本渲染能力
//! - `WarnWriter` - 写 warn.txt 能力
//! - `ProgressStore` - 类型化课程进度读写能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义完整处理流程
//! - `CourseCtx` - 上下文封装（file_name + course_id + 序号）
//! - `InjectFlow` - 页面注入流程（标记检查 → 锚点解析 → 拼接）
//! - `ExamGate` - 考试网关流程（反馈 → 解锁 → 判分 → 完成）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量课程处理器，管理资源和统计
//! - `orchestrator/course_processor` - 单个文件处理器，调度注入流程
//!
//! ### 领域层（Exam）
//! - `exam/session` - 考试会话状态机（InProgress ⇄ Submitted）
//!   页面内嵌脚本是它的 JS 渲染，本体供网关流程和校验使用

pub mod config;
pub mod error;
pub mod exam;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, CatalogError};
pub use exam::{ExamResult, ExamSession, SessionState, PASS_THRESHOLD_PERCENT};
pub use infrastructure::FileStore;
pub use models::{CourseCatalog, CourseEntry, CourseProgress, ExamQuestion, ResolvedCourse};
pub use orchestrator::{App, BatchStats, FileOutcome};
pub use services::{ProgressStore, WarnWriter};
pub use workflow::{CourseCtx, ExamGate, InjectFlow, InjectOutcome, InjectWarning};
