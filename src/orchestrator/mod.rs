//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量课程处理器
//! - 管理应用生命周期（初始化、运行）
//! - 扫描待处理文件（后缀过滤 + 排除列表）
//! - 严格顺序处理，失败隔离
//! - 输出全局统计信息
//!
//! ### `course_processor` - 单个课程文件处理器
//! - 推导课程标识并解析课程数据
//! - 委托 InjectFlow 执行文本变换
//! - 上报兜底命中和锚点缺失警告
//! - 原子写回修改后的页面
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<文件>)
//!     ↓
//! course_processor (处理单个文件)
//!     ↓
//! workflow::InjectFlow (处理单个页面文本)
//!     ↓
//! services (能力层：fragments / exam_script / warn_writer)
//!     ↓
//! infrastructure (基础设施：FileStore)
//! ```

pub mod batch_processor;
pub mod course_processor;

// 重新导出主要类型
pub use batch_processor::{App, BatchStats};
pub use course_processor::{process_course, FileOutcome};
