//! 应用程序错误类型
//!
//! 错误分类原则：
//! - 课程目录（catalog）相关的业务错误在启动阶段就应该暴露
//! - 单个文件的处理失败只记录日志和统计，不中断批量流程
//! - 锚点缺失不是错误，是可报告的警告（见 `workflow::InjectWarning`）

use thiserror::Error;

/// 应用程序错误
#[derive(Debug, Error)]
pub enum AppError {
    /// 课程目录错误
    #[error("课程目录错误: {0}")]
    Catalog(#[from] CatalogError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] std::io::Error),
    /// TOML 解析失败
    #[error("TOML解析失败: {0}")]
    TomlParse(#[from] toml::de::Error),
    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    Json(#[from] serde_json::Error),
}

/// 课程目录错误
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 未知课程标识（仅严格查询模式下报告，默认走兜底条目）
    #[error("未知课程标识: {course_id}")]
    UnknownCourse { course_id: String },
    /// 题目数据无效
    #[error("课程 {course_id} 第 {index} 题无效: {reason}")]
    InvalidQuestion {
        course_id: String,
        index: usize,
        reason: String,
    },
    /// 课程目录为空
    #[error("课程目录为空")]
    Empty,
    /// 兜底条目缺失或不可用
    #[error("兜底课程 {course_id} 不可用: {reason}")]
    BadFallback { course_id: String, reason: String },
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
