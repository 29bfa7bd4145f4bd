//! 课程上下文 - 流程层
//!
//! 封装单个课程文件处理过程中到处传递的标识信息

/// 课程上下文
#[derive(Debug, Clone)]
pub struct CourseCtx {
    /// 课程文件名
    pub file_name: String,
    /// 课程标识（文件名去掉后缀）
    pub course_id: String,
    /// 文件在本次批量中的序号（用于日志）
    pub course_index: usize,
}

impl CourseCtx {
    pub fn new(file_name: impl Into<String>, course_id: impl Into<String>, course_index: usize) -> Self {
        Self {
            file_name: file_name.into(),
            course_id: course_id.into(),
            course_index,
        }
    }

    /// 从文件名推导课程标识
    pub fn derive_course_id(file_name: &str, suffix: &str) -> String {
        file_name
            .strip_suffix(suffix)
            .unwrap_or(file_name)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_course_id_strips_suffix() {
        assert_eq!(
            CourseCtx::derive_course_id("balance-gait-001-progressive.html", "-progressive.html"),
            "balance-gait-001"
        );
    }

    #[test]
    fn test_derive_course_id_without_suffix_keeps_name() {
        assert_eq!(
            CourseCtx::derive_course_id("index.html", "-progressive.html"),
            "index.html"
        );
    }
}
