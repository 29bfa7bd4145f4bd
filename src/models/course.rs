//! 课程目录数据模型
//!
//! 课程目录是整个注入流程唯一的"配置"，由调用方以 TOML 形式整体提供，
//! 不存在任何进程级全局表。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// 期末考试题目
///
/// 加载后不可变：题干、有序选项列表（至少 2 个）、正确选项索引
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExamQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
}

/// 单个课程条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseEntry {
    pub title: String,
    /// 学时数，TOML 中既可能写成字符串也可能写成浮点数
    #[serde(deserialize_with = "deserialize_hours")]
    pub hours: String,
    pub modules: u32,
    /// 期末考试题目，允许为空（此时使用兜底条目的题目）
    #[serde(default)]
    pub questions: Vec<ExamQuestion>,
}

/// 课程目录
///
/// course_id → 课程条目的静态映射，外加一个指定的兜底条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseCatalog {
    /// 兜底课程标识：未知 course_id 解析到这个条目
    pub fallback: String,
    pub courses: HashMap<String, CourseEntry>,
}

/// 解析后的课程数据（已完成兜底处理）
#[derive(Debug, Clone)]
pub struct ResolvedCourse {
    /// 调用方请求的课程标识（不是兜底条目的标识）
    pub course_id: String,
    pub title: String,
    pub hours: String,
    pub modules: u32,
    pub questions: Vec<ExamQuestion>,
    /// 整个条目走了兜底
    pub entry_fallback: bool,
    /// 仅题目列表走了兜底
    pub questions_fallback: bool,
}

impl CourseCatalog {
    /// 校验课程目录
    ///
    /// 启动阶段调用一次，目录有问题时在触碰任何文件之前就失败：
    /// - 目录非空
    /// - 兜底条目存在且题目列表非空
    /// - 每道题至少 2 个选项，正确索引在范围内
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.courses.is_empty() {
            return Err(CatalogError::Empty);
        }

        let fallback = self
            .courses
            .get(&self.fallback)
            .ok_or_else(|| CatalogError::BadFallback {
                course_id: self.fallback.clone(),
                reason: "条目不存在".to_string(),
            })?;

        if fallback.questions.is_empty() {
            return Err(CatalogError::BadFallback {
                course_id: self.fallback.clone(),
                reason: "题目列表为空".to_string(),
            });
        }

        for (course_id, entry) in &self.courses {
            for (index, question) in entry.questions.iter().enumerate() {
                if question.options.len() < 2 {
                    return Err(CatalogError::InvalidQuestion {
                        course_id: course_id.clone(),
                        index: index + 1,
                        reason: format!("选项数量不足: {}", question.options.len()),
                    });
                }
                if question.correct >= question.options.len() {
                    return Err(CatalogError::InvalidQuestion {
                        course_id: course_id.clone(),
                        index: index + 1,
                        reason: format!(
                            "正确选项索引 {} 超出范围 [0, {})",
                            question.correct,
                            question.options.len()
                        ),
                    });
                }
            }
        }

        Ok(())
    }

    /// 解析课程标识，未知标识解析到兜底条目
    ///
    /// 兜底是刻意保留的源行为，调用方负责把 `entry_fallback` /
    /// `questions_fallback` 作为警告上报，避免内容被错误标注而无人发现
    pub fn resolve(&self, course_id: &str) -> ResolvedCourse {
        let (entry, entry_fallback) = match self.courses.get(course_id) {
            Some(entry) => (entry, false),
            // validate() 保证兜底条目存在
            None => (&self.courses[&self.fallback], true),
        };

        let (questions, questions_fallback) = if entry.questions.is_empty() {
            (self.courses[&self.fallback].questions.clone(), true)
        } else {
            (entry.questions.clone(), false)
        };

        ResolvedCourse {
            course_id: course_id.to_string(),
            title: entry.title.clone(),
            hours: entry.hours.clone(),
            modules: entry.modules,
            questions,
            entry_fallback,
            questions_fallback,
        }
    }

    /// 严格查询：未知标识返回错误而不是兜底条目
    pub fn get_strict(&self, course_id: &str) -> Result<&CourseEntry, CatalogError> {
        self.courses
            .get(course_id)
            .ok_or_else(|| CatalogError::UnknownCourse {
                course_id: course_id.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// 学时字段反序列化：同时接受字符串和数字写法，统一成字符串
fn deserialize_hours<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct HoursVisitor;

    impl<'de> Visitor<'de> for HoursVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or number representing contact hours")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(format!("{:.1}", value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(format!("{}.0", value))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(format!("{}.0", value))
        }
    }

    deserializer.deserialize_any(HoursVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> CourseCatalog {
        let toml_text = r#"
            fallback = "balance-gait-001"

            [courses.balance-gait-001]
            title = "Balance, Gait, and Vestibular Management"
            hours = "3.0"
            modules = 12

            [[courses.balance-gait-001.questions]]
            prompt = "Which canal is most commonly affected in BPPV?"
            options = ["Anterior", "Posterior", "Horizontal", "All equally"]
            correct = 1

            [[courses.balance-gait-001.questions]]
            prompt = "The Epley maneuver treats:"
            options = ["Vestibular neuritis", "Meniere's disease", "Posterior canal BPPV", "Labyrinthitis"]
            correct = 2

            [courses.wound-care-001]
            title = "Wound Care for Physical Therapists"
            hours = 1.5
            modules = 8
        "#;
        toml::from_str(toml_text).expect("示例目录应该能解析")
    }

    #[test]
    fn test_hours_accepts_string_or_float() {
        let catalog = sample_catalog();
        assert_eq!(catalog.courses["balance-gait-001"].hours, "3.0");
        // 浮点写法归一化成字符串
        assert_eq!(catalog.courses["wound-care-001"].hours, "1.5");
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample_catalog().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_correct() {
        let mut catalog = sample_catalog();
        catalog
            .courses
            .get_mut("balance-gait-001")
            .unwrap()
            .questions[0]
            .correct = 4;

        match catalog.validate() {
            Err(CatalogError::InvalidQuestion { course_id, index, .. }) => {
                assert_eq!(course_id, "balance-gait-001");
                assert_eq!(index, 1);
            }
            other => panic!("应该报告题目无效，实际: {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_missing_fallback() {
        let mut catalog = sample_catalog();
        catalog.fallback = "no-such-course".to_string();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::BadFallback { .. })
        ));
    }

    #[test]
    fn test_resolve_known_course() {
        let catalog = sample_catalog();
        let resolved = catalog.resolve("balance-gait-001");

        assert_eq!(resolved.title, "Balance, Gait, and Vestibular Management");
        assert_eq!(resolved.questions.len(), 2);
        assert!(!resolved.entry_fallback);
        assert!(!resolved.questions_fallback);
    }

    #[test]
    fn test_resolve_unknown_course_uses_fallback_entry() {
        let catalog = sample_catalog();
        let resolved = catalog.resolve("mystery-course-001");

        // 兜底条目的标题和题目，但保留请求的标识
        assert_eq!(resolved.course_id, "mystery-course-001");
        assert_eq!(resolved.title, "Balance, Gait, and Vestibular Management");
        assert_eq!(resolved.questions.len(), 2);
        assert!(resolved.entry_fallback);
    }

    #[test]
    fn test_resolve_entry_without_questions_borrows_fallback_set() {
        let catalog = sample_catalog();
        let resolved = catalog.resolve("wound-care-001");

        assert_eq!(resolved.title, "Wound Care for Physical Therapists");
        assert!(!resolved.entry_fallback);
        assert!(resolved.questions_fallback);
        assert_eq!(resolved.questions.len(), 2);
    }

    #[test]
    fn test_get_strict_rejects_unknown_course() {
        let catalog = sample_catalog();
        assert!(catalog.get_strict("balance-gait-001").is_ok());
        assert!(matches!(
            catalog.get_strict("mystery-course-001"),
            Err(CatalogError::UnknownCourse { .. })
        ));
    }
}
