//! 注入流程 - 流程层
//!
//! 核心职责：定义"一个课程页面"的完整文本变换
//!
//! 流程顺序：
//! 1. 完成标记检查（两个标记都在 → 跳过，内容逐字节不变）
//! 2. 结构注入：管理面板（进度锚点）+ 反馈/考试/证书区块（脚本锚点前）
//! 3. 脚本注入：课程考试脚本（最后一个 `</script>` 前）
//!
//! 纯文本变换，不做任何 IO；锚点按固定优先级列表依次尝试，
//! 全部未命中时产生可报告的警告而不是静默跳过。

use std::fmt;

use crate::error::AppResult;
use crate::models::ResolvedCourse;
use crate::services::{exam_script, fragments};

/// 结构注入完成标记（反馈区块的元素 id）
pub const STRUCTURE_MARKER: &str = "course-feedback";
/// 脚本注入完成标记
pub const SCRIPT_MARKER: &str = "function submitFeedback";
/// 管理面板片段自身的标记
///
/// 结构标记只由区块片段写入；区块锚点缺失而管理面板已插入的页面上，
/// 重跑时靠这个标记避免重复插入管理面板
const ADMIN_PANEL_MARKER: &str = r#"id="adminControls""#;

/// 管理面板锚点优先级（在锚点之前插入；body 标签是最后的兜底，在其 `>` 之后插入）
const ADMIN_PANEL_ANCHORS: &[&str] = &["<!-- Progress -->", "<div class=\"progress-container\">"];
const BODY_OPEN_ANCHOR: &str = "<body";

/// 区块锚点优先级（在锚点之前插入）
const SECTION_ANCHORS: &[&str] = &["<script>", "</body>"];

const SCRIPT_CLOSE_TAG: &str = "</script>";

/// 可报告的注入警告
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectWarning {
    /// 片段的所有候选锚点都未命中，片段未插入
    MissingAnchor {
        fragment: &'static str,
        candidates: Vec<&'static str>,
    },
}

impl fmt::Display for InjectWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectWarning::MissingAnchor {
                fragment,
                candidates,
            } => {
                write!(f, "片段 {} 未插入, 候选锚点均未命中: {:?}", fragment, candidates)
            }
        }
    }
}

/// 注入结果
#[derive(Debug)]
pub enum InjectOutcome {
    /// 内容已更新（可能附带警告）
    Updated {
        content: String,
        warnings: Vec<InjectWarning>,
    },
    /// 两个完成标记都已存在，内容未触碰
    Skipped,
}

/// 注入流程
///
/// - 编排单个页面的全部文本变换
/// - 不持有任何资源，不做 IO
/// - 只依赖片段渲染能力（services）
pub struct InjectFlow;

impl InjectFlow {
    pub fn new() -> Self {
        Self
    }

    /// 对页面内容执行注入变换
    ///
    /// 幂等保证：对同一输入执行两次与执行一次结果相同
    /// 两个完成标记是否都已写入
    ///
    /// 调用方可以在解析课程数据之前用它做跳过判断
    pub fn is_complete(content: &str) -> bool {
        content.contains(STRUCTURE_MARKER) && content.contains(SCRIPT_MARKER)
    }

    pub fn run(&self, content: &str, course: &ResolvedCourse) -> AppResult<InjectOutcome> {
        let structure_done = content.contains(STRUCTURE_MARKER);
        let script_done = content.contains(SCRIPT_MARKER);

        if structure_done && script_done {
            return Ok(InjectOutcome::Skipped);
        }

        let mut text = content.to_string();
        let mut warnings = Vec::new();

        if !structure_done {
            if !text.contains(ADMIN_PANEL_MARKER) {
                self.insert_admin_panel(&mut text, &mut warnings);
            }
            self.insert_sections(&mut text, course, &mut warnings);
        }

        if !script_done {
            self.insert_exam_script(&mut text, course, &mut warnings)?;
        }

        Ok(InjectOutcome::Updated {
            content: text,
            warnings,
        })
    }

    /// 插入管理面板
    ///
    /// 优先级：进度注释 → 进度容器 → body 开标签之后
    fn insert_admin_panel(&self, text: &mut String, warnings: &mut Vec<InjectWarning>) {
        for anchor in ADMIN_PANEL_ANCHORS {
            if let Some(pos) = text.find(anchor) {
                text.insert_str(pos, &format!("\n{}\n", fragments::admin_panel()));
                return;
            }
        }

        // 兜底：body 开标签的 `>` 之后
        if let Some(body_pos) = text.find(BODY_OPEN_ANCHOR) {
            if let Some(close_offset) = text[body_pos..].find('>') {
                let insert_at = body_pos + close_offset + 1;
                text.insert_str(insert_at, &format!("\n{}\n", fragments::admin_panel()));
                return;
            }
        }

        warnings.push(InjectWarning::MissingAnchor {
            fragment: "admin-panel",
            candidates: ADMIN_PANEL_ANCHORS
                .iter()
                .copied()
                .chain(std::iter::once(BODY_OPEN_ANCHOR))
                .collect(),
        });
    }

    /// 插入反馈、考试、证书区块（按此顺序拼接成一段）
    fn insert_sections(
        &self,
        text: &mut String,
        course: &ResolvedCourse,
        warnings: &mut Vec<InjectWarning>,
    ) {
        let mut additions = String::new();
        additions.push_str(fragments::feedback_section());
        additions.push_str(fragments::exam_section());
        additions.push_str(&fragments::certificate_section(course));
        additions.push('\n');

        for anchor in SECTION_ANCHORS {
            if let Some(pos) = text.find(anchor) {
                text.insert_str(pos, &additions);
                return;
            }
        }

        warnings.push(InjectWarning::MissingAnchor {
            fragment: "course-sections",
            candidates: SECTION_ANCHORS.to_vec(),
        });
    }

    /// 在最后一个 `</script>` 之前插入课程考试脚本
    fn insert_exam_script(
        &self,
        text: &mut String,
        course: &ResolvedCourse,
        warnings: &mut Vec<InjectWarning>,
    ) -> AppResult<()> {
        let Some(pos) = text.rfind(SCRIPT_CLOSE_TAG) else {
            warnings.push(InjectWarning::MissingAnchor {
                fragment: "exam-script",
                candidates: vec![SCRIPT_CLOSE_TAG],
            });
            return Ok(());
        };

        let script = exam_script::render_course_script(&course.questions)?;
        text.insert_str(pos, &script);
        Ok(())
    }
}

impl Default for InjectFlow {
    fn default() -> Self {
        Self::new()
    }
}
