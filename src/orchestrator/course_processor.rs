//! 单个课程文件处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责处理单个课程页面文件，是文件级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **读取页面**：通过 FileStore 读取文件内容
//! 2. **跳过判断**：完成标记命中的页面直接跳过，不解析课程
//! 3. **解析课程**：从课程目录解析课程数据（含兜底处理）
//! 4. **流程调度**：委托 InjectFlow 执行文本变换
//! 5. **警告上报**：兜底命中和锚点缺失写入 warn.txt
//! 6. **原子写回**：内容有变化时写回（临时文件 + 重命名）

use anyhow::Result;
use tracing::{info, warn};

use crate::infrastructure::FileStore;
use crate::models::CourseCatalog;
use crate::services::WarnWriter;
use crate::workflow::{CourseCtx, InjectFlow, InjectOutcome};

/// 单个文件的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// 文件已更新
    Updated { warnings: usize },
    /// 完成标记已存在，本次跳过
    Skipped,
    /// 执行了流程但内容没有变化（所有片段都无锚点可用）
    Unchanged { warnings: usize },
}

/// 处理单个课程文件
///
/// # 参数
/// - `store`: 文件存储
/// - `catalog`: 课程目录
/// - `warn_writer`: 警告写入服务
/// - `ctx`: 课程上下文
///
/// # 返回
/// 返回文件处理结果；单个文件的失败由调用方统计，不中断批量
pub async fn process_course(
    store: &FileStore,
    catalog: &CourseCatalog,
    warn_writer: &WarnWriter,
    ctx: &CourseCtx,
) -> Result<FileOutcome> {
    info!("[文件 {}] 开始处理: {}", ctx.course_index, ctx.file_name);

    let content = store.read(&ctx.file_name).await?;

    // 完成标记命中时直接跳过：不解析课程数据，也不重复写 warn.txt
    if InjectFlow::is_complete(&content) {
        info!("[文件 {}] ⏭️ 已包含完整结构，跳过", ctx.course_index);
        return Ok(FileOutcome::Skipped);
    }

    // 解析课程数据，兜底命中要上报
    let course = catalog.resolve(&ctx.course_id);
    let mut warning_count = 0;

    if course.entry_fallback {
        warning_count += 1;
        warn!(
            "[文件 {}] ⚠️ 未知课程标识 {}, 使用兜底条目 ({})",
            ctx.course_index, ctx.course_id, catalog.fallback
        );
        warn_writer
            .write(
                &ctx.file_name,
                &ctx.course_id,
                &format!("未知课程标识，使用兜底条目 {}", catalog.fallback),
            )
            .await?;
    } else if course.questions_fallback {
        warning_count += 1;
        warn!(
            "[文件 {}] ⚠️ 课程 {} 没有题目，使用兜底题目集 ({})",
            ctx.course_index, ctx.course_id, catalog.fallback
        );
        warn_writer
            .write(
                &ctx.file_name,
                &ctx.course_id,
                &format!("题目列表为空，使用兜底题目集 {}", catalog.fallback),
            )
            .await?;
    }

    // 执行注入流程
    let outcome = InjectFlow::new().run(&content, &course)?;

    match outcome {
        InjectOutcome::Skipped => {
            info!("[文件 {}] ⏭️ 已包含完整结构，跳过", ctx.course_index);
            Ok(FileOutcome::Skipped)
        }
        InjectOutcome::Updated {
            content: new_content,
            warnings,
        } => {
            for warning in &warnings {
                warn!("[文件 {}] ⚠️ {}", ctx.course_index, warning);
                warn_writer
                    .write(&ctx.file_name, &ctx.course_id, &warning.to_string())
                    .await?;
            }
            warning_count += warnings.len();

            if new_content == content {
                warn!(
                    "[文件 {}] ⚠️ 没有可用锚点，文件未修改",
                    ctx.course_index
                );
                return Ok(FileOutcome::Unchanged {
                    warnings: warning_count,
                });
            }

            store.write_atomic(&ctx.file_name, &new_content).await?;
            info!(
                "[文件 {}] ✓ 完整结构已写入: {}",
                ctx.course_index, ctx.file_name
            );
            Ok(FileOutcome::Updated {
                warnings: warning_count,
            })
        }
    }
}
