//! 批量课程处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量文件的处理和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：写运行日志头、加载并校验课程目录、创建 FileStore
//! 2. **批量扫描**：按后缀和排除列表筛选待处理文件
//! 3. **顺序处理**：严格逐个文件处理，文件间没有共享可变状态
//! 4. **失败隔离**：单个文件失败只计入统计，不中断批量
//! 5. **全局统计**：汇总 更新/跳过/警告/失败
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个文件的细节
//! - **资源所有者**：唯一持有 FileStore 和课程目录的模块
//! - **向下委托**：委托 course_processor 处理单个文件

use anyhow::Result;
use tracing::{debug, error, warn};

use crate::config::Config;
use crate::infrastructure::FileStore;
use crate::models::{load_catalog, CourseCatalog};
use crate::orchestrator::course_processor::{self, FileOutcome};
use crate::services::WarnWriter;
use crate::utils::logging;
use crate::workflow::CourseCtx;

/// 应用主结构
pub struct App {
    config: Config,
    catalog: CourseCatalog,
    store: FileStore,
    warn_writer: WarnWriter,
}

/// 批量处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub total: usize,
    /// 已更新的文件数
    pub processed: usize,
    /// 因完成标记跳过的文件数（含无锚点可用的未修改文件）
    pub skipped: usize,
    /// 产生过警告的文件数
    pub warned: usize,
    /// 处理失败的文件数
    pub failed: usize,
}

impl App {
    /// 初始化应用
    ///
    /// 课程目录有问题时在触碰任何页面之前失败
    pub async fn initialize(config: Config) -> Result<Self> {
        logging::init_log_file(&config.output_log_file)?;
        logging::log_startup(&config);

        let catalog = load_catalog(&config.catalog_path).await?;
        catalog.validate()?;

        let store = FileStore::new(&config.courses_dir);
        let warn_writer = WarnWriter::with_path(&config.warn_file);

        Ok(Self {
            config,
            catalog,
            store,
            warn_writer,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<BatchStats> {
        let files = self
            .store
            .list_course_files(&self.config.course_suffix, &self.config.excluded_files)
            .await?;

        if files.is_empty() {
            warn!("⚠️ 没有找到待处理的课程文件，程序结束");
            return Ok(BatchStats::default());
        }

        logging::log_files_loaded(files.len());
        if self.config.verbose_logging {
            for file_name in &files {
                debug!("待处理: {}", file_name);
            }
        }

        let stats = self.process_all_files(&files).await;

        logging::print_final_stats(&stats, &self.config);

        Ok(stats)
    }

    /// 顺序处理所有文件
    ///
    /// 单个文件的失败不中断批量，只计入统计
    async fn process_all_files(&self, files: &[String]) -> BatchStats {
        let mut stats = BatchStats {
            total: files.len(),
            ..Default::default()
        };

        for (index, file_name) in files.iter().enumerate() {
            let course_index = index + 1;
            logging::log_file_start(course_index, file_name, files.len());

            let course_id =
                CourseCtx::derive_course_id(file_name, &self.config.course_suffix);
            let ctx = CourseCtx::new(file_name.clone(), course_id, course_index);

            match course_processor::process_course(
                &self.store,
                &self.catalog,
                &self.warn_writer,
                &ctx,
            )
            .await
            {
                Ok(FileOutcome::Updated { warnings }) => {
                    stats.processed += 1;
                    if warnings > 0 {
                        stats.warned += 1;
                    }
                }
                Ok(FileOutcome::Skipped) => {
                    stats.skipped += 1;
                }
                Ok(FileOutcome::Unchanged { warnings }) => {
                    stats.skipped += 1;
                    if warnings > 0 {
                        stats.warned += 1;
                    }
                }
                Err(e) => {
                    error!("[文件 {}] ❌ 处理过程中发生错误: {}", course_index, e);
                    stats.failed += 1;
                }
            }
        }

        stats
    }
}
