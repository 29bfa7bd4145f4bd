//! 日志工具模块
//!
//! 提供运行日志文件和格式化输出的辅助函数

use std::fs::OpenOptions;
use std::io::Write;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::orchestrator::batch_processor::BatchStats;

/// 初始化运行日志文件（写入带时间戳的头部）
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n课程页面注入日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    std::fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 课程页面批量注入模式");
    info!("📁 课程目录: {}", config.courses_dir);
    info!("📋 课程表: {}", config.catalog_path);
    info!("{}", "=".repeat(60));
}

/// 记录文件扫描结果
pub fn log_files_loaded(total: usize) {
    info!("✓ 找到 {} 个待处理的课程文件", total);
    info!("💡 按文件名顺序逐个处理\n");
}

/// 记录单个文件开始处理
pub fn log_file_start(course_index: usize, file_name: &str, total: usize) {
    info!("\n{}", "─".repeat(60));
    info!("📄 处理第 {}/{} 个文件: {}", course_index, total, file_name);
}

/// 打印并落盘最终统计信息
pub fn print_final_stats(stats: &BatchStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 更新: {}/{}", stats.processed, stats.total);
    info!("⏭️ 跳过: {}", stats.skipped);
    info!("⚠️ 警告: {}", stats.warned);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", config.output_log_file);

    // 同步追加到运行日志文件，失败不影响主流程
    if let Err(e) = append_final_stats(stats, &config.output_log_file) {
        tracing::warn!("⚠️ 无法写入运行日志文件: {}", e);
    }
}

fn append_final_stats(stats: &BatchStats, log_file_path: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    writeln!(
        file,
        "更新 {} / 跳过 {} / 警告 {} / 失败 {} / 总计 {}",
        stats.processed, stats.skipped, stats.warned, stats.failed, stats.total
    )?;

    Ok(())
}
