//! 日志工具模块
//!
//! 提供全局日志初始化和输出格式化的辅助函数

use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化全局日志
///
/// 默认级别 info，可用 RUST_LOG 环境变量覆盖。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// 记录批量构建启动信息
pub fn log_startup(document_count: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 开始构建题库");
    info!("📄 待处理文档数: {}", document_count);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(bank_count: usize, total_questions: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 题库: {} 个，题目: {} 道", bank_count, total_questions);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
