//! 应用编排
//!
//! 把命令行入口与加载、解析、打包各环节串联起来。

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

use crate::cli::{BuildArgs, ExtractArgs};
use crate::config::Config;
use crate::error::{AppError, FileError};
use crate::models::{ExtractMeta, ExtractPayload};
use crate::parser;
use crate::services::{bank_service, document_loader};
use crate::utils::logging;

/// 提取单个文档的题目并写出 JSON
pub async fn run_extract(args: ExtractArgs) -> Result<()> {
    if !args.input.exists() {
        return Err(AppError::File(FileError::NotFound {
            path: args.input.display().to_string(),
        })
        .into());
    }

    let document = document_loader::load_document(&args.input).await?;
    info!("📄 文档: {}，共 {} 页", document.name, document.pages.len());

    let outcome = parser::parse_document(&document.pages);
    let count = outcome.questions.len();

    let payload = ExtractPayload {
        meta: ExtractMeta {
            source: document.file_name.clone(),
            count,
        },
        questions: outcome.questions,
    };

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("无法创建目录: {}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(&payload)?;
    tokio::fs::write(&args.out, json)
        .await
        .with_context(|| format!("无法写入文件: {}", args.out.display()))?;

    info!("✓ 已写出 {} 道题目到 {}", count, args.out.display());
    if outcome.skipped > 0 {
        warn!("⚠️ 跳过 {} 条缺少题干或答案的记录", outcome.skipped);
    }
    Ok(())
}

/// 批量构建题库与索引
pub async fn run_build(args: BuildArgs, config: &Config) -> Result<()> {
    let bank_dir = args.bank_dir.unwrap_or_else(|| config.bank_dir.clone());
    let out_dir = args.out_dir.unwrap_or_else(|| config.out_dir.clone());

    let documents = document_loader::load_all_documents(&bank_dir).await?;
    logging::log_startup(documents.len());

    let out_path = Path::new(&out_dir);
    tokio::fs::create_dir_all(out_path)
        .await
        .with_context(|| format!("无法创建目录: {}", out_path.display()))?;

    let mut entries = Vec::new();
    let mut total_questions = 0;
    for (index, document) in documents.iter().enumerate() {
        info!(
            "\n[文档 {}] {}",
            index + 1,
            logging::truncate_text(&document.name, 40)
        );
        match bank_service::build_bank(document, out_path).await {
            Ok(entry) => {
                if config.verbose_logging {
                    info!("[文档 {}] 输出: {}", index + 1, entry.questions_path);
                }
                total_questions += entry.count;
                entries.push(entry);
            }
            Err(e) => {
                warn!("[文档 {}] 构建失败: {}", index + 1, e);
            }
        }
    }

    let bank_count = entries.len();
    bank_service::write_bank_index(entries, out_path).await?;
    logging::print_final_stats(bank_count, total_questions);
    Ok(())
}
