//! 题库打包
//!
//! 把解析结果写成前端可直接加载的 JSON 题库与索引，目录结构为
//! `<out>/<bank_id>/questions.json` 加顶层 `index.json`。

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::fs;
use tracing::info;

use super::document_loader::Document;
use crate::error::{AppError, FileError};
use crate::models::{BankIndex, BankIndexEntry, BankIndexMeta, BankMeta, BankPayload};
use crate::parser;

/// 生成题库 ID
///
/// 取文件名哈希的短前缀，保证路径为纯 ASCII，方便静态托管。
/// 同名文件在多次构建之间得到相同的 ID。
pub fn make_bank_id(file_name: &str) -> String {
    let digest = format!("{:x}", Sha256::digest(file_name.as_bytes()));
    format!("b{}", &digest[..10])
}

/// 解析文档并写出单个题库，返回索引条目
pub async fn build_bank(document: &Document, out_dir: &Path) -> Result<BankIndexEntry> {
    let bank_id = make_bank_id(&document.file_name);
    let outcome = parser::parse_document(&document.pages);
    let count = outcome.questions.len();

    let bank_dir = out_dir.join(&bank_id);
    fs::create_dir_all(&bank_dir)
        .await
        .with_context(|| format!("无法创建目录: {}", bank_dir.display()))?;

    let payload = BankPayload {
        meta: BankMeta {
            bank_id: bank_id.clone(),
            bank_name: document.name.clone(),
            source: document.file_name.clone(),
            count,
        },
        questions: outcome.questions,
    };

    let json = serde_json::to_string_pretty(&payload)?;
    let questions_path = bank_dir.join("questions.json");
    fs::write(&questions_path, json).await.map_err(|e| {
        AppError::File(FileError::WriteFailed {
            path: questions_path.display().to_string(),
            source: Box::new(e),
        })
    })?;

    info!(
        "✓ 题库 {} 写出 {} 道题目，跳过 {} 条",
        bank_id, count, outcome.skipped
    );

    Ok(BankIndexEntry {
        questions_path: format!("banks/{}/questions.json", bank_id),
        id: bank_id,
        name: document.name.clone(),
        source_file: document.file_name.clone(),
        count,
    })
}

/// 写出题库索引
pub async fn write_bank_index(banks: Vec<BankIndexEntry>, out_dir: &Path) -> Result<()> {
    let index = BankIndex {
        meta: BankIndexMeta { count: banks.len() },
        banks,
    };

    let json = serde_json::to_string_pretty(&index)?;
    let index_path = out_dir.join("index.json");
    fs::write(&index_path, json).await.map_err(|e| {
        AppError::File(FileError::WriteFailed {
            path: index_path.display().to_string(),
            source: Box::new(e),
        })
    })?;

    info!("✓ 索引已写入: {}", index_path.display());
    Ok(())
}
