use serde::{Deserialize, Serialize};

use super::question::Question;

/// 单文档提取的输出载荷（extract 子命令）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractPayload {
    pub meta: ExtractMeta,
    pub questions: Vec<Question>,
}

/// 单文档提取的元信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractMeta {
    pub source: String,
    pub count: usize,
}

/// 单个题库的输出载荷（banks/<id>/questions.json）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankPayload {
    pub meta: BankMeta,
    pub questions: Vec<Question>,
}

/// 题库元信息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankMeta {
    pub bank_id: String,
    pub bank_name: String,
    pub source: String,
    pub count: usize,
}

/// 题库索引（banks/index.json），前端据此列出所有题库
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankIndex {
    pub meta: BankIndexMeta,
    pub banks: Vec<BankIndexEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankIndexMeta {
    pub count: usize,
}

/// 索引中的单个题库条目
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankIndexEntry {
    pub id: String,
    pub name: String,
    pub source_file: String,
    pub questions_path: String,
    pub count: usize,
}
