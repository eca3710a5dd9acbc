//! # Question Bank Builder
//!
//! 从逐页提取的试卷文本中解析结构化题目，并打包成前端可直接
//! 加载的 JSON 题库。
//!
//! ## 架构设计
//!
//! ### ① 解析核心（Parser）
//! - `parser/normalize` - 行规范化
//! - `parser/patterns` - 行模式库（题目起始、选项、答案等识别器）
//! - `parser/answer` - 答案归一化（文本 -> 选项字母）
//! - `parser/assembler` - 题目组装状态机
//!
//! ### ② 业务能力层（Services）
//! - `services/document_loader` - 加载逐页文本文档
//! - `services/bank_service` - 题库打包与索引写出
//!
//! ### ③ 编排层（App）
//! - `app` - extract / build 子命令的执行流程
//!
//! 解析核心是纯同步逻辑，不做任何 I/O；文件读写全部集中在
//! 服务层。每个文档使用独立的状态机实例，互不共享状态。

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ParseOutcome, Question, QuestionSource, QuestionType};
pub use parser::{parse_document, QuestionAssembler};
pub use services::Document;
