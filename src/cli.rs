use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// 题库构建工具命令行
#[derive(Parser, Debug)]
#[command(
    name = "question_bank_builder",
    version,
    about = "从逐页文本中提取结构化题目并构建 JSON 题库"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 提取单个文档中的题目并输出 JSON
    Extract(ExtractArgs),
    /// 批量构建题库与索引
    Build(BuildArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// 源文档文本文件路径（页间以换页符分隔）
    #[arg(long)]
    pub input: PathBuf,

    /// 输出 JSON 路径
    #[arg(long)]
    pub out: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// 文档存放目录（缺省读取配置）
    #[arg(long)]
    pub bank_dir: Option<String>,

    /// 题库输出目录（缺省读取配置）
    #[arg(long)]
    pub out_dir: Option<String>,
}
