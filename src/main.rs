use anyhow::Result;
use clap::Parser;

use question_bank_builder::app;
use question_bank_builder::cli::{Cli, Commands};
use question_bank_builder::config::Config;
use question_bank_builder::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 解析命令行并加载配置
    let cli = Cli::parse();
    let config = Config::load();

    match cli.command {
        Commands::Extract(args) => app::run_extract(args).await,
        Commands::Build(args) => app::run_build(args, &config).await,
    }
}
