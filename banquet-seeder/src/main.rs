use banquet_seeder::{Cli, print_banner, setup_environment};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 解析命令行 (--help/--version 在环境设置前短路)
    let cli = Cli::parse();

    // 2. 设置环境 (dotenv, 日志)
    setup_environment()?;

    // 打印横幅
    print_banner();

    tracing::info!("🍽️ Banquet seeder starting...");

    // 3. 执行子命令; 任何失败记录日志后以非零状态退出
    if let Err(e) = banquet_seeder::cli::execute(cli).await {
        tracing::error!("Seeder error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
