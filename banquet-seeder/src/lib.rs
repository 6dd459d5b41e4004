//! Banquet Seeder - 餐饮活动管理平台样本数据工具
//!
//! # 概述
//!
//! 本 crate 为 Banquet 平台提供类型化数据访问层与一次性样本数据工具:
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储, 模型与 repository
//! - **种子** (`seed`): 清库 + 按依赖顺序重建样本数据
//! - **校验** (`verify`): 数据完整性检查 (引用/一对一/数量/恒等式)
//! - **CLI** (`cli`): seed / verify / wipe 三个子命令
//!
//! # 模块结构
//!
//! ```text
//! banquet-seeder/src/
//! ├── core/          # 配置
//! ├── cli.rs         # 命令行入口
//! ├── db/            # 数据库层 (models + repository + schema)
//! ├── seed/          # 样本数据各阶段
//! ├── verify/        # 完整性检查
//! └── utils/         # 错误、日志、金额、时间工具
//! ```

pub mod cli;
pub mod core;
pub mod db;
pub mod seed;
pub mod utils;
pub mod verify;

// Re-export 公共类型
pub use cli::{Cli, Commands};
pub use core::Config;
pub use db::DbService;
pub use seed::{SeedSummary, Seeder};
pub use utils::{AppError, AppResult};
pub use verify::{VerifyReport, Verifier};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置环境: .env + 日志
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____                              __
   / __ )____ _____  ____ ___  _____/ /_
  / __  / __ `/ __ \/ __ `/ / / / _ \ __/
 / /_/ / /_/ / / / / /_/ / /_/ /  __/ /_
/_____/\__,_/_/ /_/\__, /\__,_/\___/\__/
                  /____/
    "#
    );
}
