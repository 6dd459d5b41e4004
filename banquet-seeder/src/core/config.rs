/// 种子工具配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | BANQUET_DATA_DIR | ./data | 数据目录 (嵌入式数据库所在) |
/// | SEED_PASSWORD | banquet-demo-2026 | 所有样本账号的共享密码 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志文件目录, 未设置时仅输出到终端 |
///
/// # 示例
///
/// ```ignore
/// BANQUET_DATA_DIR=/tmp/banquet cargo run -- seed
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 数据目录, 存放嵌入式数据库
    pub data_dir: String,
    /// 样本账号共享密码 (明文仅存在于配置与凭据打印中)
    pub seed_password: String,
    /// 日志级别: trace | debug | info | warn | error
    pub log_level: String,
    /// 日志文件目录 (可选)
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置, 未设置时使用默认值
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("BANQUET_DATA_DIR").unwrap_or_else(|_| "./data".into()),
            seed_password: std::env::var("SEED_PASSWORD")
                .unwrap_or_else(|_| "banquet-demo-2026".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// 使用自定义数据目录覆盖配置 (测试场景常用)
    pub fn with_data_dir(data_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
