use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::{AppConfig, JwtConfig};

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// 读取非空环境变量
fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// 生成随机 JWT 密钥
fn generate_random_secret(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 未配置密钥时使用进程级随机密钥，重启后已签发的令牌全部失效
///
/// 加载配置时日志尚未初始化，由调用方根据 `secret_generated` 输出警告。
fn ensure_jwt_secret(jwt: &mut JwtConfig) {
    if jwt.secret.trim().is_empty() {
        jwt.secret = generate_random_secret(48);
        jwt.secret_generated = true;
    }
}

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 默认值
            .set_default("app.system_name", "School Registry")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.workers", 0)?
            .set_default("server.max_workers", 16)?
            .set_default("server.timeouts.client_request", 5000)?
            .set_default("server.timeouts.client_disconnect", 1000)?
            .set_default("server.timeouts.keep_alive", 75)?
            .set_default("server.limits.max_payload_size", 1_048_576)?
            .set_default("jwt.secret", "")?
            .set_default("jwt.access_token_expiry", 60)?
            .set_default("argon2.memory_cost", 19456)?
            .set_default("argon2.time_cost", 2)?
            .set_default("argon2.parallelism", 1)?
            .set_default("database.url", "")?
            .set_default("database.engine", "")?
            .set_default("database.user", "")?
            .set_default("database.password", "")?
            .set_default("database.name", "")?
            .set_default("database.host", "")?
            .set_default("database.pool_size", 10)?
            .set_default("database.timeout", 30)?
            .set_default("cors.allowed_origin", "http://localhost:5173")?
            .set_default(
                "cors.allowed_methods",
                vec!["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD"],
            )?
            .set_default(
                "cors.allowed_headers",
                vec!["Origin", "Content-Length", "Content-Type"],
            )?
            .set_default("cors.allow_credentials", true)?
            .set_default("cors.max_age", 12 * 60 * 60)?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("REGISTRY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", env_non_empty("APP_ENV"))?
            .set_override_option("app.log_level", env_non_empty("RUST_LOG"))?
            .set_override_option("server.host", env_non_empty("SERVER_HOST"))?
            .set_override_option("server.workers", env_non_empty("CPU_COUNT"))?
            .set_override_option("jwt.secret", env_non_empty("JWT_SECRET"))?
            .set_override_option("cors.allowed_origin", env_non_empty("CORS_ORIGIN"))?
            .set_override_option("database.url", env_non_empty("DATABASE_URL"))?
            .set_override_option("database.engine", env_non_empty("DB_TYPE"))?
            .set_override_option("database.user", env_non_empty("DB_USER"))?
            .set_override_option("database.password", env_non_empty("DB_PASSWORD"))?
            .set_override_option("database.name", env_non_empty("DB_NAME"))?
            .set_override_option("database.host", env_non_empty("DB_HOST"))?
            .set_override_option("database.port", env_non_empty("DB_PORT"))?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        ensure_jwt_secret(&mut app_config.jwt);

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::load().expect("defaults should load");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.cors.max_age, 43200);
        assert!(config.cors.allow_credentials);
        assert_eq!(
            config.cors.allowed_methods,
            vec!["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD"]
        );
        assert!(config.server.workers >= 1);
        assert!(!config.jwt.secret.is_empty());
    }

    #[test]
    fn test_missing_jwt_secret_is_generated_and_flagged() {
        let mut jwt = JwtConfig {
            secret: String::new(),
            access_token_expiry: 60,
            secret_generated: false,
        };
        ensure_jwt_secret(&mut jwt);
        assert_eq!(jwt.secret.len(), 48);
        assert!(jwt.secret_generated);

        let mut configured = JwtConfig {
            secret: "configured-secret".to_string(),
            access_token_expiry: 60,
            secret_generated: false,
        };
        ensure_jwt_secret(&mut configured);
        assert_eq!(configured.secret, "configured-secret");
        assert!(!configured.secret_generated);
    }

    #[test]
    fn test_random_secret() {
        let a = generate_random_secret(48);
        let b = generate_random_secret(48);
        assert_eq!(a.len(), 48);
        assert_ne!(a, b);
    }
}
