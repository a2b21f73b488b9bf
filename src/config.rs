use clap::Parser;
use once_cell::sync::Lazy;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

pub const ALLOWED_UPLOAD_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "pdf", "docx", "txt"];

pub static APP_CONFIG: Lazy<Config> = Lazy::new(Config::parse);

#[derive(Debug, Parser, Clone)]
pub struct Config {
    #[clap(long, env, default_value_t = 8000)]
    pub port: u16,

    #[clap(long, env, default_value_t = true)]
    pub swagger_enabled: bool,

    #[clap(long, env, default_value = "info")]
    pub log_level: String,

    #[clap(long, env)]
    pub database_url: String,

    #[clap(long, env)]
    pub jwt_secret: String,

    /// Access token lifetime in seconds.
    #[clap(long, env, default_value_t = 3600)]
    pub jwt_expires_in: i64,

    #[clap(long, env, default_value_t = bcrypt::DEFAULT_COST)]
    pub bcrypt_cost: u32,

    #[clap(long, env, default_value = "./uploads")]
    pub upload_dir: String,

    #[clap(long, env, default_value_t = 10 * 1024 * 1024)]
    pub max_upload_bytes: usize,

    #[clap(long, env, default_value = "*")]
    pub cors_allowed_origins: String,

    #[clap(long, env)]
    pub admin_email: String,

    #[clap(long, env)]
    pub admin_password: String,

    #[clap(long, env, default_value = "System Administrator")]
    pub admin_name: String,

    #[clap(long, env, default_value = "0000000000")]
    pub admin_phone: String,

    /// Exposes `POST /admin/signup`. Off unless explicitly enabled.
    #[clap(long, env, default_value_t = false)]
    pub admin_signup_enabled: bool,

    #[clap(long, env, default_value_t = true)]
    pub run_migrations: bool,

    #[clap(long, env, default_value = "local")]
    pub app_env: String,
}
