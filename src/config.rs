use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub supabase: SupabaseConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SupabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub anon_key: String,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl SupabaseConfig {
    /// 未配置远端存储属于合法状态，直接进入演示模式
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// 课程查询单页上限
    pub course_page_size: u32,
    /// 后台定时刷新间隔（秒），0 表示关闭
    pub refresh_interval_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            course_page_size: 10,
            refresh_interval_secs: 0,
        }
    }
}

impl Config {
    pub fn from_toml() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // 尝试读取配置文件；文件缺失时用默认值（数据源允许缺省）
        let mut config: Config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => {
                toml::from_str(&config_str).map_err(|e| format!("解析配置文件失败: {e}"))?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Config::default(),
            Err(e) => {
                return Err(format!("无法读取配置文件 {config_path}: {e}").into());
            }
        };

        // 环境变量覆盖（即便文件存在时也覆盖）
        if let Ok(v) = env::var("SERVER_HOST") {
            config.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            config.server.port = p;
        }
        if let Ok(v) = env::var("SUPABASE_URL") {
            config.supabase.url = v;
        }
        if let Ok(v) = env::var("SUPABASE_ANON_KEY") {
            config.supabase.anon_key = v;
        }
        if let Ok(v) = env::var("SUPABASE_ACCESS_TOKEN") {
            config.supabase.access_token = Some(v);
        }
        if let Ok(v) = env::var("DASHBOARD_COURSE_PAGE_SIZE")
            && let Ok(n) = v.parse()
        {
            config.dashboard.course_page_size = n;
        }
        if let Ok(v) = env::var("DASHBOARD_REFRESH_INTERVAL_SECS")
            && let Ok(n) = v.parse()
        {
            config.dashboard.refresh_interval_secs = n;
        }

        Ok(config)
    }
}
