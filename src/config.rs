//! 负责加载服务的运行配置。

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// 服务的全部可调配置项。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP 服务监听地址。
    pub bind: String,
    /// HTTP 服务监听端口。
    pub port: u16,
    /// 附加到 QQ 音乐请求上的 Cookie 字符串，留空表示匿名访问。
    pub cookie: String,
    /// 发往播放链接接口的设备标识。
    pub guid: String,
    /// 发往播放链接接口的登录 QQ 号，"0" 表示未登录。
    pub uin: String,
    /// 相邻两次音质链接请求之间的间隔毫秒数，用来控制对接口的请求频率。
    pub tier_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 5122,
            cookie: String::new(),
            guid: "10000".to_string(),
            uin: "0".to_string(),
            tier_delay_ms: 100,
        }
    }
}

/// 获取应用配置目录下指定文件的完整路径。
fn get_config_file_path(filename: &str) -> Result<PathBuf, std::io::Error> {
    if let Some(mut config_dir) = dirs::config_dir() {
        config_dir.push("qqmusic-resolver");
        fs::create_dir_all(&config_dir)?;
        config_dir.push(filename);
        Ok(config_dir)
    } else {
        Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "无法找到用户配置目录",
        ))
    }
}

impl Settings {
    /// 加载配置：先读配置文件，再套用环境变量覆盖。
    ///
    /// 配置文件不存在时会用默认值创建一个，方便用户后续修改。
    #[must_use]
    pub fn load() -> Self {
        let mut settings = match Self::load_from_file() {
            Ok(settings) => settings,
            Err(e) => {
                warn!("读取配置文件失败，使用默认配置: {e}");
                Self::default()
            }
        };
        settings.apply_env_overrides();
        settings
    }

    fn load_from_file() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = get_config_file_path("settings.json")?;

        match fs::read_to_string(&config_path) {
            Ok(content) => {
                let settings: Self = serde_json::from_str(&content)?;
                info!("已从 {} 加载配置。", config_path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("配置文件不存在，将创建并保存默认配置。");
                let settings = Self::default();
                settings.save()?;
                Ok(settings)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 将当前配置序列化为 JSON 并保存到配置文件。
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_path = get_config_file_path("settings.json")?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        info!("配置已保存到 {}。", config_path.display());
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(cookie) = env::var("QQMUSIC_COOKIE") {
            self.cookie = cookie;
        }
        if let Ok(bind) = env::var("QQMUSIC_BIND") {
            self.bind = bind;
        }
        if let Ok(port) = env::var("QQMUSIC_PORT") {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => warn!("QQMUSIC_PORT 的值 '{port}' 不是合法端口，忽略"),
            }
        }
        if let Ok(delay) = env::var("QQMUSIC_TIER_DELAY_MS") {
            match delay.parse() {
                Ok(delay) => self.tier_delay_ms = delay,
                Err(_) => warn!("QQMUSIC_TIER_DELAY_MS 的值 '{delay}' 不是合法毫秒数，忽略"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.port, 5122);
        assert_eq!(settings.guid, "10000");
        assert_eq!(settings.uin, "0");
        assert!(settings.cookie.is_empty());
    }

    #[test]
    fn test_partial_config_file_fills_defaults() {
        // 文件里只写了一部分字段时，其余字段取默认值
        let settings: Settings =
            serde_json::from_str(r#"{"port": 8080, "cookie": "uin=1"}"#).unwrap();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.cookie, "uin=1");
        assert_eq!(settings.bind, "0.0.0.0");
        assert_eq!(settings.tier_delay_ms, 100);
    }
}
