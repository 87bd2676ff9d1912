use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::rtfc::catalog;
use crate::rtfc::quote::ShippingPremium;
use crate::session::{self, Session};
use crate::units::ExchangeRate;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 시장 환율 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// £1당 달러
    pub usd_per_gbp: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self { usd_per_gbp: 1.3463 }
    }
}

/// PIN 잠금 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    pub enabled: bool,
    pub pins: Vec<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pins: vec!["2025".to_string()],
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/en/ko)
    pub language: String,
    /// TOML 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    /// 화면 초기 연료 이름
    pub default_fuel: String,
    pub market: MarketConfig,
    /// 운송 프리미엄 초기값
    pub shipping: ShippingPremium,
    pub access: AccessConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            default_fuel: catalog::default_entry().name.to_string(),
            market: MarketConfig::default(),
            shipping: ShippingPremium::default(),
            access: AccessConfig::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Deserialize(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값으로 만들어 저장한다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let mut cfg: Config = toml::from_str(&content)?;
        cfg.sanitize();
        log::info!("loaded config from {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        log::info!("created default config at {}", path.display());
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        log::debug!("saved config to {}", path.display());
        Ok(())
    }

    pub fn exchange_rate(&self) -> ExchangeRate {
        ExchangeRate::new(self.market.usd_per_gbp)
    }

    /// 설정에 따라 세션을 만든다. 잠금이 꺼져 있으면 바로 해제된 세션이다.
    pub fn new_session(&self) -> Session {
        if self.access.enabled {
            Session::new(self.access.pins.iter().cloned())
        } else {
            Session::unlocked()
        }
    }

    // 형식이 틀린 PIN과 카탈로그에 없는 연료 이름은 버린다.
    fn sanitize(&mut self) {
        let before = self.access.pins.len();
        self.access.pins.retain(|p| session::is_well_formed_pin(p));
        if self.access.pins.len() != before {
            log::warn!(
                "ignored {} malformed PIN(s) in config",
                before - self.access.pins.len()
            );
        }
        if self.access.enabled && self.access.pins.is_empty() {
            log::warn!("no usable PIN in config, falling back to the default PIN");
            self.access.pins = AccessConfig::default().pins;
        }
        if catalog::find(&self.default_fuel).is_none() {
            log::warn!(
                "unknown default_fuel '{}', using '{}'",
                self.default_fuel,
                catalog::default_entry().name
            );
            self.default_fuel = catalog::default_entry().name.to_string();
        }
    }
}
