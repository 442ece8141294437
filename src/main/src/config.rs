use core::time::Duration;

#[toml_cfg::toml_config]
pub struct TomlConfig {
    #[default("https://api.spot-hinta.fi/TodayAndDayForward")]
    price_api_url: &'static str,
    #[default(10)]
    http_timeout: u64,
}

pub struct Config {
    pub price_api_url: &'static str,
    pub http_timeout: Duration,
}

impl Config {
    pub fn read() -> Self {
        Config::from(TOML_CONFIG)
    }
}

impl From<TomlConfig> for Config {
    fn from(config: TomlConfig) -> Self {
        Config {
            price_api_url: config.price_api_url,
            http_timeout: Duration::from_secs(config.http_timeout),
        }
    }
}
