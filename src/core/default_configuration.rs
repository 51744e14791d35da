use std::fmt;
use std::fs;
use std::str::FromStr;
use std::time::Duration;
use serde::Deserialize;
use log::LevelFilter;
use url::Url;

use crate::core::{
    config::Config,
    Error,
    Result,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Clone, Deserialize)]
struct LogCfg {
    #[serde(rename = "level")]
    level   : Option<String>,
    #[serde(rename = "logFile")]
    file    : Option<String>,
}

#[derive(Clone, Default, Deserialize)]
struct FileCfg {
    #[serde(rename = "baseUrl")]
    base_url    : Option<String>,
    #[serde(rename = "timeout")]
    timeout     : Option<u64>,
    #[serde(rename = "logger")]
    logger      : Option<LogCfg>,
}

pub struct Builder<'a> {
    base_url    : Option<&'a str>,
    timeout     : Option<Duration>,

    log_level   : Option<LevelFilter>,
    log_file    : Option<&'a str>,

    cfg         : Option<FileCfg>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Builder<'a> {
        Self {
            base_url    : None,
            timeout     : None,
            log_level   : None,
            log_file    : None,
            cfg         : None,
        }
    }

    pub fn with_base_url(&mut self, url: &'a str) -> &mut Self {
        self.base_url = Some(url);
        self
    }

    pub fn with_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_logger(&mut self, level: LevelFilter, file: Option<&'a str>) -> &mut Self {
        self.log_level = Some(level);
        self.log_file = file;
        self
    }

    pub fn load(&mut self, input: &str) -> Result<&mut Self> {
        let data = fs::read_to_string(input).map_err(|e| {
            Error::Io(format!("Reading config error: {}", e))
        })?;
        self.load_str(&data)
    }

    pub fn load_str(&mut self, data: &str) -> Result<&mut Self> {
        let cfg = serde_json::from_str::<FileCfg>(data).map_err(|e| {
            Error::Argument(format!("bad config, error: {}", e))
        })?;

        self.cfg = Some(cfg);
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Box<dyn Config>> {
        Ok(Box::new(Configuration::new(self)?))
    }
}

struct Configuration {
    base_url    : Url,
    timeout     : Option<Duration>,
    log_level   : LevelFilter,
    log_file    : Option<String>,
}

impl Configuration {
    fn new(b: &Builder) -> Result<Self> {
        let file = b.cfg.clone().unwrap_or_default();
        let logger = file.logger.as_ref();

        let url_str = b.base_url
            .or(file.base_url.as_deref())
            .unwrap_or(DEFAULT_BASE_URL);

        let base_url = Url::parse(url_str).map_err(|e| {
            Error::Argument(format!("Invalid base url {}: {e}", url_str))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Argument(format!("Url {} cannot be a base address", url_str)));
        }

        let log_level = match b.log_level {
            Some(level) => level,
            None => match logger.and_then(|v| v.level.as_deref()) {
                Some(level) => LevelFilter::from_str(level).map_err(|_| {
                    Error::Argument(format!("Invalid log level {}", level))
                })?,
                None => LevelFilter::Info,
            }
        };

        let log_file = b.log_file
            .map(|v| v.to_string())
            .or(logger.and_then(|v| v.file.clone()));

        Ok(Self {
            base_url,
            timeout: b.timeout.or(file.timeout.map(Duration::from_secs)),
            log_level,
            log_file,
        })
    }
}

impl Config for Configuration {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }

    #[cfg(feature = "inspect")]
    fn dump(&self) {
        println!("config: {}", self);
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "baseUrl:{},", self.base_url)?;
        if let Some(timeout) = self.timeout {
            write!(f, "timeout:{}s,", timeout.as_secs())?;
        }
        write!(f, "logLevel:{}", self.log_level)?;
        if let Some(file) = self.log_file.as_ref() {
            write!(f, ",logFile:{}", file)?;
        }
        Ok(())
    }
}
