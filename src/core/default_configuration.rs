use std::fmt;
use std::fs;
use std::net::{
    IpAddr,
    Ipv4Addr
};
use serde::Deserialize;
use log::LevelFilter;

use crate::{
    Error,
    core::{
        config::Config,
        config::StorageKind,
        Result
    },
    service::DEFAULT_HTTP_PORT,
};

const DEFAULT_DATABASE: &str = "contacts.db";

#[derive(Clone, Deserialize)]
struct LogCfg {
    #[serde(rename = "level")]
    level   : String,
    #[serde(rename = "logFile")]
    file    : Option<String>,

    #[serde(skip)]
    deserde_level: Option<LevelFilter>,
}

#[derive(Clone, Deserialize)]
struct Configuration {
    #[serde(rename = "address")]
    addr        : Option<String>,
    #[serde(rename = "port")]
    port        : u16,
    #[serde(rename = "storage")]
    storage     : Option<String>,
    #[serde(rename = "database")]
    database    : String,

    #[serde(rename = "allowedOrigin")]
    origin      : Option<String>,

    #[serde(rename = "logger")]
    logger      : Option<LogCfg>,

    #[serde(skip)]
    deserde_addr: Option<IpAddr>,
    #[serde(skip)]
    deserde_kind: Option<StorageKind>,
}

pub struct Builder<'a> {
    addr_str    : Option<&'a str>,
    port        : u16,

    storage     : Option<StorageKind>,
    database    : Option<String>,
    origin      : Option<String>,

    log_level   : Option<LevelFilter>,
    log_file    : Option<&'a str>,

    cfg         : Option<Configuration>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Builder<'a> {
        Self {
            addr_str    : None,
            port        : DEFAULT_HTTP_PORT,
            storage     : None,
            database    : None,
            origin      : None,
            log_level   : None,
            log_file    : None,
            cfg         : None,
        }
    }

    pub fn with_addr(&mut self, addr: &'a str) -> &mut Self {
        self.addr_str = Some(addr);
        self
    }

    pub fn with_port(&mut self, port: u16) -> &mut Self {
        self.port = port;
        self
    }

    pub fn with_storage_kind(&mut self, kind: StorageKind) -> &mut Self {
        self.storage = Some(kind);
        self
    }

    pub fn with_database(&mut self, path: &str) -> &mut Self {
        self.database = Some(path.to_string());
        self
    }

    pub fn with_allowed_origin(&mut self, origin: &str) -> &mut Self {
        self.origin = Some(origin.to_string());
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

        let cfg = serde_json::from_str::<Configuration>(&data).map_err(|e| {
            Error::Argument(format!("bad config, error: {}", e))
        })?;

        self.cfg = Some(cfg);
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Box<dyn Config>> {
        Ok(Box::new(Configuration::new(self)?))
    }
}

impl Configuration {
    fn new(b: &Builder) -> Result<Self> {
        let mut cfg = match b.cfg.as_ref() {
            Some(cfg) => cfg.clone(),
            None => Self {
                addr        : None,
                port        : DEFAULT_HTTP_PORT,
                storage     : None,
                database    : DEFAULT_DATABASE.to_string(),
                origin      : None,
                logger      : None,
                deserde_addr: None,
                deserde_kind: None,
            }
        };

        if b.port != DEFAULT_HTTP_PORT && b.port != cfg.port {
            cfg.port = b.port
        };

        let addr = if let Some(addr) = b.addr_str {
            addr.parse::<IpAddr>()?
        } else if let Some(addr) = cfg.addr.as_ref() {
            addr.parse::<IpAddr>()?
        } else {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        };
        cfg.deserde_addr = Some(addr);

        let kind = b.storage
            .or_else(|| cfg.storage.as_ref().and_then(|v| StorageKind::parse(v)))
            .unwrap_or(StorageKind::Sqlite);
        cfg.deserde_kind = Some(kind);

        if let Some(path) = b.database.as_ref() {
            cfg.database = path.to_string();
        }

        if let Some(origin) = b.origin.as_ref() {
            cfg.origin = Some(origin.to_string());
        }

        if let Some(ref mut logger) = cfg.logger {
            if let Some(level) = logger.level.parse::<LevelFilter>().ok() {
                logger.deserde_level = Some(level);
            } else {
                logger.deserde_level = Some(LevelFilter::Info);
            }
        } else {
            cfg.logger = Some(LogCfg {
                level: b.log_level.unwrap_or(LevelFilter::Info).to_string(),
                file: b.log_file.map(|f| f.to_string()),
                deserde_level: Some(b.log_level.unwrap_or(LevelFilter::Info)),
            });
        }

        Ok(cfg)
    }
}

impl Config for Configuration {
    fn addr(&self) -> IpAddr {
        self.deserde_addr.unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
    }

    fn listening_port(&self) -> u16 {
        self.port
    }

    fn storage_kind(&self) -> StorageKind {
        self.deserde_kind.unwrap_or(StorageKind::Sqlite)
    }

    fn storage_path(&self) -> &str {
        &self.database
    }

    fn allowed_origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    fn log_level(&self) -> LevelFilter {
        self.logger.as_ref()
            .and_then(|v| v.deserde_level)
            .unwrap_or(LevelFilter::Info)
    }

    fn log_file(&self) -> Option<&str> {
        self.logger.as_ref().and_then(|v| v.file.as_deref())
    }

    #[cfg(feature = "inspect")]
    fn dump(&self) {
        println!("config: {}", self);
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.deserde_addr.as_ref().map(|addr| {
            write!(f, "addr:{}:{},", addr, self.port).ok();
        });

        write!(f, "\tstorage:{:?},", self.deserde_kind)?;
        write!(f, "\tdatabase:{},", self.database)?;
        if let Some(origin) = self.origin.as_ref() {
            write!(f, "\torigin:{}", origin)?;
        }
        Ok(())
    }
}
