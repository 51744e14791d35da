use std::time::Duration;
use log::LevelFilter;
use url::Url;

pub trait Config: Send + Sync {
    fn base_url(&self) -> &Url;
    fn timeout(&self) -> Option<Duration>;

    fn log_level(&self) -> LevelFilter;
    fn log_file(&self) -> Option<&str>;

    #[cfg(feature = "inspect")]
    fn dump(&self);
}
