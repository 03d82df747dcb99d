use cached::proc_macro::cached;
use config::{Config, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new({
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Lostfound.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("Lostfound.toml").exists() {
            builder = builder.add_source(File::new("Lostfound.toml", FileFormat::Toml));
        }

        builder.build().unwrap()
    })
});

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    pub mongodb: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Hosts {
    pub api: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Api {
    pub listen: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MatchingWeights {
    pub category: f64,
    pub keyword: f64,
    pub date_boost: f64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Matching {
    pub threshold: f64,
    pub date_window_days: i64,
    pub weights: MatchingWeights,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Sentry {
    pub api: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub database: Database,
    pub hosts: Hosts,
    pub api: Api,
    pub matching: Matching,
    pub sentry: Sentry,
}

pub async fn init() {
    println!(
        ":: Lost & Found Configuration ::\n\x1b[32m{:?}\x1b[0m",
        config().await
    );
}

pub async fn read() -> Config {
    CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 30)]
pub async fn config() -> Settings {
    read().await.try_deserialize::<Settings>().unwrap()
}

/// Configure logging and common Rust variables
pub fn setup_logging(release: &'static str, dsn: String) -> Option<sentry::ClientInitGuard> {
    dotenv::dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    pretty_env_logger::init();
    log::info!("Starting {release}");

    if dsn.is_empty() {
        None
    } else {
        Some(sentry::init((
            dsn,
            sentry::ClientOptions {
                release: Some(release.into()),
                ..Default::default()
            },
        )))
    }
}

#[macro_export]
macro_rules! configure {
    ($application: ident) => {
        let config = $crate::config().await;
        let _sentry = $crate::setup_logging(
            concat!(env!("CARGO_PKG_NAME"), "@", env!("CARGO_PKG_VERSION")),
            config.sentry.$application,
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::{config, init};

    #[async_std::test]
    async fn it_works() {
        init().await;
    }

    #[async_std::test]
    async fn matching_defaults() {
        let config = config().await;
        assert_eq!(config.matching.threshold, 0.35);
        assert_eq!(config.matching.date_window_days, 14);
        assert_eq!(config.matching.weights.category, 0.6);
        assert_eq!(config.matching.weights.keyword, 0.4);
        assert_eq!(config.matching.weights.date_boost, 0.05);
        assert!(config.database.mongodb.is_empty());
    }
}
