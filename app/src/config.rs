use anyhow::{Context, anyhow};
use jsonwebtoken::{DecodingKey, EncodingKey};
use models::schemas::leaderboard::{DrawPolicy, RankingStrategy};
use std::{fmt::Display, ops::Deref, str::FromStr, sync::Arc};

use crate::core::StatsAggregator;

pub struct ConfigInner {
    pub db_url: String,
    pub host: String,
    pub port: u16,
    pub allowed_origin: String,
    pub max_connections: u32,
    pub encoding_key: EncodingKey,
    pub decoding_key: DecodingKey,
    /// Leaderboard order used when a request does not ask for one.
    pub ranking: RankingStrategy,
    pub draws: DrawPolicy,
}

impl ConfigInner {
    /// Settings with the given signing secret and defaults for everything else.
    pub fn with_secret(db_url: &str, secret: &str) -> Self {
        Self {
            db_url: db_url.to_string(),
            host: "127.0.0.1".to_string(),
            port: 8000,
            allowed_origin: "http://localhost:3000".to_string(),
            max_connections: 100,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ranking: RankingStrategy::default(),
            draws: DrawPolicy::default(),
        }
    }
}

#[derive(Clone)]
pub struct Config(Arc<ConfigInner>);

fn required(key: &str) -> anyhow::Result<String> {
    std::env::var(key).with_context(|| format!("{key} is not set in .env file"))
}

fn optional<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse()
            .map_err(|e| anyhow!("{key} has an invalid value: {e}")),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn new(inner: ConfigInner) -> Config {
        Self(Arc::new(inner))
    }

    pub fn from_env() -> anyhow::Result<Config> {
        let secret = required("JWT_SECRET")?;

        let v = ConfigInner {
            db_url: required("DATABASE_URL")?,
            host: required("HOST")?,
            port: required("PORT")?
                .parse()
                .context("PORT is not a number")?,
            allowed_origin: required("ALLOWED_ORIGIN")?,
            max_connections: optional("DB_MAX_CONNECTIONS", 100)?,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ranking: optional("LEADERBOARD_RANKING", RankingStrategy::default())?,
            draws: optional("DRAW_POLICY", DrawPolicy::default())?,
        };

        Ok(Self::new(v))
    }

    pub fn get_server_url(&self) -> String {
        format!("{}:{}", self.0.host, self.0.port)
    }

    pub fn stats_aggregator(&self) -> StatsAggregator {
        StatsAggregator::new(self.ranking, self.draws)
    }
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
