use std::{env::var, path::PathBuf, sync::Arc};

use dotenv::dotenv;
use eyre::{Error, WrapErr as _};
use log::info;
use model::ids::DayId;

const DEFAULT_RUST_LOG: &str = "info";

#[derive(Clone, Debug)]
pub struct Env(Arc<EnvInner>);

#[derive(Clone, Debug)]
pub struct EnvInner {
    fixture: PathBuf,
    today: Option<DayId>,
    rust_log: String,
}

impl Env {
    pub fn fixture(&self) -> &PathBuf {
        &self.0.fixture
    }

    /// Configured "today", or the local date when not overridden.
    pub fn today(&self) -> DayId {
        self.0.today.unwrap_or_else(DayId::today)
    }

    pub fn today_override(&self) -> Option<DayId> {
        self.0.today
    }

    pub fn rust_log(&self) -> &str {
        &self.0.rust_log
    }

    pub fn load() -> Result<Env, Error> {
        if let Err(err) = dotenv() {
            info!("Failed to load .env file: {}", err);
        }
        Env::from_vars(|name| var(name).ok())
    }

    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Env, Error> {
        let today = get("SCHEDULE_TODAY")
            .map(|value| {
                value
                    .parse::<DayId>()
                    .wrap_err_with(|| format!("SCHEDULE_TODAY is not a date: {}", value))
            })
            .transpose()?;

        Ok(Env(Arc::new(EnvInner {
            fixture: get("SCHEDULE_FIXTURE")
                .map(PathBuf::from)
                .ok_or_else(|| eyre::eyre!("SCHEDULE_FIXTURE is not set"))?,
            today,
            rust_log: get("RUST_LOG").unwrap_or_else(|| DEFAULT_RUST_LOG.to_owned()),
        })))
    }
}
