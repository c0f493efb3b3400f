use crate::application::presenter::TopNRange;
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::ops::RangeInclusive;

const SETTINGS_FILE: &str = "config/dashboard";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub data_source: DataSourceSettings,
    pub server: ServerSettings,
    pub filters: FilterSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSourceSettings {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FilterSettings {
    pub first_year: i32,
    pub last_year: i32,
    pub top_salespeople_min: usize,
    pub top_salespeople_max: usize,
    pub top_salespeople_default: usize,
}

impl FilterSettings {
    pub fn years(&self) -> RangeInclusive<i32> {
        self.first_year..=self.last_year
    }

    pub fn top_range(&self) -> TopNRange {
        TopNRange {
            min: self.top_salespeople_min,
            max: self.top_salespeople_max,
            default: self.top_salespeople_default,
        }
    }
}

fn with_defaults() -> anyhow::Result<ConfigBuilder<DefaultState>> {
    Ok(config::Config::builder()
        .set_default("data_source.url", "https://labdados.com/produtos")?
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("filters.first_year", 2020_i64)?
        .set_default("filters.last_year", 2023_i64)?
        .set_default("filters.top_salespeople_min", 2_i64)?
        .set_default("filters.top_salespeople_max", 10_i64)?
        .set_default("filters.top_salespeople_default", 5_i64)?)
}

/// Load settings from `config/dashboard.*`; the file is optional.
pub fn load_settings() -> anyhow::Result<Settings> {
    let settings = with_defaults()?
        .add_source(config::File::with_name(SETTINGS_FILE).required(false))
        .build()?;

    let settings: Settings = settings.try_deserialize()?;
    validate(&settings)?;
    Ok(settings)
}

fn validate(settings: &Settings) -> anyhow::Result<()> {
    let filters = &settings.filters;
    if filters.first_year > filters.last_year {
        anyhow::bail!(
            "filters.first_year ({}) is after filters.last_year ({})",
            filters.first_year,
            filters.last_year
        );
    }
    if filters.top_salespeople_min > filters.top_salespeople_max {
        anyhow::bail!("filters.top_salespeople_min is above filters.top_salespeople_max");
    }
    Ok(())
}
