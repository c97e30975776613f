pub mod config;
pub mod favorite;
pub mod list;
pub mod nearby;
pub mod review;
pub mod show;

use anyhow::{Context as _, Result};
use chrono::{Local, NaiveDate};
use eventfinder_core::config::EventfinderConfig;
use eventfinder_core::event::{Event, EventCatalog};
use eventfinder_core::loader::{DataSource, load_catalog};
use eventfinder_core::store::FileStore;
use eventfinder_core::EventfinderError;

/// Everything a command needs: settings, where events come from, and
/// where user state lives.
pub struct Context {
    pub config: EventfinderConfig,
    pub source: DataSource,
    pub store: FileStore,
}

impl Context {
    pub fn load(source_override: Option<&str>) -> Result<Self> {
        let config = EventfinderConfig::load()?;
        let source = match source_override {
            Some(s) => DataSource::parse(s),
            None => config.data_source(),
        };
        let store = config.store();

        Ok(Context {
            config,
            source,
            store,
        })
    }

    pub async fn catalog(&self) -> Result<EventCatalog> {
        load_catalog(&self.source)
            .await
            .with_context(|| format!("Could not load events from {}", self.source))
    }

    /// Current local day; status is always derived against this.
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

pub fn find_event(catalog: &EventCatalog, id: i64) -> Result<&Event> {
    catalog
        .find(id)
        .ok_or_else(|| EventfinderError::EventNotFound(id).into())
}
