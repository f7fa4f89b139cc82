use std::sync::Arc;

use wardrobe_domain::ports::{EquipPrimitives, RefreshPrimitive};
use wardrobe_domain::services::{Catalog, LockManager};
use wardrobe_domain::RuntimeConfig;

use crate::{Metrics, Store};

/// Optional host collaborators. A missing equip/strip binding switches the
/// engine to splicing the equipped collection directly; a missing refresh
/// binding is skipped.
#[derive(Clone, Default)]
pub struct HostBindings {
    pub equip: Option<Arc<dyn EquipPrimitives>>,
    pub refresh: Option<Arc<dyn RefreshPrimitive>>,
}

pub struct AppState {
    pub config: RuntimeConfig,
    pub catalog: Arc<Catalog>,
    pub locks: Arc<LockManager>,
    pub host: HostBindings,
    pub store: Store,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: RuntimeConfig, catalog: Catalog, store: Store) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
            locks: Arc::new(LockManager::new()),
            host: HostBindings::default(),
            store,
            metrics: Arc::new(Metrics::default()),
        }
    }

    pub fn with_host(mut self, host: HostBindings) -> Self {
        self.host = host;
        self
    }
}
