//! Application state shared across handlers

use std::sync::Arc;

use minijinja::Environment;
use sqlx::MySqlPool;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: MySqlPool,
    templates: Environment<'static>,
}

impl AppState {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                pool,
                templates: crate::render::environment(),
            }),
        }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.inner.pool
    }

    pub fn templates(&self) -> &Environment<'static> {
        &self.inner.templates
    }
}
