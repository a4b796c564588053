use std::sync::Arc;

use uuid::Uuid;

use crate::config::Config;
use crate::slider::SliderConfig;

/// Per-form context handed to every component of one assessment form.
///
/// Replaces page-global state: each form instance gets its own id and shares
/// the configuration it was built with.
#[derive(Debug, Clone)]
pub struct FormContext {
    id: Uuid,
    config: Arc<Config>,
}

impl FormContext {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn slider_config(&self) -> SliderConfig {
        self.config.slider.clone()
    }
}

impl Default for FormContext {
    fn default() -> Self {
        Self::new(Arc::new(Config::default()))
    }
}
