use contact_form_config::Config;
use contact_form_core_submission_contracts::ContactFormSubmissionHandler;
use types::{Submit, Templates, Validation, View};

use crate::view::ContactFormView;

pub mod types;

/// Builds the services of the contact form from the loaded configuration.
#[derive(Debug, Clone)]
pub struct Provider {
    config: Config,
    templates: Templates,
}

impl Provider {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            templates: Templates::new()?,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn validation(&self) -> Validation {
        Validation::default()
    }

    pub fn submit<Handler>(&self, handler: Handler) -> Submit<Handler>
    where
        Handler: ContactFormSubmissionHandler,
    {
        Submit::new(self.validation(), handler)
    }

    pub fn view(&self) -> View {
        ContactFormView::new(self.templates.clone(), self.config.form.clone())
    }
}
