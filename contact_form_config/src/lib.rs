use std::path::Path;

use anyhow::Context;
use config::{File, FileFormat};
use contact_form_models::contact_form::ContactFormField;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    let sources = paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    from_sources(&sources)
}

/// Merge toml documents into a config. Later documents override earlier ones.
pub fn from_sources(sources: &[impl AsRef<str>]) -> anyhow::Result<Config> {
    sources
        .iter()
        .fold(config::Config::builder(), |builder, source| {
            builder.add_source(File::from_str(source.as_ref(), FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub form: FormConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    pub title: String,
    pub first_name: FieldConfig,
    pub last_name: FieldConfig,
    pub email: FieldConfig,
    pub message: FieldConfig,
}

impl FormConfig {
    pub fn field(&self, field: ContactFormField) -> &FieldConfig {
        match field {
            ContactFormField::FirstName => &self.first_name,
            ContactFormField::LastName => &self.last_name,
            ContactFormField::Email => &self.email,
            ContactFormField::Message => &self.message,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldConfig {
    pub label: String,
    pub placeholder: String,
}
