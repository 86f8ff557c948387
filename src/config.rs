//! Config file loading and validation.

use anyhow::{Context, Result};
use mediaclean_common::LanguageResolver;
use mediaclean_schema::{read_record, ConfigFile, VersionedRecord};
use std::path::Path;

/// Locations searched when no config path is given, in order.
pub const DEFAULT_CONFIG_PATHS: &[&str] = &[
    "./mediaclean.json",
    "~/.config/mediaclean/config.json",
    "/etc/mediaclean/config.json",
];

/// Load, upgrade and validate a config file.
pub fn load_config(path: &Path, resolver: &LanguageResolver) -> Result<ConfigFile> {
    let config: ConfigFile = read_record(path)
        .with_context(|| format!("Failed to load config file: {:?}", path))?;

    validate_config(&config, resolver)
        .with_context(|| format!("Invalid config file: {:?}", path))?;

    if config.was_upgraded() {
        tracing::warn!(
            "Config {:?} uses schema v{} (current is v{}); run `mediaclean upgrade-config {}` to rewrite it",
            path,
            config.deserialized_version,
            config.schema_version,
            path.display()
        );
    }

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(
    custom_path: Option<&Path>,
    resolver: &LanguageResolver,
) -> Result<ConfigFile> {
    if let Some(path) = custom_path {
        return load_config(path, resolver);
    }

    for path_str in DEFAULT_CONFIG_PATHS {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config {:?}", path);
            return load_config(path, resolver);
        }
    }

    tracing::debug!("No config file found, using defaults");
    Ok(ConfigFile::default())
}

/// Validate configuration
pub fn validate_config(config: &ConfigFile, resolver: &LanguageResolver) -> Result<()> {
    let language = &config.language;

    if config.process.remove_unwanted_tracks && language.keep_languages.is_empty() {
        anyhow::bail!("remove_unwanted_tracks is enabled but keep_languages is empty");
    }

    for tag in &language.keep_languages {
        if resolver.resolve(tag).is_none() {
            anyhow::bail!("Unknown language in keep_languages: '{}'", tag);
        }
    }

    if config.process.set_unknown_language && resolver.resolve(&language.default_language).is_none()
    {
        anyhow::bail!("Unknown default_language: '{}'", language.default_language);
    }

    for format in &config.convert.reencode_video {
        if format.format.trim().is_empty() {
            anyhow::bail!("reencode_video entry has an empty format");
        }
    }

    for extension in &config.convert.remux_extensions {
        if !extension.starts_with('.') || extension.len() < 2 {
            anyhow::bail!(
                "remux_extensions entries need a leading dot: '{}'",
                extension
            );
        }
    }

    Ok(())
}
