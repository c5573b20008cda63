use crate::config::Config;
use crate::error::Error;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use crate::presentation::view_models::CustomRuleAction;
use anyhow::{Context, Result};
use std::path::Path;

pub fn add(
    config_path: &Path,
    scope: &str,
    label: &str,
    trigger: &str,
    renderer: &impl Renderer,
) -> Result<()> {
    if label.trim().is_empty() {
        anyhow::bail!("Custom rule label must not be empty");
    }
    if trigger.is_empty() {
        tracing::warn!(label, "empty trigger matches every log");
    }

    let mut config = Config::load_from(config_path)?;
    let previous = config.add_custom_rule(scope, label, trigger);
    config
        .save_to(config_path)
        .with_context(|| format!("Failed to save {}", config_path.display()))?;

    let action = if previous.is_some() {
        CustomRuleAction::Updated
    } else {
        CustomRuleAction::Added
    };
    tracing::info!(scope, label, %action, "custom rule saved");

    renderer.render(presenters::present_custom_change(
        scope, action, label, trigger,
    ))
}

pub fn list(config_path: &Path, scope: &str, renderer: &impl Renderer) -> Result<()> {
    let config = Config::load_from(config_path)?;
    renderer.render(presenters::present_custom_rules(
        scope,
        config.custom_rules(scope),
    ))
}

pub fn remove(config_path: &Path, scope: &str, label: &str, renderer: &impl Renderer) -> Result<()> {
    let mut config = Config::load_from(config_path)?;

    let removed = match config.remove_custom_rule(scope, label) {
        Ok(rule) => rule,
        Err(Error::NotFound(what)) => anyhow::bail!("Cannot remove '{}': {}", label, what),
        Err(err) => return Err(err.into()),
    };

    config
        .save_to(config_path)
        .with_context(|| format!("Failed to save {}", config_path.display()))?;
    tracing::info!(scope, label, "custom rule removed");

    renderer.render(presenters::present_custom_change(
        scope,
        CustomRuleAction::Removed,
        &removed.label,
        &removed.trigger,
    ))
}
