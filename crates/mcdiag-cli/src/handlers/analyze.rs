use crate::config::Config;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

pub fn handle(
    path: Option<PathBuf>,
    config_path: &Path,
    scope: &str,
    use_custom: bool,
    renderer: &impl Renderer,
) -> Result<()> {
    let (source, bytes) = read_input(path)?;
    let blob = decode(bytes, &source);

    let config = if use_custom {
        Some(Config::load_from(config_path).context("Failed to load custom rules")?)
    } else {
        None
    };
    let custom_rules = config.as_ref().and_then(|c| c.custom_rules(scope));

    tracing::info!(
        source = %source,
        bytes = blob.len(),
        scope,
        custom_rules = custom_rules.map_or(0, |r| r.len()),
        "analyzing log"
    );

    let report = mcdiag_engine::evaluate(&blob, custom_rules);
    renderer.render(presenters::present_report(&source, &report))
}

fn read_input(path: Option<PathBuf>) -> Result<(String, Vec<u8>)> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("Failed to read log file: {}", path.display()))?;
            Ok((path.display().to_string(), bytes))
        }
        _ => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read log from stdin")?;
            Ok(("stdin".to_string(), bytes))
        }
    }
}

// Launcher logs are UTF-8 in practice; stray bytes from native crashes are replaced.
fn decode(bytes: Vec<u8>, source: &str) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(source, "log is not valid UTF-8, replacing invalid sequences");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}
