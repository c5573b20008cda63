use crate::presentation::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, PasteLinkViewModel};
use anyhow::Result;

pub fn handle(message: &str, renderer: &impl Renderer) -> Result<()> {
    let Some(link) = mcdiag_engine::find_paste_link(message) else {
        anyhow::bail!("No paste.ee link found in message");
    };

    tracing::debug!(url = %link.url, raw_url = %link.raw_url, "paste link found");

    renderer.render(CommandResultViewModel::new(PasteLinkViewModel {
        url: link.url,
        raw_url: link.raw_url,
    }))
}
