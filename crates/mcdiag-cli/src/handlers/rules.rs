use crate::presentation::Renderer;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(renderer: &impl Renderer) -> Result<()> {
    renderer.render(presenters::present_rules(mcdiag_engine::builtin_rules()))
}
