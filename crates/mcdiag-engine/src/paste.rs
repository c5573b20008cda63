use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static PASTE_LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https:/{2}paste.ee/p/[^\s/]+").unwrap());

/// A paste.ee link found in a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasteLink {
    /// The link as posted (`https://paste.ee/p/<id>`).
    pub url: String,
    /// Plain-text download URL (`https://paste.ee/r/<id>`).
    pub raw_url: String,
}

/// First paste.ee link in `message`, if any.
pub fn find_paste_link(message: &str) -> Option<PasteLink> {
    let found = PASTE_LINK_REGEX.find(message)?;
    let url = found.as_str().to_string();
    let raw_url = url.replace("/p/", "/r/");
    Some(PasteLink { url, raw_url })
}
