use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct PasteLinkViewModel {
    pub url: String,
    pub raw_url: String,
}

// Plain output is the bare URL so it can be fed to curl.
impl fmt::Display for PasteLinkViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.raw_url)
    }
}
