use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// How the application is lodged
///
/// Unrecognised values read as online, which never attracts the
/// non-internet charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum LodgementMode {
    #[default]
    Online,
    /// Paper lodgement, liable for the non-internet charge where one applies
    Offline,
}

impl LodgementMode {
    pub fn code(&self) -> &'static str {
        match self {
            LodgementMode::Online => "online",
            LodgementMode::Offline => "offline",
        }
    }
}

impl From<String> for LodgementMode {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "online" => LodgementMode::Online,
            "offline" => LodgementMode::Offline,
            _ => {
                warn!(lodgement = %value, "Unknown lodgement mode, treating as online");
                LodgementMode::Online
            }
        }
    }
}

impl fmt::Display for LodgementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
