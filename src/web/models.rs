use serde::Deserialize;

/// Body of the talk-to-a-senior form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TalkRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}
