use serde::Deserialize;

/// Embedded base64 payload in a response part.
#[derive(Deserialize, Debug, Clone)]
pub struct InlineData {
    pub data: Option<String>,
    #[serde(rename = "mimeType")]
    pub mime_type: Option<String>,
}
