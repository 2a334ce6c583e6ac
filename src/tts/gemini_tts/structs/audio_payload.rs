/// Audio produced by a successful generation call.
///
/// The data stays base64-encoded end to end; the proxy never decodes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    pub data: String,
    pub mime_type: String,
}
