use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredsError {
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("invalid credentials data in the clipboard")]
    UnrecognizedSnippet,

    #[error("profile not updated: {profile}")]
    PersistenceFailure {
        profile: String,
        #[source]
        source: anyhow::Error,
    },
}
