use crate::client::models::request::{ContentType, Tone};

#[derive(Debug, Clone)]
pub enum Message {
    // Form edits
    ContentTypeSelected(ContentType),
    NicheChanged(String),
    ToneSelected(Tone),
    WordCountChanged(String),
    KeywordsChanged(String),
    CtaChanged(String),
    // Request lifecycle
    SubmitGeneration,
    GenerationFinished(Result<String, String>),
    // Result panel
    CopyGenerated,
    // Notification bar
    DismissNotifications,
}
