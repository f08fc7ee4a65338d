use crate::client::models::request::{ContentType, GenerationRequest, Tone};

/// Raw form values as the user typed them. No validation happens here; the
/// fields are assigned one at a time from the UI messages and read back as a
/// request snapshot on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub content_type: ContentType,
    pub niche: String,
    pub tone: Tone,
    pub word_count: String,
    pub keywords: String,
    pub cta: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            content_type: ContentType::default(),
            niche: String::new(),
            tone: Tone::default(),
            word_count: "150".to_string(),
            keywords: String::new(),
            cta: String::new(),
        }
    }
}

impl FormState {
    pub fn snapshot(&self) -> GenerationRequest {
        GenerationRequest {
            content_type: self.content_type,
            niche: self.niche.clone(),
            tone: self.tone,
            word_count: self.word_count.clone(),
            keywords: self.keywords.clone(),
            cta: self.cta.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = FormState::default();
        assert_eq!(form.content_type, ContentType::BlogPost);
        assert_eq!(form.tone, Tone::Friendly);
        assert_eq!(form.word_count, "150");
        assert!(form.niche.is_empty());
        assert!(form.keywords.is_empty());
        assert!(form.cta.is_empty());
    }

    #[test]
    fn test_snapshot_copies_current_values() {
        let mut form = FormState::default();
        form.content_type = ContentType::ProductDescription;
        form.niche = "Health".to_string();
        form.keywords = "vitamins".to_string();
        let snapshot = form.snapshot();
        assert_eq!(snapshot.content_type, ContentType::ProductDescription);
        assert_eq!(snapshot.niche, "Health");
        assert_eq!(snapshot.keywords, "vitamins");
        assert_eq!(snapshot.word_count, "150");
        // later edits must not leak into an existing snapshot
        form.niche = "Finance".to_string();
        assert_eq!(snapshot.niche, "Health");
    }
}
