use crate::client::models::request::GenerationRequest;

/// Required-field gate run before any request leaves the app. Whitespace-only
/// input counts as empty. `wordCount` is deliberately not checked for numeric
/// well-formedness.
pub fn validate(request: &GenerationRequest) -> Result<(), Vec<&'static str>> {
    let mut missing = Vec::new();
    if request.niche.trim().is_empty() {
        missing.push("niche");
    }
    if request.keywords.trim().is_empty() {
        missing.push("keywords");
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::form_state::FormState;

    fn snapshot(niche: &str, keywords: &str) -> GenerationRequest {
        let mut form = FormState::default();
        form.niche = niche.to_string();
        form.keywords = keywords.to_string();
        form.snapshot()
    }

    #[test]
    fn test_valid_when_both_required_fields_present() {
        assert!(validate(&snapshot("Crypto", "Bitcoin")).is_ok());
    }

    #[test]
    fn test_missing_niche_reported() {
        assert_eq!(validate(&snapshot("", "Bitcoin")), Err(vec!["niche"]));
    }

    #[test]
    fn test_missing_keywords_reported() {
        assert_eq!(validate(&snapshot("Crypto", "")), Err(vec!["keywords"]));
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        assert_eq!(
            validate(&snapshot("   ", "\t\n")),
            Err(vec!["niche", "keywords"])
        );
    }

    #[test]
    fn test_word_count_is_not_checked() {
        let mut form = FormState::default();
        form.niche = "Tech".to_string();
        form.keywords = "rust".to_string();
        form.word_count = "not a number".to_string();
        assert!(validate(&form.snapshot()).is_ok());
    }
}
