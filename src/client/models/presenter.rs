use crate::client::models::app_state::RequestState;

/// What the result panel should show, derived from the request lifecycle and
/// the held content. A failure with previously generated content keeps the
/// content view; the failure text travels through the notification bar only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultView<'a> {
    Placeholder,
    Loading,
    Content(&'a str),
}

pub fn present<'a>(request_state: &'a RequestState, held_content: &'a str) -> ResultView<'a> {
    match request_state {
        RequestState::Generating => ResultView::Loading,
        _ if !held_content.is_empty() => ResultView::Content(held_content),
        _ => ResultView::Placeholder,
    }
}

pub fn can_export(view: ResultView<'_>) -> bool {
    matches!(view, ResultView::Content(_))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_without_content_shows_placeholder() {
        assert_eq!(present(&RequestState::Idle, ""), ResultView::Placeholder);
    }

    #[test]
    fn test_generating_shows_loading() {
        assert_eq!(present(&RequestState::Generating, ""), ResultView::Loading);
        // in-flight requests never show stale content
        assert_eq!(present(&RequestState::Generating, "old"), ResultView::Loading);
    }

    #[test]
    fn test_success_shows_exact_content() {
        let state = RequestState::Succeeded("X".to_string());
        assert_eq!(present(&state, "X"), ResultView::Content("X"));
    }

    #[test]
    fn test_failure_keeps_previous_content_visible() {
        let state = RequestState::Failed("M".to_string());
        assert_eq!(present(&state, "Y"), ResultView::Content("Y"));
    }

    #[test]
    fn test_failure_without_content_shows_placeholder() {
        let state = RequestState::Failed("M".to_string());
        assert_eq!(present(&state, ""), ResultView::Placeholder);
    }

    #[test]
    fn test_export_only_offered_for_content() {
        assert!(can_export(ResultView::Content("X")));
        assert!(!can_export(ResultView::Placeholder));
        assert!(!can_export(ResultView::Loading));
    }
}
