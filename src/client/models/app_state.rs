use std::sync::Arc;

use iced::Command;

use crate::client::gui::views::notifications::Notification;
use crate::client::models::form_state::FormState;
use crate::client::models::messages::Message;
use crate::client::models::request::GenerationRequest;
use crate::client::models::validator;
use crate::client::services::generation_service::GenerationService;

/// Shown when a failure carries no usable message of its own.
pub const GENERATION_FALLBACK_ERROR: &str = "Failed to generate content. Please try again.";

const NOTIFICATION_DISMISS_MS: u64 = 3500;

/// Lifecycle of the single outstanding generation request. Exactly one value
/// exists at a time; it gates submission and drives the result panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Generating,
    Succeeded(String),
    Failed(String),
}

#[derive(Default)]
pub struct GeneratorAppState {
    pub form: FormState,
    pub request_state: RequestState,
    /// Content of the most recent *succeeded* request. A later failure leaves
    /// it in place so it stays visible and exportable.
    pub generated_content: String,
    pub notifications: Vec<Notification>,
}

impl GeneratorAppState {
    pub fn is_generating(&self) -> bool {
        matches!(self.request_state, RequestState::Generating)
    }

    /// Submission gate. Refuses while a request is in flight and when required
    /// fields are missing (pushing a warning for the latter); otherwise takes
    /// the form snapshot, moves to `Generating` and hands the snapshot back so
    /// the caller can issue exactly one outbound call.
    pub fn begin_submit(&mut self) -> Option<GenerationRequest> {
        if self.is_generating() {
            return None;
        }
        let request = self.form.snapshot();
        if let Err(missing) = validator::validate(&request) {
            self.notifications.push(Notification::warning(
                "Missing Information",
                format!("Please fill in the required fields: {}.", missing.join(", ")),
            ));
            return None;
        }
        self.request_state = RequestState::Generating;
        Some(request)
    }

    /// Applies the outcome of the remote call. Success overwrites the held
    /// content wholesale; failure keeps it and only records the message,
    /// falling back to a generic string when the message is empty.
    pub fn finish_generation(&mut self, outcome: Result<String, String>) {
        match outcome {
            Ok(content) => {
                self.generated_content = content.clone();
                self.request_state = RequestState::Succeeded(content);
                self.notifications.push(Notification::success(
                    "Content Generated!",
                    "Your AI-powered content is ready.",
                ));
            }
            Err(message) => {
                let message = if message.trim().is_empty() {
                    GENERATION_FALLBACK_ERROR.to_string()
                } else {
                    message
                };
                self.request_state = RequestState::Failed(message.clone());
                self.notifications
                    .push(Notification::warning("Generation Failed", message));
            }
        }
    }

    pub fn update(&mut self, message: Message, service: &Arc<GenerationService>) -> Command<Message> {
        match message {
            Message::ContentTypeSelected(content_type) => {
                self.form.content_type = content_type;
            }
            Message::NicheChanged(niche) => {
                self.form.niche = niche;
            }
            Message::ToneSelected(tone) => {
                self.form.tone = tone;
            }
            Message::WordCountChanged(word_count) => {
                self.form.word_count = word_count;
            }
            Message::KeywordsChanged(keywords) => {
                self.form.keywords = keywords;
            }
            Message::CtaChanged(cta) => {
                self.form.cta = cta;
            }
            Message::SubmitGeneration => {
                if self.is_generating() {
                    // a request is already in flight; refuse without touching the network
                    return Command::none();
                }
                return match self.begin_submit() {
                    Some(request) => {
                        log::info!(
                            "submitting generation request: {} / {}",
                            request.content_type,
                            request.niche
                        );
                        let service = service.clone();
                        Command::perform(
                            async move { service.generate(&request).await.map_err(|e| e.to_string()) },
                            Message::GenerationFinished,
                        )
                    }
                    // validation refused the submit and pushed a warning
                    None => dismiss_later(),
                };
            }
            Message::GenerationFinished(outcome) => {
                match &outcome {
                    Ok(content) => log::info!("generation succeeded ({} bytes)", content.len()),
                    Err(message) => log::warn!("generation failed: {}", message),
                }
                self.finish_generation(outcome);
                return dismiss_later();
            }
            Message::CopyGenerated => {
                if self.generated_content.is_empty() {
                    return Command::none();
                }
                self.notifications
                    .push(Notification::info("Copied!", "Content copied to clipboard."));
                return Command::batch(vec![
                    iced::clipboard::write(self.generated_content.clone()),
                    dismiss_later(),
                ]);
            }
            Message::DismissNotifications => {
                self.notifications.clear();
            }
        }
        Command::none()
    }
}

fn dismiss_later() -> Command<Message> {
    Command::perform(
        async {
            tokio::time::sleep(std::time::Duration::from_millis(NOTIFICATION_DISMISS_MS)).await;
            Message::DismissNotifications
        },
        |msg| msg,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::gui::views::notifications::NotificationLevel;
    use crate::client::models::request::{ContentType, Tone};
    use crate::config::ClientConfig;

    fn service() -> Arc<GenerationService> {
        Arc::new(GenerationService::new(ClientConfig {
            generation_endpoint: "http://127.0.0.1:9/unused".to_string(),
            request_timeout_secs: 1,
        }))
    }

    fn valid_state() -> GeneratorAppState {
        let mut state = GeneratorAppState::default();
        state.form.niche = "Crypto".to_string();
        state.form.keywords = "Bitcoin, blockchain".to_string();
        state
    }

    #[test]
    fn test_submit_refused_when_required_fields_missing() {
        let mut state = GeneratorAppState::default();
        assert_eq!(state.begin_submit(), None);
        assert_eq!(state.request_state, RequestState::Idle);
        assert_eq!(state.notifications.len(), 1);
        let warning = &state.notifications[0];
        assert_eq!(warning.level, NotificationLevel::Warning);
        assert!(warning.detail.contains("niche"));
        assert!(warning.detail.contains("keywords"));
    }

    #[test]
    fn test_whitespace_only_fields_refused() {
        let mut state = GeneratorAppState::default();
        state.form.niche = "   ".to_string();
        state.form.keywords = "\t".to_string();
        assert_eq!(state.begin_submit(), None);
        assert_eq!(state.request_state, RequestState::Idle);
    }

    #[test]
    fn test_submit_takes_exact_snapshot() {
        let mut state = valid_state();
        state.form.content_type = ContentType::AdCopy;
        state.form.tone = Tone::Persuasive;
        state.form.cta = "Sign up now".to_string();
        let request = state.begin_submit().expect("submit should be accepted");
        assert_eq!(request.content_type, ContentType::AdCopy);
        assert_eq!(request.niche, "Crypto");
        assert_eq!(request.tone, Tone::Persuasive);
        assert_eq!(request.word_count, "150");
        assert_eq!(request.keywords, "Bitcoin, blockchain");
        assert_eq!(request.cta, "Sign up now");
        assert_eq!(state.request_state, RequestState::Generating);
    }

    #[test]
    fn test_resubmit_while_generating_is_refused() {
        let mut state = valid_state();
        assert!(state.begin_submit().is_some());
        assert_eq!(state.begin_submit(), None);
        assert_eq!(state.request_state, RequestState::Generating);
        // and no validation warning was pushed for the refused attempt
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_success_overwrites_held_content() {
        let mut state = valid_state();
        state.begin_submit();
        state.finish_generation(Ok("Buy crypto today!".to_string()));
        assert_eq!(
            state.request_state,
            RequestState::Succeeded("Buy crypto today!".to_string())
        );
        assert_eq!(state.generated_content, "Buy crypto today!");
    }

    #[test]
    fn test_failure_preserves_previous_success() {
        let mut state = valid_state();
        state.begin_submit();
        state.finish_generation(Ok("Y".to_string()));
        state.begin_submit();
        state.finish_generation(Err("M".to_string()));
        assert_eq!(state.request_state, RequestState::Failed("M".to_string()));
        assert_eq!(state.generated_content, "Y");
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let mut state = valid_state();
        state.begin_submit();
        state.finish_generation(Err(String::new()));
        assert_eq!(
            state.request_state,
            RequestState::Failed(GENERATION_FALLBACK_ERROR.to_string())
        );
        let warning = state.notifications.last().unwrap();
        assert_eq!(warning.detail, GENERATION_FALLBACK_ERROR);
    }

    #[test]
    fn test_failed_state_allows_resubmission() {
        let mut state = valid_state();
        state.begin_submit();
        state.finish_generation(Err("boom".to_string()));
        assert!(state.begin_submit().is_some());
    }

    #[test]
    fn test_copy_emits_one_confirmation() {
        let mut state = valid_state();
        state.generated_content = "X".to_string();
        let _ = state.update(Message::CopyGenerated, &service());
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].level, NotificationLevel::Info);
        assert_eq!(state.notifications[0].title, "Copied!");
    }

    #[test]
    fn test_copy_with_nothing_held_is_a_no_op() {
        let mut state = GeneratorAppState::default();
        let _ = state.update(Message::CopyGenerated, &service());
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_dismiss_clears_notifications() {
        let mut state = GeneratorAppState::default();
        state.begin_submit();
        assert!(!state.notifications.is_empty());
        let _ = state.update(Message::DismissNotifications, &service());
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_full_generation_scenario() {
        let mut state = GeneratorAppState::default();
        state.form.content_type = ContentType::AdCopy;
        state.form.niche = "Crypto".to_string();
        state.form.tone = Tone::Persuasive;
        state.form.keywords = "Bitcoin, blockchain".to_string();
        state.form.cta = "Sign up now".to_string();

        let request = state.begin_submit().expect("submit should be accepted");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "contentType": "AdCopy",
                "niche": "Crypto",
                "tone": "Persuasive",
                "wordCount": "150",
                "keywords": "Bitcoin, blockchain",
                "cta": "Sign up now",
            })
        );

        state.finish_generation(Ok("Buy crypto today!".to_string()));
        assert_eq!(
            state.request_state,
            RequestState::Succeeded("Buy crypto today!".to_string())
        );
        assert_eq!(state.generated_content, "Buy crypto today!");
    }
}
