use iced::widget::{Button, Container, Row, Space, Text};
use iced::{Element, Font, Length};

use crate::client::models::messages::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
}

/// One user-facing status message: validation warnings, generation outcomes
/// and the copy confirmation. Rendering lives here; the orchestrator only
/// pushes values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub detail: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            title: title.into(),
            detail: detail.into(),
        }
    }

    pub fn success(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.into(),
            detail: detail.into(),
        }
    }

    pub fn warning(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            title: title.into(),
            detail: detail.into(),
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self.level {
            NotificationLevel::Info => "ℹ️",
            NotificationLevel::Success => "✅",
            NotificationLevel::Warning => "⚠️",
        }
    }

    pub fn color(&self) -> iced::Color {
        match self.level {
            NotificationLevel::Info => iced::Color::from_rgb(0.2, 0.6, 1.0),
            NotificationLevel::Success => iced::Color::from_rgb(0.2, 0.8, 0.4),
            NotificationLevel::Warning => iced::Color::from_rgb(0.9, 0.6, 0.1),
        }
    }
}

pub fn notification_bar(notifications: &[Notification]) -> Element<'_, Message> {
    // Show only the latest notification as an alert bar (single message at a time)
    if let Some(notification) = notifications.iter().next_back() {
        let bg_color = notification.color();
        Container::new(
            Row::new()
                .spacing(12)
                .align_items(iced::Alignment::Center)
                .push(
                    Text::new(notification.emoji())
                        .font(Font::with_name("Segoe UI Emoji"))
                        .size(18)
                        .style(iced::Color::WHITE),
                )
                .push(
                    Text::new(&notification.title)
                        .size(16)
                        .style(iced::Color::WHITE),
                )
                .push(
                    Text::new(&notification.detail)
                        .size(14)
                        .style(iced::Color::from_rgba(1.0, 1.0, 1.0, 0.85)),
                )
                .push(Space::new(Length::Fill, Length::Fixed(0.0)))
                .push(
                    Button::new(Text::new("✕").size(14).style(iced::Color::WHITE))
                        .on_press(Message::DismissNotifications)
                        .style(iced::theme::Button::Text)
                        .padding([4, 8]),
                ),
        )
        .padding([10, 16])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            move |_: &iced::Theme| iced::widget::container::Appearance {
                background: Some(iced::Background::Color(bg_color)),
                text_color: Some(iced::Color::WHITE),
                border: iced::Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                shadow: iced::Shadow {
                    offset: iced::Vector::new(0.0, 4.0),
                    blur_radius: 12.0,
                    color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                },
            },
        )))
        .into()
    } else {
        // Empty placeholder
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    }
}
