use iced::widget::{Button, Column, Container, PickList, Row, Scrollable, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::views::notifications::notification_bar;
use crate::client::models::app_state::GeneratorAppState;
use crate::client::models::messages::Message;
use crate::client::models::presenter::{self, ResultView};
use crate::client::models::request::{ContentType, Tone};

// Color palette shared by both cards
const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18); // Deep navy
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36); // Muted indigo for card bodies
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26); // Input background
const ACCENT_COLOR: Color = Color::from_rgb(0.55, 0.35, 0.95); // Purple accent
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

fn input_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.3, 0.3, 0.4),
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn field_label(label: &str) -> Text<'_> {
    Text::new(label).size(14).style(TEXT_SECONDARY)
}

pub fn view(state: &GeneratorAppState) -> Element<'_, Message> {
    let generating = state.is_generating();

    // Top notification bar
    let notification_area = if !state.notifications.is_empty() {
        Container::new(notification_bar(&state.notifications))
            .width(Length::Fill)
            .padding([8, 12, 0, 12])
    } else {
        Container::new(Space::new(Length::Fill, Length::Fixed(0.0))).width(Length::Fill)
    };

    // ----- Parameters card -----

    let content_type_field = Column::new()
        .spacing(8)
        .push(field_label("Content Type"))
        .push(
            Container::new(
                PickList::new(
                    ContentType::all(),
                    Some(state.form.content_type),
                    Message::ContentTypeSelected,
                )
                .width(Length::Fill)
                .padding(12),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );

    let niche_field = Column::new()
        .spacing(8)
        .push(field_label("Niche *"))
        .push(
            Container::new(
                TextInput::new("e.g., Tech, E-commerce, Health, Crypto", &state.form.niche)
                    .on_input(Message::NicheChanged)
                    .width(Length::Fill)
                    .padding(12)
                    .size(14),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );

    let tone_field = Column::new()
        .spacing(8)
        .push(field_label("Tone / Brand Voice"))
        .push(
            Container::new(
                PickList::new(Tone::all(), Some(state.form.tone), Message::ToneSelected)
                    .width(Length::Fill)
                    .padding(12),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );

    let word_count_field = Column::new()
        .spacing(8)
        .push(field_label("Word Count"))
        .push(
            Container::new(
                TextInput::new("e.g., 150", &state.form.word_count)
                    .on_input(Message::WordCountChanged)
                    .width(Length::Fill)
                    .padding(12)
                    .size(14),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );

    let keywords_field = Column::new()
        .spacing(8)
        .push(field_label("Keywords *"))
        .push(
            Container::new(
                TextInput::new("e.g., Bitcoin, blockchain, investment", &state.form.keywords)
                    .on_input(Message::KeywordsChanged)
                    .on_submit(Message::SubmitGeneration)
                    .width(Length::Fill)
                    .padding(12)
                    .size(14),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );

    let cta_field = Column::new()
        .spacing(8)
        .push(field_label("Call-To-Action (Optional)"))
        .push(
            Container::new(
                TextInput::new("e.g., Sign up now, Learn more", &state.form.cta)
                    .on_input(Message::CtaChanged)
                    .width(Length::Fill)
                    .padding(12)
                    .size(14),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );

    let submit_button = if !generating {
        Button::new(
            Container::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("✨").font(EMOJI_FONT).size(16))
                    .push(
                        Text::new("Generate Content")
                            .font(BOLD_FONT)
                            .size(16)
                            .style(TEXT_PRIMARY),
                    ),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .on_press(Message::SubmitGeneration)
        .style(iced::theme::Button::Primary)
        .width(Length::Fill)
        .padding(16)
    } else {
        Button::new(
            Container::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("⏳").font(EMOJI_FONT).size(16))
                    .push(Text::new("Generating...").size(16).style(TEXT_SECONDARY)),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .style(iced::theme::Button::Secondary)
        .width(Length::Fill)
        .padding(16)
    };

    let parameters_card = Container::new(
        Column::new()
            .spacing(16)
            .padding(32)
            .push(
                Text::new("Content Parameters")
                    .font(BOLD_FONT)
                    .size(22)
                    .style(TEXT_PRIMARY),
            )
            .push(
                Text::new("Customize your content requirements")
                    .size(14)
                    .style(TEXT_SECONDARY),
            )
            .push(Space::new(Length::Fill, Length::Fixed(4.0)))
            .push(content_type_field)
            .push(niche_field)
            .push(tone_field)
            .push(word_count_field)
            .push(keywords_field)
            .push(cta_field)
            .push(Space::new(Length::Fill, Length::Fixed(4.0)))
            .push(submit_button),
    )
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .width(Length::FillPortion(1))
    .height(Length::Fill);

    // ----- Result card -----

    let result_body: Element<Message> =
        match presenter::present(&state.request_state, &state.generated_content) {
            ResultView::Placeholder => Container::new(
                Column::new()
                    .spacing(12)
                    .align_items(Alignment::Center)
                    .push(Text::new("✨").font(EMOJI_FONT).size(32))
                    .push(
                        Text::new("Fill in the parameters and click Generate to create your content")
                            .size(14)
                            .style(TEXT_SECONDARY)
                            .horizontal_alignment(iced::alignment::Horizontal::Center),
                    ),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .into(),
            ResultView::Loading => Container::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("⏳").font(EMOJI_FONT).size(16))
                    .push(
                        Text::new("Generating your content...")
                            .size(14)
                            .style(ACCENT_COLOR),
                    ),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .into(),
            ResultView::Content(content) => {
                let copy_button = Button::new(
                    Container::new(
                        Row::new()
                            .spacing(8)
                            .align_items(Alignment::Center)
                            .push(Text::new("📋").font(EMOJI_FONT).size(14))
                            .push(Text::new("Copy to Clipboard").size(14).style(TEXT_PRIMARY)),
                    )
                    .width(Length::Fill)
                    .center_x(),
                )
                .on_press(Message::CopyGenerated)
                .style(iced::theme::Button::Secondary)
                .width(Length::Fill)
                .padding(12);

                Column::new()
                    .spacing(16)
                    .height(Length::Fill)
                    .push(
                        Container::new(
                            Scrollable::new(
                                Container::new(Text::new(content).size(15).style(TEXT_PRIMARY))
                                    .width(Length::Fill)
                                    .padding(16),
                            )
                            .height(Length::Fill),
                        )
                        .style(iced::theme::Container::Custom(Box::new(input_appearance)))
                        .width(Length::Fill)
                        .height(Length::Fill),
                    )
                    .push(copy_button)
                    .into()
            }
        };

    let result_card = Container::new(
        Column::new()
            .spacing(16)
            .padding(32)
            .height(Length::Fill)
            .push(
                Text::new("Generated Content")
                    .font(BOLD_FONT)
                    .size(22)
                    .style(TEXT_PRIMARY),
            )
            .push(
                Text::new("Your AI-created content will appear here")
                    .size(14)
                    .style(TEXT_SECONDARY),
            )
            .push(Space::new(Length::Fill, Length::Fixed(4.0)))
            .push(result_body),
    )
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .width(Length::FillPortion(1))
    .height(Length::Fill);

    let cards = Row::new()
        .spacing(24)
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(parameters_card)
        .push(result_card);

    let main_content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(notification_area)
        .push(cards);

    Container::new(main_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
