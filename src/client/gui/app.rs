use iced::{Application, Command, Element, Theme};
use std::sync::Arc;

use crate::client::models::app_state::GeneratorAppState;
use crate::client::models::messages::Message;
use crate::client::services::generation_service::GenerationService;
use crate::config::ClientConfig;

pub struct GeneratorApp {
    pub state: GeneratorAppState,
    pub service: Arc<GenerationService>,
}

impl Application for GeneratorApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let config = ClientConfig::from_env();
        log::info!("generation endpoint: {}", config.generation_endpoint);
        let app = GeneratorApp {
            state: GeneratorAppState::default(),
            service: Arc::new(GenerationService::new(config)),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "Copyforge".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        self.state.update(message, &self.service)
    }

    fn view(&self) -> Element<Message> {
        crate::client::gui::views::generator::view(&self.state)
    }
}
