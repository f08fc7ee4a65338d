use iced::Application;
fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    env_logger::init();
    copyforge::client::gui::app::GeneratorApp::run(iced::Settings::default())
}
