//! Halo slider demo - a mini player screen with an enlarging seek thumb

mod app;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title("Halo Slider")
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .window_size(iced::Size::new(520.0, 200.0))
        .run()
}
