mod activity;
mod app;
mod clock;
mod config;
mod geometry;
mod overlap;
mod planner;
mod store;
mod theme;
mod tick;
mod views;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let settings = config::load();
    app::run(settings)
}
