use clap::Parser;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Orientation};
use log::info;

use game_loader::types::{Color, LoaderConfig, PulsingTextConfig};
use game_loader::widgets::{PulsingText, RotatingLoader};

const APP_ID: &str = "io.github.game_loader.demo";

/// game-loader - animated loading-indicator widgets for GTK4
#[derive(Parser, Debug, Clone)]
#[command(name = "game-loader")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Duration of one loader animation step, in milliseconds
    #[arg(long = "duration", default_value = "300")]
    duration_ms: u64,

    /// Pause before each full cycle restarts, in milliseconds
    #[arg(long = "start-delay", default_value = "1000")]
    start_delay_ms: u64,

    /// Peak scale of a growing dot
    #[arg(long = "scale-to", default_value = "1.3")]
    scale_to: f64,

    /// Loader color as hex ARGB (e.g. FFE1E3E6)
    #[arg(long = "color", value_name = "ARGB", value_parser = parse_argb)]
    color: Option<Color>,

    /// Label shown by the pulsing text widget
    #[arg(long = "text", default_value = "Loading")]
    text: String,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

/// Parse a hex ARGB word like "FFE1E3E6" or "#FFE1E3E6"
fn parse_argb(s: &str) -> Result<Color, String> {
    let hex = s.trim_start_matches('#');
    let argb = u32::from_str_radix(hex, 16)
        .map_err(|e| format!("invalid ARGB hex value {s:?}: {e}"))?;
    Ok(Color::from_argb_u32(argb))
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG overrides the -d/--debug flag
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting game-loader demo v{}", env!("CARGO_PKG_VERSION"));

    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(move |app| build_ui(app, &cli));

    // Don't forward our own CLI to GTK
    app.run_with_args::<&str>(&[]);
}

fn build_ui(app: &Application, cli: &Cli) {
    let loader = RotatingLoader::new(LoaderConfig {
        duration_ms: cli.duration_ms,
        start_delay_ms: cli.start_delay_ms,
        scale_to: cli.scale_to,
        color: cli.color.unwrap_or_else(|| LoaderConfig::default().color),
        ..Default::default()
    });

    let text = PulsingText::new(PulsingTextConfig {
        label: cli.text.clone(),
        ..Default::default()
    });

    let content = gtk4::Box::builder()
        .orientation(Orientation::Vertical)
        .spacing(24)
        .halign(gtk4::Align::Center)
        .valign(gtk4::Align::Center)
        .build();
    content.append(&loader.create_widget());
    content.append(&text.create_widget());

    let window = ApplicationWindow::builder()
        .application(app)
        .title("game-loader")
        .default_width(320)
        .default_height(240)
        .child(&content)
        .build();

    window.present();
}
