use clap::Parser;
use druid::{AppLauncher, LocalizedString, PlatformError, WindowDesc};

mod bounds;
mod font;
mod graphics;
mod state;
mod transform;
mod widget;

use state::AppState;
use widget::PlateWidget;

/// Interactive stroke-font text demo. Keys: +/- scale, q/e rotate,
/// wasd move, r reset, b debug overlay, Esc quit.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Text to render (A-Z and spaces; anything else draws as a box)
    #[arg(long, default_value = "NAMEPLATE")]
    text: String,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 900.0)]
    width: f64,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Start with the debug overlay enabled
    #[arg(long)]
    debug: bool,
}

pub fn main() -> Result<(), PlatformError> {
    env_logger::init();
    let args = Args::parse();

    let initial_state = AppState::new(args.text, args.debug);
    log::info!(
        "rendering {:?}, model box {:?}",
        initial_state.text,
        initial_state.model_box
    );

    let main_window = WindowDesc::new(PlateWidget::new())
        .title(LocalizedString::new("Stroke Text Transforms"))
        .window_size((args.width, args.height));

    AppLauncher::with_window(main_window).launch(initial_state)?;

    Ok(())
}
