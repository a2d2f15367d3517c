use clap::Parser;
use pocket_arcade_core::MinefieldConfig;
use wasm_bindgen::prelude::*;

mod app;
mod canvas;
mod merge;
mod minefield;
mod scroller;
mod snake;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Game mounted when the page loads
    #[arg(short, long, value_enum, default_value_t = app::GameKind::Minefield)]
    game: app::GameKind,

    /// Delay between snake ticks, in milliseconds
    #[arg(long)]
    snake_tick_ms: Option<u32>,

    /// Side length of the minefield
    #[arg(long)]
    field_size: Option<u8>,

    /// Number of mines on the minefield
    #[arg(long)]
    mines: Option<u16>,
}

impl Args {
    fn minefield_config(&self) -> MinefieldConfig {
        let classic = MinefieldConfig::CLASSIC;
        let size = self.field_size.map_or(classic.size, |side| (side, side));
        let mines = self.mines.unwrap_or(classic.mines);
        MinefieldConfig::checked(size, mines).unwrap_or_else(|err| {
            log::warn!("{}: {:?} with {} mines, using the classic field", err, size, mines);
            classic
        })
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("seed: {:?}, game: {:?}", args.seed, args.game);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    let props = app::ArcadeProps {
        seed: args.seed,
        initial_game: args.game,
        snake_tick_ms: args.snake_tick_ms,
        minefield: args.minefield_config(),
    };

    log::debug!("App started");
    yew::Renderer::<app::ArcadeView>::with_root_and_props(root, props).render();
}
