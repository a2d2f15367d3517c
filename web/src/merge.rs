use gloo::events::EventListener;
use pocket_arcade_core as game;
use game::{ArcadeRng, Direction, MergeBoard, MergeConfig, Tile};
use yew::prelude::*;

use crate::utils::on_keydown;

const TILE_COLORS: [(Tile, &str); 11] = [
    (2, "#eee4da"),
    (4, "#ede0c8"),
    (8, "#f2b179"),
    (16, "#f59563"),
    (32, "#f67c5f"),
    (64, "#f65e3b"),
    (128, "#edcf72"),
    (256, "#edcc61"),
    (512, "#edc850"),
    (1024, "#edc53f"),
    (2048, "#edc22e"),
];

fn tile_background(tile: Tile) -> &'static str {
    if tile == 0 {
        return "#ccc0b3";
    }
    TILE_COLORS
        .iter()
        .find(|&&(value, _)| value == tile)
        .map_or("#3c3a32", |&(_, color)| color)
}

fn tile_text_color(tile: Tile) -> &'static str {
    if tile <= 4 { "#776e65" } else { "#f9f6f2" }
}

fn tile_style(tile: Tile) -> String {
    format!(
        "background-color: {}; color: {};",
        tile_background(tile),
        tile_text_color(tile)
    )
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Slide(Direction),
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct MergeProps {
    pub seed: u64,
}

pub(crate) struct MergeView {
    board: MergeBoard<ArcadeRng>,
    _keys: EventListener,
}

impl Component for MergeView {
    type Message = Msg;
    type Properties = MergeProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let keys = on_keydown(move |event| match Direction::from_key(&event.key()) {
            Some(direction) => {
                link.send_message(Msg::Slide(direction));
                true
            }
            None => false,
        });

        Self {
            board: MergeBoard::new(MergeConfig::CLASSIC, game::seeded_rng(ctx.props().seed)),
            _keys: keys,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Slide(direction) => self.board.slide(direction).has_update(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let status = if self.board.is_active() {
            String::new()
        } else {
            format!("Game Over! Your score: {}", self.board.score())
        };

        html! {
            <div>
                <p class="score">{format!("Score: {}", self.board.score())}</p>
                <p class="status">{status}</p>
                <table class="merge">
                    {
                        for self.board.cells().rows().into_iter().map(|row| html! {
                            <tr>
                                {
                                    for row.iter().map(|&tile| html! {
                                        <td style={tile_style(tile)}>
                                            {(tile != 0).then(|| tile.to_string()).unwrap_or_default()}
                                        </td>
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
            </div>
        }
    }
}
