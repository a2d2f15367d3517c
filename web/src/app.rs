use pocket_arcade_core::MinefieldConfig;
use yew::prelude::*;

use crate::merge::MergeView;
use crate::minefield::MinefieldView;
use crate::scroller::ScrollerView;
use crate::snake::SnakeView;
use crate::utils::js_random_seed;

#[derive(clap::ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum GameKind {
    Minefield,
    Snake,
    Merge,
    Scroller,
}

impl GameKind {
    pub(crate) const ALL: [Self; 4] = [Self::Minefield, Self::Snake, Self::Merge, Self::Scroller];

    pub(crate) const fn title(self) -> &'static str {
        use GameKind::*;
        match self {
            Minefield => "Minesweeper",
            Snake => "Snake",
            Merge => "2048",
            Scroller => "Flappy Bird",
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct ArcadeProps {
    pub seed: Option<u64>,
    pub initial_game: GameKind,
    pub snake_tick_ms: Option<u32>,
    pub minefield: MinefieldConfig,
}

pub(crate) enum Msg {
    Select(GameKind),
}

/// Owns the mount point and hosts exactly one game at a time.
///
/// Every selection mounts a fresh game under a new key, so the previous one
/// is dropped along with its timers and key listeners.
pub(crate) struct ArcadeView {
    current: GameKind,
    mount: u32,
    seed: u64,
}

impl ArcadeView {
    fn next_seed(ctx: &Context<Self>) -> u64 {
        ctx.props().seed.unwrap_or_else(js_random_seed)
    }

    fn mount_game(&self, ctx: &Context<Self>) -> Html {
        let key = self.mount.to_string();
        let seed = self.seed;
        match self.current {
            GameKind::Minefield => {
                let config = ctx.props().minefield;
                html! { <MinefieldView key={key} {seed} {config}/> }
            }
            GameKind::Snake => {
                let tick_interval_ms = ctx.props().snake_tick_ms;
                html! { <SnakeView key={key} {seed} {tick_interval_ms}/> }
            }
            GameKind::Merge => html! { <MergeView key={key} {seed}/> },
            GameKind::Scroller => html! { <ScrollerView key={key} {seed}/> },
        }
    }
}

impl Component for ArcadeView {
    type Message = Msg;
    type Properties = ArcadeProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            current: ctx.props().initial_game,
            mount: 0,
            seed: Self::next_seed(ctx),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(kind) => {
                log::debug!("mount {:?}", kind);
                self.current = kind;
                self.mount = self.mount.wrapping_add(1);
                self.seed = Self::next_seed(ctx);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="arcade" oncontextmenu={Callback::from(move |e: MouseEvent| e.prevent_default())}>
                <nav>
                    {
                        for GameKind::ALL.into_iter().map(|kind| {
                            let onclick = ctx.link().callback(move |_: MouseEvent| Msg::Select(kind));
                            let class = classes!((kind == self.current).then_some("current"));
                            html! { <button {class} {onclick}>{kind.title()}</button> }
                        })
                    }
                </nav>
                { self.mount_game(ctx) }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn every_game_has_a_hash_name_and_title() {
        for kind in GameKind::ALL {
            assert!(kind.to_possible_value().is_some());
            assert!(!kind.title().is_empty());
        }
        assert_eq!(GameKind::from_str("merge", false), Ok(GameKind::Merge));
    }
}
