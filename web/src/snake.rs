use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use pocket_arcade_core as game;
use game::{ArcadeRng, Direction, SnakeArena, SnakeConfig};
use yew::prelude::*;

use crate::canvas::CanvasSurface;
use crate::utils::on_keydown;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Tick,
    Steer(Direction),
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct SnakeProps {
    pub seed: u64,
    #[prop_or_default]
    pub tick_interval_ms: Option<u32>,
}

pub(crate) struct SnakeView {
    arena: SnakeArena<ArcadeRng>,
    canvas: NodeRef,
    surface: Option<CanvasSurface>,
    next_tick: Option<Timeout>,
    _keys: EventListener,
}

impl SnakeView {
    fn draw(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            self.arena.render(surface);
        }
    }

    /// Fixed-delay scheduling: the next tick is armed only once this one is done.
    fn schedule_tick(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        let delay = self.arena.config().tick_interval_ms;
        self.next_tick = Some(Timeout::new(delay, move || link.send_message(Msg::Tick)));
    }
}

impl Component for SnakeView {
    type Message = Msg;
    type Properties = SnakeProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let config = match props.tick_interval_ms {
            Some(tick_interval_ms) => SnakeConfig::CLASSIC.with_tick_interval(tick_interval_ms),
            None => SnakeConfig::CLASSIC,
        };

        let link = ctx.link().clone();
        let keys = on_keydown(move |event| match Direction::from_key(&event.key()) {
            Some(direction) => {
                link.send_message(Msg::Steer(direction));
                true
            }
            None => false,
        });

        Self {
            arena: SnakeArena::new(config, game::seeded_rng(props.seed)),
            canvas: NodeRef::default(),
            surface: None,
            next_tick: None,
            _keys: keys,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Tick => {
                self.arena.tick();
                self.draw();
                self.schedule_tick(ctx);
            }
            Msg::Steer(direction) => self.arena.steer(direction),
        }
        false
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let config = self.arena.config();
        let width = (config.width_px() as u32).to_string();
        let height = (config.height_px() as u32).to_string();

        html! {
            <canvas ref={self.canvas.clone()} {width} {height}/>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        self.surface = CanvasSurface::from_node(&self.canvas);
        if self.surface.is_none() {
            log::error!("snake canvas unavailable, not starting");
            return;
        }
        self.draw();
        self.schedule_tick(ctx);
    }
}
