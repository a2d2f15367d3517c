use gloo::events::EventListener;
use gloo::render::{AnimationFrame, request_animation_frame};
use pocket_arcade_core as game;
use game::{ArcadeRng, ScrollerConfig, SideScroller};
use yew::prelude::*;

use crate::canvas::CanvasSurface;
use crate::utils::on_keydown;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Frame,
    Start,
    Flap,
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct ScrollerProps {
    pub seed: u64,
}

pub(crate) struct ScrollerView {
    scroller: SideScroller<ArcadeRng>,
    canvas: NodeRef,
    surface: Option<CanvasSurface>,
    frame: Option<AnimationFrame>,
    _keys: EventListener,
}

impl ScrollerView {
    fn draw(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            self.scroller.render(surface);
        }
    }

    fn request_frame(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.frame = Some(request_animation_frame(move |_timestamp| {
            link.send_message(Msg::Frame)
        }));
    }
}

impl Component for ScrollerView {
    type Message = Msg;
    type Properties = ScrollerProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let keys = on_keydown(move |event| {
            if event.code() == "Space" {
                link.send_message(Msg::Flap);
                true
            } else {
                false
            }
        });

        Self {
            scroller: SideScroller::new(ScrollerConfig::CLASSIC, game::seeded_rng(ctx.props().seed)),
            canvas: NodeRef::default(),
            surface: None,
            frame: None,
            _keys: keys,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Start => {
                if self.scroller.start() {
                    self.draw();
                    self.request_frame(ctx);
                }
            }
            Msg::Flap => {
                self.scroller.flap();
            }
            Msg::Frame => {
                self.frame = None;
                let outcome = self.scroller.step();
                self.draw();
                if outcome.wants_next_frame() {
                    self.request_frame(ctx);
                }
            }
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = self.scroller.config();
        let width = (config.width as u32).to_string();
        let height = (config.height as u32).to_string();
        let onclick = ctx.link().callback(|_: MouseEvent| Msg::Start);

        html! {
            <canvas ref={self.canvas.clone()} {width} {height} {onclick}/>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.surface = CanvasSurface::from_node(&self.canvas);
            self.draw();
        }
    }
}
