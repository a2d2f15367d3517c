use bitflags::bitflags;
use pocket_arcade_core as game;
use yew::prelude::*;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq)]
    pub(crate) struct MouseButtons: u16 {
        const LEFT    = 1;
        const RIGHT   = 1 << 1;
        const MIDDLE  = 1 << 2;
        const BACK    = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl HasUpdate for game::Result<game::MarkOutcome> {
    fn has_update(self) -> bool {
        self.map_or_else(
            |err| {
                log::error!("flag rejected: {}", err);
                false
            },
            |outcome| outcome.has_update(),
        )
    }
}

impl HasUpdate for game::Result<game::RevealOutcome> {
    fn has_update(self) -> bool {
        self.map_or_else(
            |err| {
                log::error!("reveal rejected: {}", err);
                false
            },
            |outcome| outcome.has_update(),
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Press(game::CellIndex, MouseButtons),
    Release(game::CellIndex),
    Leave,
}

fn cell_class(view: game::CellView) -> Classes {
    use game::CellView::*;
    classes!(
        "cell",
        match view {
            Hidden => classes!(),
            Revealed(count) => classes!("open", format!("num-{}", count)),
            Flagged => classes!("flag"),
            Mine => classes!("open", "mine"),
            TriggeredMine => classes!("open", "mine", "oops"),
            Misflagged => classes!("flag", "wrong"),
        }
    )
}

fn status_line(field: &game::MineField) -> String {
    match field.state() {
        game::FieldState::Active => format!("Mines left: {}", field.mines_left()),
        game::FieldState::Won => "Congratulations! You won!".to_string(),
        game::FieldState::Lost => "Game Over!".to_string(),
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct MinefieldProps {
    pub seed: u64,
    pub config: game::MinefieldConfig,
}

pub(crate) struct MinefieldView {
    field: game::MineField,
    pressed: Option<(game::CellIndex, MouseButtons)>,
}

impl MinefieldView {
    fn release(&mut self, index: game::CellIndex) -> bool {
        match self.pressed.take() {
            Some((pos, buttons)) if pos == index && buttons.contains(MouseButtons::LEFT) => {
                log::debug!("reveal cell: {}", index);
                self.field.reveal(index).has_update()
            }
            Some((pos, buttons)) if pos == index && buttons.contains(MouseButtons::RIGHT) => {
                log::debug!("flag cell: {}", index);
                self.field.flag(index).has_update()
            }
            _ => false,
        }
    }
}

impl Component for MinefieldView {
    type Message = Msg;
    type Properties = MinefieldProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut rng = game::seeded_rng(ctx.props().seed);
        Self {
            field: game::MineField::random(ctx.props().config, &mut rng),
            pressed: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        log::trace!("minefield msg: {:?}", msg);
        match msg {
            Msg::Press(index, buttons) => {
                self.pressed = Some((index, buttons));
                false
            }
            Msg::Release(index) => self.release(index),
            Msg::Leave => {
                self.pressed = None;
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (rows, cols) = self.field.size();

        html! {
            <div>
                <p class="status">{status_line(&self.field)}</p>
                <table class="minefield">
                    {
                        for (0..rows).map(|row| html! {
                            <tr>
                                {
                                    for (0..cols).map(|col| {
                                        let index = game::coords_to_index((row, col), (rows, cols));
                                        let view = self.field.cell_view(index).unwrap_or(game::CellView::Hidden);
                                        let class = cell_class(view);
                                        let onmousedown = ctx.link().callback(move |e: MouseEvent| {
                                            Msg::Press(index, MouseButtons::from_bits_truncate(e.buttons()))
                                        });
                                        let onmouseup = ctx.link().callback(move |_: MouseEvent| Msg::Release(index));
                                        let onmouseleave = ctx.link().callback(|_: MouseEvent| Msg::Leave);
                                        html! {
                                            <td {class} {onmousedown} {onmouseup} {onmouseleave}>
                                                {view.label().map(|count| count.to_string()).unwrap_or_default()}
                                            </td>
                                        }
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
