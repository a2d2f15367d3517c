#![cfg(target_arch = "wasm32")]

use pocket_arcade_core::*;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn seeded_games_run_under_wasm() {
    let mut rng = seeded_rng(11);
    let field = MineField::random(MinefieldConfig::CLASSIC, &mut rng);
    assert_eq!(field.total_mines(), 15);

    let mut scroller = SideScroller::new(ScrollerConfig::CLASSIC, seeded_rng(12));
    scroller.start();
    let mut ticks = 0;
    while scroller.step() == FrameOutcome::Running {
        ticks += 1;
    }
    assert_eq!(ticks, 27);

    let mut board = MergeBoard::new(MergeConfig::CLASSIC, seeded_rng(13));
    for direction in Direction::ALL {
        board.slide(direction);
    }
    assert!(board.max_tile() >= 2);
}
