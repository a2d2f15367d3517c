use pocket_arcade_core::*;

fn labels(field: &MineField, indices: &[CellIndex]) -> Vec<MineCell> {
    indices.iter().map(|&index| field.cell(index).unwrap()).collect()
}

#[test]
fn minefield_reveal_sequence_is_reproducible() {
    let layout = MineLayout::from_mine_indices((10, 10), &[0, 11, 22]).unwrap();
    let mut field = MineField::new(layout);

    assert_eq!(field.reveal(1).unwrap(), RevealOutcome::Revealed);
    assert_eq!(field.reveal(2).unwrap(), RevealOutcome::Revealed);
    assert_eq!(field.reveal(10).unwrap(), RevealOutcome::Revealed);
    assert_eq!(
        labels(&field, &[1, 2, 10]),
        [MineCell::Revealed(2), MineCell::Revealed(1), MineCell::Revealed(2)]
    );

    // the far corner floods everything else that is safe
    assert_eq!(field.reveal(99).unwrap(), RevealOutcome::Won);
    assert_eq!(&field.revealed()[..7], [1, 2, 10, 99, 88, 89, 98]);
    assert_eq!(field.revealed().len(), 97);
    assert_eq!(field.cell(12).unwrap(), MineCell::Revealed(2));
    assert_eq!(field.cell(33).unwrap(), MineCell::Revealed(1));
    assert!(field.is_game_over());
}

#[test]
fn minefield_loss_after_flags() {
    let layout = MineLayout::from_mine_indices((10, 10), &[0, 11, 22]).unwrap();
    let mut field = MineField::new(layout);

    field.flag(0).unwrap();
    assert_eq!(field.reveal(0).unwrap(), RevealOutcome::NoChange);
    assert_eq!(field.mines_left(), 2);

    assert_eq!(field.reveal(11).unwrap(), RevealOutcome::HitMine);
    assert_eq!(field.cell_view(11).unwrap(), CellView::TriggeredMine);
    assert_eq!(field.cell_view(22).unwrap(), CellView::Mine);
    assert_eq!(field.cell_view(0).unwrap(), CellView::Flagged);
    assert_eq!(field.reveal(50).unwrap(), RevealOutcome::NoChange);
}

#[test]
fn random_minefield_is_playable_to_the_end() {
    let mut rng = seeded_rng(99);
    let mut field = MineField::random(MinefieldConfig::CLASSIC, &mut rng);
    assert_eq!(field.total_mines(), 15);

    let mut outcome = RevealOutcome::NoChange;
    for index in 0..100 {
        outcome = field.reveal(index).unwrap();
        if outcome.is_terminal() {
            break;
        }
    }
    assert!(outcome.is_terminal());
    assert!(field.is_game_over());
}

#[test]
fn merge_board_left_move_merges_and_spawns_one_tile() {
    let mut board = MergeBoard::from_rows(
        [[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        MergeConfig::CLASSIC,
        ScriptedRandom::new([0.5, 0.0]),
    );

    assert_eq!(board.slide(Direction::Left), SlideOutcome::Moved);

    let row0: Vec<_> = board.cells().row(0).to_vec();
    assert_eq!(row0, [4, 0, 0, 0]);
    assert_eq!(board.score(), 4);
    assert_eq!(board.cells().iter().filter(|&&tile| tile != 0).count(), 2);
    assert_eq!(board.tile((2, 0)), Some(2));
}

#[test]
fn merge_board_tiles_stay_powers_of_two() {
    let mut board = MergeBoard::new(MergeConfig::CLASSIC, seeded_rng(5));
    let mut previous_score = 0;

    for step in 0..500 {
        let outcome = board.slide(Direction::ALL[step % 4]);
        assert!(board.score() >= previous_score);
        previous_score = board.score();
        assert!(
            board
                .cells()
                .iter()
                .all(|&tile| tile == 0 || (tile >= 2 && tile.is_power_of_two()))
        );
        if outcome == SlideOutcome::GameOver {
            assert!(board.is_game_over());
            break;
        }
    }
}

#[test]
fn snake_grows_only_when_eating() {
    let config = SnakeConfig::CLASSIC;
    // food lands three cells ahead of the head
    let mut arena = SnakeArena::new(config, ScriptedRandom::new([0.578125, 0.5]));
    assert_eq!(arena.food(), Point::new(23, 20));

    assert_eq!(arena.tick(), TickOutcome::Moved);
    assert_eq!(arena.tick(), TickOutcome::Moved);
    assert_eq!(arena.length(), 1);
    assert_eq!(arena.tick(), TickOutcome::Ate);
    assert_eq!(arena.length(), 2);
    assert!(config.contains(arena.food()));

    for _ in 0..5 {
        arena.tick();
    }
    assert_eq!(arena.length(), 2);
}

#[test]
fn scroller_without_flaps_falls_out_after_fixed_ticks() {
    let mut scroller = SideScroller::new(ScrollerConfig::CLASSIC, seeded_rng(1));
    assert!(scroller.start());
    assert_eq!(scroller.bird().y, 200.0);

    let mut ticks = 0;
    let outcome = loop {
        ticks += 1;
        let outcome = scroller.step();
        if outcome != FrameOutcome::Running {
            break outcome;
        }
    };

    assert_eq!(outcome, FrameOutcome::Crashed);
    assert_eq!(ticks, 28);
    assert!(scroller.bird().y > 400.0);
    assert_eq!(scroller.score(), 0);
    assert_eq!(scroller.phase(), ScrollerPhase::Over);
}
