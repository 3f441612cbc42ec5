use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_memory::core::{Board, GameSnapshot, MatchGame};
use tui_memory::types::{GameAction, GameConfig, GridSize, PlayerCount, Symbol, Theme, TICK_MS};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

/// Every non-final pair-attempt: first all misses, then all but one match.
fn play_until_last_pair(game: &mut MatchGame, snap: &mut GameSnapshot) {
    let pairs = game.board().len() / 2;

    // Neighbouring pairs never match; each miss rotates the turn.
    for k in 0..pairs - 1 {
        let _ = game.apply_action(GameAction::Select(2 * k + 1));
        let _ = game.apply_action(GameAction::Select(2 * k + 2));
        for _ in 0..70 {
            let _ = game.tick(TICK_MS);
        }
        game.snapshot_into(snap);
    }
    // Stop one pair short of the end so no summary gets built.
    for k in 0..pairs - 1 {
        let _ = game.select_tile(2 * k);
        let _ = game.select_tile(2 * k + 1);
        let _ = game.tick(1000);
        game.snapshot_into(snap);
    }
}

#[test]
fn select_and_tick_do_not_allocate() {
    // Tiles 2k and 2k+1 share symbol k.
    let symbols = (0..36).map(|i| Symbol(i / 2)).collect();
    let board = Board::from_symbols(GridSize::Six, symbols).unwrap();
    let config = GameConfig::new(PlayerCount::new(2).unwrap(), Theme::Numbers, GridSize::Six);
    let mut game = MatchGame::from_board(config, board.clone(), 1);
    let mut snap = GameSnapshot::default();
    game.snapshot_into(&mut snap);

    // Warm-up on a copy so one-time setup doesn't trip the gate.
    let mut warm = MatchGame::from_board(config, board, 1);
    play_until_last_pair(&mut warm, &mut snap);

    let allocs = with_alloc_counting(|| play_until_last_pair(&mut game, &mut snap));

    assert_eq!(allocs, 0);
    assert_eq!(game.moves(), 34);
    assert_eq!(game.matched_count(), 34);
    assert!(!game.game_over());
}
