//! Seeded generator tests - golden levels and generation invariants

use tui_warehouse::core::{generate, SessionState};
use tui_warehouse::types::{Direction, Tier, BOARD_MAX, BOARD_MIN};

fn row_digits(row: &[Tier]) -> String {
    row.iter().map(|t| char::from(b'0' + t)).collect()
}

struct Golden {
    seed: &'static str,
    size: u8,
    door_col: i8,
    target: (i8, i8),
    crates: usize,
    first_row: &'static str,
    last_row: &'static str,
}

const GOLDEN: &[Golden] = &[
    Golden {
        seed: "hello.",
        size: 12,
        door_col: 3,
        target: (7, 6),
        crates: 44,
        first_row: "010002111301",
        last_row: "000000030200",
    },
    Golden {
        seed: "",
        size: 9,
        door_col: 0,
        target: (3, 4),
        crates: 20,
        first_row: "010003030",
        last_row: "000002000",
    },
    Golden {
        seed: "warehouse",
        size: 10,
        door_col: 2,
        target: (3, 3),
        crates: 20,
        first_row: "0033200020",
        last_row: "0003000000",
    },
    Golden {
        seed: "crateü€",
        size: 10,
        door_col: 9,
        target: (2, 8),
        crates: 27,
        first_row: "0000000000",
        last_row: "0000010000",
    },
    Golden {
        seed: "999999",
        size: 8,
        door_col: 3,
        target: (1, 6),
        crates: 21,
        first_row: "02002000",
        last_row: "01200000",
    },
];

#[test]
fn test_seed_1234_golden_level() {
    let state = generate("1234").unwrap();
    let rows: Vec<String> = state.board().rows().map(row_digits).collect();
    assert_eq!(
        rows,
        vec![
            "033000200",
            "010300030",
            "000101231",
            "000030202",
            "000003120",
            "000000000",
            "113110000",
            "010020000",
            "300000000",
        ]
    );

    let op = state.operator();
    assert_eq!((op.row, op.col), (8, 4));
    assert_eq!(op.door_col, 4);
    assert_eq!(op.direction, Direction::North);
    assert_eq!(op.target(), (1, 1));
    assert_eq!(state.board().crate_count(), 25);
}

#[test]
fn test_golden_levels() {
    for g in GOLDEN {
        let state = generate(g.seed).unwrap();
        let board = state.board();
        assert_eq!(board.size(), g.size, "size for {:?}", g.seed);

        let op = state.operator();
        assert_eq!(op.door_col, g.door_col, "door for {:?}", g.seed);
        assert_eq!(op.position(), (g.size as i8 - 1, g.door_col));
        assert_eq!(op.target(), g.target, "target for {:?}", g.seed);
        assert_eq!(board.crate_count(), g.crates, "crates for {:?}", g.seed);

        let rows: Vec<String> = board.rows().map(row_digits).collect();
        assert_eq!(rows[0], g.first_row, "first row for {:?}", g.seed);
        assert_eq!(rows[rows.len() - 1], g.last_row, "last row for {:?}", g.seed);
    }
}

#[test]
fn test_long_seed_level() {
    let seed = format!("{}yz", "x".repeat(300));
    let state = generate(&seed).unwrap();
    assert_eq!(state.board().size(), 11);
    assert_eq!(state.operator().door_col, 0);
    assert_eq!(state.operator().target(), (5, 2));
}

#[test]
fn test_same_seed_same_level() {
    for i in 0..50 {
        let seed = format!("seed-{}", i);
        assert_eq!(generate(&seed).unwrap(), generate(&seed).unwrap());
    }
    assert_ne!(
        generate("1234").unwrap().board(),
        generate("1235").unwrap().board()
    );
}

#[test]
fn test_generation_invariants_over_seed_sweep() {
    let mut seen_sizes = [false; (BOARD_MAX + 1) as usize];

    for i in 0..2000 {
        let seed = i.to_string();
        let state = generate(&seed).unwrap();
        let board = state.board();
        let op = state.operator();
        let n = board.size();

        assert!((BOARD_MIN..=BOARD_MAX).contains(&n));
        seen_sizes[n as usize] = true;

        assert_eq!(op.row, board.last_row());
        assert_eq!(op.col, op.door_col);
        assert_eq!(op.direction, Direction::North);
        assert!(board.is_empty_at(op.row, op.col), "operator cell for {:?}", seed);

        let (tr, tc) = op.target();
        assert!(board.is_occupied(tr, tc), "target crate for {:?}", seed);
        assert!(!board.is_border(tr, tc), "target on border for {:?}", seed);

        assert!(board.cells().iter().all(|&t| t <= 3));
        assert_eq!(state.score(), 0);
        assert!(state.is_playing());
        assert!(!state.check_win());
    }

    for n in BOARD_MIN..=BOARD_MAX {
        assert!(seen_sizes[n as usize], "no {}x{} board in sweep", n, n);
    }
}

#[test]
fn test_session_new_matches_generate() {
    let a = SessionState::new("warehouse").unwrap();
    let b = generate("warehouse").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.seed(), "warehouse");
}
