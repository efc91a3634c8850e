use chessformer::chess::piece::PieceKind;
use chessformer::chess::rules::Rules;
use chessformer::core::board::Board;
use chessformer::core::coord::Coord;
use chessformer::scenario::loader::parse_board;
use chessformer::scenario::MovesLike;

fn board(rows: &[&str]) -> Board {
    parse_board(&rows.join("\n")).unwrap()
}

/// Destinations reachable in one move, in scan order.
fn destinations(b: &Board, piece: PieceKind) -> Vec<Coord> {
    let rules = Rules::new(piece);
    let mut out = Vec::new();
    for y in 1..=b.height() as i32 {
        for x in 1..=b.width() as i32 {
            let to = Coord::new(x, y);
            if rules.is_legal(b, to - b.player()) {
                out.push(to);
            }
        }
    }
    out
}

#[test]
fn capture_replaces_the_piece_with_the_player() {
    let mut b = board(&["@ $"]);
    assert!(Rules::new(PieceKind::Queen).attempt_move(&mut b, Coord::new(2, 0)));
    assert_eq!(b.to_string(), "  @");
    assert_eq!(b.player(), Coord::new(3, 1));
    assert_eq!(b.remaining_pieces(), 0);
}

#[test]
fn storage_is_restored_when_the_player_leaves() {
    let rules = Rules::new(PieceKind::King);
    let mut b = board(&["@.$"]);

    assert!(rules.attempt_move(&mut b, Coord::new(1, 0)));
    assert_eq!(b.to_string(), " +$");
    assert!(rules.attempt_move(&mut b, Coord::new(1, 0)));
    assert_eq!(b.to_string(), " .@");
}

#[test]
fn illegal_moves_leave_the_board_untouched() {
    let b = board(&["#####", "#@*$#", "#####"]);
    for piece in PieceKind::ALL {
        let rules = Rules::new(piece);
        for dy in -2..=2 {
            for dx in -3..=3 {
                let mut copy = b.clone();
                let moved = rules.attempt_move(&mut copy, Coord::new(dx, dy));
                assert!(!moved, "{piece} moved by ({dx}, {dy})");
                assert_eq!(copy, b);
            }
        }
    }
}

#[test]
fn zero_delta_and_off_board_are_refused() {
    let b = board(&["@ ", "  "]);
    let rules = Rules::new(PieceKind::Queen);
    assert!(!rules.is_legal(&b, Coord::ORIGIN));
    assert!(!rules.is_legal(&b, Coord::new(-1, 0)));
    assert!(!rules.is_legal(&b, Coord::new(0, 2)));
}

#[test]
fn sliders_stop_at_the_first_occupied_cell() {
    let b = board(&["@ $ $"]);
    assert_eq!(
        destinations(&b, PieceKind::Rook),
        vec![Coord::new(2, 1), Coord::new(3, 1)]
    );
}

#[test]
fn each_piece_has_its_own_reach() {
    let b = board(&["   ", " @ ", "   "]);
    let all_but_centre: Vec<Coord> = (1..=3)
        .flat_map(|y| (1..=3).map(move |x| Coord::new(x, y)))
        .filter(|&c| c != Coord::new(2, 2))
        .collect();

    assert_eq!(destinations(&b, PieceKind::Queen), all_but_centre);
    assert_eq!(destinations(&b, PieceKind::King), all_but_centre);
    assert_eq!(
        destinations(&b, PieceKind::Rook),
        vec![
            Coord::new(2, 1),
            Coord::new(1, 2),
            Coord::new(3, 2),
            Coord::new(2, 3)
        ]
    );
    assert_eq!(
        destinations(&b, PieceKind::Bishop),
        vec![
            Coord::new(1, 1),
            Coord::new(3, 1),
            Coord::new(1, 3),
            Coord::new(3, 3)
        ]
    );
    assert!(destinations(&b, PieceKind::Knight).is_empty());
}

#[test]
fn knight_jumps_over_walls() {
    let b = board(&["@# ", "## ", "   "]);
    assert_eq!(
        destinations(&b, PieceKind::Knight),
        vec![Coord::new(3, 2), Coord::new(2, 3)]
    );
    assert!(destinations(&b, PieceKind::Queen).is_empty());
}

#[test]
fn king_cannot_reach_two_squares_away() {
    let b = board(&["@ $"]);
    assert!(!Rules::new(PieceKind::King).is_legal(&b, Coord::new(2, 0)));
    assert!(Rules::new(PieceKind::Queen).is_legal(&b, Coord::new(2, 0)));
}

#[test]
fn piece_names_parse_case_insensitively() {
    assert_eq!("Rook".parse::<PieceKind>().unwrap(), PieceKind::Rook);
    assert_eq!(" knight ".parse::<PieceKind>().unwrap(), PieceKind::Knight);
    assert!("pawn".parse::<PieceKind>().is_err());
    assert_eq!(PieceKind::default(), PieceKind::Queen);
}
