use std::fs;

use chessformer::chess::piece::PieceKind;
use chessformer::chess::rules::Rules;
use chessformer::core::coord::Coord;
use chessformer::scenario::{SearchConfig, SearchError};
use chessformer::scenarios;
use chessformer::search::solve_puzzle;
use chessformer::solution::report::REPORT_FORMAT_VERSION;
use chessformer::solution::{
    decode_square, encode_square, read_report, read_solution_file, replay, write_report,
    write_solution_file, SearchReport, Solution,
};

#[test]
fn squares_use_letter_columns_and_digit_rows() {
    assert_eq!(encode_square(Coord::new(1, 1)), *b"a1");
    assert_eq!(encode_square(Coord::new(26, 9)), *b"z9");
    assert_eq!(decode_square(b'c', b'3'), Some(Coord::new(3, 3)));
    assert_eq!(decode_square(b'`', b'1'), None);
    assert_eq!(decode_square(b'a', b'0'), None);
    assert_eq!(decode_square(b'{', b'1'), None);
}

#[test]
fn parse_accepts_concatenated_moves() {
    let s = Solution::parse(" b1c3\n").unwrap();
    assert_eq!(s.moves(), &[Coord::new(2, 1), Coord::new(3, 3)]);
    assert_eq!(s.to_string(), "b1c3");
    assert!(Solution::parse("").unwrap().is_empty());
}

#[test]
fn parse_rejects_malformed_strings() {
    assert!(matches!(
        Solution::parse("b1c"),
        Err(SearchError::InvalidSolution { .. })
    ));
    assert!(matches!(
        Solution::parse("b1C3"),
        Err(SearchError::InvalidSolution { .. })
    ));
}

#[test]
fn replay_yields_one_frame_per_move_plus_start() {
    let p = scenarios::corridor().unwrap();
    let rules = Rules::new(p.piece);
    let frames = replay(&p.board, &rules, &Solution::parse("d2f2").unwrap()).unwrap();

    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0], p.board);
    assert_eq!(frames[1].to_string(), "#######\n#  @ $#\n#######");
    assert_eq!(frames[2].remaining_pieces(), 0);
}

#[test]
fn replay_rejects_an_illegal_move() {
    let p = scenarios::corridor().unwrap();
    let rules = Rules::new(p.piece);
    // f2 is screened by the piece on d2.
    let err = replay(&p.board, &rules, &Solution::parse("f2").unwrap()).unwrap_err();
    assert!(matches!(err, SearchError::InvalidSolution { .. }));

    let queen = Rules::new(PieceKind::Queen);
    assert!(replay(&p.board, &queen, &Solution::parse("a1").unwrap()).is_err());
}

#[test]
fn solution_file_holds_a_single_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solution.txt");
    let sol = Solution::parse("d2f2").unwrap();

    write_solution_file(&path, &sol).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "d2f2\n");
    assert_eq!(read_solution_file(&path).unwrap(), sol);
}

#[test]
fn unwritable_solution_path_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("solution.txt");
    let err = write_solution_file(&path, &Solution::default()).unwrap_err();
    match err {
        SearchError::Io { stage, .. } => assert_eq!(stage, "solution_file_create"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn report_survives_a_json_round_trip() {
    let p = scenarios::storage_step().unwrap();
    let config = SearchConfig::default();
    let out = solve_puzzle(&p, config).unwrap();
    let mut report = SearchReport::new(&p, &config, &out);
    // Keep the float exactly representable so equality survives the text form.
    report.stats.elapsed_secs = 0.5;

    assert_eq!(report.format_version, REPORT_FORMAT_VERSION);
    assert_eq!(report.solution.as_deref(), Some("b1c1"));
    assert!(report.solved);
    assert_eq!(report.piece, PieceKind::King);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    write_report(&path, &report).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"piece\": \"king\""));
    assert_eq!(read_report(&path).unwrap(), report);
}

#[test]
fn report_with_unknown_version_is_rejected() {
    let p = scenarios::walled_off().unwrap();
    let config = SearchConfig::default();
    let out = solve_puzzle(&p, config).unwrap();
    let mut report = SearchReport::new(&p, &config, &out);
    assert!(report.solution.is_none());
    report.format_version = REPORT_FORMAT_VERSION + 1;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    write_report(&path, &report).unwrap();
    assert!(matches!(
        read_report(&path),
        Err(SearchError::InvalidSolution { .. })
    ));
}
