use chessformer::core::coord::Coord;
use chessformer::scenario::loader::parse_board;
use chessformer::scenario::{ResourceLimits, SearchError};
use chessformer::search::frontier::{ExploredStore, Frontier};
use chessformer::search::node::NodeArena;
use chessformer::search::resources::ResourceTracker;
use chessformer::search::visited::VisitedSet;
use chessformer::solution::encode_path;

#[test]
fn child_copies_the_parent_board() {
    let board = parse_board("@ $").unwrap();
    let mut tracker = ResourceTracker::new(ResourceLimits::default());
    let mut arena = NodeArena::new();

    let root = arena.create_root(&board, &mut tracker).unwrap();
    let child = arena
        .create_child(root, Coord::new(1, 0), &tracker)
        .unwrap();
    assert_eq!(child.depth(), 1);
    assert_eq!(child.parent(), Some(root));
    assert_eq!(child.delta(), Coord::new(1, 0));
    assert_eq!(child.board(), &board);
    assert_eq!(arena.get(root).unwrap().depth(), 0);
    assert!(arena.get(root).unwrap().parent().is_none());

    arena.discard(child);
    assert_eq!(arena.created(), 2);
    assert_eq!(arena.released(), 1);
    assert_eq!(arena.live(), 1);
}

#[test]
fn double_release_is_refused() {
    let board = parse_board("@$").unwrap();
    let mut tracker = ResourceTracker::new(ResourceLimits::default());
    let mut arena = NodeArena::new();

    let root = arena.create_root(&board, &mut tracker).unwrap();
    assert_eq!(tracker.counts().nodes, 1);
    assert!(arena.release(root, &mut tracker).is_some());
    assert!(arena.release(root, &mut tracker).is_none());
    assert_eq!(arena.released(), 1);
    assert_eq!(tracker.counts().nodes, 0);

    match arena.create_child(root, Coord::new(1, 0), &tracker) {
        Err(SearchError::DanglingNode { id }) => assert_eq!(id, root),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn path_is_rebuilt_root_to_goal() {
    let board = parse_board("@  $").unwrap();
    let mut tracker = ResourceTracker::new(ResourceLimits::default());
    let mut arena = NodeArena::new();

    let root = arena.create_root(&board, &mut tracker).unwrap();
    let a = arena.create_child(root, Coord::new(1, 0), &tracker).unwrap();
    let a = arena.admit(a, &mut tracker).unwrap();
    let b = arena.create_child(a, Coord::new(2, 0), &tracker).unwrap();
    let b = arena.admit(b, &mut tracker).unwrap();

    assert_eq!(arena.ancestor_count(b), 2);
    // Boards were never moved, so every destination is computed from the root square.
    let sol = encode_path(&arena, b).unwrap();
    assert_eq!(sol.to_string(), "b1c1");
}

#[test]
fn stores_hand_back_every_id() {
    let tracker = ResourceTracker::new(ResourceLimits::default());
    let mut frontier = Frontier::new();
    let mut explored = ExploredStore::new();
    for id in 0..4 {
        frontier.push(id, &tracker).unwrap();
    }
    assert_eq!(frontier.pop(), Some(0));
    explored.push(0, &tracker).unwrap();
    explored.push(1, &tracker).unwrap();

    assert_eq!(frontier.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(frontier.drain().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(explored.drain().collect::<Vec<_>>(), vec![1, 0]);
    assert!(frontier.is_empty());
    assert!(explored.is_empty());
}

#[test]
fn visited_set_keys_on_the_whole_grid() {
    let mut tracker = ResourceTracker::new(ResourceLimits::default());
    let mut visited = VisitedSet::new();
    let a = parse_board("@ $").unwrap();
    let b = parse_board(" @$").unwrap();

    assert!(visited.insert(&a, &mut tracker).unwrap());
    assert!(!visited.insert(&a, &mut tracker).unwrap());
    assert!(visited.insert(&b, &mut tracker).unwrap());
    assert_eq!(visited.len(), 2);
    assert_eq!(tracker.counts().visited, 2);

    visited.clear();
    assert!(visited.is_empty());
}

#[test]
fn visited_limit_is_enforced() {
    let mut tracker = ResourceTracker::new(ResourceLimits {
        max_visited: 1,
        ..ResourceLimits::default()
    });
    let mut visited = VisitedSet::new();
    visited
        .insert(&parse_board("@ $").unwrap(), &mut tracker)
        .unwrap();
    let err = visited
        .insert(&parse_board(" @$").unwrap(), &mut tracker)
        .unwrap_err();
    assert!(matches!(
        err,
        SearchError::LimitExceeded {
            metric: "visited",
            ..
        }
    ));
}
