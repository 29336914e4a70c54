//! Concurrent votes on one feature.

use std::thread;

use featureboard::Board;

use crate::test_utils::feature_with;

#[test]
fn concurrent_votes_are_all_counted() {
    let board = Board::in_memory();
    let id = feature_with(&board, 0, 0.0, 0);

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let board = board.clone();
            let id = id.clone();
            thread::spawn(move || {
                for i in 0..50u32 {
                    board.upvote(&id).unwrap();
                    board.rate(&id, f64::from((t + i) % 5 + 1), 0.0).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let f = board.get(&id).unwrap();
    assert_eq!(f.upvotes, 400);
    assert_eq!(f.rating_count, 400);
    assert!(f.aggregates_consistent());
}
