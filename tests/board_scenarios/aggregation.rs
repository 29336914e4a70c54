//! Server-side rating and upvote aggregation.

use featureboard::{Board, Error};

use crate::test_utils::feature_with;

#[test]
fn first_rating_on_empty_aggregate() {
    let board = Board::in_memory();
    let id = feature_with(&board, 0, 0.0, 0);
    let f = board.rate(&id, 4.0, 0.0).unwrap();
    assert_eq!((f.rating_total, f.rating_count, f.rating), (4.0, 1, 4.0));
}

#[test]
fn revision_replaces_previous_vote() {
    let board = Board::in_memory();
    let id = feature_with(&board, 0, 4.0, 1);
    let f = board.rate(&id, 2.0, 4.0).unwrap();
    assert_eq!((f.rating_total, f.rating_count, f.rating), (2.0, 1, 2.0));
}

#[test]
fn new_vote_joins_running_average() {
    let board = Board::in_memory();
    let id = feature_with(&board, 0, 9.0, 2);
    let f = board.rate(&id, 3.0, 0.0).unwrap();
    assert_eq!((f.rating_total, f.rating_count, f.rating), (12.0, 3, 4.0));
}

#[test]
fn revision_on_empty_aggregate_counts_one_vote() {
    let board = Board::in_memory();
    let id = feature_with(&board, 0, 0.0, 0);
    let f = board.rate(&id, 5.0, 3.0).unwrap();
    assert_eq!((f.rating_total, f.rating_count, f.rating), (2.0, 1, 2.0));
}

#[test]
fn out_of_range_rating_changes_nothing() {
    let board = Board::in_memory();
    let id = feature_with(&board, 0, 9.0, 2);
    let before = board.get(&id).unwrap();
    for bad in [6.0, 0.0, -1.0, f64::NAN] {
        assert!(matches!(
            board.rate(&id, bad, 0.0),
            Err(Error::InvalidRating { .. })
        ));
    }
    assert_eq!(board.get(&id).unwrap(), before);
}

#[test]
fn garbage_previous_rating_counts_as_new_vote() {
    let board = Board::in_memory();
    let id = feature_with(&board, 0, 4.0, 1);
    let f = board.rate(&id, 2.0, 17.0).unwrap();
    assert_eq!((f.rating_total, f.rating_count), (6.0, 2));
}

#[test]
fn upvotes_accumulate() {
    let board = Board::in_memory();
    let id = feature_with(&board, 5, 0.0, 0);
    board.upvote(&id).unwrap();
    assert_eq!(board.upvote(&id).unwrap().upvotes, 7);
}

#[test]
fn rating_stays_bounded_over_a_long_sequence() {
    let board = Board::in_memory();
    let id = feature_with(&board, 0, 0.0, 0);
    let mut previous = 0.0;
    for step in 0..200u32 {
        let rating = f64::from(step % 5 + 1);
        // Every third vote comes from a voter who lost their memory.
        let prev = if step % 3 == 0 { 0.0 } else { previous };
        let f = board.rate(&id, rating, prev).unwrap();
        assert!((0.0..=5.0).contains(&f.rating));
        assert!(f.aggregates_consistent());
        previous = rating;
    }
}
