//! Reopening a file-backed board.

use std::sync::Arc;

use featureboard::{Board, BoardConfig, FeatureBoard, FileKv, LocalTransport, VoterRatings};

#[test]
fn votes_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let id = {
        let board = Board::open(dir.path()).unwrap();
        let id = board.list().unwrap()[0].id.clone();
        board.rate(&id, 4.0, 0.0).unwrap();
        board.upvote(&id).unwrap();
        id
    };

    let board = Board::open(dir.path()).unwrap();
    let f = board.get(&id).unwrap();
    assert_eq!((f.rating_total, f.rating_count, f.rating), (4.0, 1, 4.0));
    assert_eq!(board.list().unwrap().len(), 6);
}

#[test]
fn voter_memory_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let voter_path = dir.path().join(BoardConfig::default().voter_file);
    let open_client = || {
        let board = Board::open(dir.path()).unwrap();
        let voter = VoterRatings::new(Arc::new(FileKv::open(&voter_path).unwrap()));
        let mut client = FeatureBoard::new(LocalTransport::new(board.executor().clone()), voter);
        client.refresh().unwrap();
        client
    };

    let id = {
        let mut client = open_client();
        let id = client.features()[0].id.clone();
        client.rate(&id, 5.0).unwrap();
        id
    };

    let mut client = open_client();
    assert_eq!(client.get(&id).unwrap().user_rating, 5.0);
    let view = client.rate(&id, 1.0).unwrap();
    assert_eq!((view.rating_total, view.rating_count), (1.0, 1));
}

#[test]
fn seeding_can_be_disabled() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("featureboard.toml"),
        "seed_defaults = false\n",
    )
    .unwrap();
    let board = Board::open(dir.path()).unwrap();
    assert!(board.list().unwrap().is_empty());
}
