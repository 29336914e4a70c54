//! Client optimistic protocol end to end.

use featureboard::{ClientError, FeatureInput, LoadSource, Mutation, Outcome};

use crate::test_utils::{client, feature_with};

#[test]
fn upvote_confirmed_by_server() {
    let (board, mut client) = client();
    let id = feature_with(&board, 5, 0.0, 0);
    client.refresh().unwrap();

    client.upvote(&id).unwrap();
    client.upvote(&id).unwrap();
    assert_eq!(client.get(&id).unwrap().upvotes, 7);
    assert_eq!(board.get(&id).unwrap().upvotes, 7);
}

#[test]
fn failed_upvote_restores_snapshot() {
    let (board, mut client) = client();
    let id = feature_with(&board, 5, 0.0, 0);
    client.refresh().unwrap();
    let snapshot = client.get(&id).unwrap().clone();

    client.transport().offline.set(true);
    let err = client.upvote(&id).unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(client.get(&id).unwrap(), &snapshot);
    assert_eq!(board.get(&id).unwrap().upvotes, 5);
}

#[test]
fn failed_rating_restores_snapshot_and_memory() {
    let (board, mut client) = client();
    let id = feature_with(&board, 0, 9.0, 2);
    client.refresh().unwrap();
    client.rate(&id, 3.0).unwrap();
    let snapshot = client.get(&id).unwrap().clone();
    assert_eq!(snapshot.user_rating, 3.0);

    client.transport().offline.set(true);
    assert!(client.rate(&id, 5.0).is_err());
    assert_eq!(client.get(&id).unwrap(), &snapshot);

    client.transport().offline.set(false);
    let view = client.rate(&id, 5.0).unwrap();
    assert_eq!((view.rating_total, view.rating_count), (14.0, 3));
}

#[test]
fn server_rejection_rolls_back() {
    let (board, mut client) = client();
    let id = feature_with(&board, 1, 0.0, 0);
    client.refresh().unwrap();
    let snapshot = client.get(&id).unwrap().clone();

    // Deleted behind the client's back: the server answers 404.
    board.delete(&id).unwrap();
    assert!(matches!(
        client.upvote(&id),
        Err(ClientError::NotFound { .. })
    ));
    assert_eq!(client.get(&id).unwrap(), &snapshot);
}

#[test]
fn invalid_rating_never_reaches_server() {
    let (board, mut client) = client();
    let id = feature_with(&board, 0, 0.0, 0);
    client.refresh().unwrap();
    let sent = client.transport().requests.get();

    assert!(matches!(
        client.rate(&id, 6.0),
        Err(ClientError::InvalidRating { .. })
    ));
    assert_eq!(client.transport().requests.get(), sent);
    assert_eq!(board.get(&id).unwrap().rating_count, 0);
}

#[test]
fn server_result_wins_over_prediction() {
    let (board, mut client) = client();
    let id = feature_with(&board, 0, 0.0, 0);
    client.refresh().unwrap();

    // Another voter upvotes after our refresh.
    board.upvote(&id).unwrap();

    let pending = client.begin(&id, Mutation::Upvote).unwrap();
    assert_eq!(client.get(&id).unwrap().upvotes, 1);
    let server = client.dispatch(&pending).unwrap();
    let view = client.settle(&pending, &Outcome::Confirmed(server));
    assert_eq!(view.upvotes, 2);
    assert_eq!(client.get(&id).unwrap().upvotes, 2);
}

#[test]
fn offline_start_shows_catalog() {
    let (_board, mut client) = client();
    client.transport().offline.set(true);
    assert_eq!(client.refresh().unwrap(), LoadSource::Fallback);
    let titles: Vec<&str> = client.features().iter().map(|v| v.title.as_str()).collect();
    assert!(titles.contains(&"GPT-5"));
}

#[test]
fn added_feature_is_listed_first() {
    let (_board, mut client) = client();
    client.add(&FeatureInput::titled("First")).unwrap();
    client.add(&FeatureInput::titled("Second")).unwrap();
    assert_eq!(client.features()[0].title, "Second");
}
