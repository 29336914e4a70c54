//! Shared fixtures.

use std::cell::Cell;
use std::sync::Arc;

use featureboard::server::http::{HttpRequest, HttpResponse};
use featureboard::{
    Board, FeatureBoard, FeatureId, FeatureInput, LocalTransport, MemoryKv, Transport,
    TransportError, VoterRatings,
};

/// Transport that forwards to a local board until switched off.
pub struct Switchable {
    inner: LocalTransport,
    pub offline: Cell<bool>,
    pub requests: Cell<usize>,
}

impl Transport for Switchable {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.set(self.requests.get() + 1);
        if self.offline.get() {
            return Err(TransportError::new("network unreachable"));
        }
        self.inner.send(request)
    }
}

/// A client over a fresh in-memory board.
pub fn client() -> (Board, FeatureBoard<Switchable>) {
    let board = Board::in_memory();
    let transport = Switchable {
        inner: LocalTransport::new(board.executor().clone()),
        offline: Cell::new(false),
        requests: Cell::new(0),
    };
    let voter = VoterRatings::new(Arc::new(MemoryKv::new()));
    (board, FeatureBoard::new(transport, voter).with_year(2025))
}

/// Create a feature on `board` with the given counters.
pub fn feature_with(board: &Board, upvotes: u64, total: f64, count: u64) -> FeatureId {
    let created = board.create(FeatureInput::titled("GPT-5")).unwrap();
    board
        .update(
            &created.id,
            FeatureInput {
                upvotes: Some(upvotes),
                rating_total: Some(total),
                rating_count: Some(count),
                ..FeatureInput::default()
            },
        )
        .unwrap();
    created.id
}
