//! Board scenario tests
//!
//! End-to-end checks through the public facade: server-side aggregation,
//! the optimistic client protocol, durability across reopen, concurrent
//! voting, and the HTTP route table.
//!
//! ```bash
//! cargo test --test board_scenarios
//! ```

mod test_utils;

mod aggregation;
mod concurrency;
mod durability;
mod http_routes;
mod optimistic;
