//! Command dispatch.

use std::sync::Arc;

use featureboard_storage::FeatureStore;
use tracing::{debug, warn};

use crate::bridge::Primitives;
use crate::config::{AccessMode, BoardConfig};
use crate::handlers;
use crate::{Command, Output, Result};

/// Executes [`Command`]s against a feature store.
///
/// Clone is cheap (Arc clone); clones share the same store.
#[derive(Debug, Clone)]
pub struct Executor {
    primitives: Arc<Primitives>,
}

impl Executor {
    /// Create an executor over `store`.
    pub fn new(store: FeatureStore, config: BoardConfig, access: AccessMode) -> Self {
        Self {
            primitives: Arc::new(Primitives::new(store, config, access)),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &BoardConfig {
        &self.primitives.config
    }

    /// Access mode the board was opened with
    pub fn access_mode(&self) -> AccessMode {
        self.primitives.access
    }

    /// Underlying store
    pub fn store(&self) -> &FeatureStore {
        &self.primitives.store
    }

    /// Execute one command.
    pub fn execute(&self, command: Command) -> Result<Output> {
        let name = command.name();
        let write = command.is_write();
        let p = &self.primitives;
        let result = match command {
            Command::ConfigGet => handlers::config::config_get(p),
            Command::FeatureList => handlers::features::feature_list(p),
            Command::FeatureGet { id } => handlers::features::feature_get(p, id),
            Command::FeatureCreate { input } => handlers::features::feature_create(p, input),
            Command::FeatureUpdate { id, input } => {
                handlers::features::feature_update(p, id, input)
            }
            Command::FeatureDelete { id } => handlers::features::feature_delete(p, id),
            Command::FeatureUpvote { id } => handlers::votes::feature_upvote(p, id),
            Command::FeatureRate { id, submission } => {
                handlers::votes::feature_rate(p, id, submission)
            }
            Command::FeatureStar { id, starred } => handlers::votes::feature_star(p, id, starred),
        };
        match &result {
            Ok(_) => debug!(command = name, write, "Executed"),
            Err(e) => warn!(command = name, error = %e, "Command failed"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use featureboard_core::{FeatureId, FeatureInput, RatingSubmission};

    fn executor() -> Executor {
        Executor::new(
            FeatureStore::in_memory(),
            BoardConfig::default(),
            AccessMode::ReadWrite,
        )
    }

    fn create(ex: &Executor, title: &str) -> FeatureId {
        match ex
            .execute(Command::FeatureCreate {
                input: FeatureInput::titled(title),
            })
            .unwrap()
        {
            Output::Feature(f) => f.id,
            other => panic!("Expected Feature, got {:?}", other),
        }
    }

    #[test]
    fn test_create_then_list() {
        let ex = executor();
        create(&ex, "One");
        create(&ex, "Two");
        match ex.execute(Command::FeatureList).unwrap() {
            Output::Features(list) => assert_eq!(list.len(), 2),
            _ => panic!("Expected Features"),
        }
    }

    #[test]
    fn test_rate_scenarios() {
        let ex = executor();
        let id = create(&ex, "Rated");
        let rate = |rating: f64, previous_rating: f64| {
            ex.execute(Command::FeatureRate {
                id: id.clone(),
                submission: RatingSubmission {
                    rating,
                    previous_rating,
                },
            })
        };

        match rate(4.0, 0.0).unwrap() {
            Output::Feature(f) => {
                assert_eq!((f.rating_total, f.rating_count, f.rating), (4.0, 1, 4.0))
            }
            _ => panic!("Expected Feature"),
        }
        match rate(2.0, 4.0).unwrap() {
            Output::Feature(f) => {
                assert_eq!((f.rating_total, f.rating_count, f.rating), (2.0, 1, 2.0))
            }
            _ => panic!("Expected Feature"),
        }
    }

    #[test]
    fn test_rate_invalid_leaves_record() {
        let ex = executor();
        let id = create(&ex, "Rated");
        let err = ex
            .execute(Command::FeatureRate {
                id: id.clone(),
                submission: RatingSubmission {
                    rating: 6.0,
                    previous_rating: 0.0,
                },
            })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRating { .. }));
        let stored = ex.store().get(&id).unwrap();
        assert_eq!(stored.feature.rating_count, 0);
    }

    #[test]
    fn test_upvote_unknown() {
        let err = executor()
            .execute(Command::FeatureUpvote {
                id: FeatureId::from("missing"),
            })
            .unwrap_err();
        assert!(matches!(err, Error::FeatureNotFound { .. }));
    }

    #[test]
    fn test_star_and_unstar() {
        let ex = executor();
        let id = create(&ex, "Star me");
        for starred in [true, false] {
            match ex
                .execute(Command::FeatureStar {
                    id: id.clone(),
                    starred,
                })
                .unwrap()
            {
                Output::Feature(f) => assert_eq!(f.is_starred, starred),
                _ => panic!("Expected Feature"),
            }
        }
    }

    #[test]
    fn test_delete_twice() {
        let ex = executor();
        let id = create(&ex, "Temp");
        assert!(ex.execute(Command::FeatureDelete { id: id.clone() }).is_ok());
        let err = ex.execute(Command::FeatureDelete { id }).unwrap_err();
        assert!(matches!(err, Error::FeatureNotFound { .. }));
    }

    #[test]
    fn test_blank_id_rejected() {
        let err = executor()
            .execute(Command::FeatureGet {
                id: FeatureId::from(""),
            })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let ex = Executor::new(
            FeatureStore::in_memory(),
            BoardConfig::default(),
            AccessMode::ReadOnly,
        );
        let err = ex
            .execute(Command::FeatureCreate {
                input: FeatureInput::titled("Nope"),
            })
            .unwrap_err();
        assert!(matches!(err, Error::AccessDenied { .. }));
        assert!(ex.execute(Command::FeatureList).is_ok());
    }
}
