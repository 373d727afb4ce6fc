//! Service Container - Centralized service wiring.
//!
//! Builds the concrete service graph from a database connection so
//! handlers only ever see the service traits.

use std::sync::Arc;

use super::{FollowManager, FollowService, UserManager, UserService};
use crate::infra::{FollowStore, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get follow service
    fn follows(&self) -> Arc<dyn FollowService>;
}

/// Concrete implementation of `ServiceContainer`.
pub struct Services {
    user_service: Arc<dyn UserService>,
    follow_service: Arc<dyn FollowService>,
}

impl Services {
    /// Create a new service container from already-built services
    pub fn new(
        user_service: Arc<dyn UserService>,
        follow_service: Arc<dyn FollowService>,
    ) -> Self {
        Self {
            user_service,
            follow_service,
        }
    }

    /// Create service container from a database connection
    pub fn from_connection(db: impl Into<Arc<sea_orm::DatabaseConnection>>) -> Self {
        let db = db.into();
        let user_service = Arc::new(UserManager::new(Arc::new(UserStore::new(db.clone()))));
        let follow_service = Arc::new(FollowManager::new(Arc::new(FollowStore::new(db))));

        Self {
            user_service,
            follow_service,
        }
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn follows(&self) -> Arc<dyn FollowService> {
        self.follow_service.clone()
    }
}
