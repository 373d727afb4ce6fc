//! Application state - Dependency injection container.
//!
//! Provides centralized access to the services and infrastructure
//! handlers need. Built explicitly from a database handle; there is
//! no global connection pool.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{FollowService, ServiceContainer, Services, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Follow graph service
    pub follow_service: Arc<dyn FollowService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state wired from a database connection.
    ///
    /// This is the recommended constructor: services are built through
    /// the `Services` container over the shared connection pool.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());

        Self {
            user_service: container.users(),
            follow_service: container.follows(),
            database,
        }
    }

    /// Create application state with manually injected services.
    ///
    /// Used by tests to substitute mock services.
    pub fn new(
        user_service: Arc<dyn UserService>,
        follow_service: Arc<dyn FollowService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            user_service,
            follow_service,
            database,
        }
    }
}
