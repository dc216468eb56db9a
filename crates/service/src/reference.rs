//! Reference checks shared by write paths.
//!
//! The checks run at write time only; a product or user deleted later leaves
//! existing rows pointing at nothing.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::errors::{msg, ServiceError};
use crate::users::UserDirectory;

#[derive(Clone)]
pub struct ReferenceValidator {
    db: DatabaseConnection,
    users: Arc<dyn UserDirectory>,
}

impl ReferenceValidator {
    pub fn new(db: DatabaseConnection, users: Arc<dyn UserDirectory>) -> Self {
        Self { db, users }
    }

    pub async fn ensure_product_exists(&self, id_product: i32) -> Result<(), ServiceError> {
        if models::product::exists(&self.db, id_product).await? {
            Ok(())
        } else {
            debug!(id_product, "referenced product missing");
            Err(ServiceError::not_found(msg::PRODUCT_NOT_FOUND))
        }
    }

    /// One round trip to the user service per call.
    pub async fn ensure_user_exists(&self, id_user: i32) -> Result<(), ServiceError> {
        if self.users.user_exists(id_user).await? {
            Ok(())
        } else {
            debug!(id_user, "referenced user missing");
            Err(ServiceError::not_found(msg::USER_NOT_FOUND))
        }
    }
}
