//! Review write path: reference checks, then one write.
//!
//! On create the product is checked before the user so that an unknown
//! product never costs a call to the user service. A missing id fails its
//! check as not found; a missing `score` or `review` reaches the insert and
//! fails there. No transaction spans the checks and the insert.

use models::review::{self, NewReview, ReviewChanges};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::errors::{msg, ServiceError};
use crate::reference::ReferenceValidator;

/// Create payload as received; no field is checked beyond the two references.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateReviewInput {
    pub id_user: Option<i32>,
    pub id_product: Option<i32>,
    pub score: Option<i32>,
    pub review: Option<String>,
}

pub struct ReviewService {
    db: DatabaseConnection,
    refs: ReferenceValidator,
}

impl ReviewService {
    pub fn new(db: DatabaseConnection, refs: ReferenceValidator) -> Self { Self { db, refs } }

    /// Create a review after confirming the product and the user exist.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use migration::MigratorTrait;
    /// use service::reference::ReferenceValidator;
    /// use service::review_service::{CreateReviewInput, ReviewService};
    /// use service::users::mock::StaticUserDirectory;
    ///
    /// tokio_test::block_on(async {
    ///     let db = models::db::connect_in_memory().await.unwrap();
    ///     migration::Migrator::up(&db, None).await.unwrap();
    ///     let product = models::product::create(&db, models::product::NewProduct {
    ///         name: "Pizza".into(), description: "Cheese".into(), price: 10, id_user: 1,
    ///     }).await.unwrap();
    ///
    ///     let refs = ReferenceValidator::new(db.clone(), Arc::new(StaticUserDirectory::with_users([12])));
    ///     let svc = ReviewService::new(db, refs);
    ///     let input = CreateReviewInput { id_user: Some(12), id_product: Some(product.id), score: Some(4), review: Some("Rica".into()) };
    ///     let created = svc.create(input).await.unwrap();
    ///     assert_eq!(created.id_product, product.id);
    /// });
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateReviewInput) -> Result<review::Model, ServiceError> {
        let id_product = input
            .id_product
            .ok_or_else(|| ServiceError::not_found(msg::PRODUCT_NOT_FOUND))?;
        self.refs.ensure_product_exists(id_product).await?;
        let id_user = input
            .id_user
            .ok_or_else(|| ServiceError::not_found(msg::USER_NOT_FOUND))?;
        self.refs.ensure_user_exists(id_user).await?;

        let new = NewReview { id_user, id_product, score: input.score, review: input.review };
        let created = review::create(&self.db, new).await?;
        info!(id = created.id, id_product = created.id_product, id_user = created.id_user, "review_created");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<review::Model>, ServiceError> {
        Ok(review::list(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> Result<review::Model, ServiceError> {
        review::find(&self.db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found(msg::REVIEW_NOT_FOUND))
    }

    /// Partial update; a supplied `id_product` or `id_user` is re-checked, omitted ones are not.
    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: i32, changes: ReviewChanges) -> Result<review::Model, ServiceError> {
        let found = self.get(id).await?;
        if let Some(id_product) = changes.id_product {
            self.refs.ensure_product_exists(id_product).await?;
        }
        if let Some(id_user) = changes.id_user {
            self.refs.ensure_user_exists(id_user).await?;
        }
        let updated = review::apply_changes(&self.db, found, changes).await?;
        info!(id, "review_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !review::delete(&self.db, id).await? {
            return Err(ServiceError::not_found(msg::REVIEW_NOT_FOUND));
        }
        info!(id, "review_deleted");
        Ok(())
    }
}
