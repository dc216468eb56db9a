use models::product::{self, NewProduct, ProductChanges};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::errors::{msg, ServiceError};

/// Create payload as received; every field must be present and truthy.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i32>,
    pub id_user: Option<i32>,
}

impl CreateProductInput {
    /// Empty strings and zero numbers count as missing; a negative price is invalid.
    pub fn validate(self) -> Result<NewProduct, ServiceError> {
        let (Some(name), Some(description), Some(price), Some(id_user)) =
            (self.name, self.description, self.price, self.id_user)
        else {
            return Err(ServiceError::validation(msg::MISSING_FIELDS));
        };
        if name.is_empty() || description.is_empty() || price == 0 || id_user == 0 {
            return Err(ServiceError::validation(msg::MISSING_FIELDS));
        }
        if price < 0 {
            return Err(ServiceError::validation(msg::INVALID_PRICE));
        }
        Ok(NewProduct { name, description, price, id_user })
    }
}

pub struct ProductService {
    db: DatabaseConnection,
}

impl ProductService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateProductInput) -> Result<product::Model, ServiceError> {
        let new = input.validate()?;
        let created = product::create(&self.db, new).await?;
        info!(id = created.id, id_user = created.id_user, "product_created");
        Ok(created)
    }

    /// All products, or those whose name contains `name`.
    pub async fn list(&self, name: Option<&str>) -> Result<Vec<product::Model>, ServiceError> {
        Ok(product::list(&self.db, name).await?)
    }

    pub async fn get(&self, id: i32) -> Result<product::Model, ServiceError> {
        product::find(&self.db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found(msg::PRODUCT_NOT_FOUND))
    }

    /// Exact-name lookup; `name` must be a non-empty string.
    pub async fn find_by_name(&self, name: Option<&str>) -> Result<product::Model, ServiceError> {
        let name = match name {
            Some(n) if !n.is_empty() => n,
            _ => return Err(ServiceError::validation(msg::NAME_PARAM_REQUIRED)),
        };
        product::find_by_name(&self.db, name)
            .await?
            .ok_or_else(|| ServiceError::not_found(msg::NO_PRODUCTS_WITH_NAME))
    }

    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: i32, changes: ProductChanges) -> Result<product::Model, ServiceError> {
        let updated = product::update(&self.db, id, changes)
            .await?
            .ok_or_else(|| ServiceError::not_found(msg::PRODUCT_NOT_FOUND))?;
        info!(id, "product_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !product::delete(&self.db, id).await? {
            return Err(ServiceError::not_found(msg::PRODUCT_NOT_FOUND));
        }
        info!(id, "product_deleted");
        Ok(())
    }
}
