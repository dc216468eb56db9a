use models::restaurant::{self, NewRestaurant, RestaurantChanges};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::errors::{msg, ServiceError};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateRestaurantInput {
    pub name: Option<String>,
    pub address: Option<String>,
    pub id_user: Option<i32>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    #[serde(rename = "sendCost")]
    pub send_cost: Option<i32>,
    pub description: Option<String>,
    #[serde(rename = "typeFood")]
    pub type_food: Option<String>,
    #[serde(rename = "minTime")]
    pub min_time: Option<i32>,
    #[serde(rename = "maxTime")]
    pub max_time: Option<i32>,
}

fn text(v: Option<String>) -> Option<String> { v.filter(|s| !s.is_empty()) }
fn number(v: Option<i32>) -> Option<i32> { v.filter(|n| *n != 0) }

impl CreateRestaurantInput {
    /// Every field is required and must be truthy (non-empty text, non-zero number).
    pub fn validate(self) -> Result<NewRestaurant, ServiceError> {
        let missing = || ServiceError::validation(msg::MISSING_FIELDS);
        Ok(NewRestaurant {
            name: text(self.name).ok_or_else(missing)?,
            address: text(self.address).ok_or_else(missing)?,
            id_user: number(self.id_user).ok_or_else(missing)?,
            phone_number: text(self.phone_number).ok_or_else(missing)?,
            send_cost: number(self.send_cost).ok_or_else(missing)?,
            description: text(self.description).ok_or_else(missing)?,
            type_food: text(self.type_food).ok_or_else(missing)?,
            min_time: number(self.min_time).ok_or_else(missing)?,
            max_time: number(self.max_time).ok_or_else(missing)?,
        })
    }
}

pub struct RestaurantService {
    db: DatabaseConnection,
}

impl RestaurantService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateRestaurantInput) -> Result<restaurant::Model, ServiceError> {
        let new = input.validate()?;
        let created = restaurant::create(&self.db, new).await?;
        info!(id = created.id, id_user = created.id_user, "restaurant_created");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<restaurant::Model>, ServiceError> {
        Ok(restaurant::list(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> Result<restaurant::Model, ServiceError> {
        restaurant::find(&self.db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found(msg::RESTAURANT_NOT_FOUND))
    }

    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: i32, changes: RestaurantChanges) -> Result<restaurant::Model, ServiceError> {
        let updated = restaurant::update(&self.db, id, changes)
            .await?
            .ok_or_else(|| ServiceError::not_found(msg::RESTAURANT_NOT_FOUND))?;
        info!(id, "restaurant_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !restaurant::delete(&self.db, id).await? {
            return Err(ServiceError::not_found(msg::RESTAURANT_NOT_FOUND));
        }
        info!(id, "restaurant_deleted");
        Ok(())
    }
}
