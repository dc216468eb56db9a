use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: String,
    pub id_user: i32,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    /// Delivery cost.
    #[serde(rename = "sendCost")]
    pub send_cost: i32,
    pub description: String,
    #[serde(rename = "typeFood")]
    pub type_food: String,
    /// Delivery window in minutes.
    #[serde(rename = "minTime")]
    pub min_time: i32,
    #[serde(rename = "maxTime")]
    pub max_time: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTimeWithTimeZone,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
    pub id_user: i32,
    pub phone_number: String,
    pub send_cost: i32,
    pub description: String,
    pub type_food: String,
    pub min_time: i32,
    pub max_time: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct RestaurantChanges {
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

pub async fn create(db: &DatabaseConnection, new: NewRestaurant) -> Result<Model, errors::ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        name: Set(new.name),
        address: Set(new.address),
        id_user: Set(new.id_user),
        phone_number: Set(new.phone_number),
        send_cost: Set(new.send_cost),
        description: Set(new.description),
        type_food: Set(new.type_food),
        min_time: Set(new.min_time),
        max_time: Set(new.max_time),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn update(db: &DatabaseConnection, id: i32, changes: RestaurantChanges) -> Result<Option<Model>, errors::ModelError> {
    let Some(found) = find(db, id).await? else { return Ok(None) };
    let mut am: ActiveModel = found.into();
    if let Some(v) = changes.name { am.name = Set(v); }
    if let Some(v) = changes.address { am.address = Set(v); }
    if let Some(v) = changes.id_user { am.id_user = Set(v); }
    if let Some(v) = changes.phone_number { am.phone_number = Set(v); }
    if let Some(v) = changes.send_cost { am.send_cost = Set(v); }
    if let Some(v) = changes.description { am.description = Set(v); }
    if let Some(v) = changes.type_food { am.type_food = Set(v); }
    if let Some(v) = changes.min_time { am.min_time = Set(v); }
    if let Some(v) = changes.max_time { am.max_time = Set(v); }
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
