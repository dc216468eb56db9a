use chrono::Utc;
use sea_orm::{entity::prelude::*, ActiveValue, DatabaseConnection, PaginatorTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// A user's score and comment on a product. `id_user` and `id_product` are
/// checked when written, never afterwards.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_user: i32,
    pub id_product: i32,
    pub score: i32,
    #[sea_orm(column_type = "Text")]
    pub review: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTimeWithTimeZone,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// `score` and `review` are passed through as received; a missing one is
/// left unset and rejected by the column's NOT NULL constraint.
#[derive(Clone, Debug, PartialEq)]
pub struct NewReview {
    pub id_user: i32,
    pub id_product: i32,
    pub score: Option<i32>,
    pub review: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ReviewChanges {
    pub id_user: Option<i32>,
    pub id_product: Option<i32>,
    pub score: Option<i32>,
    pub review: Option<String>,
}

pub async fn create(db: &DatabaseConnection, new: NewReview) -> Result<Model, errors::ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        id_user: Set(new.id_user),
        id_product: Set(new.id_product),
        score: new.score.map_or(ActiveValue::NotSet, ActiveValue::Set),
        review: new.review.map_or(ActiveValue::NotSet, ActiveValue::Set),
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

pub async fn count(db: &DatabaseConnection) -> Result<u64, errors::ModelError> {
    Entity::find().count(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Apply `changes` to an already loaded review.
pub async fn apply_changes(db: &DatabaseConnection, found: Model, changes: ReviewChanges) -> Result<Model, errors::ModelError> {
    let mut am: ActiveModel = found.into();
    if let Some(v) = changes.id_user { am.id_user = Set(v); }
    if let Some(v) = changes.id_product { am.id_product = Set(v); }
    if let Some(v) = changes.score { am.score = Set(v); }
    if let Some(v) = changes.review { am.review = Set(v); }
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
