use chrono::Utc;
use sea_orm::{entity::prelude::*, sea_query::LikeExpr, DatabaseConnection, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: i32,
    pub id_user: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTimeWithTimeZone,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fields of a product about to be inserted.
#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: i32,
    pub id_user: i32,
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i32>,
    pub id_user: Option<i32>,
}

/// Escape LIKE wildcards so `%` and `_` in user input match literally.
fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

pub async fn create(db: &DatabaseConnection, new: NewProduct) -> Result<Model, errors::ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        name: Set(new.name),
        description: Set(new.description),
        price: Set(new.price),
        id_user: Set(new.id_user),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn exists(db: &DatabaseConnection, id: i32) -> Result<bool, errors::ModelError> {
    Ok(find(db, id).await?.is_some())
}

/// All products in creation order, optionally narrowed to names containing `name_like`.
pub async fn list(db: &DatabaseConnection, name_like: Option<&str>) -> Result<Vec<Model>, errors::ModelError> {
    let mut q = Entity::find();
    if let Some(name) = name_like.filter(|n| !n.is_empty()) {
        let pattern = LikeExpr::new(format!("%{}%", escape_like(name))).escape('\\');
        q = q.filter(Column::Name.like(pattern));
    }
    q.order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// First product whose name is exactly `name`.
pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Name.eq(name))
        .order_by_asc(Column::Id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Returns `None` when no product has this id.
pub async fn update(db: &DatabaseConnection, id: i32, changes: ProductChanges) -> Result<Option<Model>, errors::ModelError> {
    let Some(found) = find(db, id).await? else { return Ok(None) };
    let mut am: ActiveModel = found.into();
    if let Some(name) = changes.name { am.name = Set(name); }
    if let Some(description) = changes.description { am.description = Set(description); }
    if let Some(price) = changes.price { am.price = Set(price); }
    if let Some(id_user) = changes.id_user { am.id_user = Set(id_user); }
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}

/// Returns `false` when no product has this id.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("Pizza"), "Pizza");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\x"), "c:\\\\x");
    }

    #[test]
    fn model_serializes_with_wire_names() {
        let now: DateTimeWithTimeZone = Utc::now().into();
        let m = Model { id: 1, name: "Pizza".into(), description: "Cheese".into(), price: 10, id_user: 1, created_at: now, updated_at: now };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["id_user"], 1);
        assert!(v.get("createdAt").is_some());
        assert!(v.get("updatedAt").is_some());
        assert!(v.get("created_at").is_none());
    }
}
