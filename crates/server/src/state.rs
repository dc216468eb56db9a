use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{
    product_service::ProductService,
    reference::ReferenceValidator,
    restaurant_service::RestaurantService,
    review_service::ReviewService,
    users::UserDirectory,
};

/// Per-process handles shared by every request.
#[derive(Clone)]
pub struct ServerState {
    pub products: Arc<ProductService>,
    pub restaurants: Arc<RestaurantService>,
    pub reviews: Arc<ReviewService>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, users: Arc<dyn UserDirectory>) -> Self {
        let refs = ReferenceValidator::new(db.clone(), users);
        Self {
            products: Arc::new(ProductService::new(db.clone())),
            restaurants: Arc::new(RestaurantService::new(db.clone())),
            reviews: Arc::new(ReviewService::new(db, refs)),
        }
    }
}
