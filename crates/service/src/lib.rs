//! Service layer providing the business operations behind the HTTP surface.
//! - Presence/truthiness validation of create payloads.
//! - Reference checks (product exists, user exists) for review writes.
//! - Maps persistence failures into `ServiceError`.

pub mod errors;
pub mod users;
pub mod reference;
pub mod product_service;
pub mod restaurant_service;
pub mod review_service;
#[cfg(test)]
pub mod test_support;
