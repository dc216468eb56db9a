use thiserror::Error;

use models::errors::ModelError;

/// Client-facing messages.
pub mod msg {
    pub const MISSING_FIELDS: &str = "Todos los campos son obligatorios";
    pub const INVALID_PRICE: &str = "El precio debe ser un número positivo";
    pub const NAME_PARAM_REQUIRED: &str = "El parámetro 'name' es obligatorio y debe ser una cadena de texto";
    pub const NO_PRODUCTS_WITH_NAME: &str = "No se encontraron productos con ese nombre";
    pub const PRODUCT_NOT_FOUND: &str = "Producto no encontrado";
    pub const RESTAURANT_NOT_FOUND: &str = "Restaurante no encontrado";
    pub const REVIEW_NOT_FOUND: &str = "Review no encontrada";
    pub const USER_NOT_FOUND: &str = "Usuario no encontrado";
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    /// The user service could not be reached or answered garbage.
    #[error("upstream error: {0}")]
    Upstream(String),
}

impl ServiceError {
    pub fn validation(message: &str) -> Self { Self::Validation(message.to_string()) }
    pub fn not_found(message: &str) -> Self { Self::NotFound(message.to_string()) }

    /// The bare message, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::NotFound(m) | Self::Db(m) | Self::Upstream(m) => m,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Db(m) => ServiceError::Db(m),
        }
    }
}
