//! Product catalog route handlers.
//!
//! The catalog is a static table in `bottega-core`; these handlers just
//! expose it as JSON.

use axum::{Json, extract::Path};

use bottega_core::{Product, catalog};

use crate::error::{AppError, Result};

/// List the full product catalog.
///
/// GET /api/products
pub async fn list() -> Json<Vec<Product>> {
    Json(catalog::all().to_vec())
}

/// Fetch one product by its id.
///
/// GET /api/products/{id}
pub async fn show(Path(id): Path<String>) -> Result<Json<Product>> {
    catalog::find(&id)
        .map(|product| Json(product.clone()))
        .ok_or(AppError::NotFound(id))
}
