use axum::Json;
use contracts::domain::a002_category::Category;

use crate::shared::data::store::get_categories;

/// GET /api/product/categories
pub async fn list_all() -> Json<Vec<Category>> {
    Json(get_categories().to_vec())
}
