use axum::Json;

use crate::catalog::Catalog;
use crate::display::RaysView;

/// GET /api/v1/catalog
/// Choice lists for the intake form.
pub async fn handle_catalog() -> Json<Catalog> {
    Json(Catalog::snapshot())
}

/// GET /api/v1/rays
pub async fn handle_rays() -> Json<RaysView> {
    Json(RaysView::new())
}

/// GET /api/v1/rays/text
/// The same reference rendered as plain text.
pub async fn handle_rays_text() -> String {
    RaysView::new().to_string()
}
