// Desenrola Direito - legal information content service
// Copyright (C) 2025 Desenrola Direito Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::error::AppError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use desenrola_core::models::{ArticleWithCategory, Category};

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.store.get_categories())
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Category>, AppError> {
    state
        .store
        .get_category_by_slug(&slug)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Category '{}' not found", slug)))
}

/// Articles in a category. An unknown slug yields an empty list rather than
/// a 404, mirroring the store contract.
pub async fn list_category_articles(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Json<Vec<ArticleWithCategory>> {
    Json(state.store.get_articles_by_category(&slug))
}
