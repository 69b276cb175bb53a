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
use crate::markdown::markdown_to_html;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use desenrola_core::models::ArticleWithCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ArticleListQuery {
    /// Case-insensitive substring search over title, excerpt and content
    pub search: Option<String>,
    /// Return only the N most recent articles. Parsed by hand so a bad
    /// value yields a 400 with a message instead of a bare rejection.
    pub limit: Option<String>,
}

/// Single-article view: the joined record plus its body rendered to HTML.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetail {
    #[serde(flatten)]
    pub article: ArticleWithCategory,
    pub content_html: String,
}

pub async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<ArticleListQuery>,
) -> Result<Json<Vec<ArticleWithCategory>>, AppError> {
    let articles = if let Some(search) = query.search {
        state.store.search_articles(&search)
    } else if let Some(limit) = query.limit {
        let limit: usize = limit
            .parse()
            .map_err(|_| AppError::bad_request(format!("Invalid limit '{}'", limit)))?;
        state.store.get_recent_articles(limit)
    } else {
        state.store.get_articles()
    };

    Ok(Json(articles))
}

pub async fn featured_articles(State(state): State<AppState>) -> Json<Vec<ArticleWithCategory>> {
    Json(state.store.get_featured_articles())
}

pub async fn get_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ArticleDetail>, AppError> {
    let joined = state
        .store
        .get_article_by_slug(&slug)
        .ok_or_else(|| AppError::not_found(format!("Article '{}' not found", slug)))?;

    let content_html = markdown_to_html(&joined.article.content);

    Ok(Json(ArticleDetail {
        article: joined,
        content_html,
    }))
}
