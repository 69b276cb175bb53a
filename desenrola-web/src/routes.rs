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

use crate::{handlers, AppState};
use axum::{routing::get, Router};
use std::path::PathBuf;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let static_dir = PathBuf::from(&state.config.static_dir);
    let index_file = static_dir.join("index.html");

    Router::new()
        // API
        .route("/api/health", get(handlers::health))
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/categories/{slug}", get(handlers::get_category))
        .route(
            "/api/categories/{slug}/articles",
            get(handlers::list_category_articles),
        )
        .route("/api/articles", get(handlers::list_articles))
        .route("/api/articles/featured", get(handlers::featured_articles))
        .route("/api/articles/{slug}", get(handlers::get_article))
        .route("/api/solutions", get(handlers::list_solutions))
        // Built front end, with the SPA index as catch-all
        .fallback_service(ServeDir::new(&static_dir).fallback(ServeFile::new(index_file)))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}
