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

use anyhow::Result;
use desenrola_core::models::{Article, ArticleWithCategory, Category, Solution, User};

/// Read/write access to the site's content collections.
///
/// Creates assign the next id per collection and can fail on validation
/// (bad fields, duplicate slug or username, unknown category). Lookups are
/// infallible: "not found" is an empty `Option` or `Vec`, never an error.
/// The contract is synchronous on purpose; nothing here performs I/O.
pub trait ContentStore: Send + Sync {
    // Users
    fn create_user(&self, user: User) -> Result<User>;
    fn get_user(&self, id: i64) -> Option<User>;
    fn get_user_by_username(&self, username: &str) -> Option<User>;

    // Categories
    fn create_category(&self, category: Category) -> Result<Category>;
    fn get_categories(&self) -> Vec<Category>;
    fn get_category_by_slug(&self, slug: &str) -> Option<Category>;
    fn get_category_by_id(&self, id: i64) -> Option<Category>;

    // Articles, always served joined with their category
    fn create_article(&self, article: Article) -> Result<Article>;
    fn get_articles(&self) -> Vec<ArticleWithCategory>;
    fn get_article_by_slug(&self, slug: &str) -> Option<ArticleWithCategory>;
    fn get_article_by_id(&self, id: i64) -> Option<ArticleWithCategory>;
    fn get_articles_by_category(&self, category_slug: &str) -> Vec<ArticleWithCategory>;
    fn get_featured_articles(&self) -> Vec<ArticleWithCategory>;
    fn get_recent_articles(&self, limit: usize) -> Vec<ArticleWithCategory>;
    fn search_articles(&self, query: &str) -> Vec<ArticleWithCategory>;

    // Solutions
    fn create_solution(&self, solution: Solution) -> Result<Solution>;
    fn get_solutions(&self) -> Vec<Solution>;
}
