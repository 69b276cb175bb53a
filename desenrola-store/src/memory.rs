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

use crate::store::ContentStore;
use anyhow::Result;
use desenrola_core::models::{Article, ArticleWithCategory, Category, Solution, User};
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory `ContentStore`. Each collection is a `BTreeMap` keyed by its
/// auto-incrementing id, so iteration order is insertion order. Slug and
/// username lookups are linear scans; the dataset is a few dozen rows and
/// lives entirely in memory, so no secondary indexes are kept.
pub struct MemStore {
    inner: RwLock<Collections>,
}

#[derive(Default)]
struct Collections {
    users: BTreeMap<i64, User>,
    categories: BTreeMap<i64, Category>,
    articles: BTreeMap<i64, Article>,
    solutions: BTreeMap<i64, Solution>,
    next_user_id: i64,
    next_category_id: i64,
    next_article_id: i64,
    next_solution_id: i64,
}

impl Collections {
    fn new() -> Self {
        Self {
            next_user_id: 1,
            next_category_id: 1,
            next_article_id: 1,
            next_solution_id: 1,
            ..Default::default()
        }
    }

    fn join(&self, article: &Article) -> Option<ArticleWithCategory> {
        self.categories
            .get(&article.category_id)
            .cloned()
            .map(|category| ArticleWithCategory {
                article: article.clone(),
                category,
            })
    }
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Collections::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn sorted_by_date_desc(mut articles: Vec<ArticleWithCategory>) -> Vec<ArticleWithCategory> {
        // Stable sort: ties keep insertion order
        articles.sort_by(|a, b| b.article.publish_date.cmp(&a.article.publish_date));
        articles
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore for MemStore {
    fn create_user(&self, mut user: User) -> Result<User> {
        if let Err(e) = user.is_valid() {
            anyhow::bail!("Invalid user: {}", e);
        }

        let mut inner = self.write();

        if inner
            .users
            .values()
            .any(|existing| existing.username == user.username)
        {
            anyhow::bail!("Username '{}' is already taken", user.username);
        }

        let id = inner.next_user_id;
        inner.next_user_id += 1;

        user.id = Some(id);
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    fn get_user(&self, id: i64) -> Option<User> {
        self.read().users.get(&id).cloned()
    }

    fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.read()
            .users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    fn create_category(&self, mut category: Category) -> Result<Category> {
        if let Err(e) = category.is_valid() {
            anyhow::bail!("Invalid category: {}", e);
        }

        let mut inner = self.write();

        if inner
            .categories
            .values()
            .any(|existing| existing.slug == category.slug)
        {
            anyhow::bail!("Category slug '{}' already exists", category.slug);
        }

        let id = inner.next_category_id;
        inner.next_category_id += 1;

        category.id = Some(id);
        inner.categories.insert(id, category.clone());
        Ok(category)
    }

    fn get_categories(&self) -> Vec<Category> {
        self.read().categories.values().cloned().collect()
    }

    fn get_category_by_slug(&self, slug: &str) -> Option<Category> {
        self.read()
            .categories
            .values()
            .find(|category| category.slug == slug)
            .cloned()
    }

    fn get_category_by_id(&self, id: i64) -> Option<Category> {
        self.read().categories.get(&id).cloned()
    }

    fn create_article(&self, mut article: Article) -> Result<Article> {
        if let Err(e) = article.is_valid() {
            anyhow::bail!("Invalid article: {}", e);
        }

        let mut inner = self.write();

        // Reject dangling references up front so the category join is total
        if !inner.categories.contains_key(&article.category_id) {
            anyhow::bail!(
                "Article '{}' references unknown category id {}",
                article.slug,
                article.category_id
            );
        }

        if inner
            .articles
            .values()
            .any(|existing| existing.slug == article.slug)
        {
            anyhow::bail!("Article slug '{}' already exists", article.slug);
        }

        let id = inner.next_article_id;
        inner.next_article_id += 1;

        article.id = Some(id);
        inner.articles.insert(id, article.clone());
        Ok(article)
    }

    fn get_articles(&self) -> Vec<ArticleWithCategory> {
        let inner = self.read();
        inner
            .articles
            .values()
            .filter_map(|article| inner.join(article))
            .collect()
    }

    fn get_article_by_slug(&self, slug: &str) -> Option<ArticleWithCategory> {
        let inner = self.read();
        inner
            .articles
            .values()
            .find(|article| article.slug == slug)
            .and_then(|article| inner.join(article))
    }

    fn get_article_by_id(&self, id: i64) -> Option<ArticleWithCategory> {
        let inner = self.read();
        inner
            .articles
            .get(&id)
            .and_then(|article| inner.join(article))
    }

    fn get_articles_by_category(&self, category_slug: &str) -> Vec<ArticleWithCategory> {
        let category_id = match self.get_category_by_slug(category_slug).and_then(|c| c.id) {
            Some(id) => id,
            None => return Vec::new(),
        };

        self.get_articles()
            .into_iter()
            .filter(|joined| joined.article.category_id == category_id)
            .collect()
    }

    fn get_featured_articles(&self) -> Vec<ArticleWithCategory> {
        let featured = self
            .get_articles()
            .into_iter()
            .filter(|joined| joined.article.featured)
            .collect();

        Self::sorted_by_date_desc(featured)
    }

    fn get_recent_articles(&self, limit: usize) -> Vec<ArticleWithCategory> {
        let mut recent = Self::sorted_by_date_desc(self.get_articles());
        recent.truncate(limit);
        recent
    }

    fn search_articles(&self, query: &str) -> Vec<ArticleWithCategory> {
        let query = query.to_lowercase();

        self.get_articles()
            .into_iter()
            .filter(|joined| {
                let article = &joined.article;
                article.title.to_lowercase().contains(&query)
                    || article.excerpt.to_lowercase().contains(&query)
                    || article.content.to_lowercase().contains(&query)
            })
            .collect()
    }

    fn create_solution(&self, mut solution: Solution) -> Result<Solution> {
        if let Err(e) = solution.is_valid() {
            anyhow::bail!("Invalid solution: {}", e);
        }

        let mut inner = self.write();

        let id = inner.next_solution_id;
        inner.next_solution_id += 1;

        solution.id = Some(id);
        inner.solutions.insert(id, solution.clone());
        Ok(solution)
    }

    fn get_solutions(&self) -> Vec<Solution> {
        self.read().solutions.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn category(name: &str, slug: &str) -> Category {
        Category::new(name.to_string(), slug.to_string())
    }

    fn article(slug: &str, category_id: i64) -> Article {
        Article::new(
            format!("Artigo {}", slug),
            slug.to_string(),
            format!("Resumo de {}", slug),
            format!("# Artigo {}\n\nConteúdo de teste.", slug),
            date(2024, 1, 1),
            category_id,
        )
    }

    fn store_with_civil_category() -> (MemStore, Category) {
        let store = MemStore::new();
        let civil = store
            .create_category(category("Direito Civil", "civil"))
            .unwrap();
        (store, civil)
    }

    #[test]
    fn test_category_ids_are_unique_and_increasing() {
        let store = MemStore::new();
        let a = store.create_category(category("A", "cat-a")).unwrap();
        let b = store.create_category(category("B", "cat-b")).unwrap();
        let c = store.create_category(category("C", "cat-c")).unwrap();

        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
        assert_eq!(c.id, Some(3));
    }

    #[test]
    fn test_each_collection_counts_ids_independently() {
        let (store, civil) = store_with_civil_category();

        let article = store.create_article(article("a1", civil.id.unwrap())).unwrap();
        let user = store
            .create_user(User::new("maria".to_string(), "senha".to_string()))
            .unwrap();
        let solution = store
            .create_solution(Solution::new(
                "Consultoria".to_string(),
                "Tire dúvidas online.".to_string(),
                "/consulta".to_string(),
                "Saiba mais".to_string(),
            ))
            .unwrap();

        assert_eq!(article.id, Some(1));
        assert_eq!(user.id, Some(1));
        assert_eq!(solution.id, Some(1));
    }

    #[test]
    fn test_get_categories_in_insertion_order() {
        let store = MemStore::new();
        store.create_category(category("Zebra", "zebra")).unwrap();
        store.create_category(category("Alfa", "alfa")).unwrap();

        let slugs: Vec<_> = store
            .get_categories()
            .into_iter()
            .map(|c| c.slug)
            .collect();
        assert_eq!(slugs, vec!["zebra", "alfa"]);
    }

    #[test]
    fn test_get_category_by_slug() {
        let (store, civil) = store_with_civil_category();

        assert_eq!(store.get_category_by_slug("civil"), Some(civil));
        assert_eq!(store.get_category_by_slug("penal"), None);
    }

    #[test]
    fn test_get_category_by_id() {
        let (store, civil) = store_with_civil_category();

        assert_eq!(store.get_category_by_id(1), Some(civil));
        assert_eq!(store.get_category_by_id(99), None);
    }

    #[test]
    fn test_create_category_rejects_duplicate_slug() {
        let (store, _) = store_with_civil_category();

        let result = store.create_category(category("Outro Nome", "civil"));
        assert!(result.is_err());
        assert_eq!(store.get_categories().len(), 1);
    }

    #[test]
    fn test_create_category_rejects_invalid_fields() {
        let store = MemStore::new();
        assert!(store.create_category(category("", "civil")).is_err());
        assert!(store.create_category(category("Civil", "Não é slug")).is_err());
    }

    #[test]
    fn test_create_article_rejects_unknown_category() {
        let store = MemStore::new();

        let result = store.create_article(article("orfao", 42));
        assert!(result.is_err());
        assert!(store.get_articles().is_empty());
    }

    #[test]
    fn test_create_article_rejects_duplicate_slug() {
        let (store, civil) = store_with_civil_category();
        store.create_article(article("a1", civil.id.unwrap())).unwrap();

        assert!(store.create_article(article("a1", civil.id.unwrap())).is_err());
        assert_eq!(store.get_articles().len(), 1);
    }

    #[test]
    fn test_get_articles_embeds_matching_category() {
        let (store, civil) = store_with_civil_category();
        store.create_article(article("a1", civil.id.unwrap())).unwrap();
        store.create_article(article("a2", civil.id.unwrap())).unwrap();

        for joined in store.get_articles() {
            assert_eq!(Some(joined.article.category_id), joined.category.id);
            assert_eq!(joined.category.slug, "civil");
        }
    }

    #[test]
    fn test_get_article_by_slug() {
        let (store, civil) = store_with_civil_category();
        store.create_article(article("a1", civil.id.unwrap())).unwrap();

        let found = store.get_article_by_slug("a1").unwrap();
        assert_eq!(found.article.slug, "a1");
        assert_eq!(found.category.slug, "civil");

        assert!(store.get_article_by_slug("nope").is_none());
    }

    #[test]
    fn test_get_article_by_id_round_trip() {
        let (store, civil) = store_with_civil_category();

        let mut input = article("a1", civil.id.unwrap());
        input.image_url = Some("https://img.example/a1.jpg".to_string());
        input.featured = true;

        let created = store.create_article(input.clone()).unwrap();
        let fetched = store.get_article_by_id(created.id.unwrap()).unwrap();

        input.id = created.id;
        assert_eq!(fetched.article, input);
        assert_eq!(
            Some(fetched.category),
            store.get_category_by_id(input.category_id)
        );
    }

    #[test]
    fn test_get_articles_by_category_unknown_slug_is_empty() {
        let (store, civil) = store_with_civil_category();
        store.create_article(article("a1", civil.id.unwrap())).unwrap();

        assert!(store.get_articles_by_category("penal").is_empty());
    }

    #[test]
    fn test_get_articles_by_category_filters_exactly() {
        let (store, civil) = store_with_civil_category();
        let penal = store
            .create_category(category("Direito Penal", "penal"))
            .unwrap();

        store.create_article(article("a1", civil.id.unwrap())).unwrap();
        store.create_article(article("b1", penal.id.unwrap())).unwrap();
        store.create_article(article("a2", civil.id.unwrap())).unwrap();

        let civil_articles = store.get_articles_by_category("civil");
        let slugs: Vec<_> = civil_articles
            .iter()
            .map(|j| j.article.slug.clone())
            .collect();
        assert_eq!(slugs, vec!["a1", "a2"]);
    }

    #[test]
    fn test_featured_articles_only_and_date_descending() {
        let (store, civil) = store_with_civil_category();
        let cid = civil.id.unwrap();

        let mut old_featured = article("velho", cid);
        old_featured.featured = true;
        old_featured.publish_date = date(2024, 1, 1);

        let plain = article("comum", cid);

        let mut new_featured = article("novo", cid);
        new_featured.featured = true;
        new_featured.publish_date = date(2025, 6, 1);

        store.create_article(old_featured).unwrap();
        store.create_article(plain).unwrap();
        store.create_article(new_featured).unwrap();

        let featured = store.get_featured_articles();
        let slugs: Vec<_> = featured.iter().map(|j| j.article.slug.clone()).collect();
        assert_eq!(slugs, vec!["novo", "velho"]);
    }

    #[test]
    fn test_featured_ties_keep_insertion_order() {
        let (store, civil) = store_with_civil_category();
        let cid = civil.id.unwrap();

        for slug in ["primeiro", "segundo", "terceiro"] {
            let mut a = article(slug, cid);
            a.featured = true;
            a.publish_date = date(2025, 3, 3);
            store.create_article(a).unwrap();
        }

        let slugs: Vec<_> = store
            .get_featured_articles()
            .iter()
            .map(|j| j.article.slug.clone())
            .collect();
        assert_eq!(slugs, vec!["primeiro", "segundo", "terceiro"]);
    }

    #[test]
    fn test_recent_articles_sorted_and_truncated() {
        let (store, civil) = store_with_civil_category();
        let cid = civil.id.unwrap();

        for (slug, day) in [("a", 10), ("b", 20), ("c", 15)] {
            let mut a = article(slug, cid);
            a.publish_date = date(2025, 5, day);
            store.create_article(a).unwrap();
        }

        let recent = store.get_recent_articles(2);
        let slugs: Vec<_> = recent.iter().map(|j| j.article.slug.clone()).collect();
        assert_eq!(slugs, vec!["b", "c"]);
    }

    #[test]
    fn test_recent_articles_limit_larger_than_set() {
        let (store, civil) = store_with_civil_category();
        store.create_article(article("a1", civil.id.unwrap())).unwrap();

        assert_eq!(store.get_recent_articles(10).len(), 1);
        assert!(store.get_recent_articles(0).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let (store, civil) = store_with_civil_category();
        let cid = civil.id.unwrap();

        let mut by_title = article("rescisao", cid);
        by_title.title = "Verbas Rescisórias".to_string();

        let mut by_excerpt = article("fgts", cid);
        by_excerpt.excerpt = "Como sacar o FGTS com multa rescisória.".to_string();

        let mut by_content = article("aviso", cid);
        by_content.content = "O aviso prévio integra a rescisão.".to_string();

        let unrelated = article("aluguel", cid);

        store.create_article(by_title).unwrap();
        store.create_article(by_excerpt).unwrap();
        store.create_article(by_content).unwrap();
        store.create_article(unrelated).unwrap();

        let hits = store.search_articles("RESCIS");
        let slugs: Vec<_> = hits.iter().map(|j| j.article.slug.clone()).collect();
        assert_eq!(slugs, vec!["rescisao", "fgts", "aviso"]);
    }

    #[test]
    fn test_search_empty_query_matches_everything() {
        let (store, civil) = store_with_civil_category();
        store.create_article(article("a1", civil.id.unwrap())).unwrap();
        store.create_article(article("a2", civil.id.unwrap())).unwrap();

        assert_eq!(store.search_articles("").len(), 2);
    }

    #[test]
    fn test_search_is_idempotent_on_unchanged_store() {
        let (store, civil) = store_with_civil_category();
        store.create_article(article("a1", civil.id.unwrap())).unwrap();

        let first = store.search_articles("artigo");
        let second = store.search_articles("artigo");
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let (store, civil) = store_with_civil_category();
        store.create_article(article("a1", civil.id.unwrap())).unwrap();

        assert!(store.search_articles("previdenciário").is_empty());
    }

    #[test]
    fn test_user_lookup_by_id_and_username() {
        let store = MemStore::new();
        let user = store
            .create_user(User::new("maria".to_string(), "senha".to_string()))
            .unwrap();

        assert_eq!(store.get_user(user.id.unwrap()), Some(user.clone()));
        assert_eq!(store.get_user_by_username("maria"), Some(user));
        assert!(store.get_user(42).is_none());
        assert!(store.get_user_by_username("joao").is_none());
    }

    #[test]
    fn test_create_user_rejects_duplicate_username() {
        let store = MemStore::new();
        store
            .create_user(User::new("maria".to_string(), "senha".to_string()))
            .unwrap();

        let result = store.create_user(User::new("maria".to_string(), "outra".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_solutions_in_insertion_order() {
        let store = MemStore::new();

        for title in ["Consultoria", "Modelos", "Calculadoras"] {
            store
                .create_solution(Solution::new(
                    title.to_string(),
                    format!("Descrição de {}", title),
                    "/contact".to_string(),
                    "Saiba mais".to_string(),
                ))
                .unwrap();
        }

        let titles: Vec<_> = store.get_solutions().into_iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Consultoria", "Modelos", "Calculadoras"]);
    }

    #[test]
    fn test_spec_scenario_single_category_and_article() {
        let (store, civil) = store_with_civil_category();

        let mut a1 = article("a1", civil.id.unwrap());
        a1.featured = true;
        a1.publish_date = date(2024, 1, 1);
        store.create_article(a1).unwrap();

        let found = store.get_article_by_slug("a1").unwrap();
        assert_eq!(found.category.slug, "civil");

        let featured = store.get_featured_articles();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].article.slug, "a1");

        assert!(store.get_articles_by_category("penal").is_empty());
    }
}
