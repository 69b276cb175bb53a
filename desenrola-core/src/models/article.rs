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

use crate::models::category::Category;
use crate::utils::slug::is_valid_slug;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An editorial article. `content` is the markdown body as written; rendering
/// happens at the web layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: Option<i64>,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: Option<String>,
    pub publish_date: DateTime<Utc>,
    pub category_id: i64,
    pub featured: bool,
}

impl Article {
    pub fn new(
        title: String,
        slug: String,
        excerpt: String,
        content: String,
        publish_date: DateTime<Utc>,
        category_id: i64,
    ) -> Self {
        Self {
            id: None,
            title,
            slug,
            excerpt,
            content,
            image_url: None,
            publish_date,
            category_id,
            featured: false,
        }
    }

    pub fn validate_title(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title cannot be empty".to_string());
        }

        if self.title.len() > 255 {
            return Err("Title cannot exceed 255 characters".to_string());
        }

        Ok(())
    }

    pub fn validate_slug(&self) -> Result<(), String> {
        if !is_valid_slug(&self.slug) {
            return Err(format!("Invalid slug: '{}'", self.slug));
        }

        Ok(())
    }

    pub fn validate_category_id(&self) -> Result<(), String> {
        if self.category_id <= 0 {
            return Err("Category id must be positive".to_string());
        }

        Ok(())
    }

    pub fn is_valid(&self) -> Result<(), String> {
        self.validate_title()?;
        self.validate_slug()?;
        self.validate_category_id()?;

        if self.excerpt.trim().is_empty() {
            return Err("Excerpt cannot be empty".to_string());
        }

        if self.content.trim().is_empty() {
            return Err("Content cannot be empty".to_string());
        }

        Ok(())
    }
}

/// An article joined with its resolved category. Built on demand by the
/// store, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleWithCategory {
    #[serde(flatten)]
    pub article: Article,
    pub category: Category,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_article() -> Article {
        Article::new(
            "Como cancelar compras online".to_string(),
            "como-cancelar-compras-online".to_string(),
            "Saiba seus direitos de arrependimento.".to_string(),
            "# Como cancelar\n\nO CDC garante 7 dias.".to_string(),
            Utc.with_ymd_and_hms(2025, 5, 12, 0, 0, 0).unwrap(),
            1,
        )
    }

    #[test]
    fn test_new_article_defaults() {
        let article = test_article();

        assert!(article.id.is_none());
        assert!(article.image_url.is_none());
        assert!(!article.featured);
        assert_eq!(article.category_id, 1);
    }

    #[test]
    fn test_new_article_is_valid() {
        assert!(test_article().is_valid().is_ok());
    }

    #[test]
    fn test_validate_title() {
        let mut article = test_article();

        article.title = "  ".to_string();
        assert!(article.is_valid().is_err());

        article.title = "a".repeat(256);
        assert!(article.is_valid().is_err());
    }

    #[test]
    fn test_validate_slug() {
        let mut article = test_article();
        article.slug = "Como Cancelar".to_string();
        assert!(article.is_valid().is_err());
    }

    #[test]
    fn test_validate_category_id() {
        let mut article = test_article();

        article.category_id = 0;
        assert!(article.is_valid().is_err());

        article.category_id = -3;
        assert!(article.is_valid().is_err());
    }

    #[test]
    fn test_validate_empty_body() {
        let mut article = test_article();
        article.content = "\n\n".to_string();
        assert!(article.is_valid().is_err());

        let mut article = test_article();
        article.excerpt = String::new();
        assert!(article.is_valid().is_err());
    }

    #[test]
    fn test_with_category_flattens_article_fields() {
        let article = test_article();
        let category = Category::new(
            "Direito do Consumidor".to_string(),
            "direito-consumidor".to_string(),
        );

        let joined = ArticleWithCategory {
            article: article.clone(),
            category: category.clone(),
        };

        let json = serde_json::to_value(&joined).unwrap();
        assert_eq!(json["slug"], article.slug);
        assert_eq!(json["categoryId"], article.category_id);
        assert_eq!(json["category"]["slug"], category.slug);
    }

    #[test]
    fn test_publish_date_round_trips_through_json() {
        let article = test_article();
        let json = serde_json::to_string(&article).unwrap();
        let back: Article = serde_json::from_str(&json).unwrap();
        assert_eq!(back, article);
    }
}
