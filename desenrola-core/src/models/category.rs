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

use crate::utils::slug::is_valid_slug;
use serde::{Deserialize, Serialize};

/// A legal practice area the site groups articles under. The slug is the
/// external lookup key used in URLs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Option<i64>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon_name: Option<String>,
}

impl Category {
    pub fn new(name: String, slug: String) -> Self {
        Self {
            id: None,
            name,
            slug,
            description: None,
            icon_name: None,
        }
    }

    pub fn validate_name(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }

        if self.name.len() > 100 {
            return Err("Name cannot exceed 100 characters".to_string());
        }

        Ok(())
    }

    pub fn validate_slug(&self) -> Result<(), String> {
        if !is_valid_slug(&self.slug) {
            return Err(format!("Invalid slug: '{}'", self.slug));
        }

        Ok(())
    }

    pub fn is_valid(&self) -> Result<(), String> {
        self.validate_name()?;
        self.validate_slug()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_category() -> Category {
        Category::new(
            "Direito do Consumidor".to_string(),
            "direito-consumidor".to_string(),
        )
    }

    #[test]
    fn test_new_category() {
        let category = test_category();

        assert!(category.id.is_none());
        assert_eq!(category.name, "Direito do Consumidor");
        assert_eq!(category.slug, "direito-consumidor");
        assert!(category.description.is_none());
        assert!(category.icon_name.is_none());
    }

    #[test]
    fn test_new_category_is_valid() {
        assert!(test_category().is_valid().is_ok());
    }

    #[test]
    fn test_validate_name_empty() {
        let mut category = test_category();
        category.name = String::new();
        assert!(category.is_valid().is_err());

        category.name = "   ".to_string();
        assert!(category.is_valid().is_err());
    }

    #[test]
    fn test_validate_name_too_long() {
        let mut category = test_category();
        category.name = "a".repeat(101);
        assert!(category.is_valid().is_err());
    }

    #[test]
    fn test_validate_slug_format() {
        let mut category = test_category();

        for bad in ["", "Direito", "direito consumidor", "direito--consumidor"] {
            category.slug = bad.to_string();
            assert!(category.is_valid().is_err(), "slug: {:?}", bad);
        }
    }

    #[test]
    fn test_optional_fields_serialize_as_camel_case() {
        let mut category = test_category();
        category.icon_name = Some("fa-gavel".to_string());

        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["iconName"], "fa-gavel");
        assert!(json["description"].is_null());
    }
}
