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

use serde::{Deserialize, Serialize};

/// A promotional card shown on the home page. No relationships to other
/// entities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub link: String,
    pub link_text: String,
}

impl Solution {
    pub fn new(title: String, description: String, link: String, link_text: String) -> Self {
        Self {
            id: None,
            title,
            description,
            image_url: None,
            link,
            link_text,
        }
    }

    pub fn is_valid(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title cannot be empty".to_string());
        }

        if self.description.trim().is_empty() {
            return Err("Description cannot be empty".to_string());
        }

        if self.link.is_empty() {
            return Err("Link cannot be empty".to_string());
        }

        if self.link_text.trim().is_empty() {
            return Err("Link text cannot be empty".to_string());
        }

        Ok(())
    }
}
