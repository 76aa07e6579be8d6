// ============================================================================
// Back-office Core - Menu Node Entity
// File: crates/backoffice-core/src/domain/menu_node.rs
// Description: Two-level menu catalog entry (category or page)
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Menu level. Categories are level 0, pages under a category are level 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum MenuLevel {
    Category,
    Page,
}

impl MenuLevel {
    pub fn as_i32(&self) -> i32 {
        match self {
            MenuLevel::Category => 0,
            MenuLevel::Page => 1,
        }
    }

    pub fn from_i32(level: i32) -> Option<Self> {
        match level {
            0 => Some(MenuLevel::Category),
            1 => Some(MenuLevel::Page),
            _ => None,
        }
    }
}

impl TryFrom<i32> for MenuLevel {
    type Error = String;

    fn try_from(level: i32) -> Result<Self, Self::Error> {
        MenuLevel::from_i32(level).ok_or_else(|| format!("unsupported menu level: {}", level))
    }
}

impl From<MenuLevel> for i32 {
    fn from(level: MenuLevel) -> Self {
        level.as_i32()
    }
}

/// Menu catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MenuNode {
    pub id: Uuid,
    pub level: MenuLevel,

    #[validate(length(min = 1, max = 100, message = "Category must be between 1 and 100 characters"))]
    pub category: String,

    #[validate(length(max = 100, message = "Page name too long"))]
    pub page: String,

    #[validate(length(max = 255, message = "Menu URL too long"))]
    pub url: String,

    pub description: Option<String>,
    pub icon: Option<String>,
}

impl MenuNode {
    pub fn category(id: Uuid, category: &str, icon: Option<&str>) -> Self {
        Self {
            id,
            level: MenuLevel::Category,
            category: category.to_string(),
            page: category.to_string(),
            url: String::new(),
            description: None,
            icon: icon.map(str::to_string),
        }
    }

    pub fn page(id: Uuid, category: &str, page: &str, url: &str) -> Self {
        Self {
            id,
            level: MenuLevel::Page,
            category: category.to_string(),
            page: page.to_string(),
            url: url.to_string(),
            description: None,
            icon: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn is_category(&self) -> bool {
        self.level == MenuLevel::Category
    }

    /// True when `other` is a page listed under this category.
    pub fn is_parent_of(&self, other: &MenuNode) -> bool {
        self.is_category() && other.level == MenuLevel::Page && other.category == self.category
    }
}
