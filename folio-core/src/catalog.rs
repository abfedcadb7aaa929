//! Catalog model: items, category tags and load-time validation.

use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of the reserved wildcard category.
pub const WILDCARD_LABEL: &str = "All";

/// A category a catalog can be filtered by.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryTag {
    /// Matches every item.
    #[default]
    All,
    Named(String),
}

impl CategoryTag {
    /// Parse a label, mapping `"All"` to the wildcard.
    pub fn from_label(label: &str) -> Self {
        if label == WILDCARD_LABEL {
            CategoryTag::All
        } else {
            CategoryTag::Named(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryTag::All => WILDCARD_LABEL,
            CategoryTag::Named(name) => name,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, CategoryTag::All)
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One tagged entry of the showcase (a certification, a course, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogItem {
    pub title: String,
    /// Issuer or source label
    pub issuer: String,
    /// Free-form date label, displayed as-is
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    /// Category labels in declaration order, without duplicates after load.
    pub categories: Vec<String>,
}

impl CatalogItem {
    pub fn new(title: impl Into<String>, issuer: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            issuer: issuer.into(),
            date: date.into(),
            credential_id: None,
            external_url: None,
            categories: Vec::new(),
        }
    }

    pub fn with_credential_id(mut self, id: impl Into<String>) -> Self {
        self.credential_id = Some(id.into());
        self
    }

    pub fn with_external_url(mut self, url: impl Into<String>) -> Self {
        self.external_url = Some(url.into());
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_category(&self, label: &str) -> bool {
        self.categories.iter().any(|c| c == label)
    }

    /// Label for the external link, if the item has one.
    ///
    /// Items with a credential id link to a verifiable credential; the rest
    /// link to the course page.
    pub fn link_label(&self) -> Option<&'static str> {
        self.external_url.as_ref().map(|_| {
            if self.credential_id.is_some() {
                "View Credential"
            } else {
                "View Course"
            }
        })
    }
}

/// Ordered category enumeration with the wildcard first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryList {
    tags: Vec<CategoryTag>,
}

impl CategoryList {
    /// Build the list from labels. The first label must be `"All"` and no
    /// label may repeat.
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags: Vec<CategoryTag> = Vec::new();
        for label in labels {
            let tag = CategoryTag::from_label(label.as_ref());
            if tags.is_empty() && !tag.is_wildcard() {
                return Err(FolioError::MissingWildcard);
            }
            if tags.contains(&tag) {
                return Err(FolioError::DuplicateCategory(tag.label().to_string()));
            }
            tags.push(tag);
        }
        if tags.is_empty() {
            return Err(FolioError::MissingWildcard);
        }
        Ok(Self { tags })
    }

    pub fn tags(&self) -> &[CategoryTag] {
        &self.tags
    }

    /// True if `label` names a known category (the wildcard included).
    pub fn contains(&self, label: &str) -> bool {
        self.tags.iter().any(|t| t.label() == label)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Validated, immutable catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    categories: CategoryList,
}

/// Result of loading a catalog: the usable catalog plus every configuration
/// problem found along the way.
#[derive(Clone, Debug)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub issues: Vec<FolioError>,
}

impl Catalog {
    /// Validate `items` against `categories`.
    ///
    /// Unknown category references are dropped from the item and reported;
    /// an item left without categories is still kept and only shows up under
    /// the wildcard. Loading never fails.
    pub fn load(items: Vec<CatalogItem>, categories: CategoryList) -> CatalogLoad {
        let mut issues = Vec::new();

        let items = items
            .into_iter()
            .map(|mut item| {
                if item.categories.is_empty() {
                    issues.push(FolioError::NoCategories {
                        item: item.title.clone(),
                    });
                }

                let mut kept: Vec<String> = Vec::with_capacity(item.categories.len());
                for category in std::mem::take(&mut item.categories) {
                    if kept.contains(&category) {
                        continue;
                    }
                    if categories.contains(&category) {
                        kept.push(category);
                    } else {
                        issues.push(FolioError::UnknownCategory {
                            item: item.title.clone(),
                            category,
                        });
                    }
                }
                item.categories = kept;
                item
            })
            .collect();

        for issue in &issues {
            log::warn!("Catalog configuration error: {}", issue);
        }

        CatalogLoad {
            catalog: Catalog { items, categories },
            issues,
        }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn categories(&self) -> &CategoryList {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
