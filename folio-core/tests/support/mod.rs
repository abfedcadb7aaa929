#![allow(dead_code)]

use folio_core::{
    Catalog, CatalogItem, CategoryList, FolioError, MotionPreferences, Result, Showcase,
    ShowcaseConfig, ViewportPort,
};
use std::cell::RefCell;

pub const CATEGORIES: &[&str] = &[
    "All",
    "Frontend",
    "Backend",
    "Full Stack",
    "Mobile",
    "Tools",
    "Marketing",
];

pub const WIDE: f64 = 1280.0;
pub const NARROW: f64 = 390.0;

/// Viewport fake that records every scroll request.
pub struct RecordingViewport {
    pub width: f64,
    pub list_top: Option<f64>,
    pub scroll_available: bool,
    pub scrolls: RefCell<Vec<(f64, bool)>>,
}

impl RecordingViewport {
    pub fn new(width: f64, list_top: f64) -> Self {
        Self {
            width,
            list_top: Some(list_top),
            scroll_available: true,
            scrolls: RefCell::new(Vec::new()),
        }
    }

    pub fn scrolls(&self) -> Vec<(f64, bool)> {
        self.scrolls.borrow().clone()
    }
}

impl ViewportPort for RecordingViewport {
    fn width(&self) -> Result<f64> {
        Ok(self.width)
    }

    fn element_top_offset(&self, id: &str) -> Result<f64> {
        self.list_top
            .ok_or_else(|| FolioError::ElementNotFound(id.to_string()))
    }

    fn scroll_to(&self, offset: f64, animated: bool) -> Result<()> {
        if !self.scroll_available {
            return Err(FolioError::ViewportUnavailable("window.scrollTo".to_string()));
        }
        self.scrolls.borrow_mut().push((offset, animated));
        Ok(())
    }
}

fn item(title: String, categories: &[&str]) -> CatalogItem {
    CatalogItem::new(title, "Issuer", "Jan 2024").with_categories(categories.iter().copied())
}

/// 22 items: 9 Frontend (one also Mobile), 5 Backend, 4 Tools, 2 Full Stack, 2 Marketing.
pub fn course_catalog() -> Catalog {
    let mut items = Vec::new();
    for i in 0..9 {
        if i == 4 {
            items.push(item(format!("frontend-{i}"), &["Frontend", "Mobile"]));
        } else {
            items.push(item(format!("frontend-{i}"), &["Frontend"]));
        }
        if i < 5 {
            items.push(item(format!("backend-{i}"), &["Backend"]));
        }
    }
    for i in 0..4 {
        items.push(item(format!("tools-{i}"), &["Tools"]));
    }
    for i in 0..2 {
        items.push(item(format!("fullstack-{i}"), &["Full Stack"]));
        items.push(item(format!("marketing-{i}"), &["Marketing"]));
    }
    let load = Catalog::load(items, CategoryList::new(CATEGORIES.iter()).unwrap());
    assert!(load.issues.is_empty(), "unexpected issues: {:?}", load.issues);
    load.catalog
}

pub fn showcase(width: f64, motion: MotionPreferences) -> Showcase {
    Showcase::new(course_catalog(), ShowcaseConfig::default(), width, motion)
}
