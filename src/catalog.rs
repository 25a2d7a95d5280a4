//! Catalog of like button states for standalone visual review.
//!
//! Entries are fixed inputs rendered with a no-op click handler. They are
//! not wired into the interactive app.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use serde::Serialize;
use thiserror::Error;

use crate::ui::like_button::LikeButton;

pub const LIKE_GROUP: &str = "Like";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Entry '{name}' not found in catalog group '{group}'")]
    UnknownEntry { group: &'static str, name: String },
}

/// One named, parameter-free rendering of the like button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogGroup {
    pub title: &'static str,
    pub entries: Vec<CatalogEntry>,
}

#[derive(Debug, Serialize)]
struct EntryExport<'a> {
    name: &'a str,
    count: u64,
    rendered: String,
}

#[derive(Debug, Serialize)]
struct GroupExport<'a> {
    group: &'a str,
    entries: Vec<EntryExport<'a>>,
}

/// The like button at counts 0 and 1.
pub fn like_catalog() -> CatalogGroup {
    CatalogGroup {
        title: LIKE_GROUP,
        entries: vec![
            CatalogEntry { name: "0", count: 0 },
            CatalogEntry { name: "1", count: 1 },
        ],
    }
}

fn noop() {}

impl CatalogEntry {
    pub fn button(&self) -> LikeButton<fn()> {
        LikeButton::new(self.count, noop as fn())
    }

    /// Renders the entry off-screen into a single row of `width` cells and
    /// returns the row with trailing blanks removed.
    pub fn snapshot(&self, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buffer = Buffer::empty(area);
        (&self.button()).render(area, &mut buffer);
        let row: String = (0..width).map(|x| buffer[(x, 0)].symbol()).collect();
        row.trim_end().to_string()
    }
}

impl CatalogGroup {
    pub fn find(&self, name: &str) -> Result<&CatalogEntry, CatalogError> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| CatalogError::UnknownEntry {
                group: self.title,
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.name).collect()
    }

    pub fn to_json(&self, width: u16) -> serde_json::Result<String> {
        let export = GroupExport {
            group: self.title,
            entries: self
                .entries
                .iter()
                .map(|entry| EntryExport {
                    name: entry.name,
                    count: entry.count,
                    rendered: entry.snapshot(width),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&export)
    }
}
