use serde::{Deserialize, Serialize};

use libris_core::{Entity, ItemId};

use crate::lendable::Lendable;

/// Author recorded when none is supplied.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Optional construction fields shared by every catalog item.
///
/// Omitted fields fall back to [`UNKNOWN_AUTHOR`] and item id `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemOptions {
    pub author: Option<String>,
    pub item_id: Option<ItemId>,
}

impl ItemOptions {
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn item_id(mut self, item_id: impl Into<ItemId>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }
}

/// Fields common to every catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInfo {
    title: String,
    author: String,
    item_id: ItemId,
}

impl ItemInfo {
    pub fn new(title: impl Into<String>, options: ItemOptions) -> Self {
        Self {
            title: title.into(),
            author: options
                .author
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            item_id: options.item_id.unwrap_or_default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }
}

/// Shared contract of catalog items.
pub trait LibraryItem {
    fn info(&self) -> &ItemInfo;

    /// Human-readable summary; the content varies per variant.
    fn display_details(&self) -> String;

    fn title(&self) -> &str {
        self.info().title()
    }

    fn author(&self) -> &str {
        self.info().author()
    }

    fn item_id(&self) -> ItemId {
        self.info().item_id()
    }
}

/// A book. Books can be lent (see [`Lendable`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(flatten)]
    info: ItemInfo,
    pages: i32,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        item_id: impl Into<ItemId>,
        pages: i32,
    ) -> Self {
        Self::with_options(
            title,
            pages,
            ItemOptions::default().author(author).item_id(item_id),
        )
    }

    /// Book known only by title: author "Unknown", item id 0.
    pub fn titled(title: impl Into<String>, pages: i32) -> Self {
        Self::with_options(title, pages, ItemOptions::default())
    }

    pub fn with_options(title: impl Into<String>, pages: i32, options: ItemOptions) -> Self {
        Self {
            info: ItemInfo::new(title, options),
            pages,
        }
    }

    pub fn pages(&self) -> i32 {
        self.pages
    }
}

impl LibraryItem for Book {
    fn info(&self) -> &ItemInfo {
        &self.info
    }

    fn display_details(&self) -> String {
        format!(
            "Book Title: {}, Author: {}, Pages: {}",
            self.title(),
            self.author(),
            self.pages
        )
    }
}

impl Lendable for Book {
    fn lend(&self) -> String {
        "The book is now lent out.".to_string()
    }

    fn lend_to(&self, recipient: &str) -> String {
        format!("The book is lent out to {recipient}.")
    }
}

/// A magazine issue. Magazines are reference-only and cannot be lent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    #[serde(flatten)]
    info: ItemInfo,
    genre: String,
}

impl Magazine {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        item_id: impl Into<ItemId>,
        genre: impl Into<String>,
    ) -> Self {
        Self::with_options(
            title,
            genre,
            ItemOptions::default().author(author).item_id(item_id),
        )
    }

    /// Magazine known only by title: author "Unknown", item id 0.
    pub fn titled(title: impl Into<String>, genre: impl Into<String>) -> Self {
        Self::with_options(title, genre, ItemOptions::default())
    }

    pub fn with_options(
        title: impl Into<String>,
        genre: impl Into<String>,
        options: ItemOptions,
    ) -> Self {
        Self {
            info: ItemInfo::new(title, options),
            genre: genre.into(),
        }
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }
}

impl LibraryItem for Magazine {
    fn info(&self) -> &ItemInfo {
        &self.info
    }

    // The author is not part of the magazine summary.
    fn display_details(&self) -> String {
        format!("Magazine Title: {}, Genre: {}", self.title(), self.genre)
    }
}

/// Catalog item kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Book,
    Magazine,
}

impl core::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ItemKind::Book => f.write_str("book"),
            ItemKind::Magazine => f.write_str("magazine"),
        }
    }
}

/// Any item held in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogItem {
    Book(Book),
    Magazine(Magazine),
}

impl CatalogItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            CatalogItem::Book(_) => ItemKind::Book,
            CatalogItem::Magazine(_) => ItemKind::Magazine,
        }
    }

    /// The lending capability, if this kind of item supports it.
    pub fn as_lendable(&self) -> Option<&dyn Lendable> {
        match self {
            CatalogItem::Book(book) => Some(book as &dyn Lendable),
            CatalogItem::Magazine(_) => None,
        }
    }
}

impl LibraryItem for CatalogItem {
    fn info(&self) -> &ItemInfo {
        match self {
            CatalogItem::Book(book) => book.info(),
            CatalogItem::Magazine(magazine) => magazine.info(),
        }
    }

    fn display_details(&self) -> String {
        match self {
            CatalogItem::Book(book) => book.display_details(),
            CatalogItem::Magazine(magazine) => magazine.display_details(),
        }
    }
}

impl Entity for CatalogItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.info().item_id
    }
}

impl From<Book> for CatalogItem {
    fn from(value: Book) -> Self {
        CatalogItem::Book(value)
    }
}

impl From<Magazine> for CatalogItem {
    fn from(value: Magazine) -> Self {
        CatalogItem::Magazine(value)
    }
}
