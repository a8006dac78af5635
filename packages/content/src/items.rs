//! # List Items
//!
//! Helpers for the id-carrying lists inside sections (certifications, FAQs,
//! services, testimonials, highlights).
//!
//! - Ids are small integers unique within their list
//! - A new item gets `max(existing ids, 0) + 1`
//! - Removal filters by id, never by position
//! - Order is insertion order and is what the site displays

/// An entry of an id-carrying section list
pub trait ListItem {
    fn id(&self) -> u32;
}

/// Id the next inserted item should receive
pub fn next_id<T: ListItem>(items: &[T]) -> u32 {
    items.iter().map(ListItem::id).max().unwrap_or(0) + 1
}

/// Append an item built from the next free id and return that id
pub fn push_item<T: ListItem>(items: &mut Vec<T>, make: impl FnOnce(u32) -> T) -> u32 {
    let id = next_id(items);
    items.push(make(id));
    id
}

/// Remove every item carrying `id`; returns whether anything was removed
pub fn remove_item<T: ListItem>(items: &mut Vec<T>, id: u32) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}
