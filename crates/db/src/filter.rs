//! Translation of a [`QueryDescriptor`] into MongoDB query parts.

use articles_core::query::QueryDescriptor;
use mongodb::bson::{doc, Document};
use mongodb::options::FindOptions;

/// Stored field holding the article title.
pub const FIELD_TITLE: &str = "title";

/// Stored field holding the article description.
pub const FIELD_DESC: &str = "desc";

/// Build the filter document for a listing query.
///
/// Each substring predicate becomes a case-insensitive `$regex` on the
/// regex-escaped needle. Multiple predicates in one document are ANDed by
/// MongoDB.
pub fn filter_document(query: &QueryDescriptor) -> Document {
    let mut filter = Document::new();

    if let Some(needle) = &query.title_contains {
        filter.insert(FIELD_TITLE, contains_ignore_case(needle));
    }
    if let Some(needle) = &query.desc_contains {
        filter.insert(FIELD_DESC, contains_ignore_case(needle));
    }

    filter
}

/// Build skip, limit and sort options for a listing query.
///
/// The server reads `skip` and `limit` as signed 64-bit integers, so both are
/// capped at `i64::MAX`. A skip that large matches nothing either way.
pub fn find_options(query: &QueryDescriptor) -> FindOptions {
    let mut options = FindOptions::default();
    options.skip = Some(query.skip.min(i64::MAX.unsigned_abs()));
    options.limit = Some(i64::try_from(query.limit).unwrap_or(i64::MAX));
    options.sort = query.sort.as_ref().map(|sort| {
        let mut order = Document::new();
        order.insert(sort.field.as_str(), sort.direction.as_i32());
        order
    });
    options
}

fn contains_ignore_case(needle: &str) -> Document {
    doc! {
        "$regex": regex::escape(needle),
        "$options": "i",
    }
}
