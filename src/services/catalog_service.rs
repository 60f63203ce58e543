use crate::domain::catalog::{DocumentCategory, ProductCategory};
use crate::domain::document::{DocStyleTable, DocumentRecord};
use crate::domain::filter::{DocumentFilter, ProductFilter, SortKey};
use crate::domain::product::{PRICE_ON_REQUEST, ProductRecord, derived_price};
use crate::services::error_handling::LogHelper;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Walks category → series → model, numbering records from 1 in traversal order.
pub fn flatten_products(categories: &[ProductCategory]) -> Vec<ProductRecord> {
    let mut records = Vec::new();
    let mut next_id = 1;

    for category in categories {
        for series in &category.series {
            for model in &series.models {
                records.push(ProductRecord {
                    id: next_id,
                    name: model.name.clone(),
                    full_name: format!("{} - {} - {}", category.name, series.name, model.name),
                    price: model
                        .price
                        .clone()
                        .filter(|p| !p.is_empty())
                        .unwrap_or_else(|| PRICE_ON_REQUEST.to_string()),
                    price_value: derived_price(model.price.as_deref()),
                    image: model.image.clone().or_else(|| series.image.clone()),
                    category: category.name.clone(),
                    category_id: category.id.clone(),
                    series: series.name.clone(),
                    series_id: series.id.clone(),
                    description: series.description.clone().unwrap_or_default(),
                    specs: model.specs.clone().unwrap_or_default(),
                    submittals: series.submittals.clone().unwrap_or_default(),
                    other_docs: series.other_docs.clone().unwrap_or_default(),
                });
                next_id += 1;
            }
        }
    }

    records
}

/// Walks category → document, numbering from 1 and styling each record by type.
pub fn flatten_documents(
    categories: &[DocumentCategory],
    styles: &DocStyleTable,
) -> Vec<DocumentRecord> {
    let mut records = Vec::new();
    let mut next_id = 1;

    for category in categories {
        for doc in &category.documents {
            let style = styles.style_for(&doc.doc_type);
            records.push(DocumentRecord {
                id: next_id,
                title: doc.title.clone(),
                doc_type: doc.doc_type.clone(),
                category: category.category.clone(),
                category_id: category.id.clone(),
                url: doc.url.clone(),
                description: doc
                    .description
                    .clone()
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| format!("{} for {}", doc.doc_type, category.category)),
                icon: style.icon.clone(),
                color: style.color.clone(),
            });
            next_id += 1;
        }
    }

    records
}

/// Category, price bucket, free text, then sort. The sort is stable.
pub fn apply_product_filters(records: &[ProductRecord], filter: &ProductFilter) -> Vec<ProductRecord> {
    let query = filter.query.to_lowercase();

    let mut visible: Vec<ProductRecord> = records
        .iter()
        .filter(|r| filter.category.admits(&r.category))
        .filter(|r| match filter.price.selected() {
            Some(bucket) => bucket.contains(r.price_value),
            None => true,
        })
        .filter(|r| matches_query(&r.search_fields(), &query))
        .cloned()
        .collect();

    match filter.sort {
        SortKey::Name => visible.sort_by(|a, b| locale_cmp(&a.name, &b.name)),
        SortKey::PriceLow => visible.sort_by(|a, b| a.price_value.cmp(&b.price_value)),
        SortKey::PriceHigh => visible.sort_by(|a, b| b.price_value.cmp(&a.price_value)),
    }

    LogHelper::log_pipeline_run("products", records.len(), visible.len());
    visible
}

/// Category, document type, free text, then a fixed category/type order.
pub fn apply_document_filters(
    records: &[DocumentRecord],
    filter: &DocumentFilter,
) -> Vec<DocumentRecord> {
    let query = filter.query.to_lowercase();

    let mut visible: Vec<DocumentRecord> = records
        .iter()
        .filter(|r| filter.category.admits(&r.category))
        .filter(|r| filter.doc_type.admits(&r.doc_type))
        .filter(|r| matches_query(&r.search_fields(), &query))
        .cloned()
        .collect();

    visible.sort_by(|a, b| {
        locale_cmp(&a.category, &b.category).then_with(|| locale_cmp(&a.doc_type, &b.doc_type))
    });

    LogHelper::log_pipeline_run("documents", records.len(), visible.len());
    visible
}

/// Distinct product categories in first-appearance order.
pub fn unique_categories(records: &[ProductRecord]) -> Vec<String> {
    unique_in_order(records.iter().map(|r| r.category.as_str()))
}

/// Distinct document categories in first-appearance order.
pub fn unique_document_categories(records: &[DocumentRecord]) -> Vec<String> {
    unique_in_order(records.iter().map(|r| r.category.as_str()))
}

/// Distinct document types in first-appearance order.
pub fn unique_doc_types(records: &[DocumentRecord]) -> Vec<String> {
    unique_in_order(records.iter().map(|r| r.doc_type.as_str()))
}

pub fn count_label(count: usize, noun: &str) -> String {
    format!("{} {}", count, noun)
}

/// `query` must already be lowercase. An empty query matches everything.
fn matches_query(fields: &[&str], query: &str) -> bool {
    query.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(query))
}

/// Base letters first: accents and case are ignored, so `"Éclair"` sorts
/// before `"Zebra"` and `"apple"` before `"Banana"`. Ties fall back to the
/// accented lowercase form, then to bytes, so the order is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| {
            a.chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase))
        })
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn unique_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}
