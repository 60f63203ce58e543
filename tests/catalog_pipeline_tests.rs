use techvault::domain::catalog::{
    DocumentCategory, DocumentEntry, ProductCategory, ProductModel, ProductSeries,
};
use techvault::domain::document::DocStyleTable;
use techvault::domain::filter::{
    DocumentFilter, Facet, FilterEvent, FilterState, PriceBucket, ProductFilter, SortKey,
};
use techvault::domain::product::ProductRecord;
use techvault::services::catalog_service::*;

fn model(name: &str, price: Option<&str>) -> ProductModel {
    ProductModel {
        name: name.to_string(),
        price: price.map(str::to_string),
        ..Default::default()
    }
}

fn series(name: &str, models: Vec<ProductModel>) -> ProductSeries {
    ProductSeries {
        id: name.to_lowercase(),
        name: name.to_string(),
        models,
        ..Default::default()
    }
}

fn category(name: &str, series: Vec<ProductSeries>) -> ProductCategory {
    ProductCategory {
        id: name.to_lowercase(),
        name: name.to_string(),
        series,
    }
}

fn names(records: &[ProductRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

fn sample_catalog() -> Vec<ProductCategory> {
    vec![
        category(
            "Speakers",
            vec![
                series(
                    "Ceiling",
                    vec![
                        model("Ceiling Speaker", Some("$250")),
                        model("Ceiling Sub", Some("$1,600")),
                    ],
                ),
                series("Pendant", vec![model("Pendant Speaker", Some("$80"))]),
            ],
        ),
        category(
            "Amplifiers",
            vec![series(
                "Power",
                vec![
                    model("amp two", Some("$700")),
                    model("Amp One", None),
                    model("Amp Max", Some("$250,000")),
                ],
            )],
        ),
    ]
}

#[test]
fn test_flatten_assigns_sequential_ids_in_traversal_order() {
    let records = flatten_products(&sample_catalog());

    assert_eq!(records.len(), 6);
    assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(
        names(&records),
        vec!["Ceiling Speaker", "Ceiling Sub", "Pendant Speaker", "amp two", "Amp One", "Amp Max"]
    );
    assert_eq!(records[0].full_name, "Speakers - Ceiling - Ceiling Speaker");
    assert_eq!(records[4].price, "Contact for price");
    assert_eq!(records[4].price_value, 0);
    assert_eq!(records[5].price_value, 250_000);
    assert_eq!(records[3].category_id, "amplifiers");
    assert_eq!(records[3].series_id, "power");

    println!("✅ Flattening preserves order and numbering");
}

#[test]
fn test_flatten_skips_empty_branches() {
    let tree = vec![
        category("Empty", vec![]),
        category("Hollow", vec![series("Nothing", vec![])]),
        category("Solo", vec![series("Only", vec![model("X", Some("$5"))])]),
    ];

    let records = flatten_products(&tree);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].category, "Solo");
}

#[test]
fn test_price_bucket_scenario() {
    let tree = vec![category(
        "Speakers",
        vec![series("S", vec![model("A", Some("$50")), model("B", Some("$2000"))])],
    )];
    let records = flatten_products(&tree);

    let low = ProductFilter::default()
        .reduce(FilterEvent::Price(Facet::from_value("0-100").unwrap()));
    assert_eq!(names(&apply_product_filters(&records, &low)), vec!["A"]);

    let high = ProductFilter::default()
        .reduce(FilterEvent::Price(Facet::from_value("1500-99999").unwrap()));
    assert_eq!(names(&apply_product_filters(&records, &high)), vec!["B"]);
}

#[test]
fn test_open_ended_top_bucket_keeps_expensive_products() {
    let records = flatten_products(&sample_catalog());
    let filter = ProductFilter::default()
        .reduce(FilterEvent::Price(Facet::Only(PriceBucket::new(1500, None))));

    let visible = apply_product_filters(&records, &filter);
    assert_eq!(names(&visible), vec!["Amp Max", "Ceiling Sub"]);
}

#[test]
fn test_unknown_category_yields_empty_result() {
    let records = flatten_products(&sample_catalog());
    let filter = ProductFilter::with_category("Turntables");

    assert!(apply_product_filters(&records, &filter).is_empty());
}

#[test]
fn test_search_is_case_insensitive_across_fields() {
    let records = flatten_products(&sample_catalog());

    let by_name = ProductFilter::default().reduce(FilterEvent::Query("ceiling".to_string()));
    assert_eq!(
        names(&apply_product_filters(&records, &by_name)),
        vec!["Ceiling Speaker", "Ceiling Sub"]
    );

    let by_category = ProductFilter::default().reduce(FilterEvent::Query("AMPLIF".to_string()));
    assert_eq!(apply_product_filters(&records, &by_category).len(), 3);

    let by_series = ProductFilter::default().reduce(FilterEvent::Query("pendant".to_string()));
    assert_eq!(names(&apply_product_filters(&records, &by_series)), vec!["Pendant Speaker"]);

    let by_full_name =
        ProductFilter::default().reduce(FilterEvent::Query("power - amp".to_string()));
    assert_eq!(apply_product_filters(&records, &by_full_name).len(), 3);
}

#[test]
fn test_default_sort_is_case_insensitive_name_order() {
    let records = flatten_products(&sample_catalog());
    let visible = apply_product_filters(&records, &ProductFilter::default());

    assert_eq!(
        names(&visible),
        vec!["Amp Max", "Amp One", "amp two", "Ceiling Speaker", "Ceiling Sub", "Pendant Speaker"]
    );

    let accented = vec![category(
        "Speakers",
        vec![series(
            "Mixed",
            vec![
                model("Zebra", Some("$10")),
                model("Éclair", Some("$10")),
                model("eclair", Some("$10")),
                model("Dune", Some("$10")),
                model("Écho", Some("$10")),
            ],
        )],
    )];
    let visible = apply_product_filters(&flatten_products(&accented), &ProductFilter::default());
    assert_eq!(names(&visible), vec!["Dune", "Écho", "eclair", "Éclair", "Zebra"]);
    assert_eq!(locale_cmp("Éclair", "Zebra"), std::cmp::Ordering::Less);
}

#[test]
fn test_price_sorts_reverse_each_other_without_ties() {
    let tree = vec![category(
        "C",
        vec![series(
            "S",
            vec![
                model("Mid", Some("$500")),
                model("Cheap", Some("$5")),
                model("Dear", Some("$5,000")),
                model("Low", Some("$50")),
            ],
        )],
    )];
    let records = flatten_products(&tree);

    let low = apply_product_filters(
        &records,
        &ProductFilter::default().reduce(FilterEvent::Sort(SortKey::PriceLow)),
    );
    let high = apply_product_filters(
        &records,
        &ProductFilter::default().reduce(FilterEvent::Sort(SortKey::PriceHigh)),
    );

    assert_eq!(names(&low), vec!["Cheap", "Low", "Mid", "Dear"]);
    let mut reversed = names(&high);
    reversed.reverse();
    assert_eq!(names(&low), reversed);
}

#[test]
fn test_price_sort_is_stable_for_ties() {
    let tree = vec![category(
        "C",
        vec![series(
            "S",
            vec![
                model("First $100", Some("$100")),
                model("Free", None),
                model("Second $100", Some("$100")),
                model("Third $100", Some("100 USD")),
            ],
        )],
    )];
    let records = flatten_products(&tree);

    let low = apply_product_filters(
        &records,
        &ProductFilter::default().reduce(FilterEvent::Sort(SortKey::PriceLow)),
    );
    assert_eq!(names(&low), vec!["Free", "First $100", "Second $100", "Third $100"]);

    let high = apply_product_filters(
        &records,
        &ProductFilter::default().reduce(FilterEvent::Sort(SortKey::PriceHigh)),
    );
    assert_eq!(names(&high), vec!["First $100", "Second $100", "Third $100", "Free"]);
}

#[test]
fn test_filters_compose_as_conjunction() {
    let records = flatten_products(&sample_catalog());
    let filter = ProductFilter::default()
        .reduce(FilterEvent::Category(Facet::Only("Speakers".to_string())))
        .reduce(FilterEvent::Price(Facet::Only(PriceBucket::new(100, Some(500)))))
        .reduce(FilterEvent::Query("speaker".to_string()));

    assert_eq!(names(&apply_product_filters(&records, &filter)), vec!["Ceiling Speaker"]);
}

#[test]
fn test_reset_restores_initial_view() {
    let records = flatten_products(&sample_catalog());
    let initial = apply_product_filters(&records, &ProductFilter::default());

    let narrowed = ProductFilter::default()
        .reduce(FilterEvent::Category(Facet::Only("Amplifiers".to_string())))
        .reduce(FilterEvent::Price(Facet::Only(PriceBucket::new(0, Some(100)))))
        .reduce(FilterEvent::Query("zzz".to_string()))
        .reduce(FilterEvent::Sort(SortKey::PriceHigh));
    assert!(apply_product_filters(&records, &narrowed).is_empty());

    let reset = narrowed.reduce(FilterEvent::Reset);
    assert_eq!(apply_product_filters(&records, &reset), initial);
}

#[test]
fn test_unique_categories_in_first_appearance_order() {
    let records = flatten_products(&sample_catalog());
    assert_eq!(unique_categories(&records), vec!["Speakers", "Amplifiers"]);
    assert_eq!(count_label(records.len(), "Products"), "6 Products");
}

fn doc(title: &str, doc_type: &str) -> DocumentEntry {
    DocumentEntry {
        title: title.to_string(),
        doc_type: doc_type.to_string(),
        url: format!("/docs/{}.pdf", title.to_lowercase().replace(' ', "-")),
        description: None,
    }
}

fn document_catalog() -> Vec<DocumentCategory> {
    vec![
        DocumentCategory {
            id: "spk".to_string(),
            category: "Speakers".to_string(),
            documents: vec![
                doc("Spk Warranty", "Warranty Info"),
                doc("Spk Manual", "User Manual"),
                doc("Spk Sheet", "Datasheet"),
            ],
        },
        DocumentCategory {
            id: "amp".to_string(),
            category: "amplifiers".to_string(),
            documents: vec![doc("Amp Guide", "Installation Guide"), doc("Amp Memo", "Memo")],
        },
    ]
}

#[test]
fn test_flatten_documents_styles_and_describes() {
    let records = flatten_documents(&document_catalog(), &DocStyleTable::default());

    assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    assert_eq!(records[1].icon, "📖");
    assert_eq!(records[1].color, "#3b82f6");
    assert_eq!(records[4].icon, "📄");
    assert_eq!(records[4].color, "#2563eb");
    assert_eq!(records[3].description, "Installation Guide for amplifiers");
    assert_eq!(records[3].category_id, "amp");
}

#[test]
fn test_documents_sort_by_category_then_type() {
    let records = flatten_documents(&document_catalog(), &DocStyleTable::default());
    let visible = apply_document_filters(&records, &DocumentFilter::default());

    let order: Vec<(&str, &str)> = visible
        .iter()
        .map(|r| (r.category.as_str(), r.doc_type.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("amplifiers", "Installation Guide"),
            ("amplifiers", "Memo"),
            ("Speakers", "Datasheet"),
            ("Speakers", "User Manual"),
            ("Speakers", "Warranty Info"),
        ]
    );
}

#[test]
fn test_document_type_and_search_filters() {
    let records = flatten_documents(&document_catalog(), &DocStyleTable::default());

    let by_type = DocumentFilter::default()
        .reduce(FilterEvent::DocType(Facet::Only("User Manual".to_string())));
    let visible = apply_document_filters(&records, &by_type);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Spk Manual");

    // generated descriptions are searchable too
    let by_description =
        DocumentFilter::default().reduce(FilterEvent::Query("guide for AMPLIFIERS".to_string()));
    assert_eq!(apply_document_filters(&records, &by_description).len(), 1);

    let nothing = DocumentFilter::default()
        .reduce(FilterEvent::Category(Facet::Only("Speakers".to_string())))
        .reduce(FilterEvent::DocType(Facet::Only("Memo".to_string())));
    assert!(apply_document_filters(&records, &nothing).is_empty());
}

#[test]
fn test_document_facets() {
    let records = flatten_documents(&document_catalog(), &DocStyleTable::default());

    assert_eq!(unique_document_categories(&records), vec!["Speakers", "amplifiers"]);
    assert_eq!(unique_doc_types(&records).len(), 5);
}
