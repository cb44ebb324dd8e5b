//! Queries taken from the REST API parameter documentation.

use strapi_query::prelude::*;

mod common;

#[test]
fn test_find_users_by_first_name() {
    let q = query("users").r#where("username.$eq", "John");
    assert_doc!(q, { "filters": { "username": { "$eq": "John" } } });
}

#[test]
fn test_find_restaurants_by_ids() {
    let q = query("restaurants").where_op("id", FilterOperator::In, json!([3, 6, 8]));
    assert_doc!(q, { "filters": { "id": { "$in": [3, 6, 8] } } });
}

#[test]
fn test_or_on_dates_with_author() {
    let q = query("books")
        .or([json!({ "date": { "$eq": "2020-01-01" } })])
        .or([json!({ "date": { "$eq": "2020-01-02" } })])
        .r#where("author.name.$eq", "Kai doe");

    assert_doc!(q, {
        "filters": {
            "$or": [
                { "date": { "$eq": "2020-01-01" } },
                { "date": { "$eq": "2020-01-02" } }
            ],
            "author": { "name": { "$eq": "Kai doe" } }
        }
    });
}

#[test]
fn test_deep_filtering_on_relations() {
    let q = query("restaurants").r#where("chef.restaurants.stars.$eq", 5);
    assert_doc!(q, {
        "filters": { "chef": { "restaurants": { "stars": { "$eq": 5 } } } }
    });
    assert_eq!(q.to_query_string(), "filters[chef][restaurants][stars][$eq]=5");
}

#[test]
fn test_and_or_with_locale() {
    let q = query("users")
        .and([json!({ "name": { "$eq": "John" } })])
        .and([json!({ "date": { "$eq": "2020-01-01" } })])
        .or([
            json!({ "status": { "$eq": "published" } }),
            json!({ "status": { "$eq": "draft" } }),
        ])
        .locale("en");

    assert_doc!(q, {
        "filters": {
            "$and": [{ "name": { "$eq": "John" } }, { "date": { "$eq": "2020-01-01" } }],
            "$or": [{ "status": { "$eq": "published" } }, { "status": { "$eq": "draft" } }]
        },
        "locale": "en"
    });
}

#[test]
fn test_typed_populate_with_filter() {
    let q = query("users").populate_nested("books", |book| {
        book.where_op("title", FilterOperator::ContainsInsensitive, "test")
    });
    assert_doc!(q, {
        "populate": { "books": { "filters": { "title": { "$containsi": "test" } } } }
    });
}

#[test]
fn test_not_null_filter() {
    let q = query("users").where_op("name", FilterOperator::NotNull, true);
    assert_doc!(q, { "filters": { "name": { "$notNull": true } } });
    assert_eq!(q.to_query_string(), "filters[name][$notNull]=true");
}

#[test]
fn test_json_output() {
    let q = query("articles").r#where("title.$eq", "Hi").sort("id");
    assert_eq!(
        q.to_json().unwrap(),
        r#"{
  "sort": [
    "id:asc"
  ],
  "filters": {
    "title": {
      "$eq": "Hi"
    }
  }
}"#
    );
}

#[test]
fn test_document_reference_tracks_builder() {
    let mut q = query("articles").page(1);
    q.document_mut()
        .pagination
        .get_or_insert_with(Default::default)
        .page_size = Some(50);
    let q = q.with_count(true);

    assert_doc!(q, { "pagination": { "page": 1, "pageSize": 50, "withCount": true } });
}
