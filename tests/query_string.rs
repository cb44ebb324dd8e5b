use strapi_query::prelude::*;
use strapi_query::qs::{self, ArrayFormat, StringifyOptions};

mod common;

use common::{expected_wire, round_trip};

#[test]
fn test_empty_query_string() {
    let q = query("api::example.example");
    assert_eq!(q.to_query_string(), "");
    assert_eq!(q.to_string(), "");
    assert_eq!(q.to_resource_url(), "api::example.example?");
}

#[test]
fn test_complex_query_string_matches_expected_structure() {
    let expected = "sort[0]=createdAt:desc&filters[user_id][id][$eq]=2\
        &filters[permissions][$eq]=private\
        &filters[$and][0][categories][$containsi]=favorite\
        &filters[$and][1][categories][$containsi]=invoice\
        &filters[$and][2][categories][$containsi]=mail\
        &populate[user_id][fields][0]=id&populate[creator][fields][0]=username\
        &pagination[pageSize]=2&pagination[page]=1";

    let q = query("api::example.example")
        .sort_by("createdAt", SortDirection::Desc)
        .r#where("user_id.id", json!({ "$eq": 2 }))
        .r#where("permissions", json!({ "$eq": "private" }))
        .and([json!({ "categories": { "$containsi": "favorite" } })])
        .and([json!({ "categories": { "$containsi": "invoice" } })])
        .and([json!({ "categories": { "$containsi": "mail" } })])
        .populate_relation("user_id", query("user_id").fields(["id"]).build())
        .populate_relation("creator", query("creator").fields(["username"]).build())
        .page_size(2)
        .page(1);

    assert_eq!(qs::parse(&q.to_query_string()), qs::parse(expected));
}

#[test]
fn test_exact_wire_format() {
    let q = query("books")
        .sort_by("createdAt", SortDirection::Desc)
        .r#where("field.$eq", "value")
        .and([json!({ "x": { "$eq": 1 } })])
        .populate_nested("rel", |rel| rel.fields(["id"]))
        .page(1);

    assert_eq!(
        q.to_query_string(),
        "sort[0]=createdAt%3Adesc&filters[field][$eq]=value&filters[$and][0][x][$eq]=1\
         &populate[rel][fields][0]=id&pagination[page]=1"
    );
}

#[test]
fn test_resource_url() {
    let q = query("api::restaurant.restaurant").r#where("id.$in", json!([3, 6, 8]));
    assert_eq!(
        q.to_resource_url(),
        "api::restaurant.restaurant?filters[id][$in][0]=3&filters[id][$in][1]=6&filters[id][$in][2]=8"
    );
}

#[test]
fn test_values_encoded_keys_raw() {
    let q = query("posts").r#where("title.$eq", "Hello World & Friends").locale("en");
    assert_eq!(
        q.to_query_string(),
        "filters[title][$eq]=Hello%20World%20%26%20Friends&locale=en"
    );
}

#[test]
fn test_custom_stringify_options() {
    let q = query("posts").fields(["id", "title"]).r#where("deletedAt.$eq", json!(null));

    let options = StringifyOptions {
        array_format: ArrayFormat::Brackets,
        skip_nulls: true,
        ..Default::default()
    };
    assert_eq!(q.to_query_string_with(&options), "fields[]=id&fields[]=title");
    assert_eq!(
        q.to_query_string(),
        "filters[deletedAt][$eq]=&fields[0]=id&fields[1]=title"
    );
}

#[test]
fn test_round_trip_reproduces_document() {
    let q = query("books")
        .r#where("title.$containsi", "rust & co")
        .r#where("rating.$between", json!([3.5, 5]))
        .or([
            json!({ "author": { "name": { "$eq": "Kai" } } }),
            json!({ "published": { "$eq": true } }),
        ])
        .not([json!({ "draft": { "$null": false } })])
        .sort("title")
        .desc("createdAt")
        .populate_nested("author", |a| {
            a.fields(["name", "bio"])
                .populate_nested("avatar", |av| av.fields(["url"]))
        })
        .populate_relation("tags", QueryDocument::new())
        .fields(["title", "summary"])
        .page(2)
        .page_size(25)
        .with_count(true)
        .drafts()
        .locale("fr-CA");

    assert_eq!(round_trip(&q), expected_wire(&q));
}

#[test]
fn test_round_trip_of_relation_list() {
    let q = query("books").populate(["author", "readers.books"]);
    assert_eq!(
        round_trip(&q),
        json!({ "populate": ["author", "readers.books"] })
    );
}

#[test]
fn test_document_display_matches_builder() {
    let q = query("books").r#where("id.$eq", 7).published();
    assert_eq!(q.document().to_string(), q.to_query_string());
}
