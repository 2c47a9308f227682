//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Expected works are written in wire form and
//! decoded through the same path as responses, so omitted fields take their
//! defaults on both sides.

use gutendex_core::{CatalogClient, CatalogError, HttpResponse, Query, RawWork, Work};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

fn client() -> CatalogClient {
    CatalogClient::new(BASE_URL)
}

fn string(value: &Value) -> String {
    value.as_str().unwrap().to_string()
}

/// Parse the `query` object from test vectors into a `Query`.
fn parse_query(query: &Value) -> Query {
    let value = &query["value"];
    match query["intent"].as_str().unwrap() {
        "all" => Query::All,
        "copyright" => Query::Copyright(value.as_bool().unwrap()),
        "ids" => Query::Ids(value.as_array().unwrap().iter().map(|v| v.as_u64().unwrap()).collect()),
        "languages" => Query::Languages(value.as_array().unwrap().iter().map(string).collect()),
        "search" => Query::Search(string(value)),
        "mime_type" => Query::MimeType(string(value)),
        "ascending" => Query::Ascending,
        "oldest" => Query::Oldest,
        "latest" => Query::Latest {
            topic: value.as_str().map(str::to_string),
        },
        other => panic!("unknown intent: {other}"),
    }
}

fn simulated(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: string(&sim["body"]),
    }
}

fn decode_expected(value: &Value) -> Work {
    let raw: RawWork = serde_json::from_value(value.clone()).unwrap();
    Work::decode(raw).unwrap()
}

/// Assert `err` matches the case's `expected_error` (and `expected_message`, if any).
fn check_error(name: &str, case: &Value, err: CatalogError) {
    match case["expected_error"].as_str().unwrap() {
        "RemoteRejection" => match err {
            CatalogError::RemoteRejection(detail) => {
                assert_eq!(detail, case["expected_message"].as_str().unwrap(), "{name}: detail")
            }
            other => panic!("{name}: expected RemoteRejection, got {other:?}"),
        },
        "Transport" => {
            let expected = case["simulated_response"]["status"].as_u64().unwrap() as u16;
            assert_eq!(err.status(), Some(expected), "{name}: status");
        }
        "InvalidIdentifier" => {
            assert!(matches!(err, CatalogError::InvalidIdentifier(_)), "{name}: expected InvalidIdentifier")
        }
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let raw = include_str!("../../test-vectors/list.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let query = parse_query(&case["query"]);

        // Verify build
        let req = c.build_list_works(&query);
        assert_eq!(
            req.url,
            format!("{BASE_URL}{}", case["expected_request"]["path"].as_str().unwrap()),
            "{name}: url"
        );

        // Verify parse
        let result = c.parse_list_works(simulated(case));
        if case.get("expected_error").is_some() {
            check_error(name, case, result.unwrap_err());
        } else {
            let expected: Vec<Work> = case["expected_result"]
                .as_array()
                .unwrap()
                .iter()
                .map(decode_expected)
                .collect();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    let raw = include_str!("../../test-vectors/get.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();

        // Verify build
        let req = c.build_get_work(id);
        assert_eq!(
            req.url,
            format!("{BASE_URL}{}", case["expected_request"]["path"].as_str().unwrap()),
            "{name}: url"
        );

        // Verify parse
        let result = c.parse_get_work(simulated(case));
        if case.get("expected_error").is_some() {
            check_error(name, case, result.unwrap_err());
        } else {
            assert_eq!(result.unwrap(), decode_expected(&case["expected_result"]), "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Format resolution
// ---------------------------------------------------------------------------

#[test]
fn format_test_vectors() {
    let raw = include_str!("../../test-vectors/formats.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let work = decode_expected(&serde_json::json!({ "id": 1, "formats": case["formats"] }));

        let text = c.text_url(&work).ok();
        assert_eq!(text, case["expected_text_url"].as_str(), "{name}: text url");

        let cover = c.cover_url(&work).ok();
        assert_eq!(cover, case["expected_cover_url"].as_str(), "{name}: cover url");
    }
}
