//! End-to-end tests for the harvest loop and search pipeline against a mock
//! OAI-PMH endpoint.
//!
//! The library is blocking, so each test drives it from `spawn_blocking`
//! while wiremock runs on the test runtime.

use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pmc_oai_search::error::HarvestError;
use pmc_oai_search::http::create_client;
use pmc_oai_search::{harvest, search, SearchParams};

/// Build one OAI record with the given title and date.
fn record_xml(title: &str, date: &str) -> String {
    format!(
        r#"<record>
  <header><identifier>oai:pmc:{title}</identifier></header>
  <metadata>
    <dc xmlns="http://purl.org/dc/elements/1.1/">
      <title>{title}</title>
      <creator>Doe, J.</creator>
      <identifier>PMC1234567</identifier>
      <date>{date}</date>
    </dc>
  </metadata>
</record>"#
    )
}

/// Wrap records (and an optional resumption token) in a ListRecords envelope.
fn list_records_xml(records: &[String], token: Option<&str>) -> String {
    let token_xml = token
        .map(|t| format!("<resumptionToken>{t}</resumptionToken>"))
        .unwrap_or_default();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<OAI-PMH xmlns="http://www.openarchives.org/OAI/2.0/">
  <ListRecords>{}{token_xml}</ListRecords>
</OAI-PMH>"#,
        records.join("")
    )
}

/// Run a blocking harvest against the given endpoint from async test code.
async fn run_harvest(
    endpoint: String,
    max_records: usize,
) -> Result<Vec<pmc_oai_search::RawRecord>, HarvestError> {
    tokio::task::spawn_blocking(move || {
        let client = create_client()?;
        harvest(&client, &endpoint, max_records)
    })
    .await
    .expect("harvest task should not panic")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_single_page_without_token() {
    let server = MockServer::start().await;
    let body = list_records_xml(
        &[
            record_xml("Antibacterial suture study", "2005"),
            record_xml("Wound healing", "2010"),
            record_xml("Suture materials compared", "1995"),
        ],
        None,
    );
    Mock::given(method("GET"))
        .and(query_param("verb", "ListRecords"))
        .and(query_param("metadataPrefix", "oai_dc"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let records = run_harvest(server.uri(), 100).await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].title, "Antibacterial suture study");
    assert_eq!(records[2].title, "Suture materials compared");

    // Local filtering keeps only in-range records whose title matches
    let filtered =
        pmc_oai_search::filter::filter_records(records, "suture", 2000, 2025);
    let titles: Vec<&str> = filtered.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Antibacterial suture study"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_follows_resumption_token_in_order() {
    let server = MockServer::start().await;

    let page_one = list_records_xml(
        &[record_xml("First", "2001"), record_xml("Second", "2002")],
        Some("abc"),
    );
    let page_two = list_records_xml(&[record_xml("Third", "2003")], None);

    Mock::given(method("GET"))
        .and(query_param("metadataPrefix", "oai_dc"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_one))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("resumptionToken", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_two))
        .expect(1)
        .mount(&server)
        .await;

    let records = run_harvest(server.uri(), 100).await.unwrap();

    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_budget_stops_mid_page_without_further_requests() {
    let server = MockServer::start().await;

    let records: Vec<String> = (1..=5)
        .map(|i| record_xml(&format!("Record {i}"), "2005"))
        .collect();
    let page = list_records_xml(&records, Some("more"));

    Mock::given(method("GET"))
        .and(query_param("metadataPrefix", "oai_dc"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .expect(1)
        .mount(&server)
        .await;
    // The continuation must never be requested once the budget is hit
    Mock::given(method("GET"))
        .and(query_param("resumptionToken", "more"))
        .respond_with(ResponseTemplate::new(200).set_body_string("unused"))
        .expect(0)
        .mount(&server)
        .await;

    let records = run_harvest(server.uri(), 2).await.unwrap();

    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Record 1", "Record 2"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_budget_bounds_endpoint_that_always_returns_token() {
    let server = MockServer::start().await;

    let records: Vec<String> = (1..=10)
        .map(|i| record_xml(&format!("Record {i}"), "2005"))
        .collect();
    // Every page, initial or resumed, carries another token
    let endless_page = list_records_xml(&records, Some("again"));

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(endless_page))
        .mount(&server)
        .await;

    let records = run_harvest(server.uri(), 25).await.unwrap();
    assert_eq!(records.len(), 25);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_aborts_harvest() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = run_harvest(server.uri(), 100).await.unwrap_err();
    assert!(matches!(err, HarvestError::Http(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_xml_aborts_harvest() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<OAI-PMH><unclosed>"))
        .mount(&server)
        .await;

    let err = run_harvest(server.uri(), 100).await.unwrap_err();
    assert!(matches!(err, HarvestError::XmlParse(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_pipeline_end_to_end() {
    let server = MockServer::start().await;
    let body = list_records_xml(
        &[
            record_xml("Antibacterial suture trial", "2012"),
            record_xml("Suture technique history", "1995"),
            record_xml("Unrelated cardiology paper", "2015"),
        ],
        None,
    );
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let endpoint = server.uri();
    let matches = tokio::task::spawn_blocking(move || {
        let params = SearchParams {
            query: "suture".to_string(),
            from_year: 2000,
            to_year: 2025,
            max_records: 100,
        };
        search(&params, &endpoint)
    })
    .await
    .expect("search task should not panic")
    .unwrap();

    let titles: Vec<&str> = matches.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Antibacterial suture trial"]);
}
