use crate::common;
use httpmock::Method::GET;
use sourcearena_rs::SaError;

#[tokio::test]
async fn single_symbol_error_body_maps_to_off_day() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/")
            .query_param("name", "شپنا")
            .query_param("time", "1402/01/01");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"Error": "holiday"}"#);
    });

    let client = common::client(&server);
    let err = client
        .get_single_symbol_information("شپنا", Some("1402/01/01"))
        .await
        .unwrap_err();

    mock.assert();
    match err {
        SaError::OffDay { date } => assert_eq!(date.as_deref(), Some("1402/01/01")),
        other => panic!("expected OffDay, got {other:?}"),
    }
}

#[tokio::test]
async fn all_symbols_error_body_maps_to_off_day() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/")
            .query_param("all", "-")
            .query_param("time", "1402/01/13");
        then.status(200).body(r#"{"Error":"No trades"}"#);
    });

    let client = common::client(&server);
    let err = client
        .get_all_symbols_information(None, Some("1402/01/13"))
        .await
        .unwrap_err();

    mock.assert();
    assert!(err.is_off_day(), "expected OffDay, got {err:?}");
    assert_eq!(err.to_string(), "The day 1402/01/13 is off");
}

#[tokio::test]
async fn off_day_without_date_has_no_date() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/").query_param("name", "X");
        then.status(200).body(r#"{"Error":"closed"}"#);
    });

    let client = common::client(&server);
    let err = client
        .get_single_symbol_information("X", None)
        .await
        .unwrap_err();

    mock.assert();
    assert!(matches!(err, SaError::OffDay { date: None }));
}
