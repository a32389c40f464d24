use eth_tx_analyzer::api::{parse_txlist_response, TxListResponse};
use eth_tx_analyzer::utils::error::FetchError;

fn envelope(raw: &str) -> TxListResponse {
    serde_json::from_str(raw).unwrap()
}

#[test]
fn test_success_envelope_yields_records() {
    let body = envelope(
        r#"{
            "status": "1",
            "message": "OK",
            "result": [
                {"hash": "0xa", "from": "0x1", "to": "0x2", "gasUsed": "21000", "timeStamp": "1700000000"},
                {"hash": "0xb", "from": "0x1", "to": "", "gasUsed": "90000", "timeStamp": "1700000100"}
            ]
        }"#,
    );

    let txs = parse_txlist_response(body).unwrap();
    assert_eq!(txs.len(), 2);
    assert_eq!(txs[0].gas(), 21000);
    assert!(txs[1].to.is_empty());
}

#[test]
fn test_success_envelope_with_empty_result() {
    let body = envelope(r#"{"status": "1", "message": "OK", "result": []}"#);

    let txs = parse_txlist_response(body).unwrap();
    assert!(txs.is_empty());
}

#[test]
fn test_rate_limit_envelope() {
    let body = envelope(
        r#"{"status": "0", "message": "NOTOK", "result": "Max rate limit reached"}"#,
    );

    match parse_txlist_response(body) {
        Err(FetchError::RateLimited { message, detail }) => {
            assert_eq!(message, "NOTOK");
            assert!(detail.to_lowercase().contains("rate limit"));
        }
        other => panic!("expected RateLimited, got {:?}", other),
    }
}

#[test]
fn test_error_envelope_carries_explorer_detail() {
    let body = envelope(
        r#"{"status": "0", "message": "NOTOK", "result": "Invalid API Key"}"#,
    );

    match parse_txlist_response(body) {
        Err(FetchError::Api { message, detail }) => {
            assert_eq!(message, "NOTOK");
            assert_eq!(detail, "Invalid API Key");
        }
        other => panic!("expected Api, got {:?}", other),
    }
}

#[test]
fn test_success_status_with_bad_result_shape() {
    let body = envelope(r#"{"status": "1", "message": "OK", "result": "oops"}"#);

    assert!(matches!(
        parse_txlist_response(body),
        Err(FetchError::Json(_))
    ));
}
