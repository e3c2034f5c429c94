mod support;

use clawsino::client::{Operation, Response};
use clawsino::error::{ClawsinoError, ErrorCategory};
use clawsino::types::{DiceBetRequest, DiceMode, PokerAction};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use support::{authorization_headers, client, received_bodies, TOKEN};

#[tokio::test]
async fn dice_bet_passes_outcome_through() {
    let server = MockServer::start().await;
    let body = json!({"outcome": {"roll": 12.3, "win": true, "payout": 200}, "balance": 1100});
    Mock::given(method("POST"))
        .and(path("/v1/dice/bet"))
        .and(header("authorization", "Bearer session-token-1"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"amount": 100, "mode": "under", "threshold": 49.5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let bet = DiceBetRequest::builder()
        .amount(100)
        .mode(DiceMode::Under)
        .threshold(49.5)
        .build();
    let result = client(&server, Some(TOKEN)).dice_bet(&bet).await.expect("bet");

    let outcome = result.outcome.as_ref().expect("outcome");
    assert_eq!(outcome.win, Some(true));
    assert_eq!(outcome.payout, Some(200.0));
    assert_eq!(result.balance, Some(1100.0));
    assert_eq!(serde_json::to_value(&result).unwrap(), body);
}

#[tokio::test]
async fn me_returns_account_snapshot() {
    let server = MockServer::start().await;
    let body = json!({"handle": "openclaw-bot", "balance": 1000, "freeSpins": 2, "createdAt": "2026-01-01"});
    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .and(header("authorization", "Bearer session-token-1"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let me = client(&server, Some(TOKEN)).me().await.expect("me");
    assert_eq!(me.handle.as_deref(), Some("openclaw-bot"));
    assert_eq!(me.balance, Some(1000.0));
    assert_eq!(me.free_spins, Some(2));
    assert_eq!(serde_json::to_value(&me).unwrap(), body);
}

#[tokio::test]
async fn unauthorized_is_authentication_error_and_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error":"invalid session"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server, Some(TOKEN)).me().await.unwrap_err();
    match &err {
        ClawsinoError::Authentication { status, message } => {
            assert_eq!(*status, 401);
            assert_eq!(message, r#"{"error":"invalid session"}"#);
        }
        other => panic!("expected Authentication, got {other:?}"),
    }
    assert!(err.needs_reauthentication());
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unauthorized_on_game_call_is_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/slots/spin"))
        .respond_with(ResponseTemplate::new(401).set_body_string("expired"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server, Some(TOKEN)).slots_spin(10).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Authentication);
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn authenticated_calls_without_token_send_nothing() {
    let server = MockServer::start().await;
    let client = client(&server, None);

    let err = client.me().await.unwrap_err();
    assert!(matches!(err, ClawsinoError::MissingToken { operation: "me" }));
    assert!(matches!(
        client.poker_state("t1").await.unwrap_err(),
        ClawsinoError::MissingToken { .. }
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn leaderboard_sends_limit_and_passes_entries_through() {
    let server = MockServer::start().await;
    let entries: Vec<_> = (1..=10)
        .map(|rank| json!({"rank": rank, "handle": format!("p{rank}"), "balance": 1000 - rank}))
        .collect();
    Mock::given(method("GET"))
        .and(path("/v1/leaderboard"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"leaderboard": entries})))
        .expect(1)
        .mount(&server)
        .await;

    let board = client(&server, None).leaderboard(10).await.expect("leaderboard");
    assert_eq!(board.entries().len(), 10);
    assert_eq!(board.entries()[0].handle.as_deref(), Some("p1"));
    assert_eq!(authorization_headers(&server).await, vec![None]);
}

#[tokio::test]
async fn leaderboard_attaches_token_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/leaderboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    client(&server, Some(TOKEN)).leaderboard(3).await.expect("leaderboard");
    assert_eq!(
        authorization_headers(&server).await,
        vec![Some("Bearer session-token-1".to_string())]
    );
}

#[tokio::test]
async fn client_errors_keep_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/slots/spin"))
        .respond_with(ResponseTemplate::new(422).set_body_string(r#"{"error":"insufficient balance"}"#))
        .mount(&server)
        .await;

    let err = client(&server, Some(TOKEN)).slots_spin(1_000_000).await.unwrap_err();
    match err {
        ClawsinoError::Validation { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, r#"{"error":"insufficient balance"}"#);
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn server_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/poker/tables"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server, Some(TOKEN)).poker_tables().await.unwrap_err();
    assert!(matches!(err, ClawsinoError::Server { status: 503, .. }));
    assert_eq!(err.category(), ErrorCategory::Server);
}

#[tokio::test]
async fn malformed_json_is_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client(&server, Some(TOKEN)).me().await.unwrap_err();
    assert!(matches!(err, ClawsinoError::Serialization(_)));
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let config = clawsino::config::ClientConfig::new()
        .with_base_url("http://127.0.0.1:1")
        .with_token(TOKEN);
    let client = clawsino::client::ClawsinoClient::new(config).unwrap();

    let err = client.me().await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Network);
}

#[tokio::test]
async fn slots_spin_sends_amount() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/slots/spin"))
        .and(body_json(json!({"amount": 25})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "grid": [["A", "A", "A"]],
            "lineWins": [{"line": 0, "payout": 75}],
            "balance": 1050
        })))
        .expect(1)
        .mount(&server)
        .await;

    let spin = client(&server, Some(TOKEN)).slots_spin(25).await.expect("spin");
    assert_eq!(spin.balance, Some(1050.0));
    assert_eq!(spin.line_wins.as_ref().map(Vec::len), Some(1));
}

#[tokio::test]
async fn settled_bet_with_fractional_amounts_decodes() {
    let server = MockServer::start().await;
    let body = json!({"outcome": {"roll": 12.3, "win": true, "payout": 199.5}, "balance": 1100.5});
    Mock::given(method("POST"))
        .and(path("/v1/dice/bet"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let bet = DiceBetRequest::builder()
        .amount(100)
        .mode(DiceMode::Under)
        .threshold(49.5)
        .build();
    let result = client(&server, Some(TOKEN)).dice_bet(&bet).await.expect("bet");

    assert!(result.won());
    assert_eq!(result.outcome.as_ref().and_then(|o| o.payout), Some(199.5));
    assert_eq!(result.balance, Some(1100.5));
    assert_eq!(serde_json::to_value(&result).unwrap(), body);
}

#[tokio::test]
async fn null_fields_survive_to_printed_json() {
    let server = MockServer::start().await;
    let body = json!({
        "grid": [["A"]],
        "scatterWin": null,
        "freeSpins": null,
        "totalWin": 0,
        "balance": 950
    });
    Mock::given(method("POST"))
        .and(path("/v1/slots/spin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let response = client(&server, Some(TOKEN))
        .execute(Operation::SlotsSpin { amount: 10 })
        .await
        .expect("spin");
    assert_eq!(response.to_json().unwrap(), body);
}

#[tokio::test]
async fn token_that_is_not_a_header_value_fails_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"handle": "bot"})))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server, Some("ab\ncd")).me().await.unwrap_err();
    assert!(matches!(err, ClawsinoError::Configuration(_)), "{err:?}");
    assert_eq!(err.category(), ErrorCategory::Configuration);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn poker_join_posts_buy_in_to_table_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/poker/tables/table-7/join"))
        .and(body_json(json!({"buyIn": 500})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "seat": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let ack = client(&server, Some(TOKEN))
        .poker_join("table-7", 500, None)
        .await
        .expect("join");
    assert_eq!(ack.ok, Some(true));
    assert_eq!(ack.extra.get("seat"), Some(&json!(2)));
}

#[tokio::test]
async fn poker_act_sends_action_and_amount() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/poker/tables/t1/act"))
        .and(body_json(json!({"action": "raise", "amount": 60})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/poker/tables/t1/act"))
        .and(body_json(json!({"action": "check"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, Some(TOKEN));
    client
        .poker_act("t1", PokerAction::Raise, Some(60))
        .await
        .expect("raise");
    client
        .poker_act("t1", PokerAction::Check, None)
        .await
        .expect("check");
}

#[tokio::test]
async fn poker_leave_sends_empty_object_and_accepts_empty_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/poker/tables/t1/leave"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let ack = client(&server, Some(TOKEN)).poker_leave("t1").await.expect("leave");
    assert_eq!(ack.ok, None);
    assert!(ack.extra.is_empty());
    assert_eq!(received_bodies(&server).await, vec![json!({})]);
}

#[tokio::test]
async fn poker_state_and_hand_are_fetched_by_id() {
    let server = MockServer::start().await;
    let state = json!({"tableId": "t1", "handId": 9, "street": "river", "pot": 300});
    let hand = json!({"id": 9, "tableId": "t1", "winners": [{"handle": "bot"}]});
    Mock::given(method("GET"))
        .and(path("/v1/poker/tables/t1/state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(state.clone()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/poker/hands/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(hand.clone()))
        .mount(&server)
        .await;

    let client = client(&server, Some(TOKEN));
    let got_state = client.poker_state("t1").await.expect("state");
    assert_eq!(got_state.street.as_deref(), Some("river"));
    assert_eq!(serde_json::to_value(&got_state).unwrap(), state);

    let got_hand = client.poker_hand("9").await.expect("hand");
    assert_eq!(serde_json::to_value(&got_hand).unwrap(), hand);
}

#[tokio::test]
async fn blank_table_id_is_rejected_locally() {
    let server = MockServer::start().await;
    let err = client(&server, Some(TOKEN)).poker_state("  ").await.unwrap_err();
    assert!(matches!(err, ClawsinoError::InvalidArgument(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn health_needs_no_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/healthz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let health = client(&server, None).health().await.expect("health");
    assert_eq!(health.ok, Some(true));
}

#[tokio::test]
async fn execute_dispatches_to_matching_response_variant() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/poker/tables"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tables": [{"id": "t1"}]})))
        .mount(&server)
        .await;

    let response = client(&server, Some(TOKEN))
        .execute(Operation::PokerTables)
        .await
        .expect("execute");
    match &response {
        Response::PokerTables(tables) => assert_eq!(tables.tables().len(), 1),
        other => panic!("expected PokerTables, got {other:?}"),
    }
    assert_eq!(response.to_json().unwrap(), json!({"tables": [{"id": "t1"}]}));
}
