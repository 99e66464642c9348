use super::*;
use hearth_core::message::{Button, Keyboard, OutgoingMessage, UpdateKind};
use hearth_core::traits::Messenger;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn channel(server: &MockServer) -> TelegramChannel {
    let config = TelegramConfig {
        bot_token: "123:abc".to_string(),
        chat_id: "-100500".to_string(),
    };
    TelegramChannel::with_api_base(config, &server.uri(), Duration::from_secs(2), 0)
}

#[tokio::test]
async fn test_send_returns_message_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .and(body_partial_json(serde_json::json!({
            "chat_id": -100500,
            "parse_mode": "HTML",
            "text": "hello",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "result": { "message_id": 42, "chat": { "id": -100500 }, "text": "hello" }
        })))
        .mount(&server)
        .await;

    let sent = channel(&server)
        .send(&OutgoingMessage::text("hello"))
        .await
        .unwrap();
    assert_eq!(sent.message_id, 42);
}

#[tokio::test]
async fn test_send_non_200_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad Request: chat not found"))
        .mount(&server)
        .await;

    let err = channel(&server)
        .send(&OutgoingMessage::text("hello"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("chat not found"), "{err}");
}

#[tokio::test]
async fn test_send_ok_false_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": false,
            "description": "Forbidden"
        })))
        .mount(&server)
        .await;

    let err = channel(&server)
        .send(&OutgoingMessage::text("hello"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("ok=false"), "{err}");
}

#[tokio::test]
async fn test_edit_sends_inline_keyboard() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/editMessageText"))
        .and(body_partial_json(serde_json::json!({
            "message_id": 7,
            "disable_web_page_preview": true,
            "reply_markup": {
                "inline_keyboard": [[{ "text": "⬜ 1. Зарядка", "callback_data": "toggle_day_0" }]]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "result": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let keyboard = Keyboard {
        rows: vec![vec![Button::new("⬜ 1. Зарядка", "toggle_day_0")]],
    };
    let message = OutgoingMessage::text("checklist")
        .with_keyboard(keyboard)
        .without_preview();
    channel(&server).edit(7, &message).await.unwrap();
}

#[tokio::test]
async fn test_answer_callback_with_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/answerCallbackQuery"))
        .and(body_partial_json(serde_json::json!({
            "callback_query_id": "cb1",
            "text": "saved"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "result": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    channel(&server)
        .answer_callback("cb1", Some("saved"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_updates_maps_messages_and_callbacks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bot123:abc/getUpdates"))
        .and(query_param("offset", "11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "result": [
                {
                    "update_id": 11,
                    "message": { "message_id": 1, "chat": { "id": -100500 }, "text": "• task" }
                },
                {
                    "update_id": 12,
                    "callback_query": {
                        "id": "cb9",
                        "data": "toggle_cant_do_1",
                        "message": { "message_id": 5, "chat": { "id": -100500 }, "text": "list" }
                    }
                },
                {
                    "update_id": 13,
                    "message": { "message_id": 2, "chat": { "id": -100500 } }
                },
                {
                    "update_id": 14,
                    "channel_post": { "message_id": 3, "chat": { "id": -100500 }, "text": "• post" }
                }
            ]
        })))
        .mount(&server)
        .await;

    let updates = channel(&server).get_updates(Some(11)).await.unwrap();
    assert_eq!(updates.len(), 4);
    match &updates[0].kind {
        UpdateKind::Message(m) => {
            assert_eq!(m.chat_id, -100500);
            assert_eq!(m.text, "• task");
        }
        other => panic!("expected message, got {other:?}"),
    }
    match &updates[1].kind {
        UpdateKind::Callback(cq) => {
            assert_eq!(cq.id, "cb9");
            assert_eq!(cq.data, "toggle_cant_do_1");
            assert_eq!(cq.message_id, 5);
            assert_eq!(cq.message_text, "list");
        }
        other => panic!("expected callback, got {other:?}"),
    }
    assert_eq!(updates[2].kind, UpdateKind::Other);
    assert_eq!(updates[2].update_id, 13);
    assert!(matches!(&updates[3].kind, UpdateKind::Message(m) if m.text == "• post"));
}

#[test]
fn test_channel_chat_id_string_kept() {
    let config = TelegramConfig {
        bot_token: "t".into(),
        chat_id: "@family".into(),
    };
    let ch = TelegramChannel::new(config, Duration::from_secs(1), 30);
    assert_eq!(ch.chat_id_value(), serde_json::json!("@family"));
    assert_eq!(ch.base_url, "https://api.telegram.org/bott");
}
