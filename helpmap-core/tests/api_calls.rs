use helpmap_core::api::types::{HelpRequest, ServiceStatus};
use helpmap_core::{
    ApiConfig, ApiError, AuthApi, ForumApi, HelpRequestApi, Method, MessageApi, ReviewApi,
    StatusApi,
};
use serde_json::json;

#[test]
fn auth_calls_post_credentials() {
    let call = AuthApi::register("john_doe", "password123", "volunteer");
    assert_eq!(call.request.method, Method::Post);
    assert_eq!(call.request.path, "/api/register");
    assert_eq!(
        call.request.body,
        Some(json!({ "username": "john_doe", "password": "password123", "role": "volunteer" }))
    );

    let session = AuthApi::login("john_doe", "password123")
        .decode(
            r#"{"success": true, "message": "ok",
                "user": {"id": 1, "username": "john_doe", "role": "volunteer", "created_at": "2025-01-01T00:00:00"},
                "token": "token_1"}"#,
        )
        .unwrap();
    assert_eq!(session.user.id, 1);
    assert_eq!(session.token, "token_1");
}

#[test]
fn help_request_paths_and_payloads() {
    let config = ApiConfig::new("http://localhost:5000");
    assert_eq!(
        config.url_for(&HelpRequestApi::get_open_requests().request),
        "http://localhost:5000/api/help-requests?status=open"
    );
    assert_eq!(
        config.url_for(&HelpRequestApi::get_request(12).request),
        "http://localhost:5000/api/help-requests/12"
    );

    let create = HelpRequestApi::create_request(
        1,
        "Moving help",
        "Need a hand",
        "relocation",
        43.2567,
        76.9286,
    );
    let body = create.request.body.clone().unwrap();
    assert_eq!(body["creator_id"], json!(1));
    assert_eq!(body["latitude"], json!(43.2567));

    let created: HelpRequest = create
        .decode(r#"{"success": true, "request": {"id": 3, "creator_id": "1", "title": "Moving help"}}"#)
        .unwrap();
    assert_eq!(created.creator_id, Some(1));
    assert_eq!(created.status, "open");

    let update = HelpRequestApi::update_request(3, "in_progress", "On the way");
    assert_eq!(update.request.method, Method::Put);
    assert_eq!(
        update.request.body,
        Some(json!({ "status": "in_progress", "description": "On the way" }))
    );

    let delete = HelpRequestApi::delete_request(3);
    assert_eq!(delete.request.method, Method::Delete);
    assert!(delete.request.body.is_none());
    assert!(delete.decode(r#"{"success": true}"#).unwrap().success);
}

#[test]
fn listing_endpoints_decode_bare_arrays() {
    let requests = HelpRequestApi::get_requests("open")
        .decode(r#"[{"id": 1, "title": "Groceries", "status": "open"}, {"id": 2, "title": "Ride"}]"#)
        .unwrap();
    assert_eq!(requests.len(), 2);

    let messages = MessageApi::get_messages(5)
        .decode(r#"[{"id": 1, "sender_id": 5, "receiver_id": 6, "content": "Hi"}]"#)
        .unwrap();
    assert_eq!(messages[0].receiver_id, Some(6));
    assert_eq!(MessageApi::get_messages(5).request.url(""), "/api/messages?user_id=5");
}

#[test]
fn optional_filters_only_when_given() {
    assert_eq!(ReviewApi::get_reviews(None).request.url(""), "/api/reviews");
    assert_eq!(ReviewApi::get_reviews(Some(9)).request.url(""), "/api/reviews?volunteer_id=9");
    assert_eq!(ForumApi::get_topics(None).request.url(""), "/api/forum/topics");
    assert_eq!(ForumApi::get_topics(Some("")).request.url(""), "/api/forum/topics");
    assert_eq!(
        ForumApi::get_topics(Some("advice")).request.url(""),
        "/api/forum/topics?category=advice"
    );
}

#[test]
fn messaging_forum_and_review_mutations() {
    let sent = MessageApi::send_message(1, 2, "Hello")
        .decode(r#"{"success": true, "message": {"id": 8, "sender_id": 1, "receiver_id": 2, "content": "Hello"}}"#)
        .unwrap();
    assert_eq!(sent.id, 8);
    assert_eq!(MessageApi::mark_as_read(8).request.path, "/api/messages/8/read");

    let review = ReviewApi::create_review(1, 2, 5, "Great help")
        .decode(r#"{"success": true, "review": {"id": 1, "rating": 5, "comment": "Great help"}}"#)
        .unwrap();
    assert_eq!(review.rating, Some(5));

    let topic = ForumApi::create_topic(1, "Finding volunteers", "How?", "advice");
    assert_eq!(topic.request.body.as_ref().unwrap()["category"], json!("advice"));
    let comment = ForumApi::create_comment(1, 4, "Same here")
        .decode(r#"{"success": true, "comment": {"id": 2, "topic_id": 4, "content": "Same here"}}"#)
        .unwrap();
    assert_eq!(comment.topic_id, Some(4));

    let detail = ForumApi::get_topic(4)
        .decode(r#"{"id": 4, "title": "Finding volunteers", "comments": [{"id": 2, "content": "Same here"}]}"#)
        .unwrap();
    assert_eq!(detail.comments.len(), 1);
}

#[test]
fn status_endpoints() {
    let status: ServiceStatus = StatusApi::check_status()
        .decode(r#"{"status": "ok", "message": "API is working", "service": "HelpMap", "features": ["auth", "chat"]}"#)
        .unwrap();
    assert!(status.is_ok());
    assert_eq!(status.features, vec!["auth", "chat"]);

    let init = StatusApi::init_database();
    assert_eq!(init.request.method, Method::Post);
    assert_eq!(init.request.path, "/api/init-db");
}

#[test]
fn backend_rejections_surface_as_errors() {
    let err = AuthApi::register("john_doe", "pw", "help")
        .decode_response(409, r#"{"success": false, "error": "User already exists"}"#)
        .unwrap_err();
    assert!(matches!(err, ApiError::Rejected(ref msg) if msg == "User already exists"));

    let err = HelpRequestApi::get_request(99).decode("not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
