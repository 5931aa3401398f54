use serde_json::{Value, json};

use super::types::{
    Acknowledgement, AuthSession, ForumComment, ForumTopic, HelpRequest, Message, RecordId, Review,
    ServiceStatus,
};
use super::{ApiCall, ApiRequest, Method, ResponseShape};

fn post(path: &str, body: Value) -> ApiRequest {
    ApiRequest::new(Method::Post, path).with_body(body)
}

/// Registration and login.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi;

impl AuthApi {
    #[must_use]
    pub fn register(username: &str, password: &str, role: &str) -> ApiCall<AuthSession> {
        ApiCall::new(
            post(
                "/api/register",
                json!({ "username": username, "password": password, "role": role }),
            ),
            ResponseShape::Bare,
        )
    }

    #[must_use]
    pub fn login(username: &str, password: &str) -> ApiCall<AuthSession> {
        ApiCall::new(
            post(
                "/api/login",
                json!({ "username": username, "password": password }),
            ),
            ResponseShape::Bare,
        )
    }
}

/// Help-request CRUD.
#[derive(Debug, Clone, Copy)]
pub struct HelpRequestApi;

impl HelpRequestApi {
    pub const DEFAULT_STATUS: &'static str = "open";

    #[must_use]
    pub fn get_requests(status: &str) -> ApiCall<Vec<HelpRequest>> {
        ApiCall::new(
            ApiRequest::new(Method::Get, "/api/help-requests").with_query("status", status),
            ResponseShape::Bare,
        )
    }

    #[must_use]
    pub fn get_open_requests() -> ApiCall<Vec<HelpRequest>> {
        Self::get_requests(Self::DEFAULT_STATUS)
    }

    #[must_use]
    pub fn get_request(request_id: RecordId) -> ApiCall<HelpRequest> {
        ApiCall::new(
            ApiRequest::new(Method::Get, format!("/api/help-requests/{request_id}")),
            ResponseShape::Bare,
        )
    }

    #[must_use]
    pub fn create_request(
        creator_id: RecordId,
        title: &str,
        description: &str,
        category: &str,
        latitude: f64,
        longitude: f64,
    ) -> ApiCall<HelpRequest> {
        ApiCall::new(
            post(
                "/api/help-requests",
                json!({
                    "creator_id": creator_id,
                    "title": title,
                    "description": description,
                    "category": category,
                    "latitude": latitude,
                    "longitude": longitude,
                }),
            ),
            ResponseShape::Field("request"),
        )
    }

    #[must_use]
    pub fn update_request(
        request_id: RecordId,
        status: &str,
        description: &str,
    ) -> ApiCall<HelpRequest> {
        ApiCall::new(
            ApiRequest::new(Method::Put, format!("/api/help-requests/{request_id}"))
                .with_body(json!({ "status": status, "description": description })),
            ResponseShape::Field("request"),
        )
    }

    #[must_use]
    pub fn delete_request(request_id: RecordId) -> ApiCall<Acknowledgement> {
        ApiCall::new(
            ApiRequest::new(Method::Delete, format!("/api/help-requests/{request_id}")),
            ResponseShape::Bare,
        )
    }
}

/// Direct messages between users.
#[derive(Debug, Clone, Copy)]
pub struct MessageApi;

impl MessageApi {
    #[must_use]
    pub fn get_messages(user_id: RecordId) -> ApiCall<Vec<Message>> {
        ApiCall::new(
            ApiRequest::new(Method::Get, "/api/messages").with_query("user_id", user_id),
            ResponseShape::Bare,
        )
    }

    #[must_use]
    pub fn send_message(
        sender_id: RecordId,
        receiver_id: RecordId,
        content: &str,
    ) -> ApiCall<Message> {
        ApiCall::new(
            post(
                "/api/messages",
                json!({ "sender_id": sender_id, "receiver_id": receiver_id, "content": content }),
            ),
            ResponseShape::Field("message"),
        )
    }

    #[must_use]
    pub fn mark_as_read(message_id: RecordId) -> ApiCall<Acknowledgement> {
        ApiCall::new(
            ApiRequest::new(Method::Put, format!("/api/messages/{message_id}/read")),
            ResponseShape::Bare,
        )
    }
}

/// Volunteer reviews.
#[derive(Debug, Clone, Copy)]
pub struct ReviewApi;

impl ReviewApi {
    #[must_use]
    pub fn get_reviews(volunteer_id: Option<RecordId>) -> ApiCall<Vec<Review>> {
        let mut request = ApiRequest::new(Method::Get, "/api/reviews");
        if let Some(id) = volunteer_id {
            request = request.with_query("volunteer_id", id);
        }
        ApiCall::new(request, ResponseShape::Bare)
    }

    #[must_use]
    pub fn create_review(
        reviewer_id: RecordId,
        volunteer_id: RecordId,
        rating: u8,
        comment: &str,
    ) -> ApiCall<Review> {
        ApiCall::new(
            post(
                "/api/reviews",
                json!({
                    "reviewer_id": reviewer_id,
                    "volunteer_id": volunteer_id,
                    "rating": rating,
                    "comment": comment,
                }),
            ),
            ResponseShape::Field("review"),
        )
    }
}

/// Forum topics and comments.
#[derive(Debug, Clone, Copy)]
pub struct ForumApi;

impl ForumApi {
    #[must_use]
    pub fn get_topics(category: Option<&str>) -> ApiCall<Vec<ForumTopic>> {
        let mut request = ApiRequest::new(Method::Get, "/api/forum/topics");
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            request = request.with_query("category", category);
        }
        ApiCall::new(request, ResponseShape::Bare)
    }

    #[must_use]
    pub fn get_topic(topic_id: RecordId) -> ApiCall<ForumTopic> {
        ApiCall::new(
            ApiRequest::new(Method::Get, format!("/api/forum/topics/{topic_id}")),
            ResponseShape::Bare,
        )
    }

    #[must_use]
    pub fn create_topic(
        creator_id: RecordId,
        title: &str,
        content: &str,
        category: &str,
    ) -> ApiCall<ForumTopic> {
        ApiCall::new(
            post(
                "/api/forum/topics",
                json!({
                    "creator_id": creator_id,
                    "title": title,
                    "content": content,
                    "category": category,
                }),
            ),
            ResponseShape::Field("topic"),
        )
    }

    #[must_use]
    pub fn create_comment(
        author_id: RecordId,
        topic_id: RecordId,
        content: &str,
    ) -> ApiCall<ForumComment> {
        ApiCall::new(
            post(
                "/api/forum/comments",
                json!({ "author_id": author_id, "topic_id": topic_id, "content": content }),
            ),
            ResponseShape::Field("comment"),
        )
    }
}

/// Service health and maintenance.
#[derive(Debug, Clone, Copy)]
pub struct StatusApi;

impl StatusApi {
    #[must_use]
    pub fn check_status() -> ApiCall<ServiceStatus> {
        ApiCall::new(ApiRequest::new(Method::Get, "/api/status"), ResponseShape::Bare)
    }

    #[must_use]
    pub fn init_database() -> ApiCall<Acknowledgement> {
        ApiCall::new(ApiRequest::new(Method::Post, "/api/init-db"), ResponseShape::Bare)
    }
}
