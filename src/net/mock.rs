//! Scripted transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::http::{ApiClient, ApiRequest, RawResponse, Transport};
use crate::error::ClientError;

pub const BASE_URL: &str = "http://api.test";

/// Replies are consumed in order; every request is recorded.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: RefCell<VecDeque<Result<RawResponse, ClientError>>>,
    sent: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(RawResponse { status, body: body.to_owned() }));
        self
    }

    pub fn reply_json(self, status: u16, body: &serde_json::Value) -> Self {
        self.reply(status, &body.to_string())
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Err(ClientError::Network(message.to_owned())));
        self
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }

    pub fn client(self) -> ApiClient<Self> {
        ApiClient::new(BASE_URL, self)
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, ClientError> {
        self.sent.borrow_mut().push(request.clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Network("no scripted reply".to_owned())))
    }
}

/// A login reply for a user of `role` (`"jobseeker"`, `"employer"`, `"admin"`).
pub fn auth_body(role: &str, token: &str) -> serde_json::Value {
    serde_json::json!({
        "token": token,
        "user": { "id": 7, "email": "good@x.com", "name": "Good User", "role": role }
    })
}
