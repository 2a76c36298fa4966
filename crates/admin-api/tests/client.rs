//! End-to-end client tests against a loopback HTTP server speaking the
//! canonical response envelope.

use std::collections::HashMap;

use axum::{
	extract::Query,
	http::HeaderMap,
	routing::{get, post},
	Json, Router,
};
use serde_json::{json, Value};

use kl_admin_api::{auth, users, Error, RequestConfig};

async fn serve(app: Router) -> String {
	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();

	tokio::spawn(async move {
		axum::serve(listener, app).await.unwrap();
	});

	format!("http://{addr}")
}

fn ok(data: Value) -> Json<Value> {
	Json(json!({ "code": 0, "message": "", "success": true, "data": data }))
}

async fn echo_auth_header(headers: HeaderMap) -> Json<Value> {
	let authorization = headers
		.get("authorization")
		.map(|v| v.to_str().unwrap().to_owned())
		.unwrap_or_else(|| "<none>".to_owned());

	ok(json!({ "id": 1, "username": authorization, "role": "admin" }))
}

#[tokio::test]
async fn bearer_header_is_attached_when_a_token_is_present() {
	let base_url = serve(Router::new().route("/user/info", get(echo_auth_header))).await;

	let config = RequestConfig::new(base_url).with_token("secret");
	let user = auth::me(&config).await.unwrap();

	assert_eq!(user.username, "Bearer secret");
}

#[tokio::test]
async fn no_authorization_header_is_sent_without_a_token() {
	let base_url = serve(Router::new().route("/user/info", get(echo_auth_header))).await;

	let config = RequestConfig::new(base_url);
	let user = auth::me(&config).await.unwrap();

	assert_eq!(user.username, "<none>");
}

#[tokio::test]
async fn login_resolves_with_the_issued_token() {
	async fn login(Json(payload): Json<Value>) -> Json<Value> {
		assert_eq!(payload["username"], "a");
		assert_eq!(payload["password"], "b");
		ok(json!({ "token": "T" }))
	}

	let base_url = serve(Router::new().route("/login", post(login))).await;

	let config = RequestConfig::new(base_url);
	let payload = auth::AuthPayload {
		username: "a".into(),
		password: "b".into(),
	};
	let response = auth::login(&config, &payload).await.unwrap();

	assert_eq!(response.token, "T");
}

#[tokio::test]
async fn login_rejects_when_no_usable_token_comes_back() {
	async fn login() -> Json<Value> {
		ok(json!({ "token": "" }))
	}

	let base_url = serve(Router::new().route("/login", post(login))).await;

	let config = RequestConfig::new(base_url);
	let payload = auth::AuthPayload {
		username: "a".into(),
		password: "b".into(),
	};
	let err = auth::login(&config, &payload).await.unwrap_err();

	assert!(matches!(err, Error::MissingToken));
	assert_eq!(err.to_string(), "login failed: no token received");
}

#[tokio::test]
async fn application_failures_reject_with_the_envelope_message() {
	async fn fail() -> Json<Value> {
		Json(json!({ "code": 1, "message": "bad input", "success": false, "data": null }))
	}

	let base_url = serve(Router::new().route("/admin/users/list", get(fail))).await;

	let config = RequestConfig::new(base_url).with_token("secret");
	let err = users::list(&config, &users::list::Params::default())
		.await
		.unwrap_err();

	match err {
		Error::Api { code, message } => {
			assert_eq!(code, 1);
			assert_eq!(message, "bad input");
		}
		other => panic!("expected Api error, got {other:?}"),
	}
}

#[tokio::test]
async fn list_parameters_travel_as_query_parameters() {
	async fn list(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
		assert_eq!(params["page"], "2");
		assert_eq!(params["page_size"], "50");
		assert_eq!(params["username"], "neo");

		ok(json!({
			"list": [{
				"id": 7,
				"username": "neo",
				"balance": "0",
				"inviter_id": null,
				"invite_count": 0,
				"invite_rebate_total": 0,
				"role_id": 1,
				"role_name": "admin",
				"created_at": "2026-01-01 00:00:00"
			}],
			"page": 2,
			"total": 1
		}))
	}

	let base_url = serve(Router::new().route("/admin/users/list", get(list))).await;

	let config = RequestConfig::new(base_url).with_token("secret");
	let params = users::list::Params {
		page: 2,
		page_size: 50,
		username: Some("neo".into()),
	};
	let paging = users::list(&config, &params).await.unwrap();

	assert_eq!(paging.total, 1);
	assert_eq!(paging.list[0].username, "neo");
}

#[tokio::test]
async fn unit_endpoints_accept_a_null_payload() {
	async fn logout() -> Json<Value> {
		ok(Value::Null)
	}

	let base_url = serve(Router::new().route("/logout", post(logout))).await;

	let config = RequestConfig::new(base_url).with_token("secret");
	auth::logout(&config).await.unwrap();
}
