use anyhow::Result;
use clap::Subcommand;
use kl_admin_api::{auth, RequestConfig};
use kl_session::SessionStore;
use tracing::warn;

use crate::context::Context;

#[derive(Subcommand, Debug)]
pub enum AuthCmd {
	/// Log in and persist the session token
	Login { username: String, password: String },
	/// Register a new account and log in
	Register { username: String, password: String },
	/// Clear the local session and notify the backend
	Logout,
	/// Show the currently authenticated user
	Whoami,
}

pub async fn run(ctx: &mut Context, cmd: AuthCmd) -> Result<()> {
	match cmd {
		AuthCmd::Login { username, password } => {
			let payload = auth::AuthPayload {
				username: username.clone(),
				password,
			};
			login(&ctx.config, &mut ctx.store, &payload).await?;
			println!("Logged in as {username}");
		}
		AuthCmd::Register { username, password } => {
			let payload = auth::AuthPayload {
				username: username.clone(),
				password,
			};
			register(&ctx.config, &mut ctx.store, &payload).await?;
			println!("Registered {username} and logged in");
		}
		AuthCmd::Logout => {
			logout(&ctx.config, &mut ctx.store).await?;
			println!("Logged out");
		}
		AuthCmd::Whoami => {
			let user = auth::me(&ctx.config).await?;
			ctx.print(&user, |user| {
				println!("{} (id {}, role {})", user.username, user.id, user.role);
			})?;
		}
	}

	Ok(())
}

/// Authenticate and persist the issued token. Nothing is persisted when the
/// backend answers without a usable token.
pub async fn login(
	config: &RequestConfig,
	store: &mut SessionStore,
	payload: &auth::AuthPayload,
) -> Result<()> {
	let response = auth::login(config, payload).await?;
	store.set_token(response.token)?;
	Ok(())
}

pub async fn register(
	config: &RequestConfig,
	store: &mut SessionStore,
	payload: &auth::AuthPayload,
) -> Result<()> {
	let response = auth::register(config, payload).await?;
	store.set_token(response.token)?;
	Ok(())
}

/// Clearing the local session always succeeds; the backend notification is
/// best effort.
pub async fn logout(config: &RequestConfig, store: &mut SessionStore) -> Result<()> {
	if store.is_authenticated() {
		if let Err(e) = auth::logout(config).await {
			warn!("logout request failed: {e}");
		}
	}

	store.clear_token()?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	use axum::{routing::post, Json, Router};
	use serde_json::{json, Value};

	async fn serve(app: Router) -> String {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();

		tokio::spawn(async move {
			axum::serve(listener, app).await.unwrap();
		});

		format!("http://{addr}")
	}

	fn payload() -> auth::AuthPayload {
		auth::AuthPayload {
			username: "a".into(),
			password: "b".into(),
		}
	}

	#[tokio::test]
	async fn login_persists_the_issued_token() {
		async fn handler() -> Json<Value> {
			Json(json!({ "code": 0, "message": "", "success": true, "data": { "token": "T" } }))
		}

		let base_url = serve(Router::new().route("/login", post(handler))).await;
		let dir = tempfile::tempdir().unwrap();
		let mut store = SessionStore::load(dir.path()).unwrap();

		login(&RequestConfig::new(base_url), &mut store, &payload())
			.await
			.unwrap();

		assert!(store.is_authenticated());
		assert_eq!(store.token(), Some("T"));

		// The token survives the process: a reopened store sees it.
		let reopened = SessionStore::load(dir.path()).unwrap();
		assert_eq!(reopened.token(), Some("T"));
	}

	#[tokio::test]
	async fn failed_login_persists_nothing() {
		async fn handler() -> Json<Value> {
			Json(json!({ "code": 0, "message": "", "success": true, "data": { "token": "" } }))
		}

		let base_url = serve(Router::new().route("/login", post(handler))).await;
		let dir = tempfile::tempdir().unwrap();
		let mut store = SessionStore::load(dir.path()).unwrap();

		let err = login(&RequestConfig::new(base_url), &mut store, &payload())
			.await
			.unwrap_err();

		assert_eq!(err.to_string(), "login failed: no token received");
		assert!(!store.is_authenticated());
	}

	#[tokio::test]
	async fn logout_clears_the_token_even_when_the_backend_errors() {
		async fn handler() -> Json<Value> {
			Json(json!({ "code": 1, "message": "session unknown", "success": false, "data": null }))
		}

		let base_url = serve(Router::new().route("/logout", post(handler))).await;
		let dir = tempfile::tempdir().unwrap();
		let mut store = SessionStore::load(dir.path()).unwrap();
		store.set_token("T").unwrap();

		logout(&RequestConfig::new(base_url).with_token("T"), &mut store)
			.await
			.unwrap();

		assert!(!store.is_authenticated());
		assert_eq!(SessionStore::load(dir.path()).unwrap().token(), None);
	}

	#[tokio::test]
	async fn logout_without_a_session_is_a_no_op() {
		// No server at all: an unauthenticated logout never hits the network.
		let dir = tempfile::tempdir().unwrap();
		let mut store = SessionStore::load(dir.path()).unwrap();

		logout(&RequestConfig::new("http://127.0.0.1:1"), &mut store)
			.await
			.unwrap();

		assert!(!store.is_authenticated());
	}
}
