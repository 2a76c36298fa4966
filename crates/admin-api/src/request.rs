use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};

use crate::{Envelope, Error, RequestConfig, WithAuth};

/// Send one request and unwrap the response envelope.
///
/// The bearer header is attached iff the config carries a token, and every
/// call logs its method, URL, request body and response body.
pub(crate) async fn send<T, Q, B>(
	config: &RequestConfig,
	method: Method,
	path: &str,
	query: Option<&Q>,
	body: Option<&B>,
) -> Result<T, Error>
where
	T: DeserializeOwned,
	Q: Serialize + ?Sized,
	B: Serialize + ?Sized,
{
	let url = format!("{}{}", config.base_url, path);

	let mut request = config.client.request(method.clone(), &url);
	if let Some(query) = query {
		request = request.query(query);
	}
	if let Some(body) = body {
		request = request.json(body);
	}
	if let Some(token) = config.token.as_deref() {
		request = request.with_auth(token);
	}

	debug!(
		%method,
		%url,
		body = body
			.and_then(|body| serde_json::to_string(body).ok())
			.unwrap_or_default(),
		"request"
	);

	let response = request.send().await.map_err(|e| {
		error!(%method, %url, "transport failure: {e}");
		Error::Transport(e)
	})?;

	let text = response.text().await?;
	debug!(%method, %url, body = %text, "response");

	let envelope: Envelope<T> = serde_json::from_str(&text)?;
	envelope.into_result().map_err(|e| {
		if let Error::Api { code, message } = &e {
			error!(%method, %url, code, "api failure: {message}");
		}
		e
	})
}

pub(crate) async fn get<T, Q>(config: &RequestConfig, path: &str, query: &Q) -> Result<T, Error>
where
	T: DeserializeOwned,
	Q: Serialize + ?Sized,
{
	send(config, Method::GET, path, Some(query), None::<&()>).await
}

pub(crate) async fn get_plain<T: DeserializeOwned>(
	config: &RequestConfig,
	path: &str,
) -> Result<T, Error> {
	send(config, Method::GET, path, None::<&()>, None::<&()>).await
}

pub(crate) async fn post<T, B>(config: &RequestConfig, path: &str, body: &B) -> Result<T, Error>
where
	T: DeserializeOwned,
	B: Serialize + ?Sized,
{
	send(config, Method::POST, path, None::<&()>, Some(body)).await
}

pub(crate) async fn post_empty<T: DeserializeOwned>(
	config: &RequestConfig,
	path: &str,
) -> Result<T, Error> {
	send(config, Method::POST, path, None::<&()>, None::<&()>).await
}

pub(crate) async fn put<T, B>(config: &RequestConfig, path: &str, body: &B) -> Result<T, Error>
where
	T: DeserializeOwned,
	B: Serialize + ?Sized,
{
	send(config, Method::PUT, path, None::<&()>, Some(body)).await
}

pub(crate) async fn delete<T: DeserializeOwned>(
	config: &RequestConfig,
	path: &str,
) -> Result<T, Error> {
	send(config, Method::DELETE, path, None::<&()>, None::<&()>).await
}

/// DELETE carrying a JSON body; the permission endpoints identify the policy
/// to remove this way instead of via the path.
pub(crate) async fn delete_json<T, B>(
	config: &RequestConfig,
	path: &str,
	body: &B,
) -> Result<T, Error>
where
	T: DeserializeOwned,
	B: Serialize + ?Sized,
{
	send(config, Method::DELETE, path, None::<&()>, Some(body)).await
}
