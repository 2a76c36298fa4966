//! Persisted console session state: the bearer token and UI locale.
//!
//! One JSON file in the data directory plays the role the browser's local
//! storage played for the web console: a single-slot credential cache that
//! is only ever read or replaced wholesale.

use std::{
	fmt,
	path::{Path, PathBuf},
	str::FromStr,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
	#[error("failed to access session file at {path}: {source}")]
	Io {
		path: PathBuf,
		source: std::io::Error,
	},

	#[error("session file at {path} is not valid JSON: {source}")]
	Malformed {
		path: PathBuf,
		source: serde_json::Error,
	},
}

/// UI locale preference, persisted alongside the token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
	#[default]
	#[serde(rename = "en")]
	En,
	#[serde(rename = "zh-cn")]
	ZhCn,
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Locale::En => write!(f, "en"),
			Locale::ZhCn => write!(f, "zh-cn"),
		}
	}
}

impl FromStr for Locale {
	type Err = UnknownLocale;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"en" => Ok(Locale::En),
			"zh-cn" => Ok(Locale::ZhCn),
			other => Err(UnknownLocale(other.to_owned())),
		}
	}
}

#[derive(Debug, thiserror::Error)]
#[error("unknown locale {0:?}, expected \"en\" or \"zh-cn\"")]
pub struct UnknownLocale(String);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
	pub token: Option<String>,
	#[serde(default)]
	pub locale: Locale,
}

/// Owns the session file and the current in-memory copy. Every mutation
/// persists before returning, so a fresh store on the same path always
/// observes the latest state.
#[derive(Debug)]
pub struct SessionStore {
	path: PathBuf,
	session: Session,
}

impl SessionStore {
	/// Load the session from `data_dir`, creating a default one on first use.
	pub fn load(data_dir: &Path) -> Result<Self, SessionError> {
		let path = data_dir.join(SESSION_FILE_NAME);

		let session = match std::fs::read_to_string(&path) {
			Ok(json) => serde_json::from_str(&json).map_err(|source| SessionError::Malformed {
				path: path.clone(),
				source,
			})?,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => Session::default(),
			Err(source) => {
				return Err(SessionError::Io {
					path: path.clone(),
					source,
				})
			}
		};

		debug!(path = %path.display(), authenticated = session.token.is_some(), "session loaded");

		Ok(Self { path, session })
	}

	/// Authentication is a pure function of the current token, never a
	/// separately maintained flag.
	pub fn is_authenticated(&self) -> bool {
		self.session.token.is_some()
	}

	pub fn token(&self) -> Option<&str> {
		self.session.token.as_deref()
	}

	pub fn locale(&self) -> Locale {
		self.session.locale
	}

	pub fn set_token(&mut self, token: impl Into<String>) -> Result<(), SessionError> {
		self.session.token = Some(token.into());
		self.save()
	}

	pub fn clear_token(&mut self) -> Result<(), SessionError> {
		self.session.token = None;
		self.save()
	}

	pub fn set_locale(&mut self, locale: Locale) -> Result<(), SessionError> {
		self.session.locale = locale;
		self.save()
	}

	fn save(&self) -> Result<(), SessionError> {
		if let Some(parent) = self.path.parent() {
			std::fs::create_dir_all(parent).map_err(|source| SessionError::Io {
				path: self.path.clone(),
				source,
			})?;
		}

		let json = serde_json::to_string_pretty(&self.session).expect("session serializes");
		std::fs::write(&self.path, json).map_err(|source| SessionError::Io {
			path: self.path.clone(),
			source,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_load_is_an_unauthenticated_default() {
		let dir = tempfile::tempdir().unwrap();
		let store = SessionStore::load(dir.path()).unwrap();

		assert!(!store.is_authenticated());
		assert_eq!(store.token(), None);
		assert_eq!(store.locale(), Locale::En);
	}

	#[test]
	fn set_token_persists_and_authenticates() {
		let dir = tempfile::tempdir().unwrap();

		let mut store = SessionStore::load(dir.path()).unwrap();
		store.set_token("T").unwrap();
		assert!(store.is_authenticated());

		// A fresh store on the same path observes the persisted token.
		let reopened = SessionStore::load(dir.path()).unwrap();
		assert_eq!(reopened.token(), Some("T"));
		assert!(reopened.is_authenticated());
	}

	#[test]
	fn clear_token_always_deauthenticates() {
		let dir = tempfile::tempdir().unwrap();

		let mut store = SessionStore::load(dir.path()).unwrap();
		store.clear_token().unwrap();
		assert!(!store.is_authenticated());

		store.set_token("T").unwrap();
		store.clear_token().unwrap();
		assert!(!store.is_authenticated());

		let reopened = SessionStore::load(dir.path()).unwrap();
		assert_eq!(reopened.token(), None);
	}

	#[test]
	fn locale_round_trips_through_the_session_file() {
		let dir = tempfile::tempdir().unwrap();

		let mut store = SessionStore::load(dir.path()).unwrap();
		store.set_locale(Locale::ZhCn).unwrap();

		let reopened = SessionStore::load(dir.path()).unwrap();
		assert_eq!(reopened.locale(), Locale::ZhCn);
	}

	#[test]
	fn locale_parses_its_display_form() {
		assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
		assert_eq!("zh-cn".parse::<Locale>().unwrap(), Locale::ZhCn);
		assert!("fr".parse::<Locale>().is_err());
		assert_eq!(Locale::ZhCn.to_string(), "zh-cn");
	}

	#[test]
	fn malformed_session_file_is_reported_not_overwritten() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join(SESSION_FILE_NAME), "not json").unwrap();

		assert!(matches!(
			SessionStore::load(dir.path()),
			Err(SessionError::Malformed { .. })
		));
	}
}
