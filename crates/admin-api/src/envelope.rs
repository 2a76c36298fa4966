use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::Error;

/// Canonical response envelope wrapping every payload. `code == 0` is the
/// only success condition; `success` is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Envelope<T> {
	pub code: u16,
	pub message: String,
	pub success: bool,
	#[serde(default)]
	pub data: Option<T>,
}

impl<T: DeserializeOwned> Envelope<T> {
	/// Unwrap the envelope: the payload on `code == 0`, the server's message
	/// otherwise. Unit endpoints answer with `"data": null`, so a missing
	/// payload is only an error when the caller expects a real value.
	pub fn into_result(self) -> Result<T, Error> {
		if self.code != 0 {
			return Err(Error::Api {
				code: self.code,
				message: self.message,
			});
		}

		match self.data {
			Some(data) => Ok(data),
			None => serde_json::from_value(serde_json::Value::Null).map_err(|_| Error::EmptyData),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn success_resolves_with_payload_exactly() {
		let envelope: Envelope<Vec<u32>> =
			serde_json::from_str(r#"{"code":0,"message":"","success":true,"data":[1,2,3]}"#)
				.unwrap();

		assert_eq!(envelope.into_result().unwrap(), vec![1, 2, 3]);
	}

	#[test]
	fn non_zero_code_rejects_with_message() {
		let envelope: Envelope<Vec<u32>> =
			serde_json::from_str(r#"{"code":1,"message":"bad input","success":false,"data":null}"#)
				.unwrap();

		match envelope.into_result() {
			Err(Error::Api { code, message }) => {
				assert_eq!(code, 1);
				assert_eq!(message, "bad input");
			}
			other => panic!("expected Api error, got {other:?}"),
		}
	}

	#[test]
	fn api_error_displays_as_bare_message() {
		let envelope: Envelope<()> =
			serde_json::from_str(r#"{"code":1,"message":"bad input","success":false,"data":null}"#)
				.unwrap();

		let err = envelope.into_result().unwrap_err();
		assert_eq!(err.to_string(), "bad input");
	}

	#[test]
	fn null_payload_is_fine_for_unit_endpoints() {
		let envelope: Envelope<()> =
			serde_json::from_str(r#"{"code":0,"message":"ok","success":true,"data":null}"#).unwrap();

		envelope.into_result().unwrap();
	}

	#[test]
	fn null_payload_is_an_error_when_a_value_is_expected() {
		let envelope: Envelope<String> =
			serde_json::from_str(r#"{"code":0,"message":"ok","success":true,"data":null}"#).unwrap();

		assert!(matches!(envelope.into_result(), Err(Error::EmptyData)));
	}

	#[test]
	fn missing_data_field_behaves_like_null() {
		let envelope: Envelope<()> =
			serde_json::from_str(r#"{"code":0,"message":"ok","success":true}"#).unwrap();

		envelope.into_result().unwrap();
	}
}
