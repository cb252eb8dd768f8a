use crate::Error;
use serde::de::DeserializeOwned;

pub struct Inner {
    pub status: u16,
    pub payload_str: String,
}

pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

pub enum Response {
    Success(Inner),
    Error(ErrorResponse),
}

impl Response {
    /// Reads the whole body and classifies the exchange by status code.
    pub async fn read(value: reqwest::Response) -> Result<Self, Error> {
        let status = value.status().as_u16();
        let text = value.text().await?;

        if !(200..300).contains(&status) {
            return Ok(Response::Error(ErrorResponse {
                status,
                message: text,
            }));
        }

        Ok(Response::Success(Inner {
            status,
            payload_str: text,
        }))
    }

    pub fn status(&self) -> u16 {
        match self {
            Response::Success(inner) => inner.status,
            Response::Error(inner) => inner.status,
        }
    }

    pub fn collect<T>(self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        match self {
            Response::Success(response) => serde_json::from_str(&response.payload_str)
                .map_err(|cause| Error::ParseResponse { cause }),
            Response::Error(response) => Err(Error::Api {
                status: response.status,
                body: response.message,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn success(status: u16, payload: &str) -> Response {
        Response::Success(Inner {
            status,
            payload_str: payload.to_owned(),
        })
    }

    #[test]
    fn should_collect_json_payload() {
        let response = success(201, r#"{"number":7}"#);

        assert_eq!(response.status(), 201);
        let payload: Value = response.collect().unwrap();
        assert_eq!(payload, json!({ "number": 7 }));
    }

    #[test]
    fn should_fail_to_collect_non_json_payload() {
        let response = success(200, "<html></html>");

        let err = response.collect::<Value>().unwrap_err();
        assert!(matches!(err, Error::ParseResponse { .. }));
    }

    #[test]
    fn should_turn_error_response_into_api_error() {
        let response = Response::Error(ErrorResponse {
            status: 404,
            message: r#"{"message":"Not Found"}"#.to_owned(),
        });

        assert_eq!(response.status(), 404);
        match response.collect::<Value>() {
            Err(Error::Api { status, body }) => {
                assert_eq!(status, 404);
                assert_eq!(body, r#"{"message":"Not Found"}"#);
            }
            _ => panic!("expected an api error"),
        }
    }
}
