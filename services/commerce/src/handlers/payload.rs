use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};

use crate::domain::validation::{FieldErrors, INVALID_INPUT};
use crate::error::CommerceError;

/// Builds a value from a JSON object, reading only the fields it knows.
///
/// Implementations read the map by hand instead of deriving `Deserialize` so that
/// every offending field is reported in one response, not just the first.
pub trait LoadPayload: Sized {
    fn load(body: &Map<String, Value>) -> Result<Self, FieldErrors>;
}

/// Request body extractor. Malformed JSON and field errors both reject with
/// `CommerceError::Validation`, so every bad body answers 400 with field messages.
#[derive(Debug)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: LoadPayload + Send,
{
    type Rejection = CommerceError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, &())
            .await
            .map_err(|rejection| FieldErrors::schema(rejection.body_text()))?;
        let Value::Object(body) = value else {
            return Err(FieldErrors::schema(INVALID_INPUT).into());
        };
        Ok(Self(T::load(&body)?))
    }
}
