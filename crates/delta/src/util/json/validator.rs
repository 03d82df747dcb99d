use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use lostfound_result::{create_error, Error};
use serde::de::DeserializeOwned;

/// JSON body that has passed validation
pub struct Validate<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Validate<T>
where
    S: Send + Sync,
    T: DeserializeOwned + validator::Validate,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(inner) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                create_error!(FailedValidation {
                    error: rejection.body_text()
                })
            })?;

        if let Err(error) = inner.validate() {
            return Err(create_error!(FailedValidation {
                error: error.to_string()
            }));
        }

        Ok(Self(inner))
    }
}
