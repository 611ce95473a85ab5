use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

use roster_data::Error;

use crate::error::ApiError;

/// JSON body of a members request. Field presence and types
/// are checked per field, so every handler decides which
/// fields it needs.
#[derive(Debug)]
pub struct MemberRequest(Value);

#[async_trait]
impl<S> FromRequest<S> for MemberRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "unreadable request body");
                Error::MissingRequestBody
            })?;
        Ok(Self(value))
    }
}

impl MemberRequest {
    /// The `email` field. Missing, null and empty emails
    /// count as a missing body.
    pub fn email(&self) -> Result<&str, Error> {
        match self.0.get("email") {
            None | Some(Value::Null) => Err(Error::MissingRequestBody),
            Some(Value::String(email)) if email.is_empty() => Err(Error::MissingRequestBody),
            Some(Value::String(email)) => Ok(email.as_str()),
            Some(_) => Err(Error::BadInput("email must be a string".to_string())),
        }
    }

    /// The `groups` field, which must be an array of strings.
    pub fn groups(&self) -> Result<Vec<String>, Error> {
        match self.0.get("groups") {
            None | Some(Value::Null) => Err(Error::MissingRequestBody),
            Some(Value::Array(groups)) => groups
                .iter()
                .map(|group| {
                    group
                        .as_str()
                        .map(str::to_string)
                        .ok_or_else(|| Error::BadInput("groups must only contain strings".to_string()))
                })
                .collect(),
            Some(_) => Err(Error::BadInput("groups must be an array".to_string())),
        }
    }

    /// The `email` and `groups` fields. Both must be present
    /// before either is type checked.
    pub fn email_and_groups(&self) -> Result<(&str, Vec<String>), Error> {
        let present = |field: &str| !matches!(self.0.get(field), None | Some(Value::Null));
        if !present("email") || !present("groups") {
            return Err(Error::MissingRequestBody);
        }
        Ok((self.email()?, self.groups()?))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_email() {
        assert_eq!(MemberRequest(json!({"email": "a@x.com"})).email(), Ok("a@x.com"));
        assert_eq!(
            MemberRequest(json!({})).email(),
            Err(Error::MissingRequestBody)
        );
        assert_eq!(
            MemberRequest(json!({"email": ""})).email(),
            Err(Error::MissingRequestBody)
        );
        assert_eq!(
            MemberRequest(json!(["a@x.com"])).email(),
            Err(Error::MissingRequestBody)
        );
        assert!(matches!(
            MemberRequest(json!({"email": 42})).email(),
            Err(Error::BadInput(_))
        ));
    }

    #[test]
    fn test_groups() {
        assert_eq!(
            MemberRequest(json!({"groups": ["ACM", "Hackathon"]})).groups(),
            Ok(vec!["ACM".to_string(), "Hackathon".to_string()])
        );
        assert_eq!(
            MemberRequest(json!({"groups": null})).groups(),
            Err(Error::MissingRequestBody)
        );
        assert!(matches!(
            MemberRequest(json!({"groups": "ACM"})).groups(),
            Err(Error::BadInput(_))
        ));
        assert!(matches!(
            MemberRequest(json!({"groups": ["ACM", 7]})).groups(),
            Err(Error::BadInput(_))
        ));
    }

    #[test]
    fn test_email_and_groups_checks_presence_first() {
        let request = MemberRequest(json!({"email": 42}));
        assert_eq!(request.email_and_groups(), Err(Error::MissingRequestBody));

        let request = MemberRequest(json!({"email": "a@x.com", "groups": {}}));
        assert!(matches!(request.email_and_groups(), Err(Error::BadInput(_))));
    }
}
