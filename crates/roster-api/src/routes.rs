use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post, put},
    Json, Router,
};
use serde::Serialize;

use roster_data::Member;

use crate::{error::ApiError, payload::MemberRequest, state::SharedState};

pub const MEMBERS_PATH: &str = "/api/v2/members";

#[derive(Serialize)]
struct MembersResponse {
    members: Vec<Member>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewMemberResponse {
    new_member: Member,
}

#[derive(Serialize)]
struct MemberResponse {
    member: Member,
}

#[derive(Serialize)]
struct ResetResponse {
    modified: u64,
}

/// Members API routes, mounted below [`MEMBERS_PATH`]
pub fn router(state: SharedState) -> Router {
    let members = Router::new()
        .route(
            "/",
            get(get_members).post(create_member).delete(delete_member),
        )
        .route("/test", get(test_route))
        .route("/subscribe", put(subscribe))
        .route("/unsubscribe", put(unsubscribe))
        .route("/dues", patch(pay_dues))
        .route("/reset", post(reset));

    Router::new()
        .nest(MEMBERS_PATH, members)
        .with_state(state)
}

/// GET /test - Check that the members API is connected
async fn test_route() -> impl IntoResponse {
    "Members App Works!"
}

/// GET / - All members
async fn get_members(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    let members = state.members.get_members().await?;
    Ok((StatusCode::OK, Json(MembersResponse { members })))
}

/// POST / - Create a member
async fn create_member(
    State(state): State<SharedState>,
    request: MemberRequest,
) -> Result<impl IntoResponse, ApiError> {
    let email = request.email()?;
    let new_member = state.members.create_member(email).await?;
    Ok((StatusCode::CREATED, Json(NewMemberResponse { new_member })))
}

/// DELETE / - Delete a member
async fn delete_member(
    State(state): State<SharedState>,
    request: MemberRequest,
) -> Result<impl IntoResponse, ApiError> {
    let email = request.email()?;
    state.members.delete_member(email).await?;
    Ok(StatusCode::ACCEPTED)
}

/// PUT /subscribe - Add a member to groups
async fn subscribe(
    State(state): State<SharedState>,
    request: MemberRequest,
) -> Result<impl IntoResponse, ApiError> {
    let (email, groups) = request.email_and_groups()?;
    let member = state.members.subscribe(email, &groups).await?;
    Ok((StatusCode::ACCEPTED, Json(MemberResponse { member })))
}

/// PUT /unsubscribe - Remove a member from groups
async fn unsubscribe(
    State(state): State<SharedState>,
    request: MemberRequest,
) -> Result<impl IntoResponse, ApiError> {
    let (email, groups) = request.email_and_groups()?;
    let member = state.members.unsubscribe(email, &groups).await?;
    Ok((StatusCode::ACCEPTED, Json(MemberResponse { member })))
}

/// PATCH /dues - Mark the dues of a member as paid
async fn pay_dues(
    State(state): State<SharedState>,
    request: MemberRequest,
) -> Result<impl IntoResponse, ApiError> {
    let email = request.email()?;
    let member = state.members.pay_dues(email).await?;
    Ok((StatusCode::ACCEPTED, Json(MemberResponse { member })))
}

/// POST /reset - Semester reset of groups and dues
async fn reset(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    let modified = state.members.reset().await?;
    Ok((StatusCode::OK, Json(ResetResponse { modified })))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Method, Request},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use roster_db::{Connection, TestHandle};

    use super::*;
    use crate::state::AppState;

    async fn test_app() -> (TestHandle, Router) {
        let (handle, db) = Connection::open_test().await;
        (handle, router(AppState::new(db)))
    }

    async fn send(
        app: &Router,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let uri = format!("{}{}", MEMBERS_PATH, path);
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()))
        };
        (status, value)
    }

    fn error_code(body: &Value) -> u64 {
        body["err"]["code"].as_u64().unwrap()
    }

    #[tokio::test]
    async fn test_test_route() {
        let (_handle, app) = test_app().await;
        let (status, body) = send(&app, Method::GET, "/test", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("Members App Works!"));
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let (_handle, app) = test_app().await;
        let (status, body) = send(&app, Method::GET, "", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"members": []}));

        let (status, body) =
            send(&app, Method::POST, "", Some(json!({"email": "a@x.com"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({"newMember": {"email": "a@x.com", "hasPaidDues": false, "groups": []}})
        );

        let (status, body) = send(&app, Method::GET, "", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["members"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_validation() {
        let (_handle, app) = test_app().await;

        let (status, body) = send(&app, Method::POST, "", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_code(&body), 400);
        assert_eq!(body["err"]["message"], json!("Missing request body"));

        // No body at all
        let (status, _) = send(&app, Method::POST, "", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::POST, "", Some(json!({"email": 1}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::POST, "", Some(json!({"email": "  "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_duplicate() {
        let (_handle, app) = test_app().await;
        let member = json!({"email": "a@x.com"});
        send(&app, Method::POST, "", Some(member.clone())).await;

        let (status, body) = send(&app, Method::POST, "", Some(member)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(error_code(&body), 409);
    }

    #[tokio::test]
    async fn test_delete() {
        let (_handle, app) = test_app().await;
        send(&app, Method::POST, "", Some(json!({"email": "a@x.com"}))).await;

        let (status, body) =
            send(&app, Method::DELETE, "", Some(json!({"email": "a@x.com"}))).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body, Value::Null);

        let (status, body) =
            send(&app, Method::DELETE, "", Some(json!({"email": "a@x.com"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error_code(&body), 404);

        let (status, _) = send(&app, Method::DELETE, "", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_padded_email() {
        let (_handle, app) = test_app().await;
        let padded = json!({"email": " a@x.com "});
        let (status, body) = send(&app, Method::POST, "", Some(padded.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["newMember"]["email"], json!("a@x.com"));

        let (status, body) = send(&app, Method::PATCH, "/dues", Some(padded.clone())).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["member"]["hasPaidDues"], json!(true));

        let (status, _) = send(&app, Method::DELETE, "", Some(padded)).await;
        assert_eq!(status, StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn test_subscribe_validation() {
        let (_handle, app) = test_app().await;
        for path in ["/subscribe", "/unsubscribe"] {
            let (status, body) =
                send(&app, Method::PUT, path, Some(json!({"email": "a@x.com"}))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["err"]["message"], json!("Missing request body"));

            let (status, body) = send(
                &app,
                Method::PUT,
                path,
                Some(json!({"email": "a@x.com", "groups": "ACM"})),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(
                body["err"]["message"],
                json!("Bad input: groups must be an array")
            );

            let (status, _) = send(
                &app,
                Method::PUT,
                path,
                Some(json!({"email": "ghost@x.com", "groups": ["ACM"]})),
            )
            .await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn test_semester_scenario() {
        let (_handle, app) = test_app().await;
        send(&app, Method::POST, "", Some(json!({"email": "a@x.com"}))).await;

        let (status, body) = send(
            &app,
            Method::PUT,
            "/subscribe",
            Some(json!({"email": "a@x.com", "groups": ["ACM", "Hackathon"]})),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["member"]["groups"], json!(["ACM", "Hackathon"]));

        let (status, body) = send(
            &app,
            Method::PUT,
            "/unsubscribe",
            Some(json!({"email": "a@x.com", "groups": ["ACM"]})),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["member"]["groups"], json!(["Hackathon"]));

        let (status, body) =
            send(&app, Method::PATCH, "/dues", Some(json!({"email": "a@x.com"}))).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["member"]["hasPaidDues"], json!(true));

        let (status, body) = send(&app, Method::POST, "/reset", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"modified": 1}));

        let (_, body) = send(&app, Method::GET, "", None).await;
        assert_eq!(
            body,
            json!({"members": [{"email": "a@x.com", "hasPaidDues": false, "groups": []}]})
        );
    }

    #[tokio::test]
    async fn test_pay_dues_missing_member() {
        let (_handle, app) = test_app().await;
        let (status, body) =
            send(&app, Method::PATCH, "/dues", Some(json!({"email": "ghost@x.com"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["err"]["message"],
            json!("Member not found: ghost@x.com")
        );

        let (status, _) = send(&app, Method::PATCH, "/dues", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
