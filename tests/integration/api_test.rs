//! End-to-end API tests over a real database
//!
//! Each test drives the composed router with `oneshot` requests against a
//! migrated PostgreSQL database, covering signup/login, the session
//! cookie, and the role/ownership rules on the design routes.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{body_bytes, body_json, unique_username, TestApp};

/// Create a design through the API, asserting success
async fn create_design(app: &TestApp, cookie: &str, name: &str, data: Value) -> Value {
    let payload = json!({ "name": name, "data": data });
    let response = app
        .request(
            Method::POST,
            "/createDesign",
            Some(cookie),
            Some(("application/json", payload.to_string())),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK, "create should succeed");
    body_json(response).await
}

/// List the caller's own designs, asserting success
async fn list_own_designs(app: &TestApp, cookie: &str) -> Vec<Value> {
    let response = app
        .request(Method::GET, "/getUserDesigns", Some(cookie), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await.as_array().unwrap().clone()
}

#[tokio::test]
#[ignore] // Requires a PostgreSQL database - set DATABASE_URL and run locally
async fn test_duplicate_signup_is_rejected() {
    let app = TestApp::new().await.unwrap();

    let username = unique_username("dup");
    app.signup(&username, "First", "customer", "pw1").await;

    // Same username again, different everything else
    let payload = json!({
        "username": username,
        "name": "Second",
        "role": "designer",
        "password": "pw2",
    });
    let response = app
        .request(
            Method::POST,
            "/signup",
            None,
            Some(("application/json", payload.to_string())),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Username already registered");
}

#[tokio::test]
#[ignore] // Requires a PostgreSQL database - set DATABASE_URL and run locally
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await.unwrap();

    let username = unique_username("victim");
    app.signup(&username, "Victim", "customer", "right-password")
        .await;

    let wrong_password = app.try_login(&username, "wrong-password").await;
    let unknown_user = app
        .try_login(&unique_username("ghost"), "any-password")
        .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    // Identical error content: no oracle for which usernames exist
    assert_eq!(
        body_bytes(wrong_password).await,
        body_bytes(unknown_user).await
    );
}

#[tokio::test]
#[ignore] // Requires a PostgreSQL database - set DATABASE_URL and run locally
async fn test_login_cookie_resolves_me_to_the_caller() {
    let app = TestApp::new().await.unwrap();

    let username = unique_username("carol");
    let user = app.signup(&username, "Carol", "designer", "pw1").await;
    let cookie = app.login(&username, "pw1").await;

    let response = app.request(Method::GET, "/me", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], user["id"]);
    assert_eq!(body["username"], username.as_str());
    assert_eq!(body["role"], "designer");
}

#[tokio::test]
#[ignore] // Requires a PostgreSQL database - set DATABASE_URL and run locally
async fn test_customer_is_forbidden_on_designer_routes() {
    let app = TestApp::new().await.unwrap();
    let (_, cookie) = app.user_session("customer", "pw1").await;

    let some_id = Uuid::new_v4();
    let attempts = vec![
        (Method::GET, "/getUserDesigns".to_string(), None),
        (
            Method::POST,
            "/createDesign".to_string(),
            Some(json!({ "name": "Chair", "data": {} })),
        ),
        (
            Method::PUT,
            format!("/updateDesign/{}", some_id),
            Some(json!({ "name": "Chair" })),
        ),
        (Method::DELETE, format!("/deleteDesign/{}", some_id), None),
    ];

    for (method, uri, payload) in attempts {
        let body = payload.map(|p| ("application/json", p.to_string()));
        let response = app.request(method.clone(), &uri, Some(&cookie), body).await;

        assert_eq!(
            response.status(),
            StatusCode::FORBIDDEN,
            "{} {} must be forbidden for customers",
            method,
            uri
        );
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "DESIGNER_ONLY");
    }
}

#[tokio::test]
#[ignore] // Requires a PostgreSQL database - set DATABASE_URL and run locally
async fn test_cross_designer_mutation_is_forbidden() {
    let app = TestApp::new().await.unwrap();

    let (_, owner_cookie) = app.user_session("designer", "pw1").await;
    let (_, rival_cookie) = app.user_session("designer", "pw2").await;

    let design = create_design(&app, &owner_cookie, "Sofa", json!({"seats": 3})).await;
    let design_id = design["id"].as_str().unwrap();

    let update = app
        .request(
            Method::PUT,
            &format!("/updateDesign/{}", design_id),
            Some(&rival_cookie),
            Some(("application/json", json!({"name": "Stolen"}).to_string())),
        )
        .await;
    assert_eq!(update.status(), StatusCode::FORBIDDEN);
    let body = body_json(update).await;
    assert_eq!(body["error"]["message"], "You can only update your own designs");

    let delete = app
        .request(
            Method::DELETE,
            &format!("/deleteDesign/{}", design_id),
            Some(&rival_cookie),
            None,
        )
        .await;
    assert_eq!(delete.status(), StatusCode::FORBIDDEN);

    // The design is untouched for its owner
    let own = list_own_designs(&app, &owner_cookie).await;
    let kept = own.iter().find(|d| d["id"] == design["id"]).unwrap();
    assert_eq!(kept["name"], "Sofa");
}

#[tokio::test]
#[ignore] // Requires a PostgreSQL database - set DATABASE_URL and run locally
async fn test_empty_partial_update_keeps_current_state() {
    let app = TestApp::new().await.unwrap();
    let (_, cookie) = app.user_session("designer", "pw1").await;

    let design = create_design(&app, &cookie, "Chair", json!({"color": "red"})).await;
    let design_id = design["id"].as_str().unwrap();

    let response = app
        .request(
            Method::PUT,
            &format!("/updateDesign/{}", design_id),
            Some(&cookie),
            Some(("application/json", "{}".to_string())),
        )
        .await;

    // No-op update still returns 200 with current state
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Chair");
    assert_eq!(body["data"], json!({"color": "red"}));
}

#[tokio::test]
#[ignore] // Requires a PostgreSQL database - set DATABASE_URL and run locally
async fn test_delete_missing_design_is_not_found() {
    let app = TestApp::new().await.unwrap();

    // A designer with no owned designs still sees 404, not 403
    let (_, cookie) = app.user_session("designer", "pw1").await;

    let response = app
        .request(
            Method::DELETE,
            &format!("/deleteDesign/{}", Uuid::new_v4()),
            Some(&cookie),
            None,
        )
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Design not found");
}

#[tokio::test]
#[ignore] // Requires a PostgreSQL database - set DATABASE_URL and run locally
async fn test_create_then_list_roundtrip() {
    let app = TestApp::new().await.unwrap();
    let (owner_id, cookie) = app.user_session("designer", "pw1").await;

    let created = create_design(&app, &cookie, "Chair", json!({"color": "red"})).await;
    assert!(created["id"].is_string(), "id must be server-assigned");
    assert_eq!(created["ownerId"], owner_id.as_str());

    let own = list_own_designs(&app, &cookie).await;
    let matches: Vec<_> = own.iter().filter(|d| d["id"] == created["id"]).collect();
    assert_eq!(matches.len(), 1, "exactly the created design comes back");
    assert_eq!(matches[0]["name"], "Chair");
    assert_eq!(matches[0]["data"], json!({"color": "red"}));
    assert_eq!(matches[0]["ownerId"], owner_id.as_str());
}

#[tokio::test]
#[ignore] // Requires a PostgreSQL database - set DATABASE_URL and run locally
async fn test_designer_full_lifecycle() {
    let app = TestApp::new().await.unwrap();

    // signup → login → create → list-all → update → delete → list-own
    let alice = unique_username("alice");
    let user = app.signup(&alice, "Alice", "designer", "pw1").await;
    let cookie = app.login(&alice, "pw1").await;

    let created = create_design(&app, &cookie, "Table", json!({})).await;
    assert_eq!(created["ownerId"], user["id"]);

    // Visible to any logged-in user, regardless of role
    let (_, customer_cookie) = app.user_session("customer", "pw2").await;
    let all = app
        .request(Method::GET, "/getAllDesigns", Some(&customer_cookie), None)
        .await;
    assert_eq!(all.status(), StatusCode::OK);
    let all = body_json(all).await;
    assert!(all
        .as_array()
        .unwrap()
        .iter()
        .any(|d| d["id"] == created["id"]));

    // Partial update: name changes, data stays
    let updated = app
        .request(
            Method::PUT,
            &format!("/updateDesign/{}", created["id"].as_str().unwrap()),
            Some(&cookie),
            Some(("application/json", json!({"name": "Big Table"}).to_string())),
        )
        .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated = body_json(updated).await;
    assert_eq!(updated["name"], "Big Table");
    assert_eq!(updated["data"], json!({}));

    let deleted = app
        .request(
            Method::DELETE,
            &format!("/deleteDesign/{}", created["id"].as_str().unwrap()),
            Some(&cookie),
            None,
        )
        .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let own = list_own_designs(&app, &cookie).await;
    assert!(own.iter().all(|d| d["id"] != created["id"]));
}
