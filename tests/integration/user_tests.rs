use crate::common::{AUTH_HEADER, setup};
use admission_client::prelude::*;
use assert_json_diff::assert_json_eq;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn register_user_sends_all_fields() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("POST", "/users")
        .match_header("authorization", AUTH_HEADER)
        .match_body(Matcher::Json(
            json!({"username": "jdoe", "first_name": "John", "last_name": "Doe"}),
        ))
        .with_status(200)
        .create_async()
        .await;

    client
        .register_user(Identifier::from(1), Some("jdoe"), "John", Some("Doe"))
        .await
        .expect("register should succeed");
    mock.assert_async().await;
}

#[tokio::test]
async fn register_user_omits_missing_optional_fields() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("POST", "/users")
        .match_body(Matcher::Json(json!({"first_name": "John"})))
        .with_status(200)
        .create_async()
        .await;

    client
        .register_user(Identifier::from("u-1"), None, "John", None)
        .await
        .expect("register should succeed");
    mock.assert_async().await;
}

#[tokio::test]
async fn register_user_treats_conflict_as_success() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("POST", "/users")
        .with_status(409)
        .with_body(r#"{"detail": "already exists"}"#)
        .create_async()
        .await;

    let result = client
        .register_user(Identifier::from(1), None, "John", None)
        .await;
    assert!(result.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn register_user_fails_on_server_error() {
    let (mut server, client) = setup().await;
    let _mock = server
        .mock("POST", "/users")
        .with_status(500)
        .create_async()
        .await;

    let err = client
        .register_user(Identifier::from(1), None, "John", None)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn set_user_details_puts_mapping() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("PUT", "/users/42/registration")
        .match_header("authorization", AUTH_HEADER)
        .match_body(Matcher::Json(json!({
            "school": "7",
            "grade": 9,
            "olympiad": true,
            "parent": {"name": "Ann", "phone": null}
        })))
        .with_status(200)
        .create_async()
        .await;

    let mut details = UserDetails::new();
    details.insert("school".to_string(), json!("7"));
    details.insert("grade".to_string(), json!(9));
    details.insert("olympiad".to_string(), json!(true));
    details.insert("parent".to_string(), json!({"name": "Ann", "phone": null}));

    client
        .set_user_details(Identifier::from(42), &details)
        .await
        .expect("details should be stored");
    mock.assert_async().await;
}

#[tokio::test]
async fn set_user_certificate_puts_certificate_and_name() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("PUT", "/users/42/certificate")
        .match_body(Matcher::Json(
            json!({"certificate": 1234567, "full_name": "John Doe"}),
        ))
        .with_status(200)
        .create_async()
        .await;

    client
        .set_user_certificate(Identifier::from(42), Identifier::from(1234567), "John Doe")
        .await
        .expect("certificate should be stored");
    mock.assert_async().await;
}

#[tokio::test]
async fn set_user_certificate_fails_on_not_found() {
    let (mut server, client) = setup().await;
    let _mock = server
        .mock("PUT", "/users/42/certificate")
        .with_status(404)
        .create_async()
        .await;

    let err = client
        .set_user_certificate(Identifier::from(42), Identifier::from("C-1"), "John Doe")
        .await
        .unwrap_err();
    match err {
        AppError::Unexpected(status) => assert_eq!(status.as_u16(), 404),
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn get_users_without_search() {
    let (mut server, client) = setup().await;
    let users = json!([{"id": 1, "first_name": "John"}, {"id": 2, "first_name": "Ann"}]);
    let mock = server
        .mock("GET", "/users")
        .match_query(Matcher::Exact("skip=0&take=10".to_string()))
        .match_header("authorization", AUTH_HEADER)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(users.to_string())
        .create_async()
        .await;

    let result = client.get_users(None, 0, 10).await.expect("users");
    assert_json_eq!(result, users);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_users_with_search() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/users")
        .match_query(Matcher::Exact("search=abc&skip=5&take=20".to_string()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let result = client.get_users(Some("abc"), 5, 20).await.expect("users");
    assert_eq!(result, json!([]));
    mock.assert_async().await;
}

#[tokio::test]
async fn get_users_percent_encodes_search() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/users")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("search".to_string(), "john doe&co".to_string()),
            Matcher::UrlEncoded("skip".to_string(), "0".to_string()),
            Matcher::UrlEncoded("take".to_string(), "5".to_string()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    client
        .get_users(Some("john doe&co"), 0, 5)
        .await
        .expect("users");
    mock.assert_async().await;
}

#[tokio::test]
async fn get_user_info_returns_body() {
    let (mut server, client) = setup().await;
    let user = json!({"id": 42, "first_name": "John", "details": {"school": "7"}});
    let mock = server
        .mock("GET", "/users/42")
        .with_status(200)
        .with_body(user.to_string())
        .create_async()
        .await;

    let result = client.get_user_info(Identifier::from(42)).await.expect("user");
    assert_json_eq!(result, user);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_user_info_encodes_textual_id() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/users/john%20doe")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    client
        .get_user_info(Identifier::from("john doe"))
        .await
        .expect("user");
    mock.assert_async().await;
}

#[tokio::test]
async fn count_users_returns_integer() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", "/users/count")
        .match_header("authorization", AUTH_HEADER)
        .with_status(200)
        .with_body("17")
        .create_async()
        .await;

    assert_eq!(client.count_users().await.expect("count"), 17);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_registration_template_returns_body() {
    let (mut server, client) = setup().await;
    let template = json!({"fields": [{"name": "school", "type": "string"}]});
    let mock = server
        .mock("GET", "/templates/registration")
        .with_status(200)
        .with_body(template.to_string())
        .create_async()
        .await;

    let result = client.get_registration_template().await.expect("template");
    assert_json_eq!(result, template);
    mock.assert_async().await;
}
