mod common;

use anyhow::Result;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn broken_json_is_reported_as_detail() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;

    let syntax = app
        .raw("POST", "/equipment", Some(&admin), "application/json", "{\"name\": ")
        .await?;
    assert_eq!(syntax.status, StatusCode::BAD_REQUEST);
    assert!(syntax.body["detail"].is_string());

    let wrong_type = app
        .post("/equipment", Some(&admin), json!({ "name": 42 }))
        .await?;
    assert_eq!(wrong_type.status, StatusCode::BAD_REQUEST);
    assert!(wrong_type.body["detail"].is_string());

    let no_content_type = app
        .raw("POST", "/equipment", Some(&admin), "text/plain", "{\"name\":\"Scope\"}")
        .await?;
    assert_eq!(no_content_type.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn incomplete_login_form_is_a_bad_request() -> Result<()> {
    let app = common::spawn_app().await?;

    let res = app
        .raw(
            "POST",
            "/auth/login",
            None,
            "application/x-www-form-urlencoded",
            format!("username={}", common::ADMIN_EMAIL),
        )
        .await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body["detail"].is_string());
    Ok(())
}

#[tokio::test]
async fn malformed_path_and_query_are_bad_requests() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;

    let bad_uuid = app.get("/notice/not-a-uuid", None).await?;
    assert_eq!(bad_uuid.status, StatusCode::BAD_REQUEST);
    assert!(bad_uuid.body["detail"].is_string());

    let bad_page = app.get("/notice/all?page=first", None).await?;
    assert_eq!(bad_page.status, StatusCode::BAD_REQUEST);

    let bad_status = app
        .get("/room/bookings?status=maybe", Some(&admin))
        .await?;
    assert_eq!(bad_status.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn huge_page_number_is_rejected() -> Result<()> {
    let app = common::spawn_app().await?;

    let res = app
        .get(&format!("/notice/all?page={}&page_size=100", u64::MAX), None)
        .await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["detail"], "page is out of range");

    let last_page = app.get("/exam/filter?page=1000000", None).await?;
    assert_eq!(last_page.status, StatusCode::OK);
    assert_eq!(last_page.body["items"].as_array().map(Vec::len), Some(0));
    Ok(())
}
