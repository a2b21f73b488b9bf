mod common;

use anyhow::Result;
use http::{StatusCode, header};
use serde_json::json;

#[tokio::test]
async fn health_reports_database() -> Result<()> {
    let app = common::spawn_app().await?;

    let res = app.get("/health", None).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "ok");
    assert_eq!(res.body["database"], "ok");
    Ok(())
}

#[tokio::test]
async fn missing_or_bad_token_is_unauthenticated() -> Result<()> {
    let app = common::spawn_app().await?;

    let res = app.get("/admin/me", None).await?;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.headers.get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
    assert_eq!(res.body["detail"], "Could not validate credentials");

    let res = app.get("/admin/me", Some("not-a-jwt")).await?;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn login_failures_look_the_same() -> Result<()> {
    let app = common::spawn_app().await?;

    let wrong_password = app.login(common::ADMIN_EMAIL, "nope").await?;
    let unknown_email = app.login("ghost@dept.edu", "nope").await?;

    assert_eq!(wrong_password.status, StatusCode::FORBIDDEN);
    assert_eq!(unknown_email.status, StatusCode::FORBIDDEN);
    assert_eq!(wrong_password.body, unknown_email.body);
    Ok(())
}

#[tokio::test]
async fn admin_login_returns_bearer_token() -> Result<()> {
    let app = common::spawn_app().await?;

    let res = app.login(common::ADMIN_EMAIL, common::ADMIN_PASSWORD).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["token_type"], "bearer");
    assert_eq!(res.body["role"], "Admin");

    let token = res.body["access_token"].as_str().unwrap();
    let me = app.get("/admin/me", Some(token)).await?;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["email"], common::ADMIN_EMAIL);
    assert!(me.body.get("password").is_none());
    Ok(())
}

#[tokio::test]
async fn admin_signup_is_disabled_by_default() -> Result<()> {
    let app = common::spawn_app().await?;

    let res = app
        .post(
            "/admin/signup",
            None,
            json!({
                "name": "Eve",
                "email": "eve@dept.edu",
                "phone": "123",
                "password": "pw"
            }),
        )
        .await?;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn student_profile_is_claimed_once() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;

    let added = app
        .post(
            "/admin/add/student",
            Some(&admin),
            json!({
                "registration_number": "2019331001",
                "email": "stu@dept.edu",
                "name": "Student One",
                "session": "2019-20",
                "hall": "North",
                "degree": "BSc",
                "semester": "1"
            }),
        )
        .await?;
    assert_eq!(added.status, StatusCode::CREATED);

    let signup = json!({
        "email": "stu@dept.edu",
        "registration_number": "2019331001",
        "password": "student-pass"
    });
    let first = app.post("/student/signup", None, signup.clone()).await?;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app.post("/student/signup", None, signup).await?;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.body["detail"], "This student already signed up");

    let mismatched = app
        .post(
            "/student/signup",
            None,
            json!({
                "email": "stu@dept.edu",
                "registration_number": "0000000000",
                "password": "x"
            }),
        )
        .await?;
    assert_eq!(mismatched.status, StatusCode::NOT_FOUND);

    let token = app.token_for("stu@dept.edu", "student-pass").await?;
    let me = app.get("/student/me", Some(&token)).await?;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["registration_number"], "2019331001");
    Ok(())
}

#[tokio::test]
async fn students_cannot_reach_admin_routes() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;

    app.post(
        "/admin/add/student",
        Some(&admin),
        json!({
            "registration_number": "2019331002",
            "email": "two@dept.edu",
            "name": "Student Two",
            "session": "2019-20",
            "hall": "North",
            "degree": "BSc",
            "semester": "1"
        }),
    )
    .await?;
    app.post(
        "/student/signup",
        None,
        json!({
            "email": "two@dept.edu",
            "registration_number": "2019331002",
            "password": "student-pass"
        }),
    )
    .await?;
    let token = app.token_for("two@dept.edu", "student-pass").await?;

    let res = app.get("/admin/students", Some(&token)).await?;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    Ok(())
}
