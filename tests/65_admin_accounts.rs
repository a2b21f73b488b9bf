mod common;

use anyhow::Result;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn admin_email_change_moves_the_login() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    let (student_id, _) = app.student(&admin, "old@dept.edu", "2021331010").await?;

    let updated = app
        .put(
            &format!("/admin/update/student/{student_id}"),
            Some(&admin),
            json!({ "email": "new@dept.edu" }),
        )
        .await?;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["email"], "new@dept.edu");

    let old = app.login("old@dept.edu", "student-pass").await?;
    assert_eq!(old.status, StatusCode::FORBIDDEN);
    let token = app.token_for("new@dept.edu", "student-pass").await?;
    let me = app.get("/student/me", Some(&token)).await?;
    assert_eq!(me.body["id"], student_id.as_str());
    Ok(())
}

#[tokio::test]
async fn teacher_email_change_moves_the_login() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    let (teacher_id, _) = app.teacher(&admin, "prof@dept.edu", "T-201").await?;

    let updated = app
        .put(
            &format!("/admin/update/teacher/{teacher_id}"),
            Some(&admin),
            json!({ "email": "professor@dept.edu" }),
        )
        .await?;
    assert_eq!(updated.status, StatusCode::OK);

    let old = app.login("prof@dept.edu", "teacher-pass").await?;
    assert_eq!(old.status, StatusCode::FORBIDDEN);
    app.token_for("professor@dept.edu", "teacher-pass").await?;
    Ok(())
}

#[tokio::test]
async fn email_taken_by_another_account_is_refused() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    let (student_id, _) = app.student(&admin, "mine@dept.edu", "2021331020").await?;

    let clash = app
        .put(
            &format!("/admin/update/student/{student_id}"),
            Some(&admin),
            json!({ "email": common::ADMIN_EMAIL, "name": "Renamed" }),
        )
        .await?;
    assert_eq!(clash.status, StatusCode::BAD_REQUEST);
    assert_eq!(clash.body["detail"], "Email already registered");

    let token = app.token_for("mine@dept.edu", "student-pass").await?;
    let me = app.get("/student/me", Some(&token)).await?;
    assert_eq!(me.body["email"], "mine@dept.edu");
    assert_eq!(me.body["name"], "Student");
    Ok(())
}

#[tokio::test]
async fn deleting_a_user_removes_the_linked_profile() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    let (student_id, token) = app.student(&admin, "gone@dept.edu", "2021331030").await?;
    let me = app.get("/student/me", Some(&token)).await?;
    let user_id = me.body["user_id"].as_str().unwrap().to_string();

    let deleted = app
        .delete(&format!("/admin/user/{user_id}"), Some(&admin))
        .await?;
    assert_eq!(deleted.status, StatusCode::OK);

    let students = app.get("/admin/students", Some(&admin)).await?;
    assert_eq!(students.body["total"], 0);

    let again = app
        .delete(&format!("/admin/student/{student_id}"), Some(&admin))
        .await?;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let login = app.login("gone@dept.edu", "student-pass").await?;
    assert_eq!(login.status, StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn admin_password_change_applies_to_login() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;

    let updated = app
        .put(
            "/admin/update",
            Some(&admin),
            json!({ "name": "Head of Department", "password": "rotated-pass" }),
        )
        .await?;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["name"], "Head of Department");
    assert!(updated.body.get("password").is_none());

    let old = app.login(common::ADMIN_EMAIL, common::ADMIN_PASSWORD).await?;
    assert_eq!(old.status, StatusCode::FORBIDDEN);
    app.token_for(common::ADMIN_EMAIL, "rotated-pass").await?;
    Ok(())
}
