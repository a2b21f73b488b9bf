mod common;

use anyhow::Result;
use http::StatusCode;
use serde_json::{Value, json};

/// `(resource, create body, update body)` for each per-teacher record type.
fn record_kinds() -> Vec<(&'static str, Value, Value)> {
    vec![
        (
            "education",
            json!({ "degree_name": "PhD", "institution": "MIT", "year": "2015" }),
            json!({ "institution": "Elsewhere" }),
        ),
        (
            "experience",
            json!({ "title": "Lecturer", "organization": "SUST", "duration": "3 years" }),
            json!({ "organization": "Elsewhere" }),
        ),
        (
            "publication",
            json!({ "title": "On Graphs", "publication_type": "Journal" }),
            json!({ "title": "Stolen" }),
        ),
        (
            "award",
            json!({ "title": "Best Paper", "year": "2023" }),
            json!({ "title": "Stolen" }),
        ),
    ]
}

#[tokio::test]
async fn records_are_changed_only_by_their_owner() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    let (owner_id, owner) = app.teacher(&admin, "owner@dept.edu", "T-101").await?;
    let (_, other) = app.teacher(&admin, "other@dept.edu", "T-102").await?;
    let (_, student) = app.student(&admin, "stu@dept.edu", "2021331001").await?;

    for (kind, create, update) in record_kinds() {
        let by_student = app
            .post(&format!("/{kind}/add"), Some(&student), create.clone())
            .await?;
        assert_eq!(by_student.status, StatusCode::FORBIDDEN, "{kind} add by student");

        let created = app
            .post(&format!("/{kind}/add"), Some(&owner), create)
            .await?;
        assert_eq!(created.status, StatusCode::CREATED, "{kind}: {}", created.body);
        let id = created.body["id"].as_str().unwrap().to_string();

        let put = app
            .put(&format!("/{kind}/update/{id}"), Some(&other), update.clone())
            .await?;
        assert_eq!(put.status, StatusCode::FORBIDDEN, "{kind} update by other");

        let listed = app.get(&format!("/{kind}/teacher/{owner_id}"), None).await?;
        assert_eq!(listed.status, StatusCode::OK);
        assert_eq!(listed.body[0], created.body, "{kind} unchanged after forbidden update");

        let removed = app
            .delete(&format!("/{kind}/delete/{id}"), Some(&other))
            .await?;
        assert_eq!(removed.status, StatusCode::FORBIDDEN, "{kind} delete by other");

        let own_update = app
            .put(&format!("/{kind}/update/{id}"), Some(&owner), update)
            .await?;
        assert_eq!(own_update.status, StatusCode::OK, "{kind} update by owner");

        let own_delete = app
            .delete(&format!("/{kind}/delete/{id}"), Some(&owner))
            .await?;
        assert_eq!(own_delete.status, StatusCode::OK, "{kind} delete by owner");

        let listed = app.get(&format!("/{kind}/teacher/{owner_id}"), None).await?;
        assert_eq!(listed.body, json!([]), "{kind} listing after delete");
    }
    Ok(())
}

#[tokio::test]
async fn deleted_award_leaves_the_public_listing() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    let (teacher_id, token) = app.teacher(&admin, "awards@dept.edu", "T-110").await?;

    let kept = app
        .post("/award/add", Some(&token), json!({ "title": "Kept" }))
        .await?;
    let dropped = app
        .post("/award/add", Some(&token), json!({ "title": "Dropped" }))
        .await?;
    let dropped_id = dropped.body["id"].as_str().unwrap().to_string();

    app.delete(&format!("/award/delete/{dropped_id}"), Some(&token))
        .await?;

    let listed = app.get(&format!("/award/teacher/{teacher_id}"), None).await?;
    let awards = listed.body.as_array().unwrap();
    assert_eq!(awards.len(), 1);
    assert_eq!(awards[0]["id"], kept.body["id"]);

    let profile = app.get(&format!("/teacher/{teacher_id}"), None).await?;
    assert_eq!(profile.body["awards"].as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn deleting_a_teacher_removes_their_records() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    let (teacher_id, token) = app.teacher(&admin, "leaving@dept.edu", "T-120").await?;

    app.post(
        "/education/add",
        Some(&token),
        json!({ "degree_name": "MSc", "institution": "BUET" }),
    )
    .await?;
    app.post("/award/add", Some(&token), json!({ "title": "Teaching Award" }))
        .await?;

    let deleted = app
        .delete(&format!("/admin/teacher/{teacher_id}"), Some(&admin))
        .await?;
    assert_eq!(deleted.status, StatusCode::OK);

    let education = app
        .get(&format!("/education/teacher/{teacher_id}"), None)
        .await?;
    assert_eq!(education.body, json!([]));
    let awards = app.get(&format!("/award/teacher/{teacher_id}"), None).await?;
    assert_eq!(awards.body, json!([]));

    let profile = app.get(&format!("/teacher/{teacher_id}"), None).await?;
    assert_eq!(profile.status, StatusCode::NOT_FOUND);

    let login = app.login("leaving@dept.edu", "teacher-pass").await?;
    assert_eq!(login.status, StatusCode::FORBIDDEN);
    Ok(())
}
