mod common;

use anyhow::Result;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn only_the_owner_may_change_an_award() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    let (_, owner) = app.teacher(&admin, "owner@dept.edu", "T-001").await?;
    let (_, other) = app.teacher(&admin, "other@dept.edu", "T-002").await?;

    let award = app
        .post(
            "/award/add",
            Some(&owner),
            json!({ "title": "Best Paper", "year": "2023" }),
        )
        .await?;
    assert_eq!(award.status, StatusCode::CREATED);
    let award_id = award.body["id"].as_str().unwrap().to_string();

    let res = app
        .delete(&format!("/award/delete/{award_id}"), Some(&other))
        .await?;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app
        .put(
            &format!("/award/update/{award_id}"),
            Some(&other),
            json!({ "title": "Stolen" }),
        )
        .await?;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app
        .delete(&format!("/award/delete/{award_id}"), Some(&owner))
        .await?;
    assert_eq!(res.status, StatusCode::OK);

    let res = app
        .delete(&format!("/award/delete/{award_id}"), Some(&owner))
        .await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn partial_update_leaves_other_fields_alone() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    let (_, token) = app.teacher(&admin, "partial@dept.edu", "T-010").await?;

    let award = app
        .post(
            "/award/add",
            Some(&token),
            json!({
                "title": "Teaching Excellence",
                "award_type": "Internal",
                "description": "Faculty award",
                "year": "2022"
            }),
        )
        .await?;
    let award_id = award.body["id"].as_str().unwrap().to_string();

    let updated = app
        .put(
            &format!("/award/update/{award_id}"),
            Some(&token),
            json!({ "description": "Updated", "year": null }),
        )
        .await?;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["title"], "Teaching Excellence");
    assert_eq!(updated.body["award_type"], "Internal");
    assert_eq!(updated.body["description"], "Updated");
    assert!(updated.body["year"].is_null());

    let rejected = app
        .put(
            &format!("/award/update/{award_id}"),
            Some(&token),
            json!({ "title": null }),
        )
        .await?;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn public_profile_lists_teacher_records() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    let (teacher_id, token) = app.teacher(&admin, "public@dept.edu", "T-020").await?;

    app.post("/award/add", Some(&token), json!({ "title": "Award A" }))
        .await?;
    app.post(
        "/publication/add",
        Some(&token),
        json!({ "title": "On Testing", "publication_type": "Journal" }),
    )
    .await?;

    let first = app.get(&format!("/teacher/{teacher_id}"), None).await?;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["email"], "public@dept.edu");
    assert_eq!(first.body["awards"].as_array().unwrap().len(), 1);

    let second = app.get(&format!("/teacher/{teacher_id}"), None).await?;
    assert_eq!(first.body, second.body);

    let mine = app.get("/award/my", Some(&token)).await?;
    assert_eq!(mine.status, StatusCode::OK);
    assert_eq!(mine.body.as_array().unwrap().len(), 1);
    Ok(())
}
