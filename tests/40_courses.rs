mod common;

use anyhow::Result;
use http::StatusCode;
use serde_json::json;

async fn create_course(
    app: &common::TestApp,
    admin: &str,
    code: &str,
    year: &str,
    teacher_id: Option<&str>,
) -> Result<String> {
    let res = app
        .post(
            "/course/create",
            Some(admin),
            json!({
                "code": code,
                "title": "Data Structures",
                "credit": 3,
                "course_type": "Core",
                "year": year,
                "semester": "1",
                "degree": "BSc",
                "teacher_id": teacher_id
            }),
        )
        .await?;
    anyhow::ensure!(res.status == StatusCode::CREATED, "create course: {}", res.body);
    Ok(res.body["id"].as_str().unwrap_or_default().to_string())
}

#[tokio::test]
async fn assigned_teacher_may_edit_content_only() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    let (teacher_id, owner) = app.teacher(&admin, "ds@dept.edu", "T-100").await?;
    let (_, stranger) = app.teacher(&admin, "nope@dept.edu", "T-101").await?;
    let course_id = create_course(&app, &admin, "CSE201", "2", Some(&teacher_id)).await?;

    let content = app
        .put(
            &format!("/course/update/{course_id}"),
            Some(&owner),
            json!({ "content": "Week 1: arrays" }),
        )
        .await?;
    assert_eq!(content.status, StatusCode::OK);
    assert_eq!(content.body["content"], "Week 1: arrays");
    assert_eq!(content.body["title"], "Data Structures");

    let metadata = app
        .put(
            &format!("/course/update/{course_id}"),
            Some(&owner),
            json!({ "credit": 4 }),
        )
        .await?;
    assert_eq!(metadata.status, StatusCode::FORBIDDEN);

    let foreign = app
        .put(
            &format!("/course/update/{course_id}"),
            Some(&stranger),
            json!({ "content": "hijack" }),
        )
        .await?;
    assert_eq!(foreign.status, StatusCode::FORBIDDEN);

    let by_admin = app
        .put(
            &format!("/course/update/{course_id}"),
            Some(&admin),
            json!({ "credit": 4 }),
        )
        .await?;
    assert_eq!(by_admin.status, StatusCode::OK);
    assert_eq!(by_admin.body["credit"], 4);
    assert_eq!(by_admin.body["content"], "Week 1: arrays");
    Ok(())
}

#[tokio::test]
async fn duplicate_course_code_is_rejected() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    create_course(&app, &admin, "CSE301", "3", None).await?;

    let res = app
        .post(
            "/course/create",
            Some(&admin),
            json!({
                "code": "CSE301",
                "title": "Again",
                "credit": 3,
                "course_type": "Core",
                "year": "3",
                "semester": "1",
                "degree": "BSc"
            }),
        )
        .await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn course_listing_is_stable_and_filterable() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    for (code, year) in [("CSE101", "1"), ("CSE102", "1"), ("EEE101", "4")] {
        create_course(&app, &admin, code, year, None).await?;
    }

    let first = app.get("/course/list?sort_by=year&order=desc", None).await?;
    let second = app.get("/course/list?sort_by=year&order=desc", None).await?;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, second.body);
    assert_eq!(first.body["total"], 3);
    assert_eq!(first.body["items"][0]["code"], "EEE101");
    assert_eq!(first.body["items"][1]["code"], "CSE101");

    let filtered = app.get("/course/list?code=cse", None).await?;
    assert_eq!(filtered.body["total"], 2);

    let paged = app.get("/course/list?page=2&page_size=2", None).await?;
    assert_eq!(paged.body["items"].as_array().unwrap().len(), 1);
    Ok(())
}
