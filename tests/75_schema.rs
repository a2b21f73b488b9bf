mod common;

use anyhow::Result;
use http::StatusCode;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::json;
use uuid::Uuid;

use dept_service::entities::{award, education, result, student, teacher};

/// Rows removed straight through the database still take their children along.
#[tokio::test]
async fn foreign_keys_cascade_on_profile_delete() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    let (teacher_id, token) = app.teacher(&admin, "schema@dept.edu", "T-601").await?;
    let (student_id, _) = app.student(&admin, "schema-stu@dept.edu", "2024331001").await?;

    let added = app
        .post(
            "/education/add",
            Some(&token),
            json!({ "degree_name": "BSc", "institution": "SUST" }),
        )
        .await?;
    assert_eq!(added.status, StatusCode::CREATED);
    app.post("/award/add", Some(&token), json!({ "title": "Dean's List" }))
        .await?;
    app.post(
        "/results/create",
        Some(&admin),
        json!({ "student_id": student_id, "semester": "1-1", "courses": "-", "grade": "3.5" }),
    )
    .await?;

    let teacher_id: Uuid = teacher_id.parse()?;
    let student_id: Uuid = student_id.parse()?;

    teacher::Entity::delete_by_id(teacher_id).exec(&app.db).await?;
    student::Entity::delete_by_id(student_id).exec(&app.db).await?;

    let educations = education::Entity::find()
        .filter(education::Column::TeacherId.eq(teacher_id))
        .count(&app.db)
        .await?;
    let awards = award::Entity::find()
        .filter(award::Column::TeacherId.eq(teacher_id))
        .count(&app.db)
        .await?;
    let results = result::Entity::find()
        .filter(result::Column::StudentId.eq(student_id))
        .count(&app.db)
        .await?;
    assert_eq!((educations, awards, results), (0, 0, 0));
    Ok(())
}
