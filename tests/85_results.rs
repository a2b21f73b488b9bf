mod common;

use anyhow::Result;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn students_read_only_their_own_results() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    let (_, teacher) = app.teacher(&admin, "grader@dept.edu", "T-501").await?;
    let (alice_id, alice) = app.student(&admin, "alice@dept.edu", "2023331001").await?;
    let (bob_id, bob) = app.student(&admin, "bob@dept.edu", "2023331002").await?;

    let recorded = app
        .post(
            "/results/create",
            Some(&teacher),
            json!({
                "student_id": alice_id,
                "semester": "1-1",
                "courses": "CSE101: A+",
                "grade": "4.00"
            }),
        )
        .await?;
    assert_eq!(recorded.status, StatusCode::CREATED);

    let mine = app.get("/results/my", Some(&alice)).await?;
    assert_eq!(mine.status, StatusCode::OK);
    assert_eq!(mine.body.as_array().map(Vec::len), Some(1));
    assert_eq!(mine.body[0]["grade"], "4.00");

    let bobs = app.get("/results/my", Some(&bob)).await?;
    assert_eq!(bobs.body, json!([]));

    let peek = app
        .get(&format!("/results/student/{alice_id}"), Some(&bob))
        .await?;
    assert_eq!(peek.status, StatusCode::FORBIDDEN);

    let staff_view = app
        .get(&format!("/results/student/{alice_id}"), Some(&teacher))
        .await?;
    assert_eq!(staff_view.body.as_array().map(Vec::len), Some(1));

    let staff_only = app.get("/results/my", Some(&teacher)).await?;
    assert_eq!(staff_only.status, StatusCode::FORBIDDEN);

    let empty = app
        .get(&format!("/results/student/{bob_id}"), Some(&admin))
        .await?;
    assert_eq!(empty.body, json!([]));
    Ok(())
}

#[tokio::test]
async fn only_staff_write_results() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    let (student_id, student) = app.student(&admin, "self@dept.edu", "2023331010").await?;

    let body = json!({
        "student_id": student_id,
        "semester": "2-1",
        "courses": "CSE201: B",
        "grade": "3.00"
    });
    let self_graded = app.post("/results/create", Some(&student), body.clone()).await?;
    assert_eq!(self_graded.status, StatusCode::FORBIDDEN);

    let recorded = app.post("/results/create", Some(&admin), body).await?;
    assert_eq!(recorded.status, StatusCode::CREATED);
    let result_id = recorded.body["id"].as_str().unwrap().to_string();

    let raise = app
        .put(
            &format!("/results/update/{result_id}"),
            Some(&student),
            json!({ "grade": "4.00" }),
        )
        .await?;
    assert_eq!(raise.status, StatusCode::FORBIDDEN);
    let remove = app
        .delete(&format!("/results/delete/{result_id}"), Some(&student))
        .await?;
    assert_eq!(remove.status, StatusCode::FORBIDDEN);

    let mine = app.get("/results/my", Some(&student)).await?;
    assert_eq!(mine.body[0]["grade"], "3.00");

    let corrected = app
        .put(
            &format!("/results/update/{result_id}"),
            Some(&admin),
            json!({ "grade": "3.25" }),
        )
        .await?;
    assert_eq!(corrected.status, StatusCode::OK);
    assert_eq!(corrected.body["grade"], "3.25");
    assert_eq!(corrected.body["semester"], "2-1");

    let unknown_student = app
        .post(
            "/results/create",
            Some(&admin),
            json!({
                "student_id": uuid::Uuid::new_v4(),
                "semester": "2-1",
                "courses": "-",
                "grade": "0"
            }),
        )
        .await?;
    assert_eq!(unknown_student.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn deleting_a_student_removes_their_results() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    let (student_id, _) = app.student(&admin, "leaver@dept.edu", "2023331020").await?;

    app.post(
        "/results/create",
        Some(&admin),
        json!({
            "student_id": student_id,
            "semester": "1-2",
            "courses": "MAT101: A",
            "grade": "3.75"
        }),
    )
    .await?;

    let deleted = app
        .delete(&format!("/admin/student/{student_id}"), Some(&admin))
        .await?;
    assert_eq!(deleted.status, StatusCode::OK);

    let results = app
        .get(&format!("/results/student/{student_id}"), Some(&admin))
        .await?;
    assert_eq!(results.body, json!([]));

    let login = app.login("leaver@dept.edu", "student-pass").await?;
    assert_eq!(login.status, StatusCode::FORBIDDEN);
    Ok(())
}
