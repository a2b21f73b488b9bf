mod common;

use anyhow::Result;
use http::StatusCode;
use serde_json::{Value, json};

fn meeting(topic: &str, host: &str, date: &str) -> Value {
    json!({
        "date": date,
        "time": "14:30:00",
        "topic": topic,
        "host_name": host,
        "location": "Room 301"
    })
}

fn topics(page: &Value) -> Vec<String> {
    page["items"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|m| m["topic"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn meetings_are_for_staff_only() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    let (_, teacher) = app.teacher(&admin, "host@dept.edu", "T-301").await?;
    let (_, student) = app.student(&admin, "stu@dept.edu", "2022331001").await?;

    let created = app
        .post("/meetings", Some(&teacher), meeting("Syllabus", "Dr. Rahman", "2025-04-01"))
        .await?;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["status"], "pending");
    let meeting_id = created.body["id"].as_str().unwrap().to_string();

    let denied = app
        .post("/meetings", Some(&student), meeting("Party", "Me", "2025-04-01"))
        .await?;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
    let denied = app.get("/meetings/filter", Some(&student)).await?;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
    let denied = app
        .get(&format!("/meetings/{meeting_id}"), Some(&student))
        .await?;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let fetched = app
        .get(&format!("/meetings/{meeting_id}"), Some(&admin))
        .await?;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["topic"], "Syllabus");
    Ok(())
}

#[tokio::test]
async fn meetings_filter_and_sort() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;

    for (topic, host, date) in [
        ("Budget", "Dr. Karim", "2025-04-03"),
        ("Admissions", "Dr. Rahman", "2025-04-01"),
        ("Curriculum", "dr. rahman", "2025-04-02"),
    ] {
        let res = app.post("/meetings", Some(&admin), meeting(topic, host, date)).await?;
        assert_eq!(res.status, StatusCode::CREATED);
    }

    let by_host = app
        .get("/meetings/filter?host_name=RAHMAN", Some(&admin))
        .await?;
    assert_eq!(by_host.status, StatusCode::OK);
    assert_eq!(by_host.body["total"], 2);
    assert_eq!(topics(&by_host.body), ["Admissions", "Curriculum"]);

    let by_topic_desc = app
        .get("/meetings/filter?sort_by=topic&order=desc", Some(&admin))
        .await?;
    assert_eq!(topics(&by_topic_desc.body), ["Curriculum", "Budget", "Admissions"]);

    let by_date = app
        .get("/meetings/filter?date=2025-04-03", Some(&admin))
        .await?;
    assert_eq!(topics(&by_date.body), ["Budget"]);

    let unknown_key = app
        .get("/meetings/filter?sort_by=password", Some(&admin))
        .await?;
    assert_eq!(unknown_key.status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_key.body["detail"], "Invalid sort_by field: password");
    Ok(())
}

#[tokio::test]
async fn exams_filter_by_course_title() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;

    let mut course_ids = Vec::new();
    for (code, title) in [("CSE101", "Data Structures"), ("CSE201", "Operating Systems")] {
        let course = app
            .post(
                "/course/create",
                Some(&admin),
                json!({
                    "code": code,
                    "title": title,
                    "credit": 3,
                    "course_type": "Core",
                    "year": "1",
                    "semester": "1",
                    "degree": "BSc"
                }),
            )
            .await?;
        assert_eq!(course.status, StatusCode::CREATED, "{}", course.body);
        course_ids.push(course.body["id"].as_str().unwrap().to_string());
    }

    for course_id in &course_ids {
        let exam = app
            .post(
                "/exam/create",
                Some(&admin),
                json!({
                    "date": "2025-06-10",
                    "start_time": "10:00:00",
                    "end_time": "13:00:00",
                    "course_id": course_id,
                    "room_no": "301",
                    "invigilator": "Dr. Karim",
                    "semester": "1"
                }),
            )
            .await?;
        assert_eq!(exam.status, StatusCode::CREATED, "{}", exam.body);
    }

    let res = app.get("/exam/filter?course_title=operating", None).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["total"], 1);
    assert_eq!(res.body["items"][0]["course_code"], "CSE201");
    assert_eq!(res.body["items"][0]["course_id"], course_ids[1].as_str());

    let none = app.get("/exam/filter?course_title=chemistry", None).await?;
    assert_eq!(none.body["total"], 0);

    let unknown_course = app
        .post(
            "/exam/create",
            Some(&admin),
            json!({
                "date": "2025-06-11",
                "start_time": "10:00:00",
                "end_time": "13:00:00",
                "course_id": uuid::Uuid::new_v4(),
                "room_no": "301",
                "invigilator": "Dr. Karim",
                "semester": "1"
            }),
        )
        .await?;
    assert_eq!(unknown_course.status, StatusCode::NOT_FOUND);

    let dropped = app
        .delete(&format!("/course/delete/{}", course_ids[1]), Some(&admin))
        .await?;
    assert_eq!(dropped.status, StatusCode::OK);
    let orphaned = app.get("/exam/filter?room_no=301", None).await?;
    assert_eq!(orphaned.body["total"], 2);
    let gone = app.get("/exam/filter?course_title=operating", None).await?;
    assert_eq!(gone.body["total"], 0);
    Ok(())
}
