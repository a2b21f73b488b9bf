mod common;

use anyhow::Result;
use http::StatusCode;
use serde_json::json;

const NOTICE_FIELDS: &[(&str, &str)] = &[
    ("title", "Exam routine published"),
    ("description", "Final exam routine"),
    ("detailed_description", "See the attached routine."),
    ("category", "academic"),
    ("date", "2025-05-01"),
    ("author", "Exam Committee"),
];

const EVENT_FIELDS: &[(&str, &str)] = &[
    ("title", "Rust Workshop"),
    ("date", "2025-07-01"),
    ("start_time", "10:00:00"),
    ("end_time", "16:00:00"),
    ("location", "Auditorium"),
    ("description", "Hands-on systems programming"),
    ("detailed_description", "Bring a laptop."),
    ("category", "workshop"),
    ("organizer", "CSE Society"),
    ("contact_email", "society@dept.edu"),
    ("max_attendees", "50"),
    ("tags", "rust, systems,"),
];

#[tokio::test]
async fn notice_is_created_from_a_multipart_form() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;

    let created = app
        .multipart(
            "POST",
            "/notice/create",
            Some(&admin),
            NOTICE_FIELDS,
            Some(("pdf_file", "routine.pdf", &b"%PDF-1.4 routine"[..])),
        )
        .await?;
    assert_eq!(created.status, StatusCode::CREATED, "{}", created.body);
    assert_eq!(created.body["category"], "academic");
    assert_eq!(created.body["is_archived"], false);
    let stored = created.body["pdf_file"].as_str().unwrap().to_string();
    assert!(stored.ends_with(".pdf"));

    let file = app.get(&format!("/{stored}"), None).await?;
    assert_eq!(file.status, StatusCode::OK);

    let listed = app.get("/notice/all?category=academic", None).await?;
    assert_eq!(listed.body["total"], 1);
    assert_eq!(listed.body["items"][0]["title"], "Exam routine published");
    Ok(())
}

#[tokio::test]
async fn archived_notices_leave_the_board() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;

    let created = app
        .multipart("POST", "/notice/create", Some(&admin), NOTICE_FIELDS, None)
        .await?;
    assert_eq!(created.status, StatusCode::CREATED);
    let notice_id = created.body["id"].as_str().unwrap().to_string();

    let archived = app
        .multipart(
            "PUT",
            &format!("/notice/update/{notice_id}"),
            Some(&admin),
            &[("is_archived", "true")],
            None,
        )
        .await?;
    assert_eq!(archived.status, StatusCode::OK);
    assert_eq!(archived.body["is_archived"], true);
    assert_eq!(archived.body["title"], "Exam routine published");

    let listed = app.get("/notice/all", None).await?;
    assert_eq!(listed.body["total"], 0);

    let direct = app.get(&format!("/notice/{notice_id}"), None).await?;
    assert_eq!(direct.status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn notice_form_is_checked_before_storing() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    let (_, teacher) = app.teacher(&admin, "t@dept.edu", "T-401").await?;

    let not_admin = app
        .multipart("POST", "/notice/create", Some(&teacher), NOTICE_FIELDS, None)
        .await?;
    assert_eq!(not_admin.status, StatusCode::FORBIDDEN);

    let missing = app
        .multipart(
            "POST",
            "/notice/create",
            Some(&admin),
            &NOTICE_FIELDS[..3],
            None,
        )
        .await?;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);

    let executable = app
        .multipart(
            "POST",
            "/notice/create",
            Some(&admin),
            NOTICE_FIELDS,
            Some(("pdf_file", "routine.exe", &b"MZ"[..])),
        )
        .await?;
    assert_eq!(executable.status, StatusCode::BAD_REQUEST);

    let not_multipart = app
        .post("/notice/create", Some(&admin), json!({ "title": "x" }))
        .await?;
    assert_eq!(not_multipart.status, StatusCode::BAD_REQUEST);

    let listed = app.get("/notice/all", None).await?;
    assert_eq!(listed.body["total"], 0);
    Ok(())
}

#[tokio::test]
async fn event_is_created_from_a_multipart_form() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;

    let created = app
        .multipart(
            "POST",
            "/event/create",
            Some(&admin),
            EVENT_FIELDS,
            Some(("image", "banner.png", &b"\x89PNG banner"[..])),
        )
        .await?;
    assert_eq!(created.status, StatusCode::CREATED, "{}", created.body);
    assert_eq!(created.body["tags"], json!(["rust", "systems"]));
    assert_eq!(created.body["registration_open"], true);
    assert_eq!(created.body["current_attendees"], 0);
    assert!(created.body["image"].as_str().unwrap().ends_with(".png"));
    let event_id = created.body["id"].as_str().unwrap().to_string();

    let listed = app.get("/event/all?category=workshop", None).await?;
    assert_eq!(listed.body["total"], 1);
    let other = app.get("/event/all?category=hackathon", None).await?;
    assert_eq!(other.body["total"], 0);

    let fetched = app.get(&format!("/event/{event_id}"), None).await?;
    assert_eq!(fetched.body["title"], "Rust Workshop");

    let mut inverted = EVENT_FIELDS.to_vec();
    inverted[2] = ("start_time", "17:00:00");
    let bad = app
        .multipart("POST", "/event/create", Some(&admin), &inverted, None)
        .await?;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);

    let registration = app
        .post(
            "/event/submit",
            None,
            json!({ "name": "Visitor", "email": "visitor@example.com", "roll": "42" }),
        )
        .await?;
    assert_eq!(registration.status, StatusCode::CREATED);
    Ok(())
}
