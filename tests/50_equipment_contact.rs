mod common;

use anyhow::Result;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn equipment_is_lent_to_one_student_at_a_time() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    let (_, alice) = app.student(&admin, "alice@dept.edu", "2020331001").await?;
    let (_, bob) = app.student(&admin, "bob@dept.edu", "2020331002").await?;

    let item = app
        .post("/equipment", Some(&admin), json!({ "name": "Oscilloscope" }))
        .await?;
    assert_eq!(item.status, StatusCode::CREATED);
    assert_eq!(item.body["availability"], true);
    let item_id = item.body["id"].as_str().unwrap().to_string();

    let booked = app
        .post(&format!("/equipment/{item_id}/book"), Some(&alice), json!({}))
        .await?;
    assert_eq!(booked.status, StatusCode::CREATED);
    let booking_id = booked.body["id"].as_str().unwrap().to_string();

    let taken = app
        .post(&format!("/equipment/{item_id}/book"), Some(&bob), json!({}))
        .await?;
    assert_eq!(taken.status, StatusCode::CONFLICT);

    let not_theirs = app
        .post(&format!("/equipment/bookings/{booking_id}/return"), Some(&bob), json!({}))
        .await?;
    assert_eq!(not_theirs.status, StatusCode::FORBIDDEN);

    let returned = app
        .post(&format!("/equipment/bookings/{booking_id}/return"), Some(&alice), json!({}))
        .await?;
    assert_eq!(returned.status, StatusCode::OK);
    assert!(!returned.body["return_date"].is_null());

    let again = app
        .post(&format!("/equipment/bookings/{booking_id}/return"), Some(&alice), json!({}))
        .await?;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);

    let listing = app.get("/equipment", Some(&bob)).await?;
    assert_eq!(listing.body[0]["availability"], true);

    let mine = app.get("/equipment/bookings/my", Some(&alice)).await?;
    assert_eq!(mine.body.as_array().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn deleting_equipment_drops_its_bookings() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;
    let (_, alice) = app.student(&admin, "alice@dept.edu", "2020331001").await?;

    let item = app
        .post("/equipment", Some(&admin), json!({ "name": "Multimeter" }))
        .await?;
    let item_id = item.body["id"].as_str().unwrap().to_string();
    let booked = app
        .post(&format!("/equipment/{item_id}/book"), Some(&alice), json!({}))
        .await?;
    assert_eq!(booked.status, StatusCode::CREATED);

    let listing = app.get("/equipment", Some(&alice)).await?;
    assert_eq!(listing.body[0]["availability"], false);

    let deleted = app
        .delete(&format!("/equipment/{item_id}"), Some(&admin))
        .await?;
    assert_eq!(deleted.status, StatusCode::OK);

    let mine = app.get("/equipment/bookings/my", Some(&alice)).await?;
    assert_eq!(mine.body, json!([]));
    let listing = app.get("/equipment", Some(&alice)).await?;
    assert_eq!(listing.body, json!([]));
    Ok(())
}

#[tokio::test]
async fn contact_messages_are_public_to_send_and_admin_to_read() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;

    let sent = app
        .post(
            "/contact",
            None,
            json!({
                "first_name": "Jane",
                "last_name": "Doe",
                "email": "jane@example.com",
                "subject": "Admission",
                "message": "When does the semester start?"
            }),
        )
        .await?;
    assert_eq!(sent.status, StatusCode::CREATED);
    let message_id = sent.body["id"].as_str().unwrap().to_string();

    let anonymous = app.get("/contact", None).await?;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let listed = app.get("/contact", Some(&admin)).await?;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["total"], 1);

    let deleted = app.delete(&format!("/contact/{message_id}"), Some(&admin)).await?;
    assert_eq!(deleted.status, StatusCode::OK);
    let gone = app.delete(&format!("/contact/{message_id}"), Some(&admin)).await?;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn unknown_upload_is_not_found() -> Result<()> {
    let app = common::spawn_app().await?;

    let res = app.get("/missing.pdf", None).await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["detail"], "File not found");
    Ok(())
}
