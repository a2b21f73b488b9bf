mod common;

use anyhow::Result;
use http::StatusCode;
use serde_json::json;

fn booking(start: &str, end: &str) -> serde_json::Value {
    json!({
        "room_id": 5,
        "date": "2025-03-10",
        "start_time": start,
        "end_time": end,
        "booking_purpose": "Lab"
    })
}

#[tokio::test]
async fn overlapping_booking_is_rejected_but_touching_is_not() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;

    let room = app
        .post(
            "/room/add",
            Some(&admin),
            json!({ "room_id": 5, "location": "Building A", "capacity": 40 }),
        )
        .await?;
    assert_eq!(room.status, StatusCode::CREATED);

    let first = app
        .post("/room/book", Some(&admin), booking("10:00:00", "11:00:00"))
        .await?;
    assert_eq!(first.status, StatusCode::CREATED);

    let overlap = app
        .post("/room/book", Some(&admin), booking("10:30:00", "11:30:00"))
        .await?;
    assert_eq!(overlap.status, StatusCode::CONFLICT);
    assert_eq!(overlap.body["detail"], "Room is already booked for this time slot.");

    let touching = app
        .post("/room/book", Some(&admin), booking("11:00:00", "12:00:00"))
        .await?;
    assert_eq!(touching.status, StatusCode::CREATED);
    Ok(())
}

#[tokio::test]
async fn inverted_interval_and_unknown_room_are_rejected() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;

    let unknown = app
        .post("/room/book", Some(&admin), booking("10:00:00", "11:00:00"))
        .await?;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    app.post(
        "/room/add",
        Some(&admin),
        json!({ "room_id": 5, "location": "Building A", "capacity": 40 }),
    )
    .await?;
    let inverted = app
        .post("/room/book", Some(&admin), booking("12:00:00", "11:00:00"))
        .await?;
    assert_eq!(inverted.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn booked_room_is_filtered_out_of_availability() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;

    for (room_id, capacity) in [(5, 40), (6, 80)] {
        app.post(
            "/room/add",
            Some(&admin),
            json!({ "room_id": room_id, "location": "Building A", "capacity": capacity }),
        )
        .await?;
    }
    app.post("/room/book", Some(&admin), booking("09:00:00", "10:00:00"))
        .await?;

    let res = app
        .get(
            "/room/filter?date=2025-03-10&start_time=09:30:00&end_time=10:30:00",
            Some(&admin),
        )
        .await?;
    assert_eq!(res.status, StatusCode::OK);
    let rooms = res.body.as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["id"], 6);

    let partial = app
        .get("/room/filter?date=2025-03-10", Some(&admin))
        .await?;
    assert_eq!(partial.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn rejected_booking_releases_its_slot() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;

    app.post(
        "/room/add",
        Some(&admin),
        json!({ "room_id": 5, "location": "Building A", "capacity": 40 }),
    )
    .await?;
    let first = app
        .post("/room/book", Some(&admin), booking("10:00:00", "11:00:00"))
        .await?;
    assert_eq!(first.status, StatusCode::CREATED);

    let rejected = app
        .put(
            "/room/booking/status",
            Some(&admin),
            json!({ "booking_id": first.body["id"], "status": "rejected" }),
        )
        .await?;
    assert_eq!(rejected.status, StatusCode::OK);

    let free = app
        .get(
            "/room/filter?date=2025-03-10&start_time=10:00:00&end_time=11:00:00",
            Some(&admin),
        )
        .await?;
    assert_eq!(free.body.as_array().map(Vec::len), Some(1));

    let rebooked = app
        .post("/room/book", Some(&admin), booking("10:30:00", "11:30:00"))
        .await?;
    assert_eq!(rebooked.status, StatusCode::CREATED);
    Ok(())
}

#[tokio::test]
async fn deleting_a_room_removes_its_bookings() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;

    app.post(
        "/room/add",
        Some(&admin),
        json!({ "room_id": 5, "location": "Building A", "capacity": 40 }),
    )
    .await?;
    app.post("/room/book", Some(&admin), booking("10:00:00", "11:00:00"))
        .await?;

    let deleted = app.delete("/room/5", Some(&admin)).await?;
    assert_eq!(deleted.status, StatusCode::OK);

    let bookings = app.get("/room/bookings?room_id=5", Some(&admin)).await?;
    assert_eq!(bookings.status, StatusCode::OK);
    assert_eq!(bookings.body["total"], 0);

    let again = app.delete("/room/5", Some(&admin)).await?;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn malformed_room_body_is_a_bad_request() -> Result<()> {
    let app = common::spawn_app().await?;
    let admin = app.admin_token().await?;

    let missing = app
        .post("/room/add", Some(&admin), json!({ "location": "B1" }))
        .await?;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert!(missing.body["detail"].is_string());

    let bad_date = app.get("/room/filter?date=tomorrow", Some(&admin)).await?;
    assert_eq!(bad_date.status, StatusCode::BAD_REQUEST);
    assert!(bad_date.body["detail"].is_string());

    let bad_id = app.delete("/room/not-a-number", Some(&admin)).await?;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);
    Ok(())
}
