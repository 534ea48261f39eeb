//! API integration tests
//!
//! These run against a live server with a migrated database:
//! `cargo run` in one terminal, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:5000";

/// Unique id per test run, to keep fixtures independent
fn unique(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{}-{}", prefix, nanos)
}

async fn register_user(client: &Client, user_id: &str) {
    let response = client
        .post(format!("{}/register", BASE_URL))
        .json(&json!({
            "userId": user_id,
            "userName": format!("Name of {}", user_id),
            "userPassword": "hunter2",
            "userImage": null
        }))
        .send()
        .await
        .expect("Failed to send register request");

    assert_eq!(response.status(), 201);
}

async fn add_tool(client: &Client, owner_id: &str, price: &str) -> i64 {
    let response = client
        .post(format!("{}/addTool", BASE_URL))
        .json(&json!({
            "ownerId": owner_id,
            "toolName": "Cordless Drill",
            "category": "Power Tools",
            "price": price,
            "toolImage": null
        }))
        .send()
        .await
        .expect("Failed to send addTool request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["insertId"].as_i64().expect("No insertId in response")
}

async fn rent_tool(client: &Client, tool_id: i64, renter_id: &str, days: i64) -> reqwest::Response {
    client
        .post(format!("{}/rentTool", BASE_URL))
        .json(&json!({
            "toolId": tool_id,
            "renterId": renter_id,
            "days": days
        }))
        .send()
        .await
        .expect("Failed to send rentTool request")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_register_and_login() {
    let client = Client::new();
    let user_id = unique("user");

    register_user(&client, &user_id).await;

    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({ "userId": user_id, "userPassword": "hunter2" }))
        .send()
        .await
        .expect("Failed to send login request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let rows = body.as_array().expect("Login response is not an array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["userId"], user_id.as_str());
    // The stored credential must never come back
    assert!(rows[0].get("userPassword").is_none());
}

#[tokio::test]
#[ignore]
async fn test_login_with_wrong_password_matches_nothing() {
    let client = Client::new();
    let user_id = unique("user");

    register_user(&client, &user_id).await;

    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({ "userId": user_id, "userPassword": "wrong" }))
        .send()
        .await
        .expect("Failed to send login request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body.as_array().expect("not an array").len(), 0);
}

#[tokio::test]
#[ignore]
async fn test_rent_prices_the_window() {
    let client = Client::new();
    let owner = unique("owner");
    let renter = unique("renter");

    register_user(&client, &owner).await;
    register_user(&client, &renter).await;
    let tool_id = add_tool(&client, &owner, "10.00").await;

    let response = rent_tool(&client, tool_id, &renter, 3).await;
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Rental successful!");
    assert!(body["rentalId"].is_number());

    // 10/day for 3 days => 30, end date 3 calendar days after start
    let response = client
        .get(format!("{}/myRentals/{}", BASE_URL, renter))
        .send()
        .await
        .expect("Failed to send myRentals request");

    let rentals: Value = response.json().await.expect("Failed to parse response");
    let rental = &rentals.as_array().expect("not an array")[0];
    assert_eq!(rental["totalPrice"], "30.00");
    assert_eq!(rental["status"], "active");

    let start = chrono::DateTime::parse_from_rfc3339(rental["startDate"].as_str().unwrap())
        .expect("Bad startDate");
    let end = chrono::DateTime::parse_from_rfc3339(rental["endDate"].as_str().unwrap())
        .expect("Bad endDate");
    assert_eq!(end - start, chrono::Duration::days(3));
}

#[tokio::test]
#[ignore]
async fn test_rent_already_rented_tool_is_rejected() {
    let client = Client::new();
    let owner = unique("owner");
    let renter = unique("renter");

    register_user(&client, &owner).await;
    register_user(&client, &renter).await;
    let tool_id = add_tool(&client, &owner, "10.00").await;

    let response = rent_tool(&client, tool_id, &renter, 2).await;
    assert_eq!(response.status(), 201);

    let response = rent_tool(&client, tool_id, &renter, 2).await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "This tool is no longer available.");

    // No second rental row appeared
    let response = client
        .get(format!("{}/myRentals/{}", BASE_URL, renter))
        .send()
        .await
        .expect("Failed to send myRentals request");
    let rentals: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(rentals.as_array().expect("not an array").len(), 1);
}

#[tokio::test]
#[ignore]
async fn test_rent_missing_tool_is_not_found() {
    let client = Client::new();
    let renter = unique("renter");
    register_user(&client, &renter).await;

    let response = rent_tool(&client, 999_999_999, &renter, 2).await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_rent_zero_days_is_rejected() {
    let client = Client::new();
    let owner = unique("owner");
    let renter = unique("renter");

    register_user(&client, &owner).await;
    register_user(&client, &renter).await;
    let tool_id = add_tool(&client, &owner, "10.00").await;

    let response = rent_tool(&client, tool_id, &renter, 0).await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_delete_actively_rented_tool_is_blocked() {
    let client = Client::new();
    let owner = unique("owner");
    let renter = unique("renter");

    register_user(&client, &owner).await;
    register_user(&client, &renter).await;
    let tool_id = add_tool(&client, &owner, "5.00").await;

    let response = rent_tool(&client, tool_id, &renter, 1).await;
    assert_eq!(response.status(), 201);
    let rental: Value = response.json().await.expect("Failed to parse response");
    let rental_id = rental["rentalId"].as_i64().expect("No rentalId");

    let response = client
        .delete(format!("{}/deleteTool/{}", BASE_URL, tool_id))
        .send()
        .await
        .expect("Failed to send deleteTool request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["message"],
        "Cannot delete this tool because it is currently rented out."
    );

    // The listing is still there
    let response = client
        .get(format!("{}/getMyListings/{}", BASE_URL, owner))
        .send()
        .await
        .expect("Failed to send getMyListings request");
    let listings: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(listings.as_array().expect("not an array").len(), 1);

    // After the return, the delete goes through even with rental history
    let response = client
        .post(format!("{}/returnTool", BASE_URL))
        .json(&json!({ "rentalId": rental_id, "toolId": tool_id }))
        .send()
        .await
        .expect("Failed to send returnTool request");
    assert!(response.status().is_success());

    let response = client
        .delete(format!("{}/deleteTool/{}", BASE_URL, tool_id))
        .send()
        .await
        .expect("Failed to send deleteTool request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/getMyListings/{}", BASE_URL, owner))
        .send()
        .await
        .expect("Failed to send getMyListings request");
    let listings: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(listings.as_array().expect("not an array").len(), 0);
}

#[tokio::test]
#[ignore]
async fn test_delete_missing_tool_is_not_found() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/deleteTool/{}", BASE_URL, 999_999_999))
        .send()
        .await
        .expect("Failed to send deleteTool request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_return_frees_the_tool() {
    let client = Client::new();
    let owner = unique("owner");
    let renter = unique("renter");

    register_user(&client, &owner).await;
    register_user(&client, &renter).await;
    let tool_id = add_tool(&client, &owner, "8.00").await;

    let response = rent_tool(&client, tool_id, &renter, 2).await;
    assert_eq!(response.status(), 201);
    let rental: Value = response.json().await.expect("Failed to parse response");
    let rental_id = rental["rentalId"].as_i64().expect("No rentalId");

    let response = client
        .post(format!("{}/returnTool", BASE_URL))
        .json(&json!({ "rentalId": rental_id, "toolId": tool_id }))
        .send()
        .await
        .expect("Failed to send returnTool request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Tool returned successfully");

    // The rental is completed and the tool can be rented again
    let response = client
        .get(format!("{}/myRentals/{}", BASE_URL, renter))
        .send()
        .await
        .expect("Failed to send myRentals request");
    let rentals: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(rentals[0]["status"], "completed");

    let response = rent_tool(&client, tool_id, &renter, 1).await;
    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_double_return_is_rejected() {
    let client = Client::new();
    let owner = unique("owner");
    let renter = unique("renter");

    register_user(&client, &owner).await;
    register_user(&client, &renter).await;
    let tool_id = add_tool(&client, &owner, "8.00").await;

    let response = rent_tool(&client, tool_id, &renter, 2).await;
    let rental: Value = response.json().await.expect("Failed to parse response");
    let rental_id = rental["rentalId"].as_i64().expect("No rentalId");

    for expected in [200u16, 400] {
        let response = client
            .post(format!("{}/returnTool", BASE_URL))
            .json(&json!({ "rentalId": rental_id, "toolId": tool_id }))
            .send()
            .await
            .expect("Failed to send returnTool request");
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
#[ignore]
async fn test_return_with_mismatched_tool_is_rejected() {
    let client = Client::new();
    let owner = unique("owner");
    let renter = unique("renter");

    register_user(&client, &owner).await;
    register_user(&client, &renter).await;
    let rented = add_tool(&client, &owner, "8.00").await;
    let other = add_tool(&client, &owner, "8.00").await;

    let response = rent_tool(&client, rented, &renter, 2).await;
    let rental: Value = response.json().await.expect("Failed to parse response");
    let rental_id = rental["rentalId"].as_i64().expect("No rentalId");

    let response = client
        .post(format!("{}/returnTool", BASE_URL))
        .json(&json!({ "rentalId": rental_id, "toolId": other }))
        .send()
        .await
        .expect("Failed to send returnTool request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_lender_stats_are_zero_without_active_rentals() {
    let client = Client::new();
    let owner = unique("owner");
    register_user(&client, &owner).await;

    let response = client
        .get(format!("{}/getLenderStats/{}", BASE_URL, owner))
        .send()
        .await
        .expect("Failed to send getLenderStats request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["totalEarnings"], "0");
    assert_eq!(body["activeRentals"], 0);
}

#[tokio::test]
#[ignore]
async fn test_lender_stats_sum_active_rentals() {
    let client = Client::new();
    let owner = unique("owner");
    let renter = unique("renter");

    register_user(&client, &owner).await;
    register_user(&client, &renter).await;
    let first = add_tool(&client, &owner, "10.00").await;
    let second = add_tool(&client, &owner, "5.00").await;

    assert_eq!(rent_tool(&client, first, &renter, 3).await.status(), 201);
    assert_eq!(rent_tool(&client, second, &renter, 2).await.status(), 201);

    let response = client
        .get(format!("{}/getLenderStats/{}", BASE_URL, owner))
        .send()
        .await
        .expect("Failed to send getLenderStats request");

    let body: Value = response.json().await.expect("Failed to parse response");
    // 10*3 + 5*2
    assert_eq!(body["totalEarnings"], "40.00");
    assert_eq!(body["activeRentals"], 2);
}

#[tokio::test]
#[ignore]
async fn test_wishlist_roundtrip() {
    let client = Client::new();
    let owner = unique("owner");
    let user = unique("user");

    register_user(&client, &owner).await;
    register_user(&client, &user).await;
    let tool_id = add_tool(&client, &owner, "5.00").await;

    let add = json!({ "userId": user, "toolId": tool_id });

    let response = client
        .post(format!("{}/addToWishlist", BASE_URL))
        .json(&add)
        .send()
        .await
        .expect("Failed to send addToWishlist request");
    assert!(response.status().is_success());

    // Duplicate add reports, does not fail
    let response = client
        .post(format!("{}/addToWishlist", BASE_URL))
        .json(&add)
        .send()
        .await
        .expect("Failed to send addToWishlist request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Already in wishlist");

    let response = client
        .get(format!("{}/getWishlistIds/{}", BASE_URL, user))
        .send()
        .await
        .expect("Failed to send getWishlistIds request");
    let ids: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(ids.as_array().expect("not an array").len(), 1);
    assert_eq!(ids[0]["toolId"].as_i64(), Some(tool_id));

    let response = client
        .get(format!("{}/myWishlist/{}", BASE_URL, user))
        .send()
        .await
        .expect("Failed to send myWishlist request");
    let tools: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(tools[0]["toolId"].as_i64(), Some(tool_id));
    assert!(tools[0]["ownerName"].is_string());

    let response = client
        .delete(format!("{}/removeFromWishlist/{}/{}", BASE_URL, user, tool_id))
        .send()
        .await
        .expect("Failed to send removeFromWishlist request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/getWishlistIds/{}", BASE_URL, user))
        .send()
        .await
        .expect("Failed to send getWishlistIds request");
    let ids: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(ids.as_array().expect("not an array").len(), 0);
}

/// Concurrency property: N simultaneous rent attempts against one available
/// tool must produce exactly one rental and N-1 rejections.
#[tokio::test]
#[ignore]
async fn test_concurrent_rents_serialize_per_tool() {
    const ATTEMPTS: usize = 8;

    let client = Client::new();
    let owner = unique("owner");
    register_user(&client, &owner).await;
    let tool_id = add_tool(&client, &owner, "10.00").await;

    let mut renters = Vec::new();
    for i in 0..ATTEMPTS {
        let renter = unique(&format!("renter{}", i));
        register_user(&client, &renter).await;
        renters.push(renter);
    }

    let mut handles = Vec::new();
    for renter in renters {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            rent_tool(&client, tool_id, &renter, 1).await.status()
        }));
    }

    let mut successes = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.expect("rent task panicked").as_u16() {
            201 => successes += 1,
            400 => conflicts += 1,
            other => panic!("unexpected status {}", other),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(conflicts, ATTEMPTS - 1);

    let response = client
        .get(format!("{}/getLenderStats/{}", BASE_URL, owner))
        .send()
        .await
        .expect("Failed to send getLenderStats request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["activeRentals"], 1);
}
