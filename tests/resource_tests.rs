// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Resource client tests for group, member and verification endpoints.

use serde_json::json;

mod common;
use common::{test_app, StubBackend};

#[tokio::test]
async fn test_group_availability_parses_aggregate() {
    let stub = StubBackend::start().await;
    stub.respond_json(
        "GET",
        "/api/availability/group",
        200,
        json!({
            "days": [{
                "dayName": "Wednesday",
                "dateLabel": "10/14",
                "isNextWeek": false,
                "hours": [{ "hour": 20, "availableUserIds": ["u-1", "u-2"] }]
            }],
            "members": [{
                "id": "u-1",
                "displayName": "Tank",
                "inGameNickname": "Shieldwall",
                "colorHex": "#aa3300"
            }]
        }),
    );
    let app = test_app(&stub, None);

    let group = app.ctx.schedule.group_availability().await.unwrap();

    assert_eq!(group.days.len(), 1);
    assert_eq!(group.days[0].day_name, "Wednesday");
    assert_eq!(group.days[0].hours[0].available_user_ids, vec!["u-1", "u-2"]);
    assert_eq!(group.members[0].in_game_nickname, "Shieldwall");
}

#[tokio::test]
async fn test_member_directory() {
    let stub = StubBackend::start().await;
    stub.respond_json(
        "GET",
        "/api/members",
        200,
        json!([
            { "id": "u-1", "displayName": "Tank", "inGameNickname": "Shieldwall", "colorHex": "#aa3300" },
            { "id": "u-2", "displayName": "Healer", "inGameNickname": "Mender", "colorHex": "#33aa00" }
        ]),
    );
    let app = test_app(&stub, None);

    let members = app.ctx.users.get_all_members().await.unwrap();

    let names: Vec<&str> = members.iter().map(|m| m.display_name.as_str()).collect();
    assert_eq!(names, vec!["Tank", "Healer"]);
}

#[tokio::test]
async fn test_generate_token_posts_empty_object() {
    let stub = StubBackend::start().await;
    stub.respond_json(
        "POST",
        "/api/verification/generate-token",
        200,
        json!({ "token": "VRF-1234", "instructions": "Add VRF-1234 to your profile bio" }),
    );
    let app = test_app(&stub, None);

    let token = app.ctx.verification.generate_token().await.unwrap();

    assert_eq!(token.token, "VRF-1234");
    let req = &stub.requests_to("POST", "/api/verification/generate-token")[0];
    assert_eq!(req.json(), json!({}));
}

#[tokio::test]
async fn test_verify_profile() {
    let stub = StubBackend::start().await;
    stub.respond_json(
        "POST",
        "/api/verification/verify",
        200,
        json!({
            "verified": true,
            "message": "Verified",
            "characterName": "Bulwark",
            "itemLevel": "1620",
            "serverName": "Azure",
            "className": "Warlord"
        }),
    );
    let app = test_app(&stub, None);

    let result = app.ctx.verification.verify_profile("778899").await.unwrap();

    assert!(result.verified);
    assert_eq!(result.character_name, "Bulwark");
    assert_eq!(result.class_name, "Warlord");
    let req = &stub.requests_to("POST", "/api/verification/verify")[0];
    assert_eq!(req.json(), json!({ "memberNo": "778899" }));
}

#[tokio::test]
async fn test_auth_logout_clears_and_redirects_without_request() {
    let stub = StubBackend::start().await;
    let app = test_app(&stub, None);
    app.ctx.client.credentials().set("tok");

    guild_scheduler::api::AuthApi::new(app.ctx.client.clone()).logout();

    assert!(!app.ctx.client.credentials().is_present());
    assert_eq!(app.navigator.paths(), vec!["/login".to_string()]);
    assert!(stub.requests().is_empty());
}
