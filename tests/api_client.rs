use car_market::accounts::NewUserForm;
use car_market::api::{MarketplaceApi, MarketplaceClient};
use car_market::config::ClientConfig;
use car_market::filters::{FilterForm, NumericField, TextField};
use car_market::models::AccountType;
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer, token: Option<&str>) -> MarketplaceClient {
    let config = ClientConfig::new(server.base_url()).with_token(token.map(String::from));
    MarketplaceClient::new(config).unwrap()
}

#[tokio::test]
async fn search_sends_sparse_filters_with_bearer_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/listing/search_listing")
                .header("authorization", "Bearer secret")
                .json_body(json!({ "make": "Honda", "min_price": 5000, "is_sold": false }));
            then.status(200).json_body(json!({
                "listing_list": [{
                    "id": 1,
                    "make": "Honda",
                    "model": "Civic",
                    "year": 2019,
                    "mileage": 42000,
                    "transmission": "automatic",
                    "fuel_type": "petrol",
                    "price": 18500,
                    "image": null
                }]
            }));
        })
        .await;

    let mut form = FilterForm::new();
    form.set_text(TextField::Make, "  Honda  ");
    form.set_numeric(NumericField::MinPrice, "5,000");
    let query = form.submit().unwrap();

    let client = client_for(&server, Some("secret"));
    let listings = client.search_listings(&query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].title(), "Honda Civic (2019)");
    assert_eq!(listings[0].price, 18500.0);
}

#[tokio::test]
async fn requests_without_token_carry_no_authorization() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/users/search_user")
                .query_param("search", "ada")
                .header_missing("authorization");
            then.status(200).json_body(json!({
                "account_list": [{
                    "email": "ada@example.com",
                    "first_name": "Ada",
                    "last_name": "Lovelace",
                    "dob": "1990/02/28",
                    "user_profile": "seller"
                }]
            }));
        })
        .await;

    let client = client_for(&server, None);
    let users = client.search_users("ada").await.unwrap();

    mock.assert_async().await;
    assert_eq!(users[0].email, "ada@example.com");
    assert_eq!(users[0].user_profile.as_deref(), Some("seller"));
}

#[tokio::test]
async fn api_error_message_is_surfaced() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/users/view_user")
                .query_param("email", "ghost@example.com");
            then.status(404).json_body(json!({ "error": "User not found" }));
        })
        .await;

    let client = client_for(&server, Some("secret"));
    let err = client.view_user("ghost@example.com").await.unwrap_err();

    let message = format!("{:#}", err);
    assert!(message.contains("User not found"), "{}", message);
}

#[tokio::test]
async fn unsuccessful_delete_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/listing/delete_listing")
                .json_body(json!({ "id": 9 }));
            then.status(200).json_body(json!({ "success": false }));
        })
        .await;
    let ok = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/listing/delete_listing")
                .json_body(json!({ "id": 10 }));
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;

    let client = client_for(&server, Some("secret"));
    assert!(client.delete_listing(9).await.is_err());
    client.delete_listing(10).await.unwrap();
    ok.assert_async().await;
}

#[tokio::test]
async fn create_user_posts_validated_payload() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/users/create_user")
                .json_body(json!({
                    "name": "Ada Lovelace",
                    "dob": "1990/02/28",
                    "email": "ada@example.com",
                    "password": "correcthorse",
                    "user_profile": "usedCarAgent"
                }));
            then.status(201).json_body(json!({ "message": "created" }));
        })
        .await;

    let user = NewUserForm {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        dob: "1990/02/28".into(),
        email: "ada@example.com".into(),
        password: "correcthorse".into(),
        account_type: Some(AccountType::UsedCarAgent),
    }
    .validate()
    .unwrap();

    let client = client_for(&server, Some("secret"));
    client.create_user(&user).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn bulk_suspend_stops_at_first_failure() {
    let server = MockServer::start_async().await;
    let first = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/users/suspend/a");
            then.status(200).json_body(json!({}));
        })
        .await;
    let second = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/users/suspend/b");
            then.status(500);
        })
        .await;
    let third = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/users/suspend/c");
            then.status(200).json_body(json!({}));
        })
        .await;

    let client = client_for(&server, Some("secret"));
    let ids = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let err = client.suspend_users(&ids).await.unwrap_err();

    assert!(format!("{:#}", err).contains("1 of 3 suspended"));
    first.assert_calls_async(1).await;
    second.assert_calls_async(1).await;
    third.assert_calls_async(0).await;
}
