use actix_web::{
    App,
    http::{StatusCode, header},
    test, web,
};
use serde_json::json;

use cleanpress::domain::user::Role;
use cleanpress::middleware::RedirectUnauthorized;
use cleanpress::models::config::ServerConfig;
use cleanpress::repository::DieselRepository;
use cleanpress::routes::auth::login;
use cleanpress::routes::customers::{add_customer, list_customers};
use cleanpress::services::auth as auth_service;

mod common;

const SECRET: &str = "test-secret";

fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".into(),
        port: 0,
        database_url: String::new(),
        secret: SECRET.into(),
        uploads_dir: "uploads".into(),
    }
}

fn seed_user(repo: &DieselRepository, email: &str, role: Role) -> String {
    let user = auth_service::register(repo, "Staff", email, "password123", role).unwrap();
    auth_service::issue_token(&user, SECRET).unwrap()
}

#[actix_web::test]
async fn login_returns_token_and_profile() {
    let test_db = common::TestDb::new("test_login_returns_token_and_profile.db");
    let repo = DieselRepository::new(test_db.pool());
    auth_service::register(&repo, "Asha", "admin@example.com", "password123", Role::Admin)
        .unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config()))
            .service(login),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"email": "Admin@Example.com", "password": "password123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["role"], "ADMIN");
    assert!(body["user"].get("password_hash").is_none());
}

#[actix_web::test]
async fn login_rejects_wrong_password() {
    let test_db = common::TestDb::new("test_login_rejects_wrong_password.db");
    let repo = DieselRepository::new(test_db.pool());
    auth_service::register(&repo, "Asha", "admin@example.com", "password123", Role::Admin)
        .unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config()))
            .service(login),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"email": "admin@example.com", "password": "nope-nope"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn unauthenticated_request_is_redirected_to_login() {
    let test_db = common::TestDb::new("test_unauthenticated_request_redirect.db");
    let repo = DieselRepository::new(test_db.pool());

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config()))
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(list_customers),
            ),
    )
    .await;

    let req = test::TestRequest::get().uri("/customers").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
}

#[actix_web::test]
async fn moderator_is_redirected_from_admin_routes() {
    let test_db = common::TestDb::new("test_moderator_redirected_from_admin.db");
    let repo = DieselRepository::new(test_db.pool());
    let token = seed_user(&repo, "mod@example.com", Role::Moderator);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config()))
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(list_customers),
            ),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/customers")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
}

#[actix_web::test]
async fn admin_can_add_and_list_customers() {
    let test_db = common::TestDb::new("test_admin_can_add_and_list_customers.db");
    let repo = DieselRepository::new(test_db.pool());
    let token = seed_user(&repo, "admin@example.com", Role::Admin);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config()))
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(list_customers)
                    .service(add_customer),
            ),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/customers")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(json!({"name": "Asha", "phone": "0755000001"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/customers")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Asha");
}

#[actix_web::test]
async fn invalid_payload_is_unprocessable() {
    let test_db = common::TestDb::new("test_invalid_payload_is_unprocessable.db");
    let repo = DieselRepository::new(test_db.pool());
    let token = seed_user(&repo, "admin@example.com", Role::Admin);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config()))
            .service(web::scope("").wrap(RedirectUnauthorized).service(add_customer)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/customers")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(json!({"name": "", "phone": "0755000001"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
