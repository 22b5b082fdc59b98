use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware as actix_middleware, web};

use crate::db::establish_connection_pool;
use crate::middleware::RedirectUnauthorized;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::analytics::{daily_revenue, financial_summary, monthly_revenue, top_customers};
use crate::routes::auth::{login, register};
use crate::routes::clothing_types::{
    add_clothing_type, delete_clothing_type, list_clothing_types, update_clothing_type,
};
use crate::routes::customers::{add_customer, list_customers};
use crate::routes::expenses::{
    add_expense, delete_expense, list_expenses, show_expense, update_expense,
};
use crate::routes::inventory::{
    add_inventory_item, delete_inventory_item, list_inventory, list_low_stock,
    show_inventory_item, update_inventory_item,
};
use crate::routes::invoices::{
    create_invoice, customer_invoices, execute_invoice, list_invoices, mark_invoice_paid,
    show_invoice,
};
use crate::routes::services::{add_service, delete_service, list_services, update_service};

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    let bind_address = (server_config.address.clone(), server_config.port);
    let uploads_dir = server_config.uploads_dir.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(login)
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(register)
                    .service(list_customers)
                    .service(add_customer)
                    .service(list_services)
                    .service(add_service)
                    .service(update_service)
                    .service(delete_service)
                    .service(list_clothing_types)
                    .service(add_clothing_type)
                    .service(update_clothing_type)
                    .service(delete_clothing_type)
                    .service(list_invoices)
                    .service(create_invoice)
                    .service(customer_invoices)
                    .service(show_invoice)
                    .service(mark_invoice_paid)
                    .service(execute_invoice)
                    .service(list_inventory)
                    .service(list_low_stock)
                    .service(show_inventory_item)
                    .service(add_inventory_item)
                    .service(update_inventory_item)
                    .service(delete_inventory_item)
                    .service(list_expenses)
                    .service(show_expense)
                    .service(add_expense)
                    .service(update_expense)
                    .service(delete_expense)
                    .service(daily_revenue)
                    .service(monthly_revenue)
                    .service(top_customers)
                    .service(financial_summary)
                    .service(Files::new("/uploads", uploads_dir.clone())),
            )
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
