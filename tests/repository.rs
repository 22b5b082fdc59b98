use std::collections::HashMap;

use chrono::NaiveDate;

use cleanpress::domain::clothing_type::NewClothingType;
use cleanpress::domain::customer::NewCustomer;
use cleanpress::domain::expense::{NewExpense, UpdateExpense};
use cleanpress::domain::inventory::{NewInventoryItem, UpdateInventoryItem};
use cleanpress::domain::invoice::PaymentStatus;
use cleanpress::domain::service::{Consumable, NewService};
use cleanpress::domain::user::{NewUser, Role};
use cleanpress::repository::errors::RepositoryError;
use cleanpress::repository::{
    ClothingTypeReader, ClothingTypeWriter, CustomerReader, CustomerWriter, DieselRepository,
    ExpenseListQuery, ExpenseReader, ExpenseWriter, InventoryReader, InventoryWriter,
    InvoiceListQuery, InvoiceReader, InvoiceWriter, ServiceReader, ServiceWriter, UserReader,
    UserWriter,
};
use cleanpress::services::invoice::{DraftItem, InvoiceDraft, create_invoice};

mod common;

fn seed_customer(repo: &DieselRepository) -> i32 {
    repo.create_customer(&NewCustomer::new(
        "Asha".into(),
        "0755000001".into(),
        Some("Asha@Example.com".into()),
        None,
    ))
    .unwrap()
    .id
}

fn seed_service(repo: &DieselRepository, base_price: i64, consumables: Vec<Consumable>) -> i32 {
    repo.create_service(&NewService::new("Dry clean".into(), base_price, consumables))
        .unwrap()
        .id
}

fn seed_clothing_type(repo: &DieselRepository, pricing: HashMap<i32, Option<i64>>) -> i32 {
    repo.create_clothing_type(&NewClothingType::new("Suit".into(), pricing))
        .unwrap()
        .id
}

fn draft(customer_id: i32, clothing_type_id: i32, service_id: i32, quantity: f64) -> InvoiceDraft {
    InvoiceDraft {
        customer_id,
        items: vec![DraftItem {
            clothing_type_id,
            service_id,
            quantity,
        }],
        discount: 0,
        pickup_date: None,
    }
}

#[test]
fn test_customer_repository_crud() {
    let test_db = common::TestDb::new("test_customer_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_customer(&NewCustomer::new(
            "  Asha  ".into(),
            "0755000001".into(),
            Some("Asha@Example.com".into()),
            Some("".into()),
        ))
        .unwrap();
    assert_eq!(created.name, "Asha");
    assert_eq!(created.email.as_deref(), Some("asha@example.com"));
    assert_eq!(created.address, None);

    repo.create_customer(&NewCustomer::new(
        "Bakari".into(),
        "0755000002".into(),
        None,
        None,
    ))
    .unwrap();

    let customers = repo.list_customers().unwrap();
    assert_eq!(customers.len(), 2);

    let fetched = repo.get_customer_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched, created);
    assert!(repo.get_customer_by_id(9999).unwrap().is_none());
}

#[test]
fn test_service_repository_crud() {
    let test_db = common::TestDb::new("test_service_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let item_id = repo
        .create_inventory_item(&NewInventoryItem::new("Solvent".into(), 10.0, "l".into(), None))
        .unwrap()
        .id;

    let service = repo
        .create_service(&NewService::new(
            "Dry clean".into(),
            5000,
            vec![
                Consumable {
                    inventory_item_id: item_id,
                    quantity: 0.5,
                },
                // Non-positive quantities are dropped on construction.
                Consumable {
                    inventory_item_id: item_id,
                    quantity: 0.0,
                },
            ],
        ))
        .unwrap();
    assert_eq!(service.base_price, 5000);
    assert_eq!(service.consumables.len(), 1);

    let updated = repo
        .update_service(
            service.id,
            &NewService::new("Premium dry clean".into(), 7000, vec![]),
        )
        .unwrap();
    assert_eq!(updated.name, "Premium dry clean");
    assert_eq!(updated.base_price, 7000);
    assert!(updated.consumables.is_empty());

    repo.delete_service(service.id).unwrap();
    assert!(repo.get_service_by_id(service.id).unwrap().is_none());
}

#[test]
fn test_clothing_type_repository_crud() {
    let test_db = common::TestDb::new("test_clothing_type_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let service_id = seed_service(&repo, 5000, vec![]);
    let pricing = HashMap::from([(service_id, Some(8000))]);
    let clothing_type = repo
        .create_clothing_type(&NewClothingType::new("Suit".into(), pricing))
        .unwrap();
    assert_eq!(clothing_type.override_for(service_id), Some(8000));

    let updated = repo
        .update_clothing_type(
            clothing_type.id,
            &NewClothingType::new("Suit".into(), HashMap::from([(service_id, None)])),
        )
        .unwrap();
    assert_eq!(updated.override_for(service_id), None);

    repo.delete_clothing_type(clothing_type.id).unwrap();
    assert!(
        repo.get_clothing_type_by_id(clothing_type.id)
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_invoice_keeps_price_snapshot() {
    let test_db = common::TestDb::new("test_invoice_keeps_price_snapshot.db");
    let repo = DieselRepository::new(test_db.pool());

    let customer_id = seed_customer(&repo);
    let service_id = seed_service(&repo, 5000, vec![]);
    let clothing_type_id = seed_clothing_type(&repo, HashMap::new());

    let invoice = create_invoice(&repo, &draft(customer_id, clothing_type_id, service_id, 2.0))
        .unwrap();
    assert_eq!(invoice.items[0].unit_price, 5000);
    assert_eq!(invoice.subtotal, 10000);

    // Raising the base price later must not touch the stored invoice.
    repo.update_service(service_id, &NewService::new("Dry clean".into(), 9000, vec![]))
        .unwrap();
    let fetched = repo.get_invoice_by_id(invoice.id).unwrap().unwrap();
    assert_eq!(fetched.items[0].unit_price, 5000);
    assert_eq!(fetched.subtotal, 10000);
}

#[test]
fn test_invoice_zero_override_is_honoured() {
    let test_db = common::TestDb::new("test_invoice_zero_override_is_honoured.db");
    let repo = DieselRepository::new(test_db.pool());

    let customer_id = seed_customer(&repo);
    let service_id = seed_service(&repo, 5000, vec![]);
    let clothing_type_id = seed_clothing_type(&repo, HashMap::from([(service_id, Some(0))]));

    let invoice = create_invoice(&repo, &draft(customer_id, clothing_type_id, service_id, 3.0))
        .unwrap();
    assert_eq!(invoice.items[0].unit_price, 0);
    assert_eq!(invoice.subtotal, 0);
    assert_eq!(invoice.total, 0);
}

#[test]
fn test_mark_paid_is_one_way() {
    let test_db = common::TestDb::new("test_mark_paid_is_one_way.db");
    let repo = DieselRepository::new(test_db.pool());

    let customer_id = seed_customer(&repo);
    let service_id = seed_service(&repo, 5000, vec![]);
    let clothing_type_id = seed_clothing_type(&repo, HashMap::new());
    let invoice = create_invoice(&repo, &draft(customer_id, clothing_type_id, service_id, 1.0))
        .unwrap();
    assert_eq!(invoice.payment_status, PaymentStatus::Pending);

    let paid = repo.mark_invoice_paid(invoice.id).unwrap();
    assert_eq!(paid.payment_status, PaymentStatus::Paid);

    let again = repo.mark_invoice_paid(invoice.id);
    assert!(matches!(again, Err(RepositoryError::Conflict(_))));

    let missing = repo.mark_invoice_paid(9999);
    assert!(matches!(missing, Err(RepositoryError::NotFound)));
}

#[test]
fn test_execute_deducts_consumables_once() {
    let test_db = common::TestDb::new("test_execute_deducts_consumables_once.db");
    let repo = DieselRepository::new(test_db.pool());

    let customer_id = seed_customer(&repo);
    let item_id = repo
        .create_inventory_item(&NewInventoryItem::new("Solvent".into(), 10.0, "l".into(), None))
        .unwrap()
        .id;
    let service_id = seed_service(
        &repo,
        5000,
        vec![Consumable {
            inventory_item_id: item_id,
            quantity: 0.5,
        }],
    );
    let clothing_type_id = seed_clothing_type(&repo, HashMap::new());
    let invoice = create_invoice(&repo, &draft(customer_id, clothing_type_id, service_id, 4.0))
        .unwrap();

    let executed = repo.execute_invoice(invoice.id).unwrap();
    assert!(executed.executed);
    let item = repo.get_inventory_item_by_id(item_id).unwrap().unwrap();
    assert_eq!(item.quantity, 8.0);

    let again = repo.execute_invoice(invoice.id);
    assert!(matches!(again, Err(RepositoryError::Conflict(_))));
    let item = repo.get_inventory_item_by_id(item_id).unwrap().unwrap();
    assert_eq!(item.quantity, 8.0);
}

#[test]
fn test_execute_rolls_back_on_shortfall() {
    let test_db = common::TestDb::new("test_execute_rolls_back_on_shortfall.db");
    let repo = DieselRepository::new(test_db.pool());

    let customer_id = seed_customer(&repo);
    let item_id = repo
        .create_inventory_item(&NewInventoryItem::new("Solvent".into(), 1.0, "l".into(), None))
        .unwrap()
        .id;
    let service_id = seed_service(
        &repo,
        5000,
        vec![Consumable {
            inventory_item_id: item_id,
            quantity: 0.5,
        }],
    );
    let clothing_type_id = seed_clothing_type(&repo, HashMap::new());
    let invoice = create_invoice(&repo, &draft(customer_id, clothing_type_id, service_id, 4.0))
        .unwrap();

    let result = repo.execute_invoice(invoice.id);
    assert!(matches!(result, Err(RepositoryError::Conflict(_))));

    // Nothing was deducted and the invoice is still executable.
    let item = repo.get_inventory_item_by_id(item_id).unwrap().unwrap();
    assert_eq!(item.quantity, 1.0);
    let fetched = repo.get_invoice_by_id(invoice.id).unwrap().unwrap();
    assert!(!fetched.executed);
}

#[test]
fn test_invoice_listing_filters_and_pages() {
    let test_db = common::TestDb::new("test_invoice_listing_filters_and_pages.db");
    let repo = DieselRepository::new(test_db.pool());

    let customer_a = seed_customer(&repo);
    let customer_b = repo
        .create_customer(&NewCustomer::new(
            "Bakari".into(),
            "0755000002".into(),
            None,
            None,
        ))
        .unwrap()
        .id;
    let service_id = seed_service(&repo, 5000, vec![]);
    let clothing_type_id = seed_clothing_type(&repo, HashMap::new());

    for customer_id in [customer_a, customer_a, customer_b] {
        create_invoice(&repo, &draft(customer_id, clothing_type_id, service_id, 1.0)).unwrap();
    }
    let paid = create_invoice(&repo, &draft(customer_b, clothing_type_id, service_id, 1.0))
        .unwrap();
    repo.mark_invoice_paid(paid.id).unwrap();

    let (total, invoices) = repo.list_invoices(InvoiceListQuery::new()).unwrap();
    assert_eq!(total, 4);
    assert_eq!(invoices.len(), 4);

    let (total, invoices) = repo
        .list_invoices(InvoiceListQuery::new().customer(customer_a))
        .unwrap();
    assert_eq!(total, 2);
    assert!(invoices.iter().all(|i| i.customer_id == customer_a));

    let (total, invoices) = repo
        .list_invoices(InvoiceListQuery::new().payment_status(PaymentStatus::Paid))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(invoices[0].id, paid.id);

    let (total, invoices) = repo
        .list_invoices(InvoiceListQuery::new().paginate(2, 3))
        .unwrap();
    assert_eq!(total, 4);
    assert_eq!(invoices.len(), 1);
}

#[test]
fn test_service_delete_conflicts_when_invoiced() {
    let test_db = common::TestDb::new("test_service_delete_conflicts_when_invoiced.db");
    let repo = DieselRepository::new(test_db.pool());

    let customer_id = seed_customer(&repo);
    let service_id = seed_service(&repo, 5000, vec![]);
    let clothing_type_id = seed_clothing_type(&repo, HashMap::from([(service_id, Some(8000))]));
    create_invoice(&repo, &draft(customer_id, clothing_type_id, service_id, 1.0)).unwrap();

    let result = repo.delete_service(service_id);
    assert!(matches!(result, Err(RepositoryError::Conflict(_))));
    assert!(repo.get_service_by_id(service_id).unwrap().is_some());

    let result = repo.delete_clothing_type(clothing_type_id);
    assert!(matches!(result, Err(RepositoryError::Conflict(_))));
}

#[test]
fn test_low_stock_listing() {
    let test_db = common::TestDb::new("test_low_stock_listing.db");
    let repo = DieselRepository::new(test_db.pool());

    let low = repo
        .create_inventory_item(&NewInventoryItem::new(
            "Solvent".into(),
            2.0,
            "l".into(),
            Some(5.0),
        ))
        .unwrap();
    repo.create_inventory_item(&NewInventoryItem::new(
        "Detergent".into(),
        9.0,
        "l".into(),
        Some(5.0),
    ))
    .unwrap();
    // No threshold means never low.
    repo.create_inventory_item(&NewInventoryItem::new(
        "Hangers".into(),
        0.0,
        "pcs".into(),
        None,
    ))
    .unwrap();
    let inactive = repo
        .create_inventory_item(&NewInventoryItem::new(
            "Starch".into(),
            0.0,
            "kg".into(),
            Some(5.0),
        ))
        .unwrap();
    repo.update_inventory_item(
        inactive.id,
        &UpdateInventoryItem {
            name: inactive.name.clone(),
            quantity: inactive.quantity,
            unit: inactive.unit.clone(),
            reorder_level: inactive.reorder_level,
            active: false,
        },
    )
    .unwrap();

    let low_stock = repo.list_low_stock_items().unwrap();
    assert_eq!(low_stock.len(), 1);
    assert_eq!(low_stock[0].id, low.id);
}

#[test]
fn test_expense_repository_crud_and_filters() {
    let test_db = common::TestDb::new("test_expense_repository_crud_and_filters.db");
    let repo = DieselRepository::new(test_db.pool());

    let date = |d: u32| NaiveDate::from_ymd_opt(2026, 8, d).unwrap();
    for (day, receipt) in [(1, Some("receipts/a.jpg".to_string())), (15, None), (28, None)] {
        repo.create_expense(&NewExpense {
            category: "Utilities".into(),
            amount: 20000,
            description: "Electricity".into(),
            date: date(day),
            receipt_path: receipt,
        })
        .unwrap();
    }

    let all = repo.list_expenses(ExpenseListQuery::new()).unwrap();
    assert_eq!(all.len(), 3);

    let filtered = repo
        .list_expenses(ExpenseListQuery::new().from(date(10)).to(date(20)))
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].date, date(15));

    let with_receipt = all.iter().find(|e| e.receipt_path.is_some()).unwrap();

    // An update without a new receipt keeps the stored one.
    let updated = repo
        .update_expense(
            with_receipt.id,
            &UpdateExpense {
                category: "Utilities".into(),
                amount: 25000,
                description: "Electricity and water".into(),
                date: with_receipt.date,
                receipt_path: None,
            },
        )
        .unwrap();
    assert_eq!(updated.amount, 25000);
    assert_eq!(updated.receipt_path.as_deref(), Some("receipts/a.jpg"));

    let replaced = repo
        .update_expense(
            with_receipt.id,
            &UpdateExpense {
                category: "Utilities".into(),
                amount: 25000,
                description: "Electricity and water".into(),
                date: with_receipt.date,
                receipt_path: Some("receipts/b.jpg".into()),
            },
        )
        .unwrap();
    assert_eq!(replaced.receipt_path.as_deref(), Some("receipts/b.jpg"));

    repo.delete_expense(with_receipt.id).unwrap();
    assert!(repo.get_expense_by_id(with_receipt.id).unwrap().is_none());
}

#[test]
fn test_user_repository() {
    let test_db = common::TestDb::new("test_user_repository.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_user(&NewUser::new(
            "Neema".into(),
            "Neema@Example.com".into(),
            "hash".into(),
            Role::Moderator,
        ))
        .unwrap();
    assert_eq!(created.email, "neema@example.com");
    assert_eq!(created.role, Role::Moderator);

    let (user, password_hash) = repo
        .get_user_by_email("neema@example.com")
        .unwrap()
        .unwrap();
    assert_eq!(user, created);
    assert_eq!(password_hash, "hash");

    assert!(repo.get_user_by_email("nobody@example.com").unwrap().is_none());
}
