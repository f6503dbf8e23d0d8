use std::io::Cursor;
use std::sync::Arc;

use stockroom_cli::{Console, Controller};
use stockroom_infra::document_store::{ORDERS, PRODUCTS, SUPPLIERS};
use stockroom_infra::{DocumentStore, InMemoryDocumentStore, InventoryService};

type Store = Arc<InMemoryDocumentStore>;

struct Session {
    store: Store,
    output: String,
}

/// Feed `lines` to a fresh controller (one answer per line) and capture stdout.
fn run_script(store: Store, lines: &[&str]) -> Session {
    colored::control::set_override(false);

    let mut script = lines.join("\n");
    script.push('\n');

    let service = InventoryService::load(store.clone()).unwrap();
    let console = Console::new(Cursor::new(script.into_bytes()), Vec::new());
    let mut controller = Controller::new(service, console);
    controller.run().unwrap();

    let (_, console) = controller.into_parts();
    Session {
        store,
        output: String::from_utf8(console.into_output()).unwrap(),
    }
}

fn fresh() -> Store {
    Arc::new(InMemoryDocumentStore::new())
}

const ADD_WIDGET: &[&str] = &[
    "1", "A1", "Widget", "Blue widget", "10", "2.5", "S1", "2024-01-15",
];

fn script(parts: &[&[&'static str]]) -> Vec<&'static str> {
    parts.concat()
}

#[test]
fn add_product_then_search_shows_identical_fields() {
    let lines = script(&[ADD_WIDGET, &["5", "A1", "12"]]);
    let session = run_script(fresh(), &lines);

    assert!(session.output.contains("Product added to inventory."));
    assert!(session.output.contains(
        "Product found: Product{SKU='A1', name='Widget', description='Blue widget', \
         quantity=10, price=2.50, supplierId='S1', dateReceived='2024-01-15'}"
    ));
    assert_eq!(session.store.count(PRODUCTS), 1);
}

#[test]
fn non_numeric_quantity_aborts_add_without_inserting() {
    let session = run_script(
        fresh(),
        &["1", "A1", "Widget", "Blue", "ten", "12"],
    );

    assert!(session.output.contains("Invalid input. Please enter a valid number."));
    assert!(!session.output.contains("Product added to inventory."));
    assert_eq!(session.store.count(PRODUCTS), 0);
}

#[test]
fn negative_price_is_a_validation_error() {
    let session = run_script(
        fresh(),
        &["1", "A1", "Widget", "Blue", "5", "-1", "S1", "2024-01-15", "12"],
    );

    assert!(session.output.contains("Error: Price cannot be negative."));
    assert_eq!(session.store.count(PRODUCTS), 0);
}

#[test]
fn bad_menu_input_redisplays_menu() {
    let session = run_script(fresh(), &["abc", "42", "12"]);

    assert!(session.output.contains("Invalid input. Please enter a number."));
    assert!(session.output.contains("Invalid option! Try again."));
    assert_eq!(
        session
            .output
            .matches("---- Inventory Management System ----")
            .count(),
        3
    );
}

#[test]
fn end_of_input_exits_cleanly() {
    let session = run_script(fresh(), &["2"]);
    assert!(session.output.contains("---- Inventory ----"));
}

#[test]
fn restock_order_increases_stock_and_is_stored() {
    let lines = script(&[ADD_WIDGET, &["9", "PO-1", "S1", "A1", "5", "DONE", "12"]]);
    let session = run_script(fresh(), &lines);

    assert!(session.output.contains("Order created and inventory updated."));
    let products = session.store.find_products().unwrap();
    assert_eq!(products[0].quantity(), 15);

    let orders = session.store.find_orders().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].items()[0].quantity, 5);
}

#[test]
fn oversell_rejects_line_and_drops_empty_order() {
    let lines = script(&[ADD_WIDGET, &["11", "SO-1", "Jane", "A1", "20", "done", "12"]]);
    let session = run_script(fresh(), &lines);

    assert!(session.output.contains("Insufficient stock. Available: 10"));
    assert!(session.output.contains("No items added to the sell order."));
    assert_eq!(session.store.count(ORDERS), 0);
    assert_eq!(session.store.find_products().unwrap()[0].quantity(), 10);
}

#[test]
fn bad_order_lines_are_skipped_and_loop_continues() {
    let lines = script(&[
        ADD_WIDGET,
        &[
            "11", "SO-1", "Jane", "ZZ", "A1", "x", "A1", "0", "A1", "4", "done", "12",
        ],
    ]);
    let session = run_script(fresh(), &lines);

    assert!(session.output.contains("Product not found. Try again."));
    assert!(session.output.contains("Invalid input. Please enter a valid number."));
    assert!(session.output.contains("Error: Quantity must be positive."));
    assert!(session.output.contains("Sell order created."));
    assert_eq!(session.store.find_products().unwrap()[0].quantity(), 6);
}

#[test]
fn update_price_only_keeps_quantity() {
    let lines = script(&[ADD_WIDGET, &["3", "A1", "", "4.25", "12"]]);
    let session = run_script(fresh(), &lines);

    assert!(session.output.contains("Current product details: Product{SKU='A1'"));
    assert!(session.output.contains("Product updated."));
    let product = &session.store.find_products().unwrap()[0];
    assert_eq!((product.quantity(), product.price()), (10, 4.25));
}

#[test]
fn update_and_remove_unknown_sku_report_not_found() {
    let session = run_script(fresh(), &["3", "nope", "4", "nope", "5", "nope", "12"]);
    assert_eq!(
        session
            .output
            .matches("Product not found in the inventory.")
            .count(),
        3
    );
}

#[test]
fn duplicate_sku_is_reported() {
    let lines = script(&[ADD_WIDGET, ADD_WIDGET, &["12"]]);
    let session = run_script(fresh(), &lines);

    assert!(session
        .output
        .contains("Error: Product with SKU A1 already exists in the database."));
    assert_eq!(session.store.count(PRODUCTS), 1);
}

#[test]
fn suppliers_are_listed() {
    let session = run_script(
        fresh(),
        &["7", "S1", "Acme", "555-0100", "8", "12"],
    );

    assert!(session.output.contains("Supplier added."));
    assert!(session.output.contains("S1              Acme                 555-0100"));
    assert_eq!(session.store.count(SUPPLIERS), 1);
}

#[test]
fn report_and_orders_survive_a_restart() {
    let store = fresh();
    let lines = script(&[ADD_WIDGET, &["9", "PO-1", "S1", "A1", "5", "done", "12"]]);
    run_script(store.clone(), &lines);

    let session = run_script(store, &["6", "10", "12"]);
    assert!(session.output.contains("Total number of items: 15"));
    assert!(session.output.contains("Total inventory value: Rs. 37.50"));
    assert!(session.output.contains("Order ID: PO-1"));
    assert!(session.output.contains("Supplier ID: S1"));
    assert!(session.output.contains("  Total Order Value: Rs. 12.50"));
}

#[test]
fn report_on_empty_store_shows_zero_value() {
    let session = run_script(fresh(), &["6", "12"]);

    assert!(session.output.contains("Total number of items: 0"));
    assert!(session.output.contains("Total inventory value: Rs. 0.00"));
    assert!(!session.output.contains("-0.00"));
}

#[test]
fn empty_restock_order_is_not_stored() {
    let session = run_script(fresh(), &["9", "PO-1", "S1", "done", "12"]);

    assert!(session.output.contains("No items added to the order."));
    assert!(!session.output.contains("Order created and inventory updated."));
    assert_eq!(session.store.count(ORDERS), 0);
}
