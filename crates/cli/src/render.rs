//! Fixed-width tables and status lines.
//!
//! Money is printed as `Rs. ` followed by two decimals. Column widths match
//! the rule lengths so existing terminals line up.

use std::fmt::Write as _;

use colored::Colorize;

use stockroom_orders::Counterparty;
use stockroom_parties::Supplier;
use stockroom_products::Product;

use stockroom_infra::{InventoryReport, OrderSummary};

use crate::menu::MenuOption;

const INVENTORY_RULE: usize = 85;
const REPORT_RULE: usize = 100;
const SUPPLIER_RULE: usize = 55;
const ORDER_RULE: usize = 20;

/// Shown for order lines whose product no longer exists.
pub const REMOVED_PRODUCT: &str = "<removed>";

fn rule(width: usize) -> String {
    "-".repeat(width)
}

pub fn error(message: impl AsRef<str>) -> String {
    message.as_ref().red().to_string()
}

pub fn success(message: impl AsRef<str>) -> String {
    message.as_ref().green().to_string()
}

pub fn warning(message: impl AsRef<str>) -> String {
    message.as_ref().yellow().to_string()
}

pub fn prompt(message: impl AsRef<str>) -> String {
    message.as_ref().cyan().to_string()
}

pub fn menu() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "\n---- Inventory Management System ----".purple());
    for option in MenuOption::ALL {
        let _ = writeln!(out, "{}. {}", option.number(), option.label());
    }
    out
}

pub fn inventory(products: &[&Product]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "\n---- Inventory ----".blue());
    let _ = writeln!(
        out,
        "{:<10} {:<20} {:<10} {:<10} {:<15} {:<15}",
        "SKU", "Name", "Quantity", "Price", "Supplier ID", "Date Received"
    );
    let _ = writeln!(out, "{}", rule(INVENTORY_RULE));
    for p in products {
        let _ = writeln!(
            out,
            "{:<10} {:<20} {:<10} Rs. {:<9.2} {:<15} {:<15}",
            p.sku().as_str(),
            p.name(),
            p.quantity(),
            p.price(),
            p.supplier_id().as_str(),
            p.date_received()
        );
    }
    out
}

pub fn report(report: &InventoryReport<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "\n---- Inventory Report ----".yellow());
    let _ = writeln!(
        out,
        "{:<10} {:<20} {:<10} {:<10} {:<15} {:<15} {:<15}",
        "SKU", "Name", "Quantity", "Price", "Value", "Supplier ID", "Date Received"
    );
    let _ = writeln!(out, "{}", rule(REPORT_RULE));
    for p in &report.products {
        let _ = writeln!(
            out,
            "{:<10} {:<20} {:<10} Rs. {:<9.2} Rs. {:<14.2} {:<15} {:<15}",
            p.sku().as_str(),
            p.name(),
            p.quantity(),
            p.price(),
            p.stock_value(),
            p.supplier_id().as_str(),
            p.date_received()
        );
    }
    let _ = writeln!(out, "{}", rule(REPORT_RULE));
    let _ = writeln!(
        out,
        "{}",
        format!("Total number of items: {}", report.total_items).green()
    );
    let _ = writeln!(
        out,
        "{}",
        format!("Total inventory value: Rs. {:.2}", report.total_value).green()
    );
    out
}

pub fn suppliers<'a>(suppliers: impl IntoIterator<Item = &'a Supplier>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "\n---- Suppliers ----".blue());
    let _ = writeln!(out, "{:<15} {:<20} {:<20}", "ID", "Name", "Contact");
    let _ = writeln!(out, "{}", rule(SUPPLIER_RULE));
    for s in suppliers {
        let _ = writeln!(
            out,
            "{:<15} {:<20} {:<20}",
            s.id_typed().as_str(),
            s.name(),
            s.contact()
        );
    }
    out
}

pub fn orders(summaries: &[OrderSummary<'_>]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "\n---- Orders ----".blue());
    for summary in summaries {
        let order = summary.order;
        let _ = writeln!(out, "Order ID: {}", order.id_typed());
        match order.kind().counterparty() {
            Counterparty::Supplier(id) => {
                let _ = writeln!(out, "Supplier ID: {id}");
            }
            Counterparty::Customer(name) => {
                let _ = writeln!(out, "Customer: {name}");
            }
        }
        let _ = writeln!(out, "Order Date: {}", order.order_date());
        let _ = writeln!(out, "Items:");
        let _ = writeln!(
            out,
            "  {:<10} {:<20} {:<10} {:<10} {:<10}",
            "SKU", "Name", "Quantity", "Price", "Total"
        );
        let _ = writeln!(out, "  {}", rule(ORDER_RULE));
        for line in &summary.lines {
            let name = line.product.map(Product::name).unwrap_or(REMOVED_PRODUCT);
            let _ = writeln!(
                out,
                "  {:<10} {:<20} {:<10} Rs. {:<9.2} Rs. {:<9.2}",
                line.item.sku.as_str(),
                name,
                line.item.quantity,
                line.unit_price,
                line.line_total
            );
        }
        let _ = writeln!(out, "{}", rule(ORDER_RULE));
        let _ = writeln!(
            out,
            "{}",
            format!("  Total Order Value: Rs. {:.2}", summary.total).green()
        );
        let _ = writeln!(out);
    }
    out
}
