//! Interactive menu loop.
//!
//! ```text
//! menu -> read option -> dispatch -> (sub-prompts) -> menu ...
//!                     \-> exit (option 12 or end of input)
//! ```
//!
//! Bad input never leaves the loop: it prints a red line and the menu comes
//! back. Only a failure of the console itself ends [`Controller::run`] with an
//! error.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use stockroom_core::{OrderId, Sku, SupplierId};
use stockroom_infra::{DocumentStore, InventoryService, OrderOutcome, ServiceError, StoreError};
use stockroom_orders::OrderKind;
use stockroom_parties::Supplier;
use stockroom_products::{NewProduct, Product, ProductUpdate};

use crate::console::{self, Console, ConsoleError};
use crate::errors::{self, INVALID_NUMBER, ORDER_LINE_NOT_FOUND, PRODUCT_NOT_FOUND};
use crate::menu::{self, MenuChoice, MenuOption};
use crate::render;

const DONE: &str = "done";

enum Flow {
    Continue,
    Exit,
}

pub struct Controller<S, R, W> {
    service: InventoryService<S>,
    console: Console<R, W>,
}

impl<S, R, W> Controller<S, R, W>
where
    S: DocumentStore,
    R: BufRead,
    W: Write,
{
    pub fn new(service: InventoryService<S>, console: Console<R, W>) -> Self {
        Self { service, console }
    }

    pub fn into_parts(self) -> (InventoryService<S>, Console<R, W>) {
        (self.service, self.console)
    }

    /// Run until the user picks Exit or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(ConsoleError::Closed) => {
                    tracing::info!("input closed");
                    break;
                }
                Err(ConsoleError::Io(err)) => return Err(err),
            }
        }
        Ok(())
    }

    fn step(&mut self) -> Result<Flow, ConsoleError> {
        self.console.print(render::menu())?;
        let raw = self.console.prompt(render::prompt("Choose an option: "))?;

        match menu::parse_choice(&raw) {
            MenuChoice::Option(MenuOption::Exit) => return Ok(Flow::Exit),
            MenuChoice::Option(option) => {
                tracing::debug!(option = option.number(), "menu option selected");
                self.dispatch(option)?;
            }
            MenuChoice::OutOfRange => {
                self.console.say(render::error("Invalid option! Try again."))?;
            }
            MenuChoice::NotANumber => {
                self.console
                    .say(render::error("Invalid input. Please enter a number."))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn dispatch(&mut self, option: MenuOption) -> Result<(), ConsoleError> {
        match option {
            MenuOption::AddProduct => self.add_product(),
            MenuOption::ViewInventory => self.view_inventory(),
            MenuOption::UpdateProduct => self.update_product(),
            MenuOption::RemoveProduct => self.remove_product(),
            MenuOption::SearchProduct => self.search_product(),
            MenuOption::InventoryReport => self.inventory_report(),
            MenuOption::AddSupplier => self.add_supplier(),
            MenuOption::ViewSuppliers => self.view_suppliers(),
            MenuOption::CreateOrder => self.create_restock_order(),
            MenuOption::ViewOrders => self.view_orders(),
            MenuOption::CreateSellOrder => self.create_sell_order(),
            MenuOption::Exit => Ok(()),
        }
    }

    // --- helpers --------------------------------------------------------

    /// Prompt for a number; prints the invalid-number message and yields
    /// `None` when the answer does not parse.
    fn ask_number<T: FromStr>(&mut self, label: &str) -> Result<Option<T>, ConsoleError> {
        let raw = self.console.prompt(label)?;
        self.checked(console::parse_number(&raw))
    }

    fn checked<T>(
        &mut self,
        parsed: Result<T, console::InputError>,
    ) -> Result<Option<T>, ConsoleError> {
        match parsed {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                tracing::debug!(error = %err, "rejected numeric input");
                self.console.say(render::error(INVALID_NUMBER))?;
                Ok(None)
            }
        }
    }

    fn report_failure(&mut self, err: &ServiceError, record: &str) -> Result<(), ConsoleError> {
        match err {
            ServiceError::Store(StoreError::DuplicateKey { .. }) | ServiceError::Domain(_) => {
                tracing::debug!(error = %err, record, "operation rejected");
            }
            ServiceError::Store(_) => {
                tracing::error!(error = %err, record, "persistence failed");
            }
        }
        self.console
            .say(render::error(errors::service_error_message(err, record)))
    }

    // --- products -------------------------------------------------------

    fn add_product(&mut self) -> Result<(), ConsoleError> {
        let sku = self.console.prompt("Enter SKU: ")?;
        let name = self.console.prompt("Enter product name: ")?;
        let description = self.console.prompt("Enter product description: ")?;
        let Some(quantity) = self.ask_number::<i32>("Enter quantity: ")? else {
            return Ok(());
        };
        let Some(price) = self.ask_number::<f64>("Enter price: ")? else {
            return Ok(());
        };
        let supplier_id = self.console.prompt("Enter supplier ID: ")?;
        let date_received = self.console.prompt("Enter date received (YYYY-MM-DD): ")?;

        let input = NewProduct {
            sku: Sku::new(sku),
            name,
            description,
            quantity,
            price,
            supplier_id: SupplierId::new(supplier_id),
            date_received,
        };

        match self.service.add_product(input) {
            Ok(_) => self.console.say("Product added to inventory."),
            Err(err) => self.report_failure(&err, "product"),
        }
    }

    fn view_inventory(&mut self) -> Result<(), ConsoleError> {
        let products: Vec<&Product> = self.service.products().collect();
        self.console.print(render::inventory(&products))
    }

    fn update_product(&mut self) -> Result<(), ConsoleError> {
        let sku = self.console.prompt("Enter product SKU: ")?;
        let Some(details) = self
            .service
            .find_product(&sku)
            .map(|p| format!("Current product details: {p}"))
        else {
            return self.console.say(PRODUCT_NOT_FOUND);
        };
        self.console.say(details)?;

        let raw = self
            .console
            .prompt("Enter new quantity (or press enter to skip): ")?;
        let Some(quantity) = self.checked(console::parse_optional_number::<i32>(&raw))? else {
            return Ok(());
        };
        let raw = self
            .console
            .prompt("Enter new price (or press enter to skip): ")?;
        let Some(price) = self.checked(console::parse_optional_number::<f64>(&raw))? else {
            return Ok(());
        };

        match self
            .service
            .update_product(&sku, ProductUpdate { quantity, price })
        {
            Ok(_) => self.console.say("Product updated."),
            Err(err) => self.report_failure(&err, "product"),
        }
    }

    fn remove_product(&mut self) -> Result<(), ConsoleError> {
        let sku = self.console.prompt("Enter product SKU to remove: ")?;
        match self.service.remove_product(&sku) {
            Ok(_) => self.console.say("Product removed from inventory."),
            Err(err) if err.is_not_found() => self.console.say(PRODUCT_NOT_FOUND),
            Err(err) => self.report_failure(&err, "product"),
        }
    }

    fn search_product(&mut self) -> Result<(), ConsoleError> {
        let sku = self.console.prompt("Enter product SKU to search: ")?;
        let line = match self.service.find_product(&sku) {
            Some(product) => format!("Product found: {product}"),
            None => PRODUCT_NOT_FOUND.to_string(),
        };
        self.console.say(line)
    }

    fn inventory_report(&mut self) -> Result<(), ConsoleError> {
        let text = render::report(&self.service.inventory_report());
        self.console.print(text)
    }

    // --- suppliers ------------------------------------------------------

    fn add_supplier(&mut self) -> Result<(), ConsoleError> {
        let id = self.console.prompt("Enter supplier ID: ")?;
        let name = self.console.prompt("Enter supplier name: ")?;
        let contact = self.console.prompt("Enter supplier contact: ")?;

        match self
            .service
            .add_supplier(Supplier::new(SupplierId::new(id), name, contact))
        {
            Ok(()) => self.console.say("Supplier added."),
            Err(err) => self.report_failure(&err, "supplier"),
        }
    }

    fn view_suppliers(&mut self) -> Result<(), ConsoleError> {
        let text = render::suppliers(self.service.suppliers());
        self.console.print(text)
    }

    // --- orders ---------------------------------------------------------

    fn create_restock_order(&mut self) -> Result<(), ConsoleError> {
        let id = self.console.prompt("Enter order ID: ")?;
        let supplier = self.console.prompt("Enter supplier ID: ")?;
        self.enter_order(id, OrderKind::restock(supplier))
    }

    fn create_sell_order(&mut self) -> Result<(), ConsoleError> {
        let id = self.console.prompt("Enter sell order ID: ")?;
        let customer = self.console.prompt("Enter customer name: ")?;
        self.enter_order(id, OrderKind::sell(customer))
    }

    /// Line entry shared by both order kinds.
    ///
    /// Each accepted line moves stock right away. A bad line (unknown SKU,
    /// bad quantity, not enough stock) is reported and skipped; the loop
    /// keeps asking until `done`.
    fn enter_order(&mut self, order_id: String, kind: OrderKind) -> Result<(), ConsoleError> {
        let record = kind.label().to_lowercase();
        let stored_message = match &kind {
            OrderKind::Restock { .. } => "Order created and inventory updated.",
            OrderKind::Sell { .. } => "Sell order created.",
        };
        let mut draft = self.service.begin_order(OrderId::new(order_id), kind);

        loop {
            let sku = self
                .console
                .prompt("Enter product SKU (or 'done' to finish): ")?;
            if sku.trim().eq_ignore_ascii_case(DONE) {
                break;
            }
            if self.service.find_product(&sku).is_none() {
                self.console.say(render::error(ORDER_LINE_NOT_FOUND))?;
                continue;
            }
            let Some(quantity) = self.ask_number::<i32>("Enter quantity: ")? else {
                continue;
            };
            if let Err(err) = self.service.add_order_line(&mut draft, &sku, quantity) {
                self.report_failure(&err, &record)?;
            }
        }

        match self.service.finish_order(draft) {
            Ok(OrderOutcome::Stored(_)) => self.console.say(render::success(stored_message)),
            Ok(OrderOutcome::Discarded) => self
                .console
                .say(render::warning(format!("No items added to the {record}."))),
            Err(err) => self.report_failure(&err, &record),
        }
    }

    fn view_orders(&mut self) -> Result<(), ConsoleError> {
        let text = render::orders(&self.service.order_summaries());
        self.console.print(text)
    }
}
