//! Main menu options.

/// Numbered entries of the main menu. Numbers are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    AddProduct,
    ViewInventory,
    UpdateProduct,
    RemoveProduct,
    SearchProduct,
    InventoryReport,
    AddSupplier,
    ViewSuppliers,
    CreateOrder,
    ViewOrders,
    CreateSellOrder,
    Exit,
}

/// What the user typed at the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Option(MenuOption),
    /// A number with no menu entry.
    OutOfRange,
    NotANumber,
}

impl MenuOption {
    pub const ALL: [MenuOption; 12] = [
        Self::AddProduct,
        Self::ViewInventory,
        Self::UpdateProduct,
        Self::RemoveProduct,
        Self::SearchProduct,
        Self::InventoryReport,
        Self::AddSupplier,
        Self::ViewSuppliers,
        Self::CreateOrder,
        Self::ViewOrders,
        Self::CreateSellOrder,
        Self::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            Self::AddProduct => 1,
            Self::ViewInventory => 2,
            Self::UpdateProduct => 3,
            Self::RemoveProduct => 4,
            Self::SearchProduct => 5,
            Self::InventoryReport => 6,
            Self::AddSupplier => 7,
            Self::ViewSuppliers => 8,
            Self::CreateOrder => 9,
            Self::ViewOrders => 10,
            Self::CreateSellOrder => 11,
            Self::Exit => 12,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AddProduct => "Add Product",
            Self::ViewInventory => "View Inventory",
            Self::UpdateProduct => "Update Product",
            Self::RemoveProduct => "Remove Product",
            Self::SearchProduct => "Search Product",
            Self::InventoryReport => "Generate Inventory Report",
            Self::AddSupplier => "Add Supplier",
            Self::ViewSuppliers => "View Suppliers",
            Self::CreateOrder => "Create Order",
            Self::ViewOrders => "View Orders",
            Self::CreateSellOrder => "Create Sell Order",
            Self::Exit => "Exit",
        }
    }

    pub fn from_number(number: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|o| i64::from(o.number()) == number)
    }
}

/// Interpret one menu line. Surrounding whitespace is ignored.
pub fn parse_choice(raw: &str) -> MenuChoice {
    match raw.trim().parse::<i64>() {
        Ok(number) => MenuOption::from_number(number)
            .map(MenuChoice::Option)
            .unwrap_or(MenuChoice::OutOfRange),
        Err(_) => MenuChoice::NotANumber,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_run_one_to_twelve_in_order() {
        let numbers: Vec<u8> = MenuOption::ALL.iter().map(|o| o.number()).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<u8>>());
    }

    #[test]
    fn parses_valid_out_of_range_and_garbage() {
        assert_eq!(parse_choice(" 9 "), MenuChoice::Option(MenuOption::CreateOrder));
        assert_eq!(parse_choice("12"), MenuChoice::Option(MenuOption::Exit));
        assert_eq!(parse_choice("0"), MenuChoice::OutOfRange);
        assert_eq!(parse_choice("13"), MenuChoice::OutOfRange);
        assert_eq!(parse_choice("-1"), MenuChoice::OutOfRange);
        assert_eq!(parse_choice("abc"), MenuChoice::NotANumber);
        assert_eq!(parse_choice(""), MenuChoice::NotANumber);
    }
}
