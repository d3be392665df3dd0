//! Fixed menu text

pub const BANNER_RULE: &str = "===================================";
pub const BANNER_TITLE: &str = "      Country Data Management      ";

pub const MAIN_MENU: [&str; 8] = [
    "Menu options:",
    "1. Add countries",
    "2. Update population and area",
    "3. Search country by name",
    "4. Filter countries",
    "5. Sort countries",
    "6. Show statistics",
    "7. Exit",
];

pub const SELECT_OPTION: &str = "Select an option (1-7): ";
pub const INVALID_OPTION: &str = "Invalid option. Please select an option from 1 to 7.";
pub const INVALID_SUBOPTION: &str = "Invalid option.";
pub const NOT_IN_CATALOG: &str = "The country does not exist in the catalog.";
pub const LOAD_WARNING: &str = "Error reading the catalog";
pub const PRESS_ENTER: &str = "Press Enter to continue...";
pub const GOODBYE: &str = "Exiting. Thanks for using the country manager!";
