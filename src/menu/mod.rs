//! Menu Module
//!
//! Interactive, line-oriented front end over a [`Catalog`].
//!
//! ## Flow
//! ```text
//! main menu ──┬── 1 add countries (batch, field by field)
//!             ├── 2 update population and area
//!             ├── 3 search by name
//!             ├── 4 filter ── continent | population range | area range
//!             ├── 5 sort ──── column, direction
//!             ├── 6 statistics
//!             └── 7 exit
//! ```
//! Every screen ends with a "press Enter" pause. End of input behaves like
//! choosing exit once the current screen finishes.

mod prompts;

use std::io::{BufRead, Write};

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result, ValidationError};
use crate::model::{Country, RangeField, SortField};
use crate::query;
use crate::render;
use crate::stats::CatalogStats;
use crate::validate::{self, CountryInput};

use prompts::*;

/// Menu loop reading from `input` and writing to `output`
pub struct Menu<'a, R, W> {
    catalog: &'a Catalog,
    input: R,
    output: W,
    eof: bool,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(catalog: &'a Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
            eof: false,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_main_menu()?;
            let option = self.prompt(SELECT_OPTION)?;

            match option.as_str() {
                "1" => self.insert_countries()?,
                "2" => self.update_country()?,
                "3" => self.search_by_name()?,
                "4" => self.filter_countries()?,
                "5" => self.sort_countries()?,
                "6" => self.show_statistics()?,
                "7" => {
                    writeln!(self.output, "{}", GOODBYE)?;
                    return Ok(());
                }
                _ if self.eof => return Ok(()),
                _ => self.pause(INVALID_OPTION)?,
            }

            if self.eof {
                return Ok(());
            }
        }
    }

    // =========================================================================
    // Screens
    // =========================================================================

    fn insert_countries(&mut self) -> Result<()> {
        self.title("Add countries to the catalog")?;

        let count = self.prompt("Number of countries: ")?;
        let count = match validate::parse_count(&count) {
            Ok(n) => n,
            Err(e) => return self.pause_on(e),
        };

        let catalog = self.catalog;
        let mut session = catalog.begin_insert();
        if let Some(e) = session.load_error() {
            writeln!(self.output, "{}: {}", LOAD_WARNING, e)?;
        }

        for i in 1..=count {
            let name = self.prompt(&format!("Country name ({}/{}): ", i, count))?;
            let name = match session.check_name(&name) {
                Ok(name) => name,
                Err(e) => return self.pause_on(e),
            };

            let population = self.prompt("Population: ")?;
            if let Err(e) = validate::parse_positive(&population, ValidationError::InvalidPopulation) {
                return self.pause_on(e);
            }

            let area = self.prompt("Area (km²): ")?;
            if let Err(e) = validate::parse_positive(&area, ValidationError::InvalidArea) {
                return self.pause_on(e);
            }

            let continent = self.prompt("Continent: ")?;
            if let Err(e) = validate::parse_continent(&continent) {
                return self.pause_on(e);
            }

            let input = CountryInput::new(name, population, area, continent);
            match session.insert(&input) {
                Ok(country) => {
                    writeln!(self.output, "Country '{}' added successfully.", country.name)?
                }
                Err(e) => writeln!(self.output, "Could not save country '{}': {}", input.name, e)?,
            }
        }

        self.pause("")
    }

    fn update_country(&mut self) -> Result<()> {
        self.title("Update population and area of a country")?;

        let name = self.prompt("Country to update: ")?;
        let found = self.catalog.find(&name);
        self.report_load_error(&found.load_error)?;
        if found.value.is_none() {
            return self.pause(NOT_IN_CATALOG);
        }

        let population = self.prompt("Population: ")?;
        if let Err(e) = validate::parse_positive(&population, ValidationError::InvalidPopulation) {
            return self.pause_on(e);
        }

        let area = self.prompt("Area (km²): ")?;
        if let Err(e) = validate::parse_positive(&area, ValidationError::InvalidArea) {
            return self.pause_on(e);
        }

        match self.catalog.update(&name, &population, &area) {
            Ok(_) => self.pause("Population and area updated successfully!"),
            Err(e) => self.pause(&format!("Could not update population and area: {}", e)),
        }
    }

    fn search_by_name(&mut self) -> Result<()> {
        self.title("Search country by name")?;

        let text = self.prompt("Country to search: ")?;
        let found = self.catalog.search(&text);
        self.report_load_error(&found.load_error)?;

        if found.value.is_empty() {
            return self.pause(">>> The country is not in the catalog. <<<");
        }
        self.list(&found.value)
    }

    fn filter_countries(&mut self) -> Result<()> {
        self.title("Filter countries by continent, population or area")?;
        writeln!(self.output, "1. By continent")?;
        writeln!(self.output, "2. By population range")?;
        writeln!(self.output, "3. By area range")?;

        match self.prompt("Select an option (1-3): ")?.as_str() {
            "1" => {
                self.title("Filter countries by continent")?;
                let continent = self.prompt("Continent: ")?;
                let found = self.catalog.filter_by_continent(&continent);
                self.report_load_error(&found.load_error)?;
                self.list(&found.value)
            }
            "2" => self.filter_by_range(RangeField::Population, "population"),
            "3" => self.filter_by_range(RangeField::Area, "area"),
            _ => self.pause(INVALID_SUBOPTION),
        }
    }

    fn filter_by_range(&mut self, field: RangeField, label: &str) -> Result<()> {
        self.title(&format!("Filter countries by {} range", label))?;

        let low = self.prompt(&format!("Minimum {}: ", label))?;
        let high = self.prompt(&format!("Maximum {}: ", label))?;

        match self.catalog.filter_by_range(field, &low, &high) {
            Ok(found) => {
                self.report_load_error(&found.load_error)?;
                self.list(&found.value)
            }
            Err(CatalogError::Validation(e)) => self.pause_on(e),
            Err(e) => Err(e),
        }
    }

    fn sort_countries(&mut self) -> Result<()> {
        self.title("Sort countries")?;

        let countries = self.load()?;
        if countries.is_empty() {
            return self.pause("No countries registered to sort.");
        }

        writeln!(self.output, "Column to sort by:")?;
        writeln!(self.output, "1. Name")?;
        writeln!(self.output, "2. Population")?;
        writeln!(self.output, "3. Area")?;
        let field = match self.prompt("Option (1-3): ")?.as_str() {
            "1" => SortField::Name,
            "2" => SortField::Population,
            "3" => SortField::Area,
            _ => return self.pause("Invalid column option."),
        };

        writeln!(self.output)?;
        writeln!(self.output, "Order:")?;
        writeln!(self.output, "1. Ascending")?;
        writeln!(self.output, "2. Descending")?;
        let descending = match self.prompt("Option (1-2): ")?.as_str() {
            "1" => false,
            "2" => true,
            _ => return self.pause("Invalid order option."),
        };

        let sorted = query::sort_by(&countries, field, descending);
        self.list(&sorted)
    }

    fn show_statistics(&mut self) -> Result<()> {
        self.title("Country statistics")?;

        let countries = self.load()?;
        let Some(stats) = CatalogStats::compute(&countries) else {
            return self.pause("No countries registered to show statistics.");
        };

        writeln!(self.output)?;
        write!(self.output, "{}", render::render_statistics(&stats))?;
        self.pause("")
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn print_main_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", BANNER_RULE)?;
        writeln!(self.output, "{}", BANNER_TITLE)?;
        writeln!(self.output, "{}", BANNER_RULE)?;
        for line in MAIN_MENU {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    fn title(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "\n")?;
        writeln!(self.output, "{}", render::rule())?;
        writeln!(self.output, "{}", text)?;
        writeln!(self.output, "{}", render::rule())?;
        Ok(())
    }

    fn list(&mut self, countries: &[Country]) -> Result<()> {
        if !countries.is_empty() {
            writeln!(self.output, "\n")?;
        }
        let table = render::render_country_table(countries, &self.catalog.config().fields);
        write!(self.output, "{}", table)?;
        self.pause("")
    }

    fn load(&mut self) -> Result<Vec<Country>> {
        let report = self.catalog.load();
        self.report_load_error(&report.error)?;
        Ok(report.countries)
    }

    fn report_load_error(&mut self, error: &Option<CatalogError>) -> Result<()> {
        if let Some(e) = error {
            writeln!(self.output, "{}: {}", LOAD_WARNING, e)?;
        }
        Ok(())
    }

    /// Print `prompt`, read one line and return it trimmed
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.eof = true;
        }
        Ok(line.trim().to_string())
    }

    fn pause(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        self.prompt(PRESS_ENTER)?;
        Ok(())
    }

    fn pause_on(&mut self, error: ValidationError) -> Result<()> {
        self.pause(&capitalize_message(&error.to_string()))
    }
}

/// Validation messages start lower-case; screens print them as sentences
fn capitalize_message(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
