//! Country Catalog CLI
//!
//! One-shot subcommands over the catalog file, or the interactive menu when
//! no subcommand is given.

use std::io;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use country_catalog::catalog::{Catalog, Outcome};
use country_catalog::menu::Menu;
use country_catalog::render;
use country_catalog::validate::CountryInput;
use country_catalog::{CatalogError, Config, Country, RangeField, SortField};
use tracing_subscriber::{fmt, EnvFilter};

/// Country Catalog
#[derive(Parser, Debug)]
#[command(name = "country-catalog")]
#[command(about = "Manage a CSV catalog of countries")]
#[command(version)]
struct Args {
    /// Catalog file
    #[arg(short, long, default_value = "gestion.paises.csv")]
    file: String,

    /// Field delimiter
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the interactive menu
    Menu,

    /// List every country
    List,

    /// Add countries given as NAME,POPULATION,AREA,CONTINENT
    ///
    /// The first invalid entry abandons the remaining ones.
    Add {
        #[arg(required = true)]
        countries: Vec<String>,
    },

    /// Replace population and area of a country
    Update {
        name: String,
        population: String,
        area: String,
    },

    /// Search countries whose name contains TEXT
    Search { text: String },

    /// Filter countries
    #[command(subcommand)]
    Filter(FilterCommand),

    /// Sort countries by a column
    Sort {
        #[arg(short, long, value_enum, default_value = "name")]
        by: SortColumn,

        /// Descending order
        #[arg(long)]
        desc: bool,
    },

    /// Show statistics
    Stats,
}

#[derive(Subcommand, Debug)]
enum FilterCommand {
    /// Countries on a continent
    Continent { name: String },

    /// Countries with MIN <= population <= MAX
    Population { min: String, max: String },

    /// Countries with MIN <= area <= MAX
    Area { min: String, max: String },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortColumn {
    Name,
    Population,
    Area,
}

impl From<SortColumn> for SortField {
    fn from(column: SortColumn) -> Self {
        match column {
            SortColumn::Name => SortField::Name,
            SortColumn::Population => SortField::Population,
            SortColumn::Area => SortField::Area,
        }
    }
}

fn main() {
    // Logs go to stderr so they never interleave with tables on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("Country Catalog v{}", country_catalog::VERSION);
    tracing::debug!("Catalog file: {}", args.file);

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> country_catalog::Result<()> {
    let delimiter = u8::try_from(args.delimiter).map_err(|_| {
        CatalogError::Config(format!("delimiter '{}' is not a single byte", args.delimiter))
    })?;

    let config = Config::builder()
        .data_file(&args.file)
        .delimiter(delimiter)
        .build();
    let catalog = Catalog::open(config)?;

    match args.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let mut menu = Menu::new(&catalog, stdin.lock(), io::stdout());
            menu.run()
        }
        Commands::List => {
            print_countries(&catalog, catalog.list());
            Ok(())
        }
        Commands::Add { countries } => add(&catalog, &countries),
        Commands::Update {
            name,
            population,
            area,
        } => {
            let country = catalog.update(&name, &population, &area)?;
            println!(
                "Updated {}: population {}, area {} km²",
                country.name,
                render::group_thousands(country.population),
                render::group_thousands(country.area)
            );
            Ok(())
        }
        Commands::Search { text } => {
            print_countries(&catalog, catalog.search(&text));
            Ok(())
        }
        Commands::Filter(FilterCommand::Continent { name }) => {
            print_countries(&catalog, catalog.filter_by_continent(&name));
            Ok(())
        }
        Commands::Filter(FilterCommand::Population { min, max }) => {
            let found = catalog.filter_by_range(RangeField::Population, &min, &max)?;
            print_countries(&catalog, found);
            Ok(())
        }
        Commands::Filter(FilterCommand::Area { min, max }) => {
            let found = catalog.filter_by_range(RangeField::Area, &min, &max)?;
            print_countries(&catalog, found);
            Ok(())
        }
        Commands::Sort { by, desc } => {
            let sorted = catalog.sorted(by.into(), desc);
            if sorted.load_error.is_none() && sorted.value.is_empty() {
                println!("No countries registered to sort.");
                return Ok(());
            }
            print_countries(&catalog, sorted);
            Ok(())
        }
        Commands::Stats => {
            let stats = catalog.statistics();
            warn_load_error(&stats.load_error);
            match stats.value {
                Some(stats) => print!("{}", render::render_statistics(&stats)),
                None => println!("No countries registered to show statistics."),
            }
            Ok(())
        }
    }
}

fn add(catalog: &Catalog, entries: &[String]) -> country_catalog::Result<()> {
    let inputs = entries.iter().map(String::as_str).map(parse_entry);
    let report = catalog.insert_batch(inputs);

    warn_load_error(&report.load_error);
    for country in &report.inserted {
        println!("Country '{}' added successfully.", country.name);
    }
    for failure in &report.write_failures {
        eprintln!("Could not save country '{}': {}", failure.name, failure.error);
    }

    if let Some(abort) = report.aborted {
        return Err(CatalogError::Validation(abort.error));
    }

    // Exit non-zero when any row was lost; each one was already reported
    match report.write_failures.into_iter().next() {
        Some(failure) => Err(failure.error),
        None => Ok(()),
    }
}

/// `NAME,POPULATION,AREA,CONTINENT` → raw input; missing parts stay empty and
/// fail validation
fn parse_entry(entry: &str) -> CountryInput {
    let mut parts = entry.splitn(4, ',').map(str::to_string);
    CountryInput {
        name: parts.next().unwrap_or_default(),
        population: parts.next().unwrap_or_default(),
        area: parts.next().unwrap_or_default(),
        continent: parts.next().unwrap_or_default(),
    }
}

fn print_countries(catalog: &Catalog, outcome: Outcome<Vec<Country>>) {
    warn_load_error(&outcome.load_error);
    print!(
        "{}",
        render::render_country_table(&outcome.value, &catalog.config().fields)
    );
}

fn warn_load_error(error: &Option<CatalogError>) {
    if let Some(e) = error {
        eprintln!("Error reading the catalog: {}", e);
    }
}
