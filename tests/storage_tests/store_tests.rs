//! Tests for CountryStore
//!
//! These tests verify:
//! - Creating the file with only a header
//! - Loading rows in file order, by header name
//! - Fail-soft loads on malformed content
//! - Append and full rewrite, including idempotent rewrites
//! - Write failures surfacing as errors

use std::fs;
use std::path::PathBuf;

use country_catalog::config::{Config, FieldNames};
use country_catalog::model::Country;
use country_catalog::storage::CountryStore;
use country_catalog::CatalogError;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

const HEADER: &str = "NOMBRE,POBLACION,SUPERFICIE,CONTINENTE\r\n";

fn setup_temp_store() -> (TempDir, CountryStore) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_file(temp_dir.path().join("paises.csv"))
        .build();
    let store = CountryStore::open(config).unwrap();
    (temp_dir, store)
}

fn store_with_content(content: &str) -> (TempDir, CountryStore) {
    let (temp, store) = setup_temp_store();
    fs::write(store.path(), content).unwrap();
    (temp, store)
}

fn sample() -> Vec<Country> {
    vec![
        Country::new("Argentina", 45_000_000, 2_780_400, "America"),
        Country::new("Spain", 48_000_000, 505_990, "Europe"),
        Country::new("Kenya", 54_000_000, 580_367, "Africa"),
    ]
}

// =============================================================================
// Creation Tests
// =============================================================================

#[test]
fn test_ensure_exists_writes_only_header() {
    let (_temp, store) = setup_temp_store();

    assert!(!store.path().exists());
    store.ensure_exists().unwrap();

    assert_eq!(fs::read_to_string(store.path()).unwrap(), HEADER);
}

#[test]
fn test_ensure_exists_keeps_existing_content() {
    let content = format!("{}Peru,33000000,1285216,America\r\n", HEADER);
    let (_temp, store) = store_with_content(&content);

    store.ensure_exists().unwrap();

    assert_eq!(fs::read_to_string(store.path()).unwrap(), content);
}

#[test]
fn test_ensure_exists_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path: PathBuf = temp_dir.path().join("nested").join("dir").join("paises.csv");
    let store = CountryStore::open(Config::builder().data_file(&path).build()).unwrap();

    store.ensure_exists().unwrap();

    assert!(path.exists());
}

#[test]
fn test_load_missing_file_creates_it_and_is_empty() {
    let (_temp, store) = setup_temp_store();

    let report = store.load_all();

    assert!(report.is_ok());
    assert!(report.countries.is_empty());
    assert!(store.path().exists());
}

#[test]
fn test_open_rejects_invalid_config() {
    let fields = FieldNames {
        area: "NOMBRE".to_string(),
        ..FieldNames::default()
    };
    let config = Config::builder().data_file("x.csv").fields(fields).build();

    let result = CountryStore::open(config);

    assert!(matches!(result, Err(CatalogError::Config(_))));
}

// =============================================================================
// Load Tests
// =============================================================================

#[test]
fn test_header_only_loads_empty_without_error() {
    let (_temp, store) = store_with_content(HEADER);

    let report = store.load_all();

    assert!(report.is_ok());
    assert!(report.countries.is_empty());
}

#[test]
fn test_zero_byte_file_loads_empty_without_error() {
    let (_temp, store) = store_with_content("");

    let report = store.load_all();

    assert!(report.is_ok());
    assert!(report.countries.is_empty());
}

#[test]
fn test_load_preserves_file_order_and_text() {
    let content = format!(
        "{}Peru,33000000,1285216,America\r\nargentina,45000000,2780400,america\r\n",
        HEADER
    );
    let (_temp, store) = store_with_content(&content);

    let countries = store.try_load_all().unwrap();

    assert_eq!(
        countries,
        vec![
            Country::new("Peru", 33_000_000, 1_285_216, "America"),
            Country::new("argentina", 45_000_000, 2_780_400, "america"),
        ]
    );
}

#[test]
fn test_load_finds_columns_by_header_name() {
    let content = "CONTINENTE,SUPERFICIE,EXTRA,NOMBRE,POBLACION\nAsia,377975,x,Japan,125000000\n";
    let (_temp, store) = store_with_content(content);

    let countries = store.try_load_all().unwrap();

    assert_eq!(countries, vec![Country::new("Japan", 125_000_000, 377_975, "Asia")]);
}

#[test]
fn test_load_accepts_lf_and_padded_numbers() {
    let content = "NOMBRE,POBLACION,SUPERFICIE,CONTINENTE\nChile, 19000000 ,756102,America\n";
    let (_temp, store) = store_with_content(content);

    let countries = store.try_load_all().unwrap();

    assert_eq!(countries[0].population, 19_000_000);
}

#[test]
fn test_load_quoted_name_with_delimiter() {
    let content = format!("{}\"Congo, Republic of the\",6000000,342000,Africa\r\n", HEADER);
    let (_temp, store) = store_with_content(&content);

    let countries = store.try_load_all().unwrap();

    assert_eq!(countries[0].name, "Congo, Republic of the");
}

// =============================================================================
// Fail-soft Tests
// =============================================================================

#[test]
fn test_non_integer_population_degrades_to_empty() {
    let content = format!(
        "{}Peru,33000000,1285216,America\r\nChile,many,756102,America\r\n",
        HEADER
    );
    let (_temp, store) = store_with_content(&content);

    let report = store.load_all();

    // Never a partial collection
    assert!(report.countries.is_empty());
    assert!(matches!(report.error, Some(CatalogError::Parse(_))));
}

#[test]
fn test_negative_area_is_a_parse_failure() {
    let content = format!("{}Peru,33000000,-1,America\r\n", HEADER);
    let (_temp, store) = store_with_content(&content);

    assert!(matches!(store.try_load_all(), Err(CatalogError::Parse(_))));
    assert!(store.load_all().countries.is_empty());
}

#[test]
fn test_missing_column_degrades_to_empty() {
    let content = "NOMBRE,POBLACION,CONTINENTE\nPeru,33000000,America\n";
    let (_temp, store) = store_with_content(content);

    let report = store.load_all();

    assert!(report.countries.is_empty());
    let error = report.error.unwrap();
    assert!(error.is_storage());
    assert!(error.to_string().contains("SUPERFICIE"));
}

#[test]
fn test_short_row_degrades_to_empty() {
    let content = format!("{}Peru,33000000\r\n", HEADER);
    let (_temp, store) = store_with_content(&content);

    let report = store.load_all();

    assert!(report.countries.is_empty());
    assert!(matches!(report.error, Some(CatalogError::Csv(_))));
}

#[test]
fn test_unreadable_path_degrades_to_empty() {
    let temp_dir = TempDir::new().unwrap();
    // A directory where the file should be
    let config = Config::builder().data_file(temp_dir.path()).build();
    let store = CountryStore::open(config).unwrap();

    let report = store.load_all();

    assert!(report.countries.is_empty());
    assert!(report.error.is_some());
}

// =============================================================================
// Write Tests
// =============================================================================

#[test]
fn test_append_one_keeps_prior_rows() {
    let (_temp, store) = setup_temp_store();
    let countries = sample();

    for country in &countries {
        store.append_one(country).unwrap();
    }

    assert_eq!(store.try_load_all().unwrap(), countries);
    let content = fs::read_to_string(store.path()).unwrap();
    assert!(content.starts_with(HEADER));
    assert_eq!(content.matches("NOMBRE").count(), 1);
}

#[test]
fn test_append_to_existing_crlf_file_keeps_line_endings() {
    let content = format!("{}Peru,33000000,1285216,America\r\n", HEADER);
    let (_temp, store) = store_with_content(&content);

    store
        .append_one(&Country::new("Chile", 19_000_000, 756_102, "America"))
        .unwrap();

    let written = fs::read_to_string(store.path()).unwrap();
    assert_eq!(
        written,
        format!("{}Chile,19000000,756102,America\r\n", content)
    );
    assert_eq!(written.matches('\n').count(), written.matches("\r\n").count());
}

#[test]
fn test_save_all_replaces_content() {
    let (_temp, store) = setup_temp_store();
    store.save_all(&sample()).unwrap();

    let replacement = vec![Country::new("Peru", 33_000_000, 1_285_216, "America")];
    store.save_all(&replacement).unwrap();

    assert_eq!(store.try_load_all().unwrap(), replacement);
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        format!("{}Peru,33000000,1285216,America\r\n", HEADER)
    );
}

#[test]
fn test_save_all_empty_leaves_header() {
    let (_temp, store) = setup_temp_store();
    store.save_all(&sample()).unwrap();

    store.save_all(&[]).unwrap();

    assert_eq!(fs::read_to_string(store.path()).unwrap(), HEADER);
}

#[test]
fn test_rewrite_is_idempotent() {
    let content = format!(
        "{}\"Congo, Republic of the\",6000000,342000,Africa\r\nPeru,33000000,1285216,America\r\n",
        HEADER
    );
    let (_temp, store) = store_with_content(&content);

    store.save_all(&store.load_all().into_countries()).unwrap();
    let first = fs::read(store.path()).unwrap();

    store.save_all(&store.load_all().into_countries()).unwrap();
    let second = fs::read(store.path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, content.as_bytes());
}

#[test]
fn test_custom_delimiter_and_field_names() {
    let temp_dir = TempDir::new().unwrap();
    let fields = FieldNames {
        name: "name".to_string(),
        population: "population".to_string(),
        area: "area".to_string(),
        continent: "continent".to_string(),
    };
    let config = Config::builder()
        .data_file(temp_dir.path().join("countries.tsv"))
        .delimiter(b'\t')
        .fields(fields)
        .build();
    let store = CountryStore::open(config).unwrap();

    store.save_all(&sample()[..1]).unwrap();

    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "name\tpopulation\tarea\tcontinent\r\nArgentina\t45000000\t2780400\tAmerica\r\n"
    );
    assert_eq!(store.try_load_all().unwrap(), sample()[..1].to_vec());
}

#[test]
fn test_write_into_directory_path_fails_hard() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder().data_file(temp_dir.path()).build();
    let store = CountryStore::open(config).unwrap();

    let country = Country::new("Peru", 1, 1, "America");

    assert!(store.append_one(&country).is_err());
    assert!(store.save_all(&[country]).is_err());
}
