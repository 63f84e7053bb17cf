//! Command-line operations. Each returns the text to print on success.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use prettytable::{Cell, Row, Table as PrettyTable};
use serde_json::Value;

use crate::error::DataError;
use crate::files::{read_structured, read_table, write_structured, write_table};
use crate::models::{Product, Record, User};
use crate::processing::Operation;
use crate::tabular::{to_objects, to_table, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Csv,
}

impl Format {
    /// `.json` (any case) is JSON; every other extension is read as CSV.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Csv,
        }
    }
}

pub fn calculate(numbers: &[f64], operation: &str) -> Result<String> {
    if numbers.is_empty() {
        bail!("No numbers provided.");
    }

    let operation: Operation = operation.parse()?;
    let result = operation.apply(numbers)?;
    tracing::debug!(%operation, count = numbers.len(), result, "calculated");

    let label = match operation {
        Operation::Sum => "Sum",
        Operation::Mean => "Mean",
        Operation::Max => "Max",
        Operation::Min => "Min",
    };
    Ok(format!("{label}: {result:?}"))
}

pub fn convert(input: &Path, output: &Path, format: Format, delimiter: u8) -> Result<String> {
    let input_format = Format::detect(input);
    tracing::debug!(?input_format, ?format, "converting {}", input.display());

    match (input_format, format) {
        (Format::Json, Format::Csv) => {
            let data = read_structured(input)?;
            let table = match to_table(&data) {
                Ok(table) => table,
                Err(DataError::UnsupportedShape(reason)) => {
                    tracing::debug!(%reason, "rejected JSON shape");
                    bail!("JSON data structure not supported for CSV conversion.");
                }
                Err(e) => return Err(e.into()),
            };
            write_table(&table.into_rows(), output, delimiter)?;
        }
        (Format::Json, Format::Json) => {
            let data = read_structured(input)?;
            write_structured(&data, output)?;
        }
        (Format::Csv, Format::Json) => {
            let table = Table::from_rows(read_table(input, delimiter)?);
            let objects = serde_json::to_value(to_objects(&table))
                .context("Failed to build JSON from CSV rows")?;
            write_structured(&objects, output)?;
        }
        (Format::Csv, Format::Csv) => {
            let rows = read_table(input, delimiter)?;
            write_table(&rows, output, delimiter)?;
        }
    }

    Ok(format!("Converted {} to {}", input.display(), output.display()))
}

pub fn create_user(
    username: &str,
    email: &str,
    first_name: Option<String>,
    last_name: Option<String>,
) -> Result<String> {
    let user = User::new(username, email, first_name, last_name);
    user.validate()?;

    let json = serde_json::to_string_pretty(&user).context("Failed to serialize user")?;
    Ok(format!("User created: {json}"))
}

pub fn create_product(
    name: &str,
    price: f64,
    description: Option<String>,
    category: Option<String>,
    discount: Option<f64>,
) -> Result<String> {
    let product = Product::new(name, price, description, category);
    product.validate()?;

    let mut result = serde_json::to_value(&product).context("Failed to serialize product")?;
    if let Some(percentage) = discount {
        let discounted_price = product.apply_discount(percentage)?;
        if let Value::Object(fields) = &mut result {
            fields.insert("discounted_price".to_string(), Value::from(discounted_price));
        }
    }

    let json = serde_json::to_string_pretty(&result).context("Failed to serialize product")?;
    Ok(format!("Product created: {json}"))
}

pub fn clean(
    input: &Path,
    output: &Path,
    remove_incomplete: bool,
    remove_duplicates: bool,
    delimiter: u8,
) -> Result<String> {
    let table = Table::from_rows(read_table(input, delimiter)?);
    let before = table.rows.len();

    let cleaned = table.clean(remove_incomplete, remove_duplicates);
    let after = cleaned.rows.len();
    write_table(&cleaned.into_rows(), output, delimiter)?;

    Ok(format!(
        "Cleaned {} to {} ({after} of {before} rows kept)",
        input.display(),
        output.display()
    ))
}

pub fn preview(input: &Path, delimiter: u8) -> Result<String> {
    let table = match Format::detect(input) {
        Format::Json => to_table(&read_structured(input)?)?,
        Format::Csv => Table::from_rows(read_table(input, delimiter)?),
    };

    if table.rows.is_empty() {
        return Ok("No rows found.".to_string());
    }

    let mut pretty = PrettyTable::new();
    pretty.set_titles(Row::new(table.header.iter().map(|h| Cell::new(h)).collect()));
    for row in &table.rows {
        pretty.add_row(Row::new(row.iter().map(|c| Cell::new(c)).collect()));
    }

    Ok(format!("{pretty}\n{} row(s)", table.rows.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(Format::detect(Path::new("data.json")), Format::Json);
        assert_eq!(Format::detect(Path::new("DATA.JSON")), Format::Json);
        assert_eq!(Format::detect(Path::new("data.csv")), Format::Csv);
        assert_eq!(Format::detect(Path::new("data.txt")), Format::Csv);
        assert_eq!(Format::detect(Path::new("data")), Format::Csv);
    }

    #[test]
    fn test_calculate() {
        let numbers = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(calculate(&numbers, "sum").unwrap(), "Sum: 15.0");
        assert_eq!(calculate(&numbers, "mean").unwrap(), "Mean: 3.0");
        assert_eq!(calculate(&numbers, "max").unwrap(), "Max: 5.0");
        assert_eq!(calculate(&numbers, "min").unwrap(), "Min: 1.0");
        assert_eq!(calculate(&[2.5, 1.0], "max").unwrap(), "Max: 2.5");
    }

    #[test]
    fn test_calculate_errors() {
        assert_eq!(calculate(&[], "sum").unwrap_err().to_string(), "No numbers provided.");
        assert_eq!(
            calculate(&[1.0], "median").unwrap_err().to_string(),
            "Unknown operation: median"
        );
    }

    #[test]
    fn test_create_user_output() {
        let out = create_user("testuser", "test@example.com", Some("Test".into()), None).unwrap();
        assert!(out.starts_with("User created: {"));
        assert!(out.contains("\"username\": \"testuser\""));
    }

    #[test]
    fn test_create_user_invalid() {
        let err = create_user("ab", "test@example.com", None, None).unwrap_err();
        assert_eq!(err.to_string(), "Username must be at least 3 characters long");
    }

    #[test]
    fn test_create_product_with_discount() {
        let out = create_product("Test Product", 100.0, None, None, Some(25.0)).unwrap();
        let json: Value = serde_json::from_str(out.trim_start_matches("Product created: ")).unwrap();
        assert_eq!(json["price"], 100.0);
        assert_eq!(json["discounted_price"], 75.0);
    }

    #[test]
    fn test_create_product_errors() {
        let err = create_product("Test Product", -5.0, None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "Product price must be a non-negative number");

        let err = create_product("Test Product", 5.0, None, None, Some(150.0)).unwrap_err();
        assert_eq!(err.to_string(), "Discount percentage must be between 0 and 100");
    }
}
