use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use catalog2xlsx::catalog::parse_reader;
use catalog2xlsx::models::ProductRecord;
use catalog2xlsx::sheet::{CellValue, SheetColumn};

const PREVIEW_WIDTH: usize = 40;

/// Parse a catalog and print the extracted products
pub fn run(input: PathBuf, json: bool) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let file = File::open(&input).context("Failed to open input file")?;
    let products = parse_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse catalog: {}", input.display()))?;

    if json {
        let body = serde_json::to_string_pretty(&products).context("Failed to encode products")?;
        println!("{}", body);
        return Ok(());
    }

    println!("Catalog: {}", input.display());
    println!("Products: {}", products.len());
    println!();
    for (i, product) in products.iter().enumerate() {
        print_product(i + 1, product);
    }

    Ok(())
}

fn print_product(position: usize, product: &ProductRecord) {
    #[cfg(feature = "colorized_output")]
    println!("{}", console::style(format!("Product #{}", position)).bold().cyan());

    #[cfg(not(feature = "colorized_output"))]
    println!("Product #{}", position);

    for column in SheetColumn::ALL {
        let value = match column.value(product) {
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(text) => preview(text),
        };
        if !value.is_empty() {
            println!("  {}: {}", column.header(), value);
        }
    }
    println!();
}

fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_WIDTH {
        let head: String = text.chars().take(PREVIEW_WIDTH).collect();
        format!("{}... ({} chars)", head, text.chars().count())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_on_char_boundaries() {
        assert_eq!(preview("short"), "short");
        let long = "я".repeat(50);
        let shown = preview(&long);
        assert!(shown.starts_with(&"я".repeat(PREVIEW_WIDTH)));
        assert!(shown.ends_with("(50 chars)"));
    }

    #[test]
    fn test_missing_input_is_an_error() {
        assert!(run(PathBuf::from("/nonexistent/catalog.xml"), false).is_err());
    }
}
