use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use catalog2xlsx::convert::{CatalogConverter, ConversionConfig, ConversionStats};
use catalog2xlsx::sheet::{DEFAULT_ATTACHMENT_NAME, XLSX_CONTENT_TYPE};

use super::config::Config;

pub struct ConvertArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub sheet_name: Option<String>,
    pub keep_order: bool,
    pub json: bool,
}

/// Convert a catalog XML file to an XLSX workbook
pub fn run(args: ConvertArgs) -> Result<()> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    if output == args.input {
        anyhow::bail!(
            "Output path would overwrite the input file: {}",
            output.display()
        );
    }

    let config = resolve_config(&args)?;

    info!("catalog2xlsx - catalog XML to XLSX");
    info!("==================================");
    info!("Input:  {}", args.input.display());
    info!("Output: {}", output.display());
    info!("Sheet:  {}", config.workbook.sheet_name);
    info!("Sort by index: {}", config.sort_by_index);

    let converter = CatalogConverter::with_config(config);
    match converter.convert_file(&args.input, &output) {
        Ok(stats) => {
            print_summary(&output, &stats, args.json)?;
            Ok(())
        }
        Err(e) if args.json => {
            let report =
                serde_json::to_string_pretty(&e.report()).context("Failed to encode error report")?;
            println!("{}", report);
            std::process::exit(1);
        }
        Err(e) => Err(e).context(format!("Conversion of {} failed", args.input.display())),
    }
}

fn resolve_config(args: &ConvertArgs) -> Result<ConversionConfig> {
    let mut config = ConversionConfig::default();
    if let Some(path) = &args.config {
        config = Config::from_file(path)?.apply(config);
    }

    // Command-line flags take precedence over the config file
    if let Some(name) = &args.sheet_name {
        config.workbook.sheet_name = name.clone();
    }
    if args.keep_order {
        config.sort_by_index = false;
    }
    Ok(config)
}

/// Next to the input, or inside it when the input names no file
fn default_output_path(input: &Path) -> PathBuf {
    match input.file_stem() {
        Some(_) => input.with_extension("xlsx"),
        None => input.join(DEFAULT_ATTACHMENT_NAME),
    }
}

fn summary_json(output: &Path, stats: &ConversionStats) -> serde_json::Value {
    serde_json::json!({
        "output": output.display().to_string(),
        "contentType": XLSX_CONTENT_TYPE,
        "products": stats.products,
        "inputBytes": stats.input_bytes,
        "outputBytes": stats.output_bytes,
    })
}

fn print_summary(output: &Path, stats: &ConversionStats, json: bool) -> Result<()> {
    if json {
        let summary = summary_json(output, stats);
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to encode summary")?
        );
        return Ok(());
    }

    #[cfg(feature = "colorized_output")]
    {
        use console::style;
        println!(
            "{} {} product(s) -> {} ({} bytes)",
            style("Converted").green().bold(),
            style(stats.products).cyan(),
            style(output.display()).bold(),
            stats.output_bytes
        );
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!(
            "Converted {} product(s) -> {} ({} bytes)",
            stats.products,
            output.display(),
            stats.output_bytes
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &str) -> ConvertArgs {
        ConvertArgs {
            input: PathBuf::from(input),
            output: None,
            config: None,
            sheet_name: None,
            keep_order: false,
            json: false,
        }
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("data/catalog.xml")),
            PathBuf::from("data/catalog.xlsx")
        );
        assert_eq!(
            default_output_path(Path::new("catalog")),
            PathBuf::from("catalog.xlsx")
        );
    }

    #[test]
    fn test_default_output_path_without_file_name() {
        assert_eq!(
            default_output_path(Path::new("..")),
            PathBuf::from("..").join("converted.xlsx")
        );
        assert_eq!(
            default_output_path(Path::new("/")),
            PathBuf::from("/converted.xlsx")
        );
    }

    #[test]
    fn test_summary_json_fields() {
        let stats = ConversionStats {
            products: 2,
            input_bytes: 300,
            output_bytes: 5000,
        };
        let summary = summary_json(Path::new("out.xlsx"), &stats);
        assert_eq!(summary["output"], "out.xlsx");
        assert_eq!(
            summary["contentType"],
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert_eq!(summary["products"], 2);
        assert_eq!(summary["outputBytes"], 5000);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("catalog2xlsx.toml");
        std::fs::write(
            &config_path,
            "[conversion]\nsort_by_index = true\n[workbook]\nsheet_name = \"FromFile\"\n",
        )
        .unwrap();

        let mut args = args("catalog.xml");
        args.config = Some(config_path);
        args.sheet_name = Some("FromFlag".to_string());
        args.keep_order = true;

        let config = resolve_config(&args).unwrap();
        assert_eq!(config.workbook.sheet_name, "FromFlag");
        assert!(!config.sort_by_index);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let mut args = args("catalog.xml");
        args.config = Some(PathBuf::from("/nonexistent/catalog2xlsx.toml"));
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn test_refuses_to_overwrite_input() {
        let mut args = args("catalog.xlsx");
        args.output = Some(PathBuf::from("catalog.xlsx"));
        assert!(run(args).is_err());
    }
}
