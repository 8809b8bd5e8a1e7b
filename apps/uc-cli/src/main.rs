use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use uc_app::{
    AppError, AppResult, ConversionReport, ConversionRequest, Converter, ConverterConfig,
    UnitCategory, filter_units, how_it_works, list_categories, render_banner,
    supported_units_reference,
};
use uc_core::UnitResolver;

#[derive(Parser)]
#[command(name = "uc-cli")]
#[command(about = "Unit Converter CLI - convert values between units of a category", long_about = None)]
struct Cli {
    /// Optional YAML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List unit categories
    Categories,
    /// List the units of a category
    Units {
        /// Category label (e.g., Length, Temperature)
        category: String,
        /// Only show units whose id, symbol or name contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Convert a value from one unit to another
    Convert {
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Source unit (id, symbol or alias, e.g. foot, ft, feet)
        from_unit: String,
        /// Target unit
        to_unit: String,
        /// Decimal places in the result (overrides config)
        #[arg(short, long)]
        precision: Option<usize>,
        /// Print a JSON report instead of the banner
        #[arg(long)]
        json: bool,
    },
    /// Run the worked examples
    Examples {
        /// Restrict to one category
        category: Option<String>,
    },
    /// Print the supported units reference
    Reference,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    tracing::debug!(?config, "settings");
    let converter = Converter::new(UnitResolver::new());

    match cli.command {
        Commands::Categories => cmd_categories(),
        Commands::Units { category, filter } => cmd_units(&category, filter.as_deref()),
        Commands::Convert {
            value,
            from_unit,
            to_unit,
            precision,
            json,
        } => cmd_convert(
            &converter,
            ConversionRequest::new(value, &from_unit, &to_unit),
            config.precision_or(precision)?,
            json,
        ),
        Commands::Examples { category } => {
            cmd_examples(&converter, category.as_deref(), config.precision)
        }
        Commands::Reference => cmd_reference(),
    }
}

fn load_config(path: Option<&Path>) -> AppResult<ConverterConfig> {
    match path {
        Some(path) => ConverterConfig::load(path),
        None => Ok(ConverterConfig::default()),
    }
}

fn cmd_categories() -> AppResult<()> {
    for category in list_categories() {
        println!("{} ({} units)", category, category.units().len());
    }
    Ok(())
}

fn cmd_units(category: &str, filter: Option<&str>) -> AppResult<()> {
    let category: UnitCategory = category.parse()?;
    let units = filter_units(category, filter.unwrap_or(""));

    if units.is_empty() {
        println!("No units in {} match '{}'", category, filter.unwrap_or(""));
    } else {
        println!("Units in {}:", category);
        for def in units {
            println!("  {} ({}) - {}", def.id, def.symbol, def.display_name);
        }
    }
    Ok(())
}

fn cmd_convert(
    converter: &Converter,
    request: ConversionRequest<'_>,
    precision: usize,
    json: bool,
) -> AppResult<()> {
    let result = converter.run(&request);

    if json {
        let report = ConversionReport::new(&request, &result, precision);
        println!("{}", report.to_json_pretty()?);
    } else {
        let banner = render_banner(&request, &result, precision);
        if banner.is_success() {
            println!("✓ {}", banner.text());
        } else {
            eprintln!("✗ {}", banner.text());
        }
    }

    match result.failure() {
        Some(reason) => Err(AppError::ConversionFailed(reason.clone())),
        None => Ok(()),
    }
}

fn cmd_examples(converter: &Converter, category: Option<&str>, precision: usize) -> AppResult<()> {
    let categories = match category {
        Some(label) => vec![label.parse::<UnitCategory>()?],
        None => list_categories().to_vec(),
    };

    for category in categories {
        println!("{}:", category);
        for ex in category.examples() {
            let request = ConversionRequest::new(ex.value, ex.from_unit, ex.to_unit);
            let result = converter.run(&request);
            let banner = render_banner(&request, &result, precision);
            println!("  {:<28} {}", ex.caption, banner.text());
        }
    }
    Ok(())
}

fn cmd_reference() -> AppResult<()> {
    print!("{}", supported_units_reference());
    println!("\nHow It Works");
    for (i, step) in how_it_works().iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    Ok(())
}
