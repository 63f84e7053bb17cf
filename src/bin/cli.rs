use std::path::PathBuf;

use clap::{Parser, Subcommand};
use record_demo::commands::{self, Format};
use record_demo::files::DEFAULT_DELIMITER;
use record_demo::logging;

#[derive(Parser)]
#[command(name = "record-demo")]
#[command(about = "Create records, crunch numbers and convert JSON/CSV files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Calculate statistics for a list of numbers")]
    Calculate {
        #[arg(allow_negative_numbers = true, help = "Numbers to reduce")]
        numbers: Vec<f64>,

        #[arg(short, long, default_value = "sum", help = "Operation: sum, mean, max or min")]
        operation: String,
    },

    #[command(about = "Convert between JSON and CSV files")]
    Convert {
        #[arg(help = "Input file (.json is read as JSON, anything else as CSV)")]
        input: PathBuf,

        #[arg(help = "Output file")]
        output: PathBuf,

        #[arg(short, long, value_enum, default_value = "json", help = "Output format")]
        format: Format,

        #[arg(long, default_value = ",", value_parser = parse_delimiter, help = "CSV delimiter")]
        delimiter: u8,
    },

    #[command(about = "Create a new user and print the result")]
    CreateUser {
        username: String,

        email: String,

        #[arg(short, long, help = "User first name")]
        first_name: Option<String>,

        #[arg(short, long, help = "User last name")]
        last_name: Option<String>,
    },

    #[command(about = "Create a new product and print the result")]
    CreateProduct {
        name: String,

        #[arg(allow_negative_numbers = true)]
        price: f64,

        #[arg(short, long, help = "Product description")]
        description: Option<String>,

        #[arg(short, long, help = "Product category")]
        category: Option<String>,

        #[arg(long, allow_negative_numbers = true, help = "Discount percentage to apply")]
        discount: Option<f64>,
    },

    #[command(about = "Drop incomplete and duplicate rows from a CSV file")]
    Clean {
        input: PathBuf,

        output: PathBuf,

        #[arg(long, help = "Keep rows with empty cells")]
        keep_incomplete: bool,

        #[arg(long, help = "Keep repeated rows")]
        keep_duplicates: bool,

        #[arg(long, default_value = ",", value_parser = parse_delimiter, help = "CSV delimiter")]
        delimiter: u8,
    },

    #[command(about = "Print a JSON or CSV file as a table")]
    Preview {
        input: PathBuf,

        #[arg(long, default_value = ",", value_parser = parse_delimiter, help = "CSV delimiter")]
        delimiter: u8,
    },
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!("delimiter must be a single ASCII character, got {s:?}")),
    }
}

fn main() {
    logging::init("warn");
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Calculate { numbers, operation } => commands::calculate(&numbers, &operation),
        Commands::Convert {
            input,
            output,
            format,
            delimiter,
        } => commands::convert(&input, &output, format, delimiter),
        Commands::CreateUser {
            username,
            email,
            first_name,
            last_name,
        } => commands::create_user(&username, &email, first_name, last_name),
        Commands::CreateProduct {
            name,
            price,
            description,
            category,
            discount,
        } => commands::create_product(&name, price, description, category, discount),
        Commands::Clean {
            input,
            output,
            keep_incomplete,
            keep_duplicates,
            delimiter,
        } => commands::clean(&input, &output, !keep_incomplete, !keep_duplicates, delimiter),
        Commands::Preview { input, delimiter } => commands::preview(&input, delimiter),
    };

    match outcome {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
