use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use unitconv::config::Config;
use unitconv::session::{ConverterSession, Side};
use unitconv::units;

const DEFAULT_CONFIG_FILE: &str = "unitconv.toml";

#[derive(Parser)]
#[command(name = "unitconv")]
#[command(about = "Convert values between units of measurement", long_about = None)]
struct Cli {
    /// Config file (default: ./unitconv.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all categories
    Categories,

    /// List the units of a category
    Units {
        /// Category name (e.g., "Data Storage")
        category: String,
    },

    /// Convert a value between two units of a category
    Convert {
        /// Category name (e.g., "Weight")
        category: String,

        /// Source unit (e.g., "Kilogram")
        from: String,

        /// Target unit (e.g., "Gram")
        to: String,

        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Significant digits in the output (1-17)
        #[arg(short, long, value_parser = parse_digits)]
        digits: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate an expression such as "1.5 Kilogram to Gram"
    Eval {
        /// Conversion expression
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Significant digits in the output (1-17)
        #[arg(short, long, value_parser = parse_digits)]
        digits: Option<usize>,
    },

    /// Export the unit table as JSON
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Two-field converter driven by commands on stdin
    Interactive,
}

#[derive(Serialize)]
struct ConversionOutput<'a> {
    category: &'a str,
    from: &'a str,
    to: &'a str,
    value: f64,
    result: f64,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn parse_digits(s: &str) -> Result<usize, String> {
    let digits: usize = s.parse().map_err(|e| format!("{}", e))?;
    if digits == 0 || digits > units::MAX_SIGNIFICANT_DIGITS {
        return Err(format!(
            "must be between 1 and {}",
            units::MAX_SIGNIFICANT_DIGITS
        ));
    }
    Ok(digits)
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Categories => list_categories(),
        Commands::Units { category } => list_units(&category),
        Commands::Convert {
            category,
            from,
            to,
            value,
            digits,
            json,
        } => convert_value(
            &category,
            &from,
            &to,
            &value,
            digits.unwrap_or(config.significant_digits),
            json,
        ),
        Commands::Eval { expression, digits } => {
            evaluate(&expression, digits.unwrap_or(config.significant_digits))
        }
        Commands::Export { output } => export_catalog(output.as_deref()),
        Commands::Interactive => run_interactive(&config),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => Config::load_from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                Config::load_from_file(default_path)?
            } else {
                Config::empty()
            }
        }
    };

    let validation = config.validate();
    if validation.has_issues() {
        validation.log_issues();
    }
    if !validation.is_valid() {
        return Err(format!("Invalid configuration\n{}", validation).into());
    }

    debug!("loaded config: {:?}", config);
    Ok(config)
}

fn list_categories() -> Result<(), Box<dyn std::error::Error>> {
    for def in units::CATALOG.iter() {
        match def.base_unit {
            Some(base) => println!("{} (base: {})", def.category, base),
            None => println!("{} (affine)", def.category),
        }
    }
    Ok(())
}

fn list_units(category: &str) -> Result<(), Box<dyn std::error::Error>> {
    for unit in units::units_for(category)? {
        println!("{}", unit);
    }
    Ok(())
}

fn convert_value(
    category: &str,
    from: &str,
    to: &str,
    value: &str,
    digits: usize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = units::parse_numeric_input(value)?;
    let result = units::convert(category, from, to, value)?;

    if json {
        let output = ConversionOutput {
            category,
            from,
            to,
            value,
            result,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", units::format_significant(result, digits));
    }

    Ok(())
}

fn evaluate(expression: &str, digits: usize) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = units::parse_expression(expression)?;
    let result = parsed.evaluate()?;

    println!(
        "{} {} = {} {}",
        units::format_significant(parsed.value, digits),
        parsed.from,
        units::format_significant(result, digits),
        parsed.to
    );

    Ok(())
}

fn export_catalog(output: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(&units::catalog_summary())?;

    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        println!("Unit table exported to {}", output_path);
    } else {
        println!("{}", json);
    }

    Ok(())
}

const INTERACTIVE_HELP: &str = "\
Commands:
  category <name>   select a category (units reset to its defaults)
  from <unit>       select the source unit
  to <unit>         select the target unit
  source <value>    type into the source field
  target <value>    type into the target field
  units             list units of the current category
  show              print both fields
  help              print this help
  quit              exit";

fn run_interactive(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = ConverterSession::from_config(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Categories: {}", units::categories().join(", "));
    println!("Type 'help' for commands.");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        let (command, argument) = line.split_once(' ').unwrap_or((line, ""));
        let argument = argument.trim();

        let outcome = match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{}", INTERACTIVE_HELP);
                continue;
            }
            "units" => {
                println!("{}", session.units().join(", "));
                continue;
            }
            "show" => Ok(()),
            "category" => session.select_category(argument),
            "from" => session.select_source_unit(argument),
            "to" => session.select_target_unit(argument),
            "source" => session.edit(Side::Source, argument),
            "target" => session.edit(Side::Target, argument),
            other => {
                println!("Unknown command '{}'. Type 'help' for commands.", other);
                continue;
            }
        };

        match outcome {
            Ok(()) => print_session(&session),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}

fn print_session(session: &ConverterSession) {
    let Some(category) = session.category() else {
        println!("No category selected");
        return;
    };

    println!("[{}]", category);
    println!(
        "  from {:<18} {}",
        session.source_unit().unwrap_or("-"),
        session.text(Side::Source)
    );
    println!(
        "  to   {:<18} {}",
        session.target_unit().unwrap_or("-"),
        session.text(Side::Target)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits_range() {
        assert_eq!(parse_digits("6"), Ok(6));
        assert_eq!(parse_digits("17"), Ok(17));
        assert!(parse_digits("0").is_err());
        assert!(parse_digits("18").is_err());
        assert!(parse_digits("100000").is_err());
        assert!(parse_digits("six").is_err());
    }

    #[test]
    fn test_oversized_digits_rejected_by_cli() {
        let result = Cli::try_parse_from([
            "unitconv", "convert", "Weight", "Kilogram", "Gram", "1", "--digits", "100000",
        ]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from([
            "unitconv", "eval", "1 Kilogram to Gram", "--digits", "4",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Eval { digits: Some(4), .. }));
    }
}
