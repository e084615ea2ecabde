use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use log::{info, warn};
use typefinder::{
    Result,
    Threshold,
    TypeExtractor,
    TypeFinderConfig,
    TypeMatcher,
    TypeVocabulary,
    NO_MATCH,
    parser::LatinParser,
    types::NameValue,
    utils::{loader, table::format_table},
};

/// Discover recurring type phrases in a list of names.
#[derive(Debug, Parser)]
#[command(name = "extract_types", version)]
struct Args {
    /// Text file with one name per line, or a CSV file with --column
    input: PathBuf,

    /// Read names from this column of a CSV file
    #[arg(long)]
    column: Option<String>,

    /// INI configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Threshold: a fraction in [0, 1), a whole count >= 1, or "none"
    #[arg(long)]
    thres: Option<Threshold>,

    /// Number of types to keep when no threshold is given
    #[arg(long)]
    max_types: Option<usize>,

    /// Include each type's share of the names
    #[arg(long)]
    proportion: bool,

    /// Drop types that are identical to an entire name
    #[arg(long)]
    no_full_match: bool,

    /// Report phrases without prefix/suffix stripping
    #[arg(long)]
    no_rule: bool,

    /// Print JSON lines instead of a table
    #[arg(long)]
    json: bool,

    /// After extraction, print the matched type of every name
    #[arg(long)]
    match_names: bool,
}

fn load_config(args: &Args) -> Result<TypeFinderConfig> {
    let mut config = match &args.config {
        Some(path) => TypeFinderConfig::from_ini(path)?,
        None => TypeFinderConfig::default(),
    };

    if let Some(thres) = args.thres {
        config.selector.thres = thres;
    }
    if let Some(max_types) = args.max_types {
        config.selector.max_types = max_types;
    }
    config.selector.return_proportion |= args.proportion;
    config.selector.no_full_match |= args.no_full_match;
    config.collector.adjust_thread_count();
    config.validate()?;
    Ok(config)
}

fn init_logging(config: &TypeFinderConfig) {
    let mut builder = env_logger::Builder::new();
    builder
        .format(|buf, record| {
            writeln!(buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, config.collector.get_log_level());
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;
    init_logging(&config);
    info!("Starting type extraction: {}", config.describe());

    let names: Vec<NameValue> = match &args.column {
        Some(column) => loader::read_csv_column(&args.input, column)?,
        None => loader::read_name_lines(&args.input)?,
    };
    if names.is_empty() {
        warn!("No names found in {:?}", args.input);
    }

    let parser_config = config.parser.clone();
    let mut extractor = TypeExtractor::new(config)?;
    if args.no_rule {
        extractor = extractor.without_rule();
    }
    let types = extractor.extract(names.iter().cloned())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        for extracted in &types {
            writeln!(out, "{}", serde_json::to_string(extracted)?)?;
        }
    } else {
        write!(out, "{}", format_table(&types))?;
    }

    if args.match_names {
        let matcher = TypeMatcher::new(LatinParser::new(parser_config), TypeVocabulary::from_extracted(&types));
        writeln!(out)?;
        for name in names.iter().filter_map(NameValue::as_text) {
            let matched = matcher.match_name(&name).unwrap_or(NO_MATCH);
            writeln!(out, "{}\t{}", name, matched)?;
        }
    }

    Ok(())
}
