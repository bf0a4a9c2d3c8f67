use anyhow::Result;
use clap::Parser;
use speech_comparator::analysis::{analyze_dubno, analyze_thornton, DubnoInput, ThorntonInput};
use speech_comparator::cli::{
    Cli, Command, ConvertArgs, DubnoArgs, ModelArgs, OutputFormat, TableArgs, ThorntonArgs,
};
use speech_comparator::config::AnalysisConfig;
use speech_comparator::json_output::{
    to_json, JsonConversion, JsonCriticalTable, JsonDubnoResult, JsonThorntonResult,
};
use speech_comparator::report::table_to_report_string;
use speech_comparator::score::{parse_value, switch_mode, InputMode, ListSize};
use speech_comparator::thornton::critical_difference_table;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Defaults from --config (if any) with the model flags applied on top
fn resolve_config(base: AnalysisConfig, model: &ModelArgs) -> Result<(AnalysisConfig, ListSize)> {
    let mut config = base.with_overrides(model.confidence, None)?;
    if let Some(search) = model.search {
        config.search = search;
    }
    let list_size = model
        .list_size
        .as_deref()
        .map_or(config.list_size, ListSize::parse);
    Ok((config, list_size))
}

fn run_thornton(base: AnalysisConfig, args: &ThorntonArgs, format: OutputFormat) -> Result<()> {
    let (config, list_size) = resolve_config(base, &args.model)?;
    let mode = args.mode.unwrap_or(config.input_mode);

    let input = ThorntonInput {
        list_size,
        score1: parse_value(&args.score1),
        score2: parse_value(&args.score2),
        mode,
        confidence: config.confidence,
    };

    let analysis = analyze_thornton(&input, config.search);
    match format {
        OutputFormat::Text => print!("{}", analysis.to_report_string()),
        OutputFormat::Json => println!("{}", to_json(&JsonThorntonResult::from(&analysis))?),
    }
    Ok(())
}

fn run_dubno(base: AnalysisConfig, args: &DubnoArgs, format: OutputFormat) -> Result<()> {
    let config = base.with_overrides(None, args.list_size)?;
    let input = DubnoInput::from_raw(
        &args.pta500,
        &args.pta1000,
        &args.pta2000,
        &args.pb_max,
        config.dubno_list_size,
    );

    let analysis = analyze_dubno(&input);
    match format {
        OutputFormat::Text => print!("{}", analysis.to_report_string()),
        OutputFormat::Json => println!("{}", to_json(&JsonDubnoResult::from(&analysis))?),
    }
    Ok(())
}

fn run_table(base: AnalysisConfig, args: &TableArgs, format: OutputFormat) -> Result<()> {
    let (config, list_size) = resolve_config(base, &args.model)?;
    let table = critical_difference_table(list_size, config.confidence, config.search);

    match format {
        OutputFormat::Text => print!(
            "{}",
            table_to_report_string(&table, list_size, config.confidence)
        ),
        OutputFormat::Json => println!(
            "{}",
            to_json(&JsonCriticalTable::new(&table, list_size, config.confidence))?
        ),
    }
    Ok(())
}

fn run_convert(base: AnalysisConfig, args: &ConvertArgs, format: OutputFormat) -> Result<()> {
    let list_size = args
        .list_size
        .as_deref()
        .map_or(base.list_size, ListSize::parse);
    let from = match args.to {
        InputMode::Percent => InputMode::Count,
        InputMode::Count => InputMode::Percent,
    };

    let values: Vec<f64> = args
        .values
        .iter()
        .map(|raw| switch_mode(parse_value(raw), list_size, from, args.to))
        .collect();

    match format {
        OutputFormat::Text => {
            for value in &values {
                println!("{}", value);
            }
        }
        OutputFormat::Json => println!(
            "{}",
            to_json(&JsonConversion {
                list_size: list_size.get(),
                mode: args.to,
                values,
            })?
        ),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let base = match &args.config {
        Some(path) => AnalysisConfig::from_file(path)?,
        None => AnalysisConfig::default(),
    };

    match &args.command {
        Command::Thornton(cmd) => run_thornton(base, cmd, args.format),
        Command::Dubno(cmd) => run_dubno(base, cmd, args.format),
        Command::Table(cmd) => run_table(base, cmd, args.format),
        Command::Convert(cmd) => run_convert(base, cmd, args.format),
    }
}
