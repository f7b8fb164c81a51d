use std::error::Error;
use std::io::{self, BufWriter, Write};

use csview::cli::{ColumnCondition, Delimiter, FilterArgs, OutputFormat, write_header_names};
use csview::config::StreamConfig;
use csview::io::{LineSource, open_input};
use csview::{CsvError, CsvStream, CsvStreamBuilder};
use sarge::prelude::*;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  csview [-i <path>|-] [-d <delim>] [-n] [-H] [-f raw|json] [filter]");
    eprintln!();
    eprintln!("Filters (at most one):");
    eprintln!("  -l, --lines <spec>          Data line intervals, e.g. 2-3,5");
    eprintln!("  -r, --ranges <col>=<spec>   Numeric ranges on a column, e.g. Price=5-7,15");
    eprintln!("  -e, --equals <col>=<vals>   Exact values on a column, e.g. Name=bob,sue");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -i, --input <path>          Input file, '-' for stdin (default)");
    eprintln!("  -d, --delimiter <char>      Field delimiter (default ',')");
    eprintln!("  -n, --no-header             Input has no header row");
    eprintln!("  -H, --headers               Print header names and exit");
    eprintln!("  -f, --format <raw|json>     Output format (default raw)");
    eprintln!("  -c, --config <path>         YAML/JSON stream configuration");
}

macro_rules! value {
    ($arg:expr, $args:expr) => {
        match $arg.get(&$args) {
            Some(Ok(v)) => Some(v),
            Some(Err(e)) => return Err(e.into()),
            None => None,
        }
    };
}

fn write_records<S: LineSource>(
    stream: &mut CsvStream<S>,
    format: OutputFormat,
    print_header: bool,
) -> Result<(), Box<dyn Error>> {
    let delimiter = stream.delimiter();
    let headers = stream.headers().cloned().unwrap_or_default();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match format {
        OutputFormat::Raw => {
            if print_header && !headers.is_empty() {
                writeln!(out, "{}", headers.to_delimited(delimiter))?;
            }
            for record in stream {
                writeln!(out, "{}", record?.to_delimited(delimiter))?;
            }
        }
        OutputFormat::Json => {
            for record in stream {
                serde_json::to_writer(&mut out, &record?.to_json_object(&headers))?;
                writeln!(out)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut reader = ArgumentReader::new();

    let input_ref = reader.add::<String>(tag::both('i', "input"));
    let delimiter_ref = reader.add::<Delimiter>(tag::both('d', "delimiter"));
    let no_header_ref = reader.add::<bool>(tag::both('n', "no-header"));
    let headers_ref = reader.add::<bool>(tag::both('H', "headers"));
    let format_ref = reader.add::<OutputFormat>(tag::both('f', "format"));
    let config_ref = reader.add::<String>(tag::both('c', "config"));
    let lines_ref = reader.add::<String>(tag::both('l', "lines"));
    let ranges_ref = reader.add::<ColumnCondition>(tag::both('r', "ranges"));
    let equals_ref = reader.add::<ColumnCondition>(tag::both('e', "equals"));

    let args = reader.parse()?;

    let mut config = match value!(config_ref, args) {
        Some(path) => StreamConfig::from_path(path)?,
        None => StreamConfig::default(),
    };
    if let Some(Delimiter(d)) = value!(delimiter_ref, args) {
        config.delimiter = d;
    }
    if value!(no_header_ref, args).unwrap_or(false) {
        config.has_headers = false;
    }

    let filters = FilterArgs {
        lines: value!(lines_ref, args),
        ranges: value!(ranges_ref, args),
        equals: value!(equals_ref, args),
    };
    let config = filters.apply_to(config)?;
    let has_headers = config.has_headers;

    let input = value!(input_ref, args).unwrap_or_else(|| "-".to_string());
    let format = value!(format_ref, args).unwrap_or_default();
    let print_headers = value!(headers_ref, args).unwrap_or(false);

    let source = open_input(&input)?;
    let mut stream = CsvStreamBuilder::from_config(config).build(source)?;

    if print_headers {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_header_names(&stream, &mut out)?;
        return Ok(());
    }

    write_records(&mut stream, format, has_headers)
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        match e.downcast_ref::<CsvError>() {
            Some(csv) => eprintln!("csview error [{}]: {csv}", csv.stage()),
            None => {
                eprintln!("csview error: {e}");
                print_usage();
            }
        }
        std::process::exit(1);
    }
}
