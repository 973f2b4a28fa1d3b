use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use kpl_scanner::{
    errors::reporter::{Collector, ConsoleReporter, ErrorReporter},
    lexer::{
        lexer::{Lexer, LexerOptions, DEFAULT_MAX_IDENT_LEN},
        tokens::TokenKind,
    },
    reader::reader::{SourceReader, DEFAULT_TAB_WIDTH},
};
use log::{info, LevelFilter};

/// Scans a KPL source file and prints one token per line.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    filename: PathBuf,

    /// Longest identifier kept before reporting it as too long
    #[arg(long, default_value_t = DEFAULT_MAX_IDENT_LEN, value_parser = parse_ident_len)]
    max_ident_len: usize,

    /// Columns advanced by a tab character
    #[arg(long, default_value_t = DEFAULT_TAB_WIDTH)]
    tab_width: u32,

    /// Recognise `(.` and `.)` array index selectors
    #[arg(long)]
    selectors: bool,

    /// Do not print diagnostics
    #[arg(short, long)]
    quiet: bool,

    /// More logging; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_ident_len(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(0) => Err(String::from("identifiers must keep at least one character")),
        Ok(len) => Ok(len),
        Err(err) => Err(err.to_string()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let reader = SourceReader::open(&args.filename)
        .map_err(|err| format!("Can't read input file {}: {}", args.filename.display(), err))?;

    let options = LexerOptions {
        max_ident_len: args.max_ident_len,
        tab_width: args.tab_width,
        index_selectors: args.selectors,
    };

    let stdout = io::stdout();
    let reported = if args.quiet {
        let mut collector = Collector::new();
        scan(reader, &mut collector, options, stdout.lock())?;
        collector.errors().len()
    } else {
        let file_name = args.filename.display().to_string();
        let mut reporter =
            ConsoleReporter::new(file_name, reader.source().to_vec()).with_tab_width(args.tab_width);
        scan(reader, &mut reporter, options, stdout.lock())?;
        reporter.reported()
    };

    info!("{} finished with {} diagnostic(s)", args.filename.display(), reported);

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Prints every token up to, but not including, `Eof`.
fn scan<E: ErrorReporter, W: Write>(
    reader: SourceReader,
    reporter: E,
    options: LexerOptions,
    mut out: W,
) -> io::Result<()> {
    for token in Lexer::new(reader, reporter, options) {
        if token.kind == TokenKind::Eof {
            break;
        }
        writeln!(out, "{}", token)?;
    }

    out.flush()
}
