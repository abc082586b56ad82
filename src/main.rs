use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::ffi::CString;
use std::fs;
use std::path::{Path, PathBuf};

use ahoy_tokenizer::ffi::{free_token_list, try_tokenize_with, TokenRecord};
use ahoy_tokenizer::{AhoyLexer, LexerOptions, TokenKind};

#[derive(Parser)]
#[command(name = "ahoy-tokens")]
#[command(author, version, about = "Show what the Ahoy tokenizer hands to C callers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// One line per token (default)
    #[value(name = "text")]
    Text,
    /// JSON array of token records
    #[value(name = "json")]
    Json,
}

#[derive(Args)]
struct LexArgs {
    /// Columns a tab counts for when measuring indentation
    #[arg(long, default_value = "4")]
    tab_width: usize,

    /// Do not emit INDENT/DEDENT tokens
    #[arg(long)]
    no_indentation: bool,
}

impl LexArgs {
    fn options(&self) -> LexerOptions {
        LexerOptions {
            tab_width: self.tab_width,
            emit_indentation: !self.no_indentation,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token list for an Ahoy source file
    Dump {
        /// The source file to tokenize
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        #[command(flatten)]
        lex: LexArgs,
    },

    /// Check an Ahoy source file for unrecognized input
    Check {
        /// The source file to check
        input: PathBuf,

        #[command(flatten)]
        lex: LexArgs,
    },
}

fn main() -> Result<()> {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let result = match cli.command {
        Commands::Dump { input, format, lex } => dump(&input, format, lex.options()),
        Commands::Check { input, lex } => check(&input, lex.options()),
    };

    if let Err(e) = result {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// Push a file through the C boundary and copy the entries back out
fn tokenize_file(input: &Path, options: LexerOptions) -> Result<Vec<TokenRecord>> {
    let source =
        fs::read(input).with_context(|| format!("Failed to read source file: {:?}", input))?;
    let source = CString::new(source)
        .with_context(|| format!("Source file contains a NUL byte: {:?}", input))?;

    // SAFETY: sourceはこの呼び出しの間生きているnull終端文字列
    let list = unsafe { try_tokenize_with(source.as_ptr(), &AhoyLexer::new(options)) }
        .with_context(|| format!("Failed to tokenize {:?}", input))?
        .into_raw();

    // SAFETY: listは未解放のハンドルで、読み取り後に一度だけ解放する
    let records = unsafe { (*list).to_records() };
    unsafe { free_token_list(list) };

    log::debug!("{:?}: {} tokens", input, records.len());
    Ok(records)
}

fn dump(input: &Path, format: OutputFormat, options: LexerOptions) -> Result<()> {
    let records = tokenize_file(input, options)?;

    match format {
        OutputFormat::Text => {
            println!("{}", format!("=== Tokens ({}) ===", records.len()).blue().bold());
            for (i, record) in records.iter().enumerate() {
                println!(
                    "{:4}: {:<18} {:>3}  line {:<4} {:?}",
                    i,
                    record.kind_name.cyan(),
                    record.kind,
                    record.line,
                    record.text
                );
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&records)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn check(input: &Path, options: LexerOptions) -> Result<()> {
    log::info!("Checking {:?}", input);

    let records = tokenize_file(input, options)?;
    let illegal: Vec<_> = records
        .iter()
        .filter(|r| r.kind == TokenKind::Illegal.as_i32())
        .collect();

    for record in &illegal {
        eprintln!(
            "{}: {}:{}: unrecognized input {:?}",
            "error".red().bold(),
            input.display(),
            record.line,
            record.text
        );
    }

    if !illegal.is_empty() {
        bail!("Lexical analysis failed ({} unrecognized tokens)", illegal.len());
    }

    println!("{}: No errors found", "success".green().bold());
    Ok(())
}
