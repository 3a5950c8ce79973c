//! Command-line interface for tei-conllu.
//!
//! Usage:
//!   tei2conllu `<file>` [--syn-type UD|JOS|JOS+SRL] [--layout nested|flat]
//!              [--join before|after] [--xpos-table `<tsv>`] [-o `<out>`]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tei_conllu::{ConvertOptions, Converter, JoinDirection, Layout, SyntaxMode, XposTable};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "tei2conllu", version)]
#[command(about = "Convert a TEI XML file to a .conllu file")]
struct Cli {
    /// Name of the TEI XML file to be converted
    file: PathBuf,

    /// Syntactic relation type to be included (UD, JOS or JOS+SRL)
    #[arg(long = "syn-type", default_value = "UD")]
    syn_type: SyntaxMode,

    /// Where document roots are: searched at any depth (nested) or the XML root (flat)
    #[arg(long, default_value = "nested")]
    layout: Layout,

    /// Whether a `join` marker removes the space before or after its token
    #[arg(long, default_value = "before")]
    join: JoinDirection,

    /// Tab-separated table rewriting xpos tags after conversion
    #[arg(long = "xpos-table")]
    xpos_table: Option<PathBuf>,

    /// Output path (defaults to the input path with a .conllu extension)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tei2conllu=info,tei_conllu=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to convert {}: {e}", cli.file.display());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> tei_conllu::Result<()> {
    let mut converter = Converter::new(ConvertOptions {
        syntax: cli.syn_type,
        layout: cli.layout,
        join: cli.join,
    });
    if let Some(path) = &cli.xpos_table {
        converter = converter.with_xpos_table(XposTable::load(path)?);
    }
    converter.convert_file(&cli.file, cli.output.as_deref())?;
    Ok(())
}
