use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use stdinout::{Input, OrExit};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordsim::config::Config;
use wordsim::error::{Error, Result};
use wordsim::io::EmbeddingFormat;
use wordsim::model::DATA_DIR_ENV;
use wordsim::repl::QueryLoop;

#[derive(Debug, Parser)]
#[command(name = "wordsim")]
#[command(about = "Query the cosine similarity of word pairs")]
#[command(version)]
struct Args {
    /// Embeddings file, bypasses model lookup
    #[arg(value_name = "EMBEDDINGS")]
    embeddings: Option<PathBuf>,

    /// Model name to look up in the data directories
    #[arg(short, long, value_name = "NAME")]
    model: Option<String>,

    /// Embedding format
    #[arg(short, long, value_enum)]
    format: Option<EmbeddingFormat>,

    /// Accept tokens with invalid UTF-8
    #[arg(long)]
    lossy: bool,

    /// Only read the first N embeddings
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Directory that is searched first for models
    #[arg(long, value_name = "DIR", env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Read queries from FILE instead of standard input
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,

    /// Log progress to standard error
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Merge the command line into the configuration file, if any.
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(data_dir) = &self.data_dir {
            config.data_dir = Some(data_dir.clone());
        }
        if let Some(name) = &self.model {
            config.model.name = name.clone();
            config.model.path = None;
        }
        if let Some(path) = &self.embeddings {
            config.model.path = Some(path.clone());
        }
        if let Some(format) = self.format {
            config.model.format = format;
        }
        if self.lossy {
            config.model.lossy = true;
        }
        if let Some(limit) = self.limit {
            config.model.limit = Some(limit);
        }

        Ok(config)
    }
}

/// Load the model and answer queries until `quit` or end of input.
fn run<W>(args: &Args, mut output: W) -> Result<()>
where
    W: Write,
{
    let config = args.config()?;
    let model_path = config.model_path()?;

    writeln!(
        output,
        "Loading Word2Vec model... (this may take a few minutes the first time)"
    )
    .map_err(|e| Error::read_error("Cannot write to output", e))?;
    tracing::info!(path = %model_path.display(), "loading model");

    let embeddings = config.read_embeddings(&model_path)?;
    writeln!(output, "Model loaded successfully!")
        .map_err(|e| Error::read_error("Cannot write to output", e))?;

    let input = Input::from(args.input.as_deref());
    let reader = input
        .buf_read()
        .map_err(|e| Error::read_error("Cannot open input for reading", e))?;

    QueryLoop::new(&embeddings)
        .run(reader, output)
        .map_err(|e| Error::read_error("Cannot process queries", e))
}

fn main() {
    let args = Args::parse();

    let log_filter = if args.verbose {
        "wordsim=info"
    } else {
        "wordsim=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdout = io::stdout();
    run(&args, stdout.lock()).or_exit("Error", 1);
}
