//! dommap - visualize the DOM of an HTML page as a treemap

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgGroup, Parser};

use dommap::chart::{ChartData, Layout, render_page};
use dommap::{ChartRecord, Error, FilterMode, Options, Result, Source};

#[derive(Parser)]
#[command(name = "dommap")]
#[command(version, about = "Visualize the DOM of an HTML page as a treemap", long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["url", "file"])))]
#[command(after_help = "EXAMPLES:
    dommap -f page.html -o tree.html           Write a treemap page
    dommap -u https://example.com --show      Open the treemap in a browser
    dommap -f page.html -b table -m a -o t.json
                                              Keep tables, mask links, dump records
    curl -s https://example.com | dommap -f -  Read from stdin, print records")]
struct Cli {
    /// URL of the HTML page to analyze
    #[arg(short, long)]
    url: Option<String>,

    /// Path to a local HTML file to analyze ("-" for stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Keep elements with this tag, their ancestors and matching descendants.
    /// Repeatable. Without it every element is kept.
    #[arg(short, long, value_name = "TAG")]
    branch: Vec<String>,

    /// Collapse elements with this tag into a leaf annotated with their
    /// markup (links show their href). Repeatable.
    #[arg(short, long, value_name = "TAG")]
    mask: Vec<String>,

    /// Keep the whole subtree below a --branch match instead of filtering it
    #[arg(long)]
    keep_descendants: bool,

    /// Output file: .html for a treemap page, .json for the chart records
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Open the treemap in the default browser
    #[arg(long)]
    show: bool,

    /// Hover text line length in characters
    #[arg(long, value_name = "CHARS", default_value_t = dommap::chart::DEFAULT_WRAP_LIMIT)]
    wrap: usize,

    /// Chart title
    #[arg(long)]
    title: Option<String>,

    /// Chart width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Chart height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Number of tree levels shown at once
    #[arg(long)]
    max_depth: Option<u32>,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log pass statistics
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn source(&self) -> Source {
        match (&self.url, &self.file) {
            (Some(url), _) => Source::Url(url.clone()),
            (None, Some(path)) if path.as_os_str() == "-" => Source::Stdin,
            (None, Some(path)) => Source::File(path.clone()),
            // clap's required "source" group guarantees one of them
            (None, None) => Source::Stdin,
        }
    }

    fn options(&self) -> Options {
        let defaults = Layout::default();
        let layout = Layout {
            title: self.title.clone().unwrap_or(defaults.title),
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            max_depth: self.max_depth.unwrap_or(defaults.max_depth),
            root_color: defaults.root_color,
        };
        let mode = if self.keep_descendants {
            FilterMode::KeepDescendants
        } else {
            FilterMode::Retest
        };

        Options::new()
            .with_branch(self.branch.iter().cloned())
            .with_mask(self.mask.iter().cloned())
            .with_filter_mode(mode)
            .with_wrap_limit(self.wrap)
            .with_layout(layout)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("DOMMAP_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    if let Err(error) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("warning: failed to initialize logging: {error}");
    }
}

fn run(cli: &Cli) -> Result<()> {
    let html = cli.source().load()?;
    let options = cli.options();
    let records = dommap::visualize(&html, &options)?;
    tracing::info!(records = records.len(), "built chart records");

    if let Some(path) = &cli.output {
        write_output(path, &records, &options.layout)?;
    }

    if cli.show {
        show(&records, &options.layout)?;
    }

    if cli.output.is_none() && !cli.show {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &records)?;
        writeln!(stdout)?;
    }

    Ok(())
}

fn write_output(path: &Path, records: &[ChartRecord], layout: &Layout) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let contents = match extension.as_str() {
        "html" | "htm" => render_page(&ChartData::from_records(records), layout)?,
        "json" => serde_json::to_string_pretty(records)?,
        other => {
            return Err(Error::UnsupportedFormat(format!(
                "cannot write '.{other}' output, use .html or .json"
            )));
        }
    };

    std::fs::write(path, contents)?;
    tracing::info!(path = %path.display(), "wrote output");
    Ok(())
}

fn show(records: &[ChartRecord], layout: &Layout) -> Result<()> {
    let page = render_page(&ChartData::from_records(records), layout)?;

    let mut file = tempfile::Builder::new()
        .prefix("dommap-")
        .suffix(".html")
        .tempfile()?;
    file.write_all(page.as_bytes())?;
    let (_, path) = file.keep().map_err(|e| e.error)?;

    tracing::info!(path = %path.display(), "opening treemap in browser");
    open::that(&path)?;
    Ok(())
}
