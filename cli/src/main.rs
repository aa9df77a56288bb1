//! Explainer CLI binary: run the HTTP server, or submit text to it and print the explanation.
//!
//! Subcommands: `serve` (HTTP server), `explain` (one-shot or interactive client).

mod repl;

use std::io::Read;
use std::process;

use clap::{Parser, Subcommand};
use cli::{submit, write_view, HttpTransport, OutputFormat, StderrIndicator, SubmitControl, DEFAULT_URL};
use tokio::io::BufReader;

#[derive(Parser, Debug)]
#[command(name = "explainer")]
#[command(about = "Explainer: explain pasted text in simple language, with a bullet summary")]
struct Args {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Run the HTTP server (GET /, POST /api/explain); default 127.0.0.1:5000 or EXPLAINER_ADDR
    Serve(ServeArgs),
    /// Send text to a running server and print the explanation and bullets
    Explain(ExplainArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct ServeArgs {
    /// Listen address (default 127.0.0.1:5000)
    #[arg(long, value_name = "ADDR")]
    addr: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub(crate) struct ExplainArgs {
    /// Server base URL
    #[arg(long, value_name = "URL", env = "EXPLAINER_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Interactive: read paragraphs from stdin (blank line submits) until EOF or `quit`
    #[arg(short, long)]
    interactive: bool,

    /// Print {"explanation", "bullets"} as JSON instead of text
    #[arg(long)]
    json: bool,

    /// When using --json, pretty-print (multi-line)
    #[arg(long)]
    pretty: bool,

    /// Text to explain; read from stdin when omitted
    #[arg(trailing_var_arg = true)]
    text: Vec<String>,
}

impl ExplainArgs {
    fn format(&self) -> OutputFormat {
        OutputFormat {
            json: self.json,
            pretty: self.pretty,
        }
    }
}

async fn run_explain(args: &ExplainArgs) -> Result<bool, Box<dyn std::error::Error>> {
    let transport = HttpTransport::new(&args.url);
    let mut control = SubmitControl::new(StderrIndicator::new());

    if args.interactive {
        let input = BufReader::new(tokio::io::stdin());
        let (mut out, mut err) = (std::io::stdout(), std::io::stderr());
        let format = args.format();
        repl::run_repl_loop(input, &mut out, &mut err, &transport, &mut control, format).await?;
        return Ok(true);
    }

    let text = if args.text.is_empty() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        args.text.join(" ")
    };

    let view = submit(&text, &transport, &mut control).await;
    let (mut out, mut err) = (std::io::stdout().lock(), std::io::stderr().lock());
    Ok(write_view(&view, args.format(), &mut out, &mut err)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = config::load_and_apply("explainer", None::<&std::path::Path>);
    let args = Args::parse();

    let default_filter = match &args.cmd {
        Command::Serve(_) => "info,hyper_util=off",
        Command::Explain(_) => "warn",
    };
    config::logging::init(default_filter)?;
    if let Err(e) = loaded {
        tracing::warn!(error = %e, "configuration only partly loaded");
    }

    match &args.cmd {
        Command::Serve(sa) => {
            if let Err(e) = serve::run_serve(sa.addr.as_deref()).await {
                eprintln!("serve error: {}", e);
                process::exit(1);
            }
        }
        Command::Explain(ea) => {
            match run_explain(ea).await {
                Ok(true) => {}
                Ok(false) => process::exit(1),
                Err(e) => {
                    eprintln!("explainer: {}", e);
                    process::exit(1);
                }
            }
        }
    }
    Ok(())
}
