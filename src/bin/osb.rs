use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "osb", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a storyboard script into a `.osb` file or an existing `.osu` beatmap.
    Build(BuildArgs),
    /// Print the storyboard document built from a script to stdout.
    Print(PrintArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Input storyboard script (JSON).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; `.osb` is written fresh, `.osu` must already exist.
    #[arg(long)]
    out: PathBuf,

    /// Terminate lines with CRLF instead of LF.
    #[arg(long)]
    crlf: bool,
}

#[derive(Parser, Debug)]
struct PrintArgs {
    /// Input storyboard script (JSON).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Terminate lines with CRLF instead of LF.
    #[arg(long)]
    crlf: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Print(args) => cmd_print(args),
    }
}

fn render_options(crlf: bool) -> osb::RenderOptions {
    if crlf {
        osb::RenderOptions::crlf()
    } else {
        osb::RenderOptions::default()
    }
}

fn read_script(path: &Path) -> anyhow::Result<osb::Storyboard> {
    osb::load_script(path).with_context(|| format!("build storyboard from '{}'", path.display()))
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let storyboard = read_script(&args.in_path)?;
    osb::write_storyboard(&storyboard, &args.out, &render_options(args.crlf))
        .with_context(|| format!("write storyboard '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_print(args: PrintArgs) -> anyhow::Result<()> {
    let storyboard = read_script(&args.in_path)?;
    print!("{}", storyboard.to_text_with(&render_options(args.crlf)));
    Ok(())
}
