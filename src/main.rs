//! Command-line interface for the PasteMD site core.
//!
//! The CLI exports the site configuration for the renderer, checks it for
//! dead sidebar navigation, and previews the star badge against the live
//! GitHub API.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process,
    sync::Arc,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use pastemd_site::{
    Error, GitHubClient, RepositoryClient, RepositoryRef, SiteConfiguration, StarBadge,
    find_dead_sidebar_prefixes, load_site, pastemd, validate_site, write_site_json,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line interface of the documentation site core.
#[derive(Debug, Parser,)]
#[command(name = "pastemd-site", version, about = "PasteMD documentation site configuration and star badge")]
struct Cli
{
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Print the site configuration as renderer JSON.
    Config(ConfigArgs,),
    /// Validate the site configuration and report dead sidebar prefixes.
    Check(CheckArgs,),
    /// Fetch the repository star count once and print the badge.
    Stars(StarsArgs,),
}

#[derive(Debug, Args,)]
/// Arguments accepted by the `config` subcommand.
struct ConfigArgs
{
    /// YAML site document; the built-in PasteMD site is used when omitted.
    #[arg(long = "config", value_name = "PATH", env = "PASTEMD_SITE_CONFIG")]
    config: Option<PathBuf,>,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

#[derive(Debug, Args,)]
struct CheckArgs
{
    /// YAML site document; the built-in PasteMD site is used when omitted.
    #[arg(long = "config", value_name = "PATH", env = "PASTEMD_SITE_CONFIG")]
    config: Option<PathBuf,>,
}

#[derive(Debug, Args,)]
struct StarsArgs
{
    /// Repository whose stars are displayed.
    #[arg(
        long = "repo",
        value_name = "OWNER/NAME",
        env = "PASTEMD_SITE_REPO",
        default_value = pastemd_site::DEFAULT_REPOSITORY
    )]
    repo: RepositoryRef,

    /// Print the full badge markup instead of the count label.
    #[arg(long = "html", action = ArgAction::SetTrue)]
    html: bool,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    init_tracing();

    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

fn init_tracing()
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn",),);
    tracing_subscriber::fmt().with_env_filter(filter,).with_writer(io::stderr,).init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates errors from configuration loading, validation and output.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();

    match cli.command {
        Command::Config(args,) => run_config(args,),
        Command::Check(args,) => run_check(args,),
        Command::Stars(args,) => run_stars(args,),
    }
}

fn resolve_site(path: Option<&Path,>,) -> Result<SiteConfiguration, Error,>
{
    match path {
        Some(path,) => load_site(path,),
        None => {
            let site = pastemd();
            validate_site(&site,)?;
            Ok(site,)
        }
    }
}

fn run_config(args: ConfigArgs,) -> Result<(), Error,>
{
    let site = resolve_site(args.config.as_deref(),)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_site_json(&mut handle, &site, args.pretty,)?;
    writeln!(handle).map_err(|source| Error::service(format!("failed to write output: {source}"),),)
}

fn run_check(args: CheckArgs,) -> Result<(), Error,>
{
    let site = resolve_site(args.config.as_deref(),)?;
    check_site(&site, &mut io::stdout().lock(),)
}

fn check_site<W: Write,>(site: &SiteConfiguration, writer: &mut W,) -> Result<(), Error,>
{
    let dead = find_dead_sidebar_prefixes(site,);
    if dead.is_empty() {
        info!("Site configuration is consistent");
        return Ok((),);
    }

    for entry in &dead {
        writeln!(writer, "locale '{}': sidebar prefix '{}' has no navigation entry", entry.locale, entry.prefix)
            .map_err(|source| Error::service(format!("failed to write output: {source}"),),)?;
    }

    Err(Error::validation(format!("{} sidebar prefix(es) are unreachable from navigation", dead.len()),),)
}

fn run_stars(args: StarsArgs,) -> Result<(), Error,>
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|source| Error::service(format!("failed to start async runtime: {source}"),),)?;

    let output = runtime.block_on(async {
        let client = GitHubClient::public()?;
        Ok::<_, Error,>(stars_output(Arc::new(client,), args.repo, args.html,).await,)
    },)?;

    println!("{output}");
    Ok((),)
}

/// Mounts one badge, waits for its fetch and returns what it displays.
async fn stars_output<C: RepositoryClient,>(client: Arc<C,>, repo: RepositoryRef, html: bool,) -> String
{
    let mut mounted = StarBadge::new(client, repo,).mount();
    mounted.settled().await;
    if html { mounted.render() } else { mounted.count_label().into_owned() }
}
