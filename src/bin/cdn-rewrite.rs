//! cdn-rewrite: CLI tool for trying CDN rewrite options against URLs and HTML.

use clap::{Args, Parser, Subcommand};
use cdn_rewrite::{CdnOptions, CdnRewriter, Environment, HookKind};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cdn-rewrite")]
#[command(version = "0.1.0")]
#[command(about = "Rewrite local static-asset URLs onto a CDN host", long_about = None)]
struct Cli {
    /// Options file (.yaml, .yml or .json)
    #[arg(short, long)]
    options: Option<PathBuf>,

    #[command(flatten)]
    env: EnvArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct EnvArgs {
    /// Host name of the site
    #[arg(long)]
    local_host: Option<String>,

    /// Home URL of the site; its host is used when --local-host is absent
    #[arg(long)]
    home_url: Option<String>,

    /// Override the CDN host from the options file
    #[arg(long)]
    cdn_host: Option<String>,

    /// Force the primary switch on
    #[arg(long)]
    enable: bool,

    /// Treat the request as arriving over SSL
    #[arg(long)]
    ssl: bool,

    /// Treat the request as an administrative request
    #[arg(long)]
    admin: bool,

    /// Administrative URLs are forced onto SSL
    #[arg(long)]
    force_ssl_admin: bool,

    /// Network (multisite) install
    #[arg(long)]
    multisite: bool,

    /// Current site is not the network's main site
    #[arg(long)]
    sub_site: bool,

    /// Network sites live on sub-domains
    #[arg(long)]
    subdomain_install: bool,

    /// Membership plugin with protected downloads is installed
    #[arg(long)]
    membership_plugin: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite one or more URLs
    Url {
        /// URLs to rewrite
        #[arg(required = true)]
        urls: Vec<String>,

        /// Requested scheme (http, https, relative, admin, ...)
        #[arg(short, long)]
        scheme: Option<String>,
    },

    /// Rewrite href/src attributes of an HTML document
    Content {
        /// Input HTML file; stdin when absent
        input: Option<PathBuf>,
    },

    /// Show, as JSON, how each URL is classified and filtered
    Explain {
        /// URLs to inspect
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// List the hooks the rewriter registers for
    Hooks,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let rewriter = match build_rewriter(cli.options.as_ref(), &cli.env) {
        Ok(rewriter) => rewriter,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if !rewriter.is_active() {
        log::info!("Rewriter is inactive; input passes through unchanged");
    }

    let result = match cli.command {
        Commands::Url { urls, scheme } => rewrite_urls(&rewriter, &urls, scheme.as_deref()),
        Commands::Content { input } => rewrite_content(&rewriter, input.as_ref()),
        Commands::Explain { urls } => explain(&rewriter, &urls),
        Commands::Hooks => list_hooks(&rewriter),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build_rewriter(
    options_path: Option<&PathBuf>,
    args: &EnvArgs,
) -> Result<CdnRewriter, Box<dyn std::error::Error>> {
    let mut options = match options_path {
        Some(path) => CdnOptions::load(path)?,
        None => CdnOptions::default(),
    };
    if let Some(cdn_host) = &args.cdn_host {
        options.cdn_host = cdn_host.clone();
    }
    if args.enable {
        options.cdn_enable = true;
    }

    let mut environment = match (&args.local_host, &args.home_url) {
        (Some(host), _) => Environment::new(host.as_str()),
        (None, Some(home_url)) => Environment::from_home_url(home_url),
        (None, None) => Environment::default(),
    };
    environment.is_ssl = args.ssl;
    environment.is_admin = args.admin;
    environment.force_ssl_admin = args.force_ssl_admin;
    environment.multisite = args.multisite;
    environment.main_site = !args.sub_site;
    environment.subdomain_install = args.subdomain_install;
    environment.membership_plugin = args.membership_plugin;

    // Resolve eagerly so a bad pattern list is reported instead of
    // silently disabling the rewriter
    let config = cdn_rewrite::RewriteConfig::resolve(&options, &environment)?;
    Ok(CdnRewriter::new(config))
}

fn rewrite_urls(
    rewriter: &CdnRewriter,
    urls: &[String],
    scheme: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for url in urls {
        writeln!(out, "{}", rewriter.rewrite_url(url, scheme))?;
    }
    Ok(())
}

fn rewrite_content(
    rewriter: &CdnRewriter,
    input: Option<&PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let html = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    io::stdout().write_all(rewriter.rewrite_content(&html).as_bytes())?;
    Ok(())
}

fn explain(rewriter: &CdnRewriter, urls: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for url in urls {
        let (decision, file) = rewriter.inspect(url);
        let stage = match decision {
            cdn_rewrite::Decision::Rejected(stage) => Some(stage.as_str()),
            _ => None,
        };
        let report = serde_json::json!({
            "input": url,
            "decision": decision.as_str(),
            "stage": stage,
            "file": file,
            "output": rewriter.rewrite_url(url, None),
        });
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    }
    Ok(())
}

fn list_hooks(rewriter: &CdnRewriter) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for hook in rewriter.hooks() {
        let kind = match hook.kind() {
            HookKind::Url => "url",
            HookKind::Content => "content",
        };
        writeln!(out, "{}\t{}", hook, kind)?;
    }
    Ok(())
}
