use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use http::Method;
use std::io::Write;
use std::path::PathBuf;

use crate::config::load_route_table;
use crate::route::Params;
use crate::runtime_config::RuntimeConfig;
use crate::router::RouteTable;

/// Command-line interface for inspecting a routes file
#[derive(Parser)]
#[command(name = "uriroute")]
#[command(about = "Match and generate URI routes from a routes file", long_about = None)]
pub struct Cli {
    /// Path to the routes file (YAML, TOML or JSON)
    #[arg(short, long, env = "URIROUTE_ROUTES")]
    pub routes: PathBuf,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List routes in dispatch order
    List,
    /// Dispatch a path and print the winning route and its parameters
    Match {
        /// Request path, e.g. `/blog/show/7`
        path: String,

        /// HTTP method to dispatch with; routes with a method constraint
        /// only match when this is given
        #[arg(short, long)]
        method: Option<String>,
    },
    /// Generate the path for a named route
    Generate {
        /// Route name
        name: String,

        /// Parameter as `key=value` (repeatable)
        #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,

        /// Print the full URL (base path or external host) instead of the path
        #[arg(long, default_value_t = false)]
        url: bool,
    },
    /// Compile every route and report the first error
    Check,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("empty parameter name in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Run the CLI, writing results to stdout.
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_cli_to(cli, &mut out)
}

/// Run the CLI against an arbitrary writer.
pub fn run_cli_to<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let runtime = RuntimeConfig::from_env();
    let table = load_route_table(&cli.routes, runtime.host_policy)?;

    match cli.command {
        Commands::List => list(&table, out),
        Commands::Match { path, method } => {
            let method = method
                .map(|m| Method::from_bytes(m.to_ascii_uppercase().as_bytes()))
                .transpose()
                .context("invalid HTTP method")?;
            dispatch(&table, &path, method.as_ref(), out)
        }
        Commands::Generate { name, params, url } => {
            let params: Params = params.into_iter().collect();
            let generated = if url {
                table.url(&name, &params)?
            } else {
                table.uri(&name, &params)?
            };
            writeln!(out, "{}", generated)?;
            Ok(())
        }
        Commands::Check => {
            writeln!(
                out,
                "{}: {} routes OK",
                cli.routes.display(),
                table.len()
            )?;
            Ok(())
        }
    }
}

fn list<W: Write>(table: &RouteTable, out: &mut W) -> anyhow::Result<()> {
    for (name, route) in table.iter() {
        let external = if route.is_external_with(table.host_policy()) {
            " (external)"
        } else {
            ""
        };
        writeln!(
            out,
            "{}\t{}\t{}{}",
            name,
            route.method_constraint(),
            route.template(),
            external
        )?;
    }
    Ok(())
}

fn dispatch<W: Write>(
    table: &RouteTable,
    path: &str,
    method: Option<&Method>,
    out: &mut W,
) -> anyhow::Result<()> {
    let matched = table
        .dispatch(path, method)
        .ok_or_else(|| anyhow!("no route matched '{}'", path))?;
    writeln!(out, "route: {}", matched.name)?;
    for (key, value) in &matched.params {
        writeln!(out, "  {} = {}", key, value)?;
    }
    Ok(())
}
