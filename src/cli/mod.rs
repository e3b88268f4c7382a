//! # CLI Module
//!
//! Command-line access to a routes file, for checking route priority and
//! reverse generation without starting the application.
//!
//! ## Commands
//!
//! ### `list`
//!
//! ```bash
//! uriroute --routes routes.yaml list
//! ```
//!
//! ### `match`
//!
//! ```bash
//! uriroute --routes routes.yaml match /blog/show/7 --method GET
//! ```
//!
//! ### `generate`
//!
//! ```bash
//! uriroute --routes routes.yaml generate default -p controller=blog -p action=show
//! uriroute --routes routes.yaml generate youtube -p v=abc --url
//! ```
//!
//! ### `check`
//!
//! Compiles every route and exits non-zero on the first bad template.
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use uriroute::cli::{Cli, run_cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run_cli(cli)?;
//! ```

mod commands;


pub use commands::{run_cli, run_cli_to, Cli, Commands};
