//! Command-line definition of the `netkit` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "netkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect the NetKit tool catalog and its route table")]
pub(crate) struct Cli {
    /// Configuration file (defaults to `netkit.*` in the working directory, if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog document to use instead of the configured or built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List categories and their features in authoring order
    Catalog {
        /// Only list the category with this id
        #[arg(long)]
        category: Option<String>,
    },
    /// Print the generated route table
    Routes {
        /// Emit the table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show which route a location navigates to
    Resolve {
        /// Location such as `/net/whois?target=example.org`
        path: String,
    },
    /// Validate the catalog and exit non-zero when it is inconsistent
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_catalog_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["netkit", "check", "--catalog", "tools.toml"]).unwrap();

        assert!(matches!(cli.command, Command::Check));
        assert_eq!(cli.catalog, Some(PathBuf::from("tools.toml")));
    }

    #[test]
    fn catalog_category_filter() {
        let cli = Cli::try_parse_from(["netkit", "catalog", "--category", "net-tools"]).unwrap();
        assert!(matches!(cli.command, Command::Catalog { category: Some(ref id) } if id == "net-tools"));
    }

    #[test]
    fn routes_json_flag() {
        let cli = Cli::try_parse_from(["netkit", "routes", "--json"]).unwrap();
        assert!(matches!(cli.command, Command::Routes { json: true }));
    }

    #[test]
    fn resolve_requires_a_path() {
        assert!(Cli::try_parse_from(["netkit", "resolve"]).is_err());
    }
}
