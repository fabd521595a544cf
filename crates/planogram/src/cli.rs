use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Planogram shelf layout, placement and filter tool", long_about = None)]
pub struct Args {
    /// Planogram snapshot (JSON with bays, products and filters)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Engine configuration file (TOML). Defaults apply when omitted.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Override the display scale from the config
    #[arg(short = 's', long = "scale")]
    pub scale: Option<f64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build shelf lines for every sub-shelf and export them as CSV
    Layout {
        /// Print the shelf-line grid as JSON to stdout instead of exporting CSV
        #[arg(long)]
        json: bool,
    },

    /// Find shelf regions with room for a product
    Place {
        /// Size the request from this product's details
        #[arg(short = 'p', long = "product", conflicts_with_all = ["width", "height"])]
        product: Option<String>,

        /// Required width in display units
        #[arg(short = 'W', long = "width", requires = "height")]
        width: Option<f64>,

        /// Required height in display units
        #[arg(short = 'H', long = "height", requires = "width")]
        height: Option<f64>,

        /// Also write the candidates to CSV
        #[arg(long)]
        export: bool,
    },

    /// Apply the snapshot's filters and report facet counts
    Filter {
        /// List distinct values of this product_details field instead
        #[arg(long = "options")]
        options: Option<String>,
    },

    /// Summarise a violation-checker response against the snapshot
    Violations {
        /// Checker response (JSON). Unreadable responses count as no violations.
        #[arg(short = 'r', long = "response")]
        response: PathBuf,
    },
}
