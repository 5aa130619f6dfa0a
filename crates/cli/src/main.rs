use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

use fieldbook::api::{run_matrix, run_traverse, MatrixRequest, TraverseRequest};

mod input;
mod report;
mod server;

#[derive(Parser)]
#[command(name = "fieldbook")]
#[command(about = "Survey traverse and matrix operations suite")]
#[command(version = fieldbook::VERSION)]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Serve the browser front end and the JSON endpoints
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Preferred port; the next free one is taken if it is busy
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
    /// Compute boundary pillars and parcel area for one traverse
    Survey {
        #[arg(long)]
        origin_easting: f64,
        #[arg(long)]
        origin_northing: f64,
        /// One leg as "DISTANCE,BEARING"; repeat in traverse order
        #[arg(long = "leg", value_name = "DIST,BRG")]
        legs: Vec<String>,
        /// CSV file with a distance,bearing header instead of --leg flags
        #[arg(long, conflicts_with = "legs")]
        legs_csv: Option<PathBuf>,
    },
    /// Evaluate addition, subtraction, and multiplication of two matrices
    Matrix {
        /// Matrix A as JSON rows, e.g. '[[1,2],[3,4]]'
        #[arg(long, requires = "b")]
        a: Option<String>,
        /// Matrix B as JSON rows
        #[arg(long, requires = "a")]
        b: Option<String>,
        /// JSON file holding {"matrix_a": ..., "matrix_b": ...}
        #[arg(long, conflicts_with_all = ["a", "b"])]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Serve { host, port } => serve(host, port),
        Action::Survey {
            origin_easting,
            origin_northing,
            legs,
            legs_csv,
        } => survey(origin_easting, origin_northing, legs, legs_csv),
        Action::Matrix { a, b, input } => matrix(a, b, input),
    }
}

fn serve(host: String, port: u16) -> Result<()> {
    let srv = server::Server::bind(&host, port)?;
    println!("Survey and Matrix Operations Suite");
    println!("Web interface running at: http://{}", srv.local_addr()?);
    println!("Press Ctrl+C to stop the server");
    srv.run()
}

fn survey(
    origin_easting: f64,
    origin_northing: f64,
    legs: Vec<String>,
    legs_csv: Option<PathBuf>,
) -> Result<()> {
    let (distances, bearings) = match legs_csv {
        Some(path) => input::read_legs_csv(&path)?,
        None => {
            if legs.is_empty() {
                bail!("provide at least one --leg or a --legs-csv file");
            }
            input::parse_legs(&legs)?
        }
    };
    tracing::info!(legs = distances.len(), "survey");
    let req = TraverseRequest {
        origin_easting,
        origin_northing,
        distances,
        bearings,
    };
    let resp = run_traverse(&req).context("survey calculation failed")?;
    print!("{}", report::traverse_report(&resp));
    Ok(())
}

fn matrix(a: Option<String>, b: Option<String>, input: Option<PathBuf>) -> Result<()> {
    let req = match (a, b, input) {
        (Some(a), Some(b), None) => MatrixRequest {
            matrix_a: input::parse_matrix(&a).context("parsing --a")?,
            matrix_b: input::parse_matrix(&b).context("parsing --b")?,
        },
        (None, None, Some(path)) => input::read_matrix_request(&path)?,
        _ => bail!("provide either --a and --b, or --input"),
    };
    tracing::info!(
        a_rows = req.matrix_a.len(),
        b_rows = req.matrix_b.len(),
        "matrix"
    );
    let resp = run_matrix(&req).context("matrix calculation failed")?;
    print!("{}", report::matrix_report(&resp));
    Ok(())
}
