//! Run a command script against a rectangle quadtree.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use rect_quadtree::from_wkt::rectangles_from_wkt;
use rect_quadtree::script::{read_script, run_script};
use rect_quadtree::{Bounds, Error, Quadtree, TreeConfig};

#[derive(Parser, Debug)]
#[command(name = "rect_quadtree", version, about = "Apply insert/delete/find/update/dump commands to a quadtree")]
struct Args {
    /// Path to the command file, one command per line.
    script: PathBuf,

    #[arg(long, default_value_t = -60, allow_negative_numbers = true)]
    min_x: i32,

    #[arg(long, default_value_t = -60, allow_negative_numbers = true)]
    min_y: i32,

    #[arg(long, default_value_t = 110, allow_negative_numbers = true)]
    max_x: i32,

    #[arg(long, default_value_t = 110, allow_negative_numbers = true)]
    max_y: i32,

    /// Rectangles a node holds before it splits.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    threshold: u32,

    /// WKT file whose geometry envelopes are inserted before the script runs.
    #[arg(long)]
    preload: Option<PathBuf>,
}

impl Args {
    fn tree_config(&self) -> TreeConfig {
        TreeConfig::new(
            Bounds::new(self.min_x, self.min_y, self.max_x, self.max_y),
            self.threshold as usize,
        )
    }
}

fn preload(tree: &mut Quadtree, path: &Path) -> Result<(), Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rectangles = rectangles_from_wkt(&text)?;
    let total = rectangles.len();
    let mut inserted = 0;
    for rect in rectangles {
        match tree.insert(rect) {
            Ok(()) => inserted += 1,
            Err(err) => warn!(error = %err, "preload rectangle rejected"),
        }
    }
    info!(path = %path.display(), inserted, total, "preloaded rectangles");
    Ok(())
}

fn run(args: &Args) -> Result<(), Error> {
    let config = args.tree_config();
    let mut tree = config.build();
    info!(bounds = %config.bounds, threshold = config.threshold, "created tree");

    if let Some(path) = &args.preload {
        preload(&mut tree, path)?;
    }

    let lines = read_script(&args.script)?;
    if lines.is_empty() {
        println!("No valid commands found in the file.");
        return Ok(());
    }

    let summary = run_script(&mut tree, &lines, |line, result| match result {
        Ok(outcome) => println!("{}", outcome),
        Err(err) => println!("Error processing command '{}': {}", line.text, err),
    });
    info!(
        executed = summary.executed,
        failed = summary.failed,
        skipped = summary.skipped,
        "script finished"
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "run failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
