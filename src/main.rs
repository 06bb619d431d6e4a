use clap::error::ErrorKind;
use clap::Parser;
use league_points::logger::{Logger, TracingLogger};
use league_points::runner::Strictness;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: football <stats-file> <team>";

/// Sums the league points a team earned over a file of match results
#[derive(Parser)]
#[command(name = "football", version)]
struct Args {
    /// File with one `<host> - <away> <hostGoals>:<awayGoals>` result per line
    stats_file: String,

    /// Team whose points are totalled
    team: String,

    /// Abort on the first malformed line instead of skipping it
    #[arg(long)]
    strict: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("{}", USAGE);
            std::process::exit(2);
        }
    };
    let strictness = if args.strict {
        Strictness::Strict
    } else {
        Strictness::default()
    };

    match league_points::points_from_file(&args.stats_file, &args.team, strictness).await {
        Ok(points) => println!("{}", points),
        Err(e) => {
            TracingLogger.error(e.to_string());
            std::process::exit(1);
        }
    }
}
