use clap::Parser;
use harvest_page::{Harvest, output};
use tokio::task::JoinSet;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    if let Err(err) = run(args).await {
        ::log::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.resolve_config()?;
    let seeds = collect_seeds(&args)?;

    if seeds.is_empty() {
        return Err("no seed URLs found".into());
    }
    if config.max_depth == 0 {
        ::log::warn!("depth is zero, nothing will be fetched");
    }

    ::log::info!("starting crawl of {} seed(s)", seeds.len());

    // One crawl per seed, each with its own visited tracker; all joined
    // before exit
    let mut crawls = JoinSet::new();
    for seed in seeds {
        let config = config.clone();
        crawls.spawn(async move {
            let outcome = Harvest::new(&seed).with_config(config).run().await;
            (seed, outcome)
        });
    }

    let mut failures = 0;
    while let Some(joined) = crawls.join_next().await {
        let (seed, outcome) = joined?;
        match outcome {
            Ok(records) => match output::write_records(&args.output_dir, &seed, &records) {
                Ok(path) => {
                    println!("Output for {} saved to {}", seed, path.display());
                    println!("Scraped pages count: {}", records.len());
                }
                Err(err) => {
                    ::log::error!("failed to write output for {}: {}", seed, err);
                    failures += 1;
                }
            },
            Err(err) => {
                ::log::error!("crawl of {} failed: {}", seed, err);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(format!("{failures} seed(s) failed").into());
    }
    Ok(())
}

/// Seeds come from --url directly or from --file, one per line
fn collect_seeds(args: &Args) -> Result<Vec<String>, std::io::Error> {
    if let Some(url) = &args.url {
        return Ok(vec![url.clone()]);
    }

    let path = args.file.as_ref().expect("clap guarantees a seed source");
    let contents = std::fs::read_to_string(path)?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
