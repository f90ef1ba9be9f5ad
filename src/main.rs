use clap::Parser;
use orgkit::core::{delays, stream, typed, Number};
use orgkit::utils::{logger, validation::Validate};
use orgkit::{CliConfig, Command, GithubOrgClient, HttpFetcher, OrgError, Settings};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config).await {
        tracing::error!("❌ {} (exit code {})", e, e.exit_code());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(config: &CliConfig) -> Result<(), OrgError> {
    config.validate()?;
    let settings = config.load_settings()?;

    match &config.command {
        Command::Org { name, license, .. } => list_repos(&settings, name, license.as_deref()).await,
        Command::Wait { tasks, .. } => run_timers(&settings, *tasks).await,
        Command::Stream => {
            run_stream().await;
            Ok(())
        }
        Command::Typed => {
            show_typed();
            Ok(())
        }
    }
}

async fn list_repos(settings: &Settings, org: &str, license: Option<&str>) -> Result<(), OrgError> {
    let fetcher = HttpFetcher::new(&settings.github)?;
    let client = GithubOrgClient::with_api_base(org, settings.github.api_base.as_str(), fetcher)?;

    let repos = client.public_repos(license).await?;
    tracing::info!("✅ {} repositories found for {}", repos.len(), client.org_name());
    for repo in repos {
        println!("{}", repo);
    }
    Ok(())
}

async fn run_timers(settings: &Settings, tasks: bool) -> Result<(), OrgError> {
    let n = settings.timers.count;
    let max_delay = settings.timers.max_delay();
    tracing::info!("Starting {} timers (max {:?}, spawned: {})", n, max_delay, tasks);

    let run = delays::timed_wait_n(n, max_delay, tasks).await?;

    for delay in &run.delays {
        println!("{:.3}", delay.as_secs_f64());
    }

    println!(
        "total {:.3}s, average per timer: {:.3}s",
        run.elapsed.as_secs_f64(),
        run.average().as_secs_f64()
    );
    Ok(())
}

async fn run_stream() {
    let values = stream::async_comprehension().await;
    for value in &values {
        println!("{:.3}", value);
    }

    let elapsed = stream::measure_runtime().await;
    println!("4 concurrent comprehensions: {:.3}s", elapsed.as_secs_f64());
}

fn show_typed() {
    let times_three = typed::make_multiplier(3.0);
    let words = ["async", "rust", "org"];

    println!("add(1.11, 2.22) = {}", typed::add(1.11, 2.22));
    println!("concat(\"egg\", \"shell\") = {}", typed::concat("egg", "shell"));
    println!("floor(-3.7) = {}", typed::floor(-3.7));
    println!("to_str(2.0) = {}", typed::to_str(2.0));
    println!("sum_list([3.14, 1.11]) = {}", typed::sum_list(&[3.14, 1.11]));
    println!(
        "sum_mixed_list([5, 4.5]) = {}",
        typed::sum_mixed_list(&[Number::Int(5), Number::Float(4.5)])
    );
    println!("to_kv(\"eggs\", 3) = {:?}", typed::to_kv("eggs", Number::Int(3)));
    println!("make_multiplier(3.0)(2.5) = {}", times_three(2.5));
    println!("element_length({:?}) = {:?}", words, typed::element_length(&words));
    println!("safe_first_element({:?}) = {:?}", words, typed::safe_first_element(&words));
}
