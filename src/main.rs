use clap::Parser;
use content_audit::{AnalysisResponse, AnalysisSettings, ContentAnalysis};
use std::error::Error;

mod args;
use args::{Args, OutputFormat};

fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    if let Err(e) = run(&args) {
        ::log::error!("Analysis failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    ::log::info!("Analyzing {}", args.file.display());

    let input = args.to_input()?;
    let settings = match &args.config {
        Some(path) => AnalysisSettings::from_file(path)?,
        None => AnalysisSettings::default(),
    };

    let mut analysis = ContentAnalysis::new(input).with_settings(settings);
    if let Some(site_url) = &args.site_url {
        analysis = analysis.with_site_url(site_url);
    }

    let start_time = std::time::Instant::now();
    let response = analysis.respond();
    ::log::info!(
        "Analysis complete - score {} in {:.2} ms",
        response.data.score,
        start_time.elapsed().as_secs_f64() * 1000.0
    );

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Text => print_summary(&response),
    }

    Ok(())
}

fn print_summary(response: &AnalysisResponse) {
    let data = &response.data;
    println!("Score: {}/100 ({})", data.score, data.score_label);

    for (category, checks) in data.results.categories() {
        println!();
        println!("[{}]", category);
        for (name, result) in checks {
            println!("  {:<18} {:<8} {}", name, result.status, result.message);
        }
    }
}
