use clap::Parser;
use noether_check::utils::logger;
use noether_check::{CliArgs, ModuleReporter, VerificationEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    if args.json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => e.exit(),
    };

    let engine = VerificationEngine::new_with_monitoring(ModuleReporter::new(config), args.monitor);
    let report = match engine.run().await {
        Ok(report) => report,
        Err(e) => e.exit(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let rule = "=".repeat(50);
        println!("{}", rule);
        println!("  Module Theorem");
        println!("  ⋂ Ass(M) = √Ann(M)");
        println!("{}", rule);
        println!();
        print!("{}", report);
    }

    Ok(())
}
