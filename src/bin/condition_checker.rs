use clap::Parser;
use noether_check::utils::logger;
use noether_check::{CliArgs, ConditionChecker, VerificationEngine};

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

    let engine = VerificationEngine::new_with_monitoring(ConditionChecker::new(config), args.monitor);
    let outcome = match engine.run().await {
        Ok(outcome) => outcome,
        Err(e) => e.exit(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("=== Concurrent Theorem Verifier ===");
        println!("Noetherian Module Equivalence");
        println!();
        print!("{}", outcome);
    }

    // 結論只供顯示，不影響結束碼
    Ok(())
}
