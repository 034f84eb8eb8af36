use clap::Parser;
use transit_impact::app::{impact_app, ImpactAppArguments};

fn main() {
    env_logger::init();
    let args = ImpactAppArguments::parse();
    match impact_app::run(&args.app) {
        Ok(_) => {}
        Err(e) => {
            log::error!("transit-impact failed: {e}");
            std::process::exit(1);
        }
    }
}
