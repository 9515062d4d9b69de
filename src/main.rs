// src/main.rs

use ganttplan::{cli, config, logging, run};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("ganttplan error: {err:?}");
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    let cfg = config::load_or_default(args.config.as_deref())?;
    logging::init_logging(args.log_level, cfg.log.level.as_deref())?;
    run(args, cfg)
}
