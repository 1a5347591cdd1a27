use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use huepair::cli::Args;
use huepair::interaction::Interaction;
use huepair::layout::StripLayout;
use huepair::render::Chrome;
use huepair::report::StripReport;
use huepair::tui::{self, TuiApp};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = args.interaction_config()?;
    log::info!(
        "role 1 at {:.1} deg, model {}, tradeoff {}",
        config.role1_hue,
        config.cost_model,
        config.initial_tradeoff
    );
    let interaction = Interaction::new(config, StripLayout::default());

    if args.tui {
        return tui::run(TuiApp::new(interaction, Chrome::for_mode(args.theme)));
    }

    let report = StripReport::from_interaction(&interaction);
    match &args.output {
        Some(path) => report.write_to(path)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(report.serialize().as_bytes())
                .context("failed to write report to stdout")?;
        }
    }
    Ok(())
}
