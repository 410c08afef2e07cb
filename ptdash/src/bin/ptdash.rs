//! queries the views of the public transportation dashboard from the command
//! line. set RUST_LOG=info to follow table loading.
use clap::Parser;
use ptdash::app::DashboardApp;

fn main() {
    env_logger::init();
    let args = DashboardApp::parse();
    if let Err(e) = args.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
