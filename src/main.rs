//! Entry point for the **tilecfg** configuration tool.
//!
//! Builds the configuration exactly as the host would at (re)load time,
//! validates it, and either prints a short summary or — with `--dump` —
//! writes the full JSON document to stdout for the host to consume.
//!
//! Exit code 1 means the configuration failed validation; the host should
//! keep its previous tables (or fall back to its own defaults).

use log::{error, info};
use tilecfg::config::Config;
use tilecfg::host::HostEnv;

fn main() {
    env_logger::init();

    let dump = std::env::args().any(|a| a == "--dump");

    let env = HostEnv::detect();
    info!("home={} terminal={}", env.home, env.terminal);

    let config = Config::build(&env);
    if let Err(e) = config.validate() {
        error!("invalid configuration: {}", e);
        std::process::exit(1);
    }

    if dump {
        match serde_json::to_string_pretty(&config) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("serialize: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        let widgets = config
            .screens
            .first()
            .map(|s| s.top.widgets.len())
            .unwrap_or(0);
        println!(
            "configuration OK: {} key bindings, {} mouse bindings, {} groups, {} layouts, {} widgets",
            config.keys.len(),
            config.mouse.len(),
            config.groups.len(),
            config.layouts.len(),
            widgets,
        );
    }
}
