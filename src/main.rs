use std::path::PathBuf;

use anyhow::Context;
use backstack::config::Config;
use backstack::demo::{Console, ConsoleCommand, DemoDirector, MenuWatch, Screen, StdoutShare};
use backstack::logging::init_tracing;
use backstack::router::Router;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Text front-end for the backstack demo director.
#[derive(Debug, Parser)]
#[command(name = "backstack", version)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the simulated loading delay in milliseconds.
    #[arg(long)]
    load_delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(delay) = cli.load_delay_ms {
        config.demo.load_delay_ms = delay;
    }
    init_tracing(&config.logging);

    let router = Router::<Screen>::spawn(&config.router);
    let director = DemoDirector::new(router.clone(), &config.demo);
    director.start();

    let events = router.subscribe_events();
    tokio::spawn(async move { events.forward_to(&StdoutShare).await });

    let console = Console::new(router.clone());
    let mut path = router.observe_path();
    let mut alert = router.observe_alert();
    let mut menu = console.watch_menu();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("commands: select N | clear | toggle | back | choose cancel|destructive|positive | show | quit");
    loop {
        tokio::select! {
            Some(_) = path.next() => {
                menu = console.watch_menu();
                print!("{}", console.render());
            }
            Some(_) = alert.next() => print!("{}", console.render()),
            Some(()) = menu_changed(&mut menu) => print!("{}", console.render()),
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                match line.parse::<ConsoleCommand>() {
                    Ok(command) => {
                        if !console.apply(command) {
                            break;
                        }
                        if command == ConsoleCommand::Show {
                            print!("{}", console.render());
                        }
                    }
                    Err(err) => eprintln!("{err}"),
                }
            }
        }
    }

    Ok(())
}

async fn menu_changed(menu: &mut Option<MenuWatch>) -> Option<()> {
    match menu {
        Some(menu) => menu.changed().await,
        None => None,
    }
}
