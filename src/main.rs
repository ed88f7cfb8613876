use dioxus::prelude::*;

mod app;
mod clock;
mod components;
mod registry;
mod shared;
mod utils;
mod views;

#[cfg(feature = "server")]
mod backend;

pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(feature = "server")]
    {
        use dotenvy::dotenv;
        dotenv().ok();
        backend::init_tracing();

        let mut args = std::env::args();
        let _bin = args.next();
        if let Some(cmd) = backend::Command::parse(args) {
            if let Err(e) = cmd.run() {
                eprintln!("error: {e:#}");
                std::process::exit(1);
            }
            return;
        }
    }
    dioxus::launch(app::App);
}
