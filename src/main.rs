use std::env;
use std::process;

use cursor_theme::env_vars::ProcessEnvironment;
use cursor_theme::look_and_feel::LookAndFeelPackage;
use cursor_theme::{cursor_names, ThemeResolver};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let name = match env::args().nth(1) {
        Some(name) => name,
        None => {
            eprintln!("usage: cursor-theme <theme name> | --packages");
            process::exit(2);
        }
    };

    if name == "--packages" {
        list_packages();
        return;
    }

    let resolver = ThemeResolver::new();

    println!("search path:");
    for path in resolver.search_paths().paths() {
        println!("  {}", path.display());
    }

    let theme = match resolver.resolve(&name) {
        Some(theme) => theme,
        None => {
            eprintln!("cursor theme '{}' not found", name);
            process::exit(1);
        }
    };

    println!("theme:   {}", theme.path().display());
    println!("cursors: {}", theme.cursors_dir().display());

    let cursors_dir = theme.cursors_dir();
    let missing: Vec<&str> = cursor_names::all()
        .filter(|cursor| !cursors_dir.join(cursor).exists())
        .collect();
    if !missing.is_empty() {
        println!("missing: {}", missing.join(" "));
    }
}

fn list_packages() {
    for package in LookAndFeelPackage::installed(&ProcessEnvironment) {
        let cursors = package
            .defaults()
            .ok()
            .flatten()
            .and_then(|defaults| defaults.cursor_theme)
            .unwrap_or_else(|| String::from("-"));
        println!("{}\t{}\tcursors: {}", package.name(), package.display_name(), cursors);
    }
}
