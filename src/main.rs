//! Showcase CLI
//!
//! Terminal front end for the two prototypes:
//! - Browse the art gallery panels
//! - Fetch and print the employee directory
//! - Run the employee form validator
//! - Generate a default config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use showcase::config::{self, Config};
use showcase::employees::{EmployeeClient, EmployeeDashboard, EmployeeForm, FormField, ViewMode};
use showcase::gallery::{GalleryApp, PanelId};
use showcase::random::Prng;
use showcase::render::{self, text};

#[derive(Parser)]
#[command(name = "showcase")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Art gallery and employee portal prototypes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/showcase/config.toml or ./showcase.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the art gallery
    Gallery {
        #[command(subcommand)]
        action: GalleryAction,
    },

    /// Employee directory and form
    Employees {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum GalleryAction {
    /// Show the home panel with the featured artworks
    Featured,

    /// Show the full collection
    Grid,

    /// Show one artwork with similar suggestions
    Show {
        /// Artwork id
        id: u32,
        /// Seed for the similar-artwork backfill (default: clock)
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Fetch and print the employee directory
    List {
        /// Layout: table, card or list
        #[arg(short, long, default_value = "card")]
        view: ViewMode,
        /// Override the configured endpoint
        #[arg(long)]
        url: Option<String>,
    },

    /// Validate an employee submission (nothing is stored)
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        designation: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value = "")]
        salary: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.config.as_deref())?;

    showcase::telemetry::init_logging(&config.logging);

    match cli.command {
        Commands::Gallery { action } => run_gallery(action, &config)?,
        Commands::Employees { action } => run_employees(action, &config).await?,
        Commands::Config { output } => {
            let content = config::generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Wrote config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn run_gallery(action: GalleryAction, config: &Config) -> anyhow::Result<()> {
    let rng = match &action {
        GalleryAction::Show { seed: Some(seed), .. } => Prng::new(*seed),
        _ => Prng::from_clock(),
    };
    let mut app = GalleryApp::with_rng(&config.ui, rng);

    match action {
        GalleryAction::Featured => app.navigate(PanelId::Home),
        GalleryAction::Grid => app.navigate(PanelId::Grid),
        GalleryAction::Show { id, .. } => {
            if let Err(e) = app.show_art_detail(id) {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }

    print!("{}", text::panel(&render::panel_view(app.panel())));
    Ok(())
}

async fn run_employees(action: EmployeeAction, config: &Config) -> anyhow::Result<()> {
    match action {
        EmployeeAction::List { view, url } => {
            let mut employees_config = config.employees.clone();
            if let Some(url) = url {
                employees_config.endpoint = url;
            }
            let client = EmployeeClient::new(&employees_config)?;

            let mut dashboard = EmployeeDashboard::new(&config.ui);
            dashboard.set_view_mode(view);
            dashboard.load(&client).await;

            print!("{}", text::dashboard(&render::dashboard_view(&dashboard)));
            if dashboard.error().is_some() {
                std::process::exit(1);
            }
        }
        EmployeeAction::Add {
            name,
            designation,
            location,
            salary,
        } => {
            let mut form = EmployeeForm::new(config.ui.success_indicator_ms);
            form.set(FormField::Name, name);
            form.set(FormField::Designation, designation);
            form.set(FormField::Location, location);
            form.set(FormField::Salary, salary);

            let now = chrono::Utc::now().timestamp_millis();
            match form.submit(now) {
                Ok(employee) => {
                    println!("Form submitted!");
                    println!("Name: {}", employee.name);
                    println!("Designation: {}", employee.designation);
                    println!("Location: {}", employee.location);
                    println!("Salary: {}", employee.salary);
                }
                Err(_) => {
                    eprintln!("Please fix the following fields:");
                    eprint!("{}", text::form_errors(&form));
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
