use std::{process::ExitCode, time::Duration};

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{EnvFilter, fmt};

use client::{
    api::HttpApi,
    config::Config,
    form::{Condition, RegistrationForm, TextField},
    summary::RegistrationSummary,
};
use registry::countries::COUNTRIES;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Backend base url, defaults to REGISTRY_URL or http://localhost:8080
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill in and submit the registration form
    Register(RegisterArgs),

    /// List registrations, optionally filtered
    Summary(SummaryArgs),

    /// Countries and cities the form accepts
    Countries,
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    /// yyyy-mm-dd
    #[arg(long)]
    birth_date: NaiveDate,

    /// "Street / Number"
    #[arg(long)]
    address: String,

    #[arg(long)]
    country: String,

    #[arg(long)]
    city: String,

    #[arg(long, default_value = "")]
    zip_code: String,

    #[arg(long)]
    land_line: String,

    /// "05 XX XX XX XX"
    #[arg(long)]
    cell_phone: String,

    #[arg(long)]
    infected: bool,

    #[arg(long)]
    diabetes: bool,

    #[arg(long)]
    cardiovascular: bool,

    #[arg(long)]
    allergies: bool,

    #[arg(long, default_value = "")]
    other: String,
}

#[derive(Args, Debug)]
struct SummaryArgs {
    /// yyyy-mm-dd, needs --end-date
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// yyyy-mm-dd, needs --start-date
    #[arg(long)]
    end_date: Option<NaiveDate>,

    #[arg(long)]
    city: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.url);
    let api = HttpApi::new(config.registry_url);

    match cli.command {
        Command::Register(args) => register(&api, args).await,
        Command::Summary(args) => summary(&api, args).await,
        Command::Countries => {
            for country in COUNTRIES {
                println!("{}: {}", country.name, country.cities.join(", "));
            }

            ExitCode::SUCCESS
        }
    }
}

async fn register(api: &HttpApi, args: RegisterArgs) -> ExitCode {
    let mut form = RegistrationForm::new();

    form.set_field(TextField::FirstName, args.first_name);
    form.set_field(TextField::LastName, args.last_name);
    form.set_birth_date(Some(args.birth_date));
    form.set_field(TextField::Address, args.address);
    form.select_country(args.country);
    form.set_field(TextField::City, args.city);
    form.set_field(TextField::ZipCode, args.zip_code);
    form.set_field(TextField::LandLine, args.land_line);
    form.set_field(TextField::CellPhone, args.cell_phone);
    form.set_infected(args.infected);
    form.set_condition(Condition::Diabetes, args.diabetes);
    form.set_condition(Condition::Cardiovascular, args.cardiovascular);
    form.set_condition(Condition::Allergies, args.allergies);
    form.set_other_condition(args.other);

    let pb = spinner("Submitting registration");
    let result = form.submit(api).await;
    pb.finish_and_clear();

    match result {
        Ok(()) => {
            println!("Registration added.");
            ExitCode::SUCCESS
        }
        Err(_) => {
            eprintln!("{}", form.error_message().unwrap_or_default());
            ExitCode::FAILURE
        }
    }
}

async fn summary(api: &HttpApi, args: SummaryArgs) -> ExitCode {
    let pb = spinner("Fetching registrations");
    let mut summary = RegistrationSummary::mount(api).await;
    pb.finish_and_clear();

    if let Some(message) = summary.error_message() {
        eprintln!("{message}");
        return ExitCode::FAILURE;
    }

    summary.set_start_date(args.start_date);
    summary.set_end_date(args.end_date);
    summary.set_city(args.city.unwrap_or_default());

    if !summary.filter().is_empty() {
        summary.search();
    }

    print!("{}", summary.render());

    ExitCode::SUCCESS
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}
