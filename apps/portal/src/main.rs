use chrono::{NaiveDate, NaiveTime};
use dotenv::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use directory_cell::view::BookAction;
use medibook_portal::controller::{PageController, PageEvent};
use medibook_portal::view::{Feedback, PageView};
use shared_config::PortalConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Medibook appointment portal");

    let config = PortalConfig::from_env();
    let mut controller = PageController::new(config)?;

    let view = controller.init().await;
    print_view(&view);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let input = line.trim();

        match input {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                print_help();
                continue;
            }
            _ => {}
        }

        match parse_command(input) {
            Ok(event) => print_view(&controller.handle(event).await),
            Err(message) => println!("{}", message),
        }
    }

    Ok(())
}

fn parse_command(input: &str) -> Result<PageEvent, String> {
    let (command, rest) = match input.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    match command {
        "search" => Ok(PageEvent::SearchChanged(rest.to_string())),
        "pick" => rest
            .parse()
            .map(PageEvent::SuggestionPicked)
            .map_err(|_| "Expected a numeric doctor id.".to_string()),
        "book" => rest
            .parse()
            .map(PageEvent::BookPressed)
            .map_err(|_| "Expected a numeric doctor id.".to_string()),
        "date" => NaiveDate::parse_from_str(rest, "%Y-%m-%d")
            .map(PageEvent::DateEntered)
            .map_err(|_| "Enter the date as YYYY-MM-DD.".to_string()),
        "time" => NaiveTime::parse_from_str(rest, "%H:%M")
            .map(PageEvent::TimeEntered)
            .map_err(|_| "Enter the time as HH:MM.".to_string()),
        "submit" => Ok(PageEvent::SubmitPressed),
        "cancel" => Ok(PageEvent::CancelPressed),
        other => Err(format!("Unrecognized command: {} (try 'help')", other)),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  search <text>      filter doctors by name or specialization");
    println!("  search             clear the search and show all doctors");
    println!("  pick <id>          select a suggestion");
    println!("  book <id>          open the booking form for a doctor");
    println!("  date <YYYY-MM-DD>  set the appointment date");
    println!("  time <HH:MM>       set the appointment time");
    println!("  submit             send the booking");
    println!("  cancel             close the booking form");
    println!("  quit               leave the portal");
}

fn print_view(view: &PageView) {
    println!();

    if let Some(notice) = view.directory.notice {
        println!("{}", notice);
    }

    for card in &view.directory.cards {
        println!("#{} {}", card.doctor_id, card.full_name);
        println!("    Specialization: {}", card.specialization);
        println!("    Phone: {}", card.phone);
        println!("    Email: {}", card.email);
        println!("    Availability:");
        for line in card.availability_lines() {
            println!("      {}", line);
        }
        match &card.action {
            BookAction::OpenBooking(id) => println!("    [Book Now: book {}]", id),
            BookAction::RedirectToLogin => println!("    [Book Now: login required]"),
        }
    }

    if view.suggestions.is_visible() {
        println!("Suggestions:");
        for item in &view.suggestions.items {
            println!(
                "  {} ({})  [pick {}]",
                item.full_name, item.specialization, item.doctor_id
            );
        }
    }

    if view.modal.visible {
        println!(
            "Booking doctor #{}  date: {}  time: {}",
            view.modal.doctor_id.unwrap_or_default(),
            view.modal.scheduled_date.as_deref().unwrap_or("-"),
            view.modal.scheduled_time.as_deref().unwrap_or("-"),
        );
    }

    match &view.feedback {
        Some(Feedback::Confirmation(message)) => println!("OK: {}", message),
        Some(Feedback::Warning(message)) => println!("WARNING: {}", message),
        None => {}
    }

    if let Some(url) = &view.redirect {
        println!("Redirecting to {}", url);
    }
}
