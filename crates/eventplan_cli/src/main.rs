//! Interactive console front-end for the event planning core.
//!
//! # Responsibility
//! - Prompt for raw input and parse it into the typed arguments the core
//!   expects, so the core never sees malformed text.
//! - Render the structured records the core returns as a console transcript.
//! - Treat every registry error as recoverable: display a message and
//!   return to the menu without losing entered data.

use anyhow::Result;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use eventplan_core::{
    default_log_level, init_logging, AttendeeRole, EventDetails, PlanningRegistry, RegistryError,
};
use log::warn;

const MENU_ITEMS: [&str; 6] = [
    "Create Event",
    "Add Venue",
    "Register Attendee",
    "Assign Venue to Event",
    "View Event Details",
    "Exit",
];

fn main() -> Result<()> {
    init_file_logging();

    let term = Term::stdout();
    print_banner(&term)?;

    let mut registry = PlanningRegistry::new();
    let theme = ColorfulTheme::default();

    loop {
        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt("Event Planning System")
            .items(&MENU_ITEMS)
            .default(0)
            .interact_on(&term)?;

        match choice {
            0 => create_event(&theme, &mut registry)?,
            1 => add_venue(&theme, &mut registry)?,
            2 => register_attendee(&term, &theme, &mut registry)?,
            3 => assign_venue(&term, &theme, &mut registry)?,
            4 => view_event_details(&registry),
            5 => {
                println!("{}", "Exiting the system. Goodbye!".bright_blue());
                return Ok(());
            }
            _ => unreachable!(),
        }
    }
}

/// Best-effort file logging into the system temp directory. The console
/// stays reserved for the interactive transcript, so a logging failure
/// only downgrades to a stderr warning.
fn init_file_logging() {
    let log_dir = std::env::temp_dir().join("eventplan").join("logs");
    if let Err(err) = init_logging(default_log_level(), log_dir.to_string_lossy().as_ref()) {
        eprintln!("warning: file logging disabled: {err}");
    }
}

fn print_banner(term: &Term) -> Result<()> {
    term.clear_screen()?;
    println!("{}", "╔══════════════════════════════════╗".bright_cyan());
    println!("{}", "║      Event Planning System       ║".bright_cyan());
    println!("{}", "╚══════════════════════════════════╝".bright_cyan());
    println!(
        "{}",
        format!("core version {}", eventplan_core::core_version()).dimmed()
    );
    Ok(())
}

fn create_event(theme: &ColorfulTheme, registry: &mut PlanningRegistry) -> Result<()> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Event Name")
        .allow_empty(true)
        .interact_text()?;
    let date: String = Input::with_theme(theme)
        .with_prompt("Event Date (YYYY-MM-DD)")
        .allow_empty(true)
        .interact_text()?;
    let time: String = Input::with_theme(theme)
        .with_prompt("Event Time (HH:MM)")
        .allow_empty(true)
        .interact_text()?;

    registry.create_event(name, date, time);
    println!("{}", "Event created successfully!".bright_green());
    Ok(())
}

fn add_venue(theme: &ColorfulTheme, registry: &mut PlanningRegistry) -> Result<()> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Venue Name")
        .allow_empty(true)
        .interact_text()?;
    // Typed prompt: non-numeric input re-prompts here and never reaches
    // the core.
    let capacity: u32 = Input::with_theme(theme)
        .with_prompt("Venue Capacity")
        .interact_text()?;
    let facilities_raw: String = Input::with_theme(theme)
        .with_prompt("Facilities (comma-separated)")
        .allow_empty(true)
        .interact_text()?;

    registry.add_venue(name, capacity, &split_facilities(&facilities_raw));
    println!("{}", "Venue added successfully!".bright_green());
    Ok(())
}

fn register_attendee(
    term: &Term,
    theme: &ColorfulTheme,
    registry: &mut PlanningRegistry,
) -> Result<()> {
    let Some(event_index) = select_event(term, theme, registry)? else {
        return Ok(());
    };

    let name: String = Input::with_theme(theme)
        .with_prompt("Attendee Name")
        .allow_empty(true)
        .interact_text()?;
    let email: String = Input::with_theme(theme)
        .with_prompt("Attendee Email")
        .allow_empty(true)
        .interact_text()?;

    let labels: Vec<&str> = AttendeeRole::ALL.iter().map(|role| role.label()).collect();
    let role_choice = Select::with_theme(theme)
        .with_prompt("Select Attendee Type")
        .items(&labels)
        .default(0)
        .interact_on(term)?;
    let selector = AttendeeRole::ALL[role_choice].selector();

    match registry.register_attendee(event_index, name, email, selector) {
        Ok(()) => println!("{}", "Attendee registered successfully!".bright_green()),
        Err(err) => report_registry_error(&err),
    }
    Ok(())
}

fn assign_venue(term: &Term, theme: &ColorfulTheme, registry: &mut PlanningRegistry) -> Result<()> {
    let Some(event_index) = select_event(term, theme, registry)? else {
        return Ok(());
    };
    let Some(venue_index) = select_venue(term, theme, registry)? else {
        return Ok(());
    };

    match registry.assign_venue(event_index, venue_index) {
        Ok(()) => println!("{}", "Venue assigned successfully!".bright_green()),
        Err(err) => report_registry_error(&err),
    }
    Ok(())
}

fn view_event_details(registry: &PlanningRegistry) {
    if registry.events().is_empty() {
        println!("{}", "No events available.".yellow());
        return;
    }

    for details in registry.list_event_details() {
        render_event(&details);
        println!("{}", "---------------------------".dimmed());
    }
}

/// Picks one event by display name; `None` when the collection is empty.
/// The selection index is 0-based and passed to the core unchanged.
fn select_event(
    term: &Term,
    theme: &ColorfulTheme,
    registry: &PlanningRegistry,
) -> Result<Option<usize>> {
    if registry.events().is_empty() {
        println!(
            "{}",
            "No events available. Create an event first.".yellow()
        );
        return Ok(None);
    }

    let names: Vec<&str> = registry.events().iter().map(|event| event.name()).collect();
    let index = Select::with_theme(theme)
        .with_prompt("Select Event")
        .items(&names)
        .default(0)
        .interact_on(term)?;
    Ok(Some(index))
}

fn select_venue(
    term: &Term,
    theme: &ColorfulTheme,
    registry: &PlanningRegistry,
) -> Result<Option<usize>> {
    if registry.venues().is_empty() {
        println!("{}", "No venues available. Add a venue first.".yellow());
        return Ok(None);
    }

    let names: Vec<&str> = registry.venues().iter().map(|venue| venue.name()).collect();
    let index = Select::with_theme(theme)
        .with_prompt("Select Venue")
        .items(&names)
        .default(0)
        .interact_on(term)?;
    Ok(Some(index))
}

fn render_event(details: &EventDetails) {
    println!();
    println!("{} {}", "Event:".bright_cyan(), details.name);
    println!("{} {}", "Date:".bright_cyan(), details.date);
    println!("{} {}", "Time:".bright_cyan(), details.time);
    match &details.venue {
        Some(venue) => {
            println!("{} {}", "Venue:".bright_cyan(), venue.name);
            println!("{} {}", "Capacity:".bright_cyan(), venue.capacity);
            println!(
                "{} {}",
                "Facilities:".bright_cyan(),
                venue.facilities.join(", ")
            );
        }
        None => println!("{} Not assigned yet.", "Venue:".bright_cyan()),
    }
    println!("{}", "Attendees:".bright_cyan());
    for attendee in &details.attendees {
        println!("  {} - {}", attendee.name, attendee.access);
    }
}

/// Splits the raw comma-delimited facilities input before it reaches the
/// core; blank segments are dropped.
fn split_facilities(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn report_registry_error(err: &RegistryError) {
    warn!("event=action_rejected module=cli status=error detail={err:?}");
    println!("{}", format!("{err}. Please try again.").red());
}
