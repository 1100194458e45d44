use chrono::{Local, NaiveTime, Utc};
use clap::Parser;
use medtrack_core::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "medtrack")]
#[command(about = "Personal medication tracking session", long_about = None)]
struct Cli {
    /// Path to a config file (defaults to the standard location)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override export directory
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Override low-stock alert threshold
    #[arg(long)]
    threshold: Option<u32>,
}

fn main() -> Result<()> {
    // Initialize logging
    medtrack_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let export_dir = cli
        .export_dir
        .unwrap_or_else(|| config.export.directory.clone());
    let threshold = cli.threshold.unwrap_or(config.stock.threshold);

    let mut state = AppState::default();

    println!("Medication tracker - type 'help' for commands, 'quit' to end the session.");
    println!("(State lives for this session only.)");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_session(&mut input, &mut state, &export_dir, threshold)
}

fn run_session<R: BufRead>(
    input: &mut R,
    state: &mut AppState,
    export_dir: &PathBuf,
    threshold: u32,
) -> Result<()> {
    loop {
        let Some(line) = prompt_line(input, "medtrack> ")? else {
            break;
        };

        let mut parts = line.trim().splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or("");
        let rest = parts.next().unwrap_or("").trim();
        tracing::debug!("Dispatching command '{}'", command);

        match command {
            "" => {}
            "help" => print_help(),
            "quit" | "exit" => break,
            "add" => cmd_add(input, state)?,
            "list" => cmd_list(state, rest),
            "edit" => cmd_edit(input, state, rest)?,
            "log" => cmd_log(state, rest),
            "remind" => cmd_remind(state, rest),
            "due" => cmd_due(state),
            "ack" => cmd_ack(state, rest)?,
            "stock" => cmd_stock(state, rest, threshold),
            "history" => cmd_history(state),
            "adherence" => cmd_adherence(state),
            "export" => cmd_export(state, rest, export_dir)?,
            other => println!("Unknown command '{}'. Type 'help' for a list.", other),
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  add              add a medication (prompts for fields)");
    println!("  list [term]      list medications, optionally filtered by name");
    println!("  edit N           edit dosage/notes/stock of entry N");
    println!("  log NAME         record that a dose of NAME was taken now");
    println!("  remind HH:MM     set a reminder for every medication");
    println!("  due              show reminders whose time has passed");
    println!("  ack NAME         mark the pending reminder for NAME as taken");
    println!("  stock [T]        show medications at or below the stock threshold");
    println!("  history          show the intake history");
    println!("  adherence        show the adherence rate");
    println!("  export csv|pdf   write the medication list snapshot");
    println!("  quit             end the session");
}

fn cmd_add<R: BufRead>(input: &mut R, state: &mut AppState) -> Result<()> {
    let name = ask(input, "Medication name: ")?;
    let dosage = ask(input, "Dosage (e.g., 1 tablet): ")?;

    let stock_raw = ask(input, "Stock (units): ")?;
    let stock: u32 = match stock_raw.trim().parse() {
        Ok(n) => n,
        Err(_) => {
            println!("✗ Stock must be a whole number of units.");
            return Ok(());
        }
    };

    let times_raw = ask(
        input,
        "Intake times (morning/afternoon/evening/night, comma-separated): ",
    )?;
    let mut intake_times = Vec::new();
    for part in times_raw.split(',').filter(|p| !p.trim().is_empty()) {
        match IntakePeriod::parse(part) {
            Some(period) => intake_times.push(period),
            None => {
                println!("✗ Unknown intake time '{}'.", part.trim());
                return Ok(());
            }
        }
    }

    let notes = ask(input, "Notes (e.g., take with food): ")?;

    let category_raw = ask(input, "Category (prescription/otc/vitamins/others): ")?;
    let category = if category_raw.trim().is_empty() {
        Category::Others
    } else {
        match Category::parse(&category_raw) {
            Some(c) => c,
            None => {
                println!("✗ Unknown category '{}'.", category_raw.trim());
                return Ok(());
            }
        }
    };

    let image_raw = ask(input, "Image path (optional): ")?;
    let image = if image_raw.trim().is_empty() {
        None
    } else {
        Some(PathBuf::from(image_raw.trim()))
    };

    match state.add_medication(NewMedication {
        name: name.trim().to_string(),
        dosage: dosage.trim().to_string(),
        stock,
        intake_times,
        notes: notes.trim().to_string(),
        category,
        image,
    }) {
        Ok(()) => println!("✓ Medication '{}' added!", name.trim()),
        Err(e) => println!("✗ {}", e),
    }

    Ok(())
}

fn cmd_list(state: &AppState, term: &str) {
    let matches = state.search(term);
    if matches.is_empty() {
        if term.is_empty() {
            println!("No medications registered.");
        } else {
            println!("No medications matching '{}'.", term);
        }
        return;
    }

    println!(
        "{:<4} {:<20} {:<16} {:>6}  {:<18} {}",
        "#", "Name", "Dosage", "Stock", "Category", "Notes"
    );
    for (i, med) in matches.iter().enumerate() {
        println!(
            "{:<4} {:<20} {:<16} {:>6}  {:<18} {}",
            i + 1,
            med.name,
            med.dosage,
            med.stock,
            med.category.to_string(),
            med.notes
        );
    }
}

fn cmd_edit<R: BufRead>(input: &mut R, state: &mut AppState, arg: &str) -> Result<()> {
    let Ok(display_index) = arg.trim().parse::<usize>() else {
        println!("Usage: edit N  (entry number from 'list')");
        return Ok(());
    };
    if display_index == 0 {
        println!("Entry numbers start at 1.");
        return Ok(());
    }

    let dosage = ask(input, "New dosage (blank keeps current): ")?;
    let notes = ask(input, "New notes (blank keeps current): ")?;
    let stock_raw = ask(input, "New stock (blank keeps current): ")?;

    let stock = if stock_raw.trim().is_empty() {
        None
    } else {
        match stock_raw.trim().parse::<u32>() {
            Ok(n) => Some(n),
            Err(_) => {
                println!("✗ Stock must be a whole number of units.");
                return Ok(());
            }
        }
    };

    let edit = MedicationEdit {
        dosage: non_empty(dosage),
        notes: non_empty(notes),
        stock,
    };

    match state.edit_medication(display_index - 1, edit) {
        Ok(()) => println!("✓ Medication updated."),
        Err(e) => println!("✗ {}", e),
    }

    Ok(())
}

fn cmd_log(state: &mut AppState, name: &str) {
    if name.is_empty() {
        println!("Usage: log NAME");
        return;
    }

    state.log_intake(name, Utc::now());
    println!("✓ Logged intake of '{}'.", name);
}

fn cmd_remind(state: &mut AppState, raw: &str) {
    let Ok(time) = NaiveTime::parse_from_str(raw.trim(), "%H:%M") else {
        println!("Usage: remind HH:MM");
        return;
    };

    let created = state.set_reminders(time);
    if created == 0 {
        println!("No medications registered - nothing to remind.");
    } else {
        println!("✓ Reminder set for all {} medications at {}.", created, raw.trim());
    }
}

fn cmd_due(state: &AppState) {
    let now = Local::now().time();
    let due = state.due_reminders(now);
    if due.is_empty() {
        println!("No reminders due.");
        return;
    }

    for reminder in due {
        println!("Time to take {}! (due {})", reminder.name, reminder.time.format("%H:%M"));
    }
}

fn cmd_ack(state: &mut AppState, name: &str) -> Result<()> {
    if name.is_empty() {
        println!("Usage: ack NAME");
        return Ok(());
    }

    let id = state
        .reminders
        .iter()
        .find(|r| !r.completed && r.name == name)
        .map(|r| r.id);

    match id {
        Some(id) => {
            state.acknowledge(id, Utc::now())?;
            println!("✓ Marked {} as taken.", name);
        }
        None => println!("No pending reminder for '{}'.", name),
    }

    Ok(())
}

fn cmd_stock(state: &AppState, arg: &str, default_threshold: u32) {
    let threshold = if arg.is_empty() {
        default_threshold
    } else {
        match arg.trim().parse::<u32>() {
            Ok(n) => n,
            Err(_) => {
                println!("Usage: stock [THRESHOLD]");
                return;
            }
        }
    };

    let low = state.low_stock(threshold);
    if low.is_empty() {
        println!("No medications at or below {} units.", threshold);
        return;
    }

    for med in low {
        println!(
            "⚠ Low Stock Alert: Only {} units left for {}!",
            med.stock, med.name
        );
    }
}

fn cmd_history(state: &AppState) {
    let records = state.intake_records();
    if records.is_empty() {
        println!("No intake history available.");
        return;
    }

    println!("{:<20} {:<12} {}", "Name", "Date", "Time");
    for record in records {
        println!(
            "{:<20} {:<12} {}",
            record.name,
            record.date.to_string(),
            record.time.format("%H:%M:%S")
        );
    }
}

fn cmd_adherence(state: &AppState) {
    match state.adherence_rate() {
        Some(rate) => println!("Adherence Rate: {:.2}%", rate),
        None => println!("Set reminders and take medications to track adherence."),
    }
}

fn cmd_export(state: &AppState, format: &str, export_dir: &PathBuf) -> Result<()> {
    match format.trim() {
        "csv" => {
            let path = export_dir.join(CSV_FILE_NAME);
            write_csv(&path, &state.medications)?;
            println!("✓ Exported to {}", path.display());
        }
        "pdf" => {
            let path = export_dir.join(PDF_FILE_NAME);
            write_pdf(&path, &state.medications)?;
            println!("✓ Exported to {}", path.display());
        }
        _ => println!("Usage: export csv|pdf"),
    }

    Ok(())
}

/// Print a prompt and read one line; None means end of input
fn prompt_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Prompt for a field value; end of input counts as a blank answer
fn ask<R: BufRead>(input: &mut R, prompt: &str) -> Result<String> {
    Ok(prompt_line(input, prompt)?.unwrap_or_default())
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
