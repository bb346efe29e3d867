use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use petdeck::api::{coerce_age, CmdMessage, ConfigAction, MessageLevel, NewPet, NewReminder, PetdeckApi};
use petdeck::commands;
use petdeck::config::PetdeckConfig;
use petdeck::error::{PetdeckError, Result};
use petdeck::id::RandomIds;
use petdeck::model::ChatRole;
use petdeck::render::{ReminderEntry, UiState};
use petdeck::responder::CannedResponder;
use petdeck::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: PetdeckApi<FileStore, RandomIds, CannedResponder>,
    config: PetdeckConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    // A first run against an empty store gets the demo records. The
    // explicit `seed` command reports its outcome, so it skips the
    // silent pass.
    if ctx.config.seed_demo_data && !matches!(cli.command, Some(Commands::Seed)) {
        ctx.api.seed_demo_data()?;
    }

    match cli.command {
        Some(Commands::Show) | None => handle_show(&ctx),
        Some(Commands::AddPet {
            name,
            age,
            breed,
            species,
            notes,
        }) => handle_add_pet(&mut ctx, name, age, breed, species, notes),
        Some(Commands::RemovePet { id }) => handle_remove_pet(&mut ctx, id),
        Some(Commands::AddReminder {
            title,
            pet,
            at,
            freq,
        }) => handle_add_reminder(&mut ctx, title, pet, at, freq),
        Some(Commands::RemoveReminder { id }) => handle_remove_reminder(&mut ctx, id),
        Some(Commands::Chat { text }) => handle_chat(&mut ctx, text),
        Some(Commands::ClearChat { yes }) => handle_clear_chat(&mut ctx, yes),
        Some(Commands::Seed) => handle_seed(&mut ctx),
        Some(Commands::Export { output }) => handle_export(&ctx, output),
        Some(Commands::Import { file }) => handle_import(&mut ctx, file),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "petdeck", "petdeck")
            .ok_or_else(|| PetdeckError::Store("Could not determine data dir".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = PetdeckConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone());
    let api = PetdeckApi::new(store, RandomIds, CannedResponder);

    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

fn handle_show(ctx: &AppContext) -> Result<()> {
    let ui = ctx.api.show()?;
    print_ui(&ui, &ctx.config.bot_name);
    Ok(())
}

fn handle_add_pet(
    ctx: &mut AppContext,
    name: String,
    age: Option<String>,
    breed: String,
    species: String,
    notes: String,
) -> Result<()> {
    let new = NewPet {
        name,
        age: age.as_deref().map(coerce_age).unwrap_or(0),
        breed,
        species,
        notes,
    };
    let result = ctx.api.add_pet(new)?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_remove_pet(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.delete_pet(&id)?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_add_reminder(
    ctx: &mut AppContext,
    title: String,
    pet: String,
    at: String,
    freq: String,
) -> Result<()> {
    let new = NewReminder {
        pet_id: pet,
        title,
        datetime: at,
        freq,
    };
    let result = ctx.api.add_reminder(new)?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_remove_reminder(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.delete_reminder(&id)?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_chat(ctx: &mut AppContext, text: Vec<String>) -> Result<()> {
    let result = ctx.api.send_message(&text.join(" "))?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_clear_chat(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !yes {
        print!("Clear chat? [Y] to confirm: ");
        io::stdout().flush().map_err(PetdeckError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(PetdeckError::Io)?;

        if input.trim() != "Y" {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.clear_chat()?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_seed(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.seed_demo_data()?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export(output)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let result = ctx.api.import(&file)?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("bot-name"), Some(v)) => ConfigAction::SetBotName(v),
        (Some("bot-name"), None) => ConfigAction::ShowAll,
        (Some("seed-demo-data"), Some(v)) => {
            ConfigAction::SetSeedDemoData(v.parse().unwrap_or(false))
        }
        (Some("seed-demo-data"), None) => ConfigAction::ShowAll,
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = commands::config::run(&ctx.data_dir, action)?;
    if let Some(config) = &result.config {
        println!("bot-name = {}", config.bot_name);
        println!("seed-demo-data = {}", config.seed_demo_data);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_result(ctx: &AppContext, result: &commands::CmdResult) {
    if let Some(ui) = &result.ui {
        print_ui(ui, &ctx.config.bot_name);
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 72;

fn print_ui(ui: &UiState, bot_name: &str) {
    println!(
        "{}",
        format!("{} Pets · {} Reminders", ui.total_pets, ui.upcoming_count).bold()
    );

    println!();
    println!("{}", "Pets".bold());
    if ui.pets.is_empty() {
        println!("  {}", "No pets yet.".dimmed());
    }
    for pet in &ui.pets {
        let avatar = if pet.avatar.is_empty() {
            " ".to_string()
        } else {
            pet.avatar.clone()
        };
        let line = format!("{}  {}", pet.name, pet.summary);
        println!(
            "  {} {}  {}",
            format!("[{}]", avatar).cyan(),
            truncate_to_width(&line, LINE_WIDTH),
            pet.id.dimmed()
        );
        if !pet.notes.is_empty() {
            println!("      {}", pet.notes.dimmed());
        }
    }

    println!();
    println!("{}", "Reminders".bold());
    if ui.reminders.is_empty() {
        println!("  {}", "No reminders.".dimmed());
    }
    for rem in &ui.reminders {
        let marker = if rem.upcoming {
            "•".green()
        } else {
            "•".dimmed()
        };
        println!(
            "  {} {}  {}  {}",
            marker,
            truncate_to_width(&rem.title, LINE_WIDTH).bold(),
            format!("{} · {} · {}", rem.owner, format_due(rem), rem.freq).dimmed(),
            rem.id.dimmed()
        );
    }

    println!();
    println!("{}", "Chat".bold());
    for bubble in &ui.chat {
        match bubble.role {
            ChatRole::User => println!("  {} {}", "you:".blue(), bubble.text),
            ChatRole::Bot => {
                println!("  {} {}", format!("{}:", bot_name).magenta(), bubble.text)
            }
        }
    }
}

fn format_due(rem: &ReminderEntry) -> String {
    match rem.due {
        // Overdue reminders also get a humanized age.
        Some(at) if !rem.upcoming => format!("{} ({})", rem.when, format_time_ago(at)),
        _ => rem.when.clone(),
    }
}

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let duration = chrono::Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
