mod config;
mod error;
mod models;
mod operations;
mod store;

use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use config::LedgerConfig;
use operations::add::{TransactionInput, submit_transaction};
use operations::aggregate::{
    DEFAULT_RECENT_LIMIT, category_breakdown, filter_by_month, recent_transactions, summarize,
};
use operations::export::write_export;
use operations::goal::{GoalInput, submit_goal};
use store::ledger::LedgerStore;
use store::user::UserContext;

#[derive(Parser)]
#[command(name = "ledger", about = "Household income/expense ledger with savings goals")]
struct Cli {
    /// Directory holding the ledger data files
    #[arg(long, default_value = "ledger_data")]
    data_dir: PathBuf,
}

pub enum UserCommands {
    Add,
    Goal,
    EditGoal,
    Delete,
    DeleteGoal,
    Summary,
    Chart,
    Recent,
    User,
    Export,
    Print,
    Exit,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("household_ledger=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = LedgerConfig::default();
    let mut store = LedgerStore::open(&cli.data_dir).expect("Failed to open the ledger store");
    let mut users = UserContext::load(&cli.data_dir, &config);

    println!("Welcome to the household ledger!");

    loop {
        println!(
            "Please enter a command (add, goal, editgoal, delete, delgoal, summary, chart, recent, user, export, print, exit):"
        );

        let input = match read_user_input() {
            Ok(cmd) => cmd,
            Err(e) => {
                println!("Error reading input: {}", e);
                continue;
            }
        };
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }
        let command = match check_for_command(parts[0]) {
            Some(command) => command,
            None => {
                println!("No valid command found.");
                continue;
            }
        };
        match command {
            UserCommands::Add => {
                println!(
                    "Add command selected. Please enter transaction details in the format:\ndate(YYYY-MM-DD), description, amount, type(income/expense), category"
                );
                let details = match read_user_input() {
                    Ok(details) => details,
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                match add_transaction(&mut store, &config, users.current(), &details) {
                    Ok(()) => println!("Transaction added successfully!"),
                    Err(e) => {
                        println!("Error adding transaction: {}", e);
                        println!("Please try again.");
                    }
                }
            }
            UserCommands::Goal => {
                println!(
                    "Goal command selected. Please enter goal details in the format:\nname, target, current[, date(YYYY-MM-DD)]"
                );
                let details = match read_user_input() {
                    Ok(details) => details,
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                match save_goal(&mut store, None, &details) {
                    Ok(()) => println!("Goal saved successfully!"),
                    Err(e) => println!("Error saving goal: {}", e),
                }
            }
            UserCommands::EditGoal => {
                println!(
                    "Edit goal command selected. Please enter goal details in the format:\nid, name, target, current[, date(YYYY-MM-DD)]"
                );
                let details = match read_user_input() {
                    Ok(details) => details,
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                let (id, rest) = match details.split_once(',') {
                    Some((id, rest)) => (id.trim().to_string(), rest.to_string()),
                    None => {
                        println!("Error: expected an id followed by the goal details");
                        continue;
                    }
                };
                match save_goal(&mut store, Some(id), &rest) {
                    Ok(()) => println!("Goal updated successfully!"),
                    Err(e) => println!("Error updating goal: {}", e),
                }
            }
            UserCommands::Delete => {
                println!("Delete command selected. Provide the transaction ID to remove:");
                let id = match read_user_input() {
                    Ok(details) => details,
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                if !confirm_deletion() {
                    println!("Deletion cancelled.");
                    continue;
                }
                match store.remove_transaction(id.trim()) {
                    Ok(()) => println!("Transaction removed successfully."),
                    Err(e) => println!("Error: {}", e),
                }
            }
            UserCommands::DeleteGoal => {
                println!("Delete goal command selected. Provide the goal ID to remove:");
                let id = match read_user_input() {
                    Ok(details) => details,
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                if !confirm_deletion() {
                    println!("Deletion cancelled.");
                    continue;
                }
                match store.remove_goal(id.trim()) {
                    Ok(()) => println!("Goal removed successfully."),
                    Err(e) => println!("Error: {}", e),
                }
            }
            UserCommands::Summary => {
                let reference = match read_month() {
                    Some(reference) => reference,
                    None => {
                        println!("Invalid month. Please use YYYY-MM.");
                        continue;
                    }
                };
                let filtered = filter_by_month(store.transactions(), reference);
                let summary = summarize(filtered);
                println!("Summary for {}:", reference.format("%Y-%m"));
                println!("  income:  {}", summary.income);
                println!("  expense: {}", summary.expense);
                println!("  balance: {}", summary.balance);
            }
            UserCommands::Chart => {
                let reference = match read_month() {
                    Some(reference) => reference,
                    None => {
                        println!("Invalid month. Please use YYYY-MM.");
                        continue;
                    }
                };
                let filtered = filter_by_month(store.transactions(), reference);
                let breakdown = category_breakdown(filtered, &config.expense_categories);
                println!("Expenses by category for {}:", reference.format("%Y-%m"));
                for (category, total) in breakdown {
                    println!("  {}: {}", category, total);
                }
            }
            UserCommands::Recent => {
                println!("Most recent transactions:");
                for transaction in recent_transactions(store.transactions(), DEFAULT_RECENT_LIMIT)
                {
                    println!(
                        "  {} | {} | {} | {} | {} | {} | {}",
                        transaction.id,
                        transaction.date,
                        transaction.description,
                        transaction.amount,
                        transaction.transaction_type.as_str(),
                        transaction.category,
                        transaction.user,
                    );
                }
            }
            UserCommands::User => {
                println!(
                    "Current user is '{}'. Enter the user to switch to ({}):",
                    users.current(),
                    config.users.join(", ")
                );
                let name = match read_user_input() {
                    Ok(name) => name,
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                match users.set(name.trim(), &config) {
                    Ok(()) => println!("Switched to user '{}'.", users.current()),
                    Err(e) => println!("Error: {}", e),
                }
            }
            UserCommands::Export => {
                println!("Export command selected. Enter the output file path (blank for dados_financeiros.json):");
                let path = match read_user_input() {
                    Ok(path) if path.trim().is_empty() => "dados_financeiros.json".to_string(),
                    Ok(path) => path.trim().to_string(),
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                match write_export(store.state(), PathBuf::from(&path).as_path()) {
                    Ok(()) => println!("Exported ledger to {}.", path),
                    Err(e) => println!("Error exporting ledger: {}", e),
                }
            }
            UserCommands::Print => {
                println!("Current transactions:");
                for transaction in store.transactions() {
                    println!("{:?}", transaction);
                }
                println!("Current goals:");
                for goal in store.goals() {
                    let percent = (goal.progress() * Decimal::from(100)).round_dp(0);
                    println!(
                        "  {} | {} | {}/{} ({}%)",
                        goal.id, goal.name, goal.current, goal.target, percent
                    );
                }
            }
            UserCommands::Exit => {
                println!("Exiting the application.");
                break;
            }
        }
    }
}

fn add_transaction(
    store: &mut LedgerStore,
    config: &LedgerConfig,
    current_user: &str,
    details: &str,
) -> Result<(), error::LedgerError> {
    let parts: Vec<&str> = details.split(',').map(|s| s.trim()).collect();
    if parts.len() != 5 {
        return Err(error::LedgerError::Validation(format!(
            "Expected 5 details separated by commas but got {}",
            parts.len()
        )));
    }

    let input = TransactionInput {
        date: parts[0].to_string(),
        description: parts[1].to_string(),
        amount: parts[2].to_string(),
        transaction_type: parts[3].to_string(),
        category: parts[4].to_string(),
        user: None,
    };

    let transaction = submit_transaction(config, current_user, &input)?;
    store.append_transaction(transaction)
}

fn save_goal(
    store: &mut LedgerStore,
    id: Option<String>,
    details: &str,
) -> Result<(), error::LedgerError> {
    let parts: Vec<&str> = details.split(',').map(|s| s.trim()).collect();
    if parts.len() < 3 || parts.len() > 4 {
        return Err(error::LedgerError::Validation(format!(
            "Expected 3 or 4 details separated by commas but got {}",
            parts.len()
        )));
    }

    let input = GoalInput {
        id,
        name: parts[0].to_string(),
        target: parts[1].to_string(),
        current: parts[2].to_string(),
        date: parts.get(3).unwrap_or(&"").to_string(),
    };

    let goal = submit_goal(store.goals(), &input)?;
    store.upsert_goal(goal)
}

fn read_user_input() -> Result<String, String> {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|_| "Failed to read line".to_string())?;
    Ok(input.trim().to_string())
}

/// Prompts for a reference month; blank means the current one.
fn read_month() -> Option<NaiveDate> {
    println!("Enter a month (YYYY-MM, blank for the current month):");
    let input = read_user_input().ok()?;
    let input = input.trim();
    if input.is_empty() {
        return Some(chrono::Local::now().date_naive());
    }
    NaiveDate::parse_from_str(&format!("{}-01", input), "%Y-%m-%d").ok()
}

fn confirm_deletion() -> bool {
    println!("This cannot be undone. Confirm? (y/n)");
    matches!(read_user_input().as_deref(), Ok("y") | Ok("Y"))
}

fn check_for_command(input: &str) -> Option<UserCommands> {
    match input {
        "add" => Some(UserCommands::Add),
        "goal" => Some(UserCommands::Goal),
        "editgoal" => Some(UserCommands::EditGoal),
        "delete" => Some(UserCommands::Delete),
        "delgoal" => Some(UserCommands::DeleteGoal),
        "summary" => Some(UserCommands::Summary),
        "chart" => Some(UserCommands::Chart),
        "recent" => Some(UserCommands::Recent),
        "user" => Some(UserCommands::User),
        "export" => Some(UserCommands::Export),
        "print" => Some(UserCommands::Print),
        "exit" => Some(UserCommands::Exit),
        _ => None,
    }
}
