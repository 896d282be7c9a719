use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::identity::{StoredSession, require_actor};
use crate::core::session::ClockService;
use crate::core::worked::{net_worked, remaining_until};
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::status::EntryStatus;
use crate::ui::messages::header;
use crate::ui::notifier::TerminalNotifier;
use crate::utils::colors::colorize_status;
use crate::utils::formatting::duration_readable;
use crate::utils::time::{format_remaining, resolve_now};
use chrono::Duration;

/// Show today's status for the logged-in user.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let now = resolve_now(cli.now.as_ref())?;
    let today = now.date();

    let mut store = SqliteStore::open(&cfg.database)?;
    let actor = require_actor(&StoredSession::new(&store))?;
    let namespace = cfg.resolve_namespace(cli.namespace.as_ref(), Some(&actor));
    let policy = cfg.policy()?;

    let mut notifier = TerminalNotifier;
    let service = ClockService::open(&mut store, &mut notifier, &namespace, policy);

    header(format!("{} ({}) - {}", actor.name, actor.id, today));
    println!("Status      : {}", colorize_status(service.today_status(&actor, today).label()));

    let Some(entry) = service.today_entry(&actor, today) else {
        println!("No attendance recorded today.");
        return Ok(());
    };

    println!("Clock in    : {}", entry.clock_in_str());
    println!("Lunch       : {} → {}", entry.lunch_start_str(), entry.lunch_end_str());
    println!("Clock out   : {}", entry.clock_out_str());

    match entry.status {
        EntryStatus::LoggedOut => println!("Worked      : {}", entry.hours_str()),
        EntryStatus::Active | EntryStatus::OnLunch => {
            println!("Worked      : {}", duration_readable(net_worked(entry, now)));

            let remaining = remaining_until(entry, now, policy.min_duration);
            if remaining > Duration::zero() {
                println!("Clock-out in: {}", format_remaining(remaining));
            }
        }
    }

    Ok(())
}
