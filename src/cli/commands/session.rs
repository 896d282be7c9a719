use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::identity::{IdentityProvider, StoredSession, login, logout};
use crate::db::log::ttlog_quiet;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::actor::Role;
use crate::ui::messages::{info, success};
use crate::utils::formatting::{bold, describe_role};

/// Handle `login`, `logout` and `whoami`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut store = SqliteStore::open(&cfg.database)?;

    match cmd {
        Commands::Login { id, name, role } => {
            let role = Role::from_code(role)?;
            let actor = login(&mut store, id, name, role)?;

            ttlog_quiet(store.conn(), "login", &actor.id, &format!("{} logged in", actor.name));
            success(format!(
                "Logged in as {} ({}, {})",
                actor.name,
                actor.id,
                describe_role(actor.role.as_str())
            ));
        }
        Commands::Logout => {
            let previous = StoredSession::new(&store).current_actor();
            logout(&mut store)?;

            match previous {
                Some(actor) => {
                    ttlog_quiet(store.conn(), "logout", &actor.id, "logged out");
                    success(format!("Logged out {}", actor.name));
                }
                None => info("No user was logged in."),
            }
        }
        Commands::Whoami => match StoredSession::new(&store).current_actor() {
            Some(actor) => {
                println!(
                    "{} {} ({})",
                    bold(&actor.name),
                    actor.id,
                    describe_role(actor.role.as_str())
                );
                println!(
                    "Namespace: {}",
                    cfg.resolve_namespace(None, Some(&actor))
                );
            }
            None => info("Not logged in."),
        },
        _ => {}
    }

    Ok(())
}
