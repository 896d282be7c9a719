use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::identity::{IdentityProvider, StoredSession, require_actor};
use crate::core::report::{ReportQuery, load_for_view, render_table};
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::time::resolve_now;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        filter,
        search,
        mine,
    } = &cli.command
    {
        let today = resolve_now(cli.now.as_ref())?.date();
        let store = SqliteStore::open(&cfg.database)?;
        let session = StoredSession::new(&store);

        let actor_id = if *mine {
            Some(require_actor(&session)?.id)
        } else {
            None
        };

        let actor = session.current_actor();
        let namespace = cfg.resolve_namespace(cli.namespace.as_ref(), actor.as_ref());
        let entries = load_for_view(&store, &namespace, &cfg.legacy_namespace)?;

        if entries.is_empty() {
            info(format!("No attendance records yet in '{}'.", namespace));
            return Ok(());
        }

        let query = ReportQuery {
            filter: *filter,
            search: search.clone(),
            actor_id,
        };
        let rows = query.apply(&entries, today);

        if rows.is_empty() {
            info("No results match your search/filter.");
            return Ok(());
        }

        print!("{}", render_table(&rows));
        println!("\n{} of {} entries ({})", rows.len(), entries.len(), namespace);
    }
    Ok(())
}
