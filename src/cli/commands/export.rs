use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::identity::{IdentityProvider, StoredSession, require_actor};
use crate::core::report::load_for_view;
use crate::db::log::ttlog_quiet;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        mine,
        force,
    } = &cli.command
    {
        let store = SqliteStore::open(&cfg.database)?;
        let session = StoredSession::new(&store);

        let actor = if *mine {
            Some(require_actor(&session)?)
        } else {
            session.current_actor()
        };
        let namespace = cfg.resolve_namespace(cli.namespace.as_ref(), actor.as_ref());

        let mut entries = load_for_view(&store, &namespace, &cfg.legacy_namespace)?;
        if *mine && let Some(a) = &actor {
            entries.retain(|e| e.actor_id == a.id);
        }

        if ExportLogic::export(&entries, *format, file, *force)? {
            ttlog_quiet(
                store.conn(),
                "export",
                &namespace,
                &format!("{} entries → {} ({})", entries.len(), file, format.as_str()),
            );
        }
    }
    Ok(())
}
