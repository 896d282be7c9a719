use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::clock::{ClockAction, Outcome};
use crate::core::identity::{StoredSession, require_actor};
use crate::core::session::ClockService;
use crate::db::log::ttlog_quiet;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::notifier::TerminalNotifier;
use crate::utils::time::resolve_now;

/// Handle `in`, `lunch-start`, `lunch-end` and `out` for the logged-in user.
///
/// A refused transition is a normal outcome: the notice is shown and the
/// command still succeeds.
pub fn handle(cli: &Cli, cfg: &Config, action: ClockAction) -> AppResult<()> {
    let now = resolve_now(cli.now.as_ref())?;

    let mut store = SqliteStore::open(&cfg.database)?;
    let actor = require_actor(&StoredSession::new(&store))?;
    let namespace = cfg.resolve_namespace(cli.namespace.as_ref(), Some(&actor));
    let policy = cfg.policy()?;

    let mut notifier = TerminalNotifier;
    let outcome = {
        let mut service = ClockService::open(&mut store, &mut notifier, &namespace, policy);
        service.dispatch(&actor, action, now)
    };

    if let Outcome::Accepted { entry, .. } = &outcome {
        ttlog_quiet(
            store.conn(),
            action.operation(),
            &actor.id,
            &format!(
                "{} at {} [{}] entry {}",
                outcome.message(),
                now.format("%Y-%m-%d %H:%M:%S"),
                namespace,
                entry.id
            ),
        );
    }

    Ok(())
}
