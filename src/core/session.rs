use crate::core::clock::{self, ClockAction, ClockPolicy, Ledger, Outcome};
use crate::db::store::RecordStore;
use crate::models::actor::Actor;
use crate::models::entry::AttendanceEntry;
use crate::models::status::EntryStatus;
use crate::ui::notifier::{Level, Notifier};
use chrono::{NaiveDate, NaiveDateTime};

/// Clock state of one namespace, synchronized to a record store.
///
/// The ledger in memory is authoritative for the lifetime of the service: a
/// failed save is reported as a warning and the session carries on. Loads and
/// saves are plain read-modify-write, two processes writing the same namespace
/// will overwrite each other.
pub struct ClockService<'a, S: RecordStore, N: Notifier> {
    store: &'a mut S,
    notifier: &'a mut N,
    namespace: String,
    policy: ClockPolicy,
    ledger: Ledger,
}

impl<'a, S: RecordStore, N: Notifier> ClockService<'a, S, N> {
    pub fn open(
        store: &'a mut S,
        notifier: &'a mut N,
        namespace: &str,
        policy: ClockPolicy,
    ) -> Self {
        let entries = match store.load::<AttendanceEntry>(namespace) {
            Ok(v) => v,
            Err(e) => {
                notifier.notify(
                    Level::Warning,
                    &format!("Could not read attendance '{}': {}", namespace, e),
                );
                Vec::new()
            }
        };

        Self {
            store,
            notifier,
            namespace: namespace.to_string(),
            policy,
            ledger: Ledger::new(entries),
        }
    }

    pub fn clock_in(&mut self, actor: &Actor, now: NaiveDateTime) -> Outcome {
        self.dispatch(actor, ClockAction::ClockIn, now)
    }

    pub fn start_lunch(&mut self, actor: &Actor, now: NaiveDateTime) -> Outcome {
        self.dispatch(actor, ClockAction::StartLunch, now)
    }

    pub fn end_lunch(&mut self, actor: &Actor, now: NaiveDateTime) -> Outcome {
        self.dispatch(actor, ClockAction::EndLunch, now)
    }

    pub fn clock_out(&mut self, actor: &Actor, now: NaiveDateTime) -> Outcome {
        self.dispatch(actor, ClockAction::ClockOut, now)
    }

    pub fn dispatch(&mut self, actor: &Actor, action: ClockAction, now: NaiveDateTime) -> Outcome {
        let (next, outcome) = clock::apply(&self.ledger, actor, action, now, &self.policy);

        match &outcome {
            Outcome::Accepted { .. } => {
                self.ledger = next;
                self.persist();
                self.notifier.notify(Level::Success, &outcome.message());
            }
            Outcome::Rejected { .. } => {
                self.notifier.notify(Level::Error, &outcome.message());
            }
        }

        outcome
    }

    pub fn entries(&self) -> &[AttendanceEntry] {
        self.ledger.entries()
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn today_entry(&self, actor: &Actor, today: NaiveDate) -> Option<&AttendanceEntry> {
        self.ledger.today_entry(&actor.id, today)
    }

    pub fn today_status(&self, actor: &Actor, today: NaiveDate) -> EntryStatus {
        self.ledger.today_status(&actor.id, today)
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.namespace, self.ledger.entries()) {
            self.notifier.notify(
                Level::Warning,
                &format!(
                    "Attendance not saved ({}); changes are kept for this session only",
                    e
                ),
            );
        }
    }
}
