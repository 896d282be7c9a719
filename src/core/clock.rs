//! Attendance clock state machine.
//!
//! `LoggedOut → Active → (OnLunch → Active)? → LoggedOut`
//!
//! Every transition is a pure function of the current ledger, the actor, the
//! requested action and the instant it happens at. Rejections are returned as
//! values and leave the ledger untouched; persistence and user feedback are
//! left to the caller (see `core::session`).

use crate::core::worked::{computed_hours, remaining_until};
use crate::models::actor::Actor;
use crate::models::entry::AttendanceEntry;
use crate::models::status::EntryStatus;
use crate::utils::time::format_remaining;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Business rules applied by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockPolicy {
    /// Net worked time required before a clock-out is accepted.
    pub min_duration: Duration,
}

impl ClockPolicy {
    /// Policy with a minimum of `minutes` (negative values mean no minimum).
    /// `None` when the value does not fit in a duration.
    pub fn from_minutes(minutes: i64) -> Option<Self> {
        Duration::try_minutes(minutes.max(0)).map(|min_duration| Self { min_duration })
    }
}

impl Default for ClockPolicy {
    fn default() -> Self {
        Self {
            min_duration: Duration::minutes(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockAction {
    ClockIn,
    StartLunch,
    EndLunch,
    ClockOut,
}

impl ClockAction {
    /// Operation name used in the internal log.
    pub fn operation(&self) -> &'static str {
        match self {
            ClockAction::ClockIn => "clock_in",
            ClockAction::StartLunch => "lunch_start",
            ClockAction::EndLunch => "lunch_end",
            ClockAction::ClockOut => "clock_out",
        }
    }
}

/// Why a transition was refused. `Display` is the user-facing notice.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClockRejection {
    #[error("Already clocked in today")]
    AlreadyClockedIn,

    #[error("You must be Active to start lunch")]
    NotActive,

    #[error("You must be On Lunch to end lunch")]
    NotOnLunch,

    #[error("You must be Active/On Lunch to clock out")]
    NotClockedIn,

    #[error("Minimum working time not reached: {} remaining", deficit(.remaining))]
    MinimumDurationNotMet { remaining: Duration },

    #[error("Time is earlier than the last recorded time ({})", clock_time(.latest))]
    TimeWentBackwards { latest: NaiveDateTime },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted {
        action: ClockAction,
        entry: AttendanceEntry,
    },
    Rejected {
        action: ClockAction,
        reason: ClockRejection,
    },
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted { .. })
    }

    pub fn action(&self) -> ClockAction {
        match self {
            Outcome::Accepted { action, .. } | Outcome::Rejected { action, .. } => *action,
        }
    }

    /// Notice shown to the user for this outcome.
    pub fn message(&self) -> String {
        match self {
            Outcome::Accepted { action, entry } => match action {
                ClockAction::ClockIn => "Clocked in".to_string(),
                ClockAction::StartLunch => "Lunch started".to_string(),
                ClockAction::EndLunch => "Lunch ended".to_string(),
                ClockAction::ClockOut => format!("Clocked out ({})", entry.hours_str()),
            },
            Outcome::Rejected { reason, .. } => reason.to_string(),
        }
    }
}

/// Ordered attendance history of one namespace, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<AttendanceEntry>,
}

impl Ledger {
    pub fn new(entries: Vec<AttendanceEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[AttendanceEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<AttendanceEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The actor's session for `date`: the open one if any, else the newest.
    pub fn today_entry(&self, actor_id: &str, date: NaiveDate) -> Option<&AttendanceEntry> {
        self.open_index(actor_id, date)
            .map(|i| &self.entries[i])
            .or_else(|| self.entries.iter().find(|e| e.belongs_to(actor_id, date)))
    }

    /// Status the actor is in for `date` (`LoggedOut` when no session exists).
    pub fn today_status(&self, actor_id: &str, date: NaiveDate) -> EntryStatus {
        self.today_entry(actor_id, date)
            .map(|e| e.status)
            .unwrap_or(EntryStatus::LoggedOut)
    }

    fn open_index(&self, actor_id: &str, date: NaiveDate) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.belongs_to(actor_id, date) && e.is_open())
    }

    fn next_id(&self, now: NaiveDateTime) -> String {
        let mut millis = now.and_utc().timestamp_millis().max(0) as u64;
        loop {
            let candidate = to_base36(millis);
            if !self.entries.iter().any(|e| e.id == candidate) {
                return candidate;
            }
            millis += 1;
        }
    }
}

/// Apply `action` for `actor` at `now`. On rejection the returned ledger is
/// equal to `ledger`.
pub fn apply(
    ledger: &Ledger,
    actor: &Actor,
    action: ClockAction,
    now: NaiveDateTime,
    policy: &ClockPolicy,
) -> (Ledger, Outcome) {
    let result = match action {
        ClockAction::ClockIn => clock_in(ledger, actor, now),
        ClockAction::StartLunch => start_lunch(ledger, actor, now),
        ClockAction::EndLunch => end_lunch(ledger, actor, now),
        ClockAction::ClockOut => clock_out(ledger, actor, now, policy),
    };

    match result {
        Ok((next, entry)) => (next, Outcome::Accepted { action, entry }),
        Err(reason) => (ledger.clone(), Outcome::Rejected { action, reason }),
    }
}

type Transition = Result<(Ledger, AttendanceEntry), ClockRejection>;

fn clock_in(ledger: &Ledger, actor: &Actor, now: NaiveDateTime) -> Transition {
    if ledger.open_index(&actor.id, now.date()).is_some() {
        return Err(ClockRejection::AlreadyClockedIn);
    }

    let entry = AttendanceEntry::open(ledger.next_id(now), actor, now);

    let mut entries = Vec::with_capacity(ledger.len() + 1);
    entries.push(entry.clone());
    entries.extend(ledger.entries.iter().cloned());

    Ok((Ledger::new(entries), entry))
}

fn start_lunch(ledger: &Ledger, actor: &Actor, now: NaiveDateTime) -> Transition {
    update_open(ledger, actor, now, ClockRejection::NotActive, |entry| {
        if entry.status != EntryStatus::Active {
            return Err(ClockRejection::NotActive);
        }
        not_before_latest(entry, now)?;
        // one lunch interval per session: the first start is kept
        if entry.lunch_start_time.is_none() {
            entry.lunch_start_time = Some(now);
        }
        entry.status = EntryStatus::OnLunch;
        Ok(())
    })
}

fn end_lunch(ledger: &Ledger, actor: &Actor, now: NaiveDateTime) -> Transition {
    update_open(ledger, actor, now, ClockRejection::NotOnLunch, |entry| {
        if entry.status != EntryStatus::OnLunch {
            return Err(ClockRejection::NotOnLunch);
        }
        not_before_latest(entry, now)?;
        if entry.lunch_end_time.is_none() {
            entry.lunch_end_time = Some(now);
        }
        entry.status = EntryStatus::Active;
        Ok(())
    })
}

fn clock_out(
    ledger: &Ledger,
    actor: &Actor,
    now: NaiveDateTime,
    policy: &ClockPolicy,
) -> Transition {
    update_open(ledger, actor, now, ClockRejection::NotClockedIn, |entry| {
        not_before_latest(entry, now)?;

        let remaining = remaining_until(entry, now, policy.min_duration);
        if remaining > Duration::zero() {
            return Err(ClockRejection::MinimumDurationNotMet { remaining });
        }

        // clocking out on lunch closes the lunch at the same instant
        if entry.lunch_start_time.is_some() && entry.lunch_end_time.is_none() {
            entry.lunch_end_time = Some(now);
        }
        if entry.clock_out_time.is_none() {
            entry.clock_out_time = Some(now);
        }

        let out = entry.clock_out_time.unwrap_or(now);
        entry.computed_hours = Some(computed_hours(entry, out));
        entry.status = EntryStatus::LoggedOut;
        Ok(())
    })
}

/// Run `mutate` on a copy of the actor's open session for today and splice it
/// back in place. `missing` is returned when there is no open session.
fn update_open<F>(
    ledger: &Ledger,
    actor: &Actor,
    now: NaiveDateTime,
    missing: ClockRejection,
    mutate: F,
) -> Transition
where
    F: FnOnce(&mut AttendanceEntry) -> Result<(), ClockRejection>,
{
    let idx = ledger.open_index(&actor.id, now.date()).ok_or(missing)?;

    let mut entry = ledger.entries[idx].clone();
    mutate(&mut entry)?;

    let mut entries = ledger.entries.clone();
    entries[idx] = entry.clone();

    Ok((Ledger::new(entries), entry))
}

/// An open session's instants only move forward: `now` may not precede the
/// latest one already recorded.
fn not_before_latest(entry: &AttendanceEntry, now: NaiveDateTime) -> Result<(), ClockRejection> {
    let latest = [
        entry.clock_in_time,
        entry.lunch_start_time,
        entry.lunch_end_time,
    ]
    .into_iter()
    .flatten()
    .max();

    match latest {
        Some(latest) if now < latest => Err(ClockRejection::TimeWentBackwards { latest }),
        _ => Ok(()),
    }
}

fn clock_time(t: &NaiveDateTime) -> String {
    t.format("%H:%M:%S").to_string()
}

fn deficit(remaining: &Duration) -> String {
    format_remaining(*remaining)
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if n == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
