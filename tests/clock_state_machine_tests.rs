use chrono::Duration;
use rattendance::core::clock::{self, ClockAction, ClockPolicy, ClockRejection, Ledger, Outcome};
use rattendance::models::status::EntryStatus;

mod common;
use common::{alice, at, bob, day, run_accepted};

fn policy() -> ClockPolicy {
    ClockPolicy::from_minutes(1).unwrap()
}

#[test]
fn test_clock_in_creates_active_entry() {
    let ledger = Ledger::default();

    let (next, outcome) = clock::apply(&ledger, &alice(), ClockAction::ClockIn, at(9, 0, 0), &policy());

    assert!(outcome.is_accepted());
    assert_eq!(outcome.message(), "Clocked in");
    assert_eq!(next.len(), 1);

    let e = &next.entries()[0];
    assert_eq!(e.actor_id, "E001");
    assert_eq!(e.actor_name, "Alice");
    assert_eq!(e.date, day());
    assert_eq!(e.clock_in_time, Some(at(9, 0, 0)));
    assert_eq!(e.status, EntryStatus::Active);
    assert!(e.lunch_start_time.is_none());
    assert!(e.clock_out_time.is_none());
    assert!(e.computed_hours.is_none());
    assert!(!e.id.is_empty());
}

#[test]
fn test_second_clock_in_is_rejected_while_open() {
    let ledger = run_accepted(Ledger::default(), &alice(), &[(ClockAction::ClockIn, at(9, 0, 0))], &policy());

    let (next, outcome) = clock::apply(&ledger, &alice(), ClockAction::ClockIn, at(9, 5, 0), &policy());

    assert_eq!(
        outcome,
        Outcome::Rejected {
            action: ClockAction::ClockIn,
            reason: ClockRejection::AlreadyClockedIn
        }
    );
    assert_eq!(outcome.message(), "Already clocked in today");
    assert_eq!(next, ledger);
    assert_eq!(next.len(), 1);
}

#[test]
fn test_clock_in_rejected_while_on_lunch() {
    let ledger = run_accepted(
        Ledger::default(),
        &alice(),
        &[
            (ClockAction::ClockIn, at(9, 0, 0)),
            (ClockAction::StartLunch, at(12, 0, 0)),
        ],
        &policy(),
    );

    let (next, outcome) = clock::apply(&ledger, &alice(), ClockAction::ClockIn, at(12, 10, 0), &policy());

    assert!(!outcome.is_accepted());
    assert_eq!(next.len(), 1);
}

#[test]
fn test_at_most_one_open_entry_per_actor_and_day() {
    let mut ledger = Ledger::default();
    let steps = [
        (ClockAction::ClockIn, at(8, 0, 0)),
        (ClockAction::ClockIn, at(8, 1, 0)),
        (ClockAction::StartLunch, at(12, 0, 0)),
        (ClockAction::ClockIn, at(12, 5, 0)),
        (ClockAction::EndLunch, at(12, 30, 0)),
        (ClockAction::ClockOut, at(17, 0, 0)),
        (ClockAction::ClockIn, at(18, 0, 0)),
        (ClockAction::ClockIn, at(18, 1, 0)),
    ];

    for (action, now) in steps {
        let (next, _) = clock::apply(&ledger, &alice(), action, now, &policy());
        ledger = next;

        let open = ledger
            .entries()
            .iter()
            .filter(|e| e.actor_id == "E001" && e.date == day() && e.is_open())
            .count();
        assert!(open <= 1, "{} open entries after {:?}", open, action);
    }

    // evening session after the closed one
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.entries()[0].status, EntryStatus::Active);
    assert_eq!(ledger.entries()[1].status, EntryStatus::LoggedOut);
}

#[test]
fn test_actors_are_independent() {
    let ledger = run_accepted(Ledger::default(), &alice(), &[(ClockAction::ClockIn, at(9, 0, 0))], &policy());
    let ledger = run_accepted(ledger, &bob(), &[(ClockAction::ClockIn, at(9, 0, 0))], &policy());

    assert_eq!(ledger.len(), 2);
    assert_ne!(ledger.entries()[0].id, ledger.entries()[1].id);
    assert_eq!(ledger.today_status("E001", day()), EntryStatus::Active);
    assert_eq!(ledger.today_status("E002", day()), EntryStatus::Active);

    // Bob cannot close Alice's session
    let ledger = run_accepted(ledger, &bob(), &[(ClockAction::ClockOut, at(10, 0, 0))], &policy());
    assert_eq!(ledger.today_status("E001", day()), EntryStatus::Active);
    assert_eq!(ledger.today_status("E002", day()), EntryStatus::LoggedOut);
}

#[test]
fn test_new_entries_are_prepended() {
    let ledger = run_accepted(Ledger::default(), &alice(), &[(ClockAction::ClockIn, at(9, 0, 0))], &policy());
    let ledger = run_accepted(ledger, &bob(), &[(ClockAction::ClockIn, at(9, 30, 0))], &policy());

    assert_eq!(ledger.entries()[0].actor_id, "E002");
    assert_eq!(ledger.entries()[1].actor_id, "E001");
}

#[test]
fn test_start_lunch_requires_active() {
    // nothing open yet
    let empty = Ledger::default();
    let (next, outcome) = clock::apply(&empty, &alice(), ClockAction::StartLunch, at(12, 0, 0), &policy());
    assert_eq!(
        outcome,
        Outcome::Rejected {
            action: ClockAction::StartLunch,
            reason: ClockRejection::NotActive
        }
    );
    assert!(next.is_empty());

    // already closed for the day
    let closed = run_accepted(
        Ledger::default(),
        &alice(),
        &[
            (ClockAction::ClockIn, at(9, 0, 0)),
            (ClockAction::ClockOut, at(10, 0, 0)),
        ],
        &policy(),
    );
    let (next, outcome) = clock::apply(&closed, &alice(), ClockAction::StartLunch, at(12, 0, 0), &policy());
    assert_eq!(outcome.message(), "You must be Active to start lunch");
    assert_eq!(next, closed);
}

#[test]
fn test_start_lunch_twice_keeps_first_timestamp() {
    let ledger = run_accepted(
        Ledger::default(),
        &alice(),
        &[
            (ClockAction::ClockIn, at(9, 0, 0)),
            (ClockAction::StartLunch, at(12, 0, 0)),
        ],
        &policy(),
    );

    let (next, outcome) = clock::apply(&ledger, &alice(), ClockAction::StartLunch, at(12, 0, 1), &policy());

    assert!(!outcome.is_accepted());
    assert_eq!(next.entries()[0].lunch_start_time, Some(at(12, 0, 0)));
    assert_eq!(next.entries()[0].status, EntryStatus::OnLunch);
}

#[test]
fn test_second_lunch_keeps_first_interval() {
    let ledger = run_accepted(
        Ledger::default(),
        &alice(),
        &[
            (ClockAction::ClockIn, at(9, 0, 0)),
            (ClockAction::StartLunch, at(12, 0, 0)),
            (ClockAction::EndLunch, at(12, 30, 0)),
            (ClockAction::StartLunch, at(15, 0, 0)),
            (ClockAction::EndLunch, at(15, 15, 0)),
        ],
        &policy(),
    );

    let e = &ledger.entries()[0];
    assert_eq!(e.lunch_start_time, Some(at(12, 0, 0)));
    assert_eq!(e.lunch_end_time, Some(at(12, 30, 0)));
    assert_eq!(e.status, EntryStatus::Active);
}

#[test]
fn test_end_lunch_requires_on_lunch() {
    let ledger = run_accepted(Ledger::default(), &alice(), &[(ClockAction::ClockIn, at(9, 0, 0))], &policy());

    let (next, outcome) = clock::apply(&ledger, &alice(), ClockAction::EndLunch, at(12, 0, 0), &policy());

    assert_eq!(
        outcome,
        Outcome::Rejected {
            action: ClockAction::EndLunch,
            reason: ClockRejection::NotOnLunch
        }
    );
    assert_eq!(next, ledger);
    assert!(next.entries()[0].lunch_end_time.is_none());
}

#[test]
fn test_clock_out_without_session_is_rejected() {
    let (next, outcome) =
        clock::apply(&Ledger::default(), &alice(), ClockAction::ClockOut, at(18, 0, 0), &policy());

    assert_eq!(
        outcome,
        Outcome::Rejected {
            action: ClockAction::ClockOut,
            reason: ClockRejection::NotClockedIn
        }
    );
    assert_eq!(outcome.message(), "You must be Active/On Lunch to clock out");
    assert!(next.is_empty());
}

#[test]
fn test_full_day_computes_hours_net_of_lunch() {
    let ledger = run_accepted(
        Ledger::default(),
        &alice(),
        &[
            (ClockAction::ClockIn, at(9, 0, 0)),
            (ClockAction::StartLunch, at(12, 0, 0)),
            (ClockAction::EndLunch, at(12, 30, 0)),
            (ClockAction::ClockOut, at(18, 0, 0)),
        ],
        &policy(),
    );

    let e = &ledger.entries()[0];
    assert_eq!(e.status, EntryStatus::LoggedOut);
    assert_eq!(e.clock_out_time, Some(at(18, 0, 0)));
    assert_eq!(e.computed_hours.as_deref(), Some("8:30"));
}

#[test]
fn test_clock_out_message_reports_hours() {
    let ledger = run_accepted(Ledger::default(), &alice(), &[(ClockAction::ClockIn, at(9, 0, 0))], &policy());

    let (_, outcome) = clock::apply(&ledger, &alice(), ClockAction::ClockOut, at(17, 45, 0), &policy());

    assert_eq!(outcome.message(), "Clocked out (8:45)");
}

#[test]
fn test_minimum_duration_gate() {
    let ledger = run_accepted(Ledger::default(), &alice(), &[(ClockAction::ClockIn, at(9, 0, 0))], &policy());

    // T+10s → 50s missing
    let (next, outcome) = clock::apply(&ledger, &alice(), ClockAction::ClockOut, at(9, 0, 10), &policy());
    assert_eq!(
        outcome,
        Outcome::Rejected {
            action: ClockAction::ClockOut,
            reason: ClockRejection::MinimumDurationNotMet {
                remaining: Duration::seconds(50)
            }
        }
    );
    assert_eq!(outcome.message(), "Minimum working time not reached: 0m 50s remaining");
    assert_eq!(next.entries()[0].status, EntryStatus::Active);
    assert!(next.entries()[0].clock_out_time.is_none());
    assert!(next.entries()[0].computed_hours.is_none());

    // T+61s → accepted
    let (next, outcome) = clock::apply(&next, &alice(), ClockAction::ClockOut, at(9, 1, 1), &policy());
    assert!(outcome.is_accepted());
    assert_eq!(next.entries()[0].status, EntryStatus::LoggedOut);
    assert_eq!(next.entries()[0].computed_hours.as_deref(), Some("0:01"));
}

#[test]
fn test_minimum_duration_counts_open_lunch_as_not_worked() {
    let ledger = run_accepted(
        Ledger::default(),
        &alice(),
        &[
            (ClockAction::ClockIn, at(9, 0, 0)),
            (ClockAction::StartLunch, at(9, 0, 30)),
        ],
        &policy(),
    );

    // 5 minutes later but only 30s worked
    let (next, outcome) = clock::apply(&ledger, &alice(), ClockAction::ClockOut, at(9, 5, 30), &policy());

    assert_eq!(
        outcome,
        Outcome::Rejected {
            action: ClockAction::ClockOut,
            reason: ClockRejection::MinimumDurationNotMet {
                remaining: Duration::seconds(30)
            }
        }
    );
    assert_eq!(next.entries()[0].status, EntryStatus::OnLunch);
    assert!(next.entries()[0].lunch_end_time.is_none());
}

#[test]
fn test_clock_out_on_lunch_closes_lunch_at_clock_out() {
    let ledger = run_accepted(
        Ledger::default(),
        &alice(),
        &[
            (ClockAction::ClockIn, at(9, 0, 0)),
            (ClockAction::StartLunch, at(10, 0, 0)),
            (ClockAction::ClockOut, at(11, 0, 0)),
        ],
        &policy(),
    );

    let e = &ledger.entries()[0];
    assert_eq!(e.status, EntryStatus::LoggedOut);
    assert_eq!(e.lunch_end_time, Some(at(11, 0, 0)));
    assert_eq!(e.clock_out_time, Some(at(11, 0, 0)));
    assert_eq!(e.computed_hours.as_deref(), Some("1:00"));
}

#[test]
fn test_logged_out_entry_is_never_mutated() {
    let ledger = run_accepted(
        Ledger::default(),
        &alice(),
        &[
            (ClockAction::ClockIn, at(9, 0, 0)),
            (ClockAction::ClockOut, at(17, 0, 0)),
        ],
        &policy(),
    );
    let closed = ledger.entries()[0].clone();

    let mut current = ledger;
    for (action, now) in [
        (ClockAction::StartLunch, at(17, 5, 0)),
        (ClockAction::EndLunch, at(17, 6, 0)),
        (ClockAction::ClockOut, at(17, 7, 0)),
    ] {
        let (next, outcome) = clock::apply(&current, &alice(), action, now, &policy());
        assert!(!outcome.is_accepted());
        current = next;
    }

    assert_eq!(current.entries()[0], closed);
}

#[test]
fn test_open_session_from_previous_day_does_not_block_today() {
    let yesterday = day().pred_opt().unwrap().and_hms_opt(9, 0, 0).unwrap();
    let ledger = run_accepted(Ledger::default(), &alice(), &[(ClockAction::ClockIn, yesterday)], &policy());

    let (next, outcome) = clock::apply(&ledger, &alice(), ClockAction::ClockIn, at(9, 0, 0), &policy());

    assert!(outcome.is_accepted());
    assert_eq!(next.len(), 2);
    assert_eq!(next.entries()[1].date, day().pred_opt().unwrap());
    assert_eq!(next.entries()[1].status, EntryStatus::Active);
}

#[test]
fn test_identity_snapshot_is_kept() {
    let ledger = run_accepted(Ledger::default(), &alice(), &[(ClockAction::ClockIn, at(9, 0, 0))], &policy());

    let mut renamed = alice();
    renamed.name = "Alice Smith".to_string();
    let ledger = run_accepted(ledger, &renamed, &[(ClockAction::ClockOut, at(17, 0, 0))], &policy());

    assert_eq!(ledger.entries()[0].actor_name, "Alice");
}

#[test]
fn test_zero_minimum_allows_immediate_clock_out() {
    let zero = ClockPolicy::from_minutes(0).unwrap();
    let ledger = run_accepted(
        Ledger::default(),
        &alice(),
        &[
            (ClockAction::ClockIn, at(9, 0, 0)),
            (ClockAction::ClockOut, at(9, 0, 0)),
        ],
        &zero,
    );

    assert_eq!(ledger.entries()[0].computed_hours.as_deref(), Some("0:00"));
}

#[test]
fn test_lunch_end_before_lunch_start_is_rejected() {
    let ledger = run_accepted(
        Ledger::default(),
        &alice(),
        &[
            (ClockAction::ClockIn, at(9, 0, 0)),
            (ClockAction::StartLunch, at(12, 0, 0)),
        ],
        &policy(),
    );

    let (next, outcome) = clock::apply(&ledger, &alice(), ClockAction::EndLunch, at(11, 0, 0), &policy());

    assert_eq!(
        outcome,
        Outcome::Rejected {
            action: ClockAction::EndLunch,
            reason: ClockRejection::TimeWentBackwards { latest: at(12, 0, 0) },
        }
    );
    assert_eq!(outcome.message(), "Time is earlier than the last recorded time (12:00:00)");
    assert_eq!(next, ledger);
    assert_eq!(next.entries()[0].lunch_end_time, None);
    assert_eq!(next.entries()[0].status, EntryStatus::OnLunch);
}

#[test]
fn test_lunch_start_before_clock_in_is_rejected() {
    let ledger = run_accepted(Ledger::default(), &alice(), &[(ClockAction::ClockIn, at(9, 0, 0))], &policy());

    let (next, outcome) = clock::apply(&ledger, &alice(), ClockAction::StartLunch, at(8, 59, 59), &policy());

    assert!(matches!(
        outcome,
        Outcome::Rejected { reason: ClockRejection::TimeWentBackwards { .. }, .. }
    ));
    assert_eq!(next.entries()[0].lunch_start_time, None);
}

#[test]
fn test_clock_out_before_clock_in_is_rejected_even_without_minimum() {
    let zero = ClockPolicy::from_minutes(0).unwrap();
    let ledger = run_accepted(Ledger::default(), &alice(), &[(ClockAction::ClockIn, at(9, 0, 0))], &zero);

    let (next, outcome) = clock::apply(&ledger, &alice(), ClockAction::ClockOut, at(8, 0, 0), &zero);

    assert!(matches!(
        outcome,
        Outcome::Rejected { reason: ClockRejection::TimeWentBackwards { latest }, .. } if latest == at(9, 0, 0)
    ));
    assert_eq!(next.entries()[0].status, EntryStatus::Active);
    assert_eq!(next.entries()[0].clock_out_time, None);
}

#[test]
fn test_clock_out_before_lunch_end_is_rejected() {
    let zero = ClockPolicy::from_minutes(0).unwrap();
    let ledger = run_accepted(
        Ledger::default(),
        &alice(),
        &[
            (ClockAction::ClockIn, at(9, 0, 0)),
            (ClockAction::StartLunch, at(12, 0, 0)),
            (ClockAction::EndLunch, at(12, 30, 0)),
        ],
        &zero,
    );

    let (_, outcome) = clock::apply(&ledger, &alice(), ClockAction::ClockOut, at(12, 15, 0), &zero);
    assert!(!outcome.is_accepted());

    // same instant is fine
    let (_, outcome) = clock::apply(&ledger, &alice(), ClockAction::ClockOut, at(12, 30, 0), &zero);
    assert!(outcome.is_accepted());
}

#[test]
fn test_policy_rejects_out_of_range_minutes() {
    assert!(ClockPolicy::from_minutes(i64::MAX / 2).is_none());
    assert!(ClockPolicy::from_minutes(9_223_372_036_854_775).is_none());
    assert_eq!(
        ClockPolicy::from_minutes(-5).map(|p| p.min_duration),
        Some(Duration::zero())
    );
    assert_eq!(ClockPolicy::default(), ClockPolicy::from_minutes(1).unwrap());
}
