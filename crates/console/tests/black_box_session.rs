use std::io::Cursor;

use rand::SeedableRng;
use rand::rngs::StdRng;

use qvault_console::{Session, SessionEnd};
use qvault_core::{AggregateRoot, ObjectId};
use qvault_inventory::{Blueprint, Inventory};
use qvault_objects::ObjectKind;

fn run_script(session: &mut Session<StdRng>, script: &str) -> (SessionEnd, String) {
    let mut out = Vec::new();
    let end = session
        .run(Cursor::new(script), &mut out)
        .expect("in-memory I/O cannot fail");
    (end, String::from_utf8(out).expect("console output is UTF-8"))
}

fn seeded() -> StdRng {
    StdRng::seed_from_u64(2024)
}

fn preloaded(blueprints: &[Blueprint]) -> Session<StdRng> {
    let mut inventory = Inventory::new();
    for bp in blueprints {
        inventory.create(*bp).unwrap();
    }
    Session::with_inventory(inventory, seeded())
}

#[test]
fn list_on_empty_inventory_then_exit() {
    let mut session = Session::new(seeded());
    let (end, out) = run_script(&mut session, "2\n5\n");

    assert_eq!(end, SessionEnd::Exited);
    assert!(out.contains("Inventory is empty."));
    assert!(!end.is_failure());
}

#[test]
fn created_object_is_the_only_listed_line() {
    let mut session = Session::new(seeded());
    let (end, out) = run_script(&mut session, "1\n2\n5\n");
    assert_eq!(end, SessionEnd::Exited);

    let inventory = session.inventory();
    assert_eq!(inventory.len(), 1);
    let object = inventory.iter().next().unwrap();
    assert!(object.id().as_str().ends_with("-1"));

    let status = object.status_line();
    assert!(out.contains(&format!("New object added: {status}")));
    let listing: Vec<&str> = out
        .lines()
        .skip_while(|l| *l != "=== INVENTORY STATUS ===")
        .skip(1)
        .take_while(|l| l.starts_with('['))
        .collect();
    assert_eq!(listing, vec![status.as_str()]);
}

#[test]
fn invalid_selection_reprompts() {
    let mut session = Session::new(seeded());
    let (end, out) = run_script(&mut session, "9\nhello\n5\n");

    assert_eq!(end, SessionEnd::Exited);
    assert_eq!(out.matches("Invalid selection!").count(), 2);
    assert_eq!(out.matches("Your choice: ").count(), 3);
}

#[test]
fn analyze_and_cool_on_empty_storage_do_not_prompt() {
    let mut session = Session::new(seeded());
    let (end, out) = run_script(&mut session, "3\n4\n5\n");

    assert_eq!(end, SessionEnd::Exited);
    assert_eq!(out.matches("Storage is completely empty.").count(), 2);
    assert!(!out.contains("Enter the ID"));
    assert!(session.inventory().is_empty());
}

#[test]
fn unknown_id_is_reported_and_loop_continues() {
    let mut session = preloaded(&[Blueprint::new(ObjectKind::DarkMatter, 70.0, 3)]);
    let (end, out) = run_script(&mut session, "3\nK-7\n5\n");

    assert_eq!(end, SessionEnd::Exited);
    assert!(out.contains("Object not found!"));
}

#[test]
fn id_lookup_is_exact_apart_from_case() {
    let mut session = preloaded(&[Blueprint::new(ObjectKind::DarkMatter, 70.0, 3)]);
    let (end, out) = run_script(&mut session, "3\n k-1 \n 3\n3\r\nk-1\r\n5\n");

    assert_eq!(end, SessionEnd::Exited);
    assert_eq!(out.matches("Object not found!").count(), 1);
    assert_eq!(out.matches("Invalid selection!").count(), 1);
    assert!(out.contains("Current status: [DarkMatter] ID: K-1, Stability: 55.00, Danger: 3"));
}

#[test]
fn cooling_a_data_packet_is_rejected() {
    let mut session = preloaded(&[Blueprint::new(ObjectKind::DataPacket, 64.0, 1)]);
    let (end, out) = run_script(&mut session, "4\nv-1\n5\n");

    assert_eq!(end, SessionEnd::Exited);
    assert!(out.contains("This object cannot be cooled! (DataPacket is not cooling-capable)"));
    let object = session.inventory().find_by_id("V-1").unwrap();
    assert_eq!(object.stability().value(), 64.0);
}

#[test]
fn cooling_dark_matter_reports_new_status() {
    let mut session = preloaded(&[Blueprint::new(ObjectKind::DarkMatter, 40.0, 6)]);
    let (_, out) = run_script(&mut session, "4\nk-1\n5\n");

    assert!(out.contains("Applying emergency cooling to dark matter..."));
    assert!(out.contains("Current status: [DarkMatter] ID: K-1, Stability: 90.00, Danger: 6"));
}

#[test]
fn collapse_ends_session_with_failing_id() {
    let mut session = preloaded(&[Blueprint::new(ObjectKind::DarkMatter, 10.0, 8)]);
    // Commands after the collapse must never run.
    let (end, out) = run_script(&mut session, "3\nk-1\n2\n5\n");

    assert_eq!(end, SessionEnd::Collapsed(ObjectId::sequenced("K", 1)));
    assert!(end.is_failure());
    assert!(out.contains("SYSTEM FAILURE! EVACUATION INITIATED..."));
    assert!(out.contains("failing object id: K-1"));
    assert!(!out.contains("=== INVENTORY STATUS ==="));
}

#[test]
fn antimatter_survives_three_analyses_then_collapses() {
    let mut session = preloaded(&[Blueprint::new(ObjectKind::AntiMatter, 90.0, 10)]);
    let (end, out) = run_script(&mut session, "3\nA-1\n3\nA-1\n3\nA-1\n3\nA-1\n5\n");

    for expected in ["65.00", "40.00", "15.00"] {
        assert!(out.contains(&format!("Stability: {expected}")), "missing {expected}");
    }
    assert_eq!(end, SessionEnd::Collapsed(ObjectId::sequenced("A", 1)));
}

#[test]
fn closed_input_ends_session() {
    let mut session = Session::new(seeded());
    let (end, _) = run_script(&mut session, "");
    assert_eq!(end, SessionEnd::EndOfInput);

    let mut session = preloaded(&[Blueprint::new(ObjectKind::AntiMatter, 90.0, 10)]);
    let (end, out) = run_script(&mut session, "3\n");
    assert_eq!(end, SessionEnd::EndOfInput);
    assert!(out.contains("Enter the ID of the object to analyze: "));
}
