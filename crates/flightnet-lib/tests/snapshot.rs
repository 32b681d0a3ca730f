mod common;

use std::fs;

use flightnet_lib::{
    load_network, load_or_empty, save_network, Error, FlightNetwork, NetworkSnapshot,
};

use common::{fixture_network, transatlantic_network, SnapshotTestEnv};

#[test]
fn snapshot_restores_into_an_equal_network() {
    let network = transatlantic_network(500.0);
    let restored = FlightNetwork::from_snapshot(network.snapshot()).expect("restore");

    assert_eq!(restored, network);
    assert_eq!(restored.snapshot(), network.snapshot());
}

#[test]
fn binary_file_round_trip() {
    let env = SnapshotTestEnv::new();
    let network = fixture_network();

    save_network(&network, &env.binary_path).expect("save binary");
    let bytes = fs::read(&env.binary_path).expect("read back");
    assert_eq!(&bytes[0..4], b"FNSN");

    let loaded = load_network(&env.binary_path).expect("load binary");
    assert_eq!(loaded, network);
}

#[test]
fn json_file_round_trip() {
    let env = SnapshotTestEnv::new();
    let network = transatlantic_network(1000.0);

    save_network(&network, &env.json_path).expect("save json");
    let text = fs::read_to_string(&env.json_path).expect("read back");
    let snapshot = NetworkSnapshot::from_json(&text).expect("valid json");
    assert_eq!(snapshot.airports.len(), 3);
    assert_eq!(snapshot.routes.len(), 3);

    let loaded = load_network(&env.json_path).expect("load json");
    assert_eq!(loaded, network);
}

#[test]
fn save_creates_missing_parent_directories() {
    let env = SnapshotTestEnv::new();
    let nested = env.temp_path().join("a/b/network.fnsn");
    save_network(&transatlantic_network(500.0), &nested).expect("save nested");
    assert!(nested.exists());
}

#[test]
fn missing_file_loads_as_empty_network() {
    let env = SnapshotTestEnv::new();
    let network = load_or_empty(&env.binary_path).expect("missing file is fine");
    assert!(network.is_empty());

    let err = load_network(&env.binary_path).unwrap_err();
    assert!(matches!(err, Error::SnapshotLoad { .. }));
}

#[test]
fn corrupted_binary_file_is_rejected() {
    let env = SnapshotTestEnv::new();
    save_network(&fixture_network(), &env.binary_path).expect("save");

    let mut bytes = fs::read(&env.binary_path).expect("read");
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;
    fs::write(&env.binary_path, &bytes).expect("write corrupted");

    let err = load_network(&env.binary_path).unwrap_err();
    assert!(err.to_string().contains("checksum mismatch"), "got {err}");
}

#[test]
fn json_with_dangling_route_is_rejected() {
    let env = SnapshotTestEnv::new();
    let mut snapshot = transatlantic_network(500.0).snapshot();
    snapshot.airports.retain(|airport| airport.code != "LAX");
    fs::write(&env.json_path, snapshot.to_json().expect("encode")).expect("write");

    let err = load_network(&env.json_path).unwrap_err();
    assert!(matches!(err, Error::InvalidSnapshot { .. }), "got {err}");
}

#[test]
fn network_with_removed_routes_equals_its_restored_snapshot() {
    let mut network = transatlantic_network(500.0);
    assert!(network.remove_route("JFK", "LHR"));
    assert!(network.remove_route("JFK", "LAX"));
    assert!(network.remove_airport("LAX"));

    let restored = FlightNetwork::from_snapshot(network.snapshot()).expect("restore");
    assert_eq!(restored, network);

    let env = SnapshotTestEnv::new();
    save_network(&network, &env.binary_path).expect("save");
    assert_eq!(load_network(&env.binary_path).expect("load"), network);
}

#[test]
fn saving_replaces_the_file_without_leftovers() {
    let env = SnapshotTestEnv::new();
    save_network(&fixture_network(), &env.binary_path).expect("first save");
    let smaller = transatlantic_network(500.0);
    save_network(&smaller, &env.binary_path).expect("second save");

    assert_eq!(load_network(&env.binary_path).expect("load"), smaller);
    let entries: Vec<_> = fs::read_dir(env.temp_path())
        .expect("list temp dir")
        .map(|entry| entry.expect("entry").file_name())
        .collect();
    assert_eq!(entries, vec![env.binary_path.file_name().expect("name").to_owned()]);
}

#[test]
fn failed_save_keeps_existing_target_and_cleans_up() {
    let env = SnapshotTestEnv::new();
    let target = env.temp_path().join("occupied.fnsn");
    fs::create_dir_all(target.join("child")).expect("occupy target with a directory");

    save_network(&transatlantic_network(500.0), &target)
        .expect_err("cannot replace a directory");

    assert!(target.join("child").is_dir());
    let entries: Vec<_> = fs::read_dir(env.temp_path())
        .expect("list temp dir")
        .map(|entry| entry.expect("entry").file_name())
        .collect();
    assert_eq!(entries, vec![target.file_name().expect("name").to_owned()]);
}
