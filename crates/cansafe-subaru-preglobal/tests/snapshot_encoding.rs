//! Snapshot tests for encoded command payloads.
//!
//! A change here means the bytes on the wire changed.

use cansafe_subaru_preglobal::encode;
use insta::assert_snapshot;

fn hex(payload: &[u8]) -> String {
    payload
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn es_lkas_payloads() {
    assert_snapshot!(hex(&encode::es_lkas(0, false)), @"00 00 00 00 00 00 00 00");
    assert_snapshot!(hex(&encode::es_lkas(100, true)), @"00 9C 1F 01 00 00 00 BC");
    assert_snapshot!(hex(&encode::es_lkas(-100, true)), @"00 64 00 01 00 00 00 65");
}

#[test]
fn es_brake_payloads() {
    assert_snapshot!(hex(&encode::es_brake(600)), @"58 02 00 00 00 00 00 5A");
}

#[test]
fn es_distance_payloads() {
    assert_snapshot!(hex(&encode::es_distance(1818)), @"1A 07 00 00 00 00 00 21");
}

#[test]
fn es_status_payloads() {
    assert_snapshot!(hex(&encode::es_status(2400)), @"00 00 60 09 69 00 00 00");
}
