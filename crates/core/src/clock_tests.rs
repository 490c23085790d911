// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn system_clock_is_after_epoch() {
    assert!(SystemClock.now_ms() > 0);
}

#[test]
fn fake_clock_can_be_advanced() {
    let clock = FakeClock::at(1_000);
    clock.advance(Duration::from_secs(60));
    assert_eq!(clock.now_ms(), 61_000);
}

#[test]
fn fake_clock_is_cloneable_and_shared() {
    let clock1 = FakeClock::new();
    let clock2 = clock1.clone();
    clock2.advance(Duration::from_millis(30));
    assert_eq!(clock1.now_ms(), 30);
}
