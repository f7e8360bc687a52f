//! Full request-lifecycle tests driving the public engine API.

use std::sync::Arc;

use credo_core::constants::{COOLDOWN_SECS, MAX_SCORE, MIN_SCORE};
use credo_core::error::UpdateError;
use credo_core::record::Metrics;
use credo_core::traits::RecordStore;
use credo_core::weights::{WeightField, Weights};
use credo_engine::{MemoryRecordStore, OwnerAuthorizer, UpdateController, UpdateState};
use credo_score::ScoreEngine;

use credo_tests::helpers::{ManualClock, T0, address, operator, sample_metrics, standard_stack};

#[test]
fn score_lifecycle_under_even_weights() {
    let clock = ManualClock::at(T0);
    let (controller, store) = standard_stack(clock.clone());
    let user = address(0x01);

    // Never updated: sentinel zero, no cooldown.
    assert_eq!(controller.get_score(&user).unwrap(), 0);
    assert_eq!(
        controller.update_state(&user).unwrap(),
        UpdateState::NeverUpdated
    );

    // First update: bounded score, record committed verbatim.
    let first = controller
        .request_update(user, sample_metrics(), &operator())
        .unwrap();
    assert!(first > MIN_SCORE && first <= MAX_SCORE);
    let record = store.get(&user).unwrap().unwrap();
    assert_eq!(record.metrics, sample_metrics());
    assert_eq!(record.credit_score, first);
    assert_eq!(record.last_updated, T0);
    assert!(record.score_in_bounds());

    // Within the window: rejected, carrying the stored score.
    clock.advance(COOLDOWN_SECS - 60);
    let err = controller
        .request_update(user, sample_metrics(), &operator())
        .unwrap_err();
    assert_eq!(
        err,
        UpdateError::CooldownActive {
            current_score: first,
            remaining_secs: 60,
        }
    );
    assert_eq!(controller.get_score(&user).unwrap(), first);

    // At the boundary: eligible, recomputes from the fresh metrics.
    clock.advance(60);
    assert_eq!(controller.update_state(&user).unwrap(), UpdateState::Eligible);
    let richer = Metrics {
        new_transactions: 40,
        ..sample_metrics()
    };
    let second = controller.request_update(user, richer, &operator()).unwrap();
    assert!(second >= first, "more activity must not lower the score");
    assert_eq!(store.get(&user).unwrap().unwrap().last_updated, T0 + COOLDOWN_SECS);
}

#[test]
fn cooldowns_are_independent_per_address() {
    let clock = ManualClock::at(T0);
    let (controller, _) = standard_stack(clock.clone());

    let alice = address(0x0A);
    let bob = address(0x0B);

    controller
        .request_update(alice, sample_metrics(), &operator())
        .unwrap();

    // Alice cooling down must not block Bob's first update.
    clock.advance(3600);
    controller
        .request_update(bob, sample_metrics(), &operator())
        .unwrap();

    assert!(matches!(
        controller.update_state(&alice).unwrap(),
        UpdateState::CooldownActive { .. }
    ));
    assert!(matches!(
        controller.update_state(&bob).unwrap(),
        UpdateState::CooldownActive { .. }
    ));
}

#[test]
fn unauthorized_caller_changes_nothing() {
    let clock = ManualClock::at(T0);
    let (controller, store) = standard_stack(clock);
    let user = address(0x01);
    let intruder = address(0x99);

    let err = controller
        .request_update(user, sample_metrics(), &intruder)
        .unwrap_err();
    assert_eq!(err, UpdateError::NotAuthorized(intruder.encode()));
    assert!(store.is_empty());
    assert_eq!(controller.get_score(&user).unwrap(), 0);

    let err = controller
        .set_weight(WeightField::Volume, 50, &intruder)
        .unwrap_err();
    assert_eq!(err, UpdateError::NotAuthorized(intruder.encode()));
    assert_eq!(controller.weights(), Weights::even());
}

#[test]
fn zero_address_is_rejected_by_every_query() {
    let (controller, _) = standard_stack(ManualClock::at(T0));
    let zero = credo_core::Address::ZERO;

    assert_eq!(
        controller
            .request_update(zero, sample_metrics(), &operator())
            .unwrap_err(),
        UpdateError::InvalidAddress
    );
    assert_eq!(
        controller.get_score(&zero).unwrap_err(),
        UpdateError::InvalidAddress
    );
    assert_eq!(
        controller.update_state(&zero).unwrap_err(),
        UpdateError::InvalidAddress
    );
}

#[test]
fn ownership_transfer_moves_the_update_capability() {
    let clock = ManualClock::at(T0);
    let authorizer = Arc::new(OwnerAuthorizer::new(operator()));
    let controller = UpdateController::new(
        Weights::even(),
        Arc::new(MemoryRecordStore::new()),
        Arc::new(ScoreEngine::new()),
        authorizer.clone(),
        clock,
    );

    let successor = address(0x42);
    authorizer
        .transfer_ownership(&operator(), successor)
        .unwrap();

    // Old operator is locked out, successor can update.
    let err = controller
        .request_update(address(0x01), sample_metrics(), &operator())
        .unwrap_err();
    assert!(matches!(err, UpdateError::NotAuthorized(_)));

    let score = controller
        .request_update(address(0x01), sample_metrics(), &successor)
        .unwrap();
    assert!(score > MIN_SCORE);
}

#[test]
fn rebalanced_weights_apply_to_later_updates_only() {
    let clock = ManualClock::at(T0);
    let (controller, store) = standard_stack(clock.clone());
    let user = address(0x01);

    let before = controller
        .request_update(user, sample_metrics(), &operator())
        .unwrap();

    // Shift all weight onto recent activity, where the sample sits low.
    controller
        .set_weights(Weights::new(0, 0, 0, 0, 100).unwrap(), &operator())
        .unwrap();

    // The committed record is untouched by the weight change.
    assert_eq!(store.get(&user).unwrap().unwrap().credit_score, before);

    clock.advance(COOLDOWN_SECS);
    let after = controller
        .request_update(user, sample_metrics(), &operator())
        .unwrap();
    assert!(
        after < before,
        "all-new-tx weighting should drop the sample score: {after} >= {before}"
    );
}

#[test]
fn stored_records_serialize_for_external_consumers() {
    let (controller, store) = standard_stack(ManualClock::at(T0));
    let user = address(0x01);

    // Wei amounts kept within u64 range: plain JSON numbers cannot carry
    // the full u128 domain.
    let metrics = Metrics {
        transaction_volume: 2_000_000_000,
        wallet_balance: 9_000_000_000,
        transaction_frequency: 12,
        transaction_mix: 4,
        new_transactions: 6,
    };
    controller.request_update(user, metrics, &operator()).unwrap();

    let record = store.get(&user).unwrap().unwrap();
    let json = serde_json::to_value(record).unwrap();
    assert_eq!(json["credit_score"], record.credit_score);
    assert_eq!(json["last_updated"], T0);
    assert_eq!(json["metrics"]["transaction_frequency"], 12);
}
