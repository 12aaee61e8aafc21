//! Session-level flows with the stub backend.

#![cfg(feature = "stub")]

use froglin_core::{
    CircuitInput, Field, FroglinType, GameConfig, GameContext, InventoryError, ManaError, Player,
    PlayerError,
};
use froglin_zk::{
    CircuitKind, ProofData, Prover, ProverConfig, ProvingSession, SessionError, StubProver,
};
use proptest::prelude::*;

fn f(value: u64) -> Field {
    Field::from(value)
}

fn session(config: ProverConfig) -> ProvingSession<StubProver> {
    let context = GameContext::default();
    ProvingSession::new(Player::new(f(123), &context), StubProver::new(), config)
}

#[test]
fn claim_proves_against_the_previous_identity() {
    let mut session = session(ProverConfig::enabled());
    let before = session.player().generate_identity();

    let transition = session.claim_mana(f(25)).expect("claim should succeed");
    assert_eq!(transition.outcome, f(25));
    assert_eq!(transition.request.circuit, CircuitKind::ManaBoost);
    assert_eq!(
        transition
            .request
            .inputs
            .lookup("old_identity")
            .map(CircuitInput::decode),
        Some(Ok(before.identity))
    );
    assert_eq!(transition.identity, session.player().generate_identity());
    assert_ne!(transition.identity, before);

    let proof = transition.proof.expect("proving enabled");
    assert!(
        session
            .prover()
            .verify(&transition.request, &proof)
            .expect("stub verify")
    );
}

#[test]
fn dry_run_skips_proving() {
    let mut session = session(ProverConfig::dry_run());
    let transition = session
        .capture(FroglinType::DesertFroglin, f(1))
        .expect("capture should succeed");
    assert!(transition.proof.is_none());
    assert!(session.player().get_froglin(f(1)).is_some());
}

#[test]
fn failed_transition_leaves_player_untouched() {
    let mut session = session(ProverConfig::enabled());
    session.claim_mana(f(10)).expect("claim should succeed");
    let before = session.player().generate_identity();

    let err = session.claim_mana(f(5)).expect_err("claim regresses");
    assert!(matches!(
        err,
        SessionError::Player(PlayerError::Mana(ManaError::ClaimRegression { .. }))
    ));
    assert_eq!(session.player().generate_identity(), before);
}

#[test]
fn deposit_and_withdraw_round_trip() {
    let mut session = session(ProverConfig::enabled());
    session
        .capture(FroglinType::DesertFroglin, f(1))
        .expect("capture should succeed");
    let empty_root = session.player().stash_root();

    let deposit = session.deposit(f(1)).expect("deposit should succeed");
    assert_eq!(deposit.request.circuit, CircuitKind::StashDeposit);
    assert_eq!(
        deposit.request.inputs.lookup("new_root").map(CircuitInput::decode),
        Some(Ok(session.player().stash_root()))
    );
    assert_eq!(
        deposit.request.inputs.lookup("froglin.id").map(CircuitInput::decode),
        Some(Ok(f(1)))
    );

    let withdraw = session.withdraw(f(1)).expect("withdraw should succeed");
    assert_eq!(withdraw.outcome.id, f(1));
    assert_eq!(session.player().stash_root(), empty_root);
    match withdraw.request.inputs.get("siblings") {
        Some(CircuitInput::List(siblings)) => assert_eq!(siblings.len(), GameConfig::STASH_DEPTH),
        other => panic!("unexpected siblings: {other:?}"),
    }
}

#[test]
fn deposit_of_missing_froglin_fails() {
    let mut session = session(ProverConfig::enabled());
    assert!(matches!(
        session.deposit(f(3)),
        Err(SessionError::Player(PlayerError::Inventory(
            InventoryError::NotFound { .. }
        )))
    ));
}

#[test]
fn request_json_uses_fixed_width_hex() {
    let mut session = session(ProverConfig::dry_run());
    let transition = session.claim_mana(f(7)).expect("claim should succeed");
    let json: serde_json::Value =
        serde_json::from_str(&transition.request.to_json().expect("json")).expect("valid json");

    assert_eq!(
        json["total_mana"],
        "0x0000000000000000000000000000000000000000000000000000000000000007"
    );
    let coord = json["player"]["froglins"][0]["habitats"][0]["coords"][1][0]
        .as_str()
        .expect("coordinate leaf is a string");
    assert_eq!(coord.len(), 66);
    assert_eq!(
        json["player"]["inventory"]
            .as_array()
            .map(Vec::len),
        Some(GameConfig::ITEM_MAX)
    );
}

#[test]
fn proof_bytes_survive_encoding() {
    let mut session = session(ProverConfig::enabled());
    let transition = session.claim_mana(f(3)).expect("claim should succeed");
    let proof = transition.proof.expect("proving enabled");

    let decoded = ProofData::from_bytes(&proof.to_bytes().expect("encode")).expect("decode");
    assert_eq!(decoded, proof);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn stub_proofs_verify_for_any_claim(total in 0u64..1_000_000) {
        let mut session = session(ProverConfig::enabled());
        let transition = session.claim_mana(f(total)).expect("claim should succeed");
        let proof = transition.proof.expect("proving enabled");
        prop_assert!(session.prover().verify(&transition.request, &proof).expect("verify"));
    }
}
