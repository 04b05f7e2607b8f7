use naval_hotseat::{GameConfig, Match, MatchPhase};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn match_snapshot_roundtrip(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let config = GameConfig::default();
        let mut game = Match::new(&config);
        game.place_fleet_randomly(&mut rng).unwrap();
        game.place_fleet_randomly(&mut rng).unwrap();
        for _ in 0..rng.random_range(0..20) {
            let row = rng.random_range(0..config.size());
            let col = rng.random_range(0..config.size());
            let _ = game.fire(row, col);
            let _ = game.end_turn();
        }

        let bytes = bincode::serialize(&game).unwrap();
        let mut restored: Match = bincode::deserialize(&bytes).unwrap();
        prop_assert_eq!(&restored, &game);

        // the restored match keeps playing like the live one
        if matches!(game.phase(), MatchPhase::InCombat { .. }) {
            let row = rng.random_range(0..config.size());
            let col = rng.random_range(0..config.size());
            prop_assert_eq!(restored.fire(row, col), game.fire(row, col));
        }
    }
}
