#[cfg(test)]
mod tests {
    use crate::{
        Combination, Decision, DiceLayout, DiceSource, Game, GameError, MatchStats, Player,
        PlayerError, PlayerId, SeededDice, TurnView,
    };
    use rand::Rng;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;
    use std::collections::VecDeque;

    /// Scripted dice stream for exact-layout tests.
    struct QueueDice(VecDeque<u8>);

    impl QueueDice {
        fn new(faces: &[u8]) -> Self {
            Self(faces.iter().copied().collect())
        }
    }

    impl DiceSource for QueueDice {
        fn next_face(&mut self) -> u8 {
            self.0.pop_front().expect("scripted dice exhausted")
        }
    }

    /// Commits on the first roll to the first available combination.
    struct CommitFirst;

    impl Player for CommitFirst {
        fn decide(&mut self, turn: &TurnView<'_>) -> Result<Decision, PlayerError> {
            let first = turn
                .available
                .first()
                .copied()
                .ok_or("no combinations available")?;
            Ok(Decision::commit(first))
        }
    }

    /// Picks uniformly among legal moves: extend the fixed set by one die, or
    /// commit to a random available combination.
    struct RandomPlayer {
        rng: ChaCha8Rng,
    }

    impl Player for RandomPlayer {
        fn decide(&mut self, turn: &TurnView<'_>) -> Result<Decision, PlayerError> {
            if turn.rolls_left > 0 && self.rng.gen_bool(0.5) {
                let mut extra = DiceLayout::empty();
                for (face, count) in turn.rolled.counts() {
                    if count > turn.fixed.count_of(face) {
                        extra = DiceLayout::from_faces([face])?;
                        break;
                    }
                }
                let kept = turn.fixed.merged(&extra)?;
                return Ok(Decision::fix_and_reroll(kept));
            }
            let pick = self.rng.gen_range(0..turn.available.len());
            Ok(Decision::commit(turn.available[pick]))
        }
    }

    fn play_full_match<'a>(
        game: &mut Game<impl DiceSource>,
        one: &'a mut dyn Player,
        two: &'a mut dyn Player,
    ) -> usize {
        let mut moves = 0usize;
        while game.stats().has_combinations_remaining() {
            for (id, player) in [(PlayerId::One, &mut *one), (PlayerId::Two, &mut *two)] {
                let result = game.play_turn(id, player).unwrap();
                game.record(&result).unwrap();
                moves += 1;
            }
        }
        moves
    }

    #[test]
    fn first_roll_committers_fill_both_sheets() {
        let mut game = Game::new(SeededDice::seed_from(11));
        let moves = play_full_match(&mut game, &mut CommitFirst, &mut CommitFirst);

        assert_eq!(moves, 2 * Combination::COUNT);
        assert!(!game.stats().has_combinations_remaining());
        for id in PlayerId::BOTH {
            assert!(game.stats().sheet(id).is_complete());
        }
        let scores = game.stats().final_scores();
        assert_eq!(scores.len(), 2);
    }

    #[test]
    fn random_legal_playout_terminates() {
        let mut game = Game::new(SeededDice::seed_from(1234));
        let mut one = RandomPlayer {
            rng: ChaCha8Rng::seed_from_u64(7),
        };
        let mut two = RandomPlayer {
            rng: ChaCha8Rng::seed_from_u64(8),
        };
        let moves = play_full_match(&mut game, &mut one, &mut two);
        assert_eq!(moves, 30);
    }

    #[test]
    fn same_seeds_reproduce_the_same_match() {
        fn run(seed: u64) -> MatchStats {
            let mut game = Game::new(SeededDice::seed_from(seed));
            let mut one = RandomPlayer {
                rng: ChaCha8Rng::seed_from_u64(1),
            };
            let mut two = RandomPlayer {
                rng: ChaCha8Rng::seed_from_u64(2),
            };
            game.play_match(&mut one, &mut two).unwrap();
            game.into_stats()
        }

        let a = run(999);
        let b = run(999);
        assert_eq!(a.final_scores(), b.final_scores());
        for id in PlayerId::BOTH {
            for c in Combination::ALL {
                assert_eq!(a.sheet(id).score_of(c), b.sheet(id).score_of(c));
            }
        }
    }

    #[test]
    fn commit_scores_the_rolled_layout() {
        struct CommitFullHouse;
        impl Player for CommitFullHouse {
            fn decide(&mut self, _turn: &TurnView<'_>) -> Result<Decision, PlayerError> {
                Ok(Decision::commit(Combination::FullHouse))
            }
        }

        let mut game = Game::new(QueueDice::new(&[2, 2, 3, 3, 3]));
        let result = game.play_turn(PlayerId::One, &mut CommitFullHouse).unwrap();
        assert_eq!(result.combination, Combination::FullHouse);
        assert_eq!(result.score, 13);
    }

    #[test]
    fn fixed_dice_survive_rerolls_and_shrink_the_roll() {
        struct FixSixesThenCommit;
        impl Player for FixSixesThenCommit {
            fn decide(&mut self, turn: &TurnView<'_>) -> Result<Decision, PlayerError> {
                if turn.fixed.is_empty() {
                    let sixes = vec![6u8; turn.rolled.count_of(6) as usize];
                    return Ok(Decision::fix_and_reroll(DiceLayout::from_faces(sixes)?));
                }
                Ok(Decision::commit(Combination::Sixes))
            }
        }

        // First roll: five dice with two sixes. Second roll: only three dice.
        let mut game = Game::new(QueueDice::new(&[6, 6, 1, 2, 3, 4, 5, 6]));
        let result = game
            .play_turn(PlayerId::One, &mut FixSixesThenCommit)
            .unwrap();
        // Kept sixes merged with the fresh 4,5,6.
        assert_eq!(result.score, 18);
    }

    #[test]
    fn rolls_left_counts_down_to_zero() {
        struct Recorder {
            seen: Vec<u8>,
        }
        impl Player for Recorder {
            fn decide(&mut self, turn: &TurnView<'_>) -> Result<Decision, PlayerError> {
                self.seen.push(turn.rolls_left);
                if turn.rolls_left == 0 {
                    return Ok(Decision::commit(Combination::Chance));
                }
                Ok(Decision::fix_and_reroll(*turn.fixed))
            }
        }

        let mut game = Game::new(SeededDice::seed_from(5));
        let mut player = Recorder { seen: Vec::new() };
        game.play_turn(PlayerId::One, &mut player).unwrap();
        assert_eq!(player.seen, vec![2, 1, 0]);
    }

    #[test]
    fn releasing_fixed_dice_is_a_protocol_violation() {
        struct FixThenRelease;
        impl Player for FixThenRelease {
            fn decide(&mut self, turn: &TurnView<'_>) -> Result<Decision, PlayerError> {
                if turn.fixed.is_empty() {
                    return Ok(Decision::fix_and_reroll(*turn.rolled));
                }
                // Tries to put every previously fixed die back into play.
                Ok(Decision::fix_and_reroll(DiceLayout::empty()))
            }
        }

        let mut game = Game::new(SeededDice::seed_from(5));
        let err = game.play_turn(PlayerId::One, &mut FixThenRelease).unwrap_err();
        assert!(matches!(err, GameError::Protocol { .. }));
        assert!(err.to_string().contains("released"));
    }

    #[test]
    fn fixing_dice_not_in_play_is_a_protocol_violation() {
        struct FixPhantomSixes;
        impl Player for FixPhantomSixes {
            fn decide(&mut self, _turn: &TurnView<'_>) -> Result<Decision, PlayerError> {
                Ok(Decision::fix_and_reroll(DiceLayout::from_faces([6; 5])?))
            }
        }

        let mut game = Game::new(QueueDice::new(&[1, 2, 3, 4, 5]));
        let err = game
            .play_turn(PlayerId::One, &mut FixPhantomSixes)
            .unwrap_err();
        assert!(matches!(err, GameError::Protocol { .. }));
        assert!(err.to_string().contains("not in play"));
    }

    #[test]
    fn committing_to_a_used_combination_is_a_protocol_violation() {
        struct AlwaysChance;
        impl Player for AlwaysChance {
            fn decide(&mut self, _turn: &TurnView<'_>) -> Result<Decision, PlayerError> {
                Ok(Decision::commit(Combination::Chance))
            }
        }

        let mut game = Game::new(SeededDice::seed_from(5));
        let mut player = AlwaysChance;
        let result = game.play_turn(PlayerId::One, &mut player).unwrap();
        game.record(&result).unwrap();

        let err = game.play_turn(PlayerId::One, &mut player).unwrap_err();
        assert!(matches!(err, GameError::Protocol { .. }));
        assert!(err.to_string().contains("unavailable"));
    }

    #[test]
    fn never_committing_exhausts_the_roll_budget() {
        struct NeverCommits;
        impl Player for NeverCommits {
            fn decide(&mut self, turn: &TurnView<'_>) -> Result<Decision, PlayerError> {
                Ok(Decision::fix_and_reroll(*turn.fixed))
            }
        }

        let mut game = Game::new(SeededDice::seed_from(5));
        let err = game.play_turn(PlayerId::One, &mut NeverCommits).unwrap_err();
        assert!(matches!(err, GameError::Protocol { .. }));
        assert!(err.to_string().contains("without committing"));
    }

    #[test]
    fn player_errors_are_wrapped_with_context() {
        struct Flaky;
        impl Player for Flaky {
            fn decide(&mut self, _turn: &TurnView<'_>) -> Result<Decision, PlayerError> {
                Err("flaky player".into())
            }
        }

        let mut game = Game::new(SeededDice::seed_from(5));
        let err = game.play_turn(PlayerId::Two, &mut Flaky).unwrap_err();
        match &err {
            GameError::Player { player, round, .. } => {
                assert_eq!(*player, PlayerId::Two);
                assert_eq!(*round, 1);
            }
            other => panic!("expected player failure, got {other:?}"),
        }
        let msg = err.to_string();
        assert!(msg.contains("player 2"));
        assert!(msg.contains("flaky player"));
    }
}
