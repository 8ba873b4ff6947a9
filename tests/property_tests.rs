//! Property tests over random action sequences.
//!
//! Two generators drive the engine:
//! - arbitrary submissions (any player, any coordinates, mostly illegal),
//! - random walks through `legal_actions`, which finish games now and then.

use proptest::prelude::*;
use proptest::sample::Index;

use quoridor_engine::core::{Action, Cell, FenceKind, PlayerId, PlayerMap};
use quoridor_engine::rules::{Rejection, RulesEngine};
use quoridor_engine::Quoridor;

#[derive(Clone, Debug)]
enum Submission {
    Move { x: u8, y: u8 },
    Fence { kind: FenceKind, x: i32, y: i32 },
}

fn submission() -> impl Strategy<Value = Submission> {
    prop_oneof![
        (0..9u8, 0..9u8).prop_map(|(x, y)| Submission::Move { x, y }),
        (
            prop_oneof![Just(FenceKind::Vertical), Just(FenceKind::Horizontal)],
            -1..11i32,
            -1..11i32
        )
            .prop_map(|(kind, x, y)| Submission::Fence { kind, x, y }),
    ]
}

fn submit(game: &mut Quoridor, player: PlayerId, submission: &Submission) -> Result<(), Rejection> {
    match *submission {
        Submission::Move { x, y } => game.try_move(player, Cell::new(x, y)),
        Submission::Fence { kind, x, y } => game.try_fence(player, kind, x, y),
    }
}

fn check_invariants(game: &Quoridor, placed: &PlayerMap<u8>) {
    let session = game.session();
    let board = session.board();

    assert!(!(game.is_winner(PlayerId::One) && game.is_winner(PlayerId::Two)));
    assert_ne!(board.pawn(PlayerId::One), board.pawn(PlayerId::Two));

    for player in PlayerId::all() {
        assert_eq!(session.fences_left(player), 10 - placed[player]);
    }

    // Fence sets cannot hold duplicates, so every accepted placement is a
    // distinct edge.
    let total = usize::from(placed[PlayerId::One] + placed[PlayerId::Two]);
    assert_eq!(board.placed_fences().count(), total);

    assert_eq!(
        session.status().winner(),
        PlayerId::all().find(|&p| game.is_winner(p))
    );
}

proptest! {
    #[test]
    fn prop_arbitrary_submissions_keep_invariants(
        steps in prop::collection::vec((any::<bool>(), submission()), 0..120)
    ) {
        let mut game = Quoridor::new();
        let mut placed = PlayerMap::with_value(0u8);

        for (as_current, submission) in &steps {
            let player = if *as_current {
                game.current_turn()
            } else {
                game.current_turn().opponent()
            };
            let was_over = game.session().is_over();
            let before = game.snapshot();

            match submit(&mut game, player, submission) {
                Ok(()) => {
                    prop_assert!(!was_over);
                    prop_assert_eq!(game.current_turn(), player.opponent());
                    if let Submission::Fence { .. } = submission {
                        placed[player] += 1;
                    }
                }
                Err(first) => {
                    prop_assert_eq!(&game.snapshot(), &before);

                    let second = submit(&mut game, player, submission);
                    prop_assert_eq!(second, Err(first));
                    prop_assert_eq!(&game.snapshot(), &before);
                }
            }

            check_invariants(&game, &placed);
        }
    }

    #[test]
    fn prop_legal_actions_are_accepted(
        picks in prop::collection::vec(any::<Index>(), 0..300)
    ) {
        let mut game = Quoridor::new();
        let mut placed = PlayerMap::with_value(0u8);

        for pick in &picks {
            let player = game.current_turn();
            let actions = game.legal_actions(player);
            if actions.is_empty() {
                break;
            }

            // Favour moves so games actually end.
            let moves: Vec<_> = actions.iter().copied().filter(Action::is_move).collect();
            let action = if !moves.is_empty() && pick.index(4) != 0 {
                *pick.get(&moves)
            } else {
                *pick.get(&actions)
            };

            prop_assert_eq!(game.apply_action(player, action), Ok(()));
            if let Action::Fence(_) = action {
                placed[player] += 1;
            }
            check_invariants(&game, &placed);
        }

        if let Some(result) = game.is_terminal() {
            let frozen = game.snapshot();
            for player in PlayerId::all() {
                prop_assert!(game.legal_actions(player).is_empty());
                prop_assert_eq!(
                    game.try_fence(player, FenceKind::Vertical, 4, 4),
                    Err(Rejection::GameOver)
                );
            }
            prop_assert!(game.is_winner(result.winner));
            prop_assert!(!game.is_winner(result.winner.opponent()));
            prop_assert_eq!(&game.snapshot(), &frozen);
        }
    }
}
