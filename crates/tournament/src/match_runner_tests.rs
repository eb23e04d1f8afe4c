use super::*;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;

fn quiet(num_games: u32) -> MatchRunner {
    MatchRunner::new(MatchConfig {
        num_games,
        verbose: false,
        ..Default::default()
    })
}

#[test]
fn test_self_play() {
    let mut engine1 = MinimaxEngine::with_depth(2);
    let mut engine2 = MinimaxEngine::with_depth(2);

    let result = quiet(2).run_match(&mut engine1, &mut engine2).unwrap();

    // Identical deterministic engines: the two games mirror each other
    assert_eq!(result.total_games(), 2);
    assert_eq!(result.wins, result.losses);
    assert_eq!(result.disc_differential, 0);
}

#[test]
fn test_colour_schedule() {
    let runner = quiet(4);
    assert_eq!(runner.first_side(0), Player::Black);
    assert_eq!(runner.first_side(1), Player::White);
    assert_eq!(runner.first_side(2), Player::Black);

    let fixed = MatchRunner::new(MatchConfig {
        num_games: 4,
        alternate_colors: false,
        verbose: false,
    });
    assert_eq!(fixed.first_side(1), Player::Black);
}

#[test]
fn test_game_summary_counts_discs() {
    let mut black = RandomEngine::seeded(1);
    let mut white = RandomEngine::seeded(2);

    let g = play_game(&mut black, &mut white).unwrap();

    assert!(g.black_discs + g.white_discs <= 64);
    // Each ply places a disc except a pass
    assert_eq!(g.plies - g.passes + 4, (g.black_discs + g.white_discs) as usize);
    let expected = match g.black_discs.cmp(&g.white_discs) {
        std::cmp::Ordering::Greater => GameResult::Win,
        std::cmp::Ordering::Less => GameResult::Loss,
        std::cmp::Ordering::Equal => GameResult::Draw,
    };
    assert_eq!(g.result, expected);

    let (white_result, white_margin) = g.for_side(Player::White);
    assert_eq!(white_result, expected.flipped());
    assert_eq!(white_margin, g.white_discs as i32 - g.black_discs as i32);
}

#[test]
fn test_search_beats_random_more_often_than_not() {
    let mut engine1 = MinimaxEngine::with_depth(2);
    let mut engine2 = RandomEngine::seeded(2024);

    let result = quick_match(&mut engine1, &mut engine2, 6).unwrap();

    assert_eq!(result.total_games(), 6);
    assert!(result.disc_differential > 0);
}
