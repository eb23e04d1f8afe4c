use super::*;

fn sweep(games: u32, discs_per_game: i32) -> MatchResult {
    let mut result = MatchResult::new();
    for _ in 0..games {
        result.record(GameResult::Win, discs_per_game);
    }
    result
}

#[test]
fn test_equal_ratings_expect_half() {
    let tracker = EloTracker::new();
    let expected = tracker.expected_score("minimax", "random");
    assert!((expected - 0.5).abs() < 0.001);
}

#[test]
fn test_winner_gains_loser_drops() {
    let mut tracker = EloTracker::new();
    tracker.update_ratings("minimax", "random", &sweep(10, 20));

    assert!(tracker.rating("minimax") > DEFAULT_ELO);
    assert!(tracker.rating("random") < DEFAULT_ELO);
    // zero-sum
    let total = tracker.rating("minimax") + tracker.rating("random");
    assert!((total - 2.0 * DEFAULT_ELO).abs() < 1e-9);
    // 10 games at expected 0.5: 32 * 10 * 0.5
    assert!((tracker.history[0].elo_change - 160.0).abs() < 1e-9);

    let random = &tracker.ratings["random"];
    assert_eq!(random.record.losses, 10);
    assert_eq!(random.record.disc_differential, -200);
}

#[test]
fn test_leaderboard_order_and_report() {
    let mut tracker = EloTracker::new();
    tracker.update_ratings("minimax:4", "random", &sweep(4, 10));
    tracker.update_ratings("minimax:2", "random:7", &MatchResult::new());

    let rows = tracker.leaderboard();
    let specs: Vec<&str> = rows.iter().map(|r| r.spec.as_str()).collect();
    assert_eq!(specs, ["minimax:4", "minimax:2", "random:7", "random"]);
    assert_eq!(rows[0].games, 4);
    assert_eq!(rows[0].disc_differential, 40);

    let report = tracker.leaderboard_report();
    assert!(report.starts_with("=== Strategy Leaderboard ==="));
    assert!(report.contains("+40"));
}

#[test]
fn test_match_result_score() {
    let mut result = MatchResult::new();
    assert_eq!(result.score(), 0.5);
    result.record(GameResult::Win, 10);
    result.record(GameResult::Draw, 0);
    result.record(GameResult::Loss, -4);
    assert_eq!(result.total_games(), 3);
    assert!((result.score() - 0.5).abs() < 1e-9);
    assert_eq!(result.disc_differential, 6);

    let rev = result.reversed();
    assert_eq!((rev.wins, rev.losses, rev.draws), (1, 1, 1));
    assert_eq!(rev.disc_differential, -6);
    assert_eq!(GameResult::Win.flipped(), GameResult::Loss);
}

#[test]
fn test_save_and_load() {
    let path = std::env::temp_dir().join(format!("othello_elo_{}.json", std::process::id()));
    let mut tracker = EloTracker::new();
    let result = MatchResult {
        wins: 3,
        losses: 1,
        draws: 0,
        disc_differential: 40,
    };
    tracker.update_ratings("a", "b", &result);
    tracker.save(&path).unwrap();

    let loaded = EloTracker::load(&path).unwrap();
    assert_eq!(loaded.history.len(), 1);
    assert_eq!(loaded.ratings, tracker.ratings);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_missing_file_starts_fresh() {
    let path = std::env::temp_dir().join("othello_elo_does_not_exist.json");
    let tracker = EloTracker::load_or_default(&path).unwrap();
    assert!(tracker.ratings.is_empty());
    assert!(EloTracker::load(&path).is_err());
}
