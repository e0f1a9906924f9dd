use pacman_lite::systems::final_score_message;
use pretty_assertions::assert_eq;

#[test]
fn test_final_score_message() {
    let cases = [
        (0, "Game over! Final score: 0"),
        (100, "Game over! Final score: 100"),
        (1200, "Game over! Final score: 1,200"),
        (1_234_500, "Game over! Final score: 1,234,500"),
    ];

    for (score, expected) in cases {
        assert_eq!(final_score_message(score), expected);
    }
}
