//! Drives `run()` with in-memory streams.

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = fleadevil_cli::run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn deal_prints_seed_and_market() {
    let (code, out, err) = run(&["fleadevil", "deal", "--seed", "42"]);
    assert_eq!(code, 0);
    assert!(err.is_empty());
    assert!(out.starts_with("Seed: 42"));
    assert!(out.contains("Market (56 cards):"));
}

#[test]
fn deal_is_reproducible() {
    let (_, a, _) = run(&["fleadevil", "deal", "--seed", "7"]);
    let (_, b, _) = run(&["fleadevil", "deal", "--seed", "7"]);
    let (_, c, _) = run(&["fleadevil", "deal", "--seed", "8"]);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn rules_lists_the_moves() {
    let (code, out, _) = run(&["fleadevil", "rules"]);
    assert_eq!(code, 0);
    for name in [
        "Haul", "Bargain", "Flea Hop", "Devil Hop", "Walky Talky", "Zonk Out", "Hangout",
        "Easy Go",
    ] {
        assert!(out.contains(name), "rules should mention {}", name);
    }
}

#[test]
fn help_goes_to_stdout() {
    let (code, out, err) = run(&["fleadevil", "--help"]);
    assert_eq!(code, 0);
    assert!(out.contains("play"));
    assert!(err.is_empty());
}

#[test]
fn unknown_command_prints_usage() {
    let (code, out, err) = run(&["fleadevil", "shuffle"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Usage: fleadevil <command> [options]"));
    for c in ["play", "deal", "rules", "cfg"] {
        assert!(err.contains(&format!("  {}", c)));
    }
}

#[test]
fn missing_command_is_an_error() {
    let (code, _, err) = run(&["fleadevil"]);
    assert_eq!(code, 2);
    assert!(!err.is_empty());
}
