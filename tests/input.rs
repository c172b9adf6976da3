use ninja_star::input::Command;
use rstest::rstest;

#[rstest]
#[case("1", Some(Command::Reset))]
#[case("a", Some(Command::Reset))]
#[case("A", Some(Command::Reset))]
#[case("2", Some(Command::Swing))]
#[case("b", Some(Command::Swing))]
#[case("3", Some(Command::Shade))]
#[case("c", Some(Command::Shade))]
#[case("4", None)]
#[case("d", None)]
#[case(" ", None)]
#[case("", None)]
#[case("Enter", None)]
#[case("ArrowLeft", None)]
fn maps_keys(#[case] key: &str, #[case] expected: Option<Command>) {
    assert_eq!(Command::from_key(key), expected);
}
