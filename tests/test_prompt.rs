use go_deps_hook::prompt::{Prompter, Response, TerminalPrompter};
use go_deps_hook::HookError;

#[test]
fn normalizes_answers() {
    for input in ["", "yes", "Y", "  y  \n", "YES"] {
        assert_eq!(Response::parse(input), Some(Response::Yes), "input {input:?}");
    }
    for input in ["NO", "n", "No\n"] {
        assert_eq!(Response::parse(input), Some(Response::No), "input {input:?}");
    }
    assert_eq!(Response::parse("Always"), Some(Response::Always));
    assert_eq!(Response::parse(" never "), Some(Response::Never));
    assert_eq!(Response::parse("maybe"), None);
    assert_eq!(Response::parse("yess"), None);
}

#[test]
fn reprompts_until_recognized() {
    let input: &[u8] = b"maybe\nsure\nn\n";
    let mut output = Vec::new();
    let response = {
        let mut prompter = TerminalPrompter::new(input, &mut output);
        prompter.ask("Run gazelle to fix these packages?").unwrap()
    };
    assert_eq!(response, Response::No);

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.matches("Invalid response.").count(), 2);
    assert_eq!(text.matches("Run gazelle to fix these packages?").count(), 3);
    assert!(text.contains("(yes)/always/no/never"));
}

#[test]
fn blank_line_accepts_default() {
    let input: &[u8] = b"\n";
    let mut prompter = TerminalPrompter::new(input, Vec::new());
    assert_eq!(prompter.ask("Proceed?").unwrap(), Response::Yes);
}

#[test]
fn closed_input_stops_the_loop() {
    let input: &[u8] = b"what\n";
    let mut prompter = TerminalPrompter::new(input, Vec::new());
    assert!(matches!(prompter.ask("Proceed?"), Err(HookError::PromptClosed)));
}
