mod common;

use bulls_and_cows::{
    ChainBuilder, ChainError, Code, CommandChain, CommandContext, CommandHandler, GameState,
    Outcome, HELP_COMMAND, QUIT_COMMAND, RESTART_COMMAND,
};
use bulls_and_cows::command::{GuessHandler, UnrecognizedHandler};
use common::{Event, RecordingPrinter, ScriptedRandom};

fn dispatch(chain: &CommandChain, state: &mut GameState, command: &str) -> (Outcome, Vec<Event>) {
    let mut rng = ScriptedRandom::new(&[0]);
    let mut printer = RecordingPrinter::new();
    let outcome = {
        let mut ctx = CommandContext {
            state,
            rng: &mut rng,
            printer: &mut printer,
        };
        chain.dispatch(command, &mut ctx)
    };
    (outcome, printer.events)
}

fn state(secret: &str) -> GameState {
    GameState::new(Code::parse(secret).unwrap())
}

#[test]
fn test_chain_without_fallback_is_rejected() {
    let err = ChainBuilder::new().with(GuessHandler).build().err();
    assert_eq!(err, Some(ChainError::MissingTerminal));
    assert_eq!(
        ChainError::MissingTerminal.to_string(),
        "Command chain has no terminal handler"
    );
}

#[test]
fn test_standard_chain_has_four_handlers() {
    let chain = CommandChain::standard().unwrap();
    assert_eq!(chain.len(), 4);
    assert!(!chain.is_empty());
}

#[test]
fn test_guess_reports_and_solves() {
    let chain = CommandChain::standard().unwrap();
    let mut st = state("1234");

    let (outcome, events) = dispatch(&chain, &mut st, "4321");
    assert_eq!(outcome, Outcome::Continue);
    assert_eq!(events, vec![Event::Guess { bulls: 0, cows: 4 }]);
    assert!(!st.is_solved());

    let (_, events) = dispatch(&chain, &mut st, "1234");
    assert_eq!(events, vec![Event::Guess { bulls: 4, cows: 0 }]);
    assert!(st.is_solved());
}

#[test]
fn test_wrong_length_guess_changes_nothing() {
    let chain = CommandChain::standard().unwrap();
    let mut st = state("1234");
    let before = st.clone();

    let (outcome, events) = dispatch(&chain, &mut st, "12");
    assert_eq!(outcome, Outcome::Continue);
    assert_eq!(
        events,
        vec![Event::WrongLength {
            expected: 4,
            got: 2
        }]
    );
    let (_, events) = dispatch(&chain, &mut st, "123412");
    assert_eq!(
        events,
        vec![Event::WrongLength {
            expected: 4,
            got: 6
        }]
    );
    assert_eq!(st, before);
}

#[test]
fn test_signed_numbers_are_rejected_as_guesses() {
    let chain = CommandChain::standard().unwrap();
    let mut st = state("1234");
    let before = st.clone();

    for input in ["+1234", "-12", "-1234", " -0001 "] {
        let (outcome, events) = dispatch(&chain, &mut st, input);
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(events, vec![Event::NotACode(input.trim().to_string())]);
    }
    assert_eq!(st, before);
    assert!(!st.is_solved());
}

#[test]
fn test_help_reveals_and_shows_mask() {
    let chain = CommandChain::standard().unwrap();
    let mut st = state("5137");

    let (outcome, events) = dispatch(&chain, &mut st, "help");
    assert_eq!(outcome, Outcome::Continue);
    assert_eq!(events, vec![Event::Mask("5XXX".to_string())]);
    assert_eq!(st.cheat_attempts(), 1);
}

#[test]
fn test_keywords_ignore_case_and_whitespace() {
    let chain = CommandChain::standard().unwrap();
    let mut st = state("5137");

    assert_eq!(dispatch(&chain, &mut st, "  RESTART ").0, Outcome::Restart);
    assert_eq!(dispatch(&chain, &mut st, "Quit").0, Outcome::Quit);
    let (_, events) = dispatch(&chain, &mut st, " 5137\t");
    assert_eq!(events, vec![Event::Guess { bulls: 4, cows: 0 }]);
}

#[test]
fn test_keyword_constants_drive_dispatch() {
    let chain = CommandChain::standard().unwrap();
    let mut st = state("5137");

    assert_eq!(dispatch(&chain, &mut st, RESTART_COMMAND).0, Outcome::Restart);
    assert_eq!(dispatch(&chain, &mut st, QUIT_COMMAND).0, Outcome::Quit);
    let (outcome, events) = dispatch(&chain, &mut st, HELP_COMMAND);
    assert_eq!(outcome, Outcome::Continue);
    assert_eq!(events.len(), 1);
    assert_eq!(st.cheat_attempts(), 1);
}

#[test]
fn test_unrecognized_input_falls_through() {
    let chain = CommandChain::standard().unwrap();
    let mut st = state("5137");
    let before = st.clone();

    for input in ["banana", "", "-", "+-12", "12 34", "help me"] {
        let (outcome, events) = dispatch(&chain, &mut st, input);
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(events, vec![Event::Unrecognized(input.trim().to_string())]);
    }
    assert_eq!(st, before);
}

struct HintHandler;

impl CommandHandler for HintHandler {
    fn handle(&self, command: &str, _ctx: &mut CommandContext<'_>) -> Option<Outcome> {
        (command == "hint").then_some(Outcome::Quit)
    }
}

#[test]
fn test_custom_handler_extends_chain() {
    let chain = ChainBuilder::new()
        .with(HintHandler)
        .with(GuessHandler)
        .fallback(UnrecognizedHandler)
        .build()
        .unwrap();
    let mut st = state("5137");

    assert_eq!(dispatch(&chain, &mut st, "hint").0, Outcome::Quit);
    // not registered here, so it reaches the fallback
    let (outcome, events) = dispatch(&chain, &mut st, "help");
    assert_eq!(outcome, Outcome::Continue);
    assert_eq!(events, vec![Event::Unrecognized("help".to_string())]);
}
