use rand::SeedableRng;
use rand::rngs::StdRng;
use reverse_wordle::cli::{Cli, CliInterface, parse_cli};
use reverse_wordle::history::{read_history, write_history};
use reverse_wordle::logging::init_logger;
use reverse_wordle::wordbank::EMBEDDED_WORDBANK;
use reverse_wordle::{
    Game, Lexicon, Result, SessionConfig, game_loop, info_log, load_wordbank_from_file,
    load_wordbank_from_str,
};
use std::io;
use std::process::ExitCode;

fn load_lexicon(cli: &Cli) -> Result<Lexicon> {
    match &cli.wordbank_path {
        Some(path) => load_wordbank_from_file(path, cli.word_length),
        None => load_wordbank_from_str(EMBEDDED_WORDBANK, cli.word_length),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = SessionConfig::new(cli.word_length, cli.max_guesses)?;
    let lexicon = load_lexicon(cli)?;
    println!("Loaded {} words.", lexicon.len());

    let history_path = cli.history_path();
    let history = match &history_path {
        Some(path) => read_history(path)?,
        None => Vec::new(),
    };
    let previous_games = history.len();

    let mut game = Game::new(lexicon, config, cli.selector())?.with_history(history);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info_log!("Starting with the {} selector", game.selector_name());

    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock());
    game_loop(&mut game, &mut interface, &mut rng);

    if let Some(path) = history_path {
        if game.history().len() > previous_games {
            write_history(&path, game.history())?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logger(cli.verbose);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
