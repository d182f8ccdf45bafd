//! Interactive terminal game
//!
//! Plays one game through a [`SessionRegistry`] keyed by the local player,
//! reading one line of input per turn.

use super::query::{parse_query, query_in_mode, query_word};
use crate::corpus::{Corpus, ModeRegistry};
use crate::game::{
    DEFAULT_TIMEOUT, GameError, GameOptions, GameSession, GuessOutcome, SessionRegistry, Summary,
};
use crate::output::{print_board, print_hint, print_start, print_summary};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use std::sync::{Arc, PoisonError};
use std::time::Duration;

/// Session key of the single local player
const LOCAL_KEY: &str = "local";

/// Configuration for an interactive game
#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub options: GameOptions,
    /// Restrict category sampling to these; empty means all
    pub categories: Vec<String>,
    /// Seed for reproducible answers
    pub seed: Option<u64>,
    /// Idle time after which the game ends
    pub timeout: Duration,
    /// Where `查询` lookups for other modes find their corpora
    pub modes: ModeRegistry,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            options: GameOptions::default(),
            categories: Vec::new(),
            seed: None,
            timeout: DEFAULT_TIMEOUT,
            modes: ModeRegistry::default(),
        }
    }
}

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input<'a> {
    Hint,
    Stop,
    Query { name: &'a str, word: &'a str },
    Guess(&'a str),
}

impl<'a> Input<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        match line.trim() {
            "" => None,
            "提示" | "hint" => Some(Self::Hint),
            "结束" | "结束游戏" | "stop" | "quit" | "q" => Some(Self::Stop),
            line => Some(match parse_query(line) {
                Some((name, word)) => Self::Query { name, word },
                None => Self::Guess(line),
            }),
        }
    }
}

/// Run one game, reading turns from `input`
///
/// Returns the summary of the finished game. End of input stops the game.
///
/// # Errors
///
/// Returns an error if the corpus is empty or input cannot be read.
pub fn run_play<R: BufRead>(
    corpus: Arc<Corpus>,
    config: &PlayConfig,
    mut input: R,
) -> Result<Summary, String> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let registry = SessionRegistry::new();
    let session = GameSession::start(
        Arc::clone(&corpus),
        &config.categories,
        config.options,
        &mut rng,
    )
    .map_err(|e| e.to_string())?;
    print_start(&session);
    registry
        .create(LOCAL_KEY, session)
        .map_err(|e| e.to_string())?;

    let name = corpus.name().to_string();
    let mut line = String::new();

    loop {
        print!("{} ", ">".bright_cyan());
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        let read = input.read_line(&mut line).map_err(|e| e.to_string())?;

        // Timed out while waiting for this line
        if let Some((_, summary)) = registry.sweep_idle(config.timeout).into_iter().next() {
            println!("{}", format!("猜{name}超时，游戏结束。").red());
            print_summary(&summary);
            return Ok(summary);
        }

        if read == 0 {
            let summary = registry.stop(LOCAL_KEY).map_err(|e| e.to_string())?;
            print_summary(&summary);
            return Ok(summary);
        }

        let Some(command) = Input::parse(&line) else {
            continue;
        };

        match command {
            Input::Hint => match registry.hint(LOCAL_KEY) {
                Ok(hint) => print_hint(&hint),
                Err(GameError::HintsDisabled) => println!("本局已禁用提示"),
                Err(GameError::HintOnCooldown { remaining }) => {
                    println!("提示冷却中，距离下一次使用提示还需猜{remaining}次");
                }
                Err(e) => return Err(e.to_string()),
            },
            Input::Query { name: wanted, word } => {
                let reply = if wanted == name {
                    query_word(&corpus, word)
                } else {
                    query_in_mode(&config.modes, wanted, word)
                };
                match reply {
                    Ok(card) | Err(card) => println!("{card}"),
                }
            }
            Input::Stop => {
                let summary = registry.stop(LOCAL_KEY).map_err(|e| e.to_string())?;
                print_summary(&summary);
                return Ok(summary);
            }
            Input::Guess(word) => {
                // Hold the session so the board can be shown after removal
                let session = registry.get(LOCAL_KEY).map_err(|e| e.to_string())?;
                match registry.guess(LOCAL_KEY, word) {
                    Ok(GuessOutcome::Continue(_)) => {
                        print_board(&session.lock().unwrap_or_else(PoisonError::into_inner));
                    }
                    Ok(GuessOutcome::Win(_) | GuessOutcome::Loss(_)) => {
                        let session = session.lock().unwrap_or_else(PoisonError::into_inner);
                        print_board(&session);
                        let summary = session.summary();
                        print_summary(&summary);
                        return Ok(summary);
                    }
                    Ok(GuessOutcome::Duplicate) => println!("你已经猜过这个{name}了呢"),
                    Ok(GuessOutcome::Illegal { confirm: true }) => {
                        println!("你确定这是个{name}吗？");
                    }
                    Ok(GuessOutcome::Illegal { confirm: false }) => {}
                    Err(GameError::InvalidGuessLength { expected, .. }) => {
                        println!("请输入{expected}个字的{name}");
                    }
                    Err(GameError::UnknownPronunciation(ch)) => {
                        println!("不认识“{ch}”的读音，换个词试试吧");
                    }
                    Err(e) => return Err(e.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::tests::sample_corpus;
    use crate::game::{GameStatus, select};
    use std::io::Cursor;

    fn answer_for_seed(corpus: &Corpus, seed: u64) -> String {
        select(corpus, &[], &mut StdRng::seed_from_u64(seed))
            .unwrap()
            .answer
            .word()
            .to_string()
    }

    fn config(seed: u64) -> PlayConfig {
        PlayConfig {
            seed: Some(seed),
            ..PlayConfig::default()
        }
    }

    #[test]
    fn input_parsing() {
        assert_eq!(Input::parse("  提示\n"), Some(Input::Hint));
        assert_eq!(Input::parse("结束"), Some(Input::Stop));
        assert_eq!(Input::parse("人山人海\n"), Some(Input::Guess("人山人海")));
        assert_eq!(
            Input::parse("查询成语守株待兔"),
            Some(Input::Query {
                name: "成语",
                word: "守株待兔"
            })
        );
        assert_eq!(Input::parse("   \n"), None);
    }

    #[test]
    fn play_to_win() {
        let corpus = Arc::new(sample_corpus());
        let answer = answer_for_seed(&corpus, 11);
        let wrong = if answer == "一心一意" { "三心二意" } else { "一心一意" };

        let script = format!("提示\n{wrong}\n{wrong}\n{answer}\n");
        let summary = run_play(corpus, &config(11), Cursor::new(script)).unwrap();

        assert_eq!(summary.status, GameStatus::Won);
        assert_eq!(summary.answer.word(), answer);
        assert_eq!(summary.guesses_used, 2);
    }

    #[test]
    fn play_stop_command() {
        let corpus = Arc::new(sample_corpus());
        let summary = run_play(corpus, &config(5), Cursor::new("结束\n")).unwrap();
        assert_eq!(summary.status, GameStatus::Stopped);
        assert_eq!(summary.guesses_used, 0);
    }

    #[test]
    fn play_lookup_does_not_use_a_turn() {
        let corpus = Arc::new(sample_corpus());
        let summary = run_play(
            corpus,
            &config(5),
            Cursor::new("查询成语守株待兔\n查询舟语一心一意\n结束\n"),
        )
        .unwrap();
        assert_eq!(summary.status, GameStatus::Stopped);
        assert_eq!(summary.guesses_used, 0);
    }

    #[test]
    fn play_end_of_input_stops() {
        let corpus = Arc::new(sample_corpus());
        let summary = run_play(corpus, &config(5), Cursor::new("人山\n")).unwrap();
        assert_eq!(summary.status, GameStatus::Stopped);
    }

    #[test]
    fn play_hard_mode_loses_after_five() {
        let corpus = Arc::new(sample_corpus());
        let answer = answer_for_seed(&corpus, 3);
        let misses: Vec<&str> = corpus
            .answers()
            .iter()
            .map(|a| a.word())
            .filter(|w| *w != answer)
            .take(5)
            .collect();

        let config = PlayConfig {
            options: GameOptions::hard(),
            ..config(3)
        };
        // Illegal and hint inputs in between do not consume turns
        let script = format!("山心人意\n提示\n{}\n", misses.join("\n"));
        let summary = run_play(corpus, &config, Cursor::new(script)).unwrap();

        assert_eq!(summary.status, GameStatus::Lost);
        assert_eq!(summary.guesses_used, 5);
        assert_eq!(summary.max_guesses, 5);
    }

    #[test]
    fn play_times_out() {
        let corpus = Arc::new(sample_corpus());
        let config = PlayConfig {
            timeout: Duration::ZERO,
            ..config(5)
        };
        let summary = run_play(corpus, &config, Cursor::new("一心一意\n")).unwrap();
        assert_eq!(summary.status, GameStatus::Stopped);
        assert_eq!(summary.guesses_used, 0);
    }
}
