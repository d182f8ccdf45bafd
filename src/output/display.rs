//! Display functions for game state and command results

use super::formatters::{category_label, feedback_to_emoji, render_guess, render_hint};
use crate::game::{GameSession, GameStatus, Hint, Summary};
use colored::Colorize;

/// Print the opening message of a game
pub fn print_start(session: &GameSession) {
    let options = session.options();
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        "你有{}次机会猜一个四字{}",
        session.max_guesses().to_string().bright_yellow().bold(),
        session.name().bright_cyan().bold()
    );
    if options.hard {
        println!("本局已启用困难模式，可猜次数变为{}，自动禁用提示，自动启用严格模式", options.max_guesses);
    } else if !options.hint_enabled {
        println!("本局已禁用提示");
    }
    if options.strict {
        println!("本局已启用严格模式，仅接受{}回答", session.name());
        if options.confirm {
            println!("本局已启用确认模式，输入回答不为{}时将提示", session.name());
        }
    }
    println!(
        "本局出题范围为：{}",
        category_label(session.selected_categories())
    );
    println!("{}", "═".repeat(60).cyan());
    println!("发送四字词语猜测；“提示”查看提示；“结束”结束游戏\n");
}

/// Print every guess so far, oldest first
pub fn print_board(session: &GameSession) {
    println!(
        "\n正在猜{}({}/{})  范围：{}",
        session.name(),
        session.guesses_used(),
        session.max_guesses(),
        category_label(session.selected_categories())
    );
    for (i, record) in session.guesses().iter().enumerate() {
        println!(
            "  {:>2}. {}  {}",
            (i + 1).to_string().bright_black(),
            render_guess(record),
            feedback_to_emoji(&record.feedback)
        );
    }
    println!();
}

/// Print a hint row
pub fn print_hint(hint: &Hint) {
    println!("\n💡 提示：{}", render_hint(hint));
    if hint.revealed.is_none() {
        println!("   {}", "已经没有更多可以揭示的内容了".bright_black());
    }
    println!();
}

/// Print the end-of-game result and answer card
pub fn print_summary(summary: &Summary) {
    let headline = match summary.status {
        GameStatus::Won => format!(
            "恭喜你猜出了{}！({}/{})",
            summary.name, summary.guesses_used, summary.max_guesses
        )
        .green()
        .bold(),
        GameStatus::Lost => "很遗憾，没有人猜出来呢".red().bold(),
        GameStatus::Stopped | GameStatus::AwaitingGuess => "游戏已结束".yellow().bold(),
    };

    println!("\n{}", "─".repeat(60).cyan());
    println!("{headline}");
    if summary.status != GameStatus::Stopped || summary.guesses_used > 0 {
        println!("{summary}");
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print the category table of a corpus
pub fn print_categories(name: &str, counts: &[(String, usize)]) {
    println!("\n{} {}", name.bright_cyan().bold(), "出题范围".bright_cyan());
    for (category, count) in counts {
        println!("  {category:<16} {}", count.to_string().bright_yellow());
    }
}
