//! Terminal blackjack loop on top of the round engine.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{
    Action, Card, Outcome, Rank, RoundPhase, RoundView, Session, SessionConfig, Suit,
};

struct CliOptions {
    decks: u32,
    seed: Option<u64>,
    ascii: bool,
}

fn parse_args() -> CliOptions {
    let mut options = CliOptions {
        decks: 6,
        seed: None,
        ascii: false,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--decks" => {
                if let Some(value) = args.next().and_then(|v| v.parse().ok()) {
                    options.decks = value;
                }
            }
            "--seed" => {
                options.seed = args.next().and_then(|v| v.parse().ok());
            }
            "--ascii" => options.ascii = true,
            other => println!("Ignoring unknown argument: {other}"),
        }
    }

    options
}

fn main() {
    println!("Terminal Blackjack (type 'q' to quit). Dealer stands on all 17s.");

    let options = parse_args();
    let seed = options.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let config = SessionConfig::default().with_deck_count(options.decks);
    let mut session = match Session::new(config, seed) {
        Ok(session) => session,
        Err(err) => {
            println!("Configuration error: {err}");
            return;
        }
    };

    loop {
        if session.chips() < session.config().min_bet {
            println!("Not enough chips for the table minimum. Game over.");
            break;
        }

        let Some(bet) = prompt_bet(&session) else {
            break;
        };

        let mut view = match session.place_bet(bet) {
            Ok(view) => view,
            Err(err) => {
                println!("Bet error: {err}");
                continue;
            }
        };

        while view.phase == RoundPhase::PlayerTurn {
            print_table(&view, true, options.ascii);

            let action = match prompt_line("Hit or stand? [h/s]: ").as_str() {
                "h" | "hit" => Action::Hit,
                "s" | "stand" => Action::Stand,
                "q" | "quit" => return,
                _ => {
                    println!("Please enter 'h' to hit or 's' to stand.");
                    continue;
                }
            };

            view = match session.player_action(action) {
                Ok(view) => view,
                Err(err) => {
                    println!("Action error: {err}");
                    return;
                }
            };
        }

        print_table(&view, false, options.ascii);

        match session.settle() {
            Ok(settlement) => {
                println!("{}", describe_outcome(settlement.outcome));
                println!(
                    "Bet {} | payout {} | bankroll {}",
                    format_chips(settlement.bet),
                    format_chips(settlement.payout),
                    format_chips(settlement.chips),
                );

                let stats = settlement.stats;
                println!(
                    "Rounds {} | W-L-P {}-{}-{} | net {}",
                    stats.hands_played,
                    stats.wins,
                    stats.losses,
                    stats.pushes,
                    format_net(stats.net),
                );

                if settlement.reshuffled {
                    println!("Shoe reshuffled ({} cards).", session.shoe_remaining());
                }
            }
            Err(err) => {
                println!("Settlement error: {err}");
                return;
            }
        }

        println!();
    }

    println!(
        "Thanks for playing! Final bankroll: {}",
        format_chips(session.chips())
    );
}

fn prompt_bet(session: &Session) -> Option<u64> {
    let min = session.config().min_bet;
    let chips = session.chips();

    loop {
        let input = prompt_line(&format!(
            "Bet in cents (min {}, bankroll {}) or 'q' to quit: ",
            format_chips(min),
            format_chips(chips),
        ));
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u64>() {
            Ok(0) => return None,
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a whole number of cents."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(view: &RoundView, hide_hole: bool, ascii: bool) {
    println!();

    if hide_hole {
        // The engine reports the full dealer hand; masking the hole card is
        // this renderer's job.
        let up = view
            .dealer_up_card
            .map_or_else(|| "(no cards)".to_string(), |card| format_card(card, ascii));
        println!("Dealer: {up} ??");
    } else {
        println!(
            "Dealer: {} (total {})",
            format_cards(&view.dealer_cards, ascii),
            view.dealer_total,
        );
    }

    let soft = if view.player_is_soft { ", soft" } else { "" };
    println!(
        "You:    {} (total {}{soft})",
        format_cards(&view.player_cards, ascii),
        view.player_total,
    );
    println!();
}

fn describe_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::BlackjackWin => "Blackjack! You win 3:2.",
        Outcome::Win => "You win!",
        Outcome::DealerBustWin => "Dealer busts. You win!",
        Outcome::Push => "Push.",
        Outcome::Loss => "Dealer wins. You lose.",
        Outcome::BustLoss => "You busted. You lose.",
    }
}

fn format_cards(cards: &[Card], ascii: bool) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(|card| format_card(*card, ascii))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card, ascii: bool) -> String {
    let (symbol, color_code) = match (card.suit, ascii) {
        (Suit::Hearts, false) => ("\u{2665}", "31"),
        (Suit::Hearts, true) => ("H", "31"),
        (Suit::Diamonds, false) => ("\u{2666}", "31"),
        (Suit::Diamonds, true) => ("D", "31"),
        (Suit::Clubs, false) => ("\u{2663}", "32"),
        (Suit::Clubs, true) => ("C", "32"),
        (Suit::Spades, false) => ("\u{2660}", "34"),
        (Suit::Spades, true) => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    };

    format!("{rank}{}", colorize(symbol, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_chips(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

fn format_net(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "+" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}
