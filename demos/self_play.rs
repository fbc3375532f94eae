//! Self-play example for the MCTS player
//!
//! Plays one game of 9x9 NoGo between an MCTS player (black) and a random
//! player (white). Extra command line arguments are passed to the MCTS
//! player as `key=value` properties, for example:
//!
//! ```bash
//! cargo run --example self_play -- N=500 seed=7
//! ```

use nogo_mcts::{Agent, Board, Color, MctsPlayer, NoGoBoard, Player, RandomPlayer};

fn main() {
    // Initialize logging
    env_logger::init();

    println!("MCTS NoGo Self-Play");
    println!("===================");
    println!();

    let extra: Vec<String> = std::env::args().skip(1).collect();
    let black_args = format!("name=mcts role=black {}", extra.join(" "));

    let black = match MctsPlayer::new(&black_args) {
        Ok(player) => player,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let white = RandomPlayer::new("name=random role=white seed=2").expect("valid arguments");
    let mut players: [Box<dyn Player<NoGoBoard>>; 2] = [Box::new(black), Box::new(white)];
    let seat = |color: Color| match color {
        Color::Black => 0,
        Color::White => 1,
    };

    let mut board = NoGoBoard::new();
    for player in players.iter_mut() {
        player.open_episode("");
    }

    loop {
        println!("{}", board);
        println!();

        let action = players[seat(board.side_to_move())].take_action(&board);

        if action.is_null() {
            break;
        }

        println!("{} plays {}", board.side_to_move(), action);
        if !action.apply(&mut board).is_legal() {
            println!("Illegal move from {}!", board.side_to_move());
            break;
        }
    }

    for player in players.iter_mut() {
        player.close_episode("");
    }

    let winner = board.side_to_move().opponent();
    println!("{} ({}) wins!", winner, players[seat(winner)].name());
}
