mod common;

use common::StripBoard;
use nogo_mcts::{
    agent::{Agent, MctsPlayer, Player, Properties, RandomPlayer},
    config::RewardPerspective,
    Board, Color, MCTSError, NoGoBoard,
};

#[test]
fn test_properties_parsing() {
    let properties = Properties::parse("name=first role=black name=second flag N=300");

    assert_eq!(properties.get("name"), Some("second"), "later pairs win");
    assert_eq!(properties.get("role"), Some("black"));
    assert_eq!(properties.get("flag"), Some("flag"));
    assert_eq!(properties.parse_value::<usize>("N").unwrap(), Some(300));
    assert_eq!(properties.parse_value::<usize>("missing").unwrap(), None);
    assert!(matches!(
        properties.require("missing"),
        Err(MCTSError::MissingProperty(_))
    ));
}

#[test]
fn test_mcts_player_configuration() {
    let player = MctsPlayer::new("name=tree role=white N=500 c=0.7 reward=mover seed=3").unwrap();

    assert_eq!(player.name(), "tree");
    assert_eq!(player.role(), "white");
    assert_eq!(player.color(), Color::White);
    assert_eq!(player.config().max_iterations, 500);
    assert_eq!(player.config().exploration_constant, 0.7);
    assert_eq!(player.config().reward_perspective, RewardPerspective::NodeMover);
}

#[test]
fn test_mcts_player_defaults() {
    let player = MctsPlayer::new("role=black").unwrap();

    assert_eq!(player.name(), "mcts");
    assert_eq!(player.config().max_iterations, 200);
    assert_eq!(player.config().reward_perspective, RewardPerspective::SearchRoot);
}

#[test]
fn test_invalid_arguments() {
    assert!(matches!(
        MctsPlayer::new("name=bad;name role=black"),
        Err(MCTSError::InvalidName(_))
    ));
    assert!(matches!(
        MctsPlayer::new("role=green"),
        Err(MCTSError::InvalidRole(_))
    ));
    assert!(matches!(
        MctsPlayer::new(""),
        Err(MCTSError::InvalidRole(_))
    ));
    assert!(matches!(
        MctsPlayer::new("role=black N=many"),
        Err(MCTSError::InvalidProperty { .. })
    ));
    assert!(matches!(
        MctsPlayer::new("role=black c=-2"),
        Err(MCTSError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        RandomPlayer::new("name=x(y) role=white"),
        Err(MCTSError::InvalidName(_))
    ));
}

#[test]
fn test_notify_updates_properties() {
    let mut player = RandomPlayer::new("role=black").unwrap();
    player.notify("name=renamed");
    player.notify("note=hello");

    assert_eq!(player.name(), "renamed");
    assert_eq!(player.property("note"), Some("hello"));
}

#[test]
fn test_mcts_player_is_reproducible() {
    let board = NoGoBoard::new();
    let mut first = MctsPlayer::new("role=black N=50 seed=8").unwrap();
    let mut second = MctsPlayer::new("role=black N=50 seed=8").unwrap();

    for _ in 0..3 {
        assert_eq!(first.take_action(&board), second.take_action(&board));
    }
}

#[test]
fn test_mcts_player_on_finished_game() {
    let mut player = MctsPlayer::new("role=black N=10").unwrap();
    assert!(player.take_action(&StripBoard::new(0)).is_null());
    assert!(!player.check_for_win(&StripBoard::new(0)));
}

#[test]
fn test_random_player_moves() {
    let mut player = RandomPlayer::new("role=black seed=4").unwrap();
    let board = NoGoBoard::new();

    let action = player.take_action(&board);
    assert!(board.is_legal(action.cell().unwrap()));
    assert_eq!(action.color(), Some(Color::Black));

    assert!(player.take_action(&StripBoard::new(0)).is_null());
    assert!(
        player
            .take_action(&NoGoBoard::new().with_side_to_move(Color::White))
            .is_null(),
        "a black player cannot move for white"
    );
}

#[test]
fn test_full_game_between_players() {
    let mut black = MctsPlayer::new("role=black N=20 seed=1").unwrap();
    let mut white = RandomPlayer::new("role=white seed=2").unwrap();
    let mut board = NoGoBoard::new();

    black.open_episode("");
    white.open_episode("");

    let mut moves = 0;
    loop {
        let action = match board.side_to_move() {
            Color::Black => black.take_action(&board),
            Color::White => white.take_action(&board),
        };
        if action.is_null() {
            break;
        }
        assert!(action.apply(&mut board).is_legal());
        moves += 1;
        assert!(moves <= 81, "a game cannot outlast the board");
    }

    black.close_episode("");
    white.close_episode("");

    assert_eq!(board.legal_move_count(), 0);
    assert_eq!(board.stone_count(), moves);
}

#[test]
fn test_boxed_players_share_a_game() {
    let mut players: Vec<Box<dyn Player<NoGoBoard>>> = vec![
        Box::new(RandomPlayer::new("name=first role=black seed=5").unwrap()),
        Box::new(MctsPlayer::new("name=second role=white N=20 seed=6").unwrap()),
    ];
    assert_eq!(players[0].name(), "first");
    assert_eq!(players[1].role(), "white");

    let mut board = NoGoBoard::new();
    for player in players.iter_mut() {
        player.open_episode("");
    }

    let mut moves = 0;
    loop {
        let turn = match board.side_to_move() {
            Color::Black => 0,
            Color::White => 1,
        };
        let action = players[turn].take_action(&board);
        if action.is_null() {
            break;
        }
        assert_eq!(action.color(), Some(board.side_to_move()));
        assert!(action.apply(&mut board).is_legal());
        moves += 1;
    }

    for player in players.iter_mut() {
        player.close_episode("");
        assert!(!player.check_for_win(&board));
    }
    assert!(moves > 0);
    assert_eq!(board.legal_move_count(), 0);
}
