//! Players that pick moves for one side of a game
//!
//! Agents are configured from a whitespace-separated `key=value` argument
//! string such as `"name=mcts role=black N=500 seed=7"`. Recognised keys:
//!
//! - `name`: display name, must not contain any of `[]():; `
//! - `role`: `black` or `white`
//! - `seed`: seed for the agent's random generator
//! - `N`: iterations per decision (MCTS only)
//! - `c`: UCB exploration constant (MCTS only)
//! - `reward`: `root` or `mover`, see [`RewardPerspective`] (MCTS only)
//!
//! Any other key is kept and can be read back with [`Agent::property`].
//!
//! [`Agent`] covers the setup and bookkeeping shared by every agent, while
//! [`Player`] adds move selection for one kind of board. Players for the same
//! board can be mixed behind `Box<dyn Player<B>>`.

use std::collections::HashMap;
use std::str::FromStr;

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{
    config::{MCTSConfig, RewardPerspective},
    game_state::{Action, Board, Color, CELLS},
    mcts::MCTS,
    MCTSError, Result,
};

/// Seed used when an agent is created without a `seed` property
pub const DEFAULT_SEED: u64 = 1;

const FORBIDDEN_NAME_CHARS: &[char] = &['[', ']', '(', ')', ':', ';', ' '];

/// Key/value properties of an agent
#[derive(Debug, Clone, Default)]
pub struct Properties {
    meta: HashMap<String, String>,
}

impl Properties {
    /// Parses a `key=value` argument string
    ///
    /// Later pairs override earlier ones. A token without `=` is stored with
    /// itself as both key and value.
    pub fn parse(args: &str) -> Self {
        let mut properties = Properties::default();
        for pair in args.split_whitespace() {
            properties.notify(pair);
        }
        properties
    }

    /// Stores a single `key=value` message
    pub fn notify(&mut self, message: &str) {
        let (key, value) = message.split_once('=').unwrap_or((message, message));
        self.set(key, value);
    }

    /// Sets `key` to `value`
    pub fn set(&mut self, key: &str, value: &str) {
        self.meta.insert(key.to_string(), value.to_string());
    }

    /// Returns the raw value of `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }

    /// Returns the raw value of `key`, failing if it is absent
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| MCTSError::MissingProperty(key.to_string()))
    }

    /// Parses the value of `key`, or returns `None` if it is absent
    pub fn parse_value<T: FromStr>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key) {
            None => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| MCTSError::InvalidProperty {
                    key: key.to_string(),
                    value: raw.to_string(),
                }),
        }
    }

    fn validated_name(&self) -> Result<()> {
        let name = self.require("name")?;
        if name.contains(FORBIDDEN_NAME_CHARS) {
            return Err(MCTSError::InvalidName(name.to_string()));
        }
        Ok(())
    }

    fn validated_role(&self) -> Result<Color> {
        match self.require("role")? {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            other => Err(MCTSError::InvalidRole(other.to_string())),
        }
    }

    fn seeded_rng(&self) -> Result<StdRng> {
        let seed = self.parse_value::<u64>("seed")?.unwrap_or(DEFAULT_SEED);
        Ok(StdRng::seed_from_u64(seed))
    }
}

/// An agent taking part in a game
pub trait Agent {
    /// Returns the agent's properties
    fn properties(&self) -> &Properties;

    /// Returns the agent's properties mutably
    fn properties_mut(&mut self) -> &mut Properties;

    /// Called before the first move of a game
    fn open_episode(&mut self, _flag: &str) {}

    /// Called after the last move of a game
    fn close_episode(&mut self, _flag: &str) {}

    /// Returns the value of a property
    fn property(&self, key: &str) -> Option<&str> {
        self.properties().get(key)
    }

    /// Updates a property from a `key=value` message
    fn notify(&mut self, message: &str) {
        self.properties_mut().notify(message);
    }

    fn name(&self) -> &str {
        self.property("name").unwrap_or("unknown")
    }

    fn role(&self) -> &str {
        self.property("role").unwrap_or("unknown")
    }
}

/// An agent that picks moves on boards of type `B`
pub trait Player<B: Board>: Agent {
    /// Chooses a move for the given position
    fn take_action(&mut self, board: &B) -> Action;

    /// Returns true if the player considers the game won
    fn check_for_win(&self, _board: &B) -> bool {
        false
    }
}

/// Player that picks moves with Monte Carlo Tree Search
///
/// Every decision builds a new tree from the given position; nothing is
/// carried over between moves except the random generator.
///
/// # Example
///
/// ```
/// use nogo_mcts::{agent::{MctsPlayer, Player}, NoGoBoard};
///
/// let mut player = MctsPlayer::new("role=black N=20 seed=3").unwrap();
/// let action = player.take_action(&NoGoBoard::new());
/// assert!(!action.is_null());
/// ```
#[derive(Debug)]
pub struct MctsPlayer {
    properties: Properties,
    config: MCTSConfig,
    color: Color,
    rng: StdRng,
}

impl MctsPlayer {
    /// Creates a player from a `key=value` argument string
    pub fn new(args: &str) -> Result<Self> {
        let properties = Properties::parse(&format!("name=mcts role=unknown {}", args));
        properties.validated_name()?;
        let color = properties.validated_role()?;

        let mut config = MCTSConfig::default();
        if let Some(iterations) = properties.parse_value::<usize>("N")? {
            config = config.with_max_iterations(iterations);
        }
        if let Some(constant) = properties.parse_value::<f64>("c")? {
            config = config.with_exploration_constant(constant);
        }
        if let Some(perspective) = properties.get("reward") {
            config = config.with_reward_perspective(perspective.parse::<RewardPerspective>()?);
        }
        config.validate()?;

        let rng = properties.seeded_rng()?;

        Ok(MctsPlayer {
            properties,
            config,
            color,
            rng,
        })
    }

    /// Returns the color this player plays
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the search configuration
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }
}

impl Agent for MctsPlayer {
    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }
}

impl<B: Board + 'static> Player<B> for MctsPlayer {
    fn take_action(&mut self, board: &B) -> Action {
        let mut mcts = MCTS::new(board.clone(), self.config.clone());
        let action = mcts.search(&mut self.rng);
        if action.is_null() {
            log::warn!("{} found no legal move", self.properties.get("name").unwrap_or("mcts"));
        }
        action
    }
}

/// Player that places a stone on a uniformly random legal cell
#[derive(Debug)]
pub struct RandomPlayer {
    properties: Properties,
    space: Vec<Action>,
    color: Color,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a player from a `key=value` argument string
    pub fn new(args: &str) -> Result<Self> {
        let properties = Properties::parse(&format!("name=random role=unknown {}", args));
        properties.validated_name()?;
        let color = properties.validated_role()?;
        let rng = properties.seeded_rng()?;
        let space = (0..CELLS).map(|cell| Action::place(cell, color)).collect();

        Ok(RandomPlayer {
            properties,
            space,
            color,
            rng,
        })
    }

    /// Returns the color this player plays
    pub fn color(&self) -> Color {
        self.color
    }
}

impl Agent for RandomPlayer {
    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }
}

impl<B: Board> Player<B> for RandomPlayer {
    fn take_action(&mut self, board: &B) -> Action {
        self.space.shuffle(&mut self.rng);
        let found = self
            .space
            .iter()
            .find(|action| action.apply(&mut board.clone()).is_legal())
            .copied();

        found.unwrap_or_else(|| {
            log::warn!("{} found no legal move", self.properties.get("name").unwrap_or("random"));
            Action::null()
        })
    }
}
