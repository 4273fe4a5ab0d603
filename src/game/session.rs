use crate::bot::ColumnPicker;
use crate::config::GameConfig;
use crate::error::ConfigError;

use super::{Board, Color, Player, PlayerId};

const TIE_MESSAGE: &str = "It's a tie!";

/// Where the session stands. `Won` and `Tied` are terminal; no further turns
/// are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won(PlayerId),
    Tied,
}

/// Why a move attempt was ignored. Never surfaced as an error; the caller
/// simply awaits a different command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    OutOfRange,
    ColumnFull,
    GameOver,
}

/// How a session ended, with the announcement to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Won { winner: PlayerId, message: String },
    Tied { message: String },
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Won { message, .. } | Outcome::Tied { message } => message,
        }
    }
}

/// What a single call to [`GameSession::resolve_turn`] did. `Placed` carries
/// the landing cell for rendering; `outcome` is set on the move that ended
/// the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    Rejected(RejectReason),
    Placed {
        row: usize,
        column: usize,
        player: PlayerId,
        outcome: Option<Outcome>,
    },
}

struct BotSeat {
    id: PlayerId,
    picker: ColumnPicker,
}

/// One game from first drop to win or tie. Owns the board and the ordered
/// player list; created once per game and discarded when it ends, never
/// reset.
pub struct GameSession {
    board: Board,
    players: Vec<Player>,
    current: PlayerId,
    /// The human who moved most recently; the bot's opponent in rotation.
    last_human: PlayerId,
    last_column: Option<usize>,
    bot: Option<BotSeat>,
    status: SessionStatus,
}

impl GameSession {
    /// Build a session from a validated configuration. Fails fast on
    /// degenerate input (zero dimensions, no players, malformed colors)
    /// rather than producing a degenerate board.
    ///
    /// With a bot enabled the bot takes index 0 and the first configured
    /// human opens the game.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut players = Vec::with_capacity(config.players.len() + 1);
        let mut bot = None;
        if config.bot.enabled {
            players.push(Player::bot(&mut rand::rng()));
            bot = Some(BotSeat {
                id: PlayerId(0),
                picker: ColumnPicker::new(config.bot.policy),
            });
        }
        for player in &config.players {
            let color = Color::from_hex(&player.color)
                .map_err(|e| ConfigError::Validation(e.to_string()))?;
            players.push(Player::human(color, player.label.clone()));
        }

        let opener = if config.bot.enabled {
            PlayerId(1)
        } else {
            PlayerId(0)
        };

        Ok(GameSession {
            board: Board::new(config.width, config.height),
            players,
            current: opener,
            last_human: opener,
            last_column: None,
            bot,
            status: SessionStatus::InProgress,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.0]
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn current_is_bot(&self) -> bool {
        self.players[self.current.0].is_bot()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status != SessionStatus::InProgress
    }

    pub fn last_column(&self) -> Option<usize> {
        self.last_column
    }

    /// Process one move attempt for the current player: find the landing row,
    /// place the piece, check win then tie, and otherwise rotate to the next
    /// player. Full or out-of-range columns and terminal sessions reject the
    /// attempt with no state change.
    pub fn resolve_turn(&mut self, column: usize) -> TurnEvent {
        if self.is_terminal() {
            return TurnEvent::Rejected(RejectReason::GameOver);
        }
        if column >= self.board.width() {
            return TurnEvent::Rejected(RejectReason::OutOfRange);
        }
        let Some(row) = self.board.lowest_empty_row(column) else {
            return TurnEvent::Rejected(RejectReason::ColumnFull);
        };

        let player = self.current;
        self.board.place(row, column, player);
        self.last_column = Some(column);
        if !self.players[player.0].is_bot() {
            self.last_human = player;
        }

        // Win takes precedence over tie on the move that fills the last cell.
        let outcome = if self.board.has_connect_four(player) {
            self.status = SessionStatus::Won(player);
            Some(Outcome::Won {
                winner: player,
                message: self.players[player.0].win_message(),
            })
        } else if self.board.is_full() {
            self.status = SessionStatus::Tied;
            Some(Outcome::Tied {
                message: TIE_MESSAGE.to_string(),
            })
        } else {
            self.current = self.next_player();
            None
        };

        TurnEvent::Placed {
            row,
            column,
            player,
            outcome,
        }
    }

    /// Rotation policy. Without a bot: cyclic through the ordered list. With
    /// a bot: strict alternation between the human who just moved and the
    /// bot, so with three or more humans the others never get a turn (see
    /// DESIGN.md, Open Question 1).
    fn next_player(&self) -> PlayerId {
        match &self.bot {
            None => PlayerId((self.current.0 + 1) % self.players.len()),
            Some(seat) => {
                if self.current == seat.id {
                    self.last_human
                } else {
                    seat.id
                }
            }
        }
    }

    /// Select and resolve the bot's move. Returns `None` when no bot is
    /// configured or it is not the bot's turn; the driving loop calls this
    /// exactly once after each successful human move.
    pub fn play_bot_turn(&mut self) -> Option<TurnEvent> {
        let seat = self.bot.as_mut()?;
        if self.status != SessionStatus::InProgress || self.current != seat.id {
            return None;
        }
        let column = seat.picker.pick(&self.board, self.last_column)?;
        Some(self.resolve_turn(column))
    }
}
