//! Game session - owns all simulation state and the per-frame step
//!
//! One [`GameSession`] value is the whole game: playfield, active piece,
//! piece sequence, drop clock, and the pause/game-over flags. A host drives
//! it with [`tick`](GameSession::tick) once per display refresh and forwards
//! discrete user intents between frames.
//!
//! Every mutating entry point is a silent no-op while paused or after the
//! game-over latch has set; [`reset`](GameSession::reset) is the only way
//! out of game over. Lock, line clear, and respawn happen as one
//! uninterruptible step inside a single call.

use blockfall_types::GameIntent;

use crate::collision::is_valid_move;
use crate::piece::ActivePiece;
use crate::placement;
use crate::playfield::Playfield;
use crate::scheduler::DropClock;
use crate::sequence::PieceSequence;
use crate::snapshot::{ActiveSnapshot, SessionSnapshot};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    playfield: Playfield,
    active: ActivePiece,
    sequence: PieceSequence,
    clock: DropClock,
    paused: bool,
    game_over: bool,
    lines_cleared: u32,
}

impl GameSession {
    /// Create a session with the given RNG seed, first piece already staged.
    pub fn new(seed: u32) -> Self {
        let mut sequence = PieceSequence::new(seed);
        let active = ActivePiece::spawn(sequence.draw());
        Self {
            playfield: Playfield::new(),
            active,
            sequence,
            clock: DropClock::default(),
            paused: false,
            game_over: false,
            lines_cleared: 0,
        }
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// One display-frame step.
    ///
    /// Counts the frame and, when a drop is due, advances the active piece
    /// one row - or locks it in place when the row below does not fit.
    /// Returns true when the piece descended or locked this frame.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        if !self.clock.tick() {
            return false;
        }
        self.descend_or_lock();
        true
    }

    /// Manual drop: the same single descent check the scheduler makes,
    /// locking immediately when blocked.
    pub fn soft_drop(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        self.descend_or_lock();
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    fn shift(&mut self, dc: i8) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        let col = self.active.col + dc;
        if is_valid_move(&self.active.matrix, self.active.row, col, &self.playfield) {
            self.active.col = col;
            return true;
        }
        false
    }

    /// Clockwise rotation in place; silently rejected when the turned
    /// matrix does not fit at the current position.
    pub fn rotate(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        let matrix = self.active.matrix.rotated();
        if is_valid_move(&matrix, self.active.row, self.active.col, &self.playfield) {
            self.active.matrix = matrix;
            return true;
        }
        false
    }

    /// Flip Running/Paused. Ignored after game over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Dispatch a host intent. Returns whether it changed state.
    pub fn apply_intent(&mut self, intent: GameIntent) -> bool {
        match intent {
            GameIntent::MoveLeft => self.move_left(),
            GameIntent::MoveRight => self.move_right(),
            GameIntent::Rotate => self.rotate(),
            GameIntent::SoftDrop => self.soft_drop(),
            GameIntent::TogglePause => self.toggle_pause(),
        }
    }

    /// Start a new game in place: fresh playfield, clock, counters, and
    /// active piece, reinitialized together. The piece stream continues
    /// from the current RNG state rather than replaying the old game.
    pub fn reset(&mut self) {
        *self = Self::new(self.sequence.seed());
    }

    fn descend_or_lock(&mut self) {
        let row = self.active.row + 1;
        if is_valid_move(&self.active.matrix, row, self.active.col, &self.playfield) {
            self.active.row = row;
        } else {
            self.lock_active();
        }
    }

    /// Lock, clear, and respawn as one transition. A lock reaching above
    /// row 0 latches game over instead and leaves the playfield untouched.
    fn lock_active(&mut self) {
        match placement::lock(&mut self.playfield, &self.active) {
            Some(cleared) => {
                self.lines_cleared += cleared;
                self.active = ActivePiece::spawn(self.sequence.draw());
            }
            None => {
                self.game_over = true;
            }
        }
    }

    /// Fill a caller-owned snapshot with the current frame's view.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.playfield.write_u8_grid(&mut out.board);
        out.active = ActiveSnapshot::from(self.active);
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.lines_cleared = self.lines_cleared;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
