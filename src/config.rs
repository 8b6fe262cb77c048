/// Number of digits in the secret and in every accepted guess.
pub const CODE_LEN: usize = 4;

/// Inclusive range the secret is drawn from. Both ends have exactly
/// `CODE_LEN` digits, so no padding is ever needed.
pub const SECRET_MIN: u32 = 1000;
/// Largest secret; the top of the four-digit range.
pub const SECRET_MAX: u32 = 9999;

/// One reveal per digit position.
pub const MAX_CHEATS: usize = CODE_LEN;

/// Symbol shown for a slot of the reveal mask that is still hidden.
pub const HIDDEN_SLOT: char = 'X';

/// How many leaderboard rows the console printer shows.
pub const LEADERBOARD_DISPLAY: usize = 10;

/// Name recorded when the player enters nothing.
pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";

/// Reveals one more digit of the secret.
pub const HELP_COMMAND: &str = "help";
/// Starts a new game, or another one after a win.
pub const RESTART_COMMAND: &str = "restart";
/// Leaves the game without recording a score.
pub const QUIT_COMMAND: &str = "quit";
