pub mod human;
pub mod terminal_guard;
pub mod tick_clock;

pub use human::HumanMode;
pub use terminal_guard::{TerminalControl, TerminalGuard};
pub use tick_clock::TickClock;
