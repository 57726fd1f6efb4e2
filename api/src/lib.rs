mod card;
mod cards;
mod error;
mod game_phase;
mod game_state;
mod mission;
mod moves;
mod player;
mod seat;
mod seed;
mod suit;
mod task;
mod teammate;
mod token;
mod trick;
mod view;

pub use card::*;
pub use cards::*;
pub use error::*;
pub use game_phase::*;
pub use game_state::*;
pub use mission::*;
pub use moves::*;
pub use player::*;
pub use seat::*;
pub use seed::*;
pub use suit::*;
pub use task::*;
pub use teammate::*;
pub use token::*;
pub use trick::*;
pub use view::*;
