//! One module per dashboard tab, each adding its controller to `Dashboard`.

mod circuits;
mod entrants;
mod options;
mod overview;

pub use circuits::CircuitView;
pub use entrants::EntrantView;
pub use options::OptionsView;
pub use overview::OverviewView;
