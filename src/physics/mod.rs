mod model;
mod stall;
mod traits;

pub use model::{FlightModel, StepOutcome};
pub use stall::{BasicStall, EnhancedStall};
pub use traits::{PostStall, StallModel};
