use serde::{Deserialize, Serialize};

/// Weight contributed by one interaction of each kind when aggregating an
/// actor's history. An order signals much stronger interest than a click.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InteractionWeights {
    pub order: f64,
    pub like: f64,
    pub click: f64,
}

impl Default for InteractionWeights {
    fn default() -> Self {
        Self {
            order: 0.6,
            like: 0.3,
            click: 0.1,
        }
    }
}
