pub mod badge;
pub mod interaction_kind;
pub mod weights;
