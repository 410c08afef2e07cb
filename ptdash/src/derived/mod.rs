mod derivation_error;
mod derive_ops;
mod event_annotation;
mod period_key;

pub use derivation_error::DerivationError;
pub use derive_ops::{
    assign_sequence, build_period_key, event_markers, normalize_width, Sequenced,
};
pub use event_annotation::EventAnnotation;
pub use period_key::PeriodKey;
