pub mod normalize;
pub mod prune;

pub use normalize::{FieldKind, NormalizeReport, normalize_store};
pub use prune::prune_fields;
