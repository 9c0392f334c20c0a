// Result models produced by the indicator engine
// These are plain data, serializable for whichever chart consumes them

pub mod annotation;

// Re-export key types for convenience
pub use annotation::{Annotation, AnnotationSet, RsiAnnotations, Signal, Zone, ZoneKind};
