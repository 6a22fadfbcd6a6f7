pub mod grouping;
pub mod reconciler;
