//! Effects - side effects declared by the reducer

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    LoadCollection { limit: usize },
    LoadDetail { name: String },
    /// Detail screen was left; drop any in-flight detail load
    CancelDetail,
}
