/// Generation index of a [`crate::tree::Segment`].
///
/// The trunk is generation `0`; each recursive split adds one.
pub type Depth = u32;
