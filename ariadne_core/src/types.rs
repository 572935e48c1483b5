pub type NodeId = usize;
pub type ArcId = usize;

/// Speed in kilometers per hour.
pub type Kmh = u32;

/// Travel time in seconds.
pub type Seconds = f64;
