pub mod backward_pass;
pub mod critical_path;
pub mod forward_pass;
pub mod timing;

pub use backward_pass::BackwardPass;
pub use critical_path::{CriticalPath, CriticalPathExtractor};
pub use forward_pass::ForwardPass;
pub use timing::{ActivityTiming, activity_timings};
