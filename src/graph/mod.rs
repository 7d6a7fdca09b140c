pub mod schedule_dag;
pub mod sequencer;

pub use schedule_dag::ScheduleDag;
pub use sequencer::Sequencer;
