use crate::scheduler::structs::checkpoint_report::CheckpointReport;

impl CheckpointReport {
    pub fn is_complete(&self) -> bool
    {
        self.history_written && self.current_written && self.visitors_written
    }

    pub fn failed_writes(&self) -> usize
    {
        [self.history_written, self.current_written, self.visitors_written]
            .iter()
            .filter(|written| !**written)
            .count()
    }
}
