//! Tests for scheduling and frame progress bars

#[cfg(test)]
mod tests {
    use brickbond::io::progress::ProgressManager;

    // Tests the full stage lifecycle runs without a terminal
    // Verified by finishing bars that were never started
    #[test]
    fn test_progress_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.start_schedule(352);
        pm.update_schedule(120, 4);
        pm.update_schedule(352, 11);
        pm.finish_schedule();
        pm.start_frames(10);
        pm.update_frames(5);
        pm.finish();
    }

    // Tests updates before a stage starts are ignored
    // Verified by creating bars lazily on update
    #[test]
    fn test_updates_without_stage() {
        let pm = ProgressManager::default();
        pm.update_schedule(1, 1);
        pm.update_frames(1);
        pm.finish_schedule();
        pm.finish();
    }
}
