//! Progress observation hooks

/// Observational callbacks emitted by the blend stream controller.
///
/// Purely a side channel for progress display: the engine's output and
/// return value are identical whether or not an observer is attached.
pub trait ProgressObserver {
    /// A blend was accepted and written to the sink
    fn blend_found(&self, blend: &str, total: usize) {
        let _ = (blend, total);
    }

    /// An outer-loop word finished scanning against the whole second sequence
    fn first_word_done(&self, done: usize, total: usize) {
        let _ = (done, total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;
    impl ProgressObserver for Silent {}

    #[test]
    fn default_methods_are_no_ops() {
        let observer = Silent;
        observer.blend_found("revengeance", 1);
        observer.first_word_done(1, 10);
    }
}
