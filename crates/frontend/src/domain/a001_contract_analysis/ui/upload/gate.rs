//! Upload widget logic that does not touch the DOM

use contracts::domain::a001_contract_analysis::upload::{
    UploadCandidate, UploadPolicy, UploadRejection,
};

/// Drag events that affect the drop zone highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    Leave,
    Drop,
}

/// "Drag active" highlight; styling only, never consulted by validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    active: bool,
}

impl DragState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn apply(&mut self, phase: DragPhase) {
        self.active = matches!(phase, DragPhase::Enter | DragPhase::Over);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome<F> {
    /// Nothing to do: no file, or an analysis is already running
    Ignored,
    Accepted(F, UploadCandidate),
    Rejected(UploadRejection),
}

/// Take the first file of a pick/drop and validate it.
///
/// `describe` turns the platform file into an [`UploadCandidate`]; the file
/// itself is handed back on acceptance so the caller can submit it.
pub fn select_first<F, I, D>(
    files: I,
    is_loading: bool,
    policy: &UploadPolicy,
    describe: D,
) -> UploadOutcome<F>
where
    I: IntoIterator<Item = F>,
    D: Fn(&F) -> UploadCandidate,
{
    if is_loading {
        return UploadOutcome::Ignored;
    }
    let Some(file) = files.into_iter().next() else {
        return UploadOutcome::Ignored;
    };
    let candidate = describe(&file);
    match policy.validate(&candidate) {
        Ok(()) => UploadOutcome::Accepted(file, candidate),
        Err(rejection) => UploadOutcome::Rejected(rejection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_contract_analysis::upload::{BYTES_PER_MB, MIME_PDF};

    fn pdf(name: &str, size: u64) -> UploadCandidate {
        UploadCandidate::new(name, MIME_PDF, size)
    }

    #[test]
    fn test_drag_state_transitions() {
        let mut drag = DragState::default();
        drag.apply(DragPhase::Enter);
        assert!(drag.is_active());
        drag.apply(DragPhase::Over);
        assert!(drag.is_active());
        drag.apply(DragPhase::Leave);
        assert!(!drag.is_active());
        drag.apply(DragPhase::Over);
        drag.apply(DragPhase::Drop);
        assert!(!drag.is_active());
    }

    #[test]
    fn test_only_first_file_is_taken() {
        let files = vec![pdf("first.pdf", 1024), pdf("second.pdf", 1024)];
        let outcome = select_first(files, false, &UploadPolicy::default(), Clone::clone);
        match outcome {
            UploadOutcome::Accepted(_, candidate) => assert_eq!(candidate.name, "first.pdf"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_callback_runs_once_per_action() {
        let policy = UploadPolicy::default();
        let mut selected = Vec::new();
        let actions = vec![
            vec![pdf("a.pdf", 1024), pdf("b.pdf", 1024)],
            vec![pdf("c.pdf", 11 * BYTES_PER_MB)],
            vec![],
            vec![pdf("d.pdf", 2048)],
        ];
        for files in actions {
            if let UploadOutcome::Accepted(file, _) =
                select_first(files, false, &policy, Clone::clone)
            {
                selected.push(file.name);
            }
        }
        assert_eq!(selected, vec!["a.pdf", "d.pdf"]);
    }

    #[test]
    fn test_rejection_is_reported() {
        let outcome = select_first(
            vec![pdf("big.pdf", 11 * BYTES_PER_MB)],
            false,
            &UploadPolicy::default(),
            Clone::clone,
        );
        assert_eq!(
            outcome,
            UploadOutcome::Rejected(UploadRejection::TooLarge { limit_mb: 10 })
        );
    }

    #[test]
    fn test_ignored_while_loading_or_empty() {
        let policy = UploadPolicy::default();
        assert_eq!(
            select_first(vec![pdf("a.pdf", 1)], true, &policy, Clone::clone),
            UploadOutcome::Ignored
        );
        assert_eq!(
            select_first(Vec::<UploadCandidate>::new(), false, &policy, Clone::clone),
            UploadOutcome::Ignored
        );
    }
}
