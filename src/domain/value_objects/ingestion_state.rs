use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngestionStage {
    Validate,
    Store,
    Extract,
    Persist,
}

impl IngestionStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            IngestionStage::Validate => "validate",
            IngestionStage::Store => "store",
            IngestionStage::Extract => "extract",
            IngestionStage::Persist => "persist",
        }
    }
}

impl std::fmt::Display for IngestionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress of a single upload through the ingestion pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngestionState {
    Validating,
    Storing,
    Extracting,
    Persisting,
    Done,
    Failed { stage: IngestionStage, cause: String },
}

impl IngestionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, IngestionState::Done | IngestionState::Failed { .. })
    }

    /// The stage currently being worked on, if any.
    pub fn stage(&self) -> Option<IngestionStage> {
        match self {
            IngestionState::Validating => Some(IngestionStage::Validate),
            IngestionState::Storing => Some(IngestionStage::Store),
            IngestionState::Extracting => Some(IngestionStage::Extract),
            IngestionState::Persisting => Some(IngestionStage::Persist),
            IngestionState::Done | IngestionState::Failed { .. } => None,
        }
    }

    pub fn can_transition_to(&self, next: &IngestionState) -> bool {
        match (self, next) {
            (IngestionState::Validating, IngestionState::Storing) => true,
            (IngestionState::Storing, IngestionState::Extracting) => true,
            (IngestionState::Extracting, IngestionState::Persisting) => true,
            (IngestionState::Persisting, IngestionState::Done) => true,
            (current, IngestionState::Failed { stage, .. }) => current.stage() == Some(*stage),
            _ => false,
        }
    }

    /// Moves to `next` if the pipeline allows it.
    pub fn transition_to(&self, next: IngestionState) -> Result<IngestionState, String> {
        if self.can_transition_to(&next) {
            Ok(next)
        } else {
            Err(format!("Illegal ingestion transition {} -> {}", self, next))
        }
    }

    /// Moves to the next stage. Terminal states stay where they are.
    pub fn advance(&self) -> Result<IngestionState, String> {
        if self.is_terminal() {
            return Err(format!("Cannot advance from terminal state {}", self));
        }

        let next = match self {
            IngestionState::Validating => IngestionState::Storing,
            IngestionState::Storing => IngestionState::Extracting,
            IngestionState::Extracting => IngestionState::Persisting,
            _ => IngestionState::Done,
        };
        self.transition_to(next)
    }

    pub fn fail(&self, cause: impl Into<String>) -> Result<IngestionState, String> {
        let stage = self
            .stage()
            .ok_or_else(|| format!("Cannot fail from terminal state {}", self))?;
        self.transition_to(IngestionState::Failed {
            stage,
            cause: cause.into(),
        })
    }
}

impl std::fmt::Display for IngestionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestionState::Validating => write!(f, "validating"),
            IngestionState::Storing => write!(f, "storing"),
            IngestionState::Extracting => write!(f, "extracting"),
            IngestionState::Persisting => write!(f, "persisting"),
            IngestionState::Done => write!(f, "done"),
            IngestionState::Failed { stage, cause } => write!(f, "failed at {}: {}", stage, cause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut state = IngestionState::Validating;
        let mut seen = vec![state.clone()];
        while !state.is_terminal() {
            let next = state.advance().unwrap();
            assert!(state.can_transition_to(&next));
            state = next;
            seen.push(state.clone());
        }

        assert_eq!(
            seen,
            vec![
                IngestionState::Validating,
                IngestionState::Storing,
                IngestionState::Extracting,
                IngestionState::Persisting,
                IngestionState::Done,
            ]
        );
    }

    #[test]
    fn test_failure_records_stage() {
        let failed = IngestionState::Extracting.fail("bad xref").unwrap();
        assert_eq!(
            failed,
            IngestionState::Failed {
                stage: IngestionStage::Extract,
                cause: "bad xref".to_string()
            }
        );
        assert!(failed.is_terminal());
        assert!(IngestionState::Extracting.can_transition_to(&failed));
        assert!(!IngestionState::Storing.can_transition_to(&failed));
    }

    #[test]
    fn test_transition_to_rejects_skipped_stages() {
        assert!(IngestionState::Validating.transition_to(IngestionState::Persisting).is_err());
        assert!(
            IngestionState::Storing
                .transition_to(IngestionState::Failed {
                    stage: IngestionStage::Persist,
                    cause: "wrong stage".to_string(),
                })
                .is_err()
        );
        assert_eq!(
            IngestionState::Persisting.transition_to(IngestionState::Done),
            Ok(IngestionState::Done)
        );
    }

    #[test]
    fn test_terminal_states_are_final() {
        assert!(IngestionState::Done.advance().is_err());
        assert!(IngestionState::Done.fail("late").is_err());
        assert!(!IngestionState::Storing.can_transition_to(&IngestionState::Done));
    }
}
