//! Widget state as an explicit reducer: every user action is a pure
//! transition producing a new snapshot, so the submit/clear/result races are
//! decided in one place instead of scattered across event handlers.

use std::rc::Rc;

use yew::prelude::*;

use super::classify::{Category, Solution};
use crate::config;

/// Validation failures surfaced through the toast sink. Classification never
/// runs on a rejected submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemError {
    Empty,
    TooShort,
}

impl ProblemError {
    pub fn message(self) -> &'static str {
        match self {
            ProblemError::Empty => "Please describe your problem first",
            ProblemError::TooShort => {
                "Please add a bit more detail - at least 20 characters"
            }
        }
    }
}

/// Reject empty and too-short submissions, measured on the trimmed text.
pub fn validate_problem(text: &str) -> Result<(), ProblemError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ProblemError::Empty);
    }
    if trimmed.chars().count() < config::MIN_PROBLEM_CHARS {
        return Err(ProblemError::TooShort);
    }
    Ok(())
}

/// One snapshot of the solver widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolverState {
    pub problem: String,
    pub category: Option<Category>,
    pub solution: Option<Solution>,
    pub analyzing: bool,
    /// Bumped on every submit and clear. A delayed result carries the
    /// generation of the submit that spawned it; stale ones are dropped.
    pub generation: u32,
}

pub enum SolverAction {
    EditProblem(String),
    ToggleCategory(Category),
    Submit,
    AnalysisReady { generation: u32, solution: Solution },
    Clear,
}

impl Reducible for SolverState {
    type Action = SolverAction;

    fn reduce(self: Rc<Self>, action: SolverAction) -> Rc<Self> {
        match action {
            SolverAction::EditProblem(problem) => Rc::new(SolverState {
                problem,
                ..(*self).clone()
            }),
            SolverAction::ToggleCategory(category) => {
                let category = if self.category == Some(category) {
                    None
                } else {
                    Some(category)
                };
                Rc::new(SolverState {
                    category,
                    ..(*self).clone()
                })
            }
            SolverAction::Submit => {
                // One outstanding analysis at a time; extra submits are ignored.
                if self.analyzing {
                    return self;
                }
                Rc::new(SolverState {
                    analyzing: true,
                    generation: self.generation + 1,
                    ..(*self).clone()
                })
            }
            SolverAction::AnalysisReady {
                generation,
                solution,
            } => {
                // A clear happened while this result was pending.
                if !self.analyzing || generation != self.generation {
                    return self;
                }
                Rc::new(SolverState {
                    solution: Some(solution),
                    analyzing: false,
                    ..(*self).clone()
                })
            }
            SolverAction::Clear => Rc::new(SolverState {
                generation: self.generation + 1,
                ..SolverState::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::classify::classify;

    fn reduce(state: SolverState, action: SolverAction) -> SolverState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn sample_solution() -> Solution {
        classify("I need help with my budget and debt", None)
    }

    #[test]
    fn whitespace_only_input_is_rejected_as_empty() {
        assert_eq!(validate_problem("   \n\t  "), Err(ProblemError::Empty));
        assert_eq!(validate_problem(""), Err(ProblemError::Empty));
    }

    #[test]
    fn short_input_is_rejected_after_trimming() {
        assert_eq!(
            validate_problem("  too short      "),
            Err(ProblemError::TooShort)
        );
        // 19 chars trimmed.
        assert_eq!(
            validate_problem("exactly nineteen ch"),
            Err(ProblemError::TooShort)
        );
        assert_eq!(validate_problem("exactly twenty chars"), Ok(()));
    }

    #[test]
    fn submit_marks_analyzing_and_bumps_generation() {
        let state = reduce(SolverState::default(), SolverAction::Submit);
        assert!(state.analyzing);
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn submit_while_analyzing_is_ignored() {
        let state = reduce(SolverState::default(), SolverAction::Submit);
        let again = reduce(state.clone(), SolverAction::Submit);
        assert_eq!(again, state);
    }

    #[test]
    fn matching_generation_result_lands() {
        let state = reduce(SolverState::default(), SolverAction::Submit);
        let state = reduce(
            state,
            SolverAction::AnalysisReady {
                generation: 1,
                solution: sample_solution(),
            },
        );
        assert!(!state.analyzing);
        assert_eq!(state.solution, Some(sample_solution()));
    }

    #[test]
    fn stale_generation_result_is_dropped() {
        let state = reduce(SolverState::default(), SolverAction::Submit);
        let state = reduce(state, SolverAction::Clear);
        let state = reduce(
            state.clone(),
            SolverAction::AnalysisReady {
                generation: 1,
                solution: sample_solution(),
            },
        );
        assert_eq!(state.solution, None);
        assert!(!state.analyzing);
    }

    #[test]
    fn clear_resets_the_form_and_cancels_pending_analysis() {
        let mut state = SolverState::default();
        state.problem = "I need help with my budget and debt".to_string();
        state.category = Some(Category::Finance);
        let state = reduce(state, SolverAction::Submit);
        let state = reduce(state, SolverAction::Clear);
        assert_eq!(state.problem, "");
        assert_eq!(state.category, None);
        assert_eq!(state.solution, None);
        assert!(!state.analyzing);
        assert_eq!(state.generation, 2);
    }

    #[test]
    fn toggling_the_same_category_twice_deselects_it() {
        let state = reduce(
            SolverState::default(),
            SolverAction::ToggleCategory(Category::Health),
        );
        assert_eq!(state.category, Some(Category::Health));
        let state = reduce(state, SolverAction::ToggleCategory(Category::Health));
        assert_eq!(state.category, None);
    }

    #[test]
    fn toggling_a_different_category_replaces_the_selection() {
        let state = reduce(
            SolverState::default(),
            SolverAction::ToggleCategory(Category::Health),
        );
        let state = reduce(state, SolverAction::ToggleCategory(Category::Career));
        assert_eq!(state.category, Some(Category::Career));
    }

    #[test]
    fn editing_preserves_the_rest_of_the_state() {
        let state = reduce(
            SolverState::default(),
            SolverAction::ToggleCategory(Category::Finance),
        );
        let state = reduce(
            state,
            SolverAction::EditProblem("my budget never survives the month".to_string()),
        );
        assert_eq!(state.problem, "my budget never survives the month");
        assert_eq!(state.category, Some(Category::Finance));
    }
}
