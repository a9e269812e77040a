use crate::ui::mvi::Reducer;
use crate::ui::nav::intent::NavIntent;
use crate::ui::nav::state::{NavState, Route};

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::ResetToLogin => NavState {
                stack: vec![Route::Login],
            },
            NavIntent::ResetToProducts => NavState {
                stack: vec![Route::Products],
            },
            NavIntent::PushDetails { product } => {
                if state.current() == &Route::Products {
                    let mut stack = state.stack;
                    stack.push(Route::Details(product));
                    NavState { stack }
                } else {
                    state
                }
            }
            NavIntent::Pop => {
                if state.stack.len() > 1 {
                    let mut stack = state.stack;
                    stack.pop();
                    NavState { stack }
                } else {
                    state
                }
            }
        }
    }
}
