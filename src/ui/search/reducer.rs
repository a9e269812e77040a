use crate::ui::mvi::Reducer;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::state::SearchBoxState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchBoxState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut text = state.text;
        match intent {
            SearchIntent::Input { ch } => text.push(ch),
            SearchIntent::Backspace => {
                text.pop();
            }
            SearchIntent::Clear => text.clear(),
        }
        SearchBoxState { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> SearchBoxState {
        SearchBoxState {
            text: text.to_string(),
        }
    }

    #[test]
    fn input_appends_characters() {
        let mut state = SearchBoxState::default();
        for ch in "phone".chars() {
            state = SearchReducer::reduce(state, SearchIntent::Input { ch });
        }
        assert_eq!(state, typed("phone"));
    }

    #[test]
    fn backspace_removes_whole_characters() {
        let state = SearchReducer::reduce(typed("café"), SearchIntent::Backspace);
        assert_eq!(state, typed("caf"));
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let state = SearchReducer::reduce(SearchBoxState::default(), SearchIntent::Backspace);
        assert_eq!(state, SearchBoxState::default());
    }

    #[test]
    fn clear_empties_the_box() {
        let state = SearchReducer::reduce(typed("red shoe"), SearchIntent::Clear);
        assert_eq!(state, SearchBoxState::default());
    }
}
